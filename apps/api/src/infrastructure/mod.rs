pub mod catalog;
pub mod notifications;
pub mod providers;
pub mod session;
