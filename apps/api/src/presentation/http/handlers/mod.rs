pub mod cities;
pub mod dashboard;
pub mod docs;
pub mod health;
pub mod risk;
pub mod sessions;
pub mod wards;
pub mod ws;
