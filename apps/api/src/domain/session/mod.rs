pub mod listener;
pub mod state;
