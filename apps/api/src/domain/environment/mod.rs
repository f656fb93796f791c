pub mod provider;
pub mod sample;
