pub mod engine;
pub mod level;
