pub mod registry;

pub use registry::{SessionRegistry, SharedSession};
