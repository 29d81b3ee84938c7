//! Builders that turn raw inputs into namespace layers

pub mod argv;
pub mod env;
pub mod file;

pub use argv::args_layer;
pub use env::env_layer;
pub use file::{file_layer, FileFormat};
