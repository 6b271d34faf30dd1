pub mod app;
pub mod core;

pub use crate::core::version::BuildInfo;
