//! Scope aggregate: view configuration and the viewport it governs.

pub mod config;
pub mod viewport;

pub use config::*;
pub use viewport::*;
