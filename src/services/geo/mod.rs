// Sub-modules
pub mod ipapi;

// Re-export public API
pub use ipapi::{GeoClient, strip_empty};
