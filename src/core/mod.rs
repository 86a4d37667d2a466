pub mod error;
pub mod logger;
pub mod lookup;
pub mod report;
pub mod target;

pub use error::*;
pub use lookup::*;
pub use report::*;
pub use target::*;
