mod address;
mod classify;
pub mod error;
pub mod types;

pub use address::extract_address;
pub use classify::classify_line;
pub use error::*;
pub use types::*;
