//! Core definitions (error types and argument checks), relied upon by all sift-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
