pub mod checker;
pub mod cli;
pub mod error;
pub mod extract;
pub mod output;
pub mod resolve;
pub mod scanner;

pub use error::{LinkAuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
