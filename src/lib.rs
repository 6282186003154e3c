pub mod codegen;
pub mod config;
pub mod debug;
pub mod error;
pub mod family;
pub mod grammar;
pub mod output;

pub use codegen::*;
pub use config::*;
pub use error::{AstgenError, ErrorKind, Result};
pub use family::*;
pub use output::*;
