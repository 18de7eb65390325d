//! Query Parser
//!
//! A hand-written recursive descent parser with precedence climbing for
//! WHERE conditions.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::{ParseError, SyntaxError};
pub use parser::{Parser, check_length, parse, parse_with_options};
