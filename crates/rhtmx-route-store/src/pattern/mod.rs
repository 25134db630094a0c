/// Pattern module: compiling path patterns into matchable records
///
/// Contains the pieces that turn a pattern string such as `/users/:id(\d+)?`
/// into a [`PatternRecord`]:
/// - `parser` - pattern string → token sequence
/// - `compiler` - token sequence → anchored regular expression
/// - `generate` - parameters → concrete path
/// - `record` - the immutable compiled pattern held by the store

pub mod compiler;
pub mod generate;
pub mod parser;
pub mod record;

use crate::params::ParamKey;

pub use compiler::tokens_to_regex;
pub use parser::parse;
pub use record::PatternRecord;

/// One element of a compiled pattern
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::pattern::{parse, Token};
///
/// let tokens = parse("/users/:id").unwrap();
/// assert!(matches!(&tokens[0], Token::Literal(text) if text == "/users"));
/// assert!(matches!(&tokens[1], Token::Param(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text matched verbatim
    Literal(String),
    /// Parameter or wildcard placeholder
    Param(ParamSpec),
}

impl Token {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(text) => Some(text),
            Token::Param(_) => None,
        }
    }

    pub fn as_param(&self) -> Option<&ParamSpec> {
        match self {
            Token::Param(spec) => Some(spec),
            Token::Literal(_) => None,
        }
    }
}

/// Describes one parameter placeholder
///
/// The parameter list of a record is aligned 1:1 with the capture groups of its
/// regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// `Named` for `:name`, `Positional` for `(...)` groups and `*`
    pub key: ParamKey,
    /// `/` or `.` directly before the placeholder, empty otherwise
    pub prefix: String,
    /// Separator between repeated values (the prefix, or `/`)
    pub delimiter: char,
    /// `?` or `*` modifier
    pub optional: bool,
    /// `+` or `*` modifier
    pub repeat: bool,
    /// The prefix is followed by more text that is not a second prefix
    pub partial: bool,
    /// Bare `*` wildcard
    pub asterisk: bool,
    /// Regular expression matching one value
    pub pattern: String,
}
