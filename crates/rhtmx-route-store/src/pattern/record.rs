/// The compiled, immutable form of one registered pattern

use regex::{Captures, Regex};

use super::generate::Generator;
use super::{compiler, parser, ParamSpec, Token};
use crate::error::Result;
use crate::params::Params;
use crate::path::trim_ending_slash;

/// A registered pattern
///
/// Created by [`Store::register`](crate::Store::register). The `index` is the
/// record's position in registration order and never changes.
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::{Params, PatternRecord};
///
/// let record = PatternRecord::compile("/users/:id/", 0, false).unwrap();
/// assert_eq!(record.path(), "/users/:id");
/// assert_eq!(record.param_specs().len(), 1);
///
/// let url = record.generate(&Params::new().with("id", "42")).unwrap();
/// assert_eq!(url, "/users/42");
/// ```
#[derive(Debug, Clone)]
pub struct PatternRecord {
    index: usize,
    path: String,
    tokens: Vec<Token>,
    regex: Regex,
    params: Vec<ParamSpec>,
    generator: Generator,
}

impl PatternRecord {
    /// Compiles a pattern (one trailing `/` is removed first)
    pub fn compile(path: &str, index: usize, strict: bool) -> Result<Self> {
        let path = trim_ending_slash(path);
        let tokens = parser::parse(path)?;
        let regex = compiler::tokens_to_regex(path, &tokens, strict)?;
        let generator = Generator::compile(path, &tokens)?;
        let params = tokens.iter().filter_map(Token::as_param).cloned().collect();

        Ok(Self {
            index,
            path: path.to_string(),
            tokens,
            regex,
            params,
            generator,
        })
    }

    /// Position in registration order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pattern string, without its trailing `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parameter specs, aligned with the matcher's capture groups
    pub fn param_specs(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Literal text the pattern starts with, empty if it starts with a parameter
    pub fn constant_prefix(&self) -> &str {
        self.tokens
            .first()
            .and_then(Token::as_literal)
            .unwrap_or("")
    }

    /// Runs the matcher against a full path
    pub fn captures<'p>(&self, path: &'p str) -> Option<Captures<'p>> {
        self.regex.captures(path)
    }

    /// Builds a concrete path from parameter values
    pub fn generate(&self, params: &Params) -> Result<String> {
        self.generator.generate(params)
    }
}

impl PartialEq for PatternRecord {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.path == other.path
            && self.tokens == other.tokens
            && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for PatternRecord {}
