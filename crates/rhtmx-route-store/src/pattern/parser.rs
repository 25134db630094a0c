/// Pattern parsing: pattern string → token sequence
///
/// Pure functional parsing of Express-style path patterns.
/// All functions are **pure**: same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{ParamSpec, Token};
use crate::error::{Result, RouteStoreError};
use crate::params::ParamKey;

// Alternatives, in capture-group order:
// 1. escaped character         `\x`
// 2. optional prefix           `/` or `.`
// 3. parameter name            `:name` (ASCII word characters)
// 4. custom pattern of a name  `:name(...)`
// 5. unnamed group             `(...)`
// 6. modifier                  `?`, `*`, `+`
// 7. bare wildcard             `*`
static PATH_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\\.)|([/.])?(?:(?::([0-9A-Za-z_]+)(?:\(((?:\\.|[^\\()])+)\))?|\(((?:\\.|[^\\()])+)\))([+*?])?|(\*))",
    )
    .unwrap()
});

const DEFAULT_DELIMITER: char = '/';

/// Internal state accumulator for fold-based parsing
///
/// All mutations are local to the fold accumulator.
#[derive(Default)]
struct ParseState {
    tokens: Vec<Token>,
    /// Literal text not yet flushed into a token
    path: String,
    /// Byte offset up to which the pattern has been consumed
    index: usize,
    /// Next position for an unnamed parameter
    key: usize,
}

impl ParseState {
    /// Appends raw pattern text, rejecting stray parentheses
    fn with_text(mut self, pattern: &str, end: usize) -> Result<Self> {
        let text = &pattern[self.index..end];
        if let Some((offset, found)) = text.char_indices().find(|(_, c)| matches!(c, '(' | ')')) {
            return Err(RouteStoreError::UnmatchedParen {
                pattern: pattern.to_string(),
                offset: self.index + offset,
                found,
            });
        }
        self.path.push_str(text);
        self.index = end;
        Ok(self)
    }

    fn flush_literal(&mut self) {
        if !self.path.is_empty() {
            self.tokens.push(Token::Literal(std::mem::take(&mut self.path)));
        }
    }

    /// Adds a parameter token from one grammar match
    fn with_param(mut self, pattern: &str, caps: &Captures<'_>) -> Self {
        let next = pattern[self.index..].chars().next();
        let prefix = caps.get(2).and_then(|m| m.as_str().chars().next());
        let modifier = caps.get(6).map(|m| m.as_str());
        let asterisk = caps.get(7).is_some();

        self.flush_literal();

        let delimiter = prefix.unwrap_or(DEFAULT_DELIMITER);
        let key = match caps.get(3) {
            Some(name) => ParamKey::Named(name.as_str().to_string()),
            None => {
                let position = self.key;
                self.key += 1;
                ParamKey::Positional(position)
            }
        };
        let value_pattern = caps
            .get(4)
            .or_else(|| caps.get(5))
            .map(|m| escape_group(m.as_str()))
            .unwrap_or_else(|| default_pattern(asterisk, delimiter));

        self.tokens.push(Token::Param(ParamSpec {
            key,
            prefix: prefix.map(String::from).unwrap_or_default(),
            delimiter,
            optional: matches!(modifier, Some("?") | Some("*")),
            repeat: matches!(modifier, Some("+") | Some("*")),
            partial: matches!((prefix, next), (Some(p), Some(n)) if p != n),
            asterisk,
            pattern: value_pattern,
        }));
        self
    }

    /// Processes one grammar match: (state, match) -> new state
    fn process_match(self, pattern: &str, caps: Captures<'_>) -> Result<Self> {
        let Some(whole) = caps.get(0) else {
            return Ok(self);
        };
        let mut state = self.with_text(pattern, whole.start())?;
        state.index = whole.end();

        match caps.get(1) {
            // Escaped character: keep it literally, without the backslash
            Some(escaped) => {
                state.path.push_str(&escaped.as_str()[1..]);
                Ok(state)
            }
            None => Ok(state.with_param(pattern, &caps)),
        }
    }

    fn finalize(self, pattern: &str) -> Result<Vec<Token>> {
        let mut state = self.with_text(pattern, pattern.len())?;
        state.flush_literal();
        Ok(state.tokens)
    }
}

fn default_pattern(asterisk: bool, delimiter: char) -> String {
    if asterisk {
        ".*".to_string()
    } else {
        format!("[^{}]+?", regex::escape(&delimiter.to_string()))
    }
}

/// Rewrites a custom group pattern for the matcher
///
/// `= ! : $ /` are taken literally, and `\d`, `\w` (with their negations)
/// only match ASCII characters. Other escapes are kept as written.
fn escape_group(group: &str) -> String {
    let mut escaped = String::with_capacity(group.len());
    let mut chars = group.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('d') => escaped.push_str("[0-9]"),
                Some('D') => escaped.push_str("[^0-9]"),
                Some('w') => escaped.push_str("[0-9A-Za-z_]"),
                Some('W') => escaped.push_str("[^0-9A-Za-z_]"),
                Some(next) => {
                    escaped.push('\\');
                    escaped.push(next);
                }
                None => escaped.push('\\'),
            },
            '=' | '!' | ':' | '$' | '/' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Parses a pattern into its token sequence (pure function)
///
/// # Syntax
///
/// - `:name` - named parameter, one path segment by default
/// - `:name(\d+)` - named parameter with a custom pattern
/// - `(\d+)` - unnamed parameter, keyed by position from 0
/// - `*` - unnamed wildcard matching anything, including `/`
/// - `?` / `*` / `+` after a parameter - optional / zero-or-more / one-or-more
/// - `\x` - the character `x` taken literally
///
/// A `/` or `.` directly before a parameter becomes the parameter's prefix
/// and disappears together with it when the parameter is optional.
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::pattern::{parse, Token};
/// use rhtmx_route_store::ParamKey;
///
/// let tokens = parse("/files/:name.:ext?").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].as_literal(), Some("/files"));
///
/// let ext = tokens[2].as_param().unwrap();
/// assert_eq!(ext.key, ParamKey::Named("ext".into()));
/// assert_eq!(ext.prefix, ".");
/// assert!(ext.optional);
/// ```
///
/// # Errors
///
/// A `(` or `)` outside a well-formed group (for example `/a(b` or `/()`)
/// yields [`RouteStoreError::UnmatchedParen`].
pub fn parse(pattern: &str) -> Result<Vec<Token>> {
    PATH_REGEXP
        .captures_iter(pattern)
        .try_fold(ParseState::default(), |state, caps| {
            state.process_match(pattern, caps)
        })?
        .finalize(pattern)
}
