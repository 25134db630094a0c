/// Regex compilation: token sequence → anchored regular expression
///
/// The expression always matches the whole path (anchored at both ends) and
/// is case-sensitive. Each parameter contributes exactly one capture group,
/// in token order, so capture `i + 1` holds the value of the `i`-th
/// parameter spec.

use regex::Regex;

use super::{ParamSpec, Token};
use crate::error::{Result, RouteStoreError};

const DELIMITER: &str = "/";

/// Builds the regular expression source for a token sequence (pure function)
///
/// With `strict == false` a trailing `/` in the pattern is dropped and an
/// optional `/` is accepted at the end of the path instead.
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::pattern::{compiler::tokens_to_source, parse};
///
/// let tokens = parse("/users/:id").unwrap();
/// assert_eq!(tokens_to_source(&tokens, false), "^/users/((?:[^/]+?))(?:/)?$");
/// assert_eq!(tokens_to_source(&tokens, true), "^/users/((?:[^/]+?))$");
/// ```
pub fn tokens_to_source(tokens: &[Token], strict: bool) -> String {
    let mut route: String = tokens.iter().map(token_source).collect();

    if !strict {
        if route.ends_with(DELIMITER) {
            route.truncate(route.len() - DELIMITER.len());
        }
        route.push_str("(?:/)?");
    }

    format!("^{}$", route)
}

fn token_source(token: &Token) -> String {
    match token {
        Token::Literal(text) => regex::escape(text),
        Token::Param(spec) => param_source(spec),
    }
}

fn param_source(spec: &ParamSpec) -> String {
    let prefix = regex::escape(&spec.prefix);
    let mut capture = format!("(?:{})", spec.pattern);

    if spec.repeat {
        capture = format!("{capture}(?:{prefix}{capture})*");
    }

    match (spec.optional, spec.partial) {
        (true, false) => format!("(?:{prefix}({capture}))?"),
        (true, true) => format!("{prefix}({capture})?"),
        (false, _) => format!("{prefix}({capture})"),
    }
}

/// Compiles a token sequence into its matcher
///
/// `pattern` is only used to report errors.
pub fn tokens_to_regex(pattern: &str, tokens: &[Token], strict: bool) -> Result<Regex> {
    let source = tokens_to_source(tokens, strict);
    Regex::new(&source).map_err(|source| RouteStoreError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse;

    fn compile(pattern: &str) -> Regex {
        tokens_to_regex(pattern, &parse(pattern).unwrap(), false).unwrap()
    }

    #[test]
    fn test_static_source() {
        let tokens = parse("foo/bar").unwrap();
        assert_eq!(tokens_to_source(&tokens, false), "^foo/bar(?:/)?$");
        assert_eq!(tokens_to_source(&tokens, true), "^foo/bar$");
    }

    #[test]
    fn test_root_source() {
        let tokens = parse("/").unwrap();
        assert_eq!(tokens_to_source(&tokens, false), "^(?:/)?$");
        assert_eq!(tokens_to_source(&tokens, true), "^/$");
    }

    #[test]
    fn test_literal_is_escaped() {
        let re = compile("/file.txt");
        assert!(re.is_match("/file.txt"));
        assert!(!re.is_match("/fileXtxt"));
    }

    #[test]
    fn test_trailing_slash() {
        let re = compile("/about");
        assert!(re.is_match("/about"));
        assert!(re.is_match("/about/"));
        assert!(!re.is_match("/about//"));

        let strict = tokens_to_regex("/about", &parse("/about").unwrap(), true).unwrap();
        assert!(strict.is_match("/about"));
        assert!(!strict.is_match("/about/"));
    }

    #[test]
    fn test_case_sensitive() {
        let re = compile("/Foo");
        assert!(re.is_match("/Foo"));
        assert!(!re.is_match("/foo"));
    }

    #[test]
    fn test_named_capture() {
        let caps = compile("/users/:id").captures("/users/42").unwrap();
        assert_eq!(&caps[1], "42");
        assert!(!compile("/users/:id").is_match("/users/42/posts"));
    }

    #[test]
    fn test_optional_param() {
        let re = compile("/posts/:page?");
        assert!(re.is_match("/posts"));
        assert!(re.is_match("/posts/2"));
        assert!(re.captures("/posts").unwrap().get(1).is_none());
    }

    #[test]
    fn test_partial_optional_keeps_prefix() {
        let re = compile("/:lang?-docs");
        assert!(re.is_match("/en-docs"));
        assert!(re.is_match("/-docs"));
        assert!(!re.is_match("-docs"));
    }

    #[test]
    fn test_repeat_params() {
        let plus = compile("/files/:path+");
        assert_eq!(&plus.captures("/files/a/b/c").unwrap()[1], "a/b/c");
        assert!(!plus.is_match("/files"));

        let star = compile("/files/:path*");
        assert!(star.is_match("/files"));
        assert_eq!(&star.captures("/files/a/b").unwrap()[1], "a/b");
    }

    #[test]
    fn test_asterisk() {
        let caps = compile("/static/*").captures("/static/css/site.css").unwrap();
        assert_eq!(&caps[1], "css/site.css");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let tokens = parse("/:id([)").unwrap();
        let err = tokens_to_regex("/:id([)", &tokens, false).unwrap_err();
        assert!(matches!(err, RouteStoreError::InvalidRegex { .. }));
    }
}
