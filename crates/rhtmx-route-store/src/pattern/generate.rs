/// Path generation: parameters → concrete path
///
/// The inverse of matching. Values are percent-encoded and checked against
/// the pattern of their parameter before being spliced into the path.

use regex::Regex;

use super::{ParamSpec, Token};
use crate::error::{Result, RouteStoreError};
use crate::params::Params;

#[derive(Debug, Clone)]
enum Part {
    Literal(String),
    Param { spec: ParamSpec, validator: Regex },
}

/// Compiled path generator for one pattern
#[derive(Debug, Clone)]
pub struct Generator {
    parts: Vec<Part>,
}

impl Generator {
    /// Prepares a generator, compiling one validator per parameter
    pub fn compile(pattern: &str, tokens: &[Token]) -> Result<Self> {
        let parts = tokens
            .iter()
            .map(|token| match token {
                Token::Literal(text) => Ok(Part::Literal(text.clone())),
                Token::Param(spec) => Regex::new(&format!("^(?:{})$", spec.pattern))
                    .map(|validator| Part::Param {
                        spec: spec.clone(),
                        validator,
                    })
                    .map_err(|source| RouteStoreError::InvalidRegex {
                        pattern: pattern.to_string(),
                        source,
                    }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { parts })
    }

    /// Expands the pattern with the given parameter values
    ///
    /// - Required parameters must be present.
    /// - Optional parameters may be missing; a partial one still emits its prefix.
    /// - Repeated parameters are split on their delimiter and re-joined.
    /// - Wildcard (`*`) values keep their `/` separators.
    pub fn generate(&self, params: &Params) -> Result<String> {
        let mut path = String::new();

        for part in &self.parts {
            let (spec, validator) = match part {
                Part::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                Part::Param { spec, validator } => (spec, validator),
            };

            let Some(value) = params.get(&spec.key) else {
                if !spec.optional {
                    return Err(RouteStoreError::MissingParam(spec.key.clone()));
                }
                if spec.partial {
                    path.push_str(&spec.prefix);
                }
                continue;
            };

            if spec.repeat {
                let values: Vec<&str> = value
                    .split(spec.delimiter)
                    .filter(|v| !v.is_empty())
                    .collect();

                if values.is_empty() {
                    if spec.optional {
                        continue;
                    }
                    return Err(RouteStoreError::EmptyParam(spec.key.clone()));
                }

                for (i, value) in values.into_iter().enumerate() {
                    let segment = encode_value(value, spec.asterisk);
                    check(spec, validator, &segment)?;
                    if i == 0 {
                        path.push_str(&spec.prefix);
                    } else {
                        path.push(spec.delimiter);
                    }
                    path.push_str(&segment);
                }
            } else {
                let segment = encode_value(value, spec.asterisk);
                check(spec, validator, &segment)?;
                path.push_str(&spec.prefix);
                path.push_str(&segment);
            }
        }

        Ok(path)
    }
}

// Sub-delimiters and `:` `@` are valid inside a path segment
const SEGMENT_SAFE: &str = "-_.!~*'();,:@&=+$";

/// Percent-encodes everything a path segment cannot hold verbatim
///
/// Wildcard values keep their `/` separators.
fn encode_value(value: &str, asterisk: bool) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for c in value.chars() {
        if c.is_ascii_alphanumeric() || SEGMENT_SAFE.contains(c) || (asterisk && c == '/') {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}

fn check(spec: &ParamSpec, validator: &Regex, segment: &str) -> Result<()> {
    if validator.is_match(segment) {
        Ok(())
    } else {
        Err(RouteStoreError::ParamMismatch {
            key: spec.key.clone(),
            pattern: spec.pattern.clone(),
            value: segment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamKey;
    use crate::pattern::parse;

    fn generator(pattern: &str) -> Generator {
        Generator::compile(pattern, &parse(pattern).unwrap()).unwrap()
    }

    #[test]
    fn test_generate_static() {
        assert_eq!(generator("/about").generate(&Params::new()).unwrap(), "/about");
    }

    #[test]
    fn test_generate_named() {
        let url = generator("/users/:id/posts/:post")
            .generate(&Params::new().with("id", "7").with("post", "hello"))
            .unwrap();
        assert_eq!(url, "/users/7/posts/hello");
    }

    #[test]
    fn test_generate_encodes_values() {
        let url = generator("/search/:q")
            .generate(&Params::new().with("q", "a b/c"))
            .unwrap();
        assert_eq!(url, "/search/a%20b%2Fc");
    }

    #[test]
    fn test_generate_keeps_segment_safe_characters() {
        let url = generator("/u/:name")
            .generate(&Params::new().with("name", "a:b@c"))
            .unwrap();
        assert_eq!(url, "/u/a:b@c");

        let url = generator("/u/:name")
            .generate(&Params::new().with("name", "50%?#é"))
            .unwrap();
        assert_eq!(url, "/u/50%25%3F%23%C3%A9");
    }

    #[test]
    fn test_generate_missing_required() {
        let err = generator("/users/:id").generate(&Params::new()).unwrap_err();
        assert!(matches!(err, RouteStoreError::MissingParam(ParamKey::Named(ref n)) if n == "id"));
    }

    #[test]
    fn test_generate_optional() {
        let expand = generator("/posts/:page?");
        assert_eq!(expand.generate(&Params::new()).unwrap(), "/posts");
        assert_eq!(expand.generate(&Params::new().with("page", "3")).unwrap(), "/posts/3");
    }

    #[test]
    fn test_generate_partial_optional_keeps_prefix() {
        let expand = generator("/:lang?-docs");
        assert_eq!(expand.generate(&Params::new()).unwrap(), "/-docs");
        assert_eq!(expand.generate(&Params::new().with("lang", "en")).unwrap(), "/en-docs");
    }

    #[test]
    fn test_generate_pattern_mismatch() {
        let err = generator("/posts/:id(\\d+)")
            .generate(&Params::new().with("id", "abc"))
            .unwrap_err();
        assert!(matches!(err, RouteStoreError::ParamMismatch { ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_generate_repeat() {
        let expand = generator("/files/:path+");
        assert_eq!(
            expand.generate(&Params::new().with("path", "a/b/c")).unwrap(),
            "/files/a/b/c"
        );
        assert!(matches!(
            expand.generate(&Params::new().with("path", "")).unwrap_err(),
            RouteStoreError::EmptyParam(_)
        ));

        let optional = generator("/files/:path*");
        assert_eq!(optional.generate(&Params::new().with("path", "")).unwrap(), "/files");
    }

    #[test]
    fn test_generate_asterisk_keeps_slashes() {
        let url = generator("/static/*")
            .generate(&Params::new().with(0usize, "css/site main.css"))
            .unwrap();
        assert_eq!(url, "/static/css/site%20main.css");
    }
}
