/// Parameter keys and extracted parameter values
///
/// A pattern's parameters are identified either by name (`:id`) or by their
/// position among the unnamed groups (`(\d+)`, `*`). Extracted values keep the
/// order of the pattern's parameter list, and a parameter that did not take
/// part in the match is kept with no value.
use std::borrow::Cow;
use std::fmt;

/// Identity of a single pattern parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// Named parameter: `:id`
    Named(String),
    /// Unnamed group, numbered from 0 in pattern order: `(\d+)`, `*`
    Positional(usize),
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Named(name) => f.write_str(name),
            ParamKey::Positional(position) => write!(f, "{}", position),
        }
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Named(name.to_string())
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::Named(name)
    }
}

impl From<usize> for ParamKey {
    fn from(position: usize) -> Self {
        ParamKey::Positional(position)
    }
}

/// Anything that can address an entry of [`Params`] without allocating.
pub trait ParamLookup {
    fn is_key(&self, key: &ParamKey) -> bool;
}

impl ParamLookup for &str {
    fn is_key(&self, key: &ParamKey) -> bool {
        matches!(key, ParamKey::Named(name) if name.as_str() == *self)
    }
}

impl ParamLookup for usize {
    fn is_key(&self, key: &ParamKey) -> bool {
        matches!(key, ParamKey::Positional(position) if position == self)
    }
}

impl ParamLookup for &ParamKey {
    fn is_key(&self, key: &ParamKey) -> bool {
        *self == key
    }
}

/// Ordered parameter values
///
/// Used both as the result of a lookup and as the input of
/// [`PatternRecord::generate`](crate::PatternRecord::generate).
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::Params;
///
/// let params = Params::new().with("id", "42").with(0usize, "json");
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get(0usize), Some("json"));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(ParamKey, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value (builder style)
    pub fn with(mut self, key: impl Into<ParamKey>, value: impl Into<String>) -> Self {
        self.insert(key.into(), Some(value.into()));
        self
    }

    /// Sets or replaces an entry, keeping the position of an existing key
    pub fn insert(&mut self, key: ParamKey, value: Option<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value of a parameter; absent keys and entries without a value are `None`
    pub fn get(&self, key: impl ParamLookup) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| key.is_key(k))
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether the key is present, with or without a value
    pub fn contains_key(&self, key: impl ParamLookup) -> bool {
        self.entries.iter().any(|(k, _)| key.is_key(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<ParamKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Params::new(), |params, (key, value)| params.with(key, value))
    }
}

/// Percent-decodes a captured value, keeping the raw text if it does not decode
///
/// # Examples
///
/// ```
/// use rhtmx_route_store::params::safe_decode;
///
/// assert_eq!(safe_decode("hello%20world"), "hello world");
/// // Truncated UTF-8 sequence: kept as captured
/// assert_eq!(safe_decode("%E0%A4%A"), "%E0%A4%A");
/// // Malformed escape anywhere: nothing is decoded
/// assert_eq!(safe_decode("%zz%20x"), "%zz%20x");
/// ```
pub fn safe_decode(raw: &str) -> Cow<'_, str> {
    if !has_valid_escapes(raw) {
        return Cow::Borrowed(raw);
    }
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Every `%` is followed by two hex digits
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}
