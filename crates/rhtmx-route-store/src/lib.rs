//! # RHTMX Route Store
//!
//! A route store that finds the registered path pattern matching a request
//! path, and extracts its parameters. Supports:
//! - Static patterns (`/about`)
//! - Named parameters (`/users/:id`, `/posts/:id(\d+)`)
//! - Unnamed parameters, keyed by position (`/files/(.*)`, `/static/*`)
//! - Optional and repeated parameters (`/:page?`, `/:path+`, `/:path*`)
//! - URL generation from parameters
//!
//! ## How Lookups Work
//!
//! Patterns are filed in a prefix trie under the literal segments they start
//! with. After all patterns are registered, [`Store::build`] fills the trie
//! and compresses chains of pattern-free nodes. A lookup then:
//! 1. walks the trie by exact literal segments as far as it can,
//! 2. tries the patterns filed at that node **in registration order**,
//! 3. returns the first one whose matcher accepts the whole path.
//!
//! There is no specificity ranking: among patterns filed at the same node,
//! the one registered first wins.
//!
//! ## Example
//!
//! ```
//! use rhtmx_route_store::Store;
//!
//! let mut store = Store::new();
//! store.register("/users/new").unwrap();
//! store.register("/users/:id").unwrap();
//! store.build();
//!
//! let found = store.find("/users/42").unwrap();
//! assert_eq!(found.record.path(), "/users/:id");
//! assert_eq!(found.params.get("id"), Some("42"));
//!
//! assert!(store.find("/posts").is_none());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
pub mod params;
pub mod path;
pub mod pattern;
pub mod trie;

pub use config::StoreConfig;
pub use error::{Result, RouteStoreError};
pub use params::{ParamKey, Params};
pub use path::clean_path;
pub use pattern::{ParamSpec, PatternRecord, Token};
pub use trie::TrieNode;

use tracing::{debug, trace, warn};

// ============================================================================
// Core Types
// ============================================================================

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    /// The matched pattern
    pub record: &'a PatternRecord,
    /// Parameter values, in the pattern's parameter order
    pub params: Params,
}

/// The route store
///
/// Lifecycle: [`register`](Store::register) every pattern, call
/// [`build`](Store::build) once, then [`find`](Store::find) as often as
/// needed. `find` takes `&self`, so a built store can be shared across
/// threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    root: TrieNode,
    routes: Vec<PatternRecord>,
    config: StoreConfig,
    /// Number of registrations filed into `root` by the last build
    built: Option<usize>,
}

impl Store {
    /// Creates an empty store with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given options
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_route_store::{Store, StoreConfig};
    ///
    /// let mut store = Store::with_config(StoreConfig::default().with_strict(true));
    /// store.register("/about").unwrap();
    /// store.build();
    ///
    /// assert!(store.find("/about").is_some());
    /// assert!(store.find("/about/").is_none());
    /// ```
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers every pattern and builds the store (builder style)
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_route_store::Store;
    ///
    /// let store = Store::new().with_patterns(["/", "/about", "/users/:id"]).unwrap();
    /// assert!(store.is_built());
    /// assert_eq!(store.find("/users/7").unwrap().record.index(), 2);
    /// ```
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.register(pattern.as_ref())?;
        }
        self.build();
        Ok(self)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Compiles a pattern and appends it to the registration list
    ///
    /// One trailing `/` is removed from the pattern before compiling. The
    /// record's index is its position in the registration list.
    ///
    /// A pattern registered after [`build`](Store::build) is not visible to
    /// [`find`](Store::find) until the next build.
    ///
    /// # Errors
    ///
    /// Returns the compile error for a malformed pattern; nothing is
    /// registered in that case.
    pub fn register(&mut self, path: &str) -> Result<&PatternRecord> {
        let index = self.routes.len();
        let record = PatternRecord::compile(path, index, self.config.strict)?;

        debug!(index, path = record.path(), "registered pattern");
        if self.built.is_some() {
            warn!(
                index,
                path = record.path(),
                "pattern registered after build; call build() again to make it visible"
            );
        }

        self.routes.push(record);
        Ok(&self.routes[index])
    }

    /// Alias of [`register`](Store::register)
    pub fn add(&mut self, path: &str) -> Result<&PatternRecord> {
        self.register(path)
    }

    /// Builds the lookup trie from every registered pattern
    ///
    /// The trie is rebuilt from scratch on every call, so calling `build`
    /// again (with or without new registrations) never files a pattern twice.
    pub fn build(&mut self) {
        let mut root = TrieNode::new();
        for record in &self.routes {
            trie::insert(&mut root, record);
        }

        let before = root.node_count();
        trie::compress(&mut root);
        debug!(
            patterns = self.routes.len(),
            nodes_before = before,
            nodes_after = root.node_count(),
            "built route trie"
        );

        self.root = root;
        self.built = Some(self.routes.len());
    }

    /// Finds the pattern matching `path`
    ///
    /// Returns `None` when no pattern matches, and always before the first
    /// [`build`](Store::build). The path is used as given: it is neither
    /// cleaned nor decoded before matching.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        let node = trie::find_node(&self.root, path);
        let Some((record, captures)) = trie::match_at(node, &self.routes, path) else {
            trace!(path, candidates = node.patterns().len(), "no pattern matched");
            return None;
        };

        trace!(path, index = record.index(), pattern = record.path(), "pattern matched");
        Some(RouteMatch {
            record,
            params: trie::extract_params(record, &captures, self.config.decode_params),
        })
    }

    /// Registered patterns, in registration order
    pub fn registrations(&self) -> &[PatternRecord] {
        &self.routes
    }

    /// Alias of [`registrations`](Store::registrations)
    pub fn routes(&self) -> &[PatternRecord] {
        self.registrations()
    }

    /// Looks a record up by its index
    pub fn get(&self, index: usize) -> Option<&PatternRecord> {
        self.routes.get(index)
    }

    /// Root of the lookup trie (empty until the first build)
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Whether [`build`](Store::build) has run
    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// Whether patterns were registered after the last build
    pub fn has_pending(&self) -> bool {
        self.built.map_or(!self.routes.is_empty(), |built| built < self.routes.len())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
