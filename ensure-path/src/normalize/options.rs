//! Options controlling a single normalization.

/// Immutable set of options for one call to the normalizer.
///
/// Built with [`NormalizeOptions::new`] and the `with_*` methods. Every
/// combination of options is valid.
///
/// # Examples
///
/// ```
/// use ensure_path::NormalizeOptions;
///
/// let options = NormalizeOptions::new("/opt/bin")
///     .with_ensure_first(false)
///     .with_remove_empty(true)
///     .with_remove_matching(Some("nix".to_string()));
///
/// assert_eq!(options.entry(), "/opt/bin");
/// assert!(!options.ensure_first());
/// assert!(options.remove_empty());
/// assert_eq!(options.remove_matching(), Some("nix"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    entry: String,
    ensure_first: bool,
    remove_empty: bool,
    remove_matching: Option<String>,
}

impl NormalizeOptions {
    /// Creates options for `entry` with the defaults: the entry is forced to
    /// the front, no segments are stripped.
    #[must_use]
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            ensure_first: true,
            remove_empty: false,
            remove_matching: None,
        }
    }

    /// Require the entry at position 0 (`true`) or only its presence (`false`).
    #[must_use]
    pub fn with_ensure_first(mut self, ensure_first: bool) -> Self {
        self.ensure_first = ensure_first;
        self
    }

    /// Drop empty and whitespace-only segments.
    #[must_use]
    pub fn with_remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }

    /// Drop segments containing the given substring.
    ///
    /// `None` disables substring removal.
    #[must_use]
    pub fn with_remove_matching(mut self, substring: Option<String>) -> Self {
        self.remove_matching = substring;
        self
    }

    /// The entry whose presence is ensured.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Whether the entry must end up first.
    #[must_use]
    pub const fn ensure_first(&self) -> bool {
        self.ensure_first
    }

    /// Whether blank segments are dropped.
    #[must_use]
    pub const fn remove_empty(&self) -> bool {
        self.remove_empty
    }

    /// The substring used for segment removal, if enabled.
    #[must_use]
    pub fn remove_matching(&self) -> Option<&str> {
        self.remove_matching.as_deref()
    }
}
