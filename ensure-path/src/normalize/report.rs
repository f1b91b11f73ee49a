//! Outcome of a normalization.

use std::fmt;

/// What happened to the entry during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPlacement {
    /// The entry was already where it needed to be.
    Kept,
    /// The entry was present in the input but had to be relocated to the front.
    Moved,
    /// The entry was absent from the input and was prepended.
    Inserted,
}

impl fmt::Display for EntryPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kept => write!(f, "kept"),
            Self::Moved => write!(f, "moved"),
            Self::Inserted => write!(f, "inserted"),
        }
    }
}

/// Result of running the normalizer, with a short report of what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The normalized path string.
    pub output: String,
    /// What happened to the entry.
    pub placement: EntryPlacement,
    /// Number of input segments dropped, not counting the single entry
    /// occurrence relocated to the front.
    pub removed: usize,
}

impl Normalized {
    /// Returns true if the output differs from `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::{NormalizeOptions, Normalizer};
    ///
    /// let options = NormalizeOptions::new("X");
    /// let result = Normalizer::new(&options).run("X:a");
    /// assert!(!result.changed("X:a"));
    /// ```
    #[must_use]
    pub fn changed(&self, input: &str) -> bool {
        self.output != input
    }

    /// Consumes the report, returning the path string.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
