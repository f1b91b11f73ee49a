//! Search-path normalization.
//!
//! This module provides the pure transformation at the heart of the crate:
//! given a colon-delimited path string and a set of [`NormalizeOptions`], it
//! produces a path string in which the entry appears exactly once.
//!
//! # Algorithm
//!
//! 1. Split the input on [`DELIMITER`]. An empty input is a path with one
//!    empty segment, not a path with no segments.
//! 2. Run every segment through the [`FilterPipeline`]: blank removal,
//!    substring removal, and (when the entry must be first) entry removal.
//! 3. In presence-only mode the first surviving occurrence of the entry
//!    stays where it is and later occurrences are dropped.
//! 4. If no occurrence survived, the entry is prepended.
//! 5. Join the segments back with [`DELIMITER`].
//!
//! # Entry protection
//!
//! The removal filters can never take the entry out of the output. A
//! segment equal to the entry that is dropped by blank or substring removal
//! is reinstated at the front in step 4.
//!
//! # Examples
//!
//! ```
//! use ensure_path::{normalize, NormalizeOptions};
//!
//! let first = NormalizeOptions::new("X");
//! assert_eq!(normalize("a:X:b", &first), "X:a:b");
//!
//! let anywhere = NormalizeOptions::new("X").with_ensure_first(false);
//! assert_eq!(normalize("a:X:b", &anywhere), "a:X:b");
//!
//! let stripped = NormalizeOptions::new("X").with_remove_empty(true);
//! assert_eq!(normalize("a::X", &stripped), "X:a");
//! ```

pub mod filter;
pub mod options;
pub mod report;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use filter::{FilterPipeline, SegmentFilter};
pub use options::NormalizeOptions;
pub use report::{EntryPlacement, Normalized};

/// Separator between path segments.
pub const DELIMITER: &str = ":";

/// Normalizes `path` according to `options`.
///
/// This is a convenience wrapper around [`Normalizer::run`] that discards
/// the report.
///
/// # Examples
///
/// ```
/// use ensure_path::{normalize, NormalizeOptions};
///
/// let options = NormalizeOptions::new("deleteme")
///     .with_ensure_first(false)
///     .with_remove_matching(Some("deleteme".to_string()));
///
/// assert_eq!(normalize("t:deleteme:s", &options), "deleteme:t:s");
/// ```
#[must_use]
pub fn normalize(path: &str, options: &NormalizeOptions) -> String {
    Normalizer::new(options).run(path).into_output()
}

/// Reusable normalizer for one set of options.
///
/// Holds no state between runs; the same input always produces the same
/// output.
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    options: &'a NormalizeOptions,
    pipeline: FilterPipeline,
}

impl<'a> Normalizer<'a> {
    /// Creates a normalizer for the given options.
    #[must_use]
    pub fn new(options: &'a NormalizeOptions) -> Self {
        Self {
            options,
            pipeline: FilterPipeline::from_options(options),
        }
    }

    /// The options this normalizer applies.
    #[must_use]
    pub const fn options(&self) -> &NormalizeOptions {
        self.options
    }

    /// Normalizes `path`, returning the output together with a report.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::{EntryPlacement, NormalizeOptions, Normalizer};
    ///
    /// let options = NormalizeOptions::new("X").with_remove_empty(true);
    /// let result = Normalizer::new(&options).run("a::X");
    ///
    /// assert_eq!(result.output, "X:a");
    /// assert_eq!(result.placement, EntryPlacement::Moved);
    /// assert_eq!(result.removed, 1);
    /// ```
    #[must_use]
    pub fn run(&self, path: &str) -> Normalized {
        let entry = self.options.entry();
        let raw: Vec<&str> = path.split(DELIMITER).collect();

        let mut segments = Vec::with_capacity(raw.len() + 1);
        let mut entry_kept = false;
        for &segment in &raw {
            if !self.pipeline.keeps(segment) {
                continue;
            }
            if segment == entry {
                if entry_kept {
                    continue;
                }
                entry_kept = true;
            }
            segments.push(segment);
        }

        let kept_from_input = segments.len();
        let in_input = raw.contains(&entry);

        let placement = if entry_kept {
            EntryPlacement::Kept
        } else {
            segments.insert(0, entry);
            if !in_input {
                EntryPlacement::Inserted
            } else if raw.first() == Some(&entry) && !self.pipeline.drops_entry(entry) {
                EntryPlacement::Kept
            } else {
                EntryPlacement::Moved
            }
        };

        let relocated = usize::from(!entry_kept && in_input);

        Normalized {
            output: segments.join(DELIMITER),
            placement,
            removed: raw.len() - kept_from_input - relocated,
        }
    }
}
