//! Segment filters applied before the entry is placed.
//!
//! Each filter is a pure predicate over one segment. A [`FilterPipeline`]
//! keeps a segment only when every filter in it keeps the segment.

use super::options::NormalizeOptions;

/// A single keep/drop rule for path segments.
///
/// # Examples
///
/// ```
/// use ensure_path::normalize::SegmentFilter;
///
/// assert!(!SegmentFilter::Blank.keeps("  "));
/// assert!(SegmentFilter::Blank.keeps("/bin"));
///
/// let containing = SegmentFilter::Containing("nix".to_string());
/// assert!(!containing.keeps("/nix/store/bin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentFilter {
    /// Drop segments that are empty or consist only of whitespace.
    Blank,
    /// Drop segments containing the substring.
    Containing(String),
    /// Drop segments exactly equal to the entry.
    Entry(String),
}

impl SegmentFilter {
    /// Returns true if `segment` survives this filter.
    #[must_use]
    pub fn keeps(&self, segment: &str) -> bool {
        match self {
            Self::Blank => !segment.trim().is_empty(),
            Self::Containing(substring) => !segment.contains(substring.as_str()),
            Self::Entry(entry) => segment != entry,
        }
    }
}

/// Ordered list of filters combined by conjunction.
///
/// Filters always appear in the same order: blank removal, substring
/// removal, then entry removal. Only filters enabled by the options are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    filters: Vec<SegmentFilter>,
}

impl FilterPipeline {
    /// Builds the pipeline for a set of options.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::NormalizeOptions;
    /// use ensure_path::normalize::{FilterPipeline, SegmentFilter};
    ///
    /// let options = NormalizeOptions::new("/opt/bin").with_remove_empty(true);
    /// let pipeline = FilterPipeline::from_options(&options);
    ///
    /// assert_eq!(
    ///     pipeline.filters(),
    ///     &[SegmentFilter::Blank, SegmentFilter::Entry("/opt/bin".to_string())]
    /// );
    /// ```
    #[must_use]
    pub fn from_options(options: &NormalizeOptions) -> Self {
        let mut filters = Vec::with_capacity(3);

        if options.remove_empty() {
            filters.push(SegmentFilter::Blank);
        }
        if let Some(substring) = options.remove_matching() {
            filters.push(SegmentFilter::Containing(substring.to_string()));
        }
        // Entry removal only makes sense when the entry is reinserted at the
        // front afterwards; presence-only mode leaves it where it is.
        if options.ensure_first() {
            filters.push(SegmentFilter::Entry(options.entry().to_string()));
        }

        Self { filters }
    }

    /// Returns true if every filter keeps `segment`.
    #[must_use]
    pub fn keeps(&self, segment: &str) -> bool {
        self.filters.iter().all(|filter| filter.keeps(segment))
    }

    /// Returns true if a removal filter (not entry removal) drops `entry`.
    ///
    /// Such an entry is reinstated at the front by the normalizer.
    #[must_use]
    pub fn drops_entry(&self, entry: &str) -> bool {
        self.filters
            .iter()
            .any(|filter| !matches!(filter, SegmentFilter::Entry(_)) && !filter.keeps(entry))
    }

    /// The filters in application order.
    #[must_use]
    pub fn filters(&self) -> &[SegmentFilter] {
        &self.filters
    }

    /// Number of active filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
