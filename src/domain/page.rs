//! One page of search results.

use super::Cursor;

/// A bounded slice of a search result sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Number of records across all pages.
    pub total: usize,
    /// Records on this page, in result order.
    pub results: Vec<T>,
    /// Where the next page starts, if any records remain.
    pub next: Option<Cursor>,
    /// Advisory flag: the caller should consider broadening the query.
    pub needs_expansion_confirmation: bool,
}

impl<T> Page<T> {
    /// Slices `records` starting at `cursor`, taking at most `page_size`.
    ///
    /// `next` is set only when records remain past the returned slice. A
    /// cursor beyond the end yields an empty page with no continuation.
    /// The expansion flag starts cleared.
    #[must_use]
    pub fn slice(records: Vec<T>, cursor: Cursor, page_size: usize) -> Self {
        let total = records.len();
        let offset = cursor.offset();
        let results: Vec<T> = records.into_iter().skip(offset).take(page_size).collect();

        let end = offset.saturating_add(page_size);
        let next = (end < total).then(|| Cursor::new(end));

        Self {
            total,
            results,
            next,
            needs_expansion_confirmation: false,
        }
    }

    /// Sets the expansion advisory flag.
    #[must_use]
    pub fn with_expansion_flag(mut self, needs_expansion_confirmation: bool) -> Self {
        self.needs_expansion_confirmation = needs_expansion_confirmation;
        self
    }
}
