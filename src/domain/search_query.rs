//! Validated search query.
//!
//! A [`SearchQuery`] is built from a sanitized request DTO and is the only
//! input the search pipeline sees. It is immutable once constructed.

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Hard ceiling on the number of records returned in one page.
pub const MAX_PAGE_LIMIT: usize = 50;

/// Free-text hints passed through untouched to the result source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHints {
    /// Preferred candidate location.
    pub location: Option<String>,
    /// Desired experience level.
    pub experience: Option<String>,
    /// Preferred sourcing channel.
    pub source_preference: Option<String>,
}

/// A single talent search request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Role being recruited for. Never empty.
    pub role: String,
    /// Required skills. May be empty.
    pub skills: Vec<String>,
    /// Requested region, `None` for any.
    pub region: Option<String>,
    /// Requested pool category, `None` for any.
    pub category: Option<String>,
    /// Specialization tags, any of which may match. Empty for any.
    pub specializations: Vec<String>,
    /// Pass-through hints for the result source.
    pub hints: SearchHints,
    /// Requested page size before capping. Zero is rejected by the service.
    pub limit: usize,
    /// Caller already accepts a narrow result set.
    pub progressive_search: bool,
    /// Continuation token from a previous page.
    pub next_page_token: Option<String>,
}

impl SearchQuery {
    /// Creates a query with the required fields and defaults for the rest.
    #[must_use]
    pub fn new(role: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            role: role.into(),
            skills,
            region: None,
            category: None,
            specializations: Vec::new(),
            hints: SearchHints::default(),
            limit: DEFAULT_PAGE_LIMIT,
            progressive_search: false,
            next_page_token: None,
        }
    }

    /// Sets the requested region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the requested category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the specialization tags.
    #[must_use]
    pub fn with_specializations(mut self, specializations: Vec<String>) -> Self {
        self.specializations = specializations;
        self
    }

    /// Sets the requested page size.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the progressive-search acknowledgment.
    #[must_use]
    pub fn with_progressive_search(mut self, progressive_search: bool) -> Self {
        self.progressive_search = progressive_search;
        self
    }

    /// Sets the continuation token.
    #[must_use]
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    /// Effective page size: the requested limit capped at [`MAX_PAGE_LIMIT`].
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.limit.min(MAX_PAGE_LIMIT)
    }
}
