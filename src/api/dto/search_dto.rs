//! Talent search request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DEFAULT_PAGE_LIMIT, Page, SearchHints, SearchQuery};
use crate::error::GatewayError;
use crate::sanitize::{sanitize, sanitize_list, sanitize_opt};
use crate::source::CandidateRecord;

/// Request body for `POST /talent/search`.
///
/// `role` and `skills` are declared optional so that their absence is
/// reported as a validation error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Role being recruited for. Required, non-empty.
    #[serde(default)]
    pub role: Option<String>,
    /// Required skills. Must be present as a list, may be empty.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// Preferred candidate location (passed to the result source).
    #[serde(default)]
    pub location: Option<String>,
    /// Desired experience level (passed to the result source).
    #[serde(default)]
    pub experience: Option<String>,
    /// Preferred sourcing channel (passed to the result source).
    #[serde(default)]
    pub source_preference: Option<String>,
    /// Pool region filter. Pools tagged `Global` match any region.
    #[serde(default)]
    pub region: Option<String>,
    /// Pool category filter (exact match).
    #[serde(default)]
    pub category: Option<String>,
    /// Specialization tags; any case-insensitive substring match suffices.
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    /// Page size (default 10, capped at 50, zero rejected).
    #[serde(default)]
    pub limit: Option<usize>,
    /// Set once the caller accepts a narrow result set.
    #[serde(default)]
    pub progressive_search: Option<bool>,
    /// Continuation token from a previous response.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Returns `None` for absent or blank values.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<SearchRequest> for SearchQuery {
    type Error = GatewayError;

    /// Sanitizes free-text fields and checks the required ones.
    fn try_from(req: SearchRequest) -> Result<Self, Self::Error> {
        let role = req.role.as_deref().map(sanitize).unwrap_or_default();
        if role.trim().is_empty() {
            return Err(GatewayError::InvalidRequest("role is required".to_string()));
        }

        let Some(skills) = req.skills else {
            return Err(GatewayError::InvalidRequest(
                "skills must be provided as a list".to_string(),
            ));
        };

        let limit = req.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 {
            return Err(GatewayError::InvalidRequest(
                "limit must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            role,
            skills: sanitize_list(&skills),
            region: non_blank(sanitize_opt(req.region.as_deref())),
            category: non_blank(sanitize_opt(req.category.as_deref())),
            specializations: sanitize_list(&req.specializations.unwrap_or_default()),
            hints: SearchHints {
                location: non_blank(sanitize_opt(req.location.as_deref())),
                experience: non_blank(sanitize_opt(req.experience.as_deref())),
                source_preference: non_blank(sanitize_opt(req.source_preference.as_deref())),
            },
            limit,
            progressive_search: req.progressive_search.unwrap_or(false),
            next_page_token: req.next_page_token,
        })
    }
}

/// Response body for `POST /talent/search`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Number of matching candidates across all pages.
    pub total: usize,
    /// Candidate records on this page.
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<CandidateRecord>,
    /// Token for the next page, `null` on the last page.
    pub next_page_token: Option<String>,
    /// `true` when fewer than three candidates matched and the caller has
    /// not opted into progressive search.
    pub needs_expansion_confirmation: bool,
}

impl From<Page<CandidateRecord>> for SearchResponse {
    fn from(page: Page<CandidateRecord>) -> Self {
        Self {
            total: page.total,
            results: page.results,
            next_page_token: page.next.map(|cursor| cursor.encode()),
            needs_expansion_confirmation: page.needs_expansion_confirmation,
        }
    }
}
