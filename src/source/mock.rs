//! Placeholder candidate generator.
//!
//! Fabricates plausible candidate records from pool metadata so the
//! gateway can be exercised end to end without a real talent database.

use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;

use super::{CandidateRecord, ResultSource, SourceError};
use crate::domain::{Pool, SearchHints};

const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "Dana", "Eve"];

/// Shape of a mock candidate record.
#[derive(Debug, Serialize)]
struct MockCandidate<'a> {
    name: String,
    skills: &'a [String],
    experience: String,
    location: &'a str,
    profile_link: String,
    network: &'a str,
}

/// Result source that synthesizes candidates from the pool itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCandidateSource;

impl MockCandidateSource {
    /// Creates the mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn candidate(pool: &Pool, index: usize, years: u8) -> MockCandidate<'_> {
        let first_name = NAMES.get(index % NAMES.len()).copied().unwrap_or("Alex");
        MockCandidate {
            name: format!("{first_name} - {}", pool.id),
            skills: &pool.specializations,
            experience: format!("{years} years"),
            location: if pool.is_global() { "Remote" } else { pool.region.as_str() },
            profile_link: format!("https://example.com/profile{index}"),
            network: pool.id.as_str(),
        }
    }

    fn records(pool: &Pool, count: usize) -> Result<Vec<CandidateRecord>, SourceError> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|index| {
                let years = rng.gen_range(1..=10);
                serde_json::to_value(Self::candidate(pool, index, years))
                    .map_err(|e| SourceError::new(pool.id.clone(), e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl ResultSource for MockCandidateSource {
    async fn generate(
        &self,
        pool: &Pool,
        count: usize,
        _hints: &SearchHints,
    ) -> Result<Vec<CandidateRecord>, SourceError> {
        Self::records(pool, count)
    }
}
