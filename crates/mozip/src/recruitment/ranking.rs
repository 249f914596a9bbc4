//! Presentation-time ordering of the ranked applicant list.
//!
//! The aggregation service records the requested order without applying it;
//! callers that present the list invoke [`ApplicantListResponse::sorted`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::views::{ApplicantListResponse, ApplicantSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    AppliedAt,
    Name,
    TotalPaperScore,
    PaperStatus,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "applied_at" | "appliedat" | "created_at" | "createdat" => Some(Self::AppliedAt),
            "name" => Some(Self::Name),
            "total_paper_score" | "totalpaperscore" | "score" => Some(Self::TotalPaperScore),
            "paper_status" | "paperstatus" | "status" => Some(Self::PaperStatus),
            _ => None,
        }
    }

    fn compare(self, left: &ApplicantSummary, right: &ApplicantSummary) -> Ordering {
        match self {
            SortField::AppliedAt => left.applied_at.cmp(&right.applied_at),
            SortField::Name => left.name.cmp(&right.name),
            SortField::TotalPaperScore => left.total_paper_score.cmp(&right.total_paper_score),
            SortField::PaperStatus => left.paper_status.cmp(&right.paper_status),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Requested ordering for the applicant list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ApplicantSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Builds a sort from raw query values; absent values fall back to defaults.
    pub fn from_params(
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, InvalidSort> {
        let field = match sort_by {
            Some(raw) => SortField::parse(raw).ok_or_else(|| InvalidSort::Field(raw.to_string()))?,
            None => SortField::default(),
        };
        let direction = match order {
            Some(raw) => {
                SortDirection::parse(raw).ok_or_else(|| InvalidSort::Direction(raw.to_string()))?
            }
            None => SortDirection::default(),
        };
        Ok(Self { field, direction })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSort {
    #[error("unknown sort field '{0}'")]
    Field(String),
    #[error("unknown sort order '{0}'")]
    Direction(String),
}

impl ApplicantListResponse {
    /// Orders rows by the recorded sort; ties keep their storage order.
    pub fn sorted(mut self) -> Self {
        let ApplicantSort { field, direction } = self.sort;
        self.applicants.sort_by(|left, right| {
            let ordering = field.compare(left, right);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        self
    }
}
