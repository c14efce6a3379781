//! Metric catalog for contribution statistics.
//!
//! The [`Metric`] enum is the universe of metric keys the statistics service understands.
//! Each metric carries its display name, whether it participates in the `sum` row, and
//! how its value is extracted from a [`Contribution`] record. The composite `reviews`
//! metric is special: it has no scalar value and renders as an ordered tuple of review
//! mark buckets ([`REVIEWS_FORMAT`]).

use crate::stats::Contribution;
use strum::{Display, EnumIter, EnumString};

/// Sub-keys of the composite `reviews` metric.
///
/// The order defines both how marks are extracted from a record and how the composite
/// cell is rendered, e.g. `(1, 2, 30, 14, 4)`.
pub const REVIEWS_FORMAT: &[&str] = &["-2", "-1", "1", "2", "A"];

/// A metric key recognized by the statistics service.
///
/// The wire key of each metric is its snake_case name (`commit_count`, `loc`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    CommitCount,
    CompletedBlueprintCount,
    DraftedBlueprintCount,
    EmailCount,
    FiledBugCount,
    Loc,
    PatchSetCount,
    ResolvedBugCount,
    Reviews,
}

impl Metric {
    /// Human-readable name used for table rows and headers.
    #[must_use]
    pub fn pretty_name(self) -> &'static str {
        match self {
            Self::CommitCount => "commits",
            Self::CompletedBlueprintCount => "completed blueprints",
            Self::DraftedBlueprintCount => "drafted blueprints",
            Self::EmailCount => "e-mails",
            Self::FiledBugCount => "filed bugs",
            Self::Loc => "lines of code",
            Self::PatchSetCount => "patch sets",
            Self::ResolvedBugCount => "resolved bugs",
            Self::Reviews => "reviews (-2, -1, +1, +2, A)",
        }
    }

    /// Whether the metric is excluded from the `sum` row.
    ///
    /// Lines of code are not comparable with the other counters, so they never
    /// contribute to a column total.
    #[must_use]
    pub fn skip_from_sum(self) -> bool {
        matches!(self, Self::Loc)
    }

    /// Whether the metric participates in the numeric `sum` row.
    ///
    /// The `reviews` composite has no scalar value and is never summed.
    #[must_use]
    pub fn summable(self) -> bool {
        !self.skip_from_sum() && !matches!(self, Self::Reviews)
    }

    /// Scalar value of this metric in `record`, or `None` for the composite
    /// `reviews` metric.
    #[must_use]
    pub fn scalar(self, record: &Contribution) -> Option<u64> {
        match self {
            Self::CommitCount => Some(record.commit_count),
            Self::CompletedBlueprintCount => Some(record.completed_blueprint_count),
            Self::DraftedBlueprintCount => Some(record.drafted_blueprint_count),
            Self::EmailCount => Some(record.email_count),
            Self::FiledBugCount => Some(record.filed_bug_count),
            Self::Loc => Some(record.loc),
            Self::PatchSetCount => Some(record.patch_set_count),
            Self::ResolvedBugCount => Some(record.resolved_bug_count),
            Self::Reviews => None,
        }
    }
}
