//! Batch risk aggregation.

use crate::risk::{RiskCategory, RiskFlag, RiskSeverity, RiskThresholds};
use crate::strategy::StrategyCalculator;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Flag counts across a batch of positions.
///
/// Every category and every severity is always present in the count maps,
/// with zero when nothing was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRiskSummary {
    /// Number of positions analyzed.
    pub total_positions: usize,
    /// Number of flags raised across all positions.
    pub total_risks: usize,
    /// Flag count per category.
    pub risks_by_category: BTreeMap<RiskCategory, usize>,
    /// Flag count per severity.
    pub risks_by_severity: BTreeMap<RiskSeverity, usize>,
    /// Most severe level with at least one flag; `None` when nothing was raised.
    pub highest_severity: Option<RiskSeverity>,
    /// Every flag, in position order.
    pub flags: Vec<RiskFlag>,
}

impl BatchRiskSummary {
    fn from_flags(total_positions: usize, flags: Vec<RiskFlag>) -> Self {
        let mut risks_by_category: BTreeMap<_, _> =
            RiskCategory::ALL.iter().map(|category| (*category, 0)).collect();
        let mut risks_by_severity: BTreeMap<_, _> = RiskSeverity::DESCENDING
            .iter()
            .map(|severity| (*severity, 0))
            .collect();

        for flag in &flags {
            *risks_by_category.entry(flag.category).or_insert(0) += 1;
            *risks_by_severity.entry(flag.severity).or_insert(0) += 1;
        }

        let highest_severity = RiskSeverity::DESCENDING
            .into_iter()
            .find(|severity| risks_by_severity.get(severity).is_some_and(|count| *count > 0));

        Self {
            total_positions,
            total_risks: flags.len(),
            risks_by_category,
            risks_by_severity,
            highest_severity,
            flags,
        }
    }

    /// Number of flags in `category`.
    #[must_use]
    pub fn count_for_category(&self, category: RiskCategory) -> usize {
        self.risks_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Number of flags at `severity`.
    #[must_use]
    pub fn count_for_severity(&self, severity: RiskSeverity) -> usize {
        self.risks_by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Returns true when no position raised a flag.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.total_risks == 0
    }
}

impl std::fmt::Display for BatchRiskSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} positions, {} risks, highest {}",
            self.total_positions,
            self.total_risks,
            self.highest_severity.map_or("none", |severity| severity.as_str())
        )
    }
}

/// Runs risk analysis on every position and aggregates the flags.
///
/// # Arguments
///
/// * `positions` - Positions of any strategy type
/// * `thresholds` - Bands applied to every position
#[must_use]
pub fn analyze_batch_risks<P: StrategyCalculator>(
    positions: &[P],
    thresholds: &RiskThresholds,
) -> BatchRiskSummary {
    let flags: Vec<RiskFlag> = positions
        .iter()
        .flat_map(|position| position.analyze_risks(thresholds))
        .collect();
    let summary = BatchRiskSummary::from_flags(positions.len(), flags);
    debug!(
        positions = summary.total_positions,
        risks = summary.total_risks,
        highest = ?summary.highest_severity,
        "analyzed batch risks"
    );
    summary
}
