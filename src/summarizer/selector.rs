//! Greedy sentence selection
//!
//! Sentences are ranked by value (descending, ties by document position) and
//! taken in rank order while adding the next one lands the running total at
//! least as close to the target as stopping would:
//!
//! ```text
//! continue while  target - S >= (S + v_next) - target
//! ```
//!
//! [`SelectionMode::Best`] sets an unreachable target and instead stops at
//! the first candidate valued below the mean. The selection is returned in
//! document order.

use crate::errors::{Result, TldrError};
use crate::types::{Percentage, ScoredSentence, SelectionMode, Summary};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Target fraction of the total contribution (ignored by `Best`)
    pub percentage: Percentage,
    /// Valuation and stopping strategy
    pub mode: SelectionMode,
    /// Take the top-ranked sentence before the stopping rule is consulted
    pub at_least_one: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            percentage: Percentage::default(),
            mode: SelectionMode::Value,
            at_least_one: true,
        }
    }
}

impl SelectionMode {
    /// Accumulated contribution the selection aims for
    fn target(self, total: f64, percentage: Percentage) -> f64 {
        match self {
            SelectionMode::Value | SelectionMode::Length => total * percentage.fraction(),
            // Beyond any reachable sum; only the mean cutoff stops selection.
            SelectionMode::Best => 2.0 * total + 1.0,
        }
    }

    /// Whether `value` is excluded regardless of the target
    fn below_cutoff(self, value: f64, mean: f64) -> bool {
        match self {
            SelectionMode::Best => value < mean,
            SelectionMode::Value | SelectionMode::Length => false,
        }
    }
}

/// Greedy target-proximity selector
#[derive(Debug, Clone, Default)]
pub struct SummarySelector {
    config: SelectorConfig,
}

impl SummarySelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the target percentage
    pub fn with_percentage(mut self, percentage: Percentage) -> Self {
        self.config.percentage = percentage;
        self
    }

    /// Set the selection mode
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set whether at least one sentence is always selected
    pub fn with_at_least_one(mut self, at_least_one: bool) -> Self {
        self.config.at_least_one = at_least_one;
        self
    }

    /// Select a subset of `scored` and compute its coverage
    ///
    /// A lone sentence is always returned with 100% coverage. More than one
    /// sentence with a zero total is degenerate: coverage is undefined.
    pub fn select(&self, scored: Vec<ScoredSentence>) -> Result<Summary> {
        let mode = self.config.mode;

        if scored.is_empty() {
            return Err(TldrError::degenerate("no sentences to select from"));
        }
        if scored.len() == 1 {
            return Ok(Summary {
                sentences: scored,
                coverage: 100.0,
                mode,
            });
        }

        let total: f64 = scored.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            return Err(TldrError::degenerate(format!(
                "sentences have zero total {}",
                if mode == SelectionMode::Length { "length" } else { "value" }
            )));
        }

        let mean = total / scored.len() as f64;
        let target = mode.target(total, self.config.percentage);

        let mut ranked = scored;
        ranked.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.index().cmp(&b.index()))
        });

        let mut accumulated = 0.0;
        let mut selected = Vec::new();

        for candidate in ranked {
            let forced = self.config.at_least_one && selected.is_empty();
            if !forced {
                if mode.below_cutoff(candidate.value, mean) {
                    break;
                }
                if target - accumulated < (accumulated + candidate.value) - target {
                    break;
                }
            }
            accumulated += candidate.value;
            selected.push(candidate);
        }

        // Restore document order
        selected.sort_by_key(|s| s.index());

        let coverage = accumulated * 100.0 / total;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = %mode,
            target,
            selected = selected.len(),
            coverage,
            "selected sentences"
        );

        Ok(Summary {
            sentences: selected,
            coverage,
            mode,
        })
    }
}
