//! Time management: turn a request's limits into a [`SearchControl`].

use std::time::Duration;

use crate::config::EngineConfig;
use crate::search::control::SearchControl;

/// Wall-clock allowance for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBudget {
    /// Soft budget; the hard limit is derived from it.
    Limited(Duration),
    /// No clock at all. With a fixed depth this makes results reproducible.
    Unlimited,
}

/// Limits for one `best_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Fixed maximum depth; `None` lets the depth policy decide.
    pub depth: Option<u8>,
    pub budget: TimeBudget,
}

impl SearchLimits {
    /// Policy depth under the configured time budget.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            depth: None,
            budget: TimeBudget::Limited(config.time_budget),
        }
    }

    /// Fixed depth, no clock.
    pub fn depth_only(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            budget: TimeBudget::Unlimited,
        }
    }
}

/// Build the control for a search.
///
/// | Budget | Soft | Hard |
/// |---|---|---|
/// | `Limited(d)` | `d` | `d * hard_factor` |
/// | `Unlimited` | none | none |
pub fn control_from_limits(limits: &SearchLimits, hard_factor: u32) -> SearchControl {
    match limits.budget {
        TimeBudget::Limited(soft) => {
            let hard = soft.saturating_mul(hard_factor.max(1));
            SearchControl::new_timed(soft, hard)
        }
        TimeBudget::Unlimited => SearchControl::new_infinite(),
    }
}
