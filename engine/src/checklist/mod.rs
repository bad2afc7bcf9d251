//! Checklist scoring engine
//!
//! Converts qualitative signals about the practice into an integer score
//! and a recommendation tier.
//!
//! # Scoring
//!
//! ```text
//! score = raised signal flags                 (0-10)
//!       + capacity bonus: >=85% -> +2, >=70% -> +1   (mutually exclusive)
//!       + 1 if costs increased recently
//!       + 1 if the timing window is favorable (january/september/year-end)
//! max attainable: 14
//! ```
//!
//! # Tier mapping
//!
//! Inclusive lower bounds, highest first: 9+ reposition, 7+ quality-growth,
//! 4+ mild-correction, otherwise wait.
//!
//! # Example
//!
//! ```
//! use pricing_simulator_core::{score, ChecklistInput, SignalFlags, Tier, TimingWindow};
//!
//! let input = ChecklistInput {
//!     capacity_utilization_percent: 90.0,
//!     costs_increased_recently: true,
//!     timing_window: TimingWindow::January,
//!     signals: SignalFlags {
//!         waiting_list: true,
//!         stale_rates: true,
//!         peers_charge_more: true,
//!         ..SignalFlags::default()
//!     },
//! };
//! let result = score(&input);
//! assert_eq!(result.score, 7);
//! assert_eq!(result.tier, Tier::QualityGrowth);
//! ```

use crate::models::checklist::{ChecklistInput, ChecklistResult, Tier};

/// Capacity utilization at which the calendar counts as overloaded
const CAPACITY_OVERLOADED: f64 = 85.0;

/// Capacity utilization at which the calendar counts as busy
const CAPACITY_BUSY: f64 = 70.0;

/// Score the checklist and map the total onto a recommendation tier
///
/// Pure and total; the score is monotonically non-decreasing in the number
/// of raised signal flags.
pub fn score(input: &ChecklistInput) -> ChecklistResult {
    let mut score = input.signals.raised();

    // Capacity bonus tiers are exclusive, not cumulative
    if input.capacity_utilization_percent >= CAPACITY_OVERLOADED {
        score += 2;
    } else if input.capacity_utilization_percent >= CAPACITY_BUSY {
        score += 1;
    }

    if input.costs_increased_recently {
        score += 1;
    }

    if input.timing_window.is_favorable() {
        score += 1;
    }

    ChecklistResult {
        score,
        tier: tier_for(score),
    }
}

/// Highest tier whose lower bound the score clears
fn tier_for(score: u32) -> Tier {
    if score >= 9 {
        Tier::Reposition
    } else if score >= 7 {
        Tier::QualityGrowth
    } else if score >= 4 {
        Tier::MildCorrection
    } else {
        Tier::Wait
    }
}
