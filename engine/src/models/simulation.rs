//! Simulation input/output records
//!
//! The simulation compares the business as it is today against a
//! hypothetical state after a price increase, a churn assumption, and an
//! optional change in per-client session frequency.
//!
//! # Representation choices
//!
//! - Churn is a tagged union ([`ChurnSpec`]): the caller states attrition
//!   either as a percentage of the client base or as an absolute head count,
//!   never both. Exactly one branch is consulted.
//! - Cost tracking is a tagged union ([`CostSpec`]): when disabled, both the
//!   fixed and the variable cost term are 0 everywhere, including the
//!   break-even algebra, which then degenerates cleanly to revenue-only.
//!
//! CRITICAL: All money values are f64 PLN. Fractional client counts are
//! meaningful outputs (losing 10% of 15 clients loses 1.5 clients); rounding
//! for display is the caller's concern.

use serde::{Deserialize, Serialize};

/// Client attrition assumption, stated one of two ways
///
/// # Example
/// ```
/// use pricing_simulator_core::ChurnSpec;
///
/// assert_eq!(ChurnSpec::Percent(10.0).clients_lost(15.0), 1.5);
/// assert_eq!(ChurnSpec::Count(4.0).clients_lost(15.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum ChurnSpec {
    /// Fraction of the client base lost, in percent (0-100)
    Percent(f64),
    /// Absolute number of clients lost
    Count(f64),
}

impl ChurnSpec {
    /// Number of clients lost out of `clients`
    ///
    /// May exceed `clients`; the simulation clamps the *remaining* count at
    /// zero, not the loss itself.
    pub fn clients_lost(&self, clients: f64) -> f64 {
        match *self {
            ChurnSpec::Percent(pct) => clients * (pct / 100.0),
            ChurnSpec::Count(n) => n,
        }
    }

    /// The churn expressed as a fraction (0-1) of `clients`
    ///
    /// Used for churn-health classification. Zero clients yields 0.
    pub fn as_fraction_of(&self, clients: f64) -> f64 {
        match *self {
            ChurnSpec::Percent(pct) => pct / 100.0,
            ChurnSpec::Count(n) => {
                if clients > 0.0 {
                    n / clients
                } else {
                    0.0
                }
            }
        }
    }
}

/// Cost tracking toggle with the cost parameters it governs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CostSpec {
    /// Costs are not tracked; both cost terms are 0 and the financial diff
    /// shown to the user is revenue-based
    Disabled,
    /// Costs are tracked; the financial diff is profit-based
    Tracked {
        /// Fixed monthly overhead (rent, software, insurance), PLN
        fixed_monthly: f64,
        /// Variable cost per delivered session, PLN
        variable_per_session: f64,
    },
}

impl CostSpec {
    pub fn is_tracked(&self) -> bool {
        matches!(self, CostSpec::Tracked { .. })
    }

    /// Fixed monthly cost, 0 when tracking is disabled
    pub fn fixed_monthly(&self) -> f64 {
        match *self {
            CostSpec::Disabled => 0.0,
            CostSpec::Tracked { fixed_monthly, .. } => fixed_monthly,
        }
    }

    /// Variable cost per session, 0 when tracking is disabled
    pub fn variable_per_session(&self) -> f64 {
        match *self {
            CostSpec::Disabled => 0.0,
            CostSpec::Tracked {
                variable_per_session,
                ..
            } => variable_per_session,
        }
    }
}

impl Default for CostSpec {
    fn default() -> Self {
        CostSpec::Disabled
    }
}

/// Current business parameters plus the hypothetical change to evaluate
///
/// The caller (form layer) is responsible for clamping raw form values to
/// their floors before building this record; the simulation only guards the
/// divisions and subtractions enumerated in its own algorithm.
///
/// # Example
/// ```
/// use pricing_simulator_core::{ChurnSpec, SimulationInput};
///
/// let input = SimulationInput::new(15.0, 8.0, 150.0, 20.0, ChurnSpec::Percent(10.0));
/// assert_eq!(input.sessions_after(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Currently active clients
    pub client_count: f64,

    /// Average billable sessions per client per month, before the change
    pub sessions_per_client: f64,

    /// Average sessions per client per month after the change
    ///
    /// Lets a client stay but attend less often, independent of churn.
    /// `None` means unchanged.
    #[serde(default)]
    pub sessions_per_client_after: Option<f64>,

    /// Current price per session, PLN
    pub price_per_session: f64,

    /// Price increase applied multiplicatively, in percent
    ///
    /// 0 means no change; the UI caps at 100 but the math is unbounded above.
    pub price_increase_percent: f64,

    /// Attrition assumption
    pub churn: ChurnSpec,

    /// Cost tracking toggle and parameters
    #[serde(default)]
    pub costs: CostSpec,
}

impl SimulationInput {
    /// Build an input with costs disabled and session frequency unchanged
    pub fn new(
        client_count: f64,
        sessions_per_client: f64,
        price_per_session: f64,
        price_increase_percent: f64,
        churn: ChurnSpec,
    ) -> Self {
        Self {
            client_count,
            sessions_per_client,
            sessions_per_client_after: None,
            price_per_session,
            price_increase_percent,
            churn,
            costs: CostSpec::Disabled,
        }
    }

    /// Post-change session frequency, defaulting to the pre-change value
    pub fn sessions_after(&self) -> f64 {
        self.sessions_per_client_after
            .unwrap_or(self.sessions_per_client)
    }
}

/// Verdict on the financial diff of the simulated change
///
/// The diff is profit-based when costs are tracked and revenue-based when
/// not, compared against a symmetric dead zone around zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Positive,
    Neutral,
    Negative,
}

/// Health assessment of the assumed churn level
///
/// A raise nobody leaves over was probably too timid; a raise that loses
/// more than a fifth of the base signals a communication or positioning
/// problem rather than a pricing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChurnHealth {
    TooLow,
    Optimal,
    TooHigh,
}

/// Everything the simulation derives from one [`SimulationInput`]
///
/// Read-only; built fresh on every call. When `is_valid` is false (current
/// revenue is zero) every other field is a meaningless placeholder and the
/// caller must show a prompt-for-input state instead of the figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    // Current state
    pub current_revenue: f64,
    pub current_profit: f64,
    pub current_net_hourly_rate: f64,

    // Projected state
    pub new_price: f64,
    pub new_revenue: f64,
    pub new_profit: f64,
    pub new_net_hourly_rate: f64,

    // Deltas
    pub profit_delta: f64,
    pub revenue_delta: f64,
    /// Sessions freed per month; one session is one hour of labor by
    /// modeling assumption. Negative means *more* labor after the change.
    pub hours_saved: f64,
    /// Freed hours priced at the new contribution margin; 0 when no hours
    /// are freed
    pub recovered_time_value: f64,

    // Policy outputs
    pub clients_lost: f64,
    pub clients_remaining: f64,
    /// How many clients could walk before the change stops paying for itself
    pub max_clients_losable_at_break_even: f64,
    /// Churn fraction at which the raise exactly cancels out, in percent
    pub break_even_churn_percent: f64,
    pub status: Status,
    pub churn_health: ChurnHealth,
    /// False when current revenue is zero (insufficient input)
    pub is_valid: bool,
}
