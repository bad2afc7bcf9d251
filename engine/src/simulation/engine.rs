//! Simulation engine implementation
//!
//! One pure, total function over the numeric input domain. Degenerate
//! inputs (zero clients, zero sessions, negative margins) produce
//! degenerate-but-defined outputs instead of errors.
//!
//! # Algorithm
//!
//! ```text
//! 1. Clamp client count at 0
//! 2. Current volume:   sessions, revenue, costs, profit
//! 3. Current net rate: price - (fixed/sessions + variable), floored at 0
//! 4. New price:        price * (1 + increase/100)
//! 5. Churn:            clients lost per ChurnSpec; remaining clamped at 0
//! 6. New volume:       remaining clients * post-change session frequency
//! 7. New revenue/costs/profit and net rate, analogous to 2-3
//! 8. Deltas:           profit, revenue, hours (1 session = 1 hour)
//! 9. Time value:       freed hours priced at the new contribution margin
//! 10. Break-even:      max clients losable while keeping current profit
//! 11. Status:          financial diff vs. a +/-10 PLN dead zone
//! 12. Validity:        current revenue must be positive
//! ```
//!
//! # Example
//!
//! ```
//! use pricing_simulator_core::{simulate, ChurnSpec, SimulationInput, Status};
//!
//! let input = SimulationInput::new(15.0, 8.0, 150.0, 20.0, ChurnSpec::Percent(10.0));
//! let result = simulate(&input);
//!
//! assert_eq!(result.current_revenue, 18_000.0);
//! assert_eq!(result.clients_remaining, 13.5);
//! assert_eq!(result.status, Status::Positive);
//! ```

use crate::models::simulation::{
    ChurnHealth, ChurnSpec, SimulationInput, SimulationResult, Status,
};

/// Dead zone around zero for the status verdict, in PLN
///
/// A monthly diff inside the zone is noise, not a signal either way.
pub const STATUS_DEAD_ZONE: f64 = 10.0;

/// Churn at or below this fraction suggests the raise was too timid
const CHURN_HEALTHY_FLOOR: f64 = 0.05;

/// Churn above this fraction signals a communication/positioning problem
const CHURN_HEALTHY_CEILING: f64 = 0.20;

/// Project the financial outcome of a price change
///
/// Pure and total: never panics, never allocates beyond the returned
/// record. When the result's `is_valid` is false, all other fields are
/// placeholders and must not be displayed.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let clients = input.client_count.max(0.0);
    let fixed = input.costs.fixed_monthly();
    let variable = input.costs.variable_per_session();

    // Current state
    let current_sessions = clients * input.sessions_per_client;
    let current_revenue = current_sessions * input.price_per_session;
    let current_costs = fixed + current_sessions * variable;
    let current_profit = current_revenue - current_costs;
    let current_net_hourly_rate =
        net_hourly_rate(input.price_per_session, current_sessions, fixed, variable);

    // Projected state
    let new_price = input.price_per_session * (1.0 + input.price_increase_percent / 100.0);
    let clients_lost = input.churn.clients_lost(clients);
    let clients_remaining = (clients - clients_lost).max(0.0);
    let new_sessions = clients_remaining * input.sessions_after();
    let new_revenue = new_sessions * new_price;
    let new_costs = fixed + new_sessions * variable;
    let new_profit = new_revenue - new_costs;
    let new_net_hourly_rate = net_hourly_rate(new_price, new_sessions, fixed, variable);

    // Deltas; one session is one hour of labor by modeling assumption
    let profit_delta = new_profit - current_profit;
    let revenue_delta = new_revenue - current_revenue;
    let hours_saved = current_sessions - new_sessions;
    let recovered_time_value = hours_saved.max(0.0) * (new_price - variable);

    let max_clients_losable_at_break_even = max_losable_clients(
        clients,
        input.sessions_after(),
        new_price,
        current_profit,
        fixed,
        variable,
    );

    // The diff shown to the user is profit-based only when costs are tracked
    let financial_diff = if input.costs.is_tracked() {
        profit_delta
    } else {
        revenue_delta
    };
    let status = if financial_diff > STATUS_DEAD_ZONE {
        Status::Positive
    } else if financial_diff < -STATUS_DEAD_ZONE {
        Status::Negative
    } else {
        Status::Neutral
    };

    SimulationResult {
        current_revenue,
        current_profit,
        current_net_hourly_rate,
        new_price,
        new_revenue,
        new_profit,
        new_net_hourly_rate,
        profit_delta,
        revenue_delta,
        hours_saved,
        recovered_time_value,
        clients_lost,
        clients_remaining,
        max_clients_losable_at_break_even,
        break_even_churn_percent: break_even_churn_percent(input.price_increase_percent),
        status,
        churn_health: churn_health(&input.churn, clients),
        is_valid: current_revenue > 0.0,
    }
}

/// Profit attributable to one session-hour
///
/// Apportions the fixed overhead evenly across all sessions so the figure
/// stays comparable before and after a volume change. Zero sessions means
/// a zero rate, and the rate never goes negative.
fn net_hourly_rate(price: f64, sessions: f64, fixed: f64, variable: f64) -> f64 {
    if sessions <= 0.0 {
        return 0.0;
    }
    (price - (fixed / sessions + variable)).max(0.0)
}

/// Clients losable before new profit drops below current profit
///
/// Solves `remaining * sessions_after * margin - fixed == current_profit`
/// for the remaining-client count. Isolating the contribution margin makes
/// the fixed-cost term cancel correctly whether or not cost tracking is on.
/// A non-positive margin or a zero post-change frequency has no break-even:
/// every unit sold loses money, or no units are sold at all.
fn max_losable_clients(
    clients: f64,
    sessions_after: f64,
    new_price: f64,
    current_profit: f64,
    fixed: f64,
    variable: f64,
) -> f64 {
    let contribution_margin = new_price - variable;
    if contribution_margin <= 0.0 || sessions_after <= 0.0 {
        return 0.0;
    }
    let required_clients = (current_profit + fixed) / (sessions_after * contribution_margin);
    (clients - required_clients).max(0.0)
}

/// Churn fraction at which a price increase exactly cancels out, in percent
///
/// For an increase fraction `p` the revenue-neutral churn is `p / (1 + p)`.
/// A function of the increase alone; undefined (returned as 0) when the
/// increase drives the price to or below zero.
///
/// # Example
/// ```
/// use pricing_simulator_core::break_even_churn_percent;
///
/// let churn = break_even_churn_percent(25.0);
/// assert!((churn - 20.0).abs() < 1e-9);
/// ```
pub fn break_even_churn_percent(price_increase_percent: f64) -> f64 {
    let p = price_increase_percent / 100.0;
    if 1.0 + p <= 0.0 {
        return 0.0;
    }
    (p / (1.0 + p) * 100.0).max(0.0)
}

fn churn_health(churn: &ChurnSpec, clients: f64) -> ChurnHealth {
    let fraction = churn.as_fraction_of(clients);
    if fraction <= CHURN_HEALTHY_FLOOR {
        ChurnHealth::TooLow
    } else if fraction > CHURN_HEALTHY_CEILING {
        ChurnHealth::TooHigh
    } else {
        ChurnHealth::Optimal
    }
}
