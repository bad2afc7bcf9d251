//! Tests for the break-even math
//!
//! Covers the max-losable-clients solve and the revenue-neutral churn
//! percentage, including the degenerate margins.

use pricing_simulator_core::{
    break_even_churn_percent, simulate, ChurnSpec, CostSpec, SimulationInput,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_no_increase_leaves_no_cushion() {
    // Same profit per session as today: losing anyone loses money
    let input = SimulationInput::new(15.0, 8.0, 150.0, 0.0, ChurnSpec::Percent(10.0));
    let result = simulate(&input);

    assert_close(result.max_clients_losable_at_break_even, 0.0);
}

#[test]
fn test_revenue_only_break_even() {
    // +20% on 15 clients: required = 18000 / (8 * 180) = 12.5 clients
    let input = SimulationInput::new(15.0, 8.0, 150.0, 20.0, ChurnSpec::Percent(10.0));
    let result = simulate(&input);

    assert_close(result.max_clients_losable_at_break_even, 2.5);
}

#[test]
fn test_fixed_costs_cancel_in_the_solve() {
    // With tracking on, required clients solve (profit + fixed) against the
    // contribution margin: (20400 + 2000) / (8 * 162.50)
    let input = SimulationInput {
        client_count: 20.0,
        sessions_per_client: 8.0,
        sessions_per_client_after: None,
        price_per_session: 150.0,
        price_increase_percent: 15.0,
        churn: ChurnSpec::Percent(15.0),
        costs: CostSpec::Tracked {
            fixed_monthly: 2_000.0,
            variable_per_session: 10.0,
        },
    };
    let result = simulate(&input);

    assert_close(
        result.max_clients_losable_at_break_even,
        20.0 - 22_400.0 / 1_300.0,
    );
}

#[test]
fn test_non_positive_margin_has_no_break_even() {
    // Variable cost swallows the raised price entirely
    let input = SimulationInput {
        client_count: 15.0,
        sessions_per_client: 8.0,
        sessions_per_client_after: None,
        price_per_session: 100.0,
        price_increase_percent: 10.0,
        churn: ChurnSpec::Percent(10.0),
        costs: CostSpec::Tracked {
            fixed_monthly: 0.0,
            variable_per_session: 120.0,
        },
    };
    let result = simulate(&input);

    assert_close(result.max_clients_losable_at_break_even, 0.0);
}

#[test]
fn test_zero_post_change_frequency_has_no_break_even() {
    let mut input = SimulationInput::new(15.0, 8.0, 150.0, 20.0, ChurnSpec::Percent(10.0));
    input.sessions_per_client_after = Some(0.0);
    let result = simulate(&input);

    assert_close(result.max_clients_losable_at_break_even, 0.0);
}

#[test]
fn test_break_even_churn_for_common_increases() {
    // p / (1 + p): +25% tolerates exactly 20% churn
    assert_close(break_even_churn_percent(25.0), 20.0);
    assert_close(break_even_churn_percent(100.0), 50.0);
    assert_close(break_even_churn_percent(0.0), 0.0);
}

#[test]
fn test_break_even_churn_is_reported_by_the_simulation() {
    let input = SimulationInput::new(15.0, 8.0, 150.0, 25.0, ChurnSpec::Percent(10.0));
    let result = simulate(&input);

    assert_close(result.break_even_churn_percent, 20.0);
}
