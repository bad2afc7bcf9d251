//! Property tests for the engines
//!
//! The engines are pure and total, which makes them good proptest targets:
//! every numeric input must produce a well-defined result, and the spec-level
//! invariants must hold across the whole domain, not just at the worked
//! examples.

use proptest::prelude::*;

use pricing_simulator_core::{
    score, simulate, ChecklistInput, ChurnSpec, CostSpec, SignalFlags, SimulationInput,
    TimingWindow,
};

fn churn_strategy() -> impl Strategy<Value = ChurnSpec> {
    prop_oneof![
        (0.0..150.0f64).prop_map(ChurnSpec::Percent),
        (0.0..50.0f64).prop_map(ChurnSpec::Count),
    ]
}

fn window_strategy() -> impl Strategy<Value = TimingWindow> {
    prop_oneof![
        Just(TimingWindow::January),
        Just(TimingWindow::September),
        Just(TimingWindow::YearEnd),
        Just(TimingWindow::Other),
    ]
}

/// Flags with the first `n` slots raised
fn flags_with(n: usize) -> SignalFlags {
    let mut flags = SignalFlags::default();
    let slots: [&mut bool; 10] = [
        &mut flags.waiting_list,
        &mut flags.no_price_objections,
        &mut flags.overtime_to_cover_budget,
        &mut flags.cancellation_frustration,
        &mut flags.treated_as_buddy,
        &mut flags.stale_rates,
        &mut flags.unrecouped_training_spend,
        &mut flags.problem_clients,
        &mut flags.peers_charge_more,
        &mut flags.month_end_fear,
    ];
    for slot in slots.into_iter().take(n) {
        *slot = true;
    }
    flags
}

proptest! {
    #[test]
    fn new_price_is_the_multiplicative_increase(
        price in 0.0..10_000.0f64,
        increase in 0.0..300.0f64,
    ) {
        let input = SimulationInput::new(10.0, 8.0, price, increase, ChurnSpec::Percent(10.0));
        let result = simulate(&input);
        // Same expression, so bitwise equality is required, not approximate
        prop_assert_eq!(result.new_price, price * (1.0 + increase / 100.0));
    }

    #[test]
    fn remaining_clients_never_go_negative(
        clients in 0.0..100.0f64,
        churn in churn_strategy(),
    ) {
        let input = SimulationInput::new(clients, 8.0, 150.0, 20.0, churn);
        let result = simulate(&input);
        prop_assert!(result.clients_remaining >= 0.0);
    }

    #[test]
    fn count_churn_at_or_above_base_empties_it(
        clients in 0.0..50.0f64,
        excess in 0.0..50.0f64,
    ) {
        let input = SimulationInput::new(
            clients,
            8.0,
            150.0,
            20.0,
            ChurnSpec::Count(clients + excess),
        );
        let result = simulate(&input);
        prop_assert_eq!(result.clients_remaining, 0.0);
    }

    #[test]
    fn non_positive_margin_never_yields_a_cushion(
        price in 0.0..500.0f64,
        increase in 0.0..100.0f64,
        margin_deficit in 0.0..200.0f64,
    ) {
        let new_price = price * (1.0 + increase / 100.0);
        let input = SimulationInput {
            client_count: 15.0,
            sessions_per_client: 8.0,
            sessions_per_client_after: None,
            price_per_session: price,
            price_increase_percent: increase,
            churn: ChurnSpec::Percent(10.0),
            costs: CostSpec::Tracked {
                fixed_monthly: 500.0,
                variable_per_session: new_price + margin_deficit,
            },
        };
        let result = simulate(&input);
        prop_assert_eq!(result.max_clients_losable_at_break_even, 0.0);
    }

    #[test]
    fn zero_revenue_is_never_valid(
        sessions in 0.0..20.0f64,
        price in 0.0..1_000.0f64,
    ) {
        // Either factor being zero zeroes the revenue
        let input = SimulationInput::new(0.0, sessions, price, 20.0, ChurnSpec::Percent(10.0));
        prop_assert!(!simulate(&input).is_valid);
    }

    #[test]
    fn checklist_score_is_monotone_in_signal_count(
        fewer in 0usize..10,
        capacity in 0.0..100.0f64,
        costs_up in any::<bool>(),
        window in window_strategy(),
    ) {
        let build = |n: usize| ChecklistInput {
            capacity_utilization_percent: capacity,
            costs_increased_recently: costs_up,
            timing_window: window,
            signals: flags_with(n),
        };
        prop_assert!(score(&build(fewer + 1)).score >= score(&build(fewer)).score);
    }

    #[test]
    fn checklist_score_never_exceeds_fourteen(
        n in 0usize..=10,
        capacity in 0.0..200.0f64,
        costs_up in any::<bool>(),
        window in window_strategy(),
    ) {
        let input = ChecklistInput {
            capacity_utilization_percent: capacity,
            costs_increased_recently: costs_up,
            timing_window: window,
            signals: flags_with(n),
        };
        prop_assert!(score(&input).score <= 14);
    }
}
