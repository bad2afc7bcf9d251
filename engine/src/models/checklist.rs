//! Checklist input/output records
//!
//! The checklist turns qualitative signals about the practice into an
//! integer score and one of four recommendation tiers. The scoring engine
//! only consumes the *count* of raised signals; the individual flags keep
//! their identity because the form layer renders each one.

use serde::{Deserialize, Serialize};

/// The ten independent "pain signals" from the checklist
///
/// Each mirrors one statement the practitioner either recognizes in their
/// business or does not. Order is irrelevant; only the number of raised
/// flags feeds the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalFlags {
    /// A waiting list exists (demand exceeds supply)
    pub waiting_list: bool,
    /// Nobody has said "too expensive" in recent memory
    pub no_price_objections: bool,
    /// Working overtime to cover the household budget
    pub overtime_to_cover_budget: bool,
    /// Anger or frustration when a client cancels
    pub cancellation_frustration: bool,
    /// Clients treat the practitioner as a buddy, not an expert
    pub treated_as_buddy: bool,
    /// Rates unchanged for over 12-18 months
    pub stale_rates: bool,
    /// Spending more on training than it earns back
    pub unrecouped_training_spend: bool,
    /// Attracting "problem" and entitled clients
    pub problem_clients: bool,
    /// Peers of similar experience charge 30-50% more
    pub peers_charge_more: bool,
    /// Afraid to open the bank account at month end
    pub month_end_fear: bool,
}

impl SignalFlags {
    /// Number of signal slots
    pub const COUNT: u32 = 10;

    /// Number of raised flags (0-10); the only thing scoring consumes
    pub fn raised(&self) -> u32 {
        [
            self.waiting_list,
            self.no_price_objections,
            self.overtime_to_cover_budget,
            self.cancellation_frustration,
            self.treated_as_buddy,
            self.stale_rates,
            self.unrecouped_training_spend,
            self.problem_clients,
            self.peers_charge_more,
            self.month_end_fear,
        ]
        .iter()
        .filter(|&&flag| flag)
        .count() as u32
    }
}

/// Seasonal window the practitioner is considering for the change
///
/// Three windows are favorable for a raise (new-year resolutions,
/// back-from-vacation September, year-end budget resets); everything else
/// scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingWindow {
    January,
    September,
    YearEnd,
    Other,
}

impl TimingWindow {
    pub fn is_favorable(&self) -> bool {
        matches!(
            self,
            TimingWindow::January | TimingWindow::September | TimingWindow::YearEnd
        )
    }
}

/// Inputs to the checklist scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistInput {
    /// Fraction of the calendar that is booked, 0-100
    pub capacity_utilization_percent: f64,
    /// Business costs went up recently
    pub costs_increased_recently: bool,
    /// Seasonal timing of the planned change
    pub timing_window: TimingWindow,
    /// The ten pain signals
    pub signals: SignalFlags,
}

/// Recommendation tier, ordered from most cautious to most aggressive
///
/// Each tier carries a fixed title/description/strategy triple; the numeric
/// score is reported separately and never interpolated into the prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Score 0-3: pricing is not the bottleneck yet
    Wait,
    /// Score 4-6: first signals, a small inflation-style correction
    MildCorrection,
    /// Score 7-8: a solid 10-20% raise backed by added value
    QualityGrowth,
    /// Score 9+: full repositioning, accepting client-base turnover
    Reposition,
}

impl Tier {
    /// Fixed headline for the tier
    pub fn title(&self) -> &'static str {
        match self {
            Tier::Wait => "Wynik niski (0-3)",
            Tier::MildCorrection => "Wynik średni (4-6)",
            Tier::QualityGrowth => "Wynik wysoki (7-8)",
            Tier::Reposition => "Wynik bardzo wysoki (9+)",
        }
    }

    /// Fixed recommendation prose for the tier
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Wait => {
                "Twoje ceny prawdopodobnie nie są priorytetowym problemem. Najpierw zadbaj \
                 o pozyskiwanie klientów, jakość usługi i podstawowy marketing. Podwyżkę \
                 zostaw na później."
            }
            Tier::MildCorrection => {
                "Masz pierwsze sygnały, że Twoje ceny zaczynają odstawać od rzeczywistości. \
                 Rozważ delikatną korektę inflacyjną (np. +3–8%) dla nowych klientów \
                 i przygotuj grunt pod większą zmianę."
            }
            Tier::QualityGrowth => {
                "To dobry moment na podwyżkę. Z danych wynika, że jesteś przeciążony(-a), \
                 za tani(-a) i dokładasz do rozwoju zawodowego. Rozważ podwyżkę 10–20% \
                 zgodnie ze strategią „Wzrost jakości”."
            }
            Tier::Reposition => {
                "Twoje ceny są zdecydowanie za niskie względem obłożenia, wartości i rynku. \
                 Spokojnie możesz myśleć o mocniejszym ruchu (repozycjonowanie, +30–50%), \
                 jeśli jesteś gotów(-a) na wymianę części bazy klientów."
            }
        }
    }

    /// Pricing strategy the tier maps onto
    pub fn strategy(&self) -> &'static str {
        match self {
            Tier::Wait | Tier::MildCorrection => "inflation",
            Tier::QualityGrowth => "quality",
            Tier::Reposition => "reposition",
        }
    }
}

/// Output of the checklist scoring engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResult {
    /// Non-negative integer score, at most 14
    pub score: u32,
    pub tier: Tier,
}
