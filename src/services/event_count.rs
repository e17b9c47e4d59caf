use rand::Rng;

use crate::config::SuggestionConfig;

/// Hard ceiling on suggestions per request, whatever the trip length or budget
pub const MAX_EVENTS: usize = 1000;

/// Budget-based ceiling on the number of events: one per `budget_per_event`
/// spent, plus one. Kept in f64 so huge budgets cannot overflow.
pub fn budget_cap(budget: f64, config: &SuggestionConfig) -> f64 {
    (budget / config.budget_per_event).floor().max(0.0) + 1.0
}

/// How many events to propose for a trip of `trip_days` days.
///
/// A per-day rate is sampled between the configured bounds and scaled by the
/// duration, then capped by what the budget plausibly supports and by
/// `MAX_EVENTS`. Never returns zero.
pub fn estimate_event_count<R: Rng + ?Sized>(
    trip_days: i64,
    budget: f64,
    config: &SuggestionConfig,
    rng: &mut R,
) -> usize {
    let days = trip_days.max(1) as f64;
    let rate = if config.min_events_per_day < config.max_events_per_day {
        rng.gen_range(config.min_events_per_day..=config.max_events_per_day)
    } else {
        config.min_events_per_day
    };

    let count = (rate * days)
        .floor()
        .min(budget_cap(budget, config))
        .min(MAX_EVENTS as f64)
        .max(1.0);
    count as usize
}
