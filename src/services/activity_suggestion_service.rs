use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use std::error::Error;
use std::fmt;
use uuid::Builder;

use crate::config::SuggestionConfig;
use crate::models::event_template::EventTemplate;
use crate::models::trip::{ActivityRequest, SuggestedEvent, PENDING_TRIP_ID};
use crate::services::event_catalog::list_candidates;
use crate::services::event_count::estimate_event_count;
use crate::services::interest_filter::filter_by_interests;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const START_MINUTES: [u32; 4] = [0, 15, 30, 45];

#[derive(Debug, PartialEq)]
pub enum SuggestionError {
    /// The request is missing something or contradicts itself; safe to show the caller
    InvalidInput(String),
    /// Anything else; the message is for logs only
    UnexpectedFailure(String),
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SuggestionError::UnexpectedFailure(msg) => write!(f, "Unexpected failure: {}", msg),
        }
    }
}

impl Error for SuggestionError {}

/// Inclusive date range of a trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripSpan {
    pub fn days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A request that passed validation, with its dates parsed
#[derive(Debug)]
pub struct ValidatedRequest<'a> {
    pub destination: &'a str,
    pub span: TripSpan,
    pub budget: f64,
    pub interests: Option<&'a str>,
    pub trip_id: &'a str,
}

/// Most expensive a single suggestion may be for this budget and event count
pub fn cost_ceiling(budget: f64, event_count: usize, config: &SuggestionConfig) -> f64 {
    let per_event = budget / event_count.max(1) as f64 * config.per_event_budget_multiplier;
    per_event.min(budget * config.max_budget_share)
}

// A malformed date is the caller's mistake, so it is reported as a 400 rather than a 500
fn parse_date(value: &str, field: &str) -> Result<NaiveDate, SuggestionError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        SuggestionError::InvalidInput(format!("{} must be a date formatted as YYYY-MM-DD", field))
    })
}

pub struct ActivitySuggestionGenerator {
    config: SuggestionConfig,
}

impl Default for ActivitySuggestionGenerator {
    fn default() -> Self {
        Self::new(SuggestionConfig::default())
    }
}

impl ActivitySuggestionGenerator {
    pub fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Check required fields and resolve the trip span.
    ///
    /// Without an end date the trip lasts `default_trip_days` from the start.
    pub fn validate<'a>(
        &self,
        request: &'a ActivityRequest,
    ) -> Result<ValidatedRequest<'a>, SuggestionError> {
        let destination = request.destination.trim();
        if destination.is_empty() {
            return Err(SuggestionError::InvalidInput("destination is required".to_string()));
        }
        if request.start_date.trim().is_empty() {
            return Err(SuggestionError::InvalidInput("startDate is required".to_string()));
        }
        let budget = match request.budget {
            Some(budget) if budget.is_finite() && budget > 0.0 => budget,
            Some(_) => {
                return Err(SuggestionError::InvalidInput(
                    "budget must be greater than 0".to_string(),
                ))
            }
            None => return Err(SuggestionError::InvalidInput("budget is required".to_string())),
        };

        let start = parse_date(&request.start_date, "startDate")?;
        let end = match request.end_date.as_deref().map(str::trim) {
            Some(end) if !end.is_empty() => parse_date(end, "endDate")?,
            _ => start
                .checked_add_signed(Duration::days(self.config.default_trip_days - 1))
                .ok_or_else(|| {
                    SuggestionError::UnexpectedFailure(format!(
                        "default trip end overflows the calendar for start {}",
                        start
                    ))
                })?,
        };
        if end < start {
            return Err(SuggestionError::InvalidInput(
                "endDate must not be before startDate".to_string(),
            ));
        }

        let span = TripSpan { start, end };

        let trip_id = request
            .trip_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(PENDING_TRIP_ID);

        Ok(ValidatedRequest {
            destination,
            span,
            budget,
            interests: request.interests.as_deref(),
            trip_id,
        })
    }

    /// Suggest activities for a trip, spread over its days.
    ///
    /// The shape of the result is fixed by the request; titles, times and
    /// costs depend on `rng`. Events whose day would land past the end of the
    /// trip are dropped, so fewer than the estimated count may come back.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &ActivityRequest,
        rng: &mut R,
    ) -> Result<Vec<SuggestedEvent>, SuggestionError> {
        let trip = self.validate(request)?;
        let days = trip.span.days();
        let event_count = estimate_event_count(days, trip.budget, &self.config, rng);

        let candidates = filter_by_interests(list_candidates(trip.destination), trip.interests);
        if candidates.is_empty() {
            return Err(SuggestionError::UnexpectedFailure(
                "event catalog has no candidates".to_string(),
            ));
        }

        let ceiling = cost_ceiling(trip.budget, event_count, &self.config);
        log::debug!(
            "Generating {} events over {} days for {} (ceiling {:.2})",
            event_count,
            days,
            trip.destination,
            ceiling
        );

        let mut events = Vec::with_capacity(event_count);
        for i in 0..event_count {
            let day_offset = (i as i64 * days) / event_count as i64;
            let date = match trip
                .span
                .start
                .checked_add_signed(Duration::days(day_offset))
                .filter(|date| trip.span.contains(*date))
            {
                Some(date) => date,
                None => {
                    log::debug!("Skipping event {}: day offset {} is past the trip", i, day_offset);
                    continue;
                }
            };

            let template = candidates[i % candidates.len()];
            events.push(self.build_event(template, date, ceiling, trip.trip_id, rng)?);
        }

        Ok(events)
    }

    fn build_event<R: Rng + ?Sized>(
        &self,
        template: &EventTemplate,
        date: NaiveDate,
        ceiling: f64,
        trip_id: &str,
        rng: &mut R,
    ) -> Result<SuggestedEvent, SuggestionError> {
        let (start, end) = self.time_window(rng)?;

        Ok(SuggestedEvent {
            id: format!("event-{}", Builder::from_random_bytes(rng.gen()).into_uuid()),
            trip_id: trip_id.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            time: start.format(TIME_FORMAT).to_string(),
            end_time: end.format(TIME_FORMAT).to_string(),
            cost: self.approximate_cost(template.base_cost, ceiling, rng),
        })
    }

    /// Random start on a quarter hour, ending one to two hours later.
    /// The end may wrap past midnight.
    fn time_window<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(NaiveTime, NaiveTime), SuggestionError> {
        let hour = rng.gen_range(0..24);
        let minute = START_MINUTES[rng.gen_range(0..START_MINUTES.len())];
        let start = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            SuggestionError::UnexpectedFailure(format!("invalid start time {}:{}", hour, minute))
        })?;

        let length = rng.gen_range(self.config.min_event_hours..=self.config.max_event_hours);
        let (end, _) = start.overflowing_add_signed(Duration::hours(length));

        Ok((start, end))
    }

    /// Base cost with a symmetric random jitter, rounded, clamped to `[0, ceiling]`
    fn approximate_cost<R: Rng + ?Sized>(&self, base_cost: f64, ceiling: f64, rng: &mut R) -> f64 {
        let jitter = self.config.cost_jitter;
        let variation = if jitter > 0.0 {
            rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };

        (base_cost * (1.0 + variation)).round().min(ceiling).max(0.0)
    }
}
