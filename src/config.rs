use std::env;
use std::str::FromStr;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const SUGGESTION_LATENCY_MS: u64 = 500;
const RECEIPT_LATENCY_MS: u64 = 1500;

const MIN_EVENTS_PER_DAY: f64 = 1.0;
const MAX_EVENTS_PER_DAY: f64 = 3.0;
const BUDGET_PER_EVENT: f64 = 10.0;
const PER_EVENT_BUDGET_MULTIPLIER: f64 = 2.0;
const MAX_BUDGET_SHARE: f64 = 0.4;
const COST_JITTER: f64 = 0.2; // +/- 20%
const DEFAULT_TRIP_DAYS: i64 = 3;
const MIN_EVENT_HOURS: i64 = 1;
const MAX_EVENT_HOURS: i64 = 2;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Artificial delay before answering a suggestion request
    pub suggestion_latency: Duration,
    /// Artificial delay before answering a receipt scan
    pub receipt_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            suggestion_latency: Duration::from_millis(SUGGESTION_LATENCY_MS),
            receipt_latency: Duration::from_millis(RECEIPT_LATENCY_MS),
        }
    }
}

impl AppConfig {
    /// Read settings from environment variables, keeping defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
            suggestion_latency: Duration::from_millis(env_or(
                "SUGGESTION_LATENCY_MS",
                SUGGESTION_LATENCY_MS,
            )),
            receipt_latency: Duration::from_millis(env_or("RECEIPT_LATENCY_MS", RECEIPT_LATENCY_MS)),
        }
    }

    /// Same settings with no artificial latency, used by tests
    pub fn without_latency(mut self) -> Self {
        self.suggestion_latency = Duration::ZERO;
        self.receipt_latency = Duration::ZERO;
        self
    }
}

/// Tuning knobs for the activity suggestion generator.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    /// Lower bound of the sampled events-per-day rate
    pub min_events_per_day: f64,
    /// Upper bound of the sampled events-per-day rate
    pub max_events_per_day: f64,
    /// Budget units that "pay" for one more event in the budget cap
    pub budget_per_event: f64,
    pub per_event_budget_multiplier: f64,
    /// Largest share of the total budget a single event may cost
    pub max_budget_share: f64,
    pub cost_jitter: f64,
    /// Trip length used when the request carries no end date
    pub default_trip_days: i64,
    pub min_event_hours: i64,
    pub max_event_hours: i64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            min_events_per_day: MIN_EVENTS_PER_DAY,
            max_events_per_day: MAX_EVENTS_PER_DAY,
            budget_per_event: BUDGET_PER_EVENT,
            per_event_budget_multiplier: PER_EVENT_BUDGET_MULTIPLIER,
            max_budget_share: MAX_BUDGET_SHARE,
            cost_jitter: COST_JITTER,
            default_trip_days: DEFAULT_TRIP_DAYS,
            min_event_hours: MIN_EVENT_HOURS,
            max_event_hours: MAX_EVENT_HOURS,
        }
    }
}

impl SuggestionConfig {
    /// Create the config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            min_events_per_day: env_or("MIN_EVENTS_PER_DAY", defaults.min_events_per_day),
            max_events_per_day: env_or("MAX_EVENTS_PER_DAY", defaults.max_events_per_day),
            budget_per_event: env_or("BUDGET_PER_EVENT", defaults.budget_per_event),
            per_event_budget_multiplier: env_or(
                "PER_EVENT_BUDGET_MULTIPLIER",
                defaults.per_event_budget_multiplier,
            ),
            max_budget_share: env_or("MAX_BUDGET_SHARE", defaults.max_budget_share),
            cost_jitter: env_or("COST_JITTER", defaults.cost_jitter),
            default_trip_days: env_or("DEFAULT_TRIP_DAYS", defaults.default_trip_days),
            min_event_hours: env_or("MIN_EVENT_HOURS", defaults.min_event_hours),
            max_event_hours: env_or("MAX_EVENT_HOURS", defaults.max_event_hours),
        };

        if config.is_consistent() {
            config
        } else {
            log::warn!("Inconsistent suggestion settings in environment, using defaults");
            defaults
        }
    }

    /// Ranges must be non-empty and every bound positive
    fn is_consistent(&self) -> bool {
        self.min_events_per_day > 0.0
            && self.min_events_per_day <= self.max_events_per_day
            && self.budget_per_event > 0.0
            && self.per_event_budget_multiplier > 0.0
            && self.max_budget_share > 0.0
            && (0.0..1.0).contains(&self.cost_jitter)
            && self.default_trip_days >= 1
            && self.min_event_hours >= 0
            && self.min_event_hours <= self.max_event_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suggestion_config_is_consistent() {
        let config = SuggestionConfig::default();
        assert!(config.is_consistent());
        assert_eq!(config.default_trip_days, 3);
        assert_eq!(config.max_budget_share, 0.4);
    }

    #[test]
    fn test_inverted_rate_range_is_rejected() {
        let config = SuggestionConfig {
            min_events_per_day: 4.0,
            max_events_per_day: 2.0,
            ..Default::default()
        };
        assert!(!config.is_consistent());
    }

    #[test]
    fn test_without_latency() {
        let config = AppConfig::default().without_latency();
        assert_eq!(config.suggestion_latency, Duration::ZERO);
        assert_eq!(config.receipt_latency, Duration::ZERO);
        assert_eq!(config.port, 8080);
    }
}
