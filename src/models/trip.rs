use serde::{Deserialize, Serialize};

pub const PENDING_TRIP_ID: &str = "pending";

/// Body of `POST /api/trip/suggest-activities`.
///
/// Every field defaults so that a missing value reaches validation and is
/// reported with a readable message instead of a deserializer error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityRequest {
    pub destination: String,
    /// "YYYY-MM-DD"
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    /// Comma separated keywords, e.g. "outdoor, food"
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
}

impl From<&Trip> for ActivityRequest {
    fn from(trip: &Trip) -> Self {
        Self {
            destination: trip.destination.clone(),
            start_date: trip.start_date.clone(),
            end_date: trip.end_date.clone().filter(|d| !d.trim().is_empty()),
            budget: Some(trip.budget),
            interests: Some(trip.description.clone()),
            trip_id: Some(trip.id.clone()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedEvent {
    pub id: String,
    pub trip_id: String,
    pub title: String,
    pub description: String,
    /// "YYYY-MM-DD"
    pub date: String,
    /// Start time, "HH:MM"
    pub time: String,
    pub end_time: String,
    pub cost: f64,
}

impl SuggestedEvent {
    pub fn is_pending(&self) -> bool {
        self.trip_id == PENDING_TRIP_ID
    }

    /// Bind a pending event to the trip that now owns it
    pub fn assign_trip(&mut self, trip_id: &str) {
        self.trip_id = trip_id.to_string();
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ActivityResponse {
    pub events: Vec<SuggestedEvent>,
}

/// A trip as stored by the browser client. The service never persists these.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Free text interests entered on trip creation
    pub description: String,
    pub budget: f64,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Trip {
    /// Trips without an explicit flag count as active
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn toggle_active(&mut self) {
        self.active = Some(!self.is_active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> Trip {
        Trip {
            id: "trip-1717200000000".to_string(),
            name: "Summer".to_string(),
            destination: "Miami Beach".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: Some("".to_string()),
            description: "outdoor, food".to_string(),
            budget: 300.0,
            active: None,
        }
    }

    #[test]
    fn test_request_from_trip() {
        let trip = sample_trip();
        let request = ActivityRequest::from(&trip);

        assert_eq!(request.destination, "Miami Beach");
        assert_eq!(request.budget, Some(300.0));
        assert_eq!(request.interests.as_deref(), Some("outdoor, food"));
        assert_eq!(request.trip_id.as_deref(), Some("trip-1717200000000"));
        // blank end dates are treated as absent
        assert_eq!(request.end_date, None);
    }

    #[test]
    fn test_toggle_active() {
        let mut trip = sample_trip();
        assert!(trip.is_active());
        trip.toggle_active();
        assert!(!trip.is_active());
        trip.toggle_active();
        assert_eq!(trip.active, Some(true));
    }

    #[test]
    fn test_request_accepts_camel_case_and_missing_fields() {
        let request: ActivityRequest = serde_json::from_str(
            r#"{"destination":"NYC","startDate":"2024-06-01","budget":250}"#,
        )
        .unwrap();
        assert_eq!(request.start_date, "2024-06-01");
        assert_eq!(request.end_date, None);
        assert_eq!(request.interests, None);

        let empty: ActivityRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.destination.is_empty());
        assert_eq!(empty.budget, None);
    }

    #[test]
    fn test_event_serializes_client_field_names() {
        let mut event = SuggestedEvent {
            id: "event-1".to_string(),
            trip_id: PENDING_TRIP_ID.to_string(),
            title: "Food Tour".to_string(),
            description: "Taste local cuisine".to_string(),
            date: "2024-06-01".to_string(),
            time: "09:15".to_string(),
            end_time: "10:15".to_string(),
            cost: 35.0,
        };
        assert!(event.is_pending());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["tripId"], "pending");
        assert_eq!(json["endTime"], "10:15");

        event.assign_trip("trip-42");
        assert!(!event.is_pending());
        assert_eq!(event.trip_id, "trip-42");
    }
}
