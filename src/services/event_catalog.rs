use crate::models::event_template::EventTemplate;

/// Always offered, whatever the destination
pub static GENERAL_EVENTS: [EventTemplate; 10] = [
    EventTemplate::new("Local Museum Visit", "Explore local history and culture", 15.0, "culture"),
    EventTemplate::new("Scenic Hiking Trail", "Experience natural beauty", 0.0, "outdoor"),
    EventTemplate::new("Food Tour", "Taste local cuisine", 35.0, "food"),
    EventTemplate::new("Landmark Tour", "Visit famous landmarks", 25.0, "sightseeing"),
    EventTemplate::new("Beach Day", "Relax by the ocean", 5.0, "leisure"),
    EventTemplate::new("Nightlife Experience", "Explore bars and clubs", 50.0, "nightlife"),
    EventTemplate::new("Local Market", "Shop for souvenirs and local goods", 10.0, "shopping"),
    EventTemplate::new("Concert or Show", "Enjoy local entertainment", 40.0, "entertainment"),
    EventTemplate::new("Historical Site", "Visit important historical locations", 20.0, "culture"),
    EventTemplate::new("Outdoor Adventure", "Exciting outdoor activities", 45.0, "outdoor"),
];

pub struct DestinationEvents {
    /// Lowercase fragments looked for in the destination name
    pub keywords: &'static [&'static str],
    pub events: [EventTemplate; 3],
}

/// Checked in order, first match wins
pub static DESTINATION_EVENTS: [DestinationEvents; 3] = [
    DestinationEvents {
        keywords: &["miami", "beach"],
        events: [
            EventTemplate::new("Beach Day", "Relax on the famous beaches", 0.0, "leisure"),
            EventTemplate::new("Art Deco Tour", "Explore Miami's unique architecture", 25.0, "culture"),
            EventTemplate::new("Everglades Tour", "Wildlife and nature experience", 45.0, "outdoor"),
        ],
    },
    DestinationEvents {
        keywords: &["new york", "nyc"],
        events: [
            EventTemplate::new("Broadway Show", "World-class theater experience", 120.0, "entertainment"),
            EventTemplate::new(
                "Central Park Exploration",
                "Urban greenspace in the heart of NYC",
                0.0,
                "outdoor",
            ),
            EventTemplate::new("Museum of Modern Art", "World-famous art collection", 25.0, "culture"),
        ],
    },
    DestinationEvents {
        keywords: &["las vegas"],
        events: [
            EventTemplate::new("Casino Night", "Try your luck at the tables", 100.0, "entertainment"),
            EventTemplate::new(
                "Grand Canyon Helicopter Tour",
                "Breathtaking aerial views",
                300.0,
                "outdoor",
            ),
            EventTemplate::new("Magic Show", "World-class illusionists", 85.0, "entertainment"),
        ],
    },
];

/// Destination specific templates for `destination`, if it is a known one
pub fn destination_events(destination: &str) -> Option<&'static [EventTemplate]> {
    let destination = destination.to_lowercase();

    DESTINATION_EVENTS
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| destination.contains(k)))
        .map(|entry| &entry.events[..])
}

/// Every template worth suggesting for `destination`, destination specific ones first.
pub fn list_candidates(destination: &str) -> Vec<&'static EventTemplate> {
    let local = destination_events(destination).unwrap_or(&[]);

    local.iter().chain(GENERAL_EVENTS.iter()).collect()
}
