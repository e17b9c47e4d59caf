use crate::models::event_template::EventTemplate;

/// Split a comma separated interest list into trimmed, lowercase keywords.
/// Blank entries are dropped.
pub fn parse_interests(interests: &str) -> Vec<String> {
    interests
        .split(',')
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect()
}

/// Keep the templates matching at least one interest keyword.
///
/// Order is preserved. When no interests are given, or none of them match
/// anything, the candidates come back unchanged so the caller always has
/// something to suggest.
pub fn filter_by_interests(
    candidates: Vec<&'static EventTemplate>,
    interests: Option<&str>,
) -> Vec<&'static EventTemplate> {
    let keywords = parse_interests(interests.unwrap_or_default());
    if keywords.is_empty() {
        return candidates;
    }

    let filtered: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|template| keywords.iter().any(|k| template.matches_keyword(k)))
        .collect();

    if filtered.is_empty() {
        log::debug!("No template matched interests {:?}, using all candidates", keywords);
        candidates
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event_catalog::{list_candidates, GENERAL_EVENTS};

    #[test]
    fn test_parse_interests() {
        assert_eq!(parse_interests(" Outdoor, FOOD ,,"), vec!["outdoor", "food"]);
        assert!(parse_interests("   ").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let filtered = filter_by_interests(list_candidates("Tampa"), Some("outdoor"));
        let titles: Vec<_> = filtered.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Scenic Hiking Trail", "Outdoor Adventure"]);
    }

    #[test]
    fn test_filter_by_description_substring() {
        // "cuisine" only appears in the food tour description
        let filtered = filter_by_interests(list_candidates("Tampa"), Some("Cuisine"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Food Tour");
    }

    #[test]
    fn test_destination_templates_stay_ahead() {
        let filtered = filter_by_interests(list_candidates("Miami Beach"), Some("outdoor"));
        assert_eq!(filtered[0].title, "Everglades Tour");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_no_match_falls_back_to_all_candidates() {
        let filtered = filter_by_interests(list_candidates("Tampa"), Some("zzznomatch"));
        assert_eq!(filtered.len(), GENERAL_EVENTS.len());
    }

    #[test]
    fn test_missing_or_blank_interests_keep_candidates() {
        assert_eq!(filter_by_interests(list_candidates("Tampa"), None).len(), 10);
        assert_eq!(filter_by_interests(list_candidates("Tampa"), Some(" , ")).len(), 10);
    }
}
