//! Static troubleshooting guide.
//!
//! The guide is embedded as JSON and parsed once per process. It is
//! read-only and has no dependency on the subnet arithmetic.

use crate::models::{TroubleshootingCategory, TroubleshootingStep};
use lazy_static::lazy_static;
use std::error::Error;

const GUIDE_JSON: &str = include_str!("../data/troubleshooting.json");

lazy_static! {
    static ref GUIDE: Result<Vec<TroubleshootingCategory>, String> = parse_guide(GUIDE_JSON);
}

/// Parse a guide table, reporting the JSON path of the first bad field.
fn parse_guide(json: &str) -> Result<Vec<TroubleshootingCategory>, String> {
    let de = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(de).map_err(|e| {
        format!(
            "Error parsing troubleshooting data at {path}: {inner}",
            path = e.path(),
            inner = e.inner()
        )
    })
}

/// All troubleshooting categories, in display order.
pub fn troubleshooting_categories() -> Result<&'static [TroubleshootingCategory], Box<dyn Error>> {
    match &*GUIDE {
        Ok(categories) => Ok(categories.as_slice()),
        Err(e) => Err(e.clone().into()),
    }
}

/// Find one category by id, for the category filter.
pub fn find_category(id: &str) -> Result<Option<&'static TroubleshootingCategory>, Box<dyn Error>> {
    Ok(troubleshooting_categories()?.iter().find(|c| c.id == id))
}

/// Find a step anywhere in the guide by its id.
pub fn find_step(id: &str) -> Result<Option<&'static TroubleshootingStep>, Box<dyn Error>> {
    Ok(troubleshooting_categories()?
        .iter()
        .find_map(|c| c.step(id)))
}

/// Number of steps across all categories.
pub fn total_steps() -> Result<usize, Box<dyn Error>> {
    Ok(troubleshooting_categories()?
        .iter()
        .map(|c| c.steps.len())
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_guide_loads() {
        let categories = troubleshooting_categories().expect("embedded guide should parse");
        assert_eq!(categories.len(), 5);
        let icons: Vec<&str> = categories.iter().map(|c| c.icon.as_str()).collect();
        assert_eq!(icons, vec!["Network", "Gauge", "Globe", "Shield", "Wifi"]);
        assert!(categories.iter().all(|c| !c.steps.is_empty()));
    }

    #[test]
    fn test_step_ids_unique() {
        let categories = troubleshooting_categories().unwrap();
        let mut seen = HashSet::new();
        for step in categories.iter().flat_map(|c| c.steps.iter()) {
            assert!(seen.insert(step.id.as_str()), "Duplicate step id {}", step.id);
        }
        assert_eq!(seen.len(), total_steps().unwrap());
    }

    #[test]
    fn test_find_category() {
        let dns = find_category("dns").unwrap().expect("dns category");
        assert_eq!(dns.icon, "Globe");
        assert!(find_category("nope").unwrap().is_none());
    }

    #[test]
    fn test_find_step() {
        let step = find_step("conn-ping-gateway").unwrap().expect("step");
        assert!(!step.commands.is_empty());
        assert!(find_step("missing").unwrap().is_none());
    }

    #[test]
    fn test_parse_guide_reports_path() {
        let err = parse_guide(r#"[{"id":"x","title":"t","description":"d","icon":"Wifi","steps":[{"id":1}]}]"#)
            .unwrap_err();
        assert!(err.contains("[0].steps[0].id"), "{err}");
    }
}
