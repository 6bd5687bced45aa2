//! Wire-level data model shared by the sources, the layout, and the views.
//!
//! Roles and pages arrive as JSON from the backend. Every metric on a role is
//! optional on the wire; defaults are applied by the layout, never here.

use serde::{Deserialize, Serialize};

/// Distance hint used when a role carries none.
pub const DEFAULT_DISTANCE: f32 = 5.0;

/// Work-style profile of a role, each score expected in `[0, 10]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub technical: Option<f32>,
    #[serde(default)]
    pub creative: Option<f32>,
    #[serde(default)]
    pub business: Option<f32>,
    #[serde(default)]
    pub customer: Option<f32>,
}

impl Metrics {
    pub fn new(technical: f32, creative: f32, business: f32, customer: f32) -> Self {
        Self {
            technical: Some(technical),
            creative: Some(creative),
            business: Some(business),
            customer: Some(customer),
        }
    }
}

/// A candidate role as supplied by the role source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(flatten)]
    pub metrics: Metrics,
    /// Conceptual remoteness from the user's current role.
    #[serde(default)]
    pub distance: Option<f32>,
    /// Opaque display attribute, usually a CSS hex color.
    #[serde(default)]
    pub color: String,
}

impl Role {
    /// Distance hint with the default applied. Non-finite values count as absent.
    pub fn distance_or_default(&self) -> f32 {
        self.distance
            .filter(|d| d.is_finite())
            .unwrap_or(DEFAULT_DISTANCE)
    }
}

/// Response of the role source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSet {
    pub roles: Vec<Role>,
    #[serde(default)]
    pub personalized: bool,
}

/// Industry classification of the user's current role with its work-style profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    #[serde(default)]
    pub industry: String,
    /// Classifier confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f32,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Response of the skill suggestion lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestions {
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One page of role detail content, tagged by its `type` field.
///
/// A page of an unrecognized type decodes as `Unknown` and keeps its slot in
/// the stack, so one unexpected page never fails the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Page {
    Overview {
        #[serde(default)]
        description: String,
        #[serde(default)]
        salary: String,
        #[serde(default)]
        degree: String,
        #[serde(default)]
        source: Option<String>,
    },
    DayInLife {
        #[serde(default)]
        tasks: Vec<String>,
    },
    SweetSpots {
        #[serde(default)]
        skills: Vec<String>,
        #[serde(default)]
        explanation: String,
    },
    AreasForGrowth {
        #[serde(default)]
        skills: Vec<String>,
        #[serde(default)]
        explanation: String,
    },
    #[serde(other)]
    Unknown,
}

impl Page {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Page::Overview { .. } => "overview",
            Page::DayInLife { .. } => "day_in_life",
            Page::SweetSpots { .. } => "sweet_spots",
            Page::AreasForGrowth { .. } => "areas_for_growth",
            Page::Unknown => "unknown",
        }
    }
}

/// Response of the page source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSet {
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// Split a role name into its first word and the remainder, for the overview title.
pub fn split_title(name: &str) -> (&str, &str) {
    let trimmed = name.trim();
    match trimmed.split_once(' ') {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_with_missing_fields() {
        let json = r##"{"name":"Data Analyst","technical":7,"color":"#3b82f6"}"##;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.name, "Data Analyst");
        assert_eq!(role.metrics.technical, Some(7.0));
        assert_eq!(role.metrics.creative, None);
        assert!((role.distance_or_default() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_role_set_personalized_defaults_false() {
        let json = r#"{"roles":[{"name":"UX Designer","technical":3,"creative":9,"business":4,"customer":8,"distance":2.5}]}"#;
        let set: RoleSet = serde_json::from_str(json).unwrap();
        assert!(!set.personalized);
        assert_eq!(set.roles.len(), 1);
        assert!((set.roles[0].distance_or_default() - 2.5).abs() < 1e-6);
        assert_eq!(set.roles[0].color, "");
    }

    #[test]
    fn test_page_types() {
        let json = r#"{"pages":[
            {"type":"overview","description":"Builds things","salary":"$120k","degree":"BS CS"},
            {"type":"day_in_life","tasks":["Standup","Code review"]},
            {"type":"sweet_spots","skills":["SQL"],"explanation":"You know data"},
            {"type":"areas_for_growth","skills":["Rust"],"explanation":"Learn systems"}
        ]}"#;
        let set: PageSet = serde_json::from_str(json).unwrap();
        let kinds: Vec<&str> = set.pages.iter().map(|p| p.kind_name()).collect();
        assert_eq!(
            kinds,
            vec!["overview", "day_in_life", "sweet_spots", "areas_for_growth"]
        );
        match &set.pages[0] {
            Page::Overview { source, .. } => assert!(source.is_none()),
            other => panic!("Expected Overview, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_page_type_keeps_stack() {
        let json = r#"{"pages":[
            {"type":"overview","description":"Builds things","salary":"$120k","degree":"BS CS"},
            {"type":"salary_trends","points":[1,2,3]},
            {"type":"day_in_life","tasks":["Standup"]}
        ]}"#;
        let set: PageSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.pages.len(), 3);
        assert_eq!(set.pages[1], Page::Unknown);
        assert_eq!(set.pages[1].kind_name(), "unknown");
        assert_eq!(set.pages[2].kind_name(), "day_in_life");
    }

    #[test]
    fn test_missing_pages_is_empty() {
        let set: PageSet = serde_json::from_str("{}").unwrap();
        assert!(set.pages.is_empty());
    }

    #[test]
    fn test_industry_profile() {
        let json = r#"{"industry":"Technology","confidence":0.92,"technical":8,"creative":4,"business":3,"customer":5}"#;
        let profile: IndustryProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.industry, "Technology");
        assert!((profile.confidence - 0.92).abs() < 1e-6);
        assert_eq!(profile.metrics, Metrics::new(8.0, 4.0, 3.0, 5.0));
    }

    #[test]
    fn test_skill_suggestions_default_empty() {
        let set: SkillSuggestions = serde_json::from_str("{}").unwrap();
        assert!(set.skills.is_empty());
    }

    #[test]
    fn test_split_title() {
        assert_eq!(split_title("Product Manager"), ("Product", "Manager"));
        assert_eq!(
            split_title("Senior Data Engineer"),
            ("Senior", "Data Engineer")
        );
        assert_eq!(split_title("Designer"), ("Designer", ""));
    }
}
