//! Village and building view models for the detail overlays.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGoal {
    pub name: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageSummary {
    pub name: String,
    pub start_date: String,
    pub manager: String,
    pub total_actions: u32,
    pub final_goal: String,
    pub sub_goals: Vec<SubGoal>,
}

impl VillageSummary {
    pub fn sample() -> Self {
        let sub_goal = |name: &str, actions: &[&str]| SubGoal {
            name: name.to_string(),
            actions: actions.iter().map(ToString::to_string).collect(),
        };

        Self {
            name: "Harbor Village".to_string(),
            start_date: "2025-09-01".to_string(),
            manager: "nickname".to_string(),
            total_actions: 37,
            final_goal: "Land a job at a global company".to_string(),
            sub_goals: vec![
                sub_goal(
                    "English",
                    &["TOEIC practice", "Read an English newspaper", "Watch a drama"],
                ),
                sub_goal("Interview prep", &["Self introduction", "Mock interview"]),
            ],
        }
    }
}

/// Construction state of a building tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingStatus {
    Built,
    Buildable,
    #[default]
    NotBuildable,
}

impl BuildingStatus {
    pub const ALL: [Self; 3] = [Self::NotBuildable, Self::Buildable, Self::Built];

    pub fn label(self) -> &'static str {
        match self {
            Self::Built => "Built",
            Self::Buildable => "Ready to build",
            Self::NotBuildable => "Not yet buildable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingInfo {
    pub name: String,
    pub level: u32,
    pub required_actions: u32,
    pub completion_date: String,
    pub remaining_actions: u32,
}

/// Texts and button state of the building overlay for one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingStatusView {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub button_text: &'static str,
    pub button_enabled: bool,
    /// Built buildings get a memo field instead of a body message.
    pub shows_memo: bool,
}

impl BuildingInfo {
    pub fn sample() -> Self {
        Self {
            name: "Town Hall".to_string(),
            level: 1,
            required_actions: 50,
            completion_date: "2025/09/01".to_string(),
            remaining_actions: 4,
        }
    }

    pub fn status_view(&self, status: BuildingStatus) -> BuildingStatusView {
        match status {
            BuildingStatus::Built => BuildingStatusView {
                title: self.name.clone(),
                subtitle: format!(
                    "Built by completing {} actions\nCompleted: {}",
                    self.required_actions, self.completion_date
                ),
                body: String::new(),
                button_text: "OK",
                button_enabled: true,
                shows_memo: true,
            },
            BuildingStatus::Buildable => BuildingStatusView {
                title: self.name.clone(),
                subtitle: format!(
                    "Lv. {}\nRequired actions: {}",
                    self.level, self.required_actions
                ),
                body: format!(
                    "You completed {} actions. You can build it now!",
                    self.required_actions
                ),
                button_text: "Build",
                button_enabled: true,
                shows_memo: false,
            },
            BuildingStatus::NotBuildable => BuildingStatusView {
                title: self.name.clone(),
                subtitle: format!("Buildable after {} actions", self.required_actions),
                body: format!(
                    "Complete {} more actions to build it!",
                    self.remaining_actions
                ),
                button_text: "Build",
                button_enabled: false,
                shows_memo: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_views() {
        let building = BuildingInfo::sample();

        let built = building.status_view(BuildingStatus::Built);
        assert!(built.shows_memo);
        assert!(built.button_enabled);
        assert!(built.subtitle.contains("2025/09/01"));

        let blocked = building.status_view(BuildingStatus::NotBuildable);
        assert!(!blocked.button_enabled);
        assert!(blocked.body.contains('4'));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BuildingStatus::NotBuildable).unwrap(),
            "\"NOT_BUILDABLE\""
        );
    }

    #[test]
    fn test_sample_village() {
        let village = VillageSummary::sample();
        assert_eq!(village.sub_goals.len(), 2);
        assert_eq!(village.sub_goals[1].actions.len(), 2);
    }
}
