//! Weekly feedback review and the per-action feedback board.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackNote {
    pub id: u32,
    pub text: String,
    pub checked: bool,
}

/// One action in the weekly review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAction {
    pub id: u32,
    pub name: String,
    pub performed: u32,
    pub recommended: u32,
    pub total_performed: u32,
    pub is_recommended: bool,
    pub is_expanded: bool,
    pub feedbacks: Vec<FeedbackNote>,
}

/// Weekly review of a village's actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyFeedback {
    pub week_label: String,
    actions: Vec<WeeklyAction>,
}

impl WeeklyFeedback {
    pub fn new(week_label: impl Into<String>, actions: Vec<WeeklyAction>) -> Self {
        Self {
            week_label: week_label.into(),
            actions,
        }
    }

    pub fn sample() -> Self {
        let notes = |checked: [bool; 2]| {
            vec![
                FeedbackNote {
                    id: 101,
                    text: "Summarize while reading".to_string(),
                    checked: checked[0],
                },
                FeedbackNote {
                    id: 102,
                    text: "Don't subvocalize".to_string(),
                    checked: checked[1],
                },
            ]
        };
        let action = |id, name: &str, performed, recommended, total, feedbacks| WeeklyAction {
            id,
            name: name.to_string(),
            performed,
            recommended,
            total_performed: total,
            is_recommended: recommended > 0,
            is_expanded: false,
            feedbacks,
        };

        Self::new(
            "2025, week 1 of September",
            vec![
                action(1, "Read an English newspaper", 3, 5, 15, notes([false, true])),
                action(2, "Prepare a self introduction", 2, 3, 13, notes([false, false])),
                action(3, "Mock interview", 2, 2, 8, Vec::new()),
                action(4, "Watch a drama", 0, 0, 17, Vec::new()),
                action(5, "Write a diary", 0, 0, 8, Vec::new()),
                action(6, "Vocabulary cards", 0, 0, 11, Vec::new()),
            ],
        )
    }

    pub fn actions(&self) -> &[WeeklyAction] {
        &self.actions
    }

    pub fn recommended(&self) -> impl Iterator<Item = &WeeklyAction> {
        self.actions.iter().filter(|a| a.is_recommended)
    }

    pub fn unrecommended(&self) -> impl Iterator<Item = &WeeklyAction> {
        self.actions.iter().filter(|a| !a.is_recommended)
    }

    fn action_mut(&mut self, id: u32) -> Option<&mut WeeklyAction> {
        self.actions.iter_mut().find(|a| a.id == id)
    }

    /// Expands or collapses an action's feedback checklist.
    pub fn toggle_expanded(&mut self, id: u32) -> bool {
        let Some(action) = self.action_mut(id) else {
            return false;
        };
        action.is_expanded = !action.is_expanded;
        true
    }

    /// Adjusts this week's count of a recommended action, never below zero.
    /// Returns the new count, or `None` when the action is not adjustable.
    pub fn adjust_performed(&mut self, id: u32, delta: i32) -> Option<u32> {
        let action = self.action_mut(id).filter(|a| a.is_recommended)?;
        action.performed = action.performed.saturating_add_signed(delta);
        Some(action.performed)
    }

    pub fn toggle_feedback(&mut self, action_id: u32, feedback_id: u32) -> bool {
        let Some(note) = self
            .action_mut(action_id)
            .and_then(|a| a.feedbacks.iter_mut().find(|f| f.id == feedback_id))
        else {
            return false;
        };
        note.checked = !note.checked;
        true
    }
}

/// Position of an action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackKey {
    pub sub_goal: usize,
    pub action: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFeedback {
    pub name: String,
    pub feedbacks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGoalFeedback {
    pub name: String,
    pub tag: String,
    /// CSS color of the tag chip.
    pub color: String,
    pub actions: Vec<ActionFeedback>,
}

/// Feedback notes grouped by sub goal and action, with inline editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackBoard {
    sub_goals: Vec<SubGoalFeedback>,
    expanded: BTreeSet<FeedbackKey>,
    adding: Option<FeedbackKey>,
    draft: String,
}

impl FeedbackBoard {
    pub fn new(sub_goals: Vec<SubGoalFeedback>) -> Self {
        Self {
            sub_goals,
            ..Self::default()
        }
    }

    pub fn sample() -> Self {
        let action = |n: usize| ActionFeedback {
            name: "Action".to_string(),
            feedbacks: vec!["Feedback".to_string(); n],
        };
        let sub_goal = |name: &str, tag: &str, color: &str, counts: [usize; 3]| SubGoalFeedback {
            name: name.to_string(),
            tag: tag.to_string(),
            color: color.to_string(),
            actions: counts.into_iter().map(action).collect(),
        };

        Self::new(vec![
            sub_goal("English", "Sub goal 1", "#10b981", [3, 2, 1]),
            sub_goal("Interview prep", "Sub goal 2", "#6ee7b7", [2, 1, 3]),
            sub_goal("Job research", "Sub goal 3", "#a7f3d0", [1, 2, 1]),
        ])
    }

    pub fn sub_goals(&self) -> &[SubGoalFeedback] {
        &self.sub_goals
    }

    pub fn is_expanded(&self, key: FeedbackKey) -> bool {
        self.expanded.contains(&key)
    }

    pub fn is_adding(&self, key: FeedbackKey) -> bool {
        self.adding == Some(key)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Collapsing an action also drops a draft being typed for it.
    pub fn toggle_action(&mut self, key: FeedbackKey) {
        if self.expanded.remove(&key) {
            if self.is_adding(key) {
                self.cancel_adding();
            }
        } else {
            self.expanded.insert(key);
        }
    }

    fn action_mut(&mut self, key: FeedbackKey) -> Option<&mut ActionFeedback> {
        self.sub_goals
            .get_mut(key.sub_goal)?
            .actions
            .get_mut(key.action)
    }

    /// Removes one note, returning it.
    pub fn delete_feedback(&mut self, key: FeedbackKey, index: usize) -> Option<String> {
        let action = self.action_mut(key)?;
        (index < action.feedbacks.len()).then(|| action.feedbacks.remove(index))
    }

    pub fn start_adding(&mut self, key: FeedbackKey) {
        self.adding = Some(key);
        self.draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Appends the draft to the action being edited. Blank drafts are kept
    /// open and nothing is added.
    pub fn commit_draft(&mut self) -> bool {
        let Some(key) = self.adding else {
            return false;
        };
        if self.draft.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        let Some(action) = self.action_mut(key) else {
            return false;
        };
        action.feedbacks.push(text);
        self.adding = None;
        true
    }

    pub fn cancel_adding(&mut self) {
        self.adding = None;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: FeedbackKey = FeedbackKey {
        sub_goal: 0,
        action: 1,
    };

    #[test]
    fn test_recommended_split() {
        let weekly = WeeklyFeedback::sample();
        assert_eq!(weekly.recommended().count(), 3);
        assert_eq!(weekly.unrecommended().count(), 3);
    }

    #[test]
    fn test_performed_never_negative() {
        let mut weekly = WeeklyFeedback::sample();
        assert_eq!(weekly.adjust_performed(3, -1), Some(1));
        assert_eq!(weekly.adjust_performed(3, -1), Some(0));
        assert_eq!(weekly.adjust_performed(3, -1), Some(0));
        assert_eq!(weekly.adjust_performed(3, 1), Some(1));
    }

    #[test]
    fn test_unrecommended_counts_are_fixed() {
        let mut weekly = WeeklyFeedback::sample();
        assert_eq!(weekly.adjust_performed(4, 1), None);
        assert_eq!(weekly.adjust_performed(99, 1), None);
        assert_eq!(weekly.actions()[3].performed, 0);
    }

    #[test]
    fn test_expand_and_check_feedback() {
        let mut weekly = WeeklyFeedback::sample();
        assert!(weekly.toggle_expanded(1));
        assert!(weekly.actions()[0].is_expanded);

        assert!(weekly.toggle_feedback(1, 101));
        assert!(weekly.actions()[0].feedbacks[0].checked);
        assert!(!weekly.toggle_feedback(1, 999));
        assert!(!weekly.toggle_expanded(42));
    }

    #[test]
    fn test_board_add_feedback() {
        let mut board = FeedbackBoard::sample();
        board.toggle_action(KEY);
        board.start_adding(KEY);

        board.set_draft("   ");
        assert!(!board.commit_draft());
        assert!(board.is_adding(KEY));

        board.set_draft("Use a timer");
        assert!(board.commit_draft());
        assert!(!board.is_adding(KEY));
        assert_eq!(board.draft(), "");
        let feedbacks = &board.sub_goals()[0].actions[1].feedbacks;
        assert_eq!(feedbacks.last().map(String::as_str), Some("Use a timer"));
        assert_eq!(feedbacks.len(), 3);
    }

    #[test]
    fn test_collapse_cancels_draft() {
        let mut board = FeedbackBoard::sample();
        board.toggle_action(KEY);
        board.start_adding(KEY);
        board.set_draft("half typed");

        board.toggle_action(KEY);
        assert!(!board.is_expanded(KEY));
        assert!(!board.is_adding(KEY));
        assert_eq!(board.draft(), "");
    }

    #[test]
    fn test_delete_feedback() {
        let mut board = FeedbackBoard::sample();
        assert_eq!(board.delete_feedback(KEY, 0), Some("Feedback".to_string()));
        assert_eq!(board.sub_goals()[0].actions[1].feedbacks.len(), 1);
        assert_eq!(board.delete_feedback(KEY, 5), None);
        assert_eq!(
            board.delete_feedback(
                FeedbackKey {
                    sub_goal: 9,
                    action: 0
                },
                0
            ),
            None
        );
    }
}
