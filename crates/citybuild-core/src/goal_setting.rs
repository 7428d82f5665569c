//! Multi-step goal-setting wizard state.
//!
//! The wizard walks through five steps: the final goal, three sub goals and
//! the village name. [`GoalSettingWizard::next`] only advances once the current
//! step validates; the last step completes the whole form instead.

use chrono::{Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Titles shown under the progress bar, one per step.
pub const STEP_TITLES: [&str; 5] = [
    "Final goal",
    "Sub goal 1",
    "Sub goal 2",
    "Sub goal 3",
    "Village name",
];

pub const SUB_GOAL_COUNT: usize = 3;

/// Maximum sub goal title length, in characters.
pub const SUB_GOAL_TITLE_MAX: usize = 15;

/// Days between the default start and end dates.
pub const DEFAULT_DEADLINE_DAYS: u64 = 30;

/// Days of the fixed weekly schedule, in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const DEFAULT_ACTION_TEXT: &str = "Study a language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    #[error("start date must not be after the end date")]
    StartAfterEnd,
    #[error("end date must not be before the start date")]
    EndBeforeStart,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("enter a final goal")]
    MissingFinalGoal,
    #[error("enter a title for sub goal {}", .0 + 1)]
    MissingSubGoalTitle(usize),
    #[error("sub goal {} title must be at most {} characters", .0 + 1, SUB_GOAL_TITLE_MAX)]
    SubGoalTitleTooLong(usize),
    #[error("sub goal {} needs a positive completion count", .0 + 1)]
    InvalidCount(usize),
    #[error("sub goal {} needs at least one action", .0 + 1)]
    NoActions(usize),
    #[error("deadline period must be a positive number of days")]
    InvalidPeriod,
    #[error("enter a village name")]
    MissingVillageName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadlineKind {
    #[default]
    Date,
    Period,
}

/// Deadline of a goal, either a date range or a period in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    #[serde(rename = "type")]
    pub kind: DeadlineKind,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Raw period input in days.
    pub period: String,
    /// `None` when the deadline is mandatory, otherwise the opt-in checkbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_deadline: Option<bool>,
}

impl Deadline {
    /// Mandatory date-range deadline starting `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            kind: DeadlineKind::Date,
            start_date: Some(today),
            end_date: today.checked_add_days(Days::new(DEFAULT_DEADLINE_DAYS)),
            period: String::new(),
            has_deadline: None,
        }
    }

    /// Opt-in deadline, initially disabled.
    pub fn optional(today: NaiveDate) -> Self {
        Self {
            has_deadline: Some(false),
            ..Self::starting(today)
        }
    }

    /// Whether the deadline applies to the goal.
    pub fn is_active(&self) -> bool {
        self.has_deadline.unwrap_or(true)
    }

    pub fn set_start(&mut self, date: NaiveDate) -> Result<(), DeadlineError> {
        if self.end_date.is_some_and(|end| date > end) {
            return Err(DeadlineError::StartAfterEnd);
        }
        self.start_date = Some(date);
        Ok(())
    }

    pub fn set_end(&mut self, date: NaiveDate) -> Result<(), DeadlineError> {
        if self.start_date.is_some_and(|start| date < start) {
            return Err(DeadlineError::EndBeforeStart);
        }
        self.end_date = Some(date);
        Ok(())
    }

    /// Period in days, if the input is a positive number.
    pub fn period_days(&self) -> Option<u32> {
        self.period.trim().parse().ok().filter(|days| *days > 0)
    }

    fn validate(&self) -> Result<(), StepError> {
        if self.is_active() && self.kind == DeadlineKind::Period && self.period_days().is_none() {
            return Err(StepError::InvalidPeriod);
        }
        Ok(())
    }
}

/// Formats a deadline date like `25/09/01(Mon)`.
pub fn format_deadline_date(date: NaiveDate) -> String {
    date.format("%y/%m/%d(%a)").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDraft {
    pub id: u32,
    pub text: String,
    /// Fixed weekdays, kept in [`WEEK`] order.
    pub selected_days: Vec<Weekday>,
}

impl ActionDraft {
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.selected_days.iter().position(|d| *d == day) {
            self.selected_days.remove(pos);
        } else {
            self.selected_days.push(day);
            self.selected_days.sort_by_key(Weekday::num_days_from_monday);
        }
    }
}

/// How a sub goal counts as achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criteria {
    #[default]
    SelfCheck,
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalGoalDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub deadline: Deadline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoalDraft {
    pub title: String,
    pub deadline: Deadline,
    #[serde(rename = "criteriaType")]
    pub criteria: Criteria,
    /// Raw "done at least N times" input.
    pub count_value: String,
    pub actions: Vec<ActionDraft>,
}

impl SubGoalDraft {
    fn new(today: NaiveDate) -> Self {
        let action = |id| ActionDraft {
            id,
            text: DEFAULT_ACTION_TEXT.to_string(),
            selected_days: Vec::new(),
        };
        Self {
            title: String::new(),
            deadline: Deadline::optional(today),
            criteria: Criteria::SelfCheck,
            count_value: String::new(),
            actions: vec![action(1), action(2)],
        }
    }

    /// Appends an empty action and returns its id.
    pub fn add_action(&mut self) -> u32 {
        let id = self.actions.iter().map(|a| a.id).max().map_or(1, |max| max + 1);
        self.actions.push(ActionDraft {
            id,
            text: String::new(),
            selected_days: Vec::new(),
        });
        id
    }

    pub fn action_mut(&mut self, id: u32) -> Option<&mut ActionDraft> {
        self.actions.iter_mut().find(|a| a.id == id)
    }

    pub fn set_action_text(&mut self, id: u32, text: impl Into<String>) {
        if let Some(action) = self.action_mut(id) {
            action.text = text.into();
        }
    }

    /// Called when an action input loses focus; blank actions are removed.
    /// Returns true when the action was removed.
    pub fn commit_action(&mut self, id: u32) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| a.id != id || !a.text.trim().is_empty());
        self.actions.len() != before
    }

    pub fn count_target(&self) -> Option<u32> {
        self.count_value.trim().parse().ok().filter(|n| *n > 0)
    }

    fn validate(&self, index: usize) -> Result<(), StepError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(StepError::MissingSubGoalTitle(index));
        }
        if title.chars().count() > SUB_GOAL_TITLE_MAX {
            return Err(StepError::SubGoalTitleTooLong(index));
        }
        self.deadline.validate()?;
        if self.criteria == Criteria::Count && self.count_target().is_none() {
            return Err(StepError::InvalidCount(index));
        }
        if self.actions.iter().all(|a| a.text.trim().is_empty()) {
            return Err(StepError::NoActions(index));
        }
        Ok(())
    }
}

/// Everything the wizard collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSettingFormData {
    pub final_goal: FinalGoalDraft,
    pub sub_goals: [SubGoalDraft; SUB_GOAL_COUNT],
    pub village_name: String,
}

impl GoalSettingFormData {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            final_goal: FinalGoalDraft {
                title: String::new(),
                image_url: None,
                deadline: Deadline::starting(today),
            },
            sub_goals: std::array::from_fn(|_| SubGoalDraft::new(today)),
            village_name: String::new(),
        }
    }
}

/// One wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStep {
    FinalGoal,
    /// Zero-based sub goal index.
    SubGoal(usize),
    VillageName,
}

impl GoalStep {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FinalGoal),
            i if i <= SUB_GOAL_COUNT => Some(Self::SubGoal(i - 1)),
            i if i == SUB_GOAL_COUNT + 1 => Some(Self::VillageName),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::FinalGoal => 0,
            Self::SubGoal(i) => i + 1,
            Self::VillageName => SUB_GOAL_COUNT + 1,
        }
    }

    pub fn title(self) -> &'static str {
        STEP_TITLES[self.index()]
    }

    /// Every step, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..STEP_TITLES.len()).filter_map(Self::from_index)
    }

    /// Share of the progress line filled while this step is current, from 0 to 1.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(self) -> f64 {
        self.index() as f64 / (STEP_TITLES.len() - 1) as f64
    }
}

/// Result of pressing the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(GoalStep),
    /// The last step validated; the form is ready to submit.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSettingWizard {
    step: GoalStep,
    data: GoalSettingFormData,
}

impl GoalSettingWizard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: GoalStep::FinalGoal,
            data: GoalSettingFormData::new(today),
        }
    }

    pub fn step(&self) -> GoalStep {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == GoalStep::VillageName
    }

    pub fn data(&self) -> &GoalSettingFormData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut GoalSettingFormData {
        &mut self.data
    }

    pub fn progress(&self) -> f64 {
        self.step.progress()
    }

    /// Whether `step` is reached, i.e. its dot is filled.
    pub fn is_reached(&self, step: GoalStep) -> bool {
        step.index() <= self.step.index()
    }

    pub fn validate_step(&self, step: GoalStep) -> Result<(), StepError> {
        match step {
            GoalStep::FinalGoal => {
                if self.data.final_goal.title.trim().is_empty() {
                    return Err(StepError::MissingFinalGoal);
                }
                self.data.final_goal.deadline.validate()
            }
            GoalStep::SubGoal(i) => self
                .data
                .sub_goals
                .get(i)
                .map_or(Ok(()), |goal| goal.validate(i)),
            GoalStep::VillageName => {
                if self.data.village_name.trim().is_empty() {
                    return Err(StepError::MissingVillageName);
                }
                Ok(())
            }
        }
    }

    /// Validates the current step, then moves forward or completes.
    pub fn next(&mut self) -> Result<Advance, StepError> {
        self.validate_step(self.step)?;
        if self.is_last_step() {
            // Earlier steps may have been edited after passing.
            self.validate_all()?;
            return Ok(Advance::Completed);
        }
        let next = GoalStep::from_index(self.step.index() + 1).unwrap_or(GoalStep::VillageName);
        self.step = next;
        Ok(Advance::Moved(next))
    }

    /// Moves one step back. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.step.index().checked_sub(1).and_then(GoalStep::from_index) else {
            return false;
        };
        self.step = prev;
        true
    }

    pub fn validate_all(&self) -> Result<(), StepError> {
        GoalStep::all().try_for_each(|step| self.validate_step(step))
    }
}
