//! Goal-setting wizard UI components.

mod deadline_section;
mod final_goal_step;
mod progress_bar;
mod sub_goal_step;
mod village_name_step;
mod weekly_schedule;

pub use deadline_section::DeadlineSection;
pub use final_goal_step::FinalGoalStep;
pub use progress_bar::ProgressBar;
pub use sub_goal_step::SubGoalStep;
pub use village_name_step::VillageNameStep;
pub use weekly_schedule::WeeklySchedule;
