//! UI Components for the citybuild client.

mod bottom_sheet;
mod building_detail;
mod city_area;
mod feedback_list;
mod goal_creation;
pub mod goal_setting;
mod modal;
mod todo_detail;
mod todo_list;
mod village_detail;
mod weekly_feedback;

pub use bottom_sheet::BottomSheet;
pub use building_detail::BuildingDetail;
pub use city_area::CityArea;
pub use feedback_list::FeedbackList;
pub use goal_creation::GoalCreation;
pub use modal::Modal;
pub use todo_detail::TodoDetail;
pub use todo_list::TodoListContent;
pub use village_detail::VillageDetail;
pub use weekly_feedback::WeeklyFeedbackContent;
