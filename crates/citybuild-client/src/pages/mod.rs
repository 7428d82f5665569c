//! Page components.

mod goal_setting;
mod home;
mod not_found;

pub use goal_setting::GoalSettingPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
