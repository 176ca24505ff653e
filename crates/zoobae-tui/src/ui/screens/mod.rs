//! Content for each screen in the navigation stack.

pub mod auth_form;
pub mod main_tabs;
pub mod welcome;
