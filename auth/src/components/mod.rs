pub mod auth_switch;
pub mod form;
pub mod loading;
pub mod theme_toggle;
pub mod toaster;
