pub mod app_state;
pub mod form;
pub mod theme;
