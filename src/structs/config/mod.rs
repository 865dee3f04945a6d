pub mod api_config;
pub mod config;
pub mod logging_config;
pub mod ui_config;
