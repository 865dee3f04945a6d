pub mod config_helper;
pub mod date_helper;
pub mod prompt_helper;
pub mod serde_helper;
