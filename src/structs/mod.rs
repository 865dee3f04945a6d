pub mod auth;
pub mod banner;
pub mod cli;
pub mod config;
pub mod profile_update;
pub mod role_set;
pub mod session;
pub mod session_changes;
pub mod session_draft;
pub mod session_form;
pub mod session_patch;
pub mod soft_list;
pub mod user;
pub mod validation_result;
