pub mod api_payload;
pub mod capability;
pub mod commands;
pub mod panel;
pub mod role;
pub mod session_form_error;
pub mod session_row_state;
