pub mod account_store;
pub mod confirmer;
pub mod session_store;
