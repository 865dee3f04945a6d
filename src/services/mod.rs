pub mod api_client;
pub mod coordinator_view;
pub mod dashboard;
pub mod trainer_view;
