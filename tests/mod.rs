mod support;
mod api_client_tests;
