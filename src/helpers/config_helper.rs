use crate::config::constants::{
    DEFAULT_BANNER_TTL_SECS, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_include_credentials() -> bool {
        true
    }

    pub fn default_banner_ttl_secs() -> u64 {
        DEFAULT_BANNER_TTL_SECS
    }

    pub fn default_confirm_deletes() -> bool {
        true
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
