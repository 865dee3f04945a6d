use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "ConfigHelper::default_banner_ttl_secs")]
    pub banner_ttl_secs: u64,

    #[serde(default = "ConfigHelper::default_confirm_deletes")]
    pub confirm_deletes: bool,
}

impl UiConfig {
    pub fn banner_ttl(&self) -> Duration {
        Duration::from_secs(self.banner_ttl_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_ttl_secs: ConfigHelper::default_banner_ttl_secs(),
            confirm_deletes: ConfigHelper::default_confirm_deletes(),
        }
    }
}
