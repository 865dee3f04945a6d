pub const DEFAULT_BASE_URL: &str = "http://localhost:8082/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BANNER_TTL_SECS: u64 = 3;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const CONFIG_DIR_NAME: &str = "session-desk";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const BASE_URL_ENV: &str = "SESSION_DESK_API_URL";
pub const PASSWORD_ENV: &str = "SESSION_DESK_PASSWORD";

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

pub const KNOWN_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Features shown to coordinators when `/user/fonctionnalites` has nothing.
pub const DEFAULT_FEATURES: &[(&str, &str)] = &[
    ("GESTION_FORMATEURS", "Gestion des formateurs"),
    ("SUIVI_FORMATIONS", "Suivi des formations"),
    ("VALIDATION_DOSSIERS", "Validation des dossiers"),
    ("RAPPORTS_STATISTIQUES", "Rapports statistiques"),
    ("GESTION_UTILISATEURS", "Gestion des utilisateurs"),
];
