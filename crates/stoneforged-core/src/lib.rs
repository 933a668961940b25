pub mod app_config;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod prospect;
pub mod stats;
pub mod triggers;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_DATABASE_URL};
pub use dashboard::DashboardView;
pub use export::{
    export_filename, export_filename_today, prospects_to_csv, select_export_rows, ExportError,
    CSV_HEADER,
};
pub use prospect::{NewProspect, Prospect, ReadinessBand, BASE_SCORE};
pub use stats::{ProspectStats, HIGH_READINESS_THRESHOLD};
pub use triggers::TriggerCategory;
pub use view::{
    filter_prospects, request_sort, sort_prospects, SortConfig, SortDirection, SortKey,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown trigger category: {0}")]
    UnknownTrigger(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}
