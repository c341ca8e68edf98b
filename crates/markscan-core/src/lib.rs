pub mod config;
pub mod filter;
pub mod pattern;
pub mod summary;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use filter::FilterSelection;
pub use pattern::{generate_patterns, parse_extra_patterns, Pattern, VERBAL_ELEMENT_FIELD};
pub use summary::{sort_by_count_desc, SummaryEntry};
