//! Environment-driven shell configuration.

use qchaos_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "QCHAOS_LOG_FORMAT";
pub const SEED_DEMO_VAR: &str = "QCHAOS_SEED_DEMO";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_format: LogFormat,
    /// Start with the four-object demonstration inventory.
    pub seed_demo: bool,
    warnings: Vec<String>,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Invalid values fall
    /// back to defaults and are kept as warnings, since tracing is not yet
    /// initialized when the config is read.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using pretty")),
            }
        }

        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_demo = flag,
                None => config
                    .warnings
                    .push(format!("{SEED_DEMO_VAR}: `{raw}` is not a boolean; ignoring")),
            }
        }

        config
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
