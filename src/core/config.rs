//! Facade configuration and process-wide defaults
//!
//! A [`LoggerConfig`] is an ordinary value: build one explicitly and pass it
//! to the logger builder, or let [`LoggerConfig::resolve`] produce one from
//! the process-wide defaults (set once via [`init`]) with environment
//! variables as the fallback.

use super::format::RecordFormat;
use super::severity::Severity;
use parking_lot::RwLock;

/// Minimum severity string, e.g. `DEBUG` or `warn`. Unparseable or absent
/// values fall back to `Debug` so nothing is filtered out.
pub const LOGGER_LEVEL_ENV: &str = "LOGGER_LEVEL";

/// Default service name stamped on records that carry no per-call override.
pub const LOGGER_MODULE_NAME_ENV: &str = "LOGGER_MODULE_NAME";

/// Environment label for emitted records. Absent means `non-prod`.
pub const LOGGER_ENV_ENV: &str = "LOGGER_ENV";

/// Environment label used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "non-prod";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Immutable configuration snapshot a facade instance is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Default service name; `None` when unresolvable.
    pub service_name: Option<String>,
    /// Environment label stamped on every record.
    pub environment: String,
    /// Records below this severity are filtered before construction.
    pub min_level: Severity,
    /// Rendering format for transports that honor the config.
    pub format: RecordFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            service_name: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            min_level: Severity::Debug,
            format: RecordFormat::Json,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `LOGGER_LEVEL`, `LOGGER_MODULE_NAME` and
    /// `LOGGER_ENV`.
    pub fn from_env() -> Self {
        let min_level = std::env::var(LOGGER_LEVEL_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Severity::Debug);

        Self {
            service_name: std::env::var(LOGGER_MODULE_NAME_ENV).ok(),
            environment: env_or(LOGGER_ENV_ENV, DEFAULT_ENVIRONMENT),
            min_level,
            format: RecordFormat::Json,
        }
    }

    /// Snapshot the process-wide defaults set via [`init`], falling back to
    /// the environment when [`init`] was never called.
    ///
    /// Facades capture the returned value at construction time; later
    /// [`init`] calls do not affect them.
    pub fn resolve() -> Self {
        match PROCESS_DEFAULTS.read().as_ref() {
            Some(defaults) => Self {
                service_name: Some(defaults.module_name.clone()),
                environment: env_or(LOGGER_ENV_ENV, DEFAULT_ENVIRONMENT),
                min_level: defaults.level,
                format: defaults.format.clone(),
            },
            None => Self::from_env(),
        }
    }

    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }
}

/// Process-wide defaults, written once at startup and read at facade
/// construction.
#[derive(Debug, Clone)]
struct ProcessDefaults {
    module_name: String,
    format: RecordFormat,
    level: Severity,
}

static PROCESS_DEFAULTS: RwLock<Option<ProcessDefaults>> = RwLock::new(None);

/// Overwrite the process-wide defaults.
///
/// Call this before constructing facades that should observe the new
/// defaults; facades already constructed keep the snapshot taken at their own
/// construction time. Inputs are accepted as-is, no validation is performed.
pub fn init(module_name: impl Into<String>, format: RecordFormat, level: Severity) {
    let mut defaults = PROCESS_DEFAULTS.write();
    *defaults = Some(ProcessDefaults {
        module_name: module_name.into(),
        format,
        level,
    });
}
