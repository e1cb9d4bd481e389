//! Main logger facade implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    payload::Payload,
    record::LogRecord,
    severity::Severity,
    transport::Transport,
};
use crate::transports::ConsoleTransport;
use parking_lot::Mutex;

/// Per-component logging facade.
///
/// Each instance is bound to an immutable sub-module label (the `component`
/// of every emitted record) and a [`LoggerConfig`] snapshot captured at
/// construction. Every call builds one canonical [`LogRecord`] and hands it
/// synchronously to the transports; transport failures are reported on
/// stderr and never surface to the caller.
pub struct Logger {
    component: String,
    config: LoggerConfig,
    transports: Mutex<Vec<Box<dyn Transport>>>,
}

impl Logger {
    /// Create a facade with the default configuration and no transports.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            config: LoggerConfig::default(),
            transports: Mutex::new(Vec::new()),
        }
    }

    /// Create a builder for a facade bound to `component`.
    pub fn builder(component: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(component)
    }

    /// The sub-module label stamped as `component` on every record.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// The configuration snapshot this facade was built with.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn add_transport(&mut self, transport: Box<dyn Transport>) {
        self.transports.lock().push(transport);
    }

    /// Emit one record at `severity` with an empty payload.
    pub fn log(&self, severity: Severity, title: impl Into<String>) {
        self.log_with(severity, title, Payload::new());
    }

    /// Emit one record at `severity` carrying `data`.
    ///
    /// `data.service_name` overrides the configured default service name for
    /// this record only.
    pub fn log_with(&self, severity: Severity, title: impl Into<String>, data: Payload) {
        if severity < self.config.min_level {
            return;
        }

        let service_name = data
            .service_name
            .clone()
            .or_else(|| self.config.service_name.clone());

        let mut record = LogRecord::new(
            severity,
            self.component.clone(),
            self.config.environment.clone(),
            title,
            data,
        );
        if let Some(name) = service_name {
            record = record.with_service_name(name);
        }

        self.dispatch(&record);
    }

    /// Hand the record to every transport, isolating failures per transport.
    fn dispatch(&self, record: &LogRecord) {
        let mut transports = self.transports.lock();
        for transport in transports.iter_mut() {
            if let Err(e) = transport.write(record) {
                let err = LoggerError::transport(transport.name(), e.to_string());
                eprintln!("[LOGGER ERROR] {}", err);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut transports = self.transports.lock();
        for transport in transports.iter_mut() {
            transport.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, title: impl Into<String>) {
        self.log(Severity::Debug, title);
    }

    #[inline]
    pub fn info(&self, title: impl Into<String>) {
        self.log(Severity::Info, title);
    }

    #[inline]
    pub fn warn(&self, title: impl Into<String>) {
        self.log(Severity::Warn, title);
    }

    #[inline]
    pub fn error(&self, title: impl Into<String>) {
        self.log(Severity::Error, title);
    }

    #[inline]
    pub fn debug_with(&self, title: impl Into<String>, data: Payload) {
        self.log_with(Severity::Debug, title, data);
    }

    #[inline]
    pub fn info_with(&self, title: impl Into<String>, data: Payload) {
        self.log_with(Severity::Info, title, data);
    }

    #[inline]
    pub fn warn_with(&self, title: impl Into<String>, data: Payload) {
        self.log_with(Severity::Warn, title, data);
    }

    #[inline]
    pub fn error_with(&self, title: impl Into<String>, data: Payload) {
        self.log_with(Severity::Error, title, data);
    }
}

/// Construct a console-backed facade for `sub_module`, resolving its
/// configuration from the process-wide defaults set via [`crate::init`],
/// or from `LOGGER_LEVEL` / `LOGGER_MODULE_NAME` / `LOGGER_ENV` when the
/// defaults were never initialized.
///
/// The configuration is snapshotted here; later [`crate::init`] calls do not
/// affect the returned facade.
pub fn get_logger(sub_module: impl Into<String>) -> Logger {
    let config = LoggerConfig::resolve();
    let console = ConsoleTransport::new().with_format(config.format.clone());

    Logger::builder(sub_module)
        .config(config)
        .transport(console)
        .build()
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use service_log::prelude::*;
///
/// let logger = Logger::builder("auth")
///     .config(LoggerConfig::new().with_service_name("accounts"))
///     .transport(ConsoleTransport::new())
///     .build();
/// logger.info("facade ready");
/// ```
pub struct LoggerBuilder {
    component: String,
    config: LoggerConfig,
    transports: Vec<Box<dyn Transport>>,
}

impl LoggerBuilder {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            config: LoggerConfig::default(),
            transports: Vec::new(),
        }
    }

    /// Set the configuration snapshot for the facade
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum severity on the current configuration
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.config.min_level = level;
        self
    }

    /// Add a transport
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transports.push(Box::new(transport));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            component: self.component,
            config: self.config,
            transports: Mutex::new(self.transports),
        }
    }
}
