//! Logger registry
//!
//! Holds the configured level and target overrides, the target pool and the
//! root target. Every [`Logger`] handle resolves its level and destination
//! through a registry; the crate-level functions use a process-wide one.

use super::{
    appender::Appender,
    config::{self, Directive, LevelSpec, Line},
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    logger::Logger,
    name::ancestors,
    snapshot::RegistrySnapshot,
    target_pool::{TargetPool, DEFAULT_TARGET_CAPACITY},
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Environment variable naming the configuration file of the global registry.
pub const CONFIG_ENV_VAR: &str = "HIERLOG_CONFIG";

/// Configuration file the global registry loads when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "logging.properties";

/// Logger name used for lines the registry writes about its own configuration.
pub const DIAGNOSTIC_LOGGER: &str = "hierlog";

type FallbackFactory = Box<dyn Fn(&TimestampFormat) -> Box<dyn Appender> + Send + Sync>;

/// What a second `configure` call does once configuration has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconfigurePolicy {
    /// Leave the current configuration alone and return `Ok(false)`
    #[default]
    Ignore,
    /// Return [`LoggerError::AlreadyConfigured`]
    Reject,
    /// Drop all overrides and targets, then apply the new configuration
    Replace,
}

/// Where a logger's lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetId {
    Root,
    Pool(usize),
}

struct RegistryState {
    level_overrides: HashMap<String, LogLevel>,
    target_overrides: HashMap<String, usize>,
    pool: TargetPool,
    root: Box<dyn Appender>,
    root_level: LogLevel,
    configured_from: Option<String>,
}

impl RegistryState {
    fn new(capacity: usize, root: Box<dyn Appender>) -> Self {
        Self {
            level_overrides: HashMap::new(),
            target_overrides: HashMap::new(),
            pool: TargetPool::new(capacity),
            root,
            root_level: LogLevel::Info,
            configured_from: None,
        }
    }

    fn resolve_level(&self, name: &str) -> LogLevel {
        ancestors(name)
            .find_map(|n| self.level_overrides.get(n).copied())
            .unwrap_or(self.root_level)
    }

    fn resolve_target(&self, name: &str) -> TargetId {
        ancestors(name)
            .find_map(|n| self.target_overrides.get(n).copied())
            .map_or(TargetId::Root, TargetId::Pool)
    }

    fn target_name(&self, target: TargetId) -> String {
        match target {
            TargetId::Root => self.root.name().to_string(),
            TargetId::Pool(index) => self.pool.name(index).unwrap_or_default().to_string(),
        }
    }

    /// Write one line to its target and flush it.
    fn write(&mut self, entry: &LogEntry) {
        let appender = match self.resolve_target(&entry.logger) {
            TargetId::Pool(index) => match self.pool.get_mut(index) {
                Some(appender) => appender,
                None => &mut self.root,
            },
            TargetId::Root => &mut self.root,
        };
        contained(appender, |a| {
            a.append(entry)?;
            a.flush()
        });
    }

    /// Report a configuration problem through the root target open right now.
    fn diagnostic(&mut self, source: &str, level: LogLevel, message: impl std::fmt::Display) {
        let entry = LogEntry::new(
            level,
            DIAGNOSTIC_LOGGER,
            format!("configure(\"{}\"): {}", source, message),
        );
        self.write_root(&entry);
    }

    fn write_root(&mut self, entry: &LogEntry) {
        contained(&mut self.root, |a| {
            a.append(entry)?;
            a.flush()
        });
    }
}

/// Run `op` on an appender, reporting errors and panics to stderr.
fn contained<F>(appender: &mut Box<dyn Appender>, op: F)
where
    F: FnOnce(&mut Box<dyn Appender>) -> Result<()>,
{
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| op(appender)));

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("[LOGGER ERROR] Target '{}' failed: {}", appender.name(), e);
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Target '{}' panicked: {}",
                appender.name(),
                panic_msg
            );
        }
    }
}

/// Registry of level and target overrides shared by [`Logger`] handles.
///
/// # Example
///
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder().build_shared();
/// registry
///     .configure_str("inline", "logger.Net=DEBUG\n")
///     .unwrap();
///
/// let logger = registry.logger("Net.Connector");
/// assert!(logger.is_debug_enabled());
/// assert!(!logger.is_trace_enabled());
/// ```
pub struct Registry {
    state: Mutex<RegistryState>,
    configured: AtomicBool,
    lazy_attempted: AtomicBool,
    lazy_gate: Mutex<()>,
    generation: AtomicU64,
    target_capacity: usize,
    timestamp_format: TimestampFormat,
    reconfigure_policy: ReconfigurePolicy,
    console_colors: bool,
    announce_configuration: bool,
    lazy_config: Option<PathBuf>,
    fallback: FallbackFactory,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide registry used by [`crate::get_logger`] and
    /// [`crate::configure`].
    ///
    /// It loads `$HIERLOG_CONFIG`, or `logging.properties` when the variable
    /// is unset, the first time a logger needs its level and `configure` has
    /// not been called yet.
    pub fn global() -> &'static Arc<Registry> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let path = std::env::var_os(CONFIG_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            Registry::builder().lazy_config(path).build_shared()
        })
    }

    /// Get a handle for `name`.
    pub fn logger(self: &Arc<Self>, name: impl Into<String>) -> Logger {
        Logger::new(name, Arc::clone(self))
    }

    /// Load configuration from a file.
    ///
    /// A missing file is not an error: nothing changes and `Ok(false)` is
    /// returned. Malformed lines are reported through the root target and
    /// skipped. `Ok(true)` means the configuration was applied.
    pub fn configure(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        self.lazy_attempted.store(true, Ordering::Release);

        if !path.exists() {
            return Ok(false);
        }

        let bytes = std::fs::read(path).map_err(|e| {
            LoggerError::io_operation("reading configuration", path.display().to_string(), e)
        })?;
        let text = String::from_utf8_lossy(&bytes);

        self.configure_str(&path.display().to_string(), &text)
    }

    /// Apply configuration text. `source` names it in diagnostics.
    pub fn configure_str(&self, source: &str, text: &str) -> Result<bool> {
        self.lazy_attempted.store(true, Ordering::Release);
        let mut state = self.state.lock();

        if self.configured.load(Ordering::Acquire) {
            match self.reconfigure_policy {
                ReconfigurePolicy::Ignore => return Ok(false),
                ReconfigurePolicy::Reject => return Err(LoggerError::already_configured(source)),
                ReconfigurePolicy::Replace => {
                    *state = self.fresh_state();
                    self.configured.store(false, Ordering::Release);
                    self.generation.fetch_add(1, Ordering::AcqRel);
                }
            }
        }

        for line in text.lines() {
            self.apply_line(&mut state, source, line);
        }

        state.configured_from = Some(source.to_string());
        self.configured.store(true, Ordering::Release);

        if self.announce_configuration
            && state.resolve_level(DIAGNOSTIC_LOGGER) <= LogLevel::Info
        {
            let root_level = state.root_level;
            state.diagnostic(
                source,
                LogLevel::Info,
                format_args!("logger initialized with root level '{}'", root_level),
            );
        }
        Ok(true)
    }

    fn apply_line(&self, state: &mut RegistryState, source: &str, line: &str) {
        let (name, value) = match config::parse_line(line) {
            Line::Blank => return,
            Line::Malformed { reason } => {
                state.diagnostic(source, LogLevel::Warn, LoggerError::malformed(line, reason));
                return;
            }
            Line::Assignment { name, value } => (name, value),
        };

        match config::parse_directive(name, value) {
            Directive::RootLogger {
                level,
                target,
                extra_segments,
            } => {
                match self.open_target(&target) {
                    Ok(appender) => {
                        contained(&mut state.root, |a| a.flush());
                        state.root = appender;
                    }
                    Err(e) => state.diagnostic(source, LogLevel::Error, e),
                }
                if let Some(level) = level {
                    state.root_level = level;
                }
                if extra_segments {
                    state.diagnostic(
                        source,
                        LogLevel::Warn,
                        format_args!("ignoring name after \"{}\"", config::ROOT_LOGGER),
                    );
                }
            }
            Directive::Logger { tag, level, target } => {
                match level {
                    LevelSpec::Known(level) => {
                        state.level_overrides.insert(tag.clone(), level);
                    }
                    LevelSpec::Unknown(value) => {
                        state.diagnostic(source, LogLevel::Warn, LoggerError::unknown_level(&tag, value));
                    }
                    LevelSpec::Missing => {}
                }

                if let Some(target) = target {
                    match state.pool.open(&target, |t| self.open_target(t)) {
                        Ok(index) => {
                            state.target_overrides.insert(tag, index);
                        }
                        Err(e) => state.diagnostic(
                            source,
                            LogLevel::Warn,
                            format_args!("{} for \"{}\"", e, tag),
                        ),
                    }
                }
            }
            Directive::Unrecognized => {}
        }
    }

    fn open_target(&self, target: &str) -> Result<Box<dyn Appender>> {
        let appender: Box<dyn Appender> = match target {
            config::TARGET_STDOUT => Box::new(
                ConsoleAppender::stdout()
                    .with_colors(self.console_colors)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
            config::TARGET_STDERR => Box::new(
                ConsoleAppender::stderr()
                    .with_colors(self.console_colors)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
            path => Box::new(
                FileAppender::new(path)?.with_timestamp_format(self.timestamp_format.clone()),
            ),
        };
        Ok(appender)
    }

    fn fresh_state(&self) -> RegistryState {
        RegistryState::new(self.target_capacity, (self.fallback)(&self.timestamp_format))
    }

    /// Load the lazy configuration file if nothing has been configured yet.
    ///
    /// Concurrent callers wait until the load has finished.
    pub(crate) fn ensure_configured(&self) {
        if self.configured.load(Ordering::Acquire) {
            return;
        }
        let Some(path) = self.lazy_config.as_ref() else {
            return;
        };

        let _loading = self.lazy_gate.lock();
        if self.configured.load(Ordering::Acquire)
            || self.lazy_attempted.swap(true, Ordering::AcqRel)
        {
            return;
        }
        if let Err(e) = self.configure(path) {
            eprintln!("[LOGGER ERROR] Failed to load '{}': {}", path.display(), e);
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }

    /// Incremented whenever cached logger levels become stale.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Effective level of `name`, `Uninitialized` until configured.
    pub fn resolve_level(&self, name: &str) -> LogLevel {
        let state = self.state.lock();
        if !self.is_configured() {
            return LogLevel::Uninitialized;
        }
        state.resolve_level(name)
    }

    /// Effective target of `name`.
    pub fn resolve_target(&self, name: &str) -> TargetId {
        self.state.lock().resolve_target(name)
    }

    /// Name of the effective target of `name`: a path, `STDOUT` or `STDERR`.
    pub fn target_name(&self, name: &str) -> String {
        let state = self.state.lock();
        let target = state.resolve_target(name);
        state.target_name(target)
    }

    /// Number of targets opened for `logger.<tag>` directives.
    pub fn open_targets(&self) -> usize {
        self.state.lock().pool.len()
    }

    pub fn target_capacity(&self) -> usize {
        self.target_capacity
    }

    /// Write an entry to the target of `entry.logger`. Never fails.
    pub fn write(&self, entry: &LogEntry) {
        self.state.lock().write(entry);
    }

    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.root.flush()?;
        state.pool.flush_all()
    }

    /// Return to the unconfigured state, closing every target.
    ///
    /// Handles created earlier drop their cached level on their next call.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        *state = self.fresh_state();
        self.configured.store(false, Ordering::Release);
        self.lazy_attempted.store(false, Ordering::Release);
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.lock();
        let levels: BTreeMap<String, LogLevel> = state
            .level_overrides
            .iter()
            .map(|(tag, level)| (tag.clone(), *level))
            .collect();
        let targets: BTreeMap<String, String> = state
            .target_overrides
            .iter()
            .map(|(tag, index)| (tag.clone(), state.target_name(TargetId::Pool(*index))))
            .collect();

        RegistrySnapshot {
            configured: self.is_configured(),
            configured_from: state.configured_from.clone(),
            root_level: state.root_level,
            root_target: state.root.name().to_string(),
            levels,
            targets,
            open_targets: state.pool.len(),
            target_capacity: state.pool.capacity(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Registry`] with a fluent API
///
/// # Example
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder()
///     .target_capacity(4)
///     .reconfigure_policy(ReconfigurePolicy::Replace)
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .build_shared();
/// assert_eq!(registry.target_capacity(), 4);
/// ```
pub struct RegistryBuilder {
    target_capacity: usize,
    timestamp_format: TimestampFormat,
    reconfigure_policy: ReconfigurePolicy,
    console_colors: bool,
    announce_configuration: bool,
    lazy_config: Option<PathBuf>,
    fallback: Option<FallbackFactory>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            target_capacity: DEFAULT_TARGET_CAPACITY,
            timestamp_format: TimestampFormat::default(),
            reconfigure_policy: ReconfigurePolicy::default(),
            console_colors: false,
            announce_configuration: false,
            lazy_config: None,
            fallback: None,
        }
    }

    /// Maximum number of targets `logger.<tag>` directives may open
    #[must_use = "builder methods return a new value"]
    pub fn target_capacity(mut self, capacity: usize) -> Self {
        self.target_capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn reconfigure_policy(mut self, policy: ReconfigurePolicy) -> Self {
        self.reconfigure_policy = policy;
        self
    }

    /// Colorize level tags on `STDOUT`/`STDERR` targets
    #[must_use = "builder methods return a new value"]
    pub fn console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    /// Write `logger initialized with root level '<LEVEL>'` after each
    /// successful configure, subject to the `hierlog` logger's level
    #[must_use = "builder methods return a new value"]
    pub fn announce_configuration(mut self, enabled: bool) -> Self {
        self.announce_configuration = enabled;
        self
    }

    /// File loaded on first use when `configure` was never called
    #[must_use = "builder methods return a new value"]
    pub fn lazy_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.lazy_config = Some(path.into());
        self
    }

    /// Root target used until a `rootLogger` directive opens one.
    ///
    /// Defaults to stderr. The factory runs again after every reset.
    #[must_use = "builder methods return a new value"]
    pub fn fallback<F>(mut self, factory: F) -> Self
    where
        F: Fn(&TimestampFormat) -> Box<dyn Appender> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> Registry {
        let console_colors = self.console_colors;
        let fallback: FallbackFactory = match self.fallback {
            Some(factory) => factory,
            None => Box::new(move |format: &TimestampFormat| -> Box<dyn Appender> {
                Box::new(
                    ConsoleAppender::stderr()
                        .with_colors(console_colors)
                        .with_timestamp_format(format.clone()),
                )
            }),
        };
        let root = fallback(&self.timestamp_format);

        Registry {
            state: Mutex::new(RegistryState::new(self.target_capacity, root)),
            configured: AtomicBool::new(false),
            lazy_attempted: AtomicBool::new(false),
            lazy_gate: Mutex::new(()),
            generation: AtomicU64::new(0),
            target_capacity: self.target_capacity,
            timestamp_format: self.timestamp_format,
            reconfigure_policy: self.reconfigure_policy,
            console_colors,
            announce_configuration: self.announce_configuration,
            lazy_config: self.lazy_config,
            fallback,
        }
    }

    pub fn build_shared(self) -> Arc<Registry> {
        Arc::new(self.build())
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
