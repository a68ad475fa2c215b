//! Named logger handles

use super::{
    arg::Arg, formatter::render_template, log_entry::LogEntry, log_level::LogLevel, name,
    registry::Registry,
};
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

/// A named handle resolving its level and target through a [`Registry`].
///
/// Handles are cheap to create and clone. The effective level is cached on
/// first use after configuration; a [`Registry::reset`] or [`Logger::invalidate`]
/// drops the cache.
///
/// # Example
///
/// ```
/// use hierlog::prelude::*;
///
/// let registry = Registry::builder().build_shared();
/// let logger = registry.logger("Net.Connector");
///
/// // Nothing is logged before configuration
/// assert_eq!(logger.level(), LogLevel::Uninitialized);
///
/// registry.configure_str("inline", "logger.Net=WARN").unwrap();
/// assert!(logger.is_warn_enabled());
/// logger.warn("retrying {} in {}s", &[Arg::from("10.0.0.1"), Arg::from(5)]);
/// ```
pub struct Logger {
    name: String,
    registry: Arc<Registry>,
    cached_level: AtomicU8,
    generation: AtomicU64,
}

impl Logger {
    pub fn new(name: impl Into<String>, registry: Arc<Registry>) -> Self {
        let name = name.into();
        let generation = registry.generation();
        let level = registry.resolve_level(&name);
        Self {
            name,
            registry,
            cached_level: AtomicU8::new(level.as_u8()),
            generation: AtomicU64::new(generation),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last segment of the name
    pub fn short_name(&self) -> &str {
        name::short_name(&self.name)
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Effective level, resolved once configuration has completed.
    pub fn level(&self) -> LogLevel {
        let generation = self.registry.generation();
        if self.generation.load(Ordering::Acquire) != generation {
            self.cached_level
                .store(LogLevel::Uninitialized.as_u8(), Ordering::Release);
            self.generation.store(generation, Ordering::Release);
        }

        let cached = LogLevel::from_u8(self.cached_level.load(Ordering::Acquire));
        if cached != LogLevel::Uninitialized {
            return cached;
        }

        self.registry.ensure_configured();
        if !self.registry.is_configured() {
            return LogLevel::Uninitialized;
        }

        let level = self.registry.resolve_level(&self.name);
        self.cached_level.store(level.as_u8(), Ordering::Release);
        level
    }

    /// Forget the cached level; the next call resolves it again.
    pub fn invalidate(&self) {
        self.cached_level
            .store(LogLevel::Uninitialized.as_u8(), Ordering::Release);
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Uninitialized && self.level() <= level
    }

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    #[inline]
    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    /// Render `template` with `args` and write it if `level` is enabled.
    pub fn log(&self, level: LogLevel, template: &str, args: &[Arg<'_>]) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), render_template(template, args));
        self.registry.write(&entry);
    }

    #[inline]
    pub fn trace(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Trace, template, args);
    }

    #[inline]
    pub fn debug(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Debug, template, args);
    }

    #[inline]
    pub fn info(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Info, template, args);
    }

    #[inline]
    pub fn warn(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Warn, template, args);
    }

    #[inline]
    pub fn error(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Error, template, args);
    }

    #[inline]
    pub fn fatal(&self, template: &str, args: &[Arg<'_>]) {
        self.log(LogLevel::Fatal, template, args);
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            registry: Arc::clone(&self.registry),
            cached_level: AtomicU8::new(self.cached_level.load(Ordering::Acquire)),
            generation: AtomicU64::new(self.generation.load(Ordering::Acquire)),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field(
                "cached_level",
                &LogLevel::from_u8(self.cached_level.load(Ordering::Acquire)),
            )
            .finish()
    }
}
