//! Bounded pool of open output targets
//!
//! Slots are handed out in order and never reused or closed while the pool
//! lives. Requests naming a target that is already open share its slot and do
//! not count against the capacity.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET_CAPACITY: usize = 16;

pub struct TargetPool {
    appenders: Vec<Box<dyn Appender>>,
    by_key: HashMap<PathBuf, usize>,
    capacity: usize,
}

impl TargetPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            appenders: Vec::new(),
            by_key: HashMap::new(),
            capacity,
        }
    }

    /// Return the slot for `target`, opening it with `open` if it is new.
    pub fn open<F>(&mut self, target: &str, open: F) -> Result<usize>
    where
        F: FnOnce(&str) -> Result<Box<dyn Appender>>,
    {
        let key = target_key(target);
        if let Some(&index) = self.by_key.get(&key) {
            return Ok(index);
        }

        if self.is_full() {
            return Err(LoggerError::pool_exhausted(target, self.capacity));
        }

        let appender = open(target)?;
        let index = self.appenders.len();
        self.appenders.push(appender);
        self.by_key.insert(key, index);
        Ok(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Appender>> {
        self.appenders.get_mut(index)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.appenders.get(index).map(|a| a.name())
    }

    pub fn len(&self) -> usize {
        self.appenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appenders.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.appenders.len() >= self.capacity
    }

    pub fn flush_all(&mut self) -> Result<()> {
        for appender in self.appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

/// Paths are compared after resolving them against the working directory.
fn target_key(target: &str) -> PathBuf {
    let path = Path::new(target);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
