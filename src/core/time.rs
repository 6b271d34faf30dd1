//! Time provider abstraction for testable time-dependent formatting

use std::time::SystemTime;

/// Abstraction over the wall clock used when no build date was injected
pub trait TimeProvider: Send + Sync {
    /// Get the current system time (for timestamps)
    fn system_time(&self) -> SystemTime;
}

/// Production time provider using actual system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Frozen clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider {
    at: SystemTime,
}

impl FixedTimeProvider {
    pub fn new(at: SystemTime) -> Self {
        Self { at }
    }

    /// Freeze the clock at the current system time
    pub fn now() -> Self {
        Self::new(SystemTime::now())
    }
}

impl TimeProvider for FixedTimeProvider {
    fn system_time(&self) -> SystemTime {
        self.at
    }
}
