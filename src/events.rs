/// Diagnostic emitted while normalizing a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl DiagnosticEvent {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Debug, message)
    }

    /// Forward this event to the `log` facade under `target`.
    pub fn emit(&self, target: &str) {
        let level: log::Level = self.level.into();
        log::log!(target: target, level, "{}", self.message);
    }
}

/// Log levels abstracted from the `log` crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl From<DiagnosticLevel> for log::Level {
    fn from(level: DiagnosticLevel) -> Self {
        match level {
            DiagnosticLevel::Error => log::Level::Error,
            DiagnosticLevel::Warning => log::Level::Warn,
            DiagnosticLevel::Info => log::Level::Info,
            DiagnosticLevel::Debug => log::Level::Debug,
        }
    }
}

/// Emit every event in order under `target`.
pub fn emit_all(events: &[DiagnosticEvent], target: &str) {
    for event in events {
        event.emit(target);
    }
}
