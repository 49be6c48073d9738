// ABOUTME: Error types for the page adapter including ErrorCode enum and EnhanceError struct.
// ABOUTME: Only caller mistakes surface here; odd page content is skipped silently.

use std::fmt;

/// Error codes representing the categories of enhancement failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    InvalidSelector,
    Config,
    Io,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::InvalidSelector => "invalid selector",
            ErrorCode::Config => "config error",
            ErrorCode::Io => "I/O error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for enhancement operations.
#[derive(Debug, thiserror::Error)]
pub struct EnhanceError {
    pub code: ErrorCode,
    /// What the operation was working on: a URL, a selector or a path.
    pub subject: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enhanced-qis: {} {}: {}", self.op, self.subject, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl EnhanceError {
    fn new(
        code: ErrorCode,
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create an InvalidSelector error.
    pub fn invalid_selector(css: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSelector, css, op, None)
    }

    /// Create a Config error.
    pub fn config(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Config, subject, op, source)
    }

    /// Create an Io error.
    pub fn io(path: impl Into<String>, op: impl Into<String>, source: std::io::Error) -> Self {
        Self::new(ErrorCode::Io, path, op, Some(source.into()))
    }

    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    pub fn is_invalid_selector(&self) -> bool {
        self.code == ErrorCode::InvalidSelector
    }

    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }
}
