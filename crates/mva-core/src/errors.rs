//! Structured error types shared across MVA crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MvaError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, sizes, parameter values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the MVA engine.
///
/// Every failure is a local precondition violation detected before any shared
/// state is mutated: an operation either fully applies or leaves the engine
/// exactly as it was. None of the variants is retriable or fatal; the engine
/// remains usable after any rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MvaError {
    /// Malformed caller supplied parameters (dimensionality, bounds, counts).
    #[error("parameter error: {0}")]
    Parameter(ErrorInfo),
    /// Registry or arena index outside the currently valid range.
    #[error("index error: {0}")]
    Index(ErrorInfo),
    /// Numerically degenerate wave function state (undefined renormalization).
    #[error("degenerate state error: {0}")]
    Degenerate(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MvaError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MvaError::Parameter(info) | MvaError::Index(info) | MvaError::Degenerate(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Creates a parameter error from a code and message.
    pub fn parameter(code: impl Into<String>, message: impl Into<String>) -> Self {
        MvaError::Parameter(ErrorInfo::new(code, message))
    }

    /// Creates an index error from a code and message.
    pub fn index(code: impl Into<String>, message: impl Into<String>) -> Self {
        MvaError::Index(ErrorInfo::new(code, message))
    }

    /// Creates a degenerate state error from a code and message.
    pub fn degenerate(code: impl Into<String>, message: impl Into<String>) -> Self {
        MvaError::Degenerate(ErrorInfo::new(code, message))
    }
}
