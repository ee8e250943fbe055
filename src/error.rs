use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    TaskNotFound,
    ValidationError,
    StorageError,
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct DevotrackError {
    pub code: ErrorCode,
    pub message: String,
}

impl DevotrackError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "devotrack is not initialized. Run `devotrack init` first.",
        )
    }

    pub fn task_not_found(task_id: u8) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {task_id} (weekly tasks are numbered 1-7)"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<rusqlite::Error> for DevotrackError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for DevotrackError {
    fn from(e: serde_json::Error) -> Self {
        Self::storage(format!("Malformed stored value: {e}"))
    }
}

impl From<std::io::Error> for DevotrackError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}
