use std::fmt;
use std::string::FromUtf8Error;

/// Errors returned by an object store
#[derive(Debug, Clone)]
pub enum StorageError {
    NoSuchBucket(String),
    AccessDenied,
    InternalError(String),
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoSuchBucket(_) => "NoSuchBucket",
            StorageError::AccessDenied => "AccessDenied",
            StorageError::InternalError(_) => "InternalError",
        }
    }

    fn message(&self) -> String {
        match self {
            StorageError::NoSuchBucket(bucket) => {
                format!("The specified bucket does not exist: {}", bucket)
            }
            StorageError::AccessDenied => "Access Denied".to_string(),
            StorageError::InternalError(msg) => format!("Internal Error: {}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for StorageError {}

/// Per-record failure while decoding a stream payload
#[derive(Debug)]
pub enum DecodeError {
    /// The record carried no `data` field
    MissingData,
    Base64(base64::DecodeError),
    Utf8(FromUtf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingData => write!(f, "record has no payload data"),
            DecodeError::Base64(e) => write!(f, "payload is not valid base64: {}", e),
            DecodeError::Utf8(e) => write!(f, "payload is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::MissingData => None,
            DecodeError::Base64(e) => Some(e),
            DecodeError::Utf8(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(e: base64::DecodeError) -> Self {
        DecodeError::Base64(e)
    }
}

impl From<FromUtf8Error> for DecodeError {
    fn from(e: FromUtf8Error) -> Self {
        DecodeError::Utf8(e)
    }
}

/// Errors that fail a whole invocation
#[derive(Debug)]
pub enum HandlerError {
    /// The notification carried no records
    EmptyBatch,
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::EmptyBatch => write!(f, "notification contains no records"),
        }
    }
}

impl std::error::Error for HandlerError {}
