use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    NotFound,
    InvalidInput,
    Unavailable,
    Internal,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreError {
    pub entity_type: Option<String>,
    pub kind: CoreErrorKind,
    pub message: String,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            entity_type: None,
            kind,
            message: message.into(),
        }
    }

    pub fn for_entity_type(
        entity_type: impl Into<String>,
        kind: CoreErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: Some(entity_type.into()),
            kind,
            message: message.into(),
        }
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for CoreError {}

pub type CoreResult<T> = Result<T, CoreError>;
