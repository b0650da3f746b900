use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    Referential,
    NotFound,
    Conflict,
    OutOfStock,
    InvalidState,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid request data"),
            KernelError::Referential => write!(f, "Referenced entity does not exist"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Conflict => write!(f, "Unique constraint violated"),
            KernelError::OutOfStock => write!(f, "No copies available for rental"),
            KernelError::InvalidState => write!(f, "Operation not allowed in current rental state"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
