use kernel::KernelError;

pub mod database;
pub mod error;

use crate::error::ConvertError;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key).convert_error()
}
