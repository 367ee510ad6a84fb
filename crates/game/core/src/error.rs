//! Errors raised when turning partial records into characters.

use thiserror::Error;

use crate::record::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("character record is missing the required field '{0}'")]
    MissingField(Field),
}
