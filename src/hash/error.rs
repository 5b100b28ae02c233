use thiserror::Error;

/// Error returned by the reporting insert of an open-addressing table.
///
/// The rejected value is handed back to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InsertError<T> {
    #[error("table is full")]
    Full(T),
}

impl<T> InsertError<T> {
    /// Take back the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Full(value) => value,
        }
    }
}
