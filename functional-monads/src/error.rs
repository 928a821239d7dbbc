use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `Just` was asked to wrap a value that is the absence marker of its type
    #[error("invalid value: Just cannot wrap an absent {type_name}")]
    InvalidValue { type_name: &'static str },
}

impl Error {
    pub(crate) fn invalid_value<T>() -> Self {
        Error::InvalidValue {
            type_name: std::any::type_name::<T>(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
