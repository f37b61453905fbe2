//! Error taxonomy shared by every container in the crate.

use thiserror::Error;

/// Contract violations reported by container operations.
///
/// None of these are transient: the caller asked for something the
/// container cannot give in its current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pop/front/back/top on an empty container.
    #[error("{op} called on an empty container")]
    Empty {
        /// Name of the operation that failed
        op: &'static str,
    },

    /// Checked indexed access past the current length.
    #[error("out of bounds: index {index}, len {len}")]
    OutOfBounds {
        /// The requested index
        index: usize,
        /// The length at the time of the call
        len: usize,
    },

    /// Strict lookup on a key that is not in the map.
    #[error("no value associated to the given key")]
    KeyNotFound,

    /// Insert of a key that is already in the map.
    #[error("a value associated to this key already exists")]
    DuplicateKey,
}

impl Error {
    pub(crate) fn empty(op: &'static str) -> Self {
        Error::Empty { op }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            Error::empty("pop_back").to_string(),
            "pop_back called on an empty container"
        );
        assert_eq!(
            Error::OutOfBounds { index: 3, len: 2 }.to_string(),
            "out of bounds: index 3, len 2"
        );
    }
}
