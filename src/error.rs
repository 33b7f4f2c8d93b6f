use core::fmt;

/// The ways an operation on a [`HashMap`](crate::HashMap) or
/// [`HashSet`](crate::HashSet) can refuse to proceed.
///
/// Every variant is a deterministic function of the table state and the
/// arguments; none of them is transient, so retrying the same call on the same
/// table fails the same way. Callers that do not care about the distinction
/// between "already there" and "newly added" should use the permissive
/// operations (`set`/`unset` on maps, `add`/`discard` on sets) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A table was configured without a hash function.
    MissingHashFunction,
    /// A strict map insert found the key already present.
    DuplicateKey,
    /// A strict set insert found the element already present.
    DuplicateElement,
    /// A strict map removal or read-only value access found no such key.
    MissingKey,
    /// A strict set removal found no such element.
    MissingElement,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::MissingHashFunction => "a hash table requires a hash function",
            Error::DuplicateKey => "key is already present in the map",
            Error::DuplicateElement => "element is already present in the set",
            Error::MissingKey => "key is not present in the map",
            Error::MissingElement => "element is not present in the set",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
