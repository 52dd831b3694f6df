use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `Vector` or `RawMemory` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested number of elements does not fit in a `usize`.
    CapacityOverflow = 1,
    /// The size in bytes of the requested block is not a valid `Layout`.
    LayoutFailure,
    /// The allocator could not provide the requested block.
    AllocFailure,
}

/// A type alias for `Result<T, VectorError>`
pub type VectorResult<T> = Result<T, VectorError>;

/// This is used to indicate an error during a `Vector` operation.
///
/// When an operation returns this error the container it was called on
/// has not been modified.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VectorError(ErrorKind);

impl VectorError {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }

    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
}

impl Error for VectorError {}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorKind::CapacityOverflow => f.write_str("Capacity overflowed."),
            ErrorKind::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorKind::AllocFailure => f.write_str("An allocation failure occurred."),
        }
    }
}
