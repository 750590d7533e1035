use thiserror::Error;

/// Error types for `DynVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynVecError {
    /// A parameter or value does not fit the vector
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what was wrong with the argument
        reason: &'static str,
    },
    /// Index is outside the range valid for the operation
    #[error("Index out of bounds: index {index} is invalid for vector length {length}")]
    OutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Storage for the requested capacity could not be obtained
    #[error("Allocation failure: cannot allocate storage for {capacity} elements")]
    AllocationFailure {
        /// Capacity, in elements, that was requested
        capacity: usize,
    },
}
