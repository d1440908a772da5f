use thiserror::Error;

/// Error type for tensor operations.
///
/// Every fallible operation in this crate reports one of these variants
/// synchronously. No operation leaves a partially constructed or partially
/// mutated tensor behind.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Structurally inconsistent input, or an index operation used against a
    /// tensor of the wrong rank.
    ///
    /// # Examples
    /// - Building a matrix from rows of different lengths
    /// - Calling the single-index accessor on a scalar
    #[error("Invalid shape: {message}")]
    InvalidShape {
        /// Human-readable description of the inconsistency
        message: String,
    },

    /// Index exceeds the size of the dimension it addresses.
    #[error("Index {index} out of bounds for {dim} dimension of size {size}")]
    IndexOutOfBounds {
        /// Name of the dimension being indexed (`"row"`, `"column"`, ...)
        dim: &'static str,
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Operation not valid for the current state of the tensor.
    ///
    /// Raised by `item()` on a multi-element tensor and by the mutable
    /// single-index accessor on a tensor that is not a vector.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Human-readable description of the violated precondition
        message: String,
    },

    /// Operands of a binary operation have shapes that cannot be broadcast.
    #[error("Shape mismatch: dimensions do not match, {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        /// Shape of the left-hand side operand
        lhs: Vec<usize>,
        /// Shape of the right-hand side operand
        rhs: Vec<usize>,
    },

    /// Operand rank outside of {0, 1, 2} for an operation that requires it.
    #[error("Unsupported rank: {operation} is not defined for rank-{rank} tensors")]
    UnsupportedRank {
        /// Name of the operation that failed
        operation: &'static str,
        /// Rank of the offending tensor
        rank: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(dim: &'static str, index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { dim, index, size }
    }

    /// Creates an InvalidState error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Creates a ShapeMismatch error from the two operand shapes.
    pub fn shape_mismatch(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::ShapeMismatch {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Creates an UnsupportedRank error.
    pub fn unsupported_rank(operation: &'static str, rank: usize) -> Self {
        Self::UnsupportedRank { operation, rank }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::InvalidShape { .. } => {
                "Ensure all rows have the same length and use the accessor matching the tensor rank"
            }
            Self::IndexOutOfBounds { .. } => {
                "Verify indices are within bounds (0 <= index < dimension_size)"
            }
            Self::InvalidState { .. } => {
                "Use item() only on single-element tensors and at_mut() only on vectors"
            }
            Self::ShapeMismatch { .. } => {
                "Add tensors of identical shape, or broadcast with a scalar operand"
            }
            Self::UnsupportedRank { .. } => "Only scalars, vectors and matrices are supported",
        }
    }
}
