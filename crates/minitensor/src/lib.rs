#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `minitensor` provides a small dense tensor type for scalars, vectors and
//! matrices of `f32` values, stored contiguously in row-major order.
//!
//! # Architecture
//!
//! - **Tensor**: flat element buffer plus shape and stride descriptors
//! - **TensorError**: the error taxonomy shared by every fallible operation
//! - **add**: element-wise addition with scalar broadcasting
//!
//! # Quick Start
//!
//! ```rust
//! use minitensor::{add, Tensor};
//!
//! let m = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! assert_eq!(m.shape(), &[2, 3]);
//! assert_eq!(m.at2(1, 0), Ok(&4.0));
//!
//! let shifted = add(&m, &Tensor::scalar(1.0)).unwrap();
//! assert_eq!(shifted.to_string(), "[[2.0, 3.0, 4.0], [5.0, 6.0, 7.0]]");
//! ```

/// Bincode module for binary serialization and deserialization.
#[cfg(feature = "bincode")]
pub mod bincode;

/// Textual rendering of tensors.
pub mod display;

/// Error types for the tensor module.
pub mod error;

/// Arithmetic operations between tensors.
pub mod ops;

/// Serde module for JSON/other format serialization and deserialization.
#[cfg(feature = "serde")]
pub mod serde;

/// Tensor module containing the main tensor implementation.
pub mod tensor;

pub use crate::error::TensorError;
pub use crate::ops::add;
pub use crate::tensor::{get_strides_from_shape, Tensor};
