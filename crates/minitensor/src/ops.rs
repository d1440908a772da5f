//! Operations for tensors.
//!
//! This module provides the broadcasting element-wise addition.

use crate::{error::TensorError, tensor::Tensor};

/// Highest rank accepted by the arithmetic operations.
const MAX_RANK: usize = 2;

/// Add two tensors, broadcasting a scalar operand over the other one.
///
/// Supported rank pairs:
///
/// | lhs | rhs | result |
/// |-----|-----|--------|
/// | 0   | 0   | scalar sum |
/// | 0   | 1, 2 | the scalar added to every element of `rhs` |
/// | 1, 2 | 0  | the scalar added to every element of `lhs` |
/// | 1   | 1   | element-wise sum, lengths must match |
/// | 2   | 2   | element-wise sum, rows and columns must match |
///
/// Neither operand is modified; the result owns freshly allocated storage.
///
/// # Arguments
///
/// * `lhs` - Left-hand side tensor.
/// * `rhs` - Right-hand side tensor.
///
/// # Errors
///
/// - [`TensorError::UnsupportedRank`] if either operand has rank 3 or above.
/// - [`TensorError::ShapeMismatch`] for a vector and a matrix, or for
///   non-scalar operands of different shapes.
///
/// # Example
///
/// ```
/// use minitensor::{add, Tensor};
///
/// let a = Tensor::scalar(2.0);
/// let b = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
/// let c = add(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[3.0, 4.0, 5.0]);
/// ```
pub fn add(lhs: &Tensor, rhs: &Tensor) -> Result<Tensor, TensorError> {
    let out_shape = broadcast_shape(lhs, rhs)?;
    log::debug!(
        "add: rank {} + rank {} -> shape {:?}",
        lhs.rank(),
        rhs.rank(),
        out_shape
    );
    Ok(Tensor::from_shape_fn(out_shape, |index| {
        value_at(lhs, index) + value_at(rhs, index)
    }))
}

/// Resolve the result shape of a binary element-wise operation.
///
/// The returned shape is borrowed from whichever operand spans the larger (or
/// equal) index space.
fn broadcast_shape<'a>(lhs: &'a Tensor, rhs: &'a Tensor) -> Result<&'a [usize], TensorError> {
    for t in [lhs, rhs] {
        if t.rank() > MAX_RANK {
            return Err(TensorError::unsupported_rank("add", t.rank()));
        }
    }

    match (lhs.rank(), rhs.rank()) {
        (0, _) => Ok(rhs.shape()),
        (_, 0) => Ok(lhs.shape()),
        (l, r) if l == r && lhs.shape() == rhs.shape() => Ok(lhs.shape()),
        _ => Err(TensorError::shape_mismatch(lhs.shape(), rhs.shape())),
    }
}

// A scalar yields its single value at any position; otherwise the index has
// the tensor's own rank.
#[inline]
fn value_at(t: &Tensor, index: &[usize]) -> f32 {
    if t.rank() == 0 {
        return t.as_slice()[0];
    }
    let offset: usize = index
        .iter()
        .zip(t.strides())
        .map(|(&i, &s)| i * s)
        .sum();
    t.as_slice()[offset]
}

#[cfg(test)]
mod tests {
    use super::add;
    use crate::{Tensor, TensorError};

    #[test]
    fn add_scalar_scalar() -> Result<(), TensorError> {
        let c = add(&Tensor::scalar(1.0), &Tensor::scalar(2.0))?;
        assert!(c.shape().is_empty());
        assert_eq!(*c.item()?, 3.0);
        Ok(())
    }

    #[test]
    fn add_scalar_1d() -> Result<(), TensorError> {
        let a = Tensor::scalar(2.0);
        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
        let c = add(&a, &b)?;
        assert_eq!(c, Tensor::from_vec(vec![3.0, 4.0, 5.0]));

        let c = add(&b, &a)?;
        assert_eq!(c.shape(), &[3]);
        assert_eq!(*c.at(0)?, 3.0);
        assert_eq!(*c.at(1)?, 4.0);
        assert_eq!(*c.at(2)?, 5.0);
        Ok(())
    }

    #[test]
    fn add_scalar_2d() -> Result<(), TensorError> {
        let a = Tensor::scalar(10.0);
        let b = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        let expected = Tensor::from_rows(vec![vec![11.0, 12.0, 13.0], vec![14.0, 15.0, 16.0]])?;
        assert_eq!(add(&a, &b)?, expected);
        assert_eq!(add(&b, &a)?, expected);
        Ok(())
    }

    #[test]
    fn add_1d_1d() -> Result<(), TensorError> {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Tensor::from_vec(vec![4.0, 5.0, 6.0]);
        let c = add(&a, &b)?;
        assert_eq!(c.as_slice(), &[5.0, 7.0, 9.0]);
        // operands untouched
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(b.as_slice(), &[4.0, 5.0, 6.0]);
        Ok(())
    }

    #[test]
    fn add_1d_mismatch() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Tensor::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            add(&a, &b),
            Err(TensorError::ShapeMismatch {
                lhs: vec![3],
                rhs: vec![2],
            })
        );
    }

    #[test]
    fn add_2d_2d() -> Result<(), TensorError> {
        let a = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        let c = add(&a, &a.clone())?;
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.strides(), &[3, 1]);
        assert_eq!(c.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        Ok(())
    }

    #[test]
    fn add_2d_mismatch() -> Result<(), TensorError> {
        let a = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        let fewer_rows = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0]])?;
        let fewer_cols = Tensor::from_rows(vec![vec![1.0, 2.0], vec![4.0, 5.0]])?;
        assert!(matches!(add(&a, &fewer_rows), Err(TensorError::ShapeMismatch { .. })));
        assert!(matches!(add(&a, &fewer_cols), Err(TensorError::ShapeMismatch { .. })));
        Ok(())
    }

    #[test]
    fn add_vector_matrix_rejected() -> Result<(), TensorError> {
        let v = Tensor::from_vec(vec![1.0, 2.0]);
        let m = Tensor::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
        assert_eq!(add(&v, &m), Err(TensorError::shape_mismatch(&[2], &[2, 2])));
        assert_eq!(add(&m, &v), Err(TensorError::shape_mismatch(&[2, 2], &[2])));
        Ok(())
    }

    #[test]
    fn add_rank3_rejected() -> Result<(), TensorError> {
        let t = Tensor::zeros(&[2, 2, 2])?;
        let s = Tensor::scalar(1.0);
        assert_eq!(add(&t, &s), Err(TensorError::unsupported_rank("add", 3)));
        assert_eq!(add(&s, &t), Err(TensorError::unsupported_rank("add", 3)));
        assert_eq!(add(&t, &t), Err(TensorError::unsupported_rank("add", 3)));
        Ok(())
    }

    #[test]
    fn add_empty_vectors() -> Result<(), TensorError> {
        let e = Tensor::from_vec(Vec::new());
        let c = add(&e, &Tensor::scalar(1.0))?;
        assert_eq!(c.shape(), &[0]);
        assert_eq!(c.numel(), 0);
        Ok(())
    }
}
