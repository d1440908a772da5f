use crate::error::TensorError;

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// Strides define how many elements to skip in memory to move along each dimension.
/// For row-major layout, the rightmost dimension has stride 1, and each dimension's
/// stride is the product of all dimensions to its right.
///
/// The rule holds for any rank, including ranks that no other operation supports.
///
/// # Examples
///
/// ```rust
/// use minitensor::get_strides_from_shape;
///
/// // For a 2x3 matrix: [[a, b, c], [d, e, f]]
/// assert_eq!(get_strides_from_shape(&[2, 3]), vec![3, 1]);
///
/// // For a 2x3x4 tensor
/// assert_eq!(get_strides_from_shape(&[2, 3, 4]), vec![12, 4, 1]);
///
/// // A scalar has no strides
/// assert!(get_strides_from_shape(&[]).is_empty());
/// ```
///
/// Partial products saturate at `usize::MAX` instead of overflowing; no tensor
/// with such a shape can be constructed.
pub fn get_strides_from_shape(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride: usize = 1;
    for (s, &dim) in strides.iter_mut().zip(shape).rev() {
        *s = stride;
        stride = stride.saturating_mul(dim);
    }
    strides
}

/// Element count and row-major strides of `shape`, or `None` if any partial
/// product overflows `usize`.
fn checked_layout(shape: &[usize]) -> Option<(usize, Vec<usize>)> {
    let mut strides = vec![0; shape.len()];
    let mut stride: usize = 1;
    for (s, &dim) in strides.iter_mut().zip(shape).rev() {
        *s = stride;
        stride = stride.checked_mul(dim)?;
    }
    Some((stride, strides))
}

fn layout_or_err(shape: &[usize]) -> Result<(usize, Vec<usize>), TensorError> {
    checked_layout(shape).ok_or_else(|| {
        TensorError::invalid_shape(format!("element count of shape {shape:?} overflows usize"))
    })
}

/// A dense, row-major array of `f32` values of rank 0 (scalar), 1 (vector)
/// or 2 (matrix).
///
/// The tensor combines a flat element buffer with shape and stride descriptors.
/// Shape and strides are fixed at construction; only element values may be
/// changed afterwards, through [`Tensor::item_mut`], [`Tensor::at_mut`] and
/// [`Tensor::at2_mut`].
///
/// # Memory Layout
///
/// Elements are stored in row-major order, where the rightmost dimension varies
/// fastest. `strides[i]` is the product of all dimension sizes to the right of `i`.
///
/// # Examples
///
/// ```rust
/// use minitensor::Tensor;
///
/// let t = Tensor::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.strides(), &[3, 1]);
/// assert_eq!(t.at2(1, 2), Ok(&6.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl Tensor {
    /// Creates a rank-0 tensor holding a single value.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::Tensor;
    ///
    /// let t = Tensor::scalar(5.0);
    /// assert!(t.shape().is_empty());
    /// assert_eq!(t.item(), Ok(&5.0));
    /// ```
    pub fn scalar(value: f32) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
            strides: Vec::new(),
        }
    }

    /// Creates a rank-1 tensor from a flat sequence of values.
    ///
    /// The sequence may be empty, giving a vector of length zero.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(t.shape(), &[3]);
    /// assert_eq!(t.strides(), &[1]);
    /// ```
    pub fn from_vec(data: Vec<f32>) -> Self {
        let shape = vec![data.len()];
        Self {
            data,
            shape,
            strides: vec![1],
        }
    }

    /// Creates a zero-filled tensor with the given shape.
    ///
    /// Any rank is accepted here, but indexing, addition and rendering only
    /// support ranks 0 to 2 and report [`TensorError::UnsupportedRank`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the element count overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::Tensor;
    ///
    /// let t = Tensor::zeros(&[2, 3]).unwrap();
    /// assert_eq!(t.as_slice(), &[0.0; 6]);
    /// assert_eq!(t.strides(), &[3, 1]);
    ///
    /// let t = Tensor::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(t.strides(), &[12, 4, 1]);
    /// ```
    pub fn zeros(shape: &[usize]) -> Result<Self, TensorError> {
        let (numel, strides) = layout_or_err(shape)?;
        Ok(Self {
            data: vec![0.0; numel],
            shape: shape.to_vec(),
            strides,
        })
    }

    /// Creates a rank-2 tensor from a sequence of equal-length rows.
    ///
    /// The rows are flattened in order into row-major storage. An empty sequence
    /// of rows gives a `[0, 0]` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if any row differs in length from the first.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::{Tensor, TensorError};
    ///
    /// let t = Tensor::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(t.shape(), &[2, 2]);
    ///
    /// let ragged = Tensor::from_rows(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]);
    /// assert!(matches!(ragged, Err(TensorError::InvalidShape { .. })));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, TensorError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(TensorError::invalid_shape(format!(
                "dimensions are inconsistent: row {i} has {} elements, expected {num_cols}",
                row.len()
            )));
        }

        let data: Vec<f32> = rows.into_iter().flatten().collect();
        log::trace!("built {num_rows}x{num_cols} tensor from rows");

        Ok(Self {
            data,
            shape: vec![num_rows, num_cols],
            strides: vec![num_cols, 1],
        })
    }

    /// Creates a tensor with the given shape from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the product of `shape` overflows
    /// `usize` or does not match the number of elements in `data`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> Result<Self, TensorError> {
        let (numel, strides) = layout_or_err(shape)?;
        if numel != data.len() {
            return Err(TensorError::invalid_shape(format!(
                "expected {numel} elements for shape {shape:?}, but got {} elements in data",
                data.len()
            )));
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            strides,
        })
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called with the multi-dimensional index of every
    /// element, in row-major order.
    pub(crate) fn from_shape_fn<F>(shape: &[usize], f: F) -> Self
    where
        F: Fn(&[usize]) -> f32,
    {
        let numel = shape.iter().product::<usize>();
        let mut index = vec![0; shape.len()];
        let data: Vec<f32> = (0..numel)
            .map(|i| {
                let mut j = i;
                for k in (0..shape.len()).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index.as_slice())
            })
            .collect();
        Self {
            data,
            shape: shape.to_vec(),
            strides: get_strides_from_shape(shape),
        }
    }

    /// The dimension sizes of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The per-dimension element offsets into the flat storage.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Alias of [`Tensor::strides`].
    #[inline]
    pub fn stride(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions: 0 for a scalar, 1 for a vector, 2 for a matrix.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the data of the tensor as a slice, in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the tensor and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Returns an iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.data.iter()
    }

    /// Checks that the strides follow the row-major rule for the current shape.
    pub fn is_standard_layout(&self) -> bool {
        let mut expected_stride: usize = 1;
        for (&dim, &stride) in self.shape.iter().rev().zip(self.strides.iter().rev()) {
            if stride != expected_stride {
                return false;
            }
            expected_stride = expected_stride.saturating_mul(dim);
        }
        self.shape.len() == self.strides.len()
    }

    /// Returns the sole element of a single-element tensor.
    ///
    /// The check is on the element count, not the rank: a `[1, 1]` matrix is
    /// accepted as well as a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidState`] if the tensor holds more or fewer
    /// than one element.
    pub fn item(&self) -> Result<&f32, TensorError> {
        self.check_single_element()?;
        Ok(&self.data[0])
    }

    /// Mutable counterpart of [`Tensor::item`].
    pub fn item_mut(&mut self) -> Result<&mut f32, TensorError> {
        self.check_single_element()?;
        Ok(&mut self.data[0])
    }

    /// Returns the `i`-th element of a vector.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidShape`] for scalars and matrices.
    /// - [`TensorError::UnsupportedRank`] for rank 3 and above.
    /// - [`TensorError::IndexOutOfBounds`] if `i >= shape[0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::{Tensor, TensorError};
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(t.at(2), Ok(&3.0));
    /// assert!(matches!(t.at(3), Err(TensorError::IndexOutOfBounds { .. })));
    /// ```
    pub fn at(&self, i: usize) -> Result<&f32, TensorError> {
        match self.rank() {
            0 => Err(TensorError::invalid_shape("cannot index a scalar; use item() instead")),
            1 => {
                let offset = self.vector_offset(i)?;
                Ok(&self.data[offset])
            }
            2 => Err(TensorError::invalid_shape("use two indices for rank-2 tensors")),
            rank => Err(TensorError::unsupported_rank("at", rank)),
        }
    }

    /// Returns a mutable reference to the `i`-th element of a vector.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidState`] for any tensor that is not a vector.
    /// - [`TensorError::IndexOutOfBounds`] if `i >= shape[0]`.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut f32, TensorError> {
        if self.rank() != 1 {
            return Err(TensorError::invalid_state(
                "at_mut() can only be called on rank-1 tensors",
            ));
        }
        let offset = self.vector_offset(i)?;
        Ok(&mut self.data[offset])
    }

    /// Returns the element at row `i` and column `j` of a matrix.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidShape`] for scalars and vectors.
    /// - [`TensorError::UnsupportedRank`] for rank 3 and above.
    /// - [`TensorError::IndexOutOfBounds`] naming the row or column dimension
    ///   that `i` or `j` overflows.
    pub fn at2(&self, i: usize, j: usize) -> Result<&f32, TensorError> {
        let offset = self.matrix_offset(i, j, "at2")?;
        Ok(&self.data[offset])
    }

    /// Mutable counterpart of [`Tensor::at2`], with the same error contract.
    pub fn at2_mut(&mut self, i: usize, j: usize) -> Result<&mut f32, TensorError> {
        let offset = self.matrix_offset(i, j, "at2_mut")?;
        Ok(&mut self.data[offset])
    }

    fn check_single_element(&self) -> Result<(), TensorError> {
        if self.data.len() != 1 {
            return Err(TensorError::invalid_state(
                "item() can only be called on a single-element tensor",
            ));
        }
        Ok(())
    }

    // rank already checked by the caller
    fn vector_offset(&self, i: usize) -> Result<usize, TensorError> {
        if i >= self.shape[0] {
            return Err(TensorError::index_out_of_bounds("vector", i, self.shape[0]));
        }
        Ok(i * self.strides[0])
    }

    fn matrix_offset(
        &self,
        i: usize,
        j: usize,
        operation: &'static str,
    ) -> Result<usize, TensorError> {
        match self.rank() {
            2 => {}
            0 | 1 => {
                return Err(TensorError::invalid_shape(format!(
                    "{operation}() requires a rank-2 tensor, got rank {}",
                    self.rank()
                )))
            }
            rank => return Err(TensorError::unsupported_rank(operation, rank)),
        }
        if i >= self.shape[0] {
            return Err(TensorError::index_out_of_bounds("row", i, self.shape[0]));
        }
        if j >= self.shape[1] {
            return Err(TensorError::index_out_of_bounds("column", j, self.shape[1]));
        }
        Ok(i * self.strides[0] + j * self.strides[1])
    }
}

impl From<f32> for Tensor {
    fn from(value: f32) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<f32>> for Tensor {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[f32]> for Tensor {
    fn from(data: &[f32]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl TryFrom<Vec<Vec<f32>>> for Tensor {
    type Error = TensorError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
