//! Bracketed textual rendering of tensors.

use std::fmt::{self, Write};

use crate::{error::TensorError, tensor::Tensor};

impl Tensor {
    /// Render the tensor as bracketed text.
    ///
    /// - rank 0: the bare value, e.g. `5.0`
    /// - rank 1: `[1.0, 2.0, 3.0]`
    /// - rank 2: `[[1.0, 2.0], [3.0, 4.0]]`
    ///
    /// Values use the shortest representation that parses back to the same `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::UnsupportedRank`] for rank 3 and above.
    ///
    /// # Example
    ///
    /// ```
    /// use minitensor::Tensor;
    ///
    /// let t = Tensor::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
    /// assert_eq!(t.render().unwrap(), "[[1.0, 2.0], [3.0, 4.5]]");
    /// ```
    pub fn render(&self) -> Result<String, TensorError> {
        if self.rank() > 2 {
            return Err(TensorError::unsupported_rank("render", self.rank()));
        }
        let mut out = String::new();
        write_bracketed(&mut out, self).map_err(|_| {
            TensorError::invalid_state("failed to write tensor representation")
        })?;
        Ok(out)
    }
}

fn write_row<W: Write>(w: &mut W, row: &[f32]) -> fmt::Result {
    w.write_char('[')?;
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write!(w, "{v:?}")?;
    }
    w.write_char(']')
}

fn write_bracketed<W: Write>(w: &mut W, t: &Tensor) -> fmt::Result {
    let data = t.as_slice();
    match t.shape() {
        [] => write!(w, "{:?}", data[0]),
        [_] => write_row(w, data),
        &[rows, cols] => {
            w.write_char('[')?;
            for i in 0..rows {
                if i > 0 {
                    w.write_str(", ")?;
                }
                let start = i * t.strides()[0];
                write_row(w, &data[start..start + cols])?;
            }
            w.write_char(']')
        }
        shape => write!(w, "Tensor(shape={shape:?})"),
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tensor, TensorError};

    #[test]
    fn display_scalar() {
        assert_eq!(Tensor::scalar(5.0).to_string(), "5.0");
        assert_eq!(Tensor::scalar(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn display_1d() {
        let t = Tensor::from_vec(vec![1.0, 2.5, 3.0]);
        assert_eq!(t.to_string(), "[1.0, 2.5, 3.0]");
        assert_eq!(Tensor::from_vec(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn display_2d() -> Result<(), TensorError> {
        let t = Tensor::from_rows(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
        ])?;
        assert_eq!(
            t.render()?,
            "[[1.0, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0]]"
        );
        assert_eq!(t.render()?, t.to_string());
        Ok(())
    }

    #[test]
    fn display_2d_empty_rows() -> Result<(), TensorError> {
        let t = Tensor::zeros(&[2, 0])?;
        assert_eq!(t.render()?, "[[], []]");
        assert_eq!(Tensor::from_rows(Vec::new())?.render()?, "[]");
        Ok(())
    }

    #[test]
    fn render_is_deterministic() -> Result<(), TensorError> {
        let t = Tensor::from_vec(vec![0.1, 1e-7, 3.4e38]);
        assert_eq!(t.render()?, t.render()?);
        Ok(())
    }

    #[test]
    fn render_rank3_unsupported() -> Result<(), TensorError> {
        let t = Tensor::zeros(&[1, 2, 3])?;
        assert_eq!(t.render(), Err(TensorError::unsupported_rank("render", 3)));
        assert_eq!(t.to_string(), "Tensor(shape=[1, 2, 3])");
        Ok(())
    }
}
