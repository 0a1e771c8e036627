//! Scalar-or-array arguments and outer-product evaluation.
//!
//! Every public conversion takes two principal numeric arguments, each of
//! which may be a scalar or an array. [`broadcast`] evaluates a scalar
//! kernel over them:
//!
//! | first    | second   | result                                   |
//! |----------|----------|------------------------------------------|
//! | scalar   | scalar   | [`Values::Scalar`]                       |
//! | array(m) | scalar   | [`Values::Vector`] of length m           |
//! | scalar   | array(k) | [`Values::Vector`] of length k           |
//! | array(m) | array(k) | [`Values::Matrix`] of shape (k, m)       |
//!
//! In the matrix case the second argument varies along rows.

use nalgebra::{DMatrix, DVector};

use crate::error::Result;
use crate::types::SampleSize;

/// A scalar or array argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    /// A single value.
    Scalar(T),
    /// A sequence of values.
    Array(Vec<T>),
}

impl<T> Arg<T> {
    /// Whether the argument is array-like.
    pub fn is_array(&self) -> bool {
        matches!(self, Arg::Array(_))
    }

    /// Number of elements, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Arg::Scalar(_) => None,
            Arg::Array(values) => Some(values.len()),
        }
    }
}

macro_rules! impl_arg_from {
    ($target:ty; $($scalar:ty),*) => {
        $(
            impl From<$scalar> for Arg<$target> {
                fn from(value: $scalar) -> Self {
                    Arg::Scalar(value.into())
                }
            }

            impl From<Vec<$scalar>> for Arg<$target> {
                fn from(values: Vec<$scalar>) -> Self {
                    Arg::Array(values.into_iter().map(Into::into).collect())
                }
            }

            impl From<&[$scalar]> for Arg<$target> {
                fn from(values: &[$scalar]) -> Self {
                    Arg::Array(values.iter().map(|&v| v.into()).collect())
                }
            }

            impl From<&Vec<$scalar>> for Arg<$target> {
                fn from(values: &Vec<$scalar>) -> Self {
                    Arg::from(values.as_slice())
                }
            }

            impl<const N: usize> From<[$scalar; N]> for Arg<$target> {
                fn from(values: [$scalar; N]) -> Self {
                    Arg::Array(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

impl_arg_from!(f64; f64);
impl_arg_from!(SampleSize; usize, (usize, usize), SampleSize);

impl From<DVector<f64>> for Arg<f64> {
    fn from(values: DVector<f64>) -> Self {
        Arg::Array(values.as_slice().to_vec())
    }
}

impl From<&DVector<f64>> for Arg<f64> {
    fn from(values: &DVector<f64>) -> Self {
        Arg::Array(values.as_slice().to_vec())
    }
}

/// Result of a vectorized conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    /// Both arguments were scalars.
    Scalar(f64),
    /// Exactly one argument was an array.
    Vector(DVector<f64>),
    /// Both were arrays; rows follow the second argument.
    Matrix(DMatrix<f64>),
}

impl Values {
    /// Array shape: `[]`, `[k]` or `[rows, cols]`.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Values::Scalar(_) => Vec::new(),
            Values::Vector(v) => vec![v.len()],
            Values::Matrix(m) => vec![m.nrows(), m.ncols()],
        }
    }

    /// The plain number, if both arguments were scalars.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Values::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    /// The vector result, if exactly one argument was an array.
    pub fn as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            Values::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// The matrix result, if both arguments were arrays.
    pub fn as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            Values::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Iterate over all values (column-major for matrices).
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        match self {
            Values::Scalar(x) => std::slice::from_ref(x).iter(),
            Values::Vector(v) => v.as_slice().iter(),
            Values::Matrix(m) => m.as_slice().iter(),
        }
    }

    /// Copy all values into a flat vector (column-major for matrices).
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }
}

/// Evaluate `f` over the outer product of two scalar-or-array arguments.
///
/// Every element is computed by a separate call; the first error aborts
/// the whole evaluation.
pub fn broadcast<A, B, F>(a: &Arg<A>, b: &Arg<B>, mut f: F) -> Result<Values>
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> Result<f64>,
{
    Ok(match (a, b) {
        (Arg::Scalar(x), Arg::Scalar(y)) => Values::Scalar(f(*x, *y)?),
        (Arg::Array(xs), Arg::Scalar(y)) => {
            let values = xs.iter().map(|&x| f(x, *y)).collect::<Result<Vec<_>>>()?;
            Values::Vector(DVector::from_vec(values))
        }
        (Arg::Scalar(x), Arg::Array(ys)) => {
            let values = ys.iter().map(|&y| f(*x, y)).collect::<Result<Vec<_>>>()?;
            Values::Vector(DVector::from_vec(values))
        }
        (Arg::Array(xs), Arg::Array(ys)) => {
            let mut data = Vec::with_capacity(xs.len() * ys.len());
            for &y in ys {
                for &x in xs {
                    data.push(f(x, y)?);
                }
            }
            Values::Matrix(DMatrix::from_row_slice(ys.len(), xs.len(), &data))
        }
    })
}
