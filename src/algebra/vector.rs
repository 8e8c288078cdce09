use crate::algebra::{FloatT, IndexError};
use std::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense vector of fixed length.
///
/// The length is set at construction and never changes.  `Vector` derefs
/// to a slice, so all [`VectorMath`](crate::algebra::VectorMath) operations
/// (`sum`, `argmin`, `argmax`, ...) and slice iteration apply directly.
/// Cloning produces an independent deep copy.
///
/// __Example usage__ :
/// ```
/// use transport_bfs::algebra::*;
/// let mut v = Vector::from(vec![3., 1., 1., 4.]);
/// assert_eq!(v.sum(), 9.);
/// assert_eq!(v.argmin(), Some(1));
/// v.set(3, 0.).unwrap();
/// assert!(v.get(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T> Vector<T>
where
    T: FloatT,
{
    /// vector of `n` zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }
}

impl<T> Vector<T>
where
    T: Copy,
{
    /// Takes ownership of `data` as the vector contents
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Checked element read
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        self.data.get(index).copied().ok_or(IndexError::Vector {
            index,
            len: self.data.len(),
        })
    }

    /// Checked element write
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(x) => {
                *x = value;
                Ok(())
            }
            None => Err(IndexError::Vector { index, len }),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    fn from(src: &[T]) -> Self {
        Self { data: src.to_vec() }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(src: [T; N]) -> Self {
        Self {
            data: Vec::from(src),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> std::fmt::Display for Vector<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
