// All internal vector math for the allocation strategies goes
// through this trait, implemented generically on slices of
// FloatT.  Vector<T> derefs to a slice and picks it up for free.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Minimum value in vector.  Infinity if empty.
    fn minimum(&self) -> Self::T;

    /// Maximum value in vector.  -Infinity if empty.
    fn maximum(&self) -> Self::T;

    /// Index of the first occurrence of the minimum value.
    ///
    /// Returns `None` for an empty vector.  NaN entries are never selected.
    fn argmin(&self) -> Option<usize>;

    /// Index of the first occurrence of the maximum value.
    ///
    /// Returns `None` for an empty vector.  NaN entries are never selected.
    fn argmax(&self) -> Option<usize>;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;
}

