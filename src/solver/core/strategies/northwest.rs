use super::*;
use std::marker::PhantomData;

// -------------------------------------
// North-West Corner
// -------------------------------------

/// Visits every cell exactly once in row major order, ignoring costs.
///
/// Cells are returned whether or not their row or column has been
/// exhausted, so an `m x n` problem always takes `m * n` steps and
/// exhausted cells are recorded as zero allocations.
pub struct NorthWest<T> {
    next: usize,
    size: (usize, usize),
    phantom: PhantomData<T>,
}

impl<T> NorthWest<T>
where
    T: FloatT,
{
    pub fn new(size: (usize, usize)) -> Self {
        Self {
            next: 0,
            size,
            phantom: PhantomData,
        }
    }
}

impl<T> AllocationStrategy<T> for NorthWest<T>
where
    T: FloatT,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::NorthWest
    }

    fn select_cell(&mut self, _state: &TransportState<T>) -> Option<(usize, usize)> {
        let (m, n) = self.size;
        if self.next >= m * n {
            return None;
        }
        let cell = (self.next / n, self.next % n);
        self.next += 1;
        Some(cell)
    }
}

#[test]
fn test_northwest_scan_order() {
    let supply = Vector::from([1., 1.]);
    let demand = Vector::from([1., 0.5, 0.5]);
    let state = TransportState::new(&supply, &demand, &Matrix::zeros((2, 3)));

    let mut nw = NorthWest::<f64>::new((2, 3));
    let cells: Vec<_> = std::iter::from_fn(|| nw.select_cell(&state)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(nw.select_cell(&state), None);
}
