use super::*;
use itertools::iproduct;

// -------------------------------------
// Russel's Approximation
// -------------------------------------

/// Scores every unallocated cell as `cost - row_max - col_max`, where
/// the maxima are taken over unallocated cells, and allocates to the
/// most negative score.  Selection stops once all supply and demand is
/// shipped.
pub struct Russel<T> {
    row_max: Vec<T>,
    col_max: Vec<T>,
    scores: Matrix<T>,
}

impl<T> Russel<T>
where
    T: FloatT,
{
    pub fn new(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self {
            row_max: vec![T::zero(); m],
            col_max: vec![T::zero(); n],
            scores: Matrix::zeros(size),
        }
    }

    fn update_scores(&mut self, state: &TransportState<T>) {
        let (m, n) = (state.nrows(), state.ncols());

        self.row_max.fill(T::neg_infinity());
        self.col_max.fill(T::neg_infinity());

        for (r, c) in iproduct!(0..m, 0..n) {
            if state.is_live((r, c)) {
                let cost = state.costs[(r, c)];
                self.row_max[r] = T::max(self.row_max[r], cost);
                self.col_max[c] = T::max(self.col_max[c], cost);
            }
        }

        // allocated cells can never win the argmin
        for (r, c) in iproduct!(0..m, 0..n) {
            self.scores[(r, c)] = if state.is_live((r, c)) {
                state.costs[(r, c)] - self.row_max[r] - self.col_max[c]
            } else {
                T::infinity()
            };
        }
    }
}

impl<T> AllocationStrategy<T> for Russel<T>
where
    T: FloatT,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Russel
    }

    fn select_cell(&mut self, state: &TransportState<T>) -> Option<(usize, usize)> {
        if state.is_drained() {
            return None;
        }
        self.update_scores(state);
        let cell = self.scores.argmin()?;
        state.is_live(cell).then_some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TransportState<f64> {
        let supply = Vector::from([14., 20., 16.]);
        let demand = Vector::from([20., 15., 15.]);
        let costs = Matrix::from(&[[11., 13., 17.], [16., 18., 14.], [21., 24., 13.]]);
        TransportState::new(&supply, &demand, &costs)
    }

    #[test]
    fn test_russel_first_cell() {
        let state = state();
        let mut russel = Russel::new((3, 3));

        // (0,1) and (2,2) both score -28, row major order decides
        assert_eq!(russel.select_cell(&state), Some((0, 1)));
        assert_eq!(russel.scores[(0, 1)], -28.);
        assert_eq!(russel.scores[(2, 2)], -28.);
        assert_eq!(russel.row_max, vec![17., 18., 24.]);
        assert_eq!(russel.col_max, vec![21., 24., 17.]);
    }

    #[test]
    fn test_russel_skips_allocated_cells() {
        let mut state = state();
        state.allocate((0, 1));

        let mut russel = Russel::new((3, 3));
        assert_eq!(russel.select_cell(&state), Some((2, 2)));
        assert_eq!(russel.scores[(0, 1)], f64::INFINITY);

        // row 0 is empty but its other cells are still scored
        assert_eq!(russel.row_max[0], 17.);
        assert_eq!(russel.col_max[1], 24.);
        assert_eq!(russel.scores[(0, 0)], 11. - 17. - 21.);
    }

    #[test]
    fn test_russel_done() {
        let supply = Vector::from([3.]);
        let demand = Vector::from([3.]);
        let mut state = TransportState::new(&supply, &demand, &Matrix::from(&[[2.]]));
        state.allocate((0, 0));

        let mut russel = Russel::new((1, 1));
        assert_eq!(russel.select_cell(&state), None);
    }
}
