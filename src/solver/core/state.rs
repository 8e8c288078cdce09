use crate::algebra::*;

/// Mutable working state of a single solve.
///
/// Holds private copies of supply, demand and costs together with the
/// allocation produced so far.  Cells that have received an allocation
/// are flagged in `excluded`, so zero cost cells stay usable.
#[derive(Debug, Clone)]
pub struct TransportState<T: FloatT = f64> {
    pub supply: Vector<T>,
    pub demand: Vector<T>,
    pub costs: Matrix<T>,
    pub excluded: Vec<bool>,
    pub allocation: Vector<T>,
    /// supply and demand closer than this are treated as equal
    pub drain_tol: T,
}

impl<T> TransportState<T>
where
    T: FloatT,
{
    pub fn new(supply: &Vector<T>, demand: &Vector<T>, costs: &Matrix<T>) -> Self {
        let (m, n) = (costs.nrows(), costs.ncols());
        let total = T::max(supply.sum(), demand.sum());
        let scale = T::from_usize(m + n).unwrap_or_else(T::one);

        Self {
            supply: supply.clone(),
            demand: demand.clone(),
            costs: costs.clone(),
            excluded: vec![false; m * n],
            allocation: Vector::zeros(m * n),
            drain_tol: T::epsilon() * scale * total,
        }
    }

    pub fn nrows(&self) -> usize {
        self.costs.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.costs.ncols()
    }

    /// true if the cell has not received an allocation yet
    pub fn is_live(&self, (row, col): (usize, usize)) -> bool {
        !self.excluded[self.costs.index_linear((row, col))]
    }

    pub fn has_live_cell(&self) -> bool {
        self.excluded.iter().any(|&x| !x)
    }

    /// true once every supply and every demand is exactly zero
    pub fn is_drained(&self) -> bool {
        self.supply.iter().chain(self.demand.iter()).all(|&x| x == T::zero())
    }

    /// Ship as much as possible through `(row, col)`.
    ///
    /// The binding side is set to exactly zero and the other side is
    /// reduced by the shipped quantity, which is also returned.  When
    /// the two sides differ by no more than `drain_tol` both are zeroed,
    /// so rounding in earlier steps cannot leave a stray remainder.
    pub fn allocate(&mut self, (row, col): (usize, usize)) -> T {
        let s = self.supply[row];
        let d = self.demand[col];

        let qty = if (s - d).abs() <= self.drain_tol {
            self.supply[row] = T::zero();
            self.demand[col] = T::zero();
            T::min(s, d)
        } else if s < d {
            self.supply[row] = T::zero();
            self.demand[col] = d - s;
            s
        } else {
            self.demand[col] = T::zero();
            self.supply[row] = s - d;
            d
        };

        let lidx = self.costs.index_linear((row, col));
        self.excluded[lidx] = true;
        self.allocation[lidx] = qty;
        qty
    }

    /// largest absolute supply or demand left over
    pub fn residual(&self) -> T {
        let rs = self.supply.iter().fold(T::zero(), |acc, &x| T::max(acc, x.abs()));
        let rd = self.demand.iter().fold(T::zero(), |acc, &x| T::max(acc, x.abs()));
        T::max(rs, rd)
    }
}
