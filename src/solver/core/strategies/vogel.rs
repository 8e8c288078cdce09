use super::*;

// -------------------------------------
// Vogel's Approximation
// -------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row(usize),
    Col(usize),
}

/// Picks the line with the largest penalty, i.e. the largest gap
/// between its two cheapest unallocated cells, then allocates to the
/// cheapest unallocated cell on that line.
///
/// A cell stays in the scans after its row or column has been emptied,
/// in which case it receives a zero allocation.  Selection stops once
/// all supply and demand is shipped.
///
/// Row penalties are scanned before column penalties and a later line
/// only replaces the current best on a strictly larger penalty.
pub struct Vogel<T> {
    singleton: SingletonPenalty,
    row_penalty: Vec<Option<T>>,
    col_penalty: Vec<Option<T>>,
}

impl<T> Vogel<T>
where
    T: FloatT,
{
    pub fn new(size: (usize, usize), singleton: SingletonPenalty) -> Self {
        let (m, n) = size;
        Self {
            singleton,
            row_penalty: vec![None; m],
            col_penalty: vec![None; n],
        }
    }

    fn update_penalties(&mut self, state: &TransportState<T>) {
        let (m, n) = (state.nrows(), state.ncols());

        for (r, p) in self.row_penalty.iter_mut().enumerate() {
            let live = (0..n)
                .filter(|&c| state.is_live((r, c)))
                .map(|c| state.costs[(r, c)]);
            *p = line_penalty(live, self.singleton);
        }

        for (c, p) in self.col_penalty.iter_mut().enumerate() {
            let live = (0..m)
                .filter(|&r| state.is_live((r, c)))
                .map(|r| state.costs[(r, c)]);
            *p = line_penalty(live, self.singleton);
        }
    }

    fn best_line(&self) -> Option<Line> {
        let rows = self.row_penalty.iter().enumerate().map(|(i, p)| (Line::Row(i), p));
        let cols = self.col_penalty.iter().enumerate().map(|(i, p)| (Line::Col(i), p));

        let mut best: Option<(Line, T)> = None;
        for (line, penalty) in rows.chain(cols) {
            let Some(penalty) = *penalty else { continue };
            if best.map_or(true, |(_, bp)| penalty > bp) {
                best = Some((line, penalty));
            }
        }
        best.map(|(line, _)| line)
    }
}

impl<T> AllocationStrategy<T> for Vogel<T>
where
    T: FloatT,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Vogel
    }

    fn select_cell(&mut self, state: &TransportState<T>) -> Option<(usize, usize)> {
        if state.is_drained() {
            return None;
        }
        self.update_penalties(state);

        let (m, n) = (state.nrows(), state.ncols());
        let cheapest = |best: Option<(usize, usize)>, cell: (usize, usize)| match best {
            Some(b) if state.costs[cell] >= state.costs[b] => Some(b),
            _ => Some(cell),
        };

        // strict comparison keeps the first of several equal minima
        match self.best_line()? {
            Line::Row(r) => (0..n)
                .map(|c| (r, c))
                .filter(|&cell| state.is_live(cell))
                .fold(None, cheapest),
            Line::Col(c) => (0..m)
                .map(|r| (r, c))
                .filter(|&cell| state.is_live(cell))
                .fold(None, cheapest),
        }
    }
}

/// Penalty of a line given the costs of its live cells.
///
/// `None` when every cell of the line has been allocated.  A repeated
/// minimum gives a penalty of zero.
pub(crate) fn line_penalty<T: FloatT>(
    live_costs: impl Iterator<Item = T>,
    singleton: SingletonPenalty,
) -> Option<T> {
    let mut count = 0;
    let mut lowest = T::infinity();
    let mut second = T::infinity();

    for cost in live_costs {
        count += 1;
        if cost < lowest {
            second = lowest;
            lowest = cost;
        } else if cost < second {
            second = cost;
        }
    }

    match count {
        0 => None,
        1 => match singleton {
            SingletonPenalty::Zero => Some(T::zero()),
            SingletonPenalty::Cost => Some(lowest),
        },
        _ => Some(second - lowest),
    }
}
