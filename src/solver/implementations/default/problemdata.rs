use super::*;
use crate::algebra::*;
use crate::solver::core::{ProblemError, Side};

// ---------------
// Data type for a balanced transportation problem
// ---------------

/// A validated transportation problem.
///
/// Holds the supply vector, the demand vector and the unit cost matrix.
/// The data is checked once on construction and never modified
/// afterwards; every solve works on its own copy.

#[derive(Debug, Clone)]
pub struct TransportationProblem<T = f64> {
    pub(crate) supply: Vector<T>,
    pub(crate) demand: Vector<T>,
    pub(crate) costs: Matrix<T>,
}

impl<T> TransportationProblem<T>
where
    T: FloatT,
{
    /// Check and store a problem.
    ///
    /// Rejects mismatched dimensions, empty problems, negative or
    /// non-finite entries, zero totals and any imbalance between total
    /// supply and total demand larger than `settings.balance_tol`.
    pub fn new(
        supply: &Vector<T>,
        demand: &Vector<T>,
        costs: &Matrix<T>,
        settings: &DefaultSettings<T>,
    ) -> Result<Self, ProblemError> {
        settings.validate()?;

        let (m, n) = costs.size();
        check_dimensions(supply, demand, costs)?;
        if m == 0 || n == 0 {
            return Err(ProblemError::EmptyProblem);
        }

        if !(supply.is_finite() && demand.is_finite() && costs.data().is_finite()) {
            return Err(ProblemError::NonFinite);
        }

        check_nonnegative(supply, Side::Supply)?;
        check_nonnegative(demand, Side::Demand)?;
        if let Some(lidx) = costs.data().iter().position(|&c| c < T::zero()) {
            return Err(ProblemError::NegativeCost {
                row: lidx / n,
                col: lidx % n,
            });
        }

        let total_supply = supply.sum();
        let total_demand = demand.sum();
        if total_supply == T::zero() {
            return Err(ProblemError::ZeroTotal(Side::Supply));
        }
        if total_demand == T::zero() {
            return Err(ProblemError::ZeroTotal(Side::Demand));
        }
        if (total_supply - total_demand).abs() > settings.balance_tol {
            return Err(ProblemError::Unbalanced {
                supply: total_supply.to_f64().unwrap_or(f64::NAN),
                demand: total_demand.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            supply: supply.clone(),
            demand: demand.clone(),
            costs: costs.clone(),
        })
    }

    pub fn supply(&self) -> &Vector<T> {
        &self.supply
    }

    pub fn demand(&self) -> &Vector<T> {
        &self.demand
    }

    pub fn costs(&self) -> &Matrix<T> {
        &self.costs
    }

    /// number of sources and destinations
    pub fn size(&self) -> (usize, usize) {
        self.costs.size()
    }
}

fn check_dimensions<T: FloatT>(
    supply: &Vector<T>,
    demand: &Vector<T>,
    costs: &Matrix<T>,
) -> Result<(), ProblemError> {
    let (m, n) = costs.size();

    // deserialized matrices skip the constructor checks
    if costs.data().len() != m * n {
        return Err(ProblemError::InvalidDimension {
            what: "costs",
            expected: m * n,
            found: costs.data().len(),
        });
    }
    if supply.len() != m {
        return Err(ProblemError::InvalidDimension {
            what: "supply",
            expected: m,
            found: supply.len(),
        });
    }
    if demand.len() != n {
        return Err(ProblemError::InvalidDimension {
            what: "demand",
            expected: n,
            found: demand.len(),
        });
    }
    Ok(())
}

fn check_nonnegative<T: FloatT>(v: &[T], side: Side) -> Result<(), ProblemError> {
    match v.iter().position(|&x| x < T::zero()) {
        Some(index) => Err(ProblemError::NegativeQuantity { side, index }),
        None => Ok(()),
    }
}

// Table with one row per source, a trailing supply column and a
// final demand row.
impl<T> std::fmt::Display for TransportationProblem<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (m, n) = self.size();
        let cell = |x: T| format!("{:>10}", format!("{}", x));

        let mut rule = String::from("+------------");
        rule.push_str(&"+-----------".repeat(n + 1));
        rule.push('+');

        writeln!(f, "{}", rule)?;
        write!(f, "| {:<10} ", "")?;
        for j in 0..n {
            write!(f, "|{:>10} ", format!("D{}", j + 1))?;
        }
        writeln!(f, "|{:>10} |", "Supply")?;
        writeln!(f, "{}", rule)?;

        for i in 0..m {
            write!(f, "| {:<10} ", format!("S{}", i + 1))?;
            for &c in self.costs.row_slice(i) {
                write!(f, "|{} ", cell(c))?;
            }
            writeln!(f, "|{} |", cell(self.supply[i]))?;
        }
        writeln!(f, "{}", rule)?;

        write!(f, "| {:<10} ", "Demand")?;
        for &d in self.demand.iter() {
            write!(f, "|{} ", cell(d))?;
        }
        writeln!(f, "|{:>10} |", "")?;
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(tol: f64) -> Result<TransportationProblem<f64>, ProblemError> {
        let settings = DefaultSettingsBuilder::default()
            .balance_tol(tol)
            .build()
            .unwrap();
        TransportationProblem::new(
            &Vector::from([10., 20.]),
            &Vector::from([15., 15.5]),
            &Matrix::from(&[[1., 2.], [3., 4.]]),
            &settings,
        )
    }

    #[test]
    fn test_balance_tolerance() {
        assert!(matches!(
            problem(0.),
            Err(ProblemError::Unbalanced { supply, demand }) if supply == 30. && demand == 30.5
        ));
        assert!(problem(0.5).is_ok());
    }

    #[test]
    fn test_table_display() {
        let p = problem(1.).unwrap();
        let table = p.to_string();
        let lines: Vec<&str> = table.lines().collect();

        // rule, header, rule, 2 sources, rule, demand, rule
        assert_eq!(lines.len(), 8);
        assert!(lines[1].contains("D1") && lines[1].contains("Supply"));
        assert!(lines[3].starts_with("| S1"));
        assert!(lines[3].trim_end().ends_with("10 |"));
        assert!(lines[6].starts_with("| Demand"));
        assert!(lines[6].contains("15.5"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
