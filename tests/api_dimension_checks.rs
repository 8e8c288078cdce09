#![allow(clippy::type_complexity)]
use transport_bfs::{algebra::*, solver::*};

// a collection of tests to ensure that bad problem data
// is rejected before any allocation is attempted

fn api_check_data() -> (Vector<f64>, Vector<f64>, Matrix<f64>) {
    let supply = Vector::from([20., 30., 25.]);
    let demand = Vector::from([10., 25., 15., 25.]);
    let costs = Matrix::from(&[
        [8., 6., 10., 9.], //
        [9., 12., 13., 7.],
        [14., 9., 16., 5.],
    ]);
    (supply, demand, costs)
}

fn check(supply: &Vector<f64>, demand: &Vector<f64>, costs: &Matrix<f64>) -> Option<ProblemError> {
    DefaultSolver::new(supply, demand, costs, DefaultSettings::default()).err()
}

#[test]
fn api_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // piece of this data

    let (supply, demand, costs) = api_check_data();
    assert_eq!(check(&supply, &demand, &costs), None);
}

#[test]
fn api_check_bad_supply_len() {
    let (_, demand, costs) = api_check_data();
    let supply = Vector::from([40., 35.]);

    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::InvalidDimension {
            what: "supply",
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn api_check_bad_demand_len() {
    let (supply, _, costs) = api_check_data();
    let demand = Vector::from([10., 25., 15., 20., 5.]);

    assert!(matches!(
        check(&supply, &demand, &costs),
        Some(ProblemError::InvalidDimension { what: "demand", expected: 4, found: 5 })
    ));
}

#[test]
fn api_check_empty() {
    let supply = Vector::<f64>::from(vec![]);
    let demand = Vector::from([1., 2., 3.]);
    let costs = Matrix::zeros((0, 3));

    assert_eq!(check(&supply, &demand, &costs), Some(ProblemError::EmptyProblem));
}

#[test]
fn api_check_nonfinite() {
    let (supply, demand, mut costs) = api_check_data();
    costs[(1, 2)] = f64::NAN;
    assert_eq!(check(&supply, &demand, &costs), Some(ProblemError::NonFinite));

    let (mut supply, demand, costs) = api_check_data();
    supply[0] = f64::INFINITY;
    assert_eq!(check(&supply, &demand, &costs), Some(ProblemError::NonFinite));
}

#[test]
fn api_check_negative_quantity() {
    let (_, demand, costs) = api_check_data();
    let supply = Vector::from([-5., 55., 25.]);
    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::NegativeQuantity {
            side: Side::Supply,
            index: 0
        })
    );

    let (supply, _, costs) = api_check_data();
    let demand = Vector::from([10., 30., -5., 40.]);
    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::NegativeQuantity {
            side: Side::Demand,
            index: 2
        })
    );
}

#[test]
fn api_check_negative_cost() {
    let (supply, demand, mut costs) = api_check_data();
    costs[(2, 1)] = -1.;
    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::NegativeCost { row: 2, col: 1 })
    );
}

#[test]
fn api_check_zero_total() {
    let costs = Matrix::from(&[[1., 2.], [3., 4.]]);

    let supply = Vector::from([0., 0.]);
    let demand = Vector::from([0., 0.]);
    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::ZeroTotal(Side::Supply))
    );

    let supply = Vector::from([1., 0.]);
    assert_eq!(
        check(&supply, &demand, &costs),
        Some(ProblemError::ZeroTotal(Side::Demand))
    );
}

#[test]
fn api_check_unbalanced() {
    let supply = Vector::from([50., 50.]);
    let demand = Vector::from([30., 30., 30.]);
    let costs = Matrix::from(&[[4., 8., 8.], [16., 24., 16.]]);

    let err = solve(StrategyKind::Vogel, &supply, &demand, &costs).unwrap_err();
    assert_eq!(
        err,
        ProblemError::Unbalanced {
            supply: 100.,
            demand: 90.
        }
    );
    assert_eq!(
        err.to_string(),
        "The problem is not balanced (supply 100, demand 90)"
    );
}

#[test]
fn api_check_bad_settings() {
    let (supply, demand, costs) = api_check_data();

    let settings = DefaultSettings {
        vogel_singleton_penalty: "max".to_string(),
        ..DefaultSettings::default()
    };

    let err = DefaultSolver::new(&supply, &demand, &costs, settings).err();
    assert_eq!(
        err,
        Some(ProblemError::Settings(SettingsError::BadFieldValue(
            "vogel_singleton_penalty"
        )))
    );
}

#[test]
fn api_check_settings_changed_after_new() {
    let (supply, demand, costs) = api_check_data();

    let mut solver =
        DefaultSolver::new(&supply, &demand, &costs, DefaultSettings::default()).unwrap();
    solver.settings.vogel_singleton_penalty = "bogus".to_string();

    for kind in [StrategyKind::NorthWest, StrategyKind::Vogel, StrategyKind::Russel] {
        let solution = solver.solve(kind);
        assert_eq!(solution.status, SolverStatus::InvalidSettings);
        assert!(!solution.status.is_solved());
        assert_eq!(solution.iterations, 0);
        assert!(solution.allocation.iter().all(|&x| x == 0.));
    }

    // fixing the field makes the solver usable again
    solver.settings.vogel_singleton_penalty = "cost".to_string();
    assert_eq!(solver.solve(StrategyKind::Vogel).status, SolverStatus::Solved);
}

#[test]
fn api_check_ragged_costs() {
    let rows = vec![vec![1., 2.], vec![3.]];
    assert_eq!(
        Matrix::<f64>::from_rows(&rows),
        Err(MatrixShapeError::IncompatibleDimension)
    );
}
