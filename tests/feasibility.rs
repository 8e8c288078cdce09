use transport_bfs::{algebra::*, solver::*};

// properties that must hold for any balanced problem and any method

const STRATEGIES: [StrategyKind; 3] = [
    StrategyKind::NorthWest,
    StrategyKind::Vogel,
    StrategyKind::Russel,
];

// small deterministic generator so the problems are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

// integer valued data keeps all arithmetic exact
fn random_problem(rng: &mut Lcg, m: usize, n: usize) -> (Vector<f64>, Vector<f64>, Matrix<f64>) {
    let supply: Vector<f64> = (0..m).map(|_| (rng.next(50) + 1) as f64).collect();

    // spread the total supply over the destinations
    let mut demand = Vector::zeros(n);
    for _ in 0..supply.sum() as u64 {
        demand[rng.next(n as u64) as usize] += 1.;
    }

    let costs: Vec<f64> = (0..m * n).map(|_| rng.next(30) as f64).collect();
    let costs = Matrix::new_from_slice((m, n), &costs).unwrap();

    (supply, demand, costs)
}

fn check_feasible(x: &[f64], supply: &Vector<f64>, demand: &Vector<f64>) {
    let (m, n) = (supply.len(), demand.len());
    assert_eq!(x.len(), m * n);

    assert!(x.iter().all(|&v| v >= 0.));
    for i in 0..m {
        let rowsum: f64 = x[i * n..(i + 1) * n].iter().sum();
        assert_eq!(rowsum, supply[i]);
    }
    for j in 0..n {
        let colsum: f64 = x.iter().skip(j).step_by(n).sum();
        assert_eq!(colsum, demand[j]);
    }
}

#[test]
fn test_random_problems_feasible() {
    let mut rng = Lcg(42);

    for &(m, n) in &[(1, 1), (1, 5), (5, 1), (3, 4), (4, 3), (6, 6), (2, 9)] {
        for _ in 0..5 {
            let (supply, demand, costs) = random_problem(&mut rng, m, n);
            let mut solver =
                DefaultSolver::new(&supply, &demand, &costs, DefaultSettings::default()).unwrap();

            for kind in STRATEGIES {
                let solution = solver.solve(kind);
                assert_eq!(solution.status, SolverStatus::Solved);
                check_feasible(&solution.allocation, &supply, &demand);

                match kind {
                    StrategyKind::NorthWest => assert_eq!(solution.iterations as usize, m * n),
                    _ => assert!(solution.iterations as usize <= m * n),
                }

                // a basic solution ships through at most m + n - 1 cells
                let used = solution.allocation.iter().filter(|&&v| v > 0.).count();
                assert!(used <= m + n - 1);
            }
        }
    }
}

#[test]
fn test_fractional_quantities() {
    // partial differences like 0.9 - 0.8 are inexact in binary
    let cases = [
        (
            Vector::from([0.8, 0.8]),
            Vector::from([0.9, 0.7]),
            Matrix::from(&[[1., 2.], [3., 1.]]),
        ),
        (
            Vector::from([0.3, 1.7, 2.6]),
            Vector::from([1.25, 0.35, 3.0]),
            Matrix::from(&[[4., 1., 3.], [2., 5., 6.], [7., 2., 1.]]),
        ),
    ];

    for (supply, demand, costs) in cases {
        let n = demand.len();
        let mut solver =
            DefaultSolver::new(&supply, &demand, &costs, DefaultSettings::default()).unwrap();

        for kind in STRATEGIES {
            let solution = solver.solve(kind);
            assert_eq!(solution.status, SolverStatus::Solved);

            let x = &solution.allocation;
            assert!(x.iter().all(|&v| v >= 0.));
            for (i, &s) in supply.iter().enumerate() {
                let rowsum: f64 = x[i * n..(i + 1) * n].iter().sum();
                assert!((rowsum - s).abs() <= 1e-12);
            }
            for (j, &d) in demand.iter().enumerate() {
                let colsum: f64 = x.iter().skip(j).step_by(n).sum();
                assert!((colsum - d).abs() <= 1e-12);
            }
        }
    }
}

#[test]
fn test_zero_entries() {
    // empty sources and destinations are allowed
    let supply = Vector::from([0., 12., 8.]);
    let demand = Vector::from([5., 0., 15.]);
    let costs = Matrix::from(&[[1., 2., 3.], [4., 0., 6.], [0., 8., 9.]]);

    for kind in STRATEGIES {
        let x = solve(kind, &supply, &demand, &costs).unwrap();
        check_feasible(&x, &supply, &demand);
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    let mut rng = Lcg(7);
    let (supply, demand, costs) = random_problem(&mut rng, 4, 5);

    let mut solver =
        DefaultSolver::new(&supply, &demand, &costs, DefaultSettings::default()).unwrap();

    for kind in STRATEGIES {
        let first = solver.solve(kind);
        let _ = solver.solve(StrategyKind::NorthWest);
        let second = solver.solve(kind);

        assert_eq!(first.allocation, second.allocation);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.iterations, second.iterations);
    }

    // stored problem data is never touched by a solve
    assert_eq!(solver.data.supply(), &supply);
    assert_eq!(solver.data.demand(), &demand);
    assert_eq!(solver.data.costs(), &costs);
}

#[test]
fn test_balance_tolerance() {
    let supply = Vector::from([10., 20.]);
    let demand = Vector::from([15., 15.25]);
    let costs = Matrix::from(&[[1., 2.], [3., 4.]]);

    let settings = DefaultSettingsBuilder::default()
        .balance_tol(0.5)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(&supply, &demand, &costs, settings).unwrap();

    for kind in STRATEGIES {
        let solution = solver.solve(kind);
        assert_eq!(solution.status, SolverStatus::AlmostSolved);
        assert!(solution.status.is_solved());
        assert_eq!(solution.allocation.sum(), 30.);
    }
}

#[test]
fn test_f32_problem() {
    let supply = Vector::<f32>::from([3., 4.]);
    let demand = Vector::<f32>::from([2., 5.]);
    let costs = Matrix::<f32>::from(&[[1., 4.], [2., 1.]]);

    let x = solve(StrategyKind::Russel, &supply, &demand, &costs).unwrap();
    assert_eq!(x.sum(), 7.);
}
