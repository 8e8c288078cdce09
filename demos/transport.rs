use transport_bfs::algebra::*;
use transport_bfs::solver::*;

fn main() {
    let supply = Vector::from([20., 30., 25.]);
    let demand = Vector::from([10., 25., 15., 25.]);
    let costs = Matrix::from(&[
        [8., 6., 10., 9.], //
        [9., 12., 13., 7.],
        [14., 9., 16., 5.],
    ]);

    let settings = DefaultSettings::default();

    let mut solver = match DefaultSolver::new(&supply, &demand, &costs, settings) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("{}\n", solver.data);

    for kind in [StrategyKind::NorthWest, StrategyKind::Vogel, StrategyKind::Russel] {
        let solution = solver.solve(kind);
        println!("{}", solution);
        println!("  total cost = {}", solution.total_cost);
    }
}
