use crate::{
    algebra::*,
    solver::{core::SolverJSONReadWrite, DefaultSettings, DefaultSolver},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// A struct very similar to the problem data, but holding
// the settings alongside the user supplied vectors.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub supply: Vector<T>,
    pub demand: Vector<T>,
    pub costs: Matrix<T>,
    pub settings: DefaultSettings<T>,
}

impl<T> SolverJSONReadWrite for DefaultSolver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    type SE = DefaultSettings<T>;

    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonProblemData {
            supply: self.data.supply.clone(),
            demand: self.data.demand.clone(),
            costs: self.data.costs.clone(),
            settings: self.settings.clone(),
        };

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn load_from_file(
        file: &mut File,
        settings: Option<DefaultSettings<T>>,
    ) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // create a solver object, checking the data again
        let settings = settings.unwrap_or(json_data.settings);
        Self::new(
            &json_data.supply,
            &json_data.demand,
            &json_data.costs,
            settings,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use crate::solver::{SolverStatus, StrategyKind};
    use std::io::{Seek, SeekFrom};

    let supply = Vector::from([14., 20., 16.]);
    let demand = Vector::from([20., 15., 15.]);
    let costs = Matrix::from(&[[11., 13., 17.], [16., 18., 14.], [21., 24., 13.]]);

    let settings = crate::solver::DefaultSettingsBuilder::default()
        .vogel_singleton_penalty("cost".to_string())
        .build()
        .unwrap();

    let mut solver = DefaultSolver::<f64>::new(&supply, &demand, &costs, settings).unwrap();
    let sol1 = solver.solve(StrategyKind::Vogel);

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = DefaultSolver::<f64>::load_from_file(&mut file, None).unwrap();
    assert_eq!(solver2.settings, solver.settings);
    let sol2 = solver2.solve(StrategyKind::Vogel);

    assert_eq!(sol2.status, SolverStatus::Solved);
    assert_eq!(sol1.allocation, sol2.allocation);
    assert_eq!(sol1.total_cost, sol2.total_cost);
}
