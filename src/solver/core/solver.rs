use std::io::Write;

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Every supply and demand was allocated exactly.
    Solved,
    /// Allocation finished with leftover supply or demand, but within
    /// the tolerated imbalance.
    AlmostSolved,
    /// The settings failed validation and nothing was allocated.
    InvalidSettings,
}

impl SolverStatus {
    /// true for `Solved` and `AlmostSolved`
    pub fn is_solved(&self) -> bool {
        matches!(*self, SolverStatus::Solved | SolverStatus::AlmostSolved)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub(crate) fn print_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "-------------------------------------------------------------")?;
    writeln!(
        out,
        "      transport-bfs v{}  -  initial feasible allocations    \n",
        crate::VERSION
    )?;
    writeln!(out, "     North-West Corner  /  Vogel  /  Russel approximations   ")?;
    writeln!(out, "-------------------------------------------------------------")?;
    Ok(())
}

#[test]
fn test_status_default() {
    assert_eq!(SolverStatus::default(), SolverStatus::Unsolved);
    assert!(!SolverStatus::Unsolved.is_solved());
    assert!(SolverStatus::AlmostSolved.is_solved());
    assert_eq!(SolverStatus::Solved.to_string(), "Solved");
}
