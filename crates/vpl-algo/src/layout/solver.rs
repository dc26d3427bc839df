//! Layout MILP solver
//!
//! Builds the placement and connectivity formulations against a single
//! model instance, invokes the MILP backend once and maps the backend
//! result onto the terminal status surface. No retry and no constraint
//! relaxation happen here; an infeasible configuration is the caller's
//! problem to change.

use good_lp::solvers::highs::highs;
use good_lp::{variables, Expression, ResolutionError, SolverModel};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use thiserror::Error;
use vpl_core::VplError;

use super::{connectivity, placement, solution, Layout, LayoutProblem};

/// Layout solver configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutSolverConfig {
    /// Wall-clock budget forwarded to the MILP backend, in seconds.
    /// `None` lets the solve run to completion.
    pub time_limit: Option<f64>,
}

/// Layout solver errors.
///
/// These are failures of the run itself, distinct from the terminal solve
/// statuses carried by [`SolveOutcome`].
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Invalid configuration, rejected before any model is built.
    #[error("configuration error: {0}")]
    Config(String),
    /// The extracted layout failed re-validation against the constraints.
    #[error("solution validation failed: {0}")]
    Validation(String),
    /// The backend failed in a way that is not a terminal solve status.
    #[error("solver failure: {0}")]
    Solver(String),
}

impl From<VplError> for LayoutError {
    fn from(err: VplError) -> Self {
        match err {
            VplError::Config(msg) => LayoutError::Config(msg),
            VplError::Validation(msg) => LayoutError::Validation(msg),
            other => LayoutError::Solver(other.to_string()),
        }
    }
}

impl From<LayoutError> for VplError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Config(msg) => VplError::Config(msg),
            LayoutError::Validation(msg) => VplError::Validation(msg),
            LayoutError::Solver(msg) => VplError::Solver(msg),
        }
    }
}

/// Terminal status of a single solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Globally optimal layout found.
    Optimal,
    /// The constraint system admits no assignment.
    Infeasible,
    /// The backend reported an unbounded objective.
    Unbounded,
    /// The wall-clock budget elapsed before an optimal solve.
    Timeout,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Unbounded => write!(f, "unbounded"),
            SolveStatus::Timeout => write!(f, "timeout"),
        }
    }
}

/// Result of a single solve call: the sole contract handed to report and
/// CLI layers. Only an optimal solve carries a layout.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal(Layout),
    Infeasible,
    Unbounded,
    Timeout,
}

impl SolveOutcome {
    pub fn status(&self) -> SolveStatus {
        match self {
            SolveOutcome::Optimal(_) => SolveStatus::Optimal,
            SolveOutcome::Infeasible => SolveStatus::Infeasible,
            SolveOutcome::Unbounded => SolveStatus::Unbounded,
            SolveOutcome::Timeout => SolveStatus::Timeout,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            SolveOutcome::Optimal(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn into_layout(self) -> Option<Layout> {
        match self {
            SolveOutcome::Optimal(layout) => Some(layout),
            _ => None,
        }
    }
}

/// Solve the layout problem.
///
/// Builds one model instance, solves it exactly once with the HiGHS MILP
/// backend and decodes the assignment into a validated [`Layout`].
///
/// # Example
///
/// ```no_run
/// use vpl_algo::layout::{solve_layout, LayoutProblemBuilder, LayoutSolverConfig};
///
/// let problem = LayoutProblemBuilder::new(5, 8).build()?;
/// let outcome = solve_layout(&problem, &LayoutSolverConfig::default())?;
/// if let Some(layout) = outcome.layout() {
///     println!("{}", layout.summary());
/// }
/// # Ok::<(), vpl_algo::layout::LayoutError>(())
/// ```
pub fn solve_layout(
    problem: &LayoutProblem,
    config: &LayoutSolverConfig,
) -> Result<SolveOutcome, LayoutError> {
    let start = Instant::now();

    let mut vars = variables!();
    let mut constraints = Vec::new();
    let placement = placement::build(problem, &mut vars, &mut constraints);
    connectivity::build(problem, &mut vars, &mut constraints, &placement);

    let objective = Expression::from(placement.throughput());
    let mut model = vars.maximise(objective).using(highs);
    if let Some(limit) = config.time_limit {
        model = model.set_time_limit(limit);
    }
    for constraint in constraints {
        model = model.with(constraint);
    }

    match model.solve() {
        Ok(assignment) => {
            let layout = solution::extract(&assignment, &placement, problem, start.elapsed())?;
            Ok(SolveOutcome::Optimal(layout))
        }
        Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
        Err(ResolutionError::Unbounded) => Ok(SolveOutcome::Unbounded),
        Err(other) => {
            let budget_spent = config
                .time_limit
                .is_some_and(|limit| start.elapsed().as_secs_f64() >= limit);
            if budget_spent {
                Ok(SolveOutcome::Timeout)
            } else {
                Err(LayoutError::Solver(format!("{:?}", other)))
            }
        }
    }
}
