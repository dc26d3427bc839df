//! Layout problem data structures
//!
//! Defines the input data for vertiport layout problems.

use super::solver::LayoutError;
use vpl_core::{Catalogue, ComponentSpec, ComponentType, GridTopology};

/// Layout problem definition combining grid, catalogue and planning limits.
///
/// Each run constructs its own problem, solves it once and discards it;
/// there is no shared model state between runs.
#[derive(Debug, Clone)]
pub struct LayoutProblem {
    /// The cell universe the facility is placed on.
    pub grid: GridTopology,
    /// Component cost/capacity attributes.
    pub catalogue: Catalogue,
    /// Total placement budget.
    pub budget: f64,
    /// Big-M value for disjunctive constraints (pad spacing, flow gating).
    /// Must dominate the largest flow magnitude a cell could carry.
    pub big_m: f64,
}

impl LayoutProblem {
    /// Largest total cost any assignment could incur (every cell holding the
    /// most expensive component).
    pub fn max_fill_cost(&self) -> f64 {
        let max_cost = ComponentType::ALL
            .iter()
            .map(|ty| self.catalogue.unit_cost(*ty))
            .fold(0.0_f64, f64::max);
        max_cost * self.grid.num_cells() as f64
    }
}

/// Builder for layout problems.
///
/// Starts from the reference facility configuration and validates the final
/// problem on `build`; no partial problem escapes a failed validation.
#[derive(Debug, Clone)]
pub struct LayoutProblemBuilder {
    rows: usize,
    cols: usize,
    pad: ComponentSpec,
    stand: ComponentSpec,
    taxiway_cost: f64,
    terminal_cost: f64,
    budget: f64,
    big_m: f64,
}

impl LayoutProblemBuilder {
    /// Start building a problem for a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pad: ComponentSpec::new(40_000.0, 30.0),
            stand: ComponentSpec::new(46_000.0, 6.0),
            taxiway_cost: 40_000.0,
            terminal_cost: 300_000.0,
            budget: 2_000_000.0,
            big_m: 1_000.0,
        }
    }

    /// Set pad unit cost and nominal capacity.
    pub fn pad(mut self, unit_cost: f64, unit_capacity: f64) -> Self {
        self.pad = ComponentSpec::new(unit_cost, unit_capacity);
        self
    }

    /// Set stand unit cost and capacity.
    pub fn stand(mut self, unit_cost: f64, unit_capacity: f64) -> Self {
        self.stand = ComponentSpec::new(unit_cost, unit_capacity);
        self
    }

    pub fn taxiway_cost(mut self, unit_cost: f64) -> Self {
        self.taxiway_cost = unit_cost;
        self
    }

    pub fn terminal_cost(mut self, unit_cost: f64) -> Self {
        self.terminal_cost = unit_cost;
        self
    }

    /// Set the total placement budget.
    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Set the Big-M value for disjunctive constraints.
    pub fn big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    /// Validate the configuration and build the problem.
    pub fn build(self) -> Result<LayoutProblem, LayoutError> {
        let grid = GridTopology::new(self.rows, self.cols)?;
        let catalogue = Catalogue::new(
            self.pad,
            self.stand,
            self.taxiway_cost,
            self.terminal_cost,
        )?;
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(LayoutError::Config(format!(
                "budget must be positive, got {}",
                self.budget
            )));
        }
        // M must never bind below the true bound for this grid: a single
        // source distributing one flow unit to every cell needs a per-cell
        // magnitude of up to num_cells.
        let required_m = grid.num_cells() as f64;
        if !self.big_m.is_finite() || self.big_m < required_m {
            return Err(LayoutError::Config(format!(
                "big-M {} is below the required bound {} for a {}x{} grid",
                self.big_m,
                required_m,
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(LayoutProblem {
            grid,
            catalogue,
            budget: self.budget,
            big_m: self.big_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let problem = LayoutProblemBuilder::new(5, 8).build().unwrap();
        assert_eq!(problem.grid.num_cells(), 40);
        assert_eq!(problem.catalogue.unit_cost(ComponentType::Pad), 40_000.0);
        assert_eq!(problem.catalogue.unit_capacity(ComponentType::Pad), 30.0);
        assert_eq!(problem.budget, 2_000_000.0);
        assert_eq!(problem.big_m, 1_000.0);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = LayoutProblemBuilder::new(0, 8).build().unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        let err = LayoutProblemBuilder::new(5, 8)
            .budget(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));

        let err = LayoutProblemBuilder::new(5, 8)
            .budget(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_rejects_undersized_big_m() {
        // 40x40 = 1600 cells; the default M of 1000 would silently tighten
        // the flow balance window.
        let err = LayoutProblemBuilder::new(40, 40).build().unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));

        assert!(LayoutProblemBuilder::new(40, 40)
            .big_m(2_000.0)
            .build()
            .is_ok());
    }

    #[test]
    fn test_max_fill_cost() {
        let problem = LayoutProblemBuilder::new(2, 2).build().unwrap();
        assert_eq!(problem.max_fill_cost(), 4.0 * 300_000.0);
    }
}
