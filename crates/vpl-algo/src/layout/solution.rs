//! Layout solution data structures
//!
//! Defines the decoded output of a solve: the typed assignment grid with
//! its derived aggregates, the re-validation of that assignment against
//! the placement rules, and a taxiway island diagnostic.

use good_lp::Solution;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use vpl_core::{Catalogue, Cell, ComponentType};

use super::placement::PlacementVars;
use super::solver::LayoutError;
use super::LayoutProblem;

/// Tolerance for comparisons against solver-reported floating point values.
const TOLERANCE: f64 = 1e-6;

/// A decoded, validated facility layout.
///
/// Write-once: produced by the extractor after a successful solve and
/// immutable thereafter. Aggregates (counts, cost) are recomputed from the
/// assignment on demand rather than trusted from solver bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    rows: usize,
    cols: usize,
    /// Row-major cell assignment; `None` is an empty cell.
    cells: Vec<Option<ComponentType>>,
    catalogue: Catalogue,
    budget_limit: f64,
    throughput: f64,
    solve_time: Duration,
}

impl Layout {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn component_at(&self, cell: Cell) -> Option<ComponentType> {
        self.cells[cell.row * self.cols + cell.col]
    }

    /// Number of placed units of one component type.
    pub fn count(&self, ty: ComponentType) -> usize {
        self.cells.iter().filter(|c| **c == Some(ty)).count()
    }

    pub fn total_placements(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Total placement cost, recomputed from the assignment.
    pub fn budget_used(&self) -> f64 {
        ComponentType::ALL
            .into_iter()
            .map(|ty| self.catalogue.unit_cost(ty) * self.count(ty) as f64)
            .sum()
    }

    pub fn budget_limit(&self) -> f64 {
        self.budget_limit
    }

    /// Achieved throughput, read from the objective variable.
    pub fn throughput(&self) -> f64 {
        self.throughput
    }

    pub fn solve_time(&self) -> Duration {
        self.solve_time
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(4);
        if cell.row > 0 {
            neighbors.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.rows {
            neighbors.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            neighbors.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.cols {
            neighbors.push(Cell::new(cell.row, cell.col + 1));
        }
        neighbors
    }

    /// Connected components of the placed taxiway subgraph.
    ///
    /// Diagnostic only; the MILP flow certificate is the authority on
    /// connectivity. Zero when no taxiways are placed.
    pub fn taxiway_islands(&self) -> usize {
        let mut graph: UnGraph<Cell, ()> = UnGraph::new_undirected();
        let mut nodes: HashMap<Cell, NodeIndex> = HashMap::new();
        for cell in self.all_cells() {
            if self.component_at(cell) == Some(ComponentType::Taxiway) {
                nodes.insert(cell, graph.add_node(cell));
            }
        }
        for (cell, index) in &nodes {
            for neighbor in self.neighbors(*cell) {
                if let Some(other) = nodes.get(&neighbor) {
                    if index.index() < other.index() {
                        graph.add_edge(*index, *other, ());
                    }
                }
            }
        }
        connected_components(&graph)
    }

    /// Re-validate the assignment against the placement rules.
    ///
    /// Exclusivity holds structurally (one `Option` per cell); the
    /// remaining laws are checked directly on the decoded grid.
    pub fn validate(&self, problem: &LayoutProblem) -> Result<(), LayoutError> {
        // Budget law.
        let used = self.budget_used();
        if used > problem.budget + TOLERANCE {
            return Err(LayoutError::Validation(format!(
                "placement cost {} exceeds budget {}",
                used, problem.budget
            )));
        }

        let pads: Vec<Cell> = self
            .all_cells()
            .filter(|c| self.component_at(*c) == Some(ComponentType::Pad))
            .collect();

        for cell in self.all_cells() {
            let Some(ty) = self.component_at(cell) else {
                continue;
            };

            // Adjacency law.
            if ty.needs_taxiway_access() {
                let has_access = self
                    .neighbors(cell)
                    .into_iter()
                    .any(|n| self.component_at(n) == Some(ComponentType::Taxiway));
                if !has_access {
                    return Err(LayoutError::Validation(format!(
                        "{} at {} has no adjacent taxiway",
                        ty, cell
                    )));
                }
            }

            // Boundary law.
            if ty == ComponentType::Pad && !problem.grid.is_boundary(cell) {
                return Err(LayoutError::Validation(format!(
                    "pad at interior cell {}",
                    cell
                )));
            }
        }

        // Spacing law.
        for (i, a) in pads.iter().enumerate() {
            for b in pads.iter().skip(i + 1) {
                if a.manhattan(*b) <= 2 {
                    return Err(LayoutError::Validation(format!(
                        "pads at {} and {} are within spacing distance",
                        a, b
                    )));
                }
            }
        }

        // Throughput bound law.
        let pad_bound =
            problem.catalogue.unit_capacity(ComponentType::Pad) / 2.0 * pads.len() as f64;
        let stand_bound = problem.catalogue.unit_capacity(ComponentType::Stand)
            * self.count(ComponentType::Stand) as f64;
        if self.throughput > pad_bound + TOLERANCE || self.throughput > stand_bound + TOLERANCE {
            return Err(LayoutError::Validation(format!(
                "throughput {} exceeds capacity bounds (pads {}, stands {})",
                self.throughput, pad_bound, stand_bound
            )));
        }

        Ok(())
    }

    /// Format a human-readable summary: aggregates plus the grid rendering.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Vertiport Layout Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Grid: {}x{}\n", self.rows, self.cols));
        s.push_str(&format!("Throughput: {} operations\n", self.throughput));
        s.push_str(&format!(
            "Budget Used: {} of {}\n",
            self.budget_used(),
            self.budget_limit
        ));
        for ty in ComponentType::ALL {
            s.push_str(&format!("  {:<8}: {}\n", ty.label(), self.count(ty)));
        }
        s.push_str(&format!("Taxiway Islands: {}\n", self.taxiway_islands()));
        s.push_str(&format!("Solve Time: {:.2?}\n", self.solve_time));
        s.push_str("\nLayout:\n");
        for row in 0..self.rows {
            let line: Vec<&str> = (0..self.cols)
                .map(|col| {
                    self.component_at(Cell::new(row, col))
                        .map(|ty| ty.short())
                        .unwrap_or("-")
                })
                .collect();
            s.push_str(&format!("  {}\n", line.join(" ")));
        }
        s
    }
}

/// Decode a solved assignment into a validated [`Layout`].
///
/// Binary placements are read at a 0.5 threshold; aggregates are recomputed
/// from the decoded grid, and the layout is re-validated before it is
/// returned.
pub(crate) fn extract<S: Solution>(
    assignment: &S,
    placement: &PlacementVars,
    problem: &LayoutProblem,
    solve_time: Duration,
) -> Result<Layout, LayoutError> {
    let grid = &problem.grid;
    let mut cells: Vec<Option<ComponentType>> = vec![None; grid.num_cells()];

    for (index, cell) in grid.cells().enumerate() {
        for ty in ComponentType::ALL {
            if assignment.value(placement.place(cell, ty)) > 0.5 {
                if cells[index].is_some() {
                    return Err(LayoutError::Validation(format!(
                        "cell {} assigned more than one component",
                        cell
                    )));
                }
                cells[index] = Some(ty);
            }
        }
    }

    let layout = Layout {
        rows: grid.rows(),
        cols: grid.cols(),
        cells,
        catalogue: problem.catalogue.clone(),
        budget_limit: problem.budget,
        throughput: assignment.value(placement.throughput()),
        solve_time,
    };
    layout.validate(problem)?;
    Ok(layout)
}
