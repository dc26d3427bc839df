//! Connectivity formulation
//!
//! Registers the feasible-flow certificate over the taxiway subgraph: a
//! fixed source cell, one directed flow variable per ordered pair of
//! adjacent cells, and per-cell balance slack gated by a reachability flag.
//! Flow may only leave cells holding a taxiway, so a layout whose network
//! splits into islands admits no consistent flow.

use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};
use std::collections::HashMap;
use vpl_core::{Cell, ComponentType};

use super::placement::PlacementVars;
use super::LayoutProblem;

/// Build connectivity variables and constraints into the shared model.
///
/// The variables are internal to the certificate; nothing is extracted from
/// them after the solve.
pub(crate) fn build(
    problem: &LayoutProblem,
    vars: &mut ProblemVariables,
    constraints: &mut Vec<Constraint>,
    placement: &PlacementVars,
) {
    let grid = &problem.grid;
    let big_m = problem.big_m;

    // Reachability flag per cell; the source corner is reachable by fiat.
    let mut reachable: HashMap<Cell, Variable> = HashMap::new();
    for cell in grid.cells() {
        reachable.insert(cell, vars.add(variable().binary()));
    }
    let source = reachable[&grid.source()];
    constraints.push(constraint!(source == 1.0));

    // One non-negative flow variable per ordered pair of adjacent cells; the
    // signed flow across an undirected edge is the difference of the pair.
    // Flow only leaves cells that hold a taxiway.
    let mut flow: HashMap<(Cell, Cell), Variable> = HashMap::new();
    for cell in grid.cells() {
        for neighbor in grid.neighbors(cell) {
            let edge = vars.add(variable().min(0.0).max(big_m));
            let taxiway_here = placement.place(cell, ComponentType::Taxiway);
            constraints.push(constraint!(edge <= big_m * taxiway_here));
            flow.insert((cell, neighbor), edge);
        }
    }

    // Net balance per cell, free within ±M only where the cell is flagged
    // reachable; unreachable cells must balance to exactly zero.
    for cell in grid.cells() {
        let balance = vars.add(variable().min(-big_m).max(big_m));
        let mut outflow = Expression::from(0.0);
        let mut inflow = Expression::from(0.0);
        for neighbor in grid.neighbors(cell) {
            outflow += flow[&(cell, neighbor)];
            inflow += flow[&(neighbor, cell)];
        }
        let reach = reachable[&cell];
        constraints.push(constraint!(balance == outflow - inflow));
        constraints.push(constraint!(balance <= big_m * reach));
        constraints.push(constraint!(balance >= -big_m * reach));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{placement, LayoutProblemBuilder};
    use good_lp::variables;

    fn constraint_count(rows: usize, cols: usize) -> usize {
        let problem = LayoutProblemBuilder::new(rows, cols).build().unwrap();
        let mut vars = variables!();
        let mut constraints = Vec::new();
        let placement = placement::build(&problem, &mut vars, &mut constraints);
        let before = constraints.len();
        build(&problem, &mut vars, &mut constraints, &placement);
        constraints.len() - before
    }

    #[test]
    fn test_connectivity_constraint_counts() {
        // 2x2: 8 directed edges -> 8 gates, 1 source pin, 4 cells x 3
        // balance constraints.
        assert_eq!(constraint_count(2, 2), 1 + 8 + 12);
    }

    #[test]
    fn test_degenerate_grid_has_no_edges() {
        // 1x1: no edges, just the source pin and one balance triple.
        assert_eq!(constraint_count(1, 1), 1 + 0 + 3);
    }
}
