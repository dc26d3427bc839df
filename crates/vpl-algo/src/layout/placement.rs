//! Placement formulation
//!
//! Introduces the binary placement decisions and the throughput variable,
//! and registers the placement constraints: per-cell exclusivity, budget,
//! throughput coupling, taxiway adjacency, pad boundary siting and pad
//! spacing.

use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};
use std::collections::HashMap;
use vpl_core::{Cell, ComponentType};

use super::LayoutProblem;

/// Decision variables introduced by the placement formulation.
pub(crate) struct PlacementVars {
    place: HashMap<(Cell, ComponentType), Variable>,
    throughput: Variable,
}

impl PlacementVars {
    /// The binary placement decision for `ty` on `cell`.
    pub(crate) fn place(&self, cell: Cell, ty: ComponentType) -> Variable {
        self.place[&(cell, ty)]
    }

    /// The continuous throughput variable, also the objective.
    pub(crate) fn throughput(&self) -> Variable {
        self.throughput
    }

    /// Sum of placement decisions of one type across the whole grid.
    fn total_of(&self, problem: &LayoutProblem, ty: ComponentType) -> Expression {
        problem
            .grid
            .cells()
            .map(|cell| self.place(cell, ty))
            .sum()
    }
}

/// Build placement variables and constraints into the shared model.
pub(crate) fn build(
    problem: &LayoutProblem,
    vars: &mut ProblemVariables,
    constraints: &mut Vec<Constraint>,
) -> PlacementVars {
    let grid = &problem.grid;
    let catalogue = &problem.catalogue;
    let big_m = problem.big_m;

    let mut place: HashMap<(Cell, ComponentType), Variable> = HashMap::new();
    for cell in grid.cells() {
        for ty in ComponentType::ALL {
            place.insert((cell, ty), vars.add(variable().binary()));
        }
    }
    let throughput = vars.add(variable().min(0.0));

    let placement = PlacementVars { place, throughput };

    // One component per cell.
    for cell in grid.cells() {
        let occupancy = ComponentType::ALL
            .into_iter()
            .map(|ty| placement.place(cell, ty))
            .sum::<Expression>();
        constraints.push(constraint!(occupancy <= 1.0));
    }

    // Total placement cost within budget.
    let mut total_cost = Expression::from(0.0);
    for cell in grid.cells() {
        for ty in ComponentType::ALL {
            total_cost += catalogue.unit_cost(ty) * placement.place(cell, ty);
        }
    }
    constraints.push(constraint!(total_cost <= problem.budget));

    // Throughput is bounded by the tighter of the pad and stand resources.
    // Pads contribute at half their nominal capacity (landing/takeoff duty
    // cycle); the halving is a domain constant.
    let pads = placement.total_of(problem, ComponentType::Pad);
    let stands = placement.total_of(problem, ComponentType::Stand);
    let pad_rate = catalogue.unit_capacity(ComponentType::Pad) / 2.0;
    let stand_rate = catalogue.unit_capacity(ComponentType::Stand);
    constraints.push(constraint!(throughput <= pad_rate * pads));
    constraints.push(constraint!(throughput <= stand_rate * stands));

    // Pads, stands and terminals need a taxiway on at least one 4-neighbor.
    // On a grid with no neighbors this forces those placements to zero.
    for cell in grid.cells() {
        let taxiway_access = grid
            .neighbors(cell)
            .into_iter()
            .map(|n| placement.place(n, ComponentType::Taxiway))
            .sum::<Expression>();
        for ty in ComponentType::ALL {
            if ty.needs_taxiway_access() {
                let dependent = placement.place(cell, ty);
                constraints.push(constraint!(taxiway_access.clone() >= dependent));
            }
        }
    }

    // Pads only on the boundary ring, and never within Manhattan distance 2
    // of another pad (pairwise Big-M exclusion).
    for cell in grid.cells() {
        let pad_here = placement.place(cell, ComponentType::Pad);
        if !grid.is_boundary(cell) {
            constraints.push(constraint!(pad_here == 0.0));
        }
        for other in grid.cells_within(cell, 2) {
            let pad_there = placement.place(other, ComponentType::Pad);
            constraints.push(constraint!(pad_there <= big_m - big_m * pad_here));
        }
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutProblemBuilder;
    use good_lp::variables;

    #[test]
    fn test_variable_and_constraint_counts() {
        let problem = LayoutProblemBuilder::new(3, 3).build().unwrap();
        let mut vars = variables!();
        let mut constraints = Vec::new();
        let placement = build(&problem, &mut vars, &mut constraints);

        // One binary per (cell, type).
        assert_eq!(placement.place.len(), 9 * 4);

        // 9 exclusivity + 1 budget + 2 throughput + 27 adjacency
        // + 1 interior pad ban + pairwise spacing.
        let spacing: usize = problem
            .grid
            .cells()
            .map(|c| problem.grid.cells_within(c, 2).len())
            .sum();
        assert_eq!(constraints.len(), 9 + 1 + 2 + 27 + 1 + spacing);
    }
}
