//! Vertiport Layout Optimization
//!
//! This module implements a Mixed-Integer Linear Programming (MILP)
//! formulation for vertiport ground-facility layout planning.
//!
//! ## Problem Overview
//!
//! The planner decides which component, if any, occupies each grid cell so
//! as to maximize facility throughput within a fixed budget.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  VERTIPORT LAYOUT PLANNING                                               │
//! │  ─────────────────────────                                               │
//! │                                                                          │
//! │  Given:                                                                  │
//! │    • A bounded rows x cols grid of cells                                │
//! │    • A catalogue of components (pad, stand, taxiway, terminal)          │
//! │    • Unit costs, pad/stand capacities, a total budget                   │
//! │                                                                          │
//! │  Decide:                                                                 │
//! │    • Which component, if any, to place on each cell (binary)            │
//! │                                                                          │
//! │  Maximize:                                                               │
//! │    Throughput (operations supported by the placed capacity)             │
//! │                                                                          │
//! │  Subject to:                                                             │
//! │    • At most one component per cell                                     │
//! │    • Total placement cost within budget                                 │
//! │    • Pads, stands and terminals adjacent to a taxiway                   │
//! │    • Pads on the grid boundary, spaced apart                            │
//! │    • Taxiway network connectivity (feasible-flow certificate)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## MILP Formulation
//!
//! ```text
//! maximize    w                                        throughput
//!
//! subject to:
//!   Σ_c x[i,c] ≤ 1                                     one component per cell
//!   Σ_{i,c} cost_c · x[i,c] ≤ B                        budget
//!   w ≤ (cap_pad / 2) · Σ_i x[i,Pad]                   pad duty cycle
//!   w ≤ cap_stand · Σ_i x[i,Stand]                     stand capacity
//!   Σ_{j∈N(i)} x[j,Twy] ≥ x[i,c]   c ∈ {Pad,Stn,Trm}   taxiway access
//!   x[i,Pad] = 0                   i interior           boundary siting
//!   x[j,Pad] ≤ M·(1 − x[i,Pad])   d(i,j) ≤ 2           pad spacing
//!   x[i,c] ∈ {0,1}                                     binary placements
//! ```
//!
//! Pads contribute capacity at half their nominal rating: each pad splits its
//! movements between landings and takeoffs, so the usable operation rate is
//! `cap_pad / 2` per pad. Throughput is bounded by the tighter of the pad and
//! stand resources.
//!
//! ## Connectivity Certificate
//!
//! A feasible-flow relaxation rejects layouts whose taxiway network breaks
//! into disconnected islands:
//!
//! ```text
//!   r[source] = 1                                      source always reachable
//!   0 ≤ f[i→j] ≤ M                                     directed flow per edge
//!   f[i→j] ≤ M · x[i,Twy]                              flow only leaves taxiways
//!   b[i] = Σ_j f[i→j] − Σ_j f[j→i]                     net balance
//!   −M·r[i] ≤ b[i] ≤ M·r[i]                            balance gated by reach
//! ```
//!
//! A reachable cell may absorb or emit net flow freely; an unreachable cell
//! must balance to exactly zero and so cannot participate in the network.
//! This certifies that a connectivity-consistent flow exists. It is not a
//! max-flow or shortest-path computation and must not be replaced by one.
//!
//! ## Big-M Constraints
//!
//! Both the pad spacing exclusion and the flow gating use the standard Big-M
//! linearization of "if-then" logic. `M` is a single named constant on the
//! problem; it must dominate the largest flow magnitude a cell could carry,
//! so the builder rejects values below the grid's cell count. An undersized
//! M silently tightens constraints it should relax, which is a correctness
//! bug rather than a performance one.

mod connectivity;
mod placement;
mod problem;
mod solution;
mod solver;

pub use problem::{LayoutProblem, LayoutProblemBuilder};
pub use solution::Layout;
pub use solver::{solve_layout, LayoutError, LayoutSolverConfig, SolveOutcome, SolveStatus};
