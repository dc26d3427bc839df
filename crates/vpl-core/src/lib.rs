//! # vpl-core: Vertiport Layout Modeling Core
//!
//! Provides the fundamental data structures for vertiport ground-facility
//! layout planning: the discrete grid the facility is placed on, and the
//! catalogue of placeable components with their cost and capacity attributes.
//!
//! ## Design Philosophy
//!
//! The layout universe is a bounded `rows x cols` grid with 4-connectivity:
//! - **Cells**: immutable `(row, col)` positions
//! - **Components**: a closed enumeration (Pad, Stand, Taxiway, Terminal)
//!
//! Both structures are created once at startup and never mutated. The
//! optimization layer (`vpl-algo`) consumes them by reference when it builds
//! decision variables and constraints.
//!
//! ## Modules
//!
//! - [`grid`] - Cell universe, adjacency and distance queries
//! - [`catalogue`] - Component registry with cost/capacity attributes
//! - [`error`] - Unified error type for the VPL ecosystem

pub mod catalogue;
pub mod error;
pub mod grid;

pub use catalogue::{Catalogue, ComponentSpec, ComponentType};
pub use error::{VplError, VplResult};
pub use grid::{Cell, GridTopology};
