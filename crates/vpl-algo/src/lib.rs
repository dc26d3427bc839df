//! # vpl-algo: Vertiport Layout Optimization
//!
//! MILP-based layout planning for vertiport ground facilities. The crate
//! formulates component placement and taxiway connectivity as a single
//! mixed-integer program, dispatches it to the HiGHS backend through
//! `good_lp`, and decodes the solved assignment into a validated layout.
//!
//! See [`layout`] for the formulation details.

pub mod layout;
