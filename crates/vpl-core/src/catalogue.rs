//! Component catalogue
//!
//! The fixed set of placeable facility components, each with a unit cost and
//! (for the throughput-bearing types) a unit capacity. The set is a closed
//! enumeration so an unknown component is unrepresentable rather than a
//! runtime lookup failure.

use crate::error::{VplError, VplResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A placeable facility component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// Takeoff/landing pad. Contributes capacity at half its nominal rating.
    Pad,
    /// Parking stand. Contributes capacity at its full rating.
    Stand,
    /// Connecting taxiway. Carries the access network, no capacity.
    Taxiway,
    /// Passenger terminal. No capacity.
    Terminal,
}

impl ComponentType {
    /// All component types in catalogue declaration order. Reports iterate
    /// in this order.
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Pad,
        ComponentType::Stand,
        ComponentType::Taxiway,
        ComponentType::Terminal,
    ];

    /// Full label used in serialized reports.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Pad => "Pad",
            ComponentType::Stand => "Stand",
            ComponentType::Taxiway => "Taxiway",
            ComponentType::Terminal => "Terminal",
        }
    }

    /// Short code used in the text grid rendering.
    pub fn short(&self) -> &'static str {
        match self {
            ComponentType::Pad => "Pad",
            ComponentType::Stand => "Stn",
            ComponentType::Taxiway => "Twy",
            ComponentType::Terminal => "Trm",
        }
    }

    /// Whether placements of this type must sit next to a taxiway.
    pub fn needs_taxiway_access(&self) -> bool {
        !matches!(self, ComponentType::Taxiway)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cost and capacity attributes of one component type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Cost of placing one unit.
    pub unit_cost: f64,
    /// Throughput capacity contributed per placed unit (0 for passive types).
    pub unit_capacity: f64,
}

impl ComponentSpec {
    pub fn new(unit_cost: f64, unit_capacity: f64) -> Self {
        ComponentSpec {
            unit_cost,
            unit_capacity,
        }
    }

    /// A component that carries no throughput capacity.
    pub fn passive(unit_cost: f64) -> Self {
        ComponentSpec {
            unit_cost,
            unit_capacity: 0.0,
        }
    }
}

/// Process-wide, read-only registry of component attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pad: ComponentSpec,
    stand: ComponentSpec,
    taxiway: ComponentSpec,
    terminal: ComponentSpec,
}

impl Catalogue {
    /// Build a catalogue. Taxiways and terminals never carry capacity, so
    /// only their costs are taken.
    pub fn new(
        pad: ComponentSpec,
        stand: ComponentSpec,
        taxiway_cost: f64,
        terminal_cost: f64,
    ) -> VplResult<Self> {
        let catalogue = Catalogue {
            pad,
            stand,
            taxiway: ComponentSpec::passive(taxiway_cost),
            terminal: ComponentSpec::passive(terminal_cost),
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    fn validate(&self) -> VplResult<()> {
        for ty in ComponentType::ALL {
            let spec = self.spec(ty);
            if !spec.unit_cost.is_finite() || spec.unit_cost < 0.0 {
                return Err(VplError::Config(format!(
                    "{} unit cost must be finite and non-negative, got {}",
                    ty, spec.unit_cost
                )));
            }
        }
        for ty in [ComponentType::Pad, ComponentType::Stand] {
            let spec = self.spec(ty);
            if !spec.unit_capacity.is_finite() || spec.unit_capacity <= 0.0 {
                return Err(VplError::Config(format!(
                    "{} unit capacity must be positive, got {}",
                    ty, spec.unit_capacity
                )));
            }
        }
        Ok(())
    }

    pub fn spec(&self, ty: ComponentType) -> &ComponentSpec {
        match ty {
            ComponentType::Pad => &self.pad,
            ComponentType::Stand => &self.stand,
            ComponentType::Taxiway => &self.taxiway,
            ComponentType::Terminal => &self.terminal,
        }
    }

    pub fn unit_cost(&self, ty: ComponentType) -> f64 {
        self.spec(ty).unit_cost
    }

    pub fn unit_capacity(&self, ty: ComponentType) -> f64 {
        self.spec(ty).unit_capacity
    }
}
