//! Transit resolution: which midpoint a moving robot is drawn at and which
//! way it faces.
//!
//! A `T` code alone does not say where the robot is.  The zones it was at in
//! the previous row and will be at in the next row pick the midpoint
//! (unordered) and the facing (ordered).  Only the six ordered pairs of
//! distinct zones have a rule; anything else is a lookup miss.

use rr_core::{Midpoint, Orientation, Zone};

/// One entry of the transit lookup table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TransitRule {
    pub from:        Zone,
    pub to:          Zone,
    pub midpoint:    Midpoint,
    pub orientation: Orientation,
}

const fn rule(from: Zone, to: Zone, midpoint: Midpoint, orientation: Orientation) -> TransitRule {
    TransitRule { from, to, midpoint, orientation }
}

pub const TRANSIT_RULES: [TransitRule; 6] = [
    rule(Zone::Charging, Zone::Build,    Midpoint::BuildCharging,   Orientation::Up),
    rule(Zone::Charging, Zone::Storage,  Midpoint::ChargingStorage, Orientation::Left),
    rule(Zone::Build,    Zone::Charging, Midpoint::BuildCharging,   Orientation::Down),
    rule(Zone::Build,    Zone::Storage,  Midpoint::StorageBuild,    Orientation::Down),
    rule(Zone::Storage,  Zone::Charging, Midpoint::ChargingStorage, Orientation::Right),
    rule(Zone::Storage,  Zone::Build,    Midpoint::StorageBuild,    Orientation::Up),
];

/// Look up the rule for a robot moving `from` → `to`.
pub fn resolve_transit(from: Zone, to: Zone) -> Option<&'static TransitRule> {
    TRANSIT_RULES.iter().find(|r| r.from == from && r.to == to)
}
