//! Log vocabulary: zones, position codes, anchors, facing, and status.
//!
//! The log records each robot's location as a single letter:
//!
//! | Code | Meaning                               |
//! |------|---------------------------------------|
//! | `S`  | at the storage zone                   |
//! | `B`  | at the build zone                     |
//! | `C`  | at the charging zone                  |
//! | `T`  | in transit between two zones          |

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One of the three fixed work zones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Zone {
    Storage,
    Build,
    Charging,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Storage, Zone::Build, Zone::Charging];

    /// The single-letter log code for this zone.
    pub fn code(self) -> char {
        match self {
            Zone::Storage  => 'S',
            Zone::Build    => 'B',
            Zone::Charging => 'C',
        }
    }

    /// Text drawn next to the zone circle.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Storage  => "STORAGE AREA",
            Zone::Build    => "BUILD AREA",
            Zone::Charging => "CHARGING AREA",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A decoded per-robot position code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PositionCode {
    At(Zone),
    Transit,
}

impl PositionCode {
    /// The zone, or `None` for the transit marker.
    pub fn zone(self) -> Option<Zone> {
        match self {
            PositionCode::At(z)     => Some(z),
            PositionCode::Transit   => None,
        }
    }
}

impl FromStr for PositionCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => Ok(PositionCode::At(Zone::Storage)),
            "B" => Ok(PositionCode::At(Zone::Build)),
            "C" => Ok(PositionCode::At(Zone::Charging)),
            "T" => Ok(PositionCode::Transit),
            other => Err(CoreError::UnknownPositionCode(other.to_owned())),
        }
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionCode::At(z)   => write!(f, "{z}"),
            PositionCode::Transit => f.write_str("T"),
        }
    }
}

/// The halfway point between a pair of zones, named by its endpoints.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Midpoint {
    /// Storage ↔ build (`sb`).
    StorageBuild,
    /// Build ↔ charging (`bc`).
    BuildCharging,
    /// Charging ↔ storage (`cs`).
    ChargingStorage,
}

impl Midpoint {
    /// The midpoint between two distinct zones, regardless of order.
    pub fn between(a: Zone, b: Zone) -> Option<Midpoint> {
        use Zone::*;
        match (a, b) {
            (Storage, Build) | (Build, Storage)       => Some(Midpoint::StorageBuild),
            (Build, Charging) | (Charging, Build)     => Some(Midpoint::BuildCharging),
            (Charging, Storage) | (Storage, Charging) => Some(Midpoint::ChargingStorage),
            _ => None,
        }
    }

    /// The two zones this midpoint joins.
    pub fn endpoints(self) -> (Zone, Zone) {
        match self {
            Midpoint::StorageBuild    => (Zone::Storage, Zone::Build),
            Midpoint::BuildCharging   => (Zone::Build, Zone::Charging),
            Midpoint::ChargingStorage => (Zone::Charging, Zone::Storage),
        }
    }
}

/// Where a robot icon is anchored before per-slot staggering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Anchor {
    Zone(Zone),
    Midpoint(Midpoint),
}

/// Cardinal facing of a robot icon.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Orientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// `true` when the body is drawn rotated a quarter turn.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Up    => "up",
            Orientation::Down  => "down",
            Orientation::Left  => "left",
            Orientation::Right => "right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Battery state shown on the back wheels of a robot icon.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RobotStatus {
    #[default]
    Normal,
    Charging,
    LowBattery,
}

impl RobotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RobotStatus::Normal     => "normal",
            RobotStatus::Charging   => "charging",
            RobotStatus::LowBattery => "low_battery",
        }
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
