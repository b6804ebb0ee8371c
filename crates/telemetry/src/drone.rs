//! Drone state snapshot records, as emitted for the drone blueprint.
//!
//! Field declaration order here is the blueprint declaration order and
//! therefore the JSON key order. Values are zero-initialized via `Default`
//! and set field by field before encoding.

use telejson_schema::{
    max_json_size, EnumDescriptor, EnumVariant, FieldDescriptor, FieldKind,
    FieldValue, IntWidth, MessageDescriptor, Record,
};

/// Worst-case bytes for one encoded `Drone`, NUL terminator included.
///
/// Any fixed destination of this size is guaranteed sufficient for
/// `encode_to_slice` regardless of field values.
pub const DRONE_JSON_MAX_BYTES: usize = max_json_size(&DRONE) + 1;

// ---------------------------------------------------------------------------
// Enums

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DroneStatus {
    #[default]
    Unknown = 0,
    Standby = 1,
    Rising = 2,
    Landing = 3,
    Flying = 4,
}

impl DroneStatus {
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

pub const DRONE_STATUS: EnumDescriptor = EnumDescriptor {
    name: "DroneStatus",
    variants: &[
        EnumVariant {
            name: "UNKNOWN",
            tag: 0,
        },
        EnumVariant {
            name: "STANDBY",
            tag: 1,
        },
        EnumVariant {
            name: "RISING",
            tag: 2,
        },
        EnumVariant {
            name: "LANDING",
            tag: 3,
        },
        EnumVariant {
            name: "FLYING",
            tag: 4,
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotatingDirection {
    #[default]
    Unknown = 0,
    ClockWise = 1,
    AntiClockWise = 2,
}

impl RotatingDirection {
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

pub const ROTATING_DIRECTION: EnumDescriptor = EnumDescriptor {
    name: "RotatingDirection",
    variants: &[
        EnumVariant {
            name: "UNKNOWN",
            tag: 0,
        },
        EnumVariant {
            name: "CLOCK_WISE",
            tag: 1,
        },
        EnumVariant {
            name: "ANTI_CLOCK_WISE",
            tag: 2,
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropellerStatus {
    #[default]
    Unknown = 0,
    Idle = 1,
    Rotating = 2,
}

impl PropellerStatus {
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

pub const PROPELLER_STATUS: EnumDescriptor = EnumDescriptor {
    name: "PropellerStatus",
    variants: &[
        EnumVariant {
            name: "UNKNOWN",
            tag: 0,
        },
        EnumVariant {
            name: "IDLE",
            tag: 1,
        },
        EnumVariant {
            name: "ROTATING",
            tag: 2,
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LandingGearStatus {
    #[default]
    Unknown = 0,
    Unfolded = 1,
    Folded = 2,
}

impl LandingGearStatus {
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

pub const LANDING_GEAR_STATUS: EnumDescriptor = EnumDescriptor {
    name: "LandingGearStatus",
    variants: &[
        EnumVariant {
            name: "UNKNOWN",
            tag: 0,
        },
        EnumVariant {
            name: "UNFOLDED",
            tag: 1,
        },
        EnumVariant {
            name: "FOLDED",
            tag: 2,
        },
    ],
};

// ---------------------------------------------------------------------------
// Messages

pub const POSITION: MessageDescriptor = MessageDescriptor {
    name: "Position",
    fields: &[
        FieldDescriptor {
            name: "longitude",
            kind: FieldKind::Uint(IntWidth::W32),
        },
        FieldDescriptor {
            name: "latitude",
            kind: FieldKind::Uint(IntWidth::W32),
        },
        FieldDescriptor {
            name: "altitude",
            kind: FieldKind::Uint(IntWidth::W32),
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub longitude: u32,
    pub latitude: u32,
    pub altitude: u32,
}

impl Record for Position {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &POSITION
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Uint(self.longitude as u64),
            1 => FieldValue::Uint(self.latitude as u64),
            _ => FieldValue::Uint(self.altitude as u64),
        }
    }
}

pub const POSE: MessageDescriptor = MessageDescriptor {
    name: "Pose",
    fields: &[
        FieldDescriptor {
            name: "yaw",
            kind: FieldKind::Int(IntWidth::W32),
        },
        FieldDescriptor {
            name: "pitch",
            kind: FieldKind::Int(IntWidth::W32),
        },
        FieldDescriptor {
            name: "roll",
            kind: FieldKind::Int(IntWidth::W32),
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pose {
    pub yaw: i32,
    pub pitch: i32,
    pub roll: i32,
}

impl Record for Pose {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &POSE
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Int(self.yaw as i64),
            1 => FieldValue::Int(self.pitch as i64),
            _ => FieldValue::Int(self.roll as i64),
        }
    }
}

const ACCELERATION_ELEM: FieldKind = FieldKind::Int(IntWidth::W32);

pub const FLIGHT: MessageDescriptor = MessageDescriptor {
    name: "Flight",
    fields: &[
        FieldDescriptor {
            name: "pose",
            kind: FieldKind::Message(&POSE),
        },
        FieldDescriptor {
            name: "acceleration",
            kind: FieldKind::Array {
                elem: &ACCELERATION_ELEM,
                len: 3,
            },
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flight {
    pub pose: Pose,
    /// x, y, z axis values.
    pub acceleration: [i32; 3],
}

impl Record for Flight {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &FLIGHT
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Record(&self.pose),
            _ => FieldValue::Array(&self.acceleration),
        }
    }
}

pub const PROPELLER: MessageDescriptor = MessageDescriptor {
    name: "Propeller",
    fields: &[
        FieldDescriptor {
            name: "id",
            kind: FieldKind::Uint(IntWidth::W8),
        },
        FieldDescriptor {
            name: "direction",
            kind: FieldKind::Enum(&ROTATING_DIRECTION),
        },
        FieldDescriptor {
            name: "status",
            kind: FieldKind::Enum(&PROPELLER_STATUS),
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Propeller {
    pub id: u8,
    pub direction: RotatingDirection,
    pub status: PropellerStatus,
}

impl Record for Propeller {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &PROPELLER
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Uint(self.id as u64),
            1 => FieldValue::Enum(self.direction.tag()),
            _ => FieldValue::Enum(self.status.tag()),
        }
    }
}

pub const POWER: MessageDescriptor = MessageDescriptor {
    name: "Power",
    fields: &[
        FieldDescriptor {
            name: "is_charging",
            kind: FieldKind::Bool,
        },
        FieldDescriptor {
            name: "battery",
            kind: FieldKind::Uint(IntWidth::W8),
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Power {
    pub is_charging: bool,
    /// Battery percentage, 0~100.
    pub battery: u8,
}

impl Record for Power {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &POWER
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Bool(self.is_charging),
            _ => FieldValue::Uint(self.battery as u64),
        }
    }
}

pub const NETWORK: MessageDescriptor = MessageDescriptor {
    name: "Network",
    fields: &[
        FieldDescriptor {
            name: "signal",
            kind: FieldKind::Uint(IntWidth::W8),
        },
        FieldDescriptor {
            name: "heartbeat_at",
            kind: FieldKind::Timestamp,
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Network {
    /// Signal strength degree.
    pub signal: u8,
    /// Epoch milliseconds of the last received heartbeat packet.
    pub heartbeat_at: u64,
}

impl Record for Network {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &NETWORK
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Uint(self.signal as u64),
            _ => FieldValue::Uint(self.heartbeat_at),
        }
    }
}

pub const LANDING_GEAR: MessageDescriptor = MessageDescriptor {
    name: "LandingGear",
    fields: &[FieldDescriptor {
        name: "status",
        kind: FieldKind::Enum(&LANDING_GEAR_STATUS),
    }],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingGear {
    pub status: LandingGearStatus,
}

impl Record for LandingGear {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &LANDING_GEAR
    }

    fn field(&self, _index: usize) -> FieldValue<'_> {
        FieldValue::Enum(self.status.tag())
    }
}

const PROPELLER_ELEM: FieldKind = FieldKind::Message(&PROPELLER);

pub const DRONE: MessageDescriptor = MessageDescriptor {
    name: "Drone",
    fields: &[
        FieldDescriptor {
            name: "status",
            kind: FieldKind::Enum(&DRONE_STATUS),
        },
        FieldDescriptor {
            name: "position",
            kind: FieldKind::Message(&POSITION),
        },
        FieldDescriptor {
            name: "flight",
            kind: FieldKind::Message(&FLIGHT),
        },
        FieldDescriptor {
            name: "propellers",
            kind: FieldKind::Array {
                elem: &PROPELLER_ELEM,
                len: 4,
            },
        },
        FieldDescriptor {
            name: "power",
            kind: FieldKind::Message(&POWER),
        },
        FieldDescriptor {
            name: "network",
            kind: FieldKind::Message(&NETWORK),
        },
        FieldDescriptor {
            name: "landing_gear",
            kind: FieldKind::Message(&LANDING_GEAR),
        },
    ],
};

/// The full drone state snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drone {
    pub status: DroneStatus,
    pub position: Position,
    pub flight: Flight,
    pub propellers: [Propeller; 4],
    pub power: Power,
    pub network: Network,
    pub landing_gear: LandingGear,
}

impl Record for Drone {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &DRONE
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Enum(self.status.tag()),
            1 => FieldValue::Record(&self.position),
            2 => FieldValue::Record(&self.flight),
            3 => FieldValue::Array(&self.propellers),
            4 => FieldValue::Record(&self.power),
            5 => FieldValue::Record(&self.network),
            _ => FieldValue::Record(&self.landing_gear),
        }
    }
}
