//! `telejson-telemetry` — the drone telemetry record set.
//!
//! This crate holds what a blueprint compiler would emit for the drone state
//! snapshot: plain typed structs and enums, one `const` descriptor per
//! record type, mechanical [`Record`](telejson_schema::Record) impls wiring
//! the two together, and worst-case buffer-size constants.
//!
//! ```
//! use telejson_telemetry::{Drone, DroneStatus, DRONE_JSON_MAX_BYTES};
//!
//! let mut drone = Drone::default();
//! drone.status = DroneStatus::Rising;
//! drone.power.battery = 98;
//!
//! let mut buf = [0u8; DRONE_JSON_MAX_BYTES];
//! let len = telejson_json_text::encode_to_slice(&drone, &mut buf).unwrap();
//! assert!(std::str::from_utf8(&buf[..len]).unwrap().starts_with(r#"{"status":2,"#));
//! ```

pub mod drone;

pub use drone::{
    Drone, DroneStatus, Flight, LandingGear, LandingGearStatus, Network, Pose, Position, Power,
    Propeller, PropellerStatus, RotatingDirection, DRONE, DRONE_JSON_MAX_BYTES,
};
