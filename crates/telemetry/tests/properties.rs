//! Property tests: encoding is a pure function of the record value, output
//! always parses, and the schema worst case bounds every encoding.

use proptest::prelude::*;
use serde_json::json;
use telejson_json_text::{encode_to_slice, encode_to_vec, encode_value_to_vec, EncodeError};
use telejson_telemetry::drone::{
    Drone, DroneStatus, Flight, LandingGear, LandingGearStatus, Network, Pose, Position, Power,
    Propeller, PropellerStatus, RotatingDirection, DRONE, DRONE_JSON_MAX_BYTES,
};

fn arb_drone_status() -> impl Strategy<Value = DroneStatus> {
    prop_oneof![
        Just(DroneStatus::Unknown),
        Just(DroneStatus::Standby),
        Just(DroneStatus::Rising),
        Just(DroneStatus::Landing),
        Just(DroneStatus::Flying),
    ]
}

fn arb_direction() -> impl Strategy<Value = RotatingDirection> {
    prop_oneof![
        Just(RotatingDirection::Unknown),
        Just(RotatingDirection::ClockWise),
        Just(RotatingDirection::AntiClockWise),
    ]
}

fn arb_propeller_status() -> impl Strategy<Value = PropellerStatus> {
    prop_oneof![
        Just(PropellerStatus::Unknown),
        Just(PropellerStatus::Idle),
        Just(PropellerStatus::Rotating),
    ]
}

fn arb_gear_status() -> impl Strategy<Value = LandingGearStatus> {
    prop_oneof![
        Just(LandingGearStatus::Unknown),
        Just(LandingGearStatus::Unfolded),
        Just(LandingGearStatus::Folded),
    ]
}

prop_compose! {
    fn arb_position()(
        longitude in any::<u32>(),
        latitude in any::<u32>(),
        altitude in any::<u32>(),
    ) -> Position {
        Position { longitude, latitude, altitude }
    }
}

prop_compose! {
    fn arb_flight()(
        yaw in any::<i32>(),
        pitch in any::<i32>(),
        roll in any::<i32>(),
        acceleration in proptest::array::uniform3(any::<i32>()),
    ) -> Flight {
        Flight { pose: Pose { yaw, pitch, roll }, acceleration }
    }
}

prop_compose! {
    fn arb_propeller()(
        id in any::<u8>(),
        direction in arb_direction(),
        status in arb_propeller_status(),
    ) -> Propeller {
        Propeller { id, direction, status }
    }
}

prop_compose! {
    fn arb_drone()(
        status in arb_drone_status(),
        position in arb_position(),
        flight in arb_flight(),
        propellers in proptest::array::uniform4(arb_propeller()),
        is_charging in any::<bool>(),
        battery in any::<u8>(),
        signal in any::<u8>(),
        heartbeat_at in any::<u64>(),
        gear in arb_gear_status(),
    ) -> Drone {
        Drone {
            status,
            position,
            flight,
            propellers,
            power: Power { is_charging, battery },
            network: Network { signal, heartbeat_at },
            landing_gear: LandingGear { status: gear },
        }
    }
}

fn drone_as_value(drone: &Drone) -> serde_json::Value {
    let propellers: Vec<serde_json::Value> = drone
        .propellers
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "direction": p.direction.tag(),
                "status": p.status.tag(),
            })
        })
        .collect();
    json!({
        "status": drone.status.tag(),
        "position": {
            "longitude": drone.position.longitude,
            "latitude": drone.position.latitude,
            "altitude": drone.position.altitude,
        },
        "flight": {
            "pose": {
                "yaw": drone.flight.pose.yaw,
                "pitch": drone.flight.pose.pitch,
                "roll": drone.flight.pose.roll,
            },
            "acceleration": drone.flight.acceleration,
        },
        "propellers": propellers,
        "power": {
            "is_charging": drone.power.is_charging,
            "battery": drone.power.battery,
        },
        "network": {
            "signal": drone.network.signal,
            "heartbeat_at": drone.network.heartbeat_at,
        },
        "landing_gear": { "status": drone.landing_gear.status.tag() },
    })
}

proptest! {
    #[test]
    fn encoding_is_deterministic(drone in arb_drone()) {
        let first = encode_to_vec(&drone).unwrap();
        let second = encode_to_vec(&drone).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_parses_and_fits_worst_case(drone in arb_drone()) {
        let out = encode_to_vec(&drone).unwrap();
        prop_assert!(out.len() + 1 <= DRONE_JSON_MAX_BYTES);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        prop_assert_eq!(parsed["propellers"].as_array().unwrap().len(), 4);
        prop_assert_eq!(parsed["status"].as_u64().unwrap(), drone.status.tag() as u64);
    }

    #[test]
    fn capacity_boundary_holds_for_all_values(drone in arb_drone()) {
        let text_len = encode_to_vec(&drone).unwrap().len();

        let mut exact = vec![0u8; text_len + 1];
        prop_assert_eq!(encode_to_slice(&drone, &mut exact).unwrap(), text_len);

        let mut short = vec![0u8; text_len];
        let err = encode_to_slice(&drone, &mut short).unwrap_err();
        prop_assert!(matches!(err, EncodeError::Capacity(_)));
    }

    #[test]
    fn dynamic_path_agrees_with_typed_path(drone in arb_drone()) {
        let typed = encode_to_vec(&drone).unwrap();
        let dynamic = encode_value_to_vec(&drone_as_value(&drone), &DRONE).unwrap();
        prop_assert_eq!(typed, dynamic);
    }
}
