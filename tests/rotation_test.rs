//! Rotation token validation tests.

use spindle::{Rotation, SpindleError};

#[test]
fn the_four_valid_tokens_map_to_distinct_enumerants() {
    assert_eq!(Rotation::from_degrees("0").unwrap(), Rotation::None);
    assert_eq!(Rotation::from_degrees("90").unwrap(), Rotation::Ninety);
    assert_eq!(Rotation::from_degrees("180").unwrap(), Rotation::OneEighty);
    assert_eq!(Rotation::from_degrees("270").unwrap(), Rotation::TwoSeventy);
}

#[test]
fn other_integers_are_rejected() {
    for arg in ["45", "91", "360", "-90", "271"] {
        let result = Rotation::from_degrees(arg);
        assert!(
            matches!(result, Err(SpindleError::InvalidRotation(_))),
            "{arg} should be rejected"
        );
    }
}

#[test]
fn non_numeric_input_is_rejected() {
    for arg in ["", "ninety", "90deg", " 90", "9O"] {
        let result = Rotation::from_degrees(arg);
        assert!(
            matches!(result, Err(SpindleError::InvalidRotation(_))),
            "{arg:?} should be rejected"
        );
    }
}

#[test]
fn degrees_round_trip() {
    for rotation in [
        Rotation::None,
        Rotation::Ninety,
        Rotation::OneEighty,
        Rotation::TwoSeventy,
    ] {
        let reparsed = Rotation::from_degrees(&rotation.degrees().to_string()).unwrap();
        assert_eq!(reparsed, rotation);
    }
}

#[test]
fn quarter_turns_swap_dimensions() {
    assert!(!Rotation::None.swaps_dimensions());
    assert!(Rotation::Ninety.swaps_dimensions());
    assert!(!Rotation::OneEighty.swaps_dimensions());
    assert!(Rotation::TwoSeventy.swaps_dimensions());
}

#[cfg(any(feature = "server", feature = "client"))]
mod wire {
    use spindle::server::convert::rotation_from_wire;
    use spindle::server::proto;
    use spindle::{Rotation, SpindleError};

    #[test]
    fn wire_enum_round_trips() {
        for rotation in [
            Rotation::None,
            Rotation::Ninety,
            Rotation::OneEighty,
            Rotation::TwoSeventy,
        ] {
            let wire: i32 = proto::Rotation::from(rotation).into();
            assert_eq!(rotation_from_wire(wire).unwrap(), rotation);
        }
    }

    #[test]
    fn unknown_wire_values_are_rejected() {
        for value in [4, 99, -1] {
            let result = rotation_from_wire(value);
            assert!(
                matches!(result, Err(SpindleError::InvalidRotation(_))),
                "wire value {value} should be rejected"
            );
        }
    }
}
