use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Accelerate(1.5),
    Ease::Decelerate(2.0),
    Ease::AccelerateDecelerate,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn decelerate_matches_closed_form() {
    let v = Ease::Decelerate(1.0).apply(0.5);
    assert!((v - 0.75).abs() < 1e-12);
    let v = Ease::Decelerate(2.0).apply(0.5);
    assert!((v - 0.9375).abs() < 1e-12);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(3.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn invalid_factors_are_reported() {
    assert!(!Ease::Decelerate(0.0).is_valid());
    assert!(!Ease::Accelerate(f64::INFINITY).is_valid());
    assert!(Ease::Decelerate(0.5).is_valid());
}

#[test]
fn serde_uses_snake_case() {
    let s = serde_json::to_string(&Ease::OutCubic).unwrap();
    assert_eq!(s, "\"out_cubic\"");
    let e: Ease = serde_json::from_str("{\"decelerate\":2.0}").unwrap();
    assert_eq!(e, Ease::Decelerate(2.0));
}
