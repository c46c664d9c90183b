use super::*;

#[test]
fn linear_easing_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Custom(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
    ];

    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_in_out_is_symmetric_around_midpoint() {
    let midpoint = Easing::EaseInOut.transform(0.5);
    assert!((midpoint - 0.5).abs() < 0.01);
    let early = Easing::EaseInOut.transform(0.25);
    let late = Easing::EaseInOut.transform(0.75);
    assert!((early + late - 1.0).abs() < 0.01);
    assert!(early < 0.25, "ease-in-out starts slow");
}

#[test]
fn ease_in_lags_ease_out() {
    assert!(Easing::EaseIn.transform(0.5) < Easing::EaseOut.transform(0.5));
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration, Duration::from_millis(200));
    assert_eq!(spec.easing, Easing::EaseInOut);
    assert!(!spec.is_immediate());
}

#[test]
fn only_zero_duration_is_immediate() {
    assert!(AnimationSpec::tween(Duration::ZERO, Easing::Linear).is_immediate());
    assert!(!AnimationSpec::tween(Duration::from_nanos(1), Easing::Linear).is_immediate());
}
