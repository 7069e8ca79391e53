use super::*;

#[test]
fn default_scale_is_one_point_one() {
    assert_eq!(ScaleFactor::default().get(), 1.1);
    assert_eq!(ScaleFactor::DEFAULT, ScaleFactor::default());
}

#[test]
fn scale_dims_truncates() {
    let s = ScaleFactor::DEFAULT;
    assert_eq!(s.scale_dims(100, 100), (110, 110));
    assert_eq!(s.scale_dims(3, 7), (3, 7));
    assert_eq!(s.scale_dims(19, 21), (20, 23));
    assert_eq!(s.scale_dims(0, 5), (0, 5));
    assert_eq!(s.scale_dims(1, 9), (1, 9));
}

#[test]
fn scale_factor_rejects_bad_ratios() {
    assert!(ScaleFactor::new(0.0).is_err());
    assert!(ScaleFactor::new(-1.0).is_err());
    assert!(ScaleFactor::new(f64::NAN).is_err());
    assert!(ScaleFactor::new(f64::INFINITY).is_err());
    assert_eq!(ScaleFactor::new(2.0).unwrap().get(), 2.0);
}

#[test]
fn scale_factor_is_bounded_above() {
    assert_eq!(
        ScaleFactor::new(ScaleFactor::MAX_RATIO).unwrap().get(),
        ScaleFactor::MAX_RATIO
    );
    let err = ScaleFactor::new(ScaleFactor::MAX_RATIO + 0.5).unwrap_err();
    assert!(matches!(err, SigpasteError::InvalidInput(_)));
    assert!(ScaleFactor::new(1e5).is_err());
}

#[test]
fn scale_factor_deserialization_validates() {
    assert!(serde_json::from_str::<ScaleFactor>("1e5").is_err());
    assert!(serde_json::from_str::<ScaleFactor>("0").is_err());
    assert!(serde_json::from_str::<ScaleFactor>("-1.1").is_err());
}

#[test]
fn placement_is_scaled_top_left() {
    let s = ScaleFactor::DEFAULT;
    assert_eq!(
        Offset::from_placement(65.0, 1460.0, s).unwrap(),
        Offset::new(71, 1606)
    );
    assert_eq!(Offset::from_placement(0.0, 0.0, s).unwrap(), Offset::new(0, 0));
    assert_eq!(
        Offset::from_placement(10.0, 50.0, s).unwrap(),
        Offset::new(11, 55)
    );
}

#[test]
fn placement_truncates_toward_zero() {
    let s = ScaleFactor::DEFAULT;
    // 3 * 1.1 = 3.3, -3 * 1.1 = -3.3
    assert_eq!(Offset::from_placement(3.0, -3.0, s).unwrap(), Offset::new(3, -3));
    assert_eq!(
        Offset::from_placement(-20.0, -20.0, s).unwrap(),
        Offset::new(-22, -22)
    );
}

#[test]
fn placement_rejects_non_finite() {
    let s = ScaleFactor::DEFAULT;
    let err = Offset::from_placement(f64::NAN, 1.0, s).unwrap_err();
    assert!(matches!(err, SigpasteError::InvalidInput(_)));
    assert!(Offset::from_placement(1.0, f64::INFINITY, s).is_err());
}

#[test]
fn scale_factor_serializes_as_bare_number() {
    let s = serde_json::to_string(&ScaleFactor::DEFAULT).unwrap();
    assert_eq!(s, "1.1");
    let back: ScaleFactor = serde_json::from_str("1.25").unwrap();
    assert_eq!(back.get(), 1.25);
}
