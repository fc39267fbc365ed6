use steel_atlas::catalog::SteelCatalog;
use steel_atlas::heat_treat::{
    interpolate, parse_curve, serialize_curve, simulate, CurvePoint, TemperatureUnit,
    TemperingCurve,
};

#[test]
fn catalog_curves_parse_in_ascending_order() {
    let catalog = SteelCatalog::bundled().expect("bundled catalog parses");
    let mut curves = 0;
    for steel in catalog.all() {
        let curve = TemperingCurve::for_steel(steel);
        if steel.ht_curve.is_some() {
            assert!(!curve.is_empty(), "{} has an unparseable curve", steel.id);
            curves += 1;
        }
        assert!(curve
            .points()
            .windows(2)
            .all(|pair| pair[0].temperature <= pair[1].temperature));
    }
    assert!(curves > 10);
}

#[test]
fn tempering_softens_the_steel() {
    let catalog = SteelCatalog::bundled().expect("bundled catalog parses");
    let magnacut = catalog.get("cpm-magnacut").expect("magnacut present");
    let curve = TemperingCurve::for_steel(magnacut);

    let low = curve.hardness_at(160.0);
    let high = curve.hardness_at(350.0);
    assert!(low > high);
    assert_eq!(curve.hardness_at(100.0), 64.0);
    assert_eq!(curve.hardness_at(900.0), 60.5);
}

#[test]
fn documented_curve_examples() {
    assert_eq!(
        parse_curve("200:60,300:58,100:62"),
        vec![
            CurvePoint::new(100.0, 62.0),
            CurvePoint::new(200.0, 60.0),
            CurvePoint::new(300.0, 58.0),
        ]
    );

    let points = parse_curve("200:60,400:58");
    assert_eq!(interpolate(&points, 300.0), 59.0);
    assert_eq!(interpolate(&points, 50.0), 60.0);
    assert_eq!(interpolate(&points, 500.0), 58.0);
    assert_eq!(interpolate(&[], 123.0), 0.0);
}

#[test]
fn unsorted_decimal_curves_survive_a_round_trip() {
    let points = parse_curve("315:58.5,150:61,260:59.25");
    let reparsed = parse_curve(&serialize_curve(&points));
    assert_eq!(reparsed, points);
    assert_eq!(reparsed[0].temperature, 150.0);
}

#[test]
fn simulator_accepts_fahrenheit_queries() {
    let catalog = SteelCatalog::bundled().expect("bundled catalog parses");
    let aebl = catalog.get("aeb-l").expect("aeb-l present");

    // 392°F is 200°C, a point on the curve.
    let reading = simulate(aebl, 392.0, TemperatureUnit::Fahrenheit);
    let hardness = reading.hardness_hrc.expect("curve present");
    assert!((hardness - 60.0).abs() < 1e-9);
    assert_eq!(reading.unit, TemperatureUnit::Fahrenheit);
    assert!(!reading.clamped);
}
