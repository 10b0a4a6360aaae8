use approx::assert_abs_diff_eq;

use utmconvert::{from_str, utm::central_meridian, LatLon, UtmCoord};

/// (zone, easting, northing, latitude, longitude), reference values computed
/// with an independent implementation of the same series expansion.
const FIXTURES: &[(i32, f64, f64, f64, f64)] = &[
    (18, 585664.121, 4511315.422, 40.7483320371319, -73.98527800441373),    // New York
    (31, 541924.301, 721189.217, 6.524399992620643, 3.379199996391602),     // Lagos
    (33, 391779.259, 5820072.160, 52.51999482976204, 13.404999995977901),   // Berlin
    (54, 381622.230, 3950298.908, 35.68949733804039, 139.69169999954386),   // Tokyo
    (30, 448251.795, 5411932.678, 48.85819979264122, -3.705500002841731),   // Brittany
    (1, 477745.804, 55265.376, 0.4999999991550429, -177.19999999675466),    // near the antimeridian
    (35, 423669.343, 7767125.172, 69.9999926419678, 25.000000009482147),    // Nordkapp
    (60, 511374.207, 9272364.632, 83.49999990477095, 177.90000001131634),   // far north, zone 60
];

#[test]
fn conversion_accuracy() {
    let errors = FIXTURES
        .iter()
        .map(|&(zone, easting, northing, lat, lon)| {
            let coord = UtmCoord::create(zone, easting, northing)
                .unwrap()
                .to_latlon();
            let reference = LatLon::create(lat, lon).unwrap();

            coord.haversine(&reference)
        });

    // Check if any difference against the reference exceeds 1mm
    let significant_errors = errors
        .clone()
        .filter(|dist| *dist > 1e-3);

    let count = errors.clone().count();
    let sum: f64 = errors.sum();

    println!("Average error: {}", sum / count as f64);

    assert_eq!(significant_errors.count(), 0);
}

#[test]
fn round_trip() {
    let points = [
        (40.748333, -73.985278),
        (6.5244, 3.3792),
        (52.52, 13.405),
        (35.6895, 139.6917),
        (0.5, -177.2),
        (70.0, 25.0),
        (83.5, 177.9),
    ];

    for (lat, lon) in points {
        let coord = LatLon::create(lat, lon)
            .unwrap()
            .to_utm()
            .unwrap()
            .to_latlon();

        assert_abs_diff_eq!(coord.latitude(), lat, epsilon = 1e-5);
        assert_abs_diff_eq!(coord.longitude(), lon, epsilon = 1e-5);
    }
}

#[test]
fn central_meridian_invariant() {
    // A point on the central meridian at the equator converts exactly, for
    // every zone
    for zone in 1..=60 {
        let coord = UtmCoord::create(zone, 500_000.0, 0.0)
            .unwrap()
            .to_latlon();

        assert_eq!(coord.latitude(), 0.0);
        assert_eq!(coord.longitude(), central_meridian(zone));
    }

    assert_eq!(central_meridian(1), -177.0);
    assert_eq!(central_meridian(60), 177.0);
}

#[test]
fn latitude_monotone_in_northing() {
    let mut prev = f64::NEG_INFINITY;

    for northing in (0..=9_300_000).step_by(100_000) {
        let coord = UtmCoord::create(32, 450_000.0, f64::from(northing))
            .unwrap()
            .to_latlon();

        assert!(
            coord.latitude() > prev,
            "latitude {} at northing {northing} not above {prev}",
            coord.latitude(),
        );
        prev = coord.latitude();
    }
}

#[test]
fn longitude_symmetric_about_central_meridian() {
    for northing in [500_000.0, 3_200_000.0, 7_000_000.0] {
        for departure in [10_000.0, 125_000.0, 250_000.0] {
            let east = UtmCoord::create(32, 500_000.0 + departure, northing)
                .unwrap()
                .to_latlon();
            let west = UtmCoord::create(32, 500_000.0 - departure, northing)
                .unwrap()
                .to_latlon();

            assert_abs_diff_eq!(
                east.longitude() - 9.0,
                9.0 - west.longitude(),
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(east.latitude(), west.latitude(), epsilon = 1e-9);
        }
    }
}

#[test]
fn rejects_invalid_zones() {
    assert!(UtmCoord::create(0, 500_000.0, 1_000_000.0).is_err());
    assert!(UtmCoord::create(-3, 500_000.0, 1_000_000.0).is_err());
    assert!(UtmCoord::create(61, 500_000.0, 1_000_000.0).is_err());
}

#[test]
fn rejects_invalid_coords() {
    assert!(UtmCoord::create(32, f64::NAN, 1_000_000.0).is_err());
    assert!(UtmCoord::create(32, 500_000.0, f64::INFINITY).is_err());
    assert!(UtmCoord::create(32, 2_000_000.0, 1_000_000.0).is_err());
    assert!(UtmCoord::create(32, 500_000.0, -300_000.0).is_err());
}

#[test]
fn rejects_unsupported_latitudes() {
    // Southern hemisphere has no representation without a false northing
    let southern = LatLon::create(-33.9249, 18.4241).unwrap();
    assert!(southern.to_utm().is_err());

    // North of the UTM band limit
    let polar = LatLon::create(85.0, 10.0).unwrap();
    assert!(polar.to_utm().is_err());
}

#[test]
fn parses_coordinate_strings() {
    let coord: UtmCoord = from_str("31 541924.301 721189.217").unwrap();
    assert_eq!(coord.zone(), 31);
    assert_abs_diff_eq!(coord.easting(), 541_924.301);
    assert_abs_diff_eq!(coord.northing(), 721_189.217);

    let coord: LatLon = from_str("6.5244 3.3792").unwrap();
    assert_abs_diff_eq!(coord.latitude(), 6.5244);
    assert_abs_diff_eq!(coord.longitude(), 3.3792);

    assert!(from_str::<_, UtmCoord>("31 541924.301").is_err());
    assert!(from_str::<_, UtmCoord>("zone 541924.301 721189.217").is_err());
    assert!(from_str::<_, UtmCoord>("31 541924.301 721189.217 extra").is_err());
    assert!(from_str::<_, LatLon>("91.0 3.3792").is_err());
    assert!(from_str::<_, LatLon>("").is_err());
}
