// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// First eccentricity
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_E: f64 = 0.081819191;
// Second eccentricity squared, e^2 / (1 - e^2)
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_E1SQ: f64 = 0.006739497;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// UTM false easting in meters
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
