use lazy_static::lazy_static;

use crate::{latlon::LatLon, utility::{polyval, GeoMath}, constants::{WGS84_A, WGS84_E, WGS84_E1SQ, UTM_K0}};

// ================================
// Transverse Mercator Constants
// ================================

const A: f64 = WGS84_A;
const E: f64 = WGS84_E;
const E2: f64 = E * E;
const E2M: f64 = 1. - E2;

// Rectifying-radius factor 1 - e^2/4 - 3e^4/64 - 5e^6/256,
// polynomial in e^2 of order 3
const M0_COEFF: [f64; 4] = [-5. / 256., -3. / 64., -1. / 4., 1.];
// Meridian-arc sin(2*phi) factor 3e^2/8 + 3e^4/32 + 45e^6/1024
const M1_COEFF: [f64; 4] = [45. / 1024., 3. / 32., 3. / 8., 0.];
// Meridian-arc sin(4*phi) factor 15e^4/256 + 45e^6/1024
const M2_COEFF: [f64; 4] = [45. / 1024., 15. / 256., 0., 0.];
// Meridian-arc sin(6*phi) factor 35e^6/3072
const M3_COEFF: [f64; 4] = [35. / 3072., 0., 0., 0.];

lazy_static! {
    static ref UTM_PROJECTION: TransverseMercator = TransverseMercator::new();
}

pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e: f64,
    e1sq: f64,
    /// Rectifying radius, the meridian arc length per radian of
    /// rectifying latitude
    a0: f64,
    /// Inverse meridian-arc (footpoint latitude) series coefficients,
    /// polynomials in the third flattening
    ca: f64,
    cb: f64,
    cc: f64,
    cd: f64,
    /// Forward meridian-arc series coefficients
    m1: f64,
    m2: f64,
    m3: f64,
}

impl TransverseMercator {
    fn new() -> TransverseMercator {
        // Third flattening, (1 - b/a) / (1 + b/a)
        let e1 = (1. - E2M.sqrt()) / (1. + E2M.sqrt());

        let ca = 3. * e1 / 2. - 27. * e1.powi(3) / 32.;
        let cb = 21. * e1.powi(2) / 16. - 55. * e1.powi(4) / 32.;
        let cc = 151. * e1.powi(3) / 96.;
        let cd = 1097. * e1.powi(4) / 512.;

        Self {
            a: WGS84_A,
            k0: UTM_K0,
            e: E,
            e1sq: WGS84_E1SQ,
            a0: A * polyval(&M0_COEFF, E2),
            ca,
            cb,
            cc,
            cd,
            m1: polyval(&M1_COEFF, E2),
            m2: polyval(&M2_COEFF, E2),
            m3: polyval(&M3_COEFF, E2),
        }
    }

    pub fn utm() -> &'static TransverseMercator {
        &UTM_PROJECTION
    }

    /// Inverse projection. `x` is the easting offset from the central
    /// meridian `lon0` (degrees), `y` the northing from the equator, both
    /// in meters. Northern-hemisphere convention: no false northing.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> LatLon {
        // Footpoint latitude from the meridional arc implied by the northing
        let arc = y / self.k0;
        let mu = arc / self.a0;

        let phi1 = mu
            + self.ca * (2. * mu).sin()
            + self.cb * (4. * mu).sin()
            + self.cc * (6. * mu).sin()
            + self.cd * (8. * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        // Radii of curvature at the footpoint latitude: n0 in the prime
        // vertical, r0 along the meridian
        let w = 1. - (self.e * sin_phi1).powi(2);
        let n0 = self.a / w.sqrt();
        let r0 = self.a * E2M / w.powf(1.5);

        let t0 = tan_phi1.powi(2);
        let q0 = self.e1sq * cos_phi1.powi(2);

        // Departure from the central meridian, normalized by the local
        // radius and scale
        let dd0 = x / (n0 * self.k0);

        let fact1 = n0 * tan_phi1 / r0;
        let fact2 = dd0.powi(2) / 2.;
        let fact3 = (5. + 3. * t0 + 10. * q0 - 4. * q0.powi(2) - 9. * self.e1sq)
            * dd0.powi(4) / 24.;
        let fact4 = (61. + 90. * t0 + 298. * q0 + 45. * t0.powi(2) - 252. * self.e1sq - 3. * q0.powi(2))
            * dd0.powi(6) / 720.;

        let lat = (phi1 - fact1 * (fact2 + fact3 + fact4)).to_degrees();

        let lof1 = dd0;
        let lof2 = (1. + 2. * t0 + q0) * dd0.powi(3) / 6.;
        let lof3 = (5. - 2. * q0 + 28. * t0 - 3. * q0.powi(2) + 8. * self.e1sq + 24. * t0.powi(2))
            * dd0.powi(5) / 120.;

        let dlon = ((lof1 - lof2 + lof3) / cos_phi1).to_degrees();

        LatLon {
            latitude: lat,
            longitude: (lon0 + dlon).ang_normalize(),
        }
    }

    /// Forward projection. Returns the easting offset from the central
    /// meridian `lon0` (degrees) and the northing from the equator, both in
    /// meters, without the false easting applied.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat.to_radians();
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = self.a / (1. - (self.e * sin_phi).powi(2)).sqrt();
        let t = tan_phi.powi(2);
        let c = self.e1sq * cos_phi.powi(2);
        let aa = (lon - lon0).ang_normalize().to_radians() * cos_phi;

        let arc = self.meridian_arc(phi);

        let x = self.k0 * n * (
            aa
            + (1. - t + c) * aa.powi(3) / 6.
            + (5. - 18. * t + t.powi(2) + 72. * c - 58. * self.e1sq) * aa.powi(5) / 120.
        );

        let y = self.k0 * (
            arc + n * tan_phi * (
                aa.powi(2) / 2.
                + (5. - t + 9. * c + 4. * c.powi(2)) * aa.powi(4) / 24.
                + (61. - 58. * t + t.powi(2) + 600. * c - 330. * self.e1sq) * aa.powi(6) / 720.
            )
        );

        (x, y)
    }

    /// Meridian arc length from the equator to latitude `phi` (radians)
    fn meridian_arc(&self, phi: f64) -> f64 {
        self.a0 * phi
            - self.a * (
                self.m1 * (2. * phi).sin()
                - self.m2 * (4. * phi).sin()
                + self.m3 * (6. * phi).sin()
            )
    }
}
