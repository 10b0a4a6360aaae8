use crate::{latlon::LatLon, utility::{dms, GeoMath}, Error, ParseCoord, ThisOrThat, projections::transverse_mercator::TransverseMercator, constants::UTM_FALSE_EASTING};

pub mod zonespec {
    pub const MINUTMZONE: i32 = 1;
    pub const MAXUTMZONE: i32 = 60;
}

// Nominal coordinate ranges in meters; checks below allow SLOP on either side
const MIN_EASTING: f64 = 100_000.;
const MAX_EASTING: f64 = 900_000.;
const MIN_NORTHING: f64 = 0.;
const MAX_NORTHING: f64 = 9_500_000.;
const SLOP: f64 = 100_000.;

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point, using the northern-hemisphere convention: the northing is the
/// distance in meters from the equator with no false northing applied.
/// Southern-hemisphere coordinates (false northing 10,000,000 m) are not
/// representable.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmCoord {
    pub(crate) zone: i32,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UtmCoord {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, easting: f64, northing: f64) -> UtmCoord {
        Self {
            zone,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidUtmCoords`] if the easting or northing is
    /// non-finite or outside its valid range.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::UtmCoord;
    ///
    /// let coord = UtmCoord::create(18, 585664.121, 4511315.422);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 18);
    /// assert!((coord.easting() - 585664.121).abs() < 1e-3);
    /// assert!((coord.northing() - 4511315.422).abs() < 1e-3);
    ///
    /// let invalid_coord_zone_zero = UtmCoord::create(0, 585664.121, 4511315.422);
    /// assert!(invalid_coord_zone_zero.is_err());
    ///
    /// let invalid_coord_zone_too_big = UtmCoord::create(70, 585664.121, 4511315.422);
    /// assert!(invalid_coord_zone_too_big.is_err());
    ///
    /// let invalid_coord_easting = UtmCoord::create(18, f64::NAN, 4511315.422);
    /// assert!(invalid_coord_easting.is_err());
    /// ```
    pub fn create(zone: i32, easting: f64, northing: f64) -> Result<UtmCoord, Error> {
        // Make sure zone is a valid value
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        check_coords(easting, northing)?;

        Ok(UtmCoord::new(zone, easting, northing))
    }

    /// Returns the UTM zone.
    ///
    /// # Example
    /// ```
    /// use utmconvert::UtmCoord;
    ///
    /// let coord = UtmCoord::create(18, 585664.121, 4511315.422).unwrap();
    /// assert_eq!(coord.zone(), 18);
    /// ```
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns the UTM easting.
    ///
    /// # Example
    /// ```
    /// use utmconvert::UtmCoord;
    ///
    /// let coord = UtmCoord::create(18, 585664.121, 4511315.422).unwrap();
    /// assert!((coord.easting() - 585664.121).abs() < 1e-3);
    /// ```
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing.
    ///
    /// # Example
    /// ```
    /// use utmconvert::UtmCoord;
    ///
    /// let coord = UtmCoord::create(18, 585664.121, 4511315.422).unwrap();
    /// assert!((coord.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`UtmCoord`], deriving the zone from the
    /// longitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the latitude is outside the range
    /// `[0, 84]` covered by the northern-hemisphere UTM convention.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, UtmCoord};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    ///
    /// let converted = UtmCoord::from_latlon(&coord).unwrap();
    ///
    /// assert_eq!(converted.zone(), 18);
    /// // Check if the converted coordinate is accurate to 3 decimals (same as reference)
    /// assert!((converted.easting() - 585664.121).abs() < 1e-3);
    /// assert!((converted.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Result<UtmCoord, Error> {
        if !value.is_north() {
            return Err(Error::InvalidCoord(format!(
                "Latitude {} is south of the equator, which the northern-hemisphere UTM convention cannot represent",
                value.latitude(),
            )));
        }
        if value.latitude() > 84. {
            return Err(Error::InvalidCoord(format!(
                "Latitude {} is north of the UTM band limit 84",
                value.latitude(),
            )));
        }

        let zone = zone_from_longitude(value.longitude());
        let lon0 = central_meridian(zone);

        let (x, y) = TransverseMercator::utm().from_latlon(lon0, value.latitude(), value.longitude());

        Ok(UtmCoord::new(zone, x + UTM_FALSE_EASTING, y))
    }

    /// Converts from [`UtmCoord`] to [`LatLon`].
    ///
    /// The conversion is pure arithmetic and does not clamp its result: a
    /// coordinate deserialized from meaningless values can produce a
    /// latitude/longitude outside the valid ranges. Re-validate with
    /// [`LatLon::create`] when the input is not trusted.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, UtmCoord};
    ///
    /// let coord_utm = UtmCoord::create(18, 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = coord_utm.to_latlon();
    ///
    /// // Check if the converted coordinate is accurate to 5 decimals (same as reference)
    /// assert!((converted.latitude() - 40.748333).abs() < 1e-5);
    /// assert!((converted.longitude() - -73.985278).abs() < 1e-5);
    /// ```
    ///
    /// A point on the central meridian at the equator maps back exactly:
    ///
    /// ```
    /// use utmconvert::UtmCoord;
    ///
    /// let coord = UtmCoord::create(32, 500_000.0, 0.0).unwrap().to_latlon();
    ///
    /// assert_eq!(coord.latitude(), 0.0);
    /// assert_eq!(coord.longitude(), 9.0);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let x = self.easting - UTM_FALSE_EASTING;

        TransverseMercator::utm().to_latlon(central_meridian(self.zone), x, self.northing)
    }
}

/// Returns the central meridian of a UTM zone in degrees, `6 * zone - 183`.
///
/// # Example
/// ```
/// use utmconvert::utm::central_meridian;
///
/// assert_eq!(central_meridian(31), 3.0);
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    6.0 * f64::from(zone) - 183.
}

/// Returns the UTM zone containing a longitude (degrees).
///
/// # Example
/// ```
/// use utmconvert::utm::zone_from_longitude;
///
/// assert_eq!(zone_from_longitude(3.3792), 31);
/// assert_eq!(zone_from_longitude(-73.985278), 18);
/// assert_eq!(zone_from_longitude(180.0), 1);
/// ```
pub fn zone_from_longitude(lon: f64) -> i32 {
    let mut lon = lon.ang_normalize();
    // The antimeridian belongs to zone 1
    if lon.eps_eq(f64::from(dms::HD)) {
        lon = f64::from(-dms::HD);
    }

    let zone = ((lon + f64::from(dms::HD)) / 6.).floor() as i32 + 1;

    (zone > zonespec::MAXUTMZONE).ternary(zonespec::MAXUTMZONE, zone)
}

pub(crate) fn check_coords(x: f64, y: f64) -> Result<(), Error> {
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::InvalidUtmCoords(
            format!("Easting and northing must be finite, got ({x}, {y})")
        ));
    }

    if x < MIN_EASTING - SLOP || x > MAX_EASTING + SLOP {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Easting {:.2}km not in UTM range [{:.2}km, {:.2}km]",
                x / 1000.0,
                (MIN_EASTING - SLOP) / 1000.0,
                (MAX_EASTING + SLOP) / 1000.0,
            )
        ));
    }

    if y < MIN_NORTHING - SLOP || y > MAX_NORTHING + SLOP {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Northing {:.2}km not in UTM range for the N hemisphere [{:.2}km, {:.2}km]",
                y / 1000.0,
                (MIN_NORTHING - SLOP) / 1000.0,
                (MAX_NORTHING + SLOP) / 1000.0,
            )
        ));
    }

    Ok(())
}

impl ParseCoord for UtmCoord {
    /// Parses a UTM point from a `"zone easting northing"` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtmCoords`] if the string does not have
    /// exactly three numeric fields, or the parsed values fail the checks in
    /// [`UtmCoord::create`].
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value.split_whitespace();

        let zone = pieces
            .next()
            .ok_or_else(|| Error::InvalidUtmCoords(format!("Missing zone in '{value}'")))?
            .parse::<i32>()
            .map_err(|e| Error::InvalidUtmCoords(format!("Invalid zone in '{value}': {e}")))?;
        let easting = pieces
            .next()
            .ok_or_else(|| Error::InvalidUtmCoords(format!("Missing easting in '{value}'")))?
            .parse::<f64>()
            .map_err(|e| Error::InvalidUtmCoords(format!("Invalid easting in '{value}': {e}")))?;
        let northing = pieces
            .next()
            .ok_or_else(|| Error::InvalidUtmCoords(format!("Missing northing in '{value}'")))?
            .parse::<f64>()
            .map_err(|e| Error::InvalidUtmCoords(format!("Invalid northing in '{value}': {e}")))?;

        if pieces.next().is_some() {
            return Err(Error::InvalidUtmCoords(
                format!("Trailing fields after northing in '{value}'")
            ));
        }

        UtmCoord::create(zone, easting, northing)
    }
}

impl std::fmt::Display for UtmCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.zone,
            self.easting,
            self.northing
        )
    }
}
