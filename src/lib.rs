#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod latlon;
pub mod utm;
pub mod utility;

pub use latlon::LatLon;
pub use utm::UtmCoord;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("UTM zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an [`Error`] describing which part of the string failed to
    /// parse as a coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses a coordinate from its whitespace-separated string form.
///
/// # Errors
///
/// Returns an [`Error`] if the string is not a valid coordinate of type `T`.
///
/// # Usage
///
/// ```
/// use utmconvert::{from_str, LatLon, UtmCoord};
///
/// let coord: UtmCoord = from_str("31 541924.301 721189.217").unwrap();
/// assert_eq!(coord.zone(), 31);
///
/// let coord: LatLon = from_str("6.5244 3.3792").unwrap();
/// assert_eq!(coord.latitude(), 6.5244);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
