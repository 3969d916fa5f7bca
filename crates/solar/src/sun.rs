//! Solar coordinates, position, and rise/set times.
//!
//! Formulas follow the suncalc derivation
//! (<http://aa.quae.nl/en/reken/zonpositie.html>): mean anomaly and
//! equation of center give the ecliptic longitude, the solar transit and
//! hour angle give rise and set. Times are unix seconds; angles radians.

use crate::error::SolarError;
use crate::observer::Observer;

const RAD: f64 = std::f64::consts::PI / 180.0;
const J1970: f64 = 2_440_588.0;
const J2000: f64 = 2_451_545.0;
/// Transit correction baseline.
const J0: f64 = 0.0009;
/// Obliquity of the Earth.
const OBLIQUITY: f64 = RAD * 23.4397;
/// Sun altitude at rise/set: refraction plus solar disc radius.
const RISE_SET_ALTITUDE_DEG: f64 = -0.833;

/// Apparent equatorial coordinates of the sun, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

/// Sun position in the observer's sky, radians. Azimuth is measured
/// westward from south.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

fn to_julian(unix_seconds: i64) -> f64 {
    unix_seconds as f64 / 86_400.0 - 0.5 + J1970
}

fn from_julian(j: f64) -> i64 {
    ((j + 0.5 - J1970) * 86_400.0) as i64
}

fn to_days(unix_seconds: i64) -> f64 {
    to_julian(unix_seconds) - J2000
}

fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

fn ecliptic_longitude(m: f64) -> f64 {
    // Equation of center, then perihelion of the Earth.
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    let p = RAD * 102.9372;
    m + c + p + std::f64::consts::PI
}

fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * d) - lw
}

fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / std::f64::consts::TAU).round()
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / std::f64::consts::TAU + n
}

fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the sun reaches altitude `h`.
///
/// At polar latitudes the cosine leaves [-1, 1]: above it the sun never
/// gets that high (polar night), below it never gets that low (polar day).
fn hour_angle(h: f64, phi: f64, dec: f64) -> Result<f64, SolarError> {
    let cos_h = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        return Err(SolarError::PolarNight);
    }
    if cos_h < -1.0 {
        return Err(SolarError::PolarDay);
    }
    Ok(cos_h.acos())
}

/// Altitude correction for an observer above sea level, radians.
fn observer_angle(elevation: f64) -> f64 {
    -2.076 * elevation.sqrt() / 60.0 * RAD
}

/// Sun coordinates at an instant.
pub fn coordinates(unix_seconds: i64) -> SunCoordinates {
    let d = to_days(unix_seconds);
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    SunCoordinates {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

/// Sun position in the observer's sky at an instant.
pub fn position(observer: Observer, unix_seconds: i64) -> SunPosition {
    let d = to_days(unix_seconds);
    let c = coordinates(unix_seconds);
    let lw = RAD * -observer.longitude();
    let phi = RAD * observer.latitude();
    let h = sidereal_time(d, lw) - c.right_ascension;
    SunPosition {
        azimuth: h.sin().atan2(h.cos() * phi.sin() - c.declination.tan() * phi.cos())
            + std::f64::consts::PI,
        altitude: (phi.sin() * c.declination.sin()
            + phi.cos() * c.declination.cos() * h.cos())
        .asin(),
    }
}

/// Rise and set times, unix seconds, for the day starting at
/// `unix_midnight`.
fn rise_set(observer: Observer, unix_midnight: i64) -> Result<(i64, i64), SolarError> {
    let d = to_days(unix_midnight);
    let lw = RAD * -observer.longitude();
    let phi = RAD * observer.latitude();
    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);
    let j_noon = solar_transit_j(ds, m, l);

    let h0 = RISE_SET_ALTITUDE_DEG * RAD + observer_angle(observer.elevation());
    let w = hour_angle(h0, phi, dec)?;
    let j_set = solar_transit_j(approx_transit(w, lw, n), m, l);
    let j_rise = j_noon - (j_set - j_noon);
    Ok((from_julian(j_rise), from_julian(j_set)))
}

/// Sunrise, unix seconds, for the day starting at `unix_midnight`.
///
/// # Errors
///
/// Returns [`SolarError::PolarNight`] or [`SolarError::PolarDay`] when the
/// sun does not cross the horizon that day.
pub fn sunrise(observer: Observer, unix_midnight: i64) -> Result<i64, SolarError> {
    Ok(rise_set(observer, unix_midnight)?.0)
}

/// Sunset, unix seconds, for the day starting at `unix_midnight`.
///
/// # Errors
///
/// Same conditions as [`sunrise`].
pub fn sunset(observer: Observer, unix_midnight: i64) -> Result<i64, SolarError> {
    Ok(rise_set(observer, unix_midnight)?.1)
}
