// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solar zenith angle
//!
//! cos(zenith) = sin(lat)·sin(decl) + cos(lat)·cos(decl)·cos(hour angle).
//! The hour angle comes in a simple wall-clock variant and a
//! longitude-corrected variant; which one applies is an explicit
//! configuration choice, never inferred.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::declination::DeclinationModel;

/// Geographic site, degrees north / east
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Site {
    /// Create a new site
    #[inline]
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Solar model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarConfig {
    /// Declination strategy
    pub declination: DeclinationModel,
    /// Convert wall-clock time to solar time using the offset between the
    /// site longitude and its standard meridian. Off by default: the plain
    /// wall-clock hour angle is the reference behavior for heat maps.
    pub longitude_correction: bool,
}

/// How to fold a raw cos(zenith) into an illumination factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IlluminationMode {
    /// Sun below the horizon contributes nothing: max(0, cosθ)
    ClampNight,
    /// Magnitude regardless of day or night: |cosθ|
    Absolute,
}

/// Fractional local hours since midnight
#[inline]
fn local_hours(at: NaiveDateTime) -> f64 {
    f64::from(at.hour()) + f64::from(at.minute()) / 60.0 + f64::from(at.second()) / 3600.0
}

/// Hour angle in degrees: 15° per hour from solar noon.
///
/// With `longitude_correction` the wall-clock time is first shifted by
/// 4 minutes per degree between the site longitude and the nearest
/// standard meridian (a multiple of 15°).
pub fn hour_angle_deg(site: &Site, at: NaiveDateTime, longitude_correction: bool) -> f64 {
    let mut hours = local_hours(at);
    if longitude_correction {
        let meridian = (site.longitude_deg / 15.0).round() * 15.0;
        let correction_minutes = 4.0 * (site.longitude_deg - meridian);
        hours += correction_minutes / 60.0;
    }
    15.0 * (hours - 12.0)
}

/// Raw cosine of the solar zenith angle; negative when the sun is below
/// the horizon.
pub fn cos_zenith(site: &Site, at: NaiveDateTime, config: &SolarConfig) -> f64 {
    let decl = config
        .declination
        .declination_deg(at.ordinal())
        .to_radians();
    let lat = site.latitude_deg.to_radians();
    let hour_angle = hour_angle_deg(site, at, config.longitude_correction).to_radians();

    lat.sin() * decl.sin() + lat.cos() * decl.cos() * hour_angle.cos()
}

/// Illumination factor: cos(zenith) folded per the requested mode.
///
/// `ClampNight` feeds the mesh heat map, where night means zero yield;
/// `Absolute` feeds instantaneous single-number estimates, which always
/// want a positive magnitude.
pub fn illumination(
    site: &Site,
    at: NaiveDateTime,
    config: &SolarConfig,
    mode: IlluminationMode,
) -> f64 {
    let cos_theta = cos_zenith(site, at, config);
    match mode {
        IlluminationMode::ClampNight => cos_theta.max(0.0),
        IlluminationMode::Absolute => cos_theta.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_timestamp;
    use approx::assert_relative_eq;

    const AHMEDABAD: Site = Site {
        latitude_deg: 23.030357,
        longitude_deg: 72.517845,
    };

    #[test]
    fn test_hour_angle_simple() {
        let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
        assert_relative_eq!(hour_angle_deg(&AHMEDABAD, noon, false), 0.0);

        let nine = parse_timestamp("2024-06-21 09:00:00").unwrap();
        assert_relative_eq!(hour_angle_deg(&AHMEDABAD, nine, false), -45.0);

        let half_past = parse_timestamp("2024-06-21 12:30:00").unwrap();
        assert_relative_eq!(hour_angle_deg(&AHMEDABAD, half_past, false), 7.5);
    }

    #[test]
    fn test_hour_angle_longitude_corrected() {
        // 72.518°E sits west of its 75° standard meridian, so solar noon
        // lags wall-clock noon: correction = 4·(72.518 − 75) ≈ −9.93 min.
        let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
        let corrected = hour_angle_deg(&AHMEDABAD, noon, true);
        assert_relative_eq!(corrected, -2.482155, epsilon = 1e-5);
    }

    #[test]
    fn test_overhead_sun_near_one() {
        // Summer solstice noon at a latitude close to the declination
        let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
        let factor = illumination(
            &AHMEDABAD,
            noon,
            &SolarConfig::default(),
            IlluminationMode::ClampNight,
        );
        assert!(factor > 0.99, "got {factor}");
    }

    #[test]
    fn test_night_clamps_to_zero() {
        let midnight = parse_timestamp("2024-06-21 00:00:00").unwrap();
        let clamped = illumination(
            &AHMEDABAD,
            midnight,
            &SolarConfig::default(),
            IlluminationMode::ClampNight,
        );
        assert_eq!(clamped, 0.0);

        let absolute = illumination(
            &AHMEDABAD,
            midnight,
            &SolarConfig::default(),
            IlluminationMode::Absolute,
        );
        assert!(absolute > 0.0);
    }

    #[test]
    fn test_factor_stays_in_unit_interval() {
        let config = SolarConfig::default();
        for lat in [-60.0, -23.0, 0.0, 23.0, 60.0] {
            for hour in ["00", "06", "09", "12", "15", "18", "21"] {
                for day in ["2024-03-20", "2024-06-21", "2024-12-21"] {
                    let site = Site::new(lat, 72.0);
                    let at = parse_timestamp(&format!("{day} {hour}:00:00")).unwrap();
                    for mode in [IlluminationMode::ClampNight, IlluminationMode::Absolute] {
                        let f = illumination(&site, at, &config, mode);
                        assert!((0.0..=1.0).contains(&f), "lat {lat} {day} {hour}h: {f}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_declination_models_give_close_factors() {
        let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
        let cosine = illumination(
            &AHMEDABAD,
            noon,
            &SolarConfig {
                declination: DeclinationModel::CosineDay10,
                longitude_correction: false,
            },
            IlluminationMode::ClampNight,
        );
        let sine = illumination(
            &AHMEDABAD,
            noon,
            &SolarConfig {
                declination: DeclinationModel::SineDay284,
                longitude_correction: false,
            },
            IlluminationMode::ClampNight,
        );
        assert_relative_eq!(cosine, sine, epsilon = 1e-3);
    }
}
