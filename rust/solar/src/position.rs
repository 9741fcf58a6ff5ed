// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sun position
//!
//! Altitude/azimuth angles and a cartesian direction for placing a sun in a
//! 3D scene. Axis convention matches the viewer: x east, y up, z south
//! (north is negative z).

use chrono::{Datelike, NaiveDateTime};

use crate::zenith::{cos_zenith, hour_angle_deg, Site, SolarConfig};

/// Sun position in horizontal coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Degrees above the horizon; negative at night
    pub altitude_deg: f64,
    /// Degrees clockwise from north, 0..360
    pub azimuth_deg: f64,
}

impl SunPosition {
    /// Compute the sun position for a site and local time
    pub fn compute(site: &Site, at: NaiveDateTime, config: &SolarConfig) -> Self {
        let cos_theta = cos_zenith(site, at, config).clamp(-1.0, 1.0);
        let altitude_rad = cos_theta.asin();

        let decl_rad = config
            .declination
            .declination_deg(at.ordinal())
            .to_radians();
        let lat_rad = site.latitude_deg.to_radians();

        let denom = altitude_rad.cos() * lat_rad.cos();
        let azimuth_deg = if denom.abs() < 1e-9 {
            // Sun at the zenith or observer at a pole: azimuth is
            // ill-defined, pick due south.
            180.0
        } else {
            let cos_az = ((decl_rad.sin() - altitude_rad.sin() * lat_rad.sin()) / denom)
                .clamp(-1.0, 1.0);
            let from_north = cos_az.acos().to_degrees();
            if hour_angle_deg(site, at, config.longitude_correction) > 0.0 {
                360.0 - from_north
            } else {
                from_north
            }
        };

        Self {
            altitude_deg: altitude_rad.to_degrees(),
            azimuth_deg,
        }
    }

    /// Cartesian position at distance `radius`: x east, y up, z south
    pub fn cartesian(&self, radius: f64) -> [f64; 3] {
        let altitude = self.altitude_deg.to_radians();
        let azimuth = self.azimuth_deg.to_radians();
        [
            radius * altitude.cos() * azimuth.sin(),
            radius * altitude.sin(),
            -radius * altitude.cos() * azimuth.cos(),
        ]
    }
}

/// Sun direction for a site and local time, at distance `radius`
pub fn sun_direction(
    site: &Site,
    at: NaiveDateTime,
    config: &SolarConfig,
    radius: f64,
) -> [f64; 3] {
    SunPosition::compute(site, at, config).cartesian(radius)
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
    fn test_noon_sun_high_and_southish() {
        // Winter noon: sun well south of a northern-hemisphere site
        let noon = parse_timestamp("2024-12-21 12:00:00").unwrap();
        let pos = SunPosition::compute(&AHMEDABAD, noon, &SolarConfig::default());
        assert!(pos.altitude_deg > 40.0, "got {}", pos.altitude_deg);
        assert_relative_eq!(pos.azimuth_deg, 180.0, epsilon = 0.5);
    }

    #[test]
    fn test_morning_sun_in_the_east() {
        let morning = parse_timestamp("2024-03-20 08:00:00").unwrap();
        let pos = SunPosition::compute(&AHMEDABAD, morning, &SolarConfig::default());
        assert!(pos.azimuth_deg < 180.0, "got {}", pos.azimuth_deg);

        let [x, _, _] = pos.cartesian(100.0);
        assert!(x > 0.0, "morning sun should sit east, got x = {x}");
    }

    #[test]
    fn test_afternoon_sun_in_the_west() {
        let afternoon = parse_timestamp("2024-03-20 16:00:00").unwrap();
        let pos = SunPosition::compute(&AHMEDABAD, afternoon, &SolarConfig::default());
        assert!(pos.azimuth_deg > 180.0, "got {}", pos.azimuth_deg);

        let [x, _, _] = pos.cartesian(100.0);
        assert!(x < 0.0, "afternoon sun should sit west, got x = {x}");
    }

    #[test]
    fn test_night_sun_below_horizon() {
        let midnight = parse_timestamp("2024-06-21 00:00:00").unwrap();
        let pos = SunPosition::compute(&AHMEDABAD, midnight, &SolarConfig::default());
        assert!(pos.altitude_deg < 0.0);

        let [_, y, _] = pos.cartesian(100.0);
        assert!(y < 0.0);
    }

    #[test]
    fn test_cartesian_radius_preserved() {
        let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
        let [x, y, z] = sun_direction(&AHMEDABAD, noon, &SolarConfig::default(), 100.0);
        let r = (x * x + y * y + z * z).sqrt();
        assert_relative_eq!(r, 100.0, epsilon = 1e-9);
    }
}
