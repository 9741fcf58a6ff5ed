// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration
//!
//! Everything the heat map depends on besides the mesh and the timestamp is
//! carried here explicitly: site, irradiance, efficiency, palette, solar
//! model and the MTL reference name. No ambient state.

use serde::{Deserialize, Serialize};
use solmap_solar::{Site, SolarConfig};

use crate::error::{Error, Result};

/// Default heat-map palette: warm yellow through dark red, 15 steps
pub const DEFAULT_PALETTE: [&str; 15] = [
    "#FFD700", "#FFA500", "#FF8C00", "#FF6347", "#FF4500", "#FF0000", "#E34234", "#CD5C5C",
    "#DC143C", "#B22222", "#8B0000", "#A52A2A", "#800000", "#660000", "#4B0000",
];

/// Heat-map pipeline configuration.
///
/// The band count equals the palette length; band `i` colors with palette
/// entry `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatMapConfig {
    /// Geographic site of the building
    pub site: Site,
    /// Irradiance scalar; the pipeline treats it as an opaque multiplier
    /// (typically kWh/m²/day)
    pub irradiance: f64,
    /// Panel efficiency fraction in (0, 1]
    pub efficiency: f64,
    /// Ordered hex palette, low band to high band
    pub palette: Vec<String>,
    /// Declination model and hour-angle policy
    pub solar: SolarConfig,
    /// Library name written into the `mtllib` directive
    pub mtl_name: String,
}

impl HeatMapConfig {
    /// Configuration with the default palette, efficiency and solar model
    pub fn new(site: Site, irradiance: f64) -> Self {
        Self {
            site,
            irradiance,
            efficiency: 0.15,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            solar: SolarConfig::default(),
            mtl_name: "heatmap.mtl".to_string(),
        }
    }

    /// Check the parts the numeric stages cannot check themselves
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::InvalidParameter {
                field: "palette",
                reason: "palette must have at least one color".to_string(),
            });
        }
        if self.mtl_name.is_empty() {
            return Err(Error::InvalidParameter {
                field: "mtl_name",
                reason: "material library name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
