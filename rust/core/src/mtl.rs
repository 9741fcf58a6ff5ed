// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MTL material library generation
//!
//! One `newmtl`/`Kd` block per palette color plus the reserved border
//! material. Material positions match heat-map band indices, so band `i`
//! always resolves to `color_<i>`.

use std::fmt::Write as _;

use crate::error::{Error, Result};

/// Name of the reserved material used for synthesized border edges
pub const BORDER_MATERIAL: &str = "black_border";

/// Normalized RGB triple, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a new color
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Decode a 6-digit hex color (`#FFD700` or `FFD700`) into normalized RGB
pub fn parse_hex_color(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(input.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f64> {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| Error::InvalidColor(input.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Ordered material library: one color entry per band, border last.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: Vec<(String, Rgb)>,
}

impl MaterialLibrary {
    /// Build a library from an ordered hex palette.
    ///
    /// Entry `i` becomes `color_<i>`; the reserved black border material is
    /// always appended last, so the name list lines up with band indices.
    pub fn from_palette<S: AsRef<str>>(palette: &[S]) -> Result<Self> {
        let mut materials = Vec::with_capacity(palette.len() + 1);
        for (i, entry) in palette.iter().enumerate() {
            materials.push((format!("color_{i}"), parse_hex_color(entry.as_ref())?));
        }
        materials.push((BORDER_MATERIAL.to_string(), Rgb::default()));
        Ok(Self { materials })
    }

    /// Number of materials, border included
    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when the library holds no materials
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Ordered material names; position matches band index
    pub fn material_names(&self) -> Vec<String> {
        self.materials.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Iterate over (name, color) entries in band order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.materials.iter().map(|(name, rgb)| (name.as_str(), *rgb))
    }

    /// Serialize to MTL text.
    ///
    /// Diffuse channels are written with 4 decimals so that re-reading the
    /// output recovers every channel within 1/255.
    pub fn to_mtl_string(&self) -> String {
        let mut out = String::with_capacity(self.materials.len() * 32);
        for (name, rgb) in &self.materials {
            let _ = writeln!(out, "newmtl {name}");
            let _ = writeln!(out, "Kd {:.4} {:.4} {:.4}", rgb.r, rgb.g, rgb.b);
        }
        out
    }

    /// Parse MTL text produced by [`to_mtl_string`](Self::to_mtl_string).
    ///
    /// Only `newmtl` and `Kd` directives are interpreted.
    pub fn parse(source: &str) -> Result<Self> {
        let mut materials: Vec<(String, Rgb)> = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            if let Some(name) = line.strip_prefix("newmtl ") {
                materials.push((name.trim().to_string(), Rgb::default()));
            } else if let Some(payload) = line.strip_prefix("Kd ") {
                let current = materials
                    .last_mut()
                    .ok_or(Error::InvalidMaterial { line: line_no })?;
                let mut channels = [0.0f64; 3];
                let mut fields = payload.split_whitespace();
                for channel in channels.iter_mut() {
                    let field = fields.next().ok_or(Error::InvalidMaterial { line: line_no })?;
                    *channel = fast_float::parse(field)
                        .map_err(|_| Error::InvalidMaterial { line: line_no })?;
                }
                current.1 = Rgb::new(channels[0], channels[1], channels[2]);
            }
        }
        Ok(Self { materials })
    }
}
