// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamp parsing
//!
//! Accepts the two layouts callers actually send: space-separated
//! `YYYY-MM-DD HH:MM:SS` and ISO-8601 `YYYY-MM-DDTHH:MM:SS`. The result is
//! a naive local time in the site's reference zone.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

const LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a local timestamp string
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    for layout in LAYOUTS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, layout) {
            return Ok(parsed);
        }
    }
    Err(Error::InvalidTimestamp {
        input: input.to_string(),
    })
}
