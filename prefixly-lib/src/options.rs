use crate::error::{PrefixlyError, Result};
use serde::Deserialize;
use std::path::Path;

/// Options accepted by [`crate::plugin::Prefixly::new`].
///
/// These describe pixel to resolution-independent unit conversion. The plugin
/// stores them but prefix expansion never reads them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrefixlyOptions {
    /// Root font-size all conversions are based on.
    pub base_size: Option<f64>,
    /// Unit used for resolution-independent measurements, e.g. `rem`.
    pub ri_unit: Option<String>,
    /// Unit that gets converted to `ri_unit`, e.g. `px`.
    pub unit: Option<String>,
    /// Unit that is converted 1:1 to `unit` instead of being scaled.
    pub absolute_unit: Option<String>,
    /// Smallest absolute size a measurement may shrink to.
    pub min_unit_size: Option<f64>,
    /// Root font-size at the lowest supported device resolution.
    pub min_size: Option<f64>,
    /// Maximum fractional digits in converted measurements.
    pub precision: Option<u32>,
}

impl PrefixlyOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PrefixlyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
