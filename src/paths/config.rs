//! Placement options for output path resolution

use serde::{Deserialize, Serialize};

/// Where resolved output files are placed.
///
/// Both fields are optional and independent. An empty string counts as
/// absent for either field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementOptions {
    /// Root directory for emitted files. Absent means in-place placement.
    #[serde(default, alias = "outputDirectory", skip_serializing_if = "Option::is_none")]
    pub outdir: Option<String>,

    /// Prefix stripped from every input before it is relocated under `outdir`.
    /// Absent means the batch's common directory prefix is used.
    #[serde(default, alias = "outputBase", skip_serializing_if = "Option::is_none")]
    pub outbase: Option<String>,
}

impl PlacementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outdir(mut self, outdir: impl Into<String>) -> Self {
        self.outdir = Some(outdir.into());
        self
    }

    pub fn with_outbase(mut self, outbase: impl Into<String>) -> Self {
        self.outbase = Some(outbase.into());
        self
    }

    /// True when outputs are written beside their inputs
    pub fn is_in_place(&self) -> bool {
        self.outdir.as_deref().map_or(true, str::is_empty)
    }

    /// The output base, if one was given and is not empty
    pub fn explicit_base(&self) -> Option<&str> {
        self.outbase.as_deref().filter(|base| !base.is_empty())
    }

    /// Layer `overrides` on top of `self`, field by field.
    pub fn merge(self, overrides: PlacementOptions) -> Self {
        Self {
            outdir: overrides.outdir.or(self.outdir),
            outbase: overrides.outbase.or(self.outbase),
        }
    }

    /// Non-fatal problems with this combination of options
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.is_in_place() {
            if let Some(base) = self.explicit_base() {
                warnings.push(format!(
                    "outbase '{}' has no effect without an output directory",
                    base
                ));
            }
        }
        warnings
    }

    /// Parse options from a JSON document such as `{"outdir": "dist"}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
