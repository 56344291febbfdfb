//! Named parameter presets.
//!
//! A preset bundles raw pack parameters with the look settings that suit
//! them. Two ship built in: `retail` (tight shelf pack, soft light, cheap
//! geometry) and `warehouse` (breathing room between rolls, studio light,
//! full detail). User presets round-trip through JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RollpackError};
use crate::options::{DetailLevel, LightingPreset};
use crate::params::RawPackParams;

/// A named bundle of pack parameters and look settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Identifier used to select the preset.
    pub name: String,
    /// Raw parameters, sanitized when the preset is applied.
    pub params: RawPackParams,
    /// Light rig to switch to.
    pub lighting: LightingPreset,
    /// Geometry detail to build with.
    pub detail: DetailLevel,
}

impl Preset {
    /// Tight shelf pack: 1 mm gaps, soft light, flat-shell rolls.
    #[must_use]
    pub fn retail() -> Self {
        Self {
            name: "retail".to_string(),
            params: RawPackParams {
                gap_mm: 1.0,
                ..RawPackParams::default()
            },
            lighting: LightingPreset::Soft,
            detail: DetailLevel::FlatShell,
        }
    }

    /// Spaced warehouse pack: 7 mm gaps, studio light, fully detailed rolls.
    #[must_use]
    pub fn warehouse() -> Self {
        Self {
            name: "warehouse".to_string(),
            params: RawPackParams::default(),
            lighting: LightingPreset::Studio,
            detail: DetailLevel::BeveledWithCoreBore,
        }
    }

    /// All built-in presets, in display order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![Self::retail(), Self::warehouse()]
    }

    /// Looks up a built-in preset by name, case-insensitively.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        Self::builtin()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Parses a preset from JSON, rejecting unnamed presets.
    pub fn from_json(text: &str) -> Result<Self> {
        let preset: Self = serde_json::from_str(text)?;
        if preset.name.trim().is_empty() {
            return Err(RollpackError::InvalidPreset("preset name is empty".to_string()));
        }
        Ok(preset)
    }

    /// Serializes the preset to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::warehouse()
    }
}
