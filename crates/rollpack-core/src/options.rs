//! Configuration options for the pack viewer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Global configuration options for a pack viewer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Canvas background behind the pack.
    pub background: BackgroundMode,

    /// Which light rig to illuminate the pack with.
    pub lighting: LightingPreset,

    /// Geometric detail used when building each roll.
    pub detail: DetailLevel,

    /// Radial segments for the large outer shell surface.
    pub shell_segments: u32,

    /// Radial segments for small detail parts (bevels, seams, cores).
    pub detail_segments: u32,

    /// Upper bound a renderer should apply to the device pixel ratio.
    pub max_pixel_ratio: f32,

    /// Whether to surface the live camera pose read-out.
    pub show_camera_debug: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            background: BackgroundMode::default(),
            lighting: LightingPreset::Studio,
            detail: DetailLevel::BeveledWithCoreBore,
            shell_segments: 64,
            detail_segments: 48,
            max_pixel_ratio: 2.0,
            show_camera_debug: true,
        }
    }
}

impl ViewOptions {
    /// Loads options from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Saves options to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Canvas background behind the pack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BackgroundMode {
    /// Fully transparent; the page behind shows through.
    Transparent,
    /// A solid color fill.
    Solid(Vec3),
}

impl Default for BackgroundMode {
    fn default() -> Self {
        // Warm paper-white studio backdrop.
        Self::Solid(Vec3::new(0.910, 0.894, 0.855))
    }
}

/// Which light rig to illuminate the pack with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LightingPreset {
    /// High ambient with one gentle shadow-casting key.
    Soft,
    /// Low ambient with strong key, fill, and rim lights.
    #[default]
    Studio,
}

/// Geometric detail level for roll construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DetailLevel {
    /// Plain cylinder with printed end discs; cheapest.
    FlatShell,
    /// Adds annular paper ends and a visible core tube.
    BumpTextured,
    /// Full build: beveled shell edges and a bored-out core.
    #[default]
    BeveledWithCoreBore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ViewOptions::default();
        assert_eq!(options.lighting, LightingPreset::Studio);
        assert_eq!(options.detail, DetailLevel::BeveledWithCoreBore);
        assert_eq!(options.shell_segments, 64);
        assert_eq!(options.detail_segments, 48);
        assert!((options.max_pixel_ratio - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = ViewOptions {
            background: BackgroundMode::Transparent,
            lighting: LightingPreset::Soft,
            detail: DetailLevel::FlatShell,
            shell_segments: 32,
            ..ViewOptions::default()
        };

        let json = serde_json::to_string(&options).unwrap();
        let restored: ViewOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.background, BackgroundMode::Transparent);
        assert_eq!(restored.lighting, LightingPreset::Soft);
        assert_eq!(restored.detail, DetailLevel::FlatShell);
        assert_eq!(restored.shell_segments, 32);
    }

    #[test]
    fn test_background_default_is_solid() {
        match BackgroundMode::default() {
            BackgroundMode::Solid(color) => {
                assert!(color.x > 0.8 && color.y > 0.8 && color.z > 0.8);
            }
            BackgroundMode::Transparent => panic!("default background should be solid"),
        }
    }
}
