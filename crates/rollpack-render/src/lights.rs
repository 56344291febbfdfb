//! Light rigs for the stock looks.
//!
//! Two rigs ship built in. `soft` floods the scene with ambient light and a
//! single gentle shadow-casting key, so the paper reads matte and even.
//! `studio` drops the ambient to near black and carves the pack out with
//! key, fill, and rim directionals.

use glam::Vec3;
use rollpack_core::options::LightingPreset;

/// The kind of a light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Uniform fill with no direction.
    Ambient,
    /// Parallel rays from a position toward the origin.
    Directional,
    /// Sky/ground gradient fill, a cheap ambient-occlusion stand-in.
    Hemisphere,
}

/// A single light in a rig.
#[derive(Debug, Clone)]
pub struct Light {
    /// What kind of light this is.
    pub kind: LightKind,
    /// Light color (sky color for hemisphere lights).
    pub color: Vec3,
    /// Ground bounce color; hemisphere lights only.
    pub ground_color: Option<Vec3>,
    /// Intensity multiplier.
    pub intensity: f32,
    /// World position; ambient lights have none.
    pub position: Option<Vec3>,
    /// Whether this light casts shadows.
    pub casts_shadow: bool,
    /// Penumbra blur radius for shadow-casting lights.
    pub shadow_softness: f32,
    /// Shadow map resolution per side.
    pub shadow_map_size: u32,
}

impl Light {
    /// Creates a white ambient light.
    #[must_use]
    pub fn ambient(intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color: Vec3::ONE,
            ground_color: None,
            intensity,
            position: None,
            casts_shadow: false,
            shadow_softness: 0.0,
            shadow_map_size: 0,
        }
    }

    /// Creates a white directional light aimed at the origin.
    #[must_use]
    pub fn directional(intensity: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Directional,
            color: Vec3::ONE,
            ground_color: None,
            intensity,
            position: Some(position),
            casts_shadow: false,
            shadow_softness: 0.0,
            shadow_map_size: 0,
        }
    }

    /// Creates a hemisphere light with sky and ground colors.
    #[must_use]
    pub fn hemisphere(intensity: f32, sky: Vec3, ground: Vec3) -> Self {
        Self {
            kind: LightKind::Hemisphere,
            color: sky,
            ground_color: Some(ground),
            intensity,
            position: None,
            casts_shadow: false,
            shadow_softness: 0.0,
            shadow_map_size: 0,
        }
    }

    /// Enables soft shadows on this light.
    #[must_use]
    pub fn with_shadow(mut self, softness: f32, map_size: u32) -> Self {
        self.casts_shadow = true;
        self.shadow_softness = softness;
        self.shadow_map_size = map_size;
        self
    }
}

/// A named set of lights illuminating the pack.
#[derive(Debug, Clone)]
pub struct LightRig {
    /// Rig name.
    pub name: String,
    /// Lights in application order.
    pub lights: Vec<Light>,
}

impl LightRig {
    /// High-ambient rig with one soft shadow, for an even catalog look.
    #[must_use]
    pub fn soft() -> Self {
        Self {
            name: "soft".to_string(),
            lights: vec![
                Light::ambient(0.68),
                Light::directional(0.35, Vec3::new(6.0, 10.0, 14.0)).with_shadow(8.0, 1024),
                // Faux ambient occlusion for the roll ends.
                Light::hemisphere(0.22, Vec3::ONE, Vec3::splat(0.867)),
            ],
        }
    }

    /// Low-ambient three-point rig for a contrasty studio look.
    #[must_use]
    pub fn studio() -> Self {
        Self {
            name: "studio".to_string(),
            lights: vec![
                Light::ambient(0.08),
                Light::directional(2.1, Vec3::new(90.0, 120.0, 70.0)),
                Light::directional(1.0, Vec3::new(-120.0, 60.0, -50.0)),
                Light::directional(0.9, Vec3::new(0.0, 160.0, -120.0)),
            ],
        }
    }

    /// Builds the rig matching a lighting preset.
    #[must_use]
    pub fn from_preset(preset: LightingPreset) -> Self {
        match preset {
            LightingPreset::Soft => Self::soft(),
            LightingPreset::Studio => Self::studio(),
        }
    }

    /// Number of lights in the rig.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the rig is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}
