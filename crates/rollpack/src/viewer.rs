//! Viewer session state.

use glam::Vec3;

use rollpack_core::error::{Result, RollpackError};
use rollpack_core::options::ViewOptions;
use rollpack_core::params::{PackSpec, RawPackParams};
use rollpack_core::presets::Preset;
use rollpack_geometry::pack::{PackEngine, PackSummary};
use rollpack_geometry::roll::BuilderConfig;
use rollpack_geometry::scene::PackRoot;
use rollpack_render::camera::{Camera, CameraPose};
use rollpack_render::export::{save_image, ExportError};
use rollpack_render::lights::LightRig;

use crate::export::export_filename;

/// The viewer session state.
///
/// Owns everything a host needs to drive the visualizer: the pack root and
/// the engine that fills it, the orbit camera, and the view options. The
/// host renders the root's instances however it likes and hands finished
/// frames back through [`Viewer::export_frame`].
///
/// A fresh viewer generates the default pack immediately, so it is
/// renderable from the first frame.
pub struct Viewer {
    options: ViewOptions,
    engine: PackEngine,
    camera: Camera,
    root: PackRoot,
    spec: PackSpec,
    summary: PackSummary,
}

impl Viewer {
    /// Creates a viewer with default options and the default pack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ViewOptions::default())
    }

    /// Creates a viewer with the given options and the default pack.
    #[must_use]
    pub fn with_options(options: ViewOptions) -> Self {
        let _ = env_logger::try_init();

        let engine = PackEngine::new(BuilderConfig::from_options(&options));
        let mut root = PackRoot::new();
        let spec = PackSpec::default();
        let summary = engine.generate(&spec, &mut root);

        Self {
            options,
            engine,
            camera: Camera::default(),
            root,
            spec,
            summary,
        }
    }

    /// Sanitizes raw parameters and regenerates the pack from them.
    pub fn set_params(&mut self, raw: &RawPackParams) -> PackSummary {
        self.spec = raw.sanitize();
        self.regenerate()
    }

    /// Regenerates the pack from the current spec.
    ///
    /// The previous generation's instances are dropped as part of the swap.
    pub fn regenerate(&mut self) -> PackSummary {
        self.summary = self.engine.generate(&self.spec, &mut self.root);
        self.summary
    }

    /// Applies a built-in preset: its look settings, then its parameters.
    ///
    /// # Errors
    /// Returns [`RollpackError::PresetNotFound`] when no built-in preset has
    /// that name.
    pub fn apply_preset(&mut self, name: &str) -> Result<PackSummary> {
        let preset = Preset::find(name)
            .ok_or_else(|| RollpackError::PresetNotFound(name.to_string()))?;
        log::info!("applying preset '{}'", preset.name);

        self.options.lighting = preset.lighting;
        self.options.detail = preset.detail;
        self.engine = PackEngine::new(BuilderConfig::from_options(&self.options));
        Ok(self.set_params(&preset.params))
    }

    /// Replaces the view options and rebuilds the pack to match.
    ///
    /// Detail level and segment counts change the geometry, so this always
    /// regenerates.
    pub fn set_options(&mut self, options: ViewOptions) -> PackSummary {
        self.options = options;
        self.engine = PackEngine::new(BuilderConfig::from_options(&self.options));
        self.regenerate()
    }

    /// The current view options.
    #[must_use]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The sanitized spec of the current pack.
    #[must_use]
    pub fn spec(&self) -> PackSpec {
        self.spec
    }

    /// What the last generation produced.
    #[must_use]
    pub fn summary(&self) -> PackSummary {
        self.summary
    }

    /// Number of rolls in the current pack.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.summary.total
    }

    /// The scene root holding the current pack's instances.
    #[must_use]
    pub fn root(&self) -> &PackRoot {
        &self.root
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera, for input-driven orbit/pan/zoom.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The light rig matching the current lighting preset.
    #[must_use]
    pub fn light_rig(&self) -> LightRig {
        LightRig::from_preset(self.options.lighting)
    }

    /// Returns the camera to its default pose.
    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Moves the camera so the whole pack fits in view.
    ///
    /// Falls back to the default pose when the root is empty.
    pub fn frame_pack(&mut self) {
        match self.root.bounding_box() {
            Some((min, max)) => self.camera.frame(min, max),
            None => self.camera.reset(),
        }
    }

    /// A one-line camera read-out for debug overlays.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Writes a rendered RGBA frame to disk and returns the path written.
    ///
    /// With no filename the pack naming convention is used, so the file
    /// records the grid that was on screen.
    ///
    /// # Errors
    /// Returns an error if the pixel data does not match the dimensions or
    /// the file cannot be written.
    pub fn export_frame(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        filename: Option<&str>,
    ) -> std::result::Result<String, ExportError> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => export_filename(&self.spec),
        };
        save_image(&filename, pixels, width, height)?;
        Ok(filename)
    }

    /// Pack centroid, which the layout keeps at the world origin.
    #[must_use]
    pub fn pack_center(&self) -> Vec3 {
        self.root
            .bounding_box()
            .map_or(Vec3::ZERO, |(min, max)| (min + max) * 0.5)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollpack_core::options::{DetailLevel, LightingPreset};

    #[test]
    fn test_fresh_viewer_holds_default_pack() {
        let viewer = Viewer::new();
        assert_eq!(viewer.total(), 24);
        assert_eq!(viewer.root().len(), 24);
        assert_eq!(viewer.spec().lanes, 4);
    }

    #[test]
    fn test_set_params_regenerates() {
        let mut viewer = Viewer::new();
        let raw = RawPackParams {
            lanes: 2.0,
            channels: 2.0,
            layers: 1.0,
            ..RawPackParams::default()
        };
        let summary = viewer.set_params(&raw);
        assert_eq!(summary.total, 4);
        assert_eq!(viewer.root().len(), 4);
    }

    #[test]
    fn test_apply_unknown_preset_fails() {
        let mut viewer = Viewer::new();
        assert!(matches!(
            viewer.apply_preset("bulk"),
            Err(RollpackError::PresetNotFound(_))
        ));
        // The pack is untouched by the failed switch.
        assert_eq!(viewer.total(), 24);
    }

    #[test]
    fn test_apply_preset_switches_look_and_gap() {
        let mut viewer = Viewer::new();
        viewer.apply_preset("retail").unwrap();
        assert_eq!(viewer.options().lighting, LightingPreset::Soft);
        assert_eq!(viewer.options().detail, DetailLevel::FlatShell);
        assert!((viewer.spec().gap - 0.1).abs() < 1e-6);

        viewer.apply_preset("warehouse").unwrap();
        assert!((viewer.spec().gap - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_light_rig_follows_options() {
        let mut viewer = Viewer::new();
        viewer.apply_preset("retail").unwrap();
        assert_eq!(viewer.light_rig().name, "soft");
    }

    #[test]
    fn test_frame_pack_looks_at_center() {
        let mut viewer = Viewer::new();
        viewer.frame_pack();
        assert!(viewer.camera().target.length() < 1e-3);
    }

    #[test]
    fn test_export_frame_writes_file() {
        let viewer = Viewer::new();
        let dir = std::env::temp_dir().join("rollpack_viewer_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("frame.png");
        let path = path.to_str().unwrap();

        let pixels = vec![200u8; 4 * 4 * 4];
        let written = viewer.export_frame(&pixels, 4, 4, Some(path)).unwrap();
        assert_eq!(written, path);
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_export_name_tracks_spec() {
        let mut viewer = Viewer::new();
        let raw = RawPackParams {
            lanes: 5.0,
            channels: 2.0,
            layers: 3.0,
            ..RawPackParams::default()
        };
        viewer.set_params(&raw);
        assert_eq!(export_filename(&viewer.spec()), "pack_2_5_3.png");
    }
}
