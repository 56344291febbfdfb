//! Material system for roll surfaces.
//!
//! Each sub-surface of a roll plays a fixed role (wound paper, printed end,
//! cardboard core, ...) and gets a matching PBR-style material. The registry
//! lets a host renderer resolve roles to shading parameters and add its own
//! overrides.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

/// Which faces of a surface are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideMode {
    /// Front faces only (outward normals).
    #[default]
    Front,
    /// Back faces only, for surfaces viewed from inside.
    Back,
    /// Both faces, for thin sheets visible from either side.
    Double,
}

/// A material definition for rendering.
#[derive(Debug, Clone)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Albedo in linear RGB.
    pub base_color: Vec3,
    /// Surface roughness (0 = mirror, 1 = fully diffuse).
    pub roughness: f32,
    /// Metalness; paper and cardboard stay at zero.
    pub metalness: f32,
    /// Which faces are shaded.
    pub side: SideMode,
    /// Whether lighting is skipped entirely (printed artwork).
    pub unlit: bool,
    /// Strength of the grain bump relief, zero for none.
    pub bump_scale: f32,
    /// How often the grain tile repeats across the surface.
    pub uv_repeat: Vec2,
}

impl Material {
    /// Creates a lit, front-faced material with no bump.
    #[must_use]
    pub fn new(name: impl Into<String>, base_color: Vec3, roughness: f32) -> Self {
        Self {
            name: name.into(),
            base_color,
            roughness,
            metalness: 0.0,
            side: SideMode::Front,
            unlit: false,
            bump_scale: 0.0,
            uv_repeat: Vec2::ONE,
        }
    }

    /// Wound paper on the outer shell: cool white with fine grain.
    #[must_use]
    pub fn paper_side() -> Self {
        let mut mat = Self::new("paper_side", rgb8(247, 247, 255), 0.55);
        mat.bump_scale = 0.03;
        // Grain tile wraps four times around the circumference.
        mat.uv_repeat = Vec2::new(4.0, 1.0);
        mat
    }

    /// Annular paper end: bright white sheet, visible from both sides.
    #[must_use]
    pub fn paper_end() -> Self {
        let mut mat = Self::new("paper_end", rgb8(255, 255, 255), 0.65);
        mat.bump_scale = 0.04;
        mat.side = SideMode::Double;
        mat
    }

    /// Outer sheet seam ring.
    #[must_use]
    pub fn seam() -> Self {
        Self::new("seam", rgb8(229, 229, 229), 0.8)
    }

    /// Cardboard core, warm kraft brown.
    #[must_use]
    pub fn core_side() -> Self {
        Self::new("core_side", rgb8(184, 146, 93), 0.75)
    }

    /// Inside of the core bore. The bore mesh itself faces inward, so this
    /// stays front-faced.
    #[must_use]
    pub fn bore_interior() -> Self {
        Self::new("bore_interior", rgb8(122, 122, 122), 0.85)
    }

    /// Printed end disc: unlit so the artwork reads exactly as drawn.
    #[must_use]
    pub fn end_print() -> Self {
        let mut mat = Self::new("end_print", rgb8(255, 255, 255), 1.0);
        mat.unlit = true;
        mat
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::paper_side()
    }
}

/// The role a sub-surface plays on a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Outer shell and bevel rings.
    PaperSide,
    /// Annular end sheets.
    PaperEnd,
    /// Seam rings on flat-shell rolls.
    Seam,
    /// Cardboard core tube and hole caps.
    CoreSide,
    /// Interior of the core bore.
    BoreInterior,
    /// Printed end discs.
    EndPrint,
}

impl MaterialKind {
    /// Every kind, in registry display order.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::PaperSide,
            Self::PaperEnd,
            Self::Seam,
            Self::CoreSide,
            Self::BoreInterior,
            Self::EndPrint,
        ]
    }

    /// Registry name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PaperSide => "paper_side",
            Self::PaperEnd => "paper_end",
            Self::Seam => "seam",
            Self::CoreSide => "core_side",
            Self::BoreInterior => "bore_interior",
            Self::EndPrint => "end_print",
        }
    }

    /// Builds the stock material for this kind.
    #[must_use]
    pub fn material(self) -> Material {
        match self {
            Self::PaperSide => Material::paper_side(),
            Self::PaperEnd => Material::paper_end(),
            Self::Seam => Material::seam(),
            Self::CoreSide => Material::core_side(),
            Self::BoreInterior => Material::bore_interior(),
            Self::EndPrint => Material::end_print(),
        }
    }
}

/// Lighting is skipped for this material.
pub const FLAG_UNLIT: u32 = 1;
/// Both faces are shaded.
pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;
/// Back faces only are shaded.
pub const FLAG_BACKFACE: u32 = 1 << 2;

/// GPU-compatible material uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    /// Albedo RGB plus padding in the fourth lane.
    pub base_color: [f32; 4],
    /// Surface roughness.
    pub roughness: f32,
    /// Metalness.
    pub metalness: f32,
    /// Bump relief strength.
    pub bump_scale: f32,
    /// Bit flags; see [`FLAG_UNLIT`] and friends.
    pub flags: u32,
}

impl From<&Material> for MaterialUniforms {
    fn from(mat: &Material) -> Self {
        let mut flags = 0;
        if mat.unlit {
            flags |= FLAG_UNLIT;
        }
        match mat.side {
            SideMode::Front => {}
            SideMode::Double => flags |= FLAG_DOUBLE_SIDED,
            SideMode::Back => flags |= FLAG_BACKFACE,
        }
        Self {
            base_color: [mat.base_color.x, mat.base_color.y, mat.base_color.z, 1.0],
            roughness: mat.roughness,
            metalness: mat.metalness,
            bump_scale: mat.bump_scale,
            flags,
        }
    }
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self::from(&Material::default())
    }
}

/// Registry for managing materials.
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
    default_material: String,
}

impl MaterialRegistry {
    /// Creates a new registry holding every stock roll material.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            materials: HashMap::new(),
            default_material: "paper_side".to_string(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        for kind in MaterialKind::all() {
            self.register(kind.material());
        }
    }

    /// Registers a material, replacing any existing one of the same name.
    pub fn register(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Gets a material by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Resolves the material for a surface role.
    #[must_use]
    pub fn for_kind(&self, kind: MaterialKind) -> &Material {
        self.materials.get(kind.name()).unwrap_or_else(|| self.default_material())
    }

    /// Returns true if a material with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Gets the default material.
    #[must_use]
    pub fn default_material(&self) -> &Material {
        self.materials
            .get(&self.default_material)
            .unwrap_or_else(|| {
                self.materials
                    .values()
                    .next()
                    .expect("no materials registered")
            })
    }

    /// Sets the default material name.
    pub fn set_default(&mut self, name: &str) {
        if self.materials.contains_key(name) {
            self.default_material = name.to_string();
        }
    }

    /// Returns all material names, with built-in materials first in a stable
    /// order, followed by custom materials sorted alphabetically.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        const BUILTIN_ORDER: &[&str] = &[
            "paper_side",
            "paper_end",
            "seam",
            "core_side",
            "bore_interior",
            "end_print",
        ];
        let mut names: Vec<&str> = Vec::new();
        for &builtin in BUILTIN_ORDER {
            if self.materials.contains_key(builtin) {
                names.push(builtin);
            }
        }
        let mut custom: Vec<&str> = self
            .materials
            .keys()
            .map(String::as_str)
            .filter(|n| !BUILTIN_ORDER.contains(n))
            .collect();
        custom.sort_unstable();
        names.extend(custom);
        names
    }

    /// Returns the number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if no materials are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_side_material() {
        let mat = Material::paper_side();
        assert!(mat.bump_scale > 0.0);
        assert_eq!(mat.side, SideMode::Front);
        assert!((mat.uv_repeat.x - 4.0).abs() < 1e-6);
        assert!(mat.base_color.z > mat.base_color.x, "paper leans cool");
    }

    #[test]
    fn test_bore_is_dark_and_front_faced() {
        let mat = Material::bore_interior();
        assert_eq!(mat.side, SideMode::Front);
        assert!(mat.base_color.x < 0.5);
        assert!(!mat.unlit);
    }

    #[test]
    fn test_end_print_is_unlit() {
        let mat = Material::end_print();
        assert!(mat.unlit);
        assert!(mat.bump_scale.abs() < 1e-6);
    }

    #[test]
    fn test_material_registry_defaults() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.len(), 6);
        for kind in MaterialKind::all() {
            assert!(registry.has(kind.name()));
        }
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_resolves_kinds() {
        let registry = MaterialRegistry::new();
        let mat = registry.for_kind(MaterialKind::CoreSide);
        assert_eq!(mat.name, "core_side");
        assert!(mat.base_color.x > mat.base_color.z, "cardboard leans warm");
    }

    #[test]
    fn test_material_registry_names_order() {
        let registry = MaterialRegistry::new();
        assert_eq!(
            registry.names(),
            vec![
                "paper_side",
                "paper_end",
                "seam",
                "core_side",
                "bore_interior",
                "end_print"
            ]
        );
    }

    #[test]
    fn test_material_registry_custom() {
        let mut registry = MaterialRegistry::new();
        let mut custom = Material::seam();
        custom.name = "zebra_mat".to_string();
        registry.register(custom);

        let mut custom2 = Material::seam();
        custom2.name = "alpha_mat".to_string();
        registry.register(custom2);

        let names = registry.names();
        assert_eq!(names[6], "alpha_mat");
        assert_eq!(names[7], "zebra_mat");
    }

    #[test]
    fn test_material_uniforms_flags() {
        let uniforms = MaterialUniforms::from(&Material::paper_end());
        assert_eq!(uniforms.flags & FLAG_DOUBLE_SIDED, FLAG_DOUBLE_SIDED);
        assert_eq!(uniforms.flags & FLAG_UNLIT, 0);

        let uniforms = MaterialUniforms::from(&Material::end_print());
        assert_eq!(uniforms.flags & FLAG_UNLIT, FLAG_UNLIT);

        let mut custom = Material::seam();
        custom.side = SideMode::Back;
        let uniforms = MaterialUniforms::from(&custom);
        assert_eq!(uniforms.flags & FLAG_BACKFACE, FLAG_BACKFACE);
    }

    #[test]
    fn test_material_uniforms_layout() {
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 32);
        let uniforms = MaterialUniforms::from(&Material::core_side());
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 32);
    }
}
