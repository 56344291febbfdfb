//! Scene ownership: placed instances and the pack root.
//!
//! The caller owns a [`PackRoot`] and hands it to the engine for each
//! generation pass. There is no ambient scene registry; dropping the root
//! releases every instance, and shared meshes free themselves when the last
//! instance referencing them goes away.

use glam::{Mat4, Vec3};

use crate::roll::{parts_bounds, RollGeometry, RollPart};

/// One placed roll: a position plus its parts.
///
/// Parts hold `Arc` references to meshes shared across the whole
/// generation; cloning an instance never copies vertex data.
#[derive(Debug, Clone)]
pub struct RollInstance {
    position: Vec3,
    parts: Vec<RollPart>,
}

impl RollInstance {
    /// Places an instance of the given geometry.
    #[must_use]
    pub fn new(geometry: &RollGeometry, position: Vec3) -> Self {
        Self {
            position,
            parts: geometry.parts().to_vec(),
        }
    }

    /// World position of the roll origin.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The instance's parts.
    #[must_use]
    pub fn parts(&self) -> &[RollPart] {
        &self.parts
    }

    /// World transform of the instance; parts add their own offsets.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    /// World-space bounds of the instance.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let (min, max) = parts_bounds(&self.parts)?;
        Some((min + self.position, max + self.position))
    }
}

/// Root container owning every instance of the current pack.
#[derive(Debug, Default)]
pub struct PackRoot {
    children: Vec<RollInstance>,
}

impl PackRoot {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly generated set of instances.
    ///
    /// The previous generation is dropped only after the new one is
    /// installed, so a reader of the root never sees a half-filled pack.
    pub fn replace(&mut self, instances: Vec<RollInstance>) {
        let old = std::mem::replace(&mut self.children, instances);
        drop(old);
    }

    /// Removes all instances.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the root holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The current instances.
    #[must_use]
    pub fn instances(&self) -> &[RollInstance] {
        &self.children
    }

    /// Iterates over the instances.
    pub fn iter(&self) -> std::slice::Iter<'_, RollInstance> {
        self.children.iter()
    }

    /// World-space bounds of the whole pack.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut combined: Option<(Vec3, Vec3)> = None;
        for instance in &self.children {
            if let Some((min, max)) = instance.bounds() {
                combined = Some(match combined {
                    Some((cmin, cmax)) => (cmin.min(min), cmax.max(max)),
                    None => (min, max),
                });
            }
        }
        combined
    }
}

impl<'a> IntoIterator for &'a PackRoot {
    type Item = &'a RollInstance;
    type IntoIter = std::slice::Iter<'a, RollInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
