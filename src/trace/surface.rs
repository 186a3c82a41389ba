//! Table and net geometry
//!
//! The playing surface is an idealized planar rectangle described by its
//! four corners; the net is a bounded vertical plane derived from it at the
//! table midline.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{TABLE_HEIGHT, TABLE_LENGTH, TABLE_WIDTH};

/// Playing surface described by four ordered corners.
///
/// Corners run A, B, C, D around the rectangle: D and C span the X extent
/// (near edge), D and A span the Z extent (left edge). All four corners
/// must share one Y value; that is a caller contract, checked only in
/// debug builds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surface {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

impl Default for Surface {
    /// Standard table: 2.74 m long (Z), 1.525 m wide (X), 0.76 m high
    fn default() -> Self {
        let (hw, hl) = (TABLE_WIDTH / 2.0, TABLE_LENGTH / 2.0);
        Self::new(
            Vec3::new(-hw, TABLE_HEIGHT, hl),
            Vec3::new(hw, TABLE_HEIGHT, hl),
            Vec3::new(hw, TABLE_HEIGHT, -hl),
            Vec3::new(-hw, TABLE_HEIGHT, -hl),
        )
    }
}

impl Surface {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        debug_assert!(
            (a.y - b.y).abs() < 1e-4 && (a.y - c.y).abs() < 1e-4 && (a.y - d.y).abs() < 1e-4,
            "surface corners must be coplanar (shared Y)"
        );
        Self { a, b, c, d }
    }

    /// Y of the table plane (common corner height)
    #[inline]
    pub fn height(&self) -> f32 {
        self.a.y
    }

    /// X extent, normalized so corner ordering quirks cannot flip it
    #[inline]
    pub fn x_extent(&self) -> (f32, f32) {
        (self.d.x.min(self.c.x), self.d.x.max(self.c.x))
    }

    /// Z extent between the near and far edges
    #[inline]
    pub fn z_extent(&self) -> (f32, f32) {
        (self.d.z.min(self.a.z), self.d.z.max(self.a.z))
    }

    /// Whether a point on the table plane lies within the rectangle.
    ///
    /// Only X and Z are tested; the caller obtains `point` from a plane
    /// intersection, so Y already matches.
    pub fn contains(&self, point: Vec3) -> bool {
        let (min_x, max_x) = self.x_extent();
        let (min_z, max_z) = self.z_extent();
        point.x >= min_x && point.x <= max_x && point.z >= min_z && point.z <= max_z
    }

    /// Net plane at the Z midpoint, spanning the full table width
    pub fn net(&self, height: f32) -> Net {
        let (min_x, max_x) = self.x_extent();
        let (min_z, max_z) = self.z_extent();
        Net {
            z: (min_z + max_z) / 2.0,
            height,
            min_x,
            max_x,
            base_y: self.height(),
        }
    }
}

/// Bounded vertical obstacle plane at the table midline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Net {
    /// Z position of the net plane
    pub z: f32,
    /// Height above the table plane
    pub height: f32,
    pub min_x: f32,
    pub max_x: f32,
    /// Y of the table plane at the net base
    pub base_y: f32,
}

impl Net {
    /// Whether a point on the net plane lies within the net rectangle
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.base_y
            && point.y <= self.base_y + self.height
    }
}
