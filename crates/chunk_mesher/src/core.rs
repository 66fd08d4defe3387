//! Core type definitions for the chunk mesher.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Voxel type identifier. `AIR` is the only non-solid value.
pub type VoxelId = u8;

/// Reserved voxel value for empty space.
pub const AIR: VoxelId = 0;

/// Usable chunk size (62).
pub const CS: usize = 62;
/// Chunk size with 1-voxel padding (64).
/// The padding carries neighbor-chunk occupancy so boundary faces can be
/// culled and shaded without extra lookups; padded voxels are never meshed.
pub const CS_P: usize = CS + 2;
/// Column count per axis (CS_P × CS_P = 4096).
pub const CS_P2: usize = CS_P * CS_P;
/// Total voxels in a padded chunk (CS_P³ = 262144).
pub const CS_P3: usize = CS_P * CS_P * CS_P;

/// Hard bound on the vertex output of a single meshing call.
///
/// The worst case is a checkerboard fill: every other usable voxel solid,
/// six 1×1 faces each, six vertices per face.
pub const MAX_VERTEX_STORAGE: usize = ((CS * CS * CS + 1) / 2) * 36;

/// Flat index of a padded voxel coordinate.
///
/// The grid is addressed `x + z·CS_P + y·CS_P²`: x varies fastest, then z,
/// then y. Coordinates `0` and `CS_P-1` on any axis are padding.
#[inline]
pub const fn voxel_index(x: usize, y: usize, z: usize) -> usize {
    x + z * CS_P + y * CS_P2
}

/// Whether a voxel value blocks light and culls neighboring faces.
///
/// Extend this check to exempt cutout blocks (grass, foliage) from culling.
#[inline]
pub fn is_solid(voxel: VoxelId) -> bool {
    voxel != AIR
}

/// Flat voxel index for a (right, forward, depth) triple on the given axis.
///
/// Each of the three sweep axes traverses the same grid in a different
/// order; this maps sweep-local coordinates back to grid indices.
/// Axis 0 sweeps Y columns (right = z, forward = x), axis 1 sweeps Z
/// columns (right = x, forward = y), axis 2 sweeps X columns (right = y,
/// forward = z).
///
/// Inputs are signed so AO neighbor sampling can step one voxel outside a
/// face without pre-clamping; an out-of-grid result is caught by
/// [`voxel_at`].
#[inline]
pub fn axis_index(axis: usize, right: i32, forward: i32, depth: i32) -> i32 {
    const P: i32 = CS_P as i32;
    const P2: i32 = CS_P2 as i32;
    match axis {
        0 => forward + right * P + depth * P2,
        1 => right + depth * P + forward * P2,
        _ => depth + forward * P + right * P2,
    }
}

/// Checked voxel fetch.
///
/// An out-of-range index means the caller's padding population is broken;
/// it is reported as [`MesherError::IndexOutOfRange`] rather than aborting.
#[inline]
pub fn voxel_at(voxels: &[VoxelId], index: i32) -> Result<VoxelId, MesherError> {
    // A negative index wraps far past CS_P3 and is caught by the bounds check.
    let index = index as usize;
    voxels
        .get(index)
        .copied()
        .ok_or(MesherError::IndexOutOfRange { index })
}

/// Errors a meshing call can surface.
///
/// Both variants are contract violations in the caller, not transient
/// failures; there is no partial output and no retry path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MesherError {
    /// The voxel buffer is not exactly `CS_P3` long.
    #[error("voxel grid has {len} entries, expected {CS_P3}")]
    GridSize {
        /// Length of the buffer that was passed in.
        len: usize,
    },

    /// A voxel access addressed beyond the padded grid.
    #[error("voxel index {index} out of range (grid is {CS_P3})")]
    IndexOutOfRange {
        /// The offending flat index.
        index: usize,
    },

    /// The vertex output would exceed its allocated bound.
    #[error("vertex storage exceeded: need {needed}, capacity {capacity}")]
    CapacityExceeded {
        /// Vertices required to finish the current quad.
        needed: usize,
        /// The configured vertex limit.
        capacity: usize,
    },
}

/// Packed vertex record, uploadable as-is into a GPU vertex buffer.
///
/// # Layout
/// - `x_y_z_type`: texture id in bits 24-31, then z, y, x (8 bits each).
///   Positions are stored minus 1, removing the padding offset, so the
///   stored range is `0..=CS`.
/// - `u_v`: v extent in bits 8-15, u extent in bits 0-7.
/// - `norm_ao`: AO level in bits 6-7, opacity flag in bit 5, face
///   direction in bits 0-2.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct PackedVertex {
    pub x_y_z_type: u32,
    pub u_v: u32,
    pub norm_ao: u32,
}

impl PackedVertex {
    /// Pack a vertex from padded-grid corner coordinates (`1..=CS_P-1`).
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: u32,
        y: u32,
        z: u32,
        texture: u32,
        u: u32,
        v: u32,
        face: u32,
        ao: u32,
        opaque: bool,
    ) -> Self {
        Self {
            x_y_z_type: (texture << 24) | ((z - 1) << 16) | ((y - 1) << 8) | (x - 1),
            u_v: (v << 8) | u,
            norm_ao: (ao << 6) | ((opaque as u32) << 5) | face,
        }
    }

    /// Unpadded local x, in `0..=CS`.
    #[inline]
    pub fn x(&self) -> u8 {
        (self.x_y_z_type & 0xFF) as u8
    }

    /// Unpadded local y, in `0..=CS`.
    #[inline]
    pub fn y(&self) -> u8 {
        ((self.x_y_z_type >> 8) & 0xFF) as u8
    }

    /// Unpadded local z, in `0..=CS`.
    #[inline]
    pub fn z(&self) -> u8 {
        ((self.x_y_z_type >> 16) & 0xFF) as u8
    }

    /// Texture index chosen by the registry for this face.
    #[inline]
    pub fn texture(&self) -> u8 {
        ((self.x_y_z_type >> 24) & 0xFF) as u8
    }

    /// U extent of the quad at this corner (0 or the quad width).
    #[inline]
    pub fn u(&self) -> u8 {
        (self.u_v & 0xFF) as u8
    }

    /// V extent of the quad at this corner (0 or the quad height).
    #[inline]
    pub fn v(&self) -> u8 {
        ((self.u_v >> 8) & 0xFF) as u8
    }

    /// Face direction id, `0..6`.
    #[inline]
    pub fn face(&self) -> u8 {
        (self.norm_ao & 0b111) as u8
    }

    /// Whether this vertex belongs to the opaque pass.
    #[inline]
    pub fn opaque(&self) -> bool {
        (self.norm_ao >> 5) & 1 != 0
    }

    /// Ambient occlusion level, `0..=3` (3 = fully lit).
    #[inline]
    pub fn ao(&self) -> u8 {
        ((self.norm_ao >> 6) & 0b11) as u8
    }
}
