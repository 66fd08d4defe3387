//! Ambient occlusion.
//!
//! AO is computed on the lit side of a face: the plane one voxel along
//! the face's light direction. Each quad corner darkens according to the
//! two edge-adjacent neighbors and the diagonal between them. Two faces
//! may only merge when they see identical neighbor solidity across the
//! whole 8-neighborhood, otherwise a merged quad would interpolate AO
//! across a lighting discontinuity.

use crate::core::{axis_index, is_solid, voxel_at, MesherError, VoxelId};

/// Planar neighbor offsets as (right, forward) steps: the four edges,
/// then the four diagonals.
pub const AO_DIRS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Occlusion level of one quad corner, `0..=3` (3 = fully lit).
///
/// When both edge neighbors are solid the corner is fully occluded no
/// matter what the diagonal holds; the diagonal voxel cannot be seen
/// past two solid edges.
#[inline]
pub fn vertex_ao(side1: bool, side2: bool, corner: bool) -> u8 {
    if side1 && side2 {
        return 0;
    }
    3 - (side1 as u8 + side2 as u8 + corner as u8)
}

/// Whether two face positions see the same 8-neighbor solidity pattern,
/// offset by (`forward_offset`, `right_offset`) in the plane at depth
/// `depth`.
fn compare_ao(
    voxels: &[VoxelId],
    axis: usize,
    forward: i32,
    right: i32,
    depth: i32,
    forward_offset: i32,
    right_offset: i32,
) -> Result<bool, MesherError> {
    for &(dr, df) in &AO_DIRS {
        let here = is_solid(voxel_at(
            voxels,
            axis_index(axis, right + dr, forward + df, depth),
        )?);
        let there = is_solid(voxel_at(
            voxels,
            axis_index(
                axis,
                right + right_offset + dr,
                forward + forward_offset + df,
                depth,
            ),
        )?);
        if here != there {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether the face at (right, forward, bit_pos) may merge with the face
/// one step forward: same voxel type and same AO pattern on the lit side.
pub fn compare_forward(
    voxels: &[VoxelId],
    axis: usize,
    forward: i32,
    right: i32,
    bit_pos: i32,
    light_dir: i32,
) -> Result<bool, MesherError> {
    let here = voxel_at(voxels, axis_index(axis, right, forward, bit_pos))?;
    let ahead = voxel_at(voxels, axis_index(axis, right, forward + 1, bit_pos))?;
    if here != ahead {
        return Ok(false);
    }
    compare_ao(voxels, axis, forward, right, bit_pos + light_dir, 1, 0)
}

/// Whether the face at (right, forward, bit_pos) may merge with the face
/// one step rightward.
pub fn compare_right(
    voxels: &[VoxelId],
    axis: usize,
    forward: i32,
    right: i32,
    bit_pos: i32,
    light_dir: i32,
) -> Result<bool, MesherError> {
    let here = voxel_at(voxels, axis_index(axis, right, forward, bit_pos))?;
    let beside = voxel_at(voxels, axis_index(axis, right + 1, forward, bit_pos))?;
    if here != beside {
        return Ok(false);
    }
    compare_ao(voxels, axis, forward, right, bit_pos + light_dir, 0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{voxel_index, AIR, CS_P3};

    #[test]
    fn vertex_ao_levels() {
        assert_eq!(vertex_ao(false, false, false), 3);
        assert_eq!(vertex_ao(true, false, false), 2);
        assert_eq!(vertex_ao(false, true, false), 2);
        assert_eq!(vertex_ao(false, false, true), 2);
        assert_eq!(vertex_ao(true, false, true), 1);
        assert_eq!(vertex_ao(false, true, true), 1);
    }

    #[test]
    fn both_sides_solid_is_fully_dark() {
        // The corner voxel must not matter once both edges occlude.
        assert_eq!(vertex_ao(true, true, false), 0);
        assert_eq!(vertex_ao(true, true, true), 0);
    }

    #[test]
    fn compare_forward_open_space_merges() {
        let mut voxels = vec![AIR; CS_P3];
        // Two voxels along the forward direction of axis 0 (x).
        voxels[voxel_index(32, 32, 32)] = 1;
        voxels[voxel_index(33, 32, 32)] = 1;

        // Top faces: axis 0, right = z = 32, forward = x = 32, bit = y = 32.
        assert_eq!(compare_forward(&voxels, 0, 32, 32, 32, 1), Ok(true));
    }

    #[test]
    fn compare_forward_rejects_type_change() {
        let mut voxels = vec![AIR; CS_P3];
        voxels[voxel_index(32, 32, 32)] = 1;
        voxels[voxel_index(33, 32, 32)] = 2;

        assert_eq!(compare_forward(&voxels, 0, 32, 32, 32, 1), Ok(false));
    }

    #[test]
    fn compare_forward_rejects_ao_discontinuity() {
        let mut voxels = vec![AIR; CS_P3];
        voxels[voxel_index(32, 32, 32)] = 1;
        voxels[voxel_index(33, 32, 32)] = 1;
        // Occluder above the lit plane, adjacent to the first face only.
        voxels[voxel_index(31, 33, 32)] = 1;

        assert_eq!(compare_forward(&voxels, 0, 32, 32, 32, 1), Ok(false));
    }

    #[test]
    fn compare_right_symmetry() {
        let mut voxels = vec![AIR; CS_P3];
        // Two voxels along the rightward direction of axis 0 (z).
        voxels[voxel_index(32, 32, 32)] = 1;
        voxels[voxel_index(32, 32, 33)] = 1;

        assert_eq!(compare_right(&voxels, 0, 32, 32, 32, 1), Ok(true));

        voxels[voxel_index(32, 33, 31)] = 1;
        assert_eq!(compare_right(&voxels, 0, 32, 32, 32, 1), Ok(false));
    }
}
