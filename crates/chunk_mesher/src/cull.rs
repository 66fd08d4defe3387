//! Bitwise face culling.
//!
//! A face is visible iff the voxel is solid and its neighbor along the
//! face direction is not. With the occupancy in axis columns this is one
//! shift and two bitwise ops per column per direction, 64 voxels at a
//! time.

use crate::core::{CS_P, CS_P2};

/// Derive the six face masks from the three axis column sets.
///
/// For each axis, the ascending mask is `col & !((col >> 1) | HIGH)` and
/// the descending mask `col & !((col << 1) | LOW)`. The `HIGH`/`LOW`
/// terms blank the outermost depth bits: a solid voxel at the grid edge
/// faces a neighbor chunk's padding, never open space, so it is culled
/// here rather than in the sweep.
///
/// `face_masks` holds `6 × CS_P2` masks ordered by face id; the buffer is
/// fully overwritten.
pub fn cull_faces(axis_cols: &[u64], face_masks: &mut [u64]) {
    debug_assert_eq!(axis_cols.len(), CS_P2 * 3);
    debug_assert_eq!(face_masks.len(), CS_P2 * 6);

    const HIGH: u64 = 1 << (CS_P - 1);
    const LOW: u64 = 1;

    for axis in 0..3 {
        for i in 0..CS_P2 {
            let col = axis_cols[axis * CS_P2 + i];
            face_masks[(axis * 2) * CS_P2 + i] = col & !((col >> 1) | HIGH);
            face_masks[(axis * 2 + 1) * CS_P2 + i] = col & !((col << 1) | LOW);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::build_axis_columns;
    use crate::core::{voxel_index, AIR, CS_P3};
    use crate::faces::{FACE_NEG_Y, FACE_POS_Y};

    fn masks_for(voxels: &[u8]) -> Vec<u64> {
        let mut cols = vec![0u64; CS_P2 * 3];
        let mut masks = vec![0u64; CS_P2 * 6];
        build_axis_columns(voxels, &mut cols);
        cull_faces(&cols, &mut masks);
        masks
    }

    fn total_faces(masks: &[u64]) -> u32 {
        masks.iter().map(|m| m.count_ones()).sum()
    }

    #[test]
    fn empty_chunk_no_faces() {
        let voxels = vec![AIR; CS_P3];
        assert_eq!(total_faces(&masks_for(&voxels)), 0);
    }

    #[test]
    fn single_voxel_six_faces() {
        let mut voxels = vec![AIR; CS_P3];
        voxels[voxel_index(32, 32, 32)] = 1;

        let masks = masks_for(&voxels);
        assert_eq!(total_faces(&masks), 6);
        assert_eq!(masks[FACE_POS_Y * CS_P2 + 32 + 32 * CS_P], 1 << 32);
        assert_eq!(masks[FACE_NEG_Y * CS_P2 + 32 + 32 * CS_P], 1 << 32);
    }

    #[test]
    fn adjacent_pair_culls_shared_faces() {
        // Exactly one side solid => face; both or neither => none.
        let mut voxels = vec![AIR; CS_P3];
        voxels[voxel_index(32, 32, 32)] = 1;
        voxels[voxel_index(32, 33, 32)] = 1;

        let masks = masks_for(&voxels);
        // 12 faces minus the 2 facing each other.
        assert_eq!(total_faces(&masks), 10);

        // The shared boundary contributes neither a +Y face from below
        // nor a -Y face from above.
        let col = 32 + 32 * CS_P;
        assert_eq!(masks[FACE_POS_Y * CS_P2 + col] & (1 << 32), 0);
        assert_eq!(masks[FACE_NEG_Y * CS_P2 + col] & (1 << 33), 0);
    }

    #[test]
    fn cube_interior_hidden() {
        let mut voxels = vec![AIR; CS_P3];
        for x in 31..34 {
            for y in 31..34 {
                for z in 31..34 {
                    voxels[voxel_index(x, y, z)] = 1;
                }
            }
        }
        // 3x3x3 cube: 9 faces per side.
        assert_eq!(total_faces(&masks_for(&voxels)), 54);
    }

    #[test]
    fn padding_depths_never_flagged() {
        // A full column, padding included: every face along the column is
        // an interior face or points into a neighbor chunk.
        let mut voxels = vec![AIR; CS_P3];
        for y in 0..CS_P {
            voxels[voxel_index(32, y, 32)] = 1;
        }
        let masks = masks_for(&voxels);
        let col = 32 + 32 * CS_P;
        assert_eq!(masks[FACE_POS_Y * CS_P2 + col], 0);
        assert_eq!(masks[FACE_NEG_Y * CS_P2 + col], 0);
    }

    #[test]
    fn occupied_padding_culls_boundary_face() {
        // Neighbor occupancy in the padding suppresses the face that
        // would otherwise be emitted at the chunk edge.
        let mut solo = vec![AIR; CS_P3];
        solo[voxel_index(32, 1, 32)] = 1;
        let col = 32 + 32 * CS_P;
        let masks = masks_for(&solo);
        assert_ne!(masks[FACE_NEG_Y * CS_P2 + col] & (1 << 1), 0);

        let mut against_neighbor = solo.clone();
        against_neighbor[voxel_index(32, 0, 32)] = 1;
        let masks = masks_for(&against_neighbor);
        assert_eq!(masks[FACE_NEG_Y * CS_P2 + col] & (1 << 1), 0);
        assert_ne!(masks[FACE_POS_Y * CS_P2 + col] & (1 << 1), 0);
    }
}
