//! Axis column encoding.
//!
//! One pass over the padded grid produces three binary encodings of the
//! same occupancy, one per principal axis: bit `k` of a column is set iff
//! the voxel at depth `k` along that axis is solid. The three encodings
//! exist because the greedy sweep needs each axis as the fast (bit)
//! dimension in turn.

use crate::core::{is_solid, VoxelId, CS_P, CS_P2};

/// Build the three axis column sets from a padded voxel grid.
///
/// `axis_cols` holds `3 × CS_P2` columns: Y columns first (keyed
/// `z + x·CS_P`), then Z columns (`x + y·CS_P`), then X columns
/// (`y + z·CS_P`). The buffer is fully overwritten.
pub fn build_axis_columns(voxels: &[VoxelId], axis_cols: &mut [u64]) {
    debug_assert_eq!(axis_cols.len(), CS_P2 * 3);
    axis_cols.fill(0);

    let mut idx = 0;
    for y in 0..CS_P {
        for z in 0..CS_P {
            // X runs contiguously in memory; accumulate its column in a
            // register and store once per (y, z).
            let mut x_bits = 0u64;
            for x in 0..CS_P {
                if is_solid(voxels[idx]) {
                    axis_cols[z + x * CS_P] |= 1u64 << y;
                    axis_cols[CS_P2 + x + y * CS_P] |= 1u64 << z;
                    x_bits |= 1u64 << x;
                }
                idx += 1;
            }
            axis_cols[CS_P2 * 2 + y + z * CS_P] = x_bits;
        }
    }
}
