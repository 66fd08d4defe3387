//! Three-level binary greedy merge.
//!
//! Runs once per face direction. Within a direction, visible faces merge
//! into maximal rectangles in two stages, bit-parallel across a whole
//! column at a time:
//!
//! 1. a face extends *forward* while the next forward column carries the
//!    same face with the same voxel type and AO pattern;
//! 2. a face that stopped extending forward may instead walk *rightward*,
//!    provided its accumulated forward run matches the next column's so
//!    the rectangle stays axis-aligned.
//!
//! Forward extension is attempted first; only bits that fail it are
//! considered for rightward extension. This ordering decides which of
//! several equal-area tilings is produced and must not be reordered.
//!
//! When neither extension applies the run is closed: AO is sampled, the
//! quad is emitted, and the run counters reset to zero.

use crate::ao::{compare_forward, compare_right, vertex_ao};
use crate::core::{
    axis_index, is_solid, voxel_at, MesherError, PackedVertex, VoxelId, CS, CS_P, CS_P2,
};
use crate::faces::{axis_point, face_axis, light_dir, FACE_LAYOUTS};
use crate::mesh::{should_flip, MeshOutput, MeshScratch};
use crate::registry::TextureIndex;

/// Sweep all six face directions, emitting merged quads into `out`.
///
/// Expects `scratch.face_masks` to hold the culled visibility masks.
/// `scratch.merged_forward` is reset at the start of each face sweep and
/// `scratch.merged_right` at the start of each forward row; individual
/// cells reset whenever their rectangle is emitted or absorbed.
pub fn greedy_mesh_faces<T: TextureIndex>(
    voxels: &[VoxelId],
    scratch: &mut MeshScratch,
    textures: &T,
    opaque: bool,
    out: &mut MeshOutput,
) -> Result<(), MesherError> {
    for face in 0..6 {
        let axis = face_axis(face);
        let light = light_dir(face);

        scratch.merged_forward.fill(0);
        for forward in 1..CS_P - 1 {
            let mut bits_walking_right: u64 = 0;
            scratch.merged_right.fill(0);

            for right in 1..CS_P - 1 {
                let bits_here = scratch.face_masks[right + forward * CS_P + face * CS_P2];
                // The last usable row/column has no merge partner; the
                // next index over would be the padding border.
                let bits_forward = if forward >= CS {
                    0
                } else {
                    scratch.face_masks[right + (forward + 1) * CS_P + face * CS_P2]
                };
                let bits_right = if right >= CS {
                    0
                } else {
                    scratch.face_masks[right + 1 + forward * CS_P + face * CS_P2]
                };

                let mut bits_merging_forward = bits_here & bits_forward & !bits_walking_right;
                let bits_merging_right = bits_here & bits_right;

                // Stage 1: grow forward runs where type and AO agree.
                let mut candidates = bits_merging_forward;
                while candidates != 0 {
                    let bit_pos = candidates.trailing_zeros() as usize;
                    candidates &= !(1u64 << bit_pos);

                    if bit_pos == 0 || bit_pos == CS_P - 1 {
                        continue;
                    }

                    if compare_forward(
                        voxels,
                        axis,
                        forward as i32,
                        right as i32,
                        bit_pos as i32,
                        light,
                    )? {
                        scratch.merged_forward[right * CS_P + bit_pos] += 1;
                    } else {
                        bits_merging_forward &= !(1u64 << bit_pos);
                    }
                }

                // Stage 2: bits that stopped walk right or close out.
                let mut bits_stopped_forward = bits_here & !bits_merging_forward;
                while bits_stopped_forward != 0 {
                    let bit_pos = bits_stopped_forward.trailing_zeros() as usize;
                    bits_stopped_forward &= !(1u64 << bit_pos);

                    // Faces of padding voxels belong to neighbor chunks.
                    if bit_pos == 0 || bit_pos == CS_P - 1 {
                        continue;
                    }

                    if bits_merging_right & (1u64 << bit_pos) != 0
                        && scratch.merged_forward[right * CS_P + bit_pos]
                            == scratch.merged_forward[(right + 1) * CS_P + bit_pos]
                        && compare_right(
                            voxels,
                            axis,
                            forward as i32,
                            right as i32,
                            bit_pos as i32,
                            light,
                        )?
                    {
                        bits_walking_right |= 1u64 << bit_pos;
                        scratch.merged_right[bit_pos] += 1;
                        scratch.merged_forward[right * CS_P + bit_pos] = 0;
                        continue;
                    }
                    bits_walking_right &= !(1u64 << bit_pos);

                    emit_rect(
                        voxels, scratch, textures, opaque, out, face, axis, light, right, forward,
                        bit_pos,
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Close the accumulated run at (right, forward, bit_pos) into a quad.
#[allow(clippy::too_many_arguments)]
fn emit_rect<T: TextureIndex>(
    voxels: &[VoxelId],
    scratch: &mut MeshScratch,
    textures: &T,
    opaque: bool,
    out: &mut MeshOutput,
    face: usize,
    axis: usize,
    light: i32,
    right: usize,
    forward: usize,
    bit_pos: usize,
) -> Result<(), MesherError> {
    let forward_run = scratch.merged_forward[right * CS_P + bit_pos] as usize;
    let right_run = scratch.merged_right[bit_pos] as usize;

    let mesh_left = (right - right_run) as u32;
    let mesh_right = right as u32 + 1;
    let mesh_front = (forward - forward_run) as u32;
    let mesh_back = forward as u32 + 1;
    // Positive faces sit on the far side of the voxel.
    let mesh_up = bit_pos as u32 + (face % 2 == 0) as u32;

    let width = mesh_right - mesh_left;
    let height = mesh_back - mesh_front;

    // Neighbor solidity on the lit plane, around the closing cell.
    let r = right as i32;
    let f = forward as i32;
    let depth = bit_pos as i32 + light;
    let ao_f = is_solid(voxel_at(voxels, axis_index(axis, r, f - 1, depth))?);
    let ao_b = is_solid(voxel_at(voxels, axis_index(axis, r, f + 1, depth))?);
    let ao_l = is_solid(voxel_at(voxels, axis_index(axis, r - 1, f, depth))?);
    let ao_r = is_solid(voxel_at(voxels, axis_index(axis, r + 1, f, depth))?);
    let ao_lfc = is_solid(voxel_at(voxels, axis_index(axis, r - 1, f - 1, depth))?);
    let ao_lbc = is_solid(voxel_at(voxels, axis_index(axis, r - 1, f + 1, depth))?);
    let ao_rfc = is_solid(voxel_at(voxels, axis_index(axis, r + 1, f - 1, depth))?);
    let ao_rbc = is_solid(voxel_at(voxels, axis_index(axis, r + 1, f + 1, depth))?);

    let ao_lb = vertex_ao(ao_l, ao_b, ao_lbc);
    let ao_lf = vertex_ao(ao_l, ao_f, ao_lfc);
    let ao_rb = vertex_ao(ao_r, ao_b, ao_rbc);
    let ao_rf = vertex_ao(ao_r, ao_f, ao_rfc);

    scratch.merged_forward[right * CS_P + bit_pos] = 0;
    scratch.merged_right[bit_pos] = 0;

    let layout = &FACE_LAYOUTS[face];
    let voxel = voxel_at(voxels, axis_index(axis, r, f, bit_pos as i32))?;
    let texture = textures.texture_index(voxel, layout.block_face) as u32;

    let mut quad = [PackedVertex::new(1, 1, 1, 0, 0, 0, 0, 0, false); 4];
    for (vertex, corner) in quad.iter_mut().zip(&layout.corners) {
        let corner_right = if corner.right { mesh_right } else { mesh_left };
        let corner_forward = if corner.back { mesh_back } else { mesh_front };
        let [x, y, z] = axis_point(axis, corner_right, corner_forward, mesh_up);
        let ao = match (corner.right, corner.back) {
            (false, true) => ao_lb,
            (false, false) => ao_lf,
            (true, true) => ao_rb,
            (true, false) => ao_rf,
        };
        *vertex = PackedVertex::new(
            x,
            y,
            z,
            texture,
            corner.u.pick(width, height),
            corner.v.pick(width, height),
            face as u32,
            ao as u32,
            opaque,
        );
    }

    out.push_quad(quad, should_flip(ao_lb, ao_lf, ao_rb, ao_rf))
}
