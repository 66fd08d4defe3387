//! Meshing pipeline entry points and buffers.
//!
//! [`mesh_chunk`] is the one-shot entry: validate, build axis columns,
//! cull, sweep, return the packed vertices. Callers meshing many chunks
//! should hold a [`MeshScratch`] and use [`mesh_chunk_with_scratch`] to
//! reuse the intermediate buffers across calls.

use crate::columns::build_axis_columns;
use crate::core::{MesherError, PackedVertex, VoxelId, CS_P, CS_P2, CS_P3, MAX_VERTEX_STORAGE};
use crate::cull::cull_faces;
use crate::merge::greedy_mesh_faces;
use crate::registry::TextureIndex;

/// Reusable intermediate buffers for one meshing call.
///
/// About 100 KiB; allocate once per worker thread, not per chunk.
pub struct MeshScratch {
    pub(crate) axis_cols: Box<[u64]>,
    pub(crate) face_masks: Box<[u64]>,
    pub(crate) merged_forward: Box<[u8]>,
    pub(crate) merged_right: Box<[u8]>,
}

impl MeshScratch {
    pub fn new() -> Self {
        Self {
            axis_cols: vec![0; CS_P2 * 3].into_boxed_slice(),
            face_masks: vec![0; CS_P2 * 6].into_boxed_slice(),
            merged_forward: vec![0; CS_P2].into_boxed_slice(),
            merged_right: vec![0; CS_P].into_boxed_slice(),
        }
    }
}

impl Default for MeshScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Packed vertex output of a meshing call.
///
/// Vertices are appended six per quad, pre-triangulated, grouped by face
/// direction in ascending face id order. Growth is capped at a configured
/// vertex limit; the default is [`MAX_VERTEX_STORAGE`], the checkerboard
/// worst case, so meshing a valid grid cannot hit it.
#[derive(Debug, Clone)]
pub struct MeshOutput {
    pub vertices: Vec<PackedVertex>,
    limit: usize,
}

impl MeshOutput {
    pub fn new() -> Self {
        Self::with_limit(MAX_VERTEX_STORAGE)
    }

    /// An output buffer that errors once a mesh would exceed `limit`
    /// vertices.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            vertices: Vec::new(),
            limit,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append one quad as two triangles.
    ///
    /// `flipped` selects the diagonal: the shared edge runs v2-v4 instead
    /// of v1-v3, keeping AO interpolation along the brighter diagonal.
    pub fn push_quad(
        &mut self,
        [v1, v2, v3, v4]: [PackedVertex; 4],
        flipped: bool,
    ) -> Result<(), MesherError> {
        let needed = self.vertices.len() + 6;
        if needed > self.limit {
            return Err(MesherError::CapacityExceeded {
                needed,
                capacity: self.limit,
            });
        }
        if flipped {
            self.vertices.extend_from_slice(&[v1, v2, v4, v4, v2, v3]);
        } else {
            self.vertices.extend_from_slice(&[v1, v2, v3, v3, v4, v1]);
        }
        Ok(())
    }
}

impl Default for MeshOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a quad's triangulation diagonal should flip.
///
/// The diagonal must connect the brighter corner pair, otherwise AO
/// interpolates darkness across the whole quad instead of hugging the
/// occluded corner.
#[inline]
pub fn should_flip(ao_lb: u8, ao_lf: u8, ao_rb: u8, ao_rf: u8) -> bool {
    ao_lb + ao_rf > ao_rb + ao_lf
}

/// Mesh one padded chunk into a fresh output buffer.
///
/// `voxels` must hold exactly `CS_P3` entries addressed
/// `x + z·CS_P + y·CS_P²`, padding populated with neighbor occupancy.
/// `opaque` tags every emitted vertex with the render pass it belongs to;
/// callers doing a translucent pass mesh twice with filtered grids.
pub fn mesh_chunk<T: TextureIndex>(
    voxels: &[VoxelId],
    textures: &T,
    opaque: bool,
) -> Result<MeshOutput, MesherError> {
    let mut scratch = MeshScratch::new();
    let mut out = MeshOutput::new();
    mesh_chunk_with_scratch(voxels, &mut scratch, textures, opaque, &mut out)?;
    Ok(out)
}

/// Mesh one padded chunk, reusing caller-owned buffers.
///
/// Clears `out` before writing. On error `out` may hold a partial mesh
/// and must not be uploaded.
pub fn mesh_chunk_with_scratch<T: TextureIndex>(
    voxels: &[VoxelId],
    scratch: &mut MeshScratch,
    textures: &T,
    opaque: bool,
    out: &mut MeshOutput,
) -> Result<(), MesherError> {
    if voxels.len() != CS_P3 {
        return Err(MesherError::GridSize { len: voxels.len() });
    }
    out.clear();

    build_axis_columns(voxels, &mut scratch.axis_cols);
    cull_faces(&scratch.axis_cols, &mut scratch.face_masks);
    greedy_mesh_faces(voxels, scratch, textures, opaque, out)?;

    log::debug!(
        "meshed chunk: {} quads, {} vertices",
        out.quad_count(),
        out.vertex_count()
    );
    Ok(())
}
