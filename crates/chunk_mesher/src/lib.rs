//! Binary greedy meshing with per-vertex ambient occlusion.
//!
//! Converts a 64³ padded voxel chunk (62³ usable, 1-voxel neighbor
//! padding) into a GPU-ready triangle mesh. Occupancy is packed into
//! 64-bit axis columns so face culling runs one bitwise expression per
//! column, and visible faces merge into maximal rectangles per face
//! direction. Merging respects voxel type and ambient occlusion, so
//! merged quads never smear lighting across a discontinuity.
//!
//! ```
//! use chunk_mesher::{mesh_chunk, voxel_index, UniformTextures, CS_P3};
//!
//! let mut voxels = vec![0u8; CS_P3];
//! voxels[voxel_index(31, 31, 31)] = 1;
//!
//! let mesh = mesh_chunk(&voxels, &UniformTextures(0), true)?;
//! assert_eq!(mesh.vertex_count(), 36);
//! # Ok::<(), chunk_mesher::MesherError>(())
//! ```
//!
//! The input grid is addressed `x + z·CS_P + y·CS_P²`. Padding must be
//! filled from the six neighbor chunks before meshing; faces of padded
//! voxels are never emitted, they only cull and shade boundary faces.

pub mod ao;
pub mod columns;
pub mod core;
pub mod cull;
pub mod faces;
pub mod merge;
pub mod mesh;
pub mod registry;

pub use crate::core::{
    voxel_index, MesherError, PackedVertex, VoxelId, AIR, CS, CS_P, CS_P2, CS_P3,
    MAX_VERTEX_STORAGE,
};
pub use mesh::{mesh_chunk, mesh_chunk_with_scratch, MeshOutput, MeshScratch};
pub use registry::{BlockFace, BlockRegistry, TextureIndex, UniformTextures};
