//! Block texture lookup.
//!
//! The mesher itself never decides what a face looks like; it asks a
//! [`TextureIndex`] capability for the atlas index of a voxel type seen
//! from a given direction. The world's block registry supplies the real
//! implementation; [`BlockRegistry`] is a table-driven one suitable for
//! most games, [`UniformTextures`] for tests and benches.

use crate::core::VoxelId;

/// Which side of a block a face shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum BlockFace {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Right = 4,
    Left = 5,
}

/// Texture atlas lookup for a voxel type and face direction.
pub trait TextureIndex {
    fn texture_index(&self, voxel: VoxelId, face: BlockFace) -> u8;
}

/// Per-block texture table, indexed by voxel id.
///
/// Six atlas indices per block, addressed by [`BlockFace`]. Unregistered
/// ids resolve to texture 0.
#[derive(Debug, Default, Clone)]
pub struct BlockRegistry {
    faces: Vec<[u8; 6]>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the face textures for a voxel id, in [`BlockFace`] order
    /// (top, bottom, front, back, right, left).
    pub fn register(&mut self, voxel: VoxelId, textures: [u8; 6]) {
        let idx = voxel as usize;
        if self.faces.len() <= idx {
            self.faces.resize(idx + 1, [0; 6]);
        }
        self.faces[idx] = textures;
    }

    /// Register one texture for all six faces of a voxel id.
    pub fn register_uniform(&mut self, voxel: VoxelId, texture: u8) {
        self.register(voxel, [texture; 6]);
    }
}

impl TextureIndex for BlockRegistry {
    #[inline]
    fn texture_index(&self, voxel: VoxelId, face: BlockFace) -> u8 {
        match self.faces.get(voxel as usize) {
            Some(textures) => textures[face as usize],
            None => 0,
        }
    }
}

/// A single texture for every block and face.
#[derive(Debug, Copy, Clone)]
pub struct UniformTextures(pub u8);

impl TextureIndex for UniformTextures {
    #[inline]
    fn texture_index(&self, _voxel: VoxelId, _face: BlockFace) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lookup_per_face() {
        let mut registry = BlockRegistry::new();
        registry.register(1, [10, 11, 12, 13, 14, 15]);

        assert_eq!(registry.texture_index(1, BlockFace::Top), 10);
        assert_eq!(registry.texture_index(1, BlockFace::Bottom), 11);
        assert_eq!(registry.texture_index(1, BlockFace::Front), 12);
        assert_eq!(registry.texture_index(1, BlockFace::Back), 13);
        assert_eq!(registry.texture_index(1, BlockFace::Right), 14);
        assert_eq!(registry.texture_index(1, BlockFace::Left), 15);
    }

    #[test]
    fn unregistered_blocks_resolve_to_zero() {
        let registry = BlockRegistry::new();
        assert_eq!(registry.texture_index(200, BlockFace::Top), 0);
    }

    #[test]
    fn uniform_ignores_inputs() {
        let textures = UniformTextures(7);
        assert_eq!(textures.texture_index(1, BlockFace::Top), 7);
        assert_eq!(textures.texture_index(250, BlockFace::Left), 7);
    }
}
