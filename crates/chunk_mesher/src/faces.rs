//! Face directions and the per-face vertex layout table.
//!
//! Each of the six face directions owns a fixed mapping from a merged
//! rectangle's extremes (left/right, front/back, up) to the four corner
//! positions and UV extents. Quad emission is driven entirely by this
//! table; there is no per-face branching in the sweep itself.

use crate::registry::BlockFace;

/// Face direction indices. Even faces point along the positive axis.
pub const FACE_POS_Y: usize = 0;
pub const FACE_NEG_Y: usize = 1;
pub const FACE_POS_Z: usize = 2;
pub const FACE_NEG_Z: usize = 3;
pub const FACE_POS_X: usize = 4;
pub const FACE_NEG_X: usize = 5;

/// Sweep axis for a face direction (0 = Y columns, 1 = Z, 2 = X).
#[inline]
pub const fn face_axis(face: usize) -> usize {
    face / 2
}

/// Offset toward the open side of a face: +1 for even faces, -1 for odd.
/// AO is sampled one step along this direction from the face plane.
#[inline]
pub const fn light_dir(face: usize) -> i32 {
    if face % 2 == 0 { 1 } else { -1 }
}

/// Corner position for a (right, forward, depth) triple on the given axis.
///
/// The inverse permutation of [`crate::core::axis_index`]: it carries
/// sweep-local corner coordinates back into grid x/y/z.
#[inline]
pub const fn axis_point(axis: usize, right: u32, forward: u32, depth: u32) -> [u32; 3] {
    match axis {
        0 => [forward, depth, right],
        1 => [right, forward, depth],
        _ => [depth, right, forward],
    }
}

/// Which quad extent a corner's UV coordinate takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UvExtent {
    Zero,
    Width,
    Height,
}

impl UvExtent {
    #[inline]
    pub const fn pick(self, width: u32, height: u32) -> u32 {
        match self {
            UvExtent::Zero => 0,
            UvExtent::Width => width,
            UvExtent::Height => height,
        }
    }
}

/// One corner of a quad: which horizontal extremes it sits on, and its UVs.
///
/// The AO corner is implied: `(right, back)` selects among the four
/// vertex AO levels computed at emission.
#[derive(Debug, Copy, Clone)]
pub struct CornerSpec {
    pub right: bool,
    pub back: bool,
    pub u: UvExtent,
    pub v: UvExtent,
}

/// Vertex layout for one face direction.
#[derive(Debug, Copy, Clone)]
pub struct FaceLayout {
    /// Texture face handed to the registry for this direction.
    pub block_face: BlockFace,
    /// Corner order v1..v4; winding is consistent per direction so the
    /// emitted triangles face outward.
    pub corners: [CornerSpec; 4],
}

const fn corner(right: bool, back: bool, u: UvExtent, v: UvExtent) -> CornerSpec {
    CornerSpec { right, back, u, v }
}

use UvExtent::{Height, Width, Zero};

/// Per-face corner layout. The corner order and UV assignments reproduce
/// the winding the renderer expects for each direction; changing an entry
/// flips or shears that face everywhere.
pub const FACE_LAYOUTS: [FaceLayout; 6] = [
    // +Y (top)
    FaceLayout {
        block_face: BlockFace::Top,
        corners: [
            corner(false, false, Zero, Height),
            corner(false, true, Zero, Zero),
            corner(true, true, Width, Zero),
            corner(true, false, Width, Height),
        ],
    },
    // -Y (bottom)
    FaceLayout {
        block_face: BlockFace::Bottom,
        corners: [
            corner(false, true, Zero, Zero),
            corner(false, false, Zero, Height),
            corner(true, false, Width, Height),
            corner(true, true, Width, Zero),
        ],
    },
    // +Z (front)
    FaceLayout {
        block_face: BlockFace::Front,
        corners: [
            corner(false, false, Width, Zero),
            corner(false, true, Width, Height),
            corner(true, true, Zero, Height),
            corner(true, false, Zero, Zero),
        ],
    },
    // -Z (back)
    FaceLayout {
        block_face: BlockFace::Back,
        corners: [
            corner(false, true, Zero, Height),
            corner(false, false, Zero, Zero),
            corner(true, false, Width, Zero),
            corner(true, true, Width, Height),
        ],
    },
    // +X (right)
    FaceLayout {
        block_face: BlockFace::Right,
        corners: [
            corner(false, false, Zero, Zero),
            corner(false, true, Height, Zero),
            corner(true, true, Height, Width),
            corner(true, false, Zero, Width),
        ],
    },
    // -X (left)
    FaceLayout {
        block_face: BlockFace::Left,
        corners: [
            corner(false, true, Zero, Zero),
            corner(false, false, Height, Zero),
            corner(true, false, Height, Width),
            corner(true, true, Zero, Width),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_axis_and_light_dir() {
        assert_eq!(face_axis(FACE_POS_Y), 0);
        assert_eq!(face_axis(FACE_NEG_Y), 0);
        assert_eq!(face_axis(FACE_POS_Z), 1);
        assert_eq!(face_axis(FACE_NEG_X), 2);
        assert_eq!(light_dir(FACE_POS_Y), 1);
        assert_eq!(light_dir(FACE_NEG_Y), -1);
        assert_eq!(light_dir(FACE_POS_X), 1);
        assert_eq!(light_dir(FACE_NEG_Z), -1);
    }

    #[test]
    fn axis_point_permutations() {
        assert_eq!(axis_point(0, 7, 3, 5), [3, 5, 7]);
        assert_eq!(axis_point(1, 3, 5, 7), [3, 5, 7]);
        assert_eq!(axis_point(2, 5, 7, 3), [3, 5, 7]);
    }

    #[test]
    fn every_face_covers_all_four_corners() {
        for layout in &FACE_LAYOUTS {
            let mut seen = [false; 4];
            for c in &layout.corners {
                let idx = (c.right as usize) << 1 | c.back as usize;
                assert!(!seen[idx], "duplicate corner in {:?}", layout.block_face);
                seen[idx] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn uv_extents_span_the_quad() {
        // Each face must use Zero twice and a nonzero extent twice on
        // each UV channel, or merged quads would collapse in texture space.
        for layout in &FACE_LAYOUTS {
            let zero_u = layout
                .corners
                .iter()
                .filter(|c| c.u == UvExtent::Zero)
                .count();
            let zero_v = layout
                .corners
                .iter()
                .filter(|c| c.v == UvExtent::Zero)
                .count();
            assert_eq!(zero_u, 2, "{:?}", layout.block_face);
            assert_eq!(zero_v, 2, "{:?}", layout.block_face);
        }
    }
}
