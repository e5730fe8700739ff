//! Static cube geometry: which facelets move when a face is turned.
//!
//! For every face the table lists the four neighbouring faces in the order
//! met when walking clockwise around the face (seen from outside), and for
//! each neighbour the three facelets bordering the face, listed in that same
//! walking order. Concatenated, the four strips form the twelve-facelet
//! periphery ring that a quarter turn advances by one strip.

use cgmath::Vector3;

use crate::error::TableError;
use crate::face::{Face, Facelet, FACELETS_PER_FACE};

/// Number of facelets on the periphery ring of a face.
pub const RING_LEN: usize = 12;

/// The eight outer facelets of a face: bottom row left to right, up the
/// right column, top row right to left, down the left column.
///
/// A clockwise quarter turn pulls every slot's colour from two slots ahead
/// in this sequence.
pub const RIM: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Three facelets of one neighbouring face that border the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

/// Neighbour strips per face, indexed by [`Face::index`].
#[derive(Debug)]
pub struct AdjacencyTable {
    rows: [[Strip; 4]; 6],
}

#[rustfmt::skip]
pub static ADJACENCY: AdjacencyTable = AdjacencyTable {
    rows: [
        // top
        [strip(Face::Back, [8, 7, 6]), strip(Face::Right, [8, 7, 6]),
         strip(Face::Front, [8, 7, 6]), strip(Face::Left, [8, 7, 6])],
        // bottom
        [strip(Face::Front, [0, 1, 2]), strip(Face::Right, [0, 1, 2]),
         strip(Face::Back, [0, 1, 2]), strip(Face::Left, [0, 1, 2])],
        // front
        [strip(Face::Top, [0, 1, 2]), strip(Face::Right, [6, 3, 0]),
         strip(Face::Bottom, [8, 7, 6]), strip(Face::Left, [2, 5, 8])],
        // right
        [strip(Face::Top, [2, 5, 8]), strip(Face::Back, [6, 3, 0]),
         strip(Face::Bottom, [2, 5, 8]), strip(Face::Front, [2, 5, 8])],
        // left
        [strip(Face::Top, [6, 3, 0]), strip(Face::Front, [6, 3, 0]),
         strip(Face::Bottom, [6, 3, 0]), strip(Face::Back, [2, 5, 8])],
        // back
        [strip(Face::Top, [8, 7, 6]), strip(Face::Left, [6, 3, 0]),
         strip(Face::Bottom, [0, 1, 2]), strip(Face::Right, [2, 5, 8])],
    ],
};

impl AdjacencyTable {
    pub fn strips(&self, face: Face) -> &[Strip; 4] {
        &self.rows[face.index()]
    }

    /// The four neighbouring faces, clockwise.
    pub fn neighbors(&self, face: Face) -> [Face; 4] {
        self.strips(face).map(|strip| strip.face)
    }

    /// The twelve periphery facelets of `face`, clockwise.
    pub fn ring(&self, face: Face) -> [Facelet; RING_LEN] {
        let strips = self.strips(face);
        std::array::from_fn(|j| {
            let strip = &strips[j / 3];
            Facelet::new(strip.face, strip.indices[j % 3])
        })
    }

    /// The eight rim facelets of `face`, in [`RIM`] order.
    pub fn rim(face: Face) -> [Facelet; 8] {
        RIM.map(|index| Facelet::new(face, index))
    }

    /// Check every row against the cube's geometry.
    ///
    /// Each periphery facelet must lie in the turned face's layer, the
    /// twelve must be distinct, and a geometric clockwise quarter turn must
    /// carry strip `k` exactly onto strip `k + 1` (and the rim two slots
    /// back along [`RIM`]).
    pub fn validate(&self) -> Result<(), TableError> {
        for face in Face::ALL {
            self.validate_row(face)?;
        }
        Ok(())
    }

    fn validate_row(&self, face: Face) -> Result<(), TableError> {
        let fail = |reason: String| Err(TableError { face, reason });
        let axis = face.normal();

        let mut neighbors = self.neighbors(face).to_vec();
        if neighbors.contains(&face) || neighbors.contains(&face.opposite()) {
            return fail(format!("neighbours {neighbors:?} include {face} or its opposite"));
        }
        neighbors.sort();
        neighbors.dedup();
        if neighbors.len() != 4 {
            return fail("neighbours are not four distinct faces".to_string());
        }

        let ring = self.ring(face);
        for facelet in ring {
            if facelet.index >= FACELETS_PER_FACE || facelet.index == 4 {
                return fail(format!("{facelet} is not an edge-row facelet"));
            }
            if dot(facelet.cubie(), axis) != 1 {
                return fail(format!("{facelet} does not border {face}"));
            }
        }
        let mut distinct = ring.to_vec();
        distinct.sort();
        distinct.dedup();
        if distinct.len() != RING_LEN {
            return fail("periphery facelets repeat".to_string());
        }

        for (j, facelet) in ring.iter().enumerate() {
            let target = ring[(j + 3) % RING_LEN];
            if turn_clockwise(facelet.cubie(), axis) != target.cubie()
                || turn_clockwise(facelet.face.normal(), axis) != target.face.normal()
            {
                return fail(format!(
                    "a clockwise turn carries {facelet} somewhere other than {target}"
                ));
            }
        }

        let rim = Self::rim(face);
        for (k, facelet) in rim.iter().enumerate() {
            let target = rim[(k + 6) % RIM.len()];
            if turn_clockwise(facelet.cubie(), axis) != target.cubie() {
                return fail(format!(
                    "a clockwise turn carries {facelet} somewhere other than {target}"
                ));
            }
        }
        Ok(())
    }
}

fn dot(a: Vector3<i32>, b: Vector3<i32>) -> i32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Quarter turn of `v` about `axis`, clockwise when looking down at the
/// tip of `axis`.
fn turn_clockwise(v: Vector3<i32>, axis: Vector3<i32>) -> Vector3<i32> {
    axis * dot(axis, v) - axis.cross(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_valid() {
        assert_eq!(ADJACENCY.validate(), Ok(()));
    }

    #[test]
    fn test_turn_clockwise_about_front_moves_up_to_right() {
        let z = Face::Front.normal();
        assert_eq!(turn_clockwise(Vector3::unit_y(), z), Vector3::unit_x());
        assert_eq!(turn_clockwise(Vector3::unit_x(), z), -Vector3::unit_y());
        assert_eq!(turn_clockwise(z, z), z);
    }

    #[test]
    fn test_neighbors_follow_face_frames() {
        for face in Face::ALL {
            let neighbors = ADJACENCY.neighbors(face);
            assert_eq!(neighbors[0].normal(), face.up(), "{face}");
            assert_eq!(neighbors[1].normal(), face.right(), "{face}");
            assert_eq!(neighbors[2].normal(), -face.up(), "{face}");
            assert_eq!(neighbors[3].normal(), -face.right(), "{face}");
        }
    }

    #[test]
    fn test_front_ring_order() {
        let ring = ADJACENCY.ring(Face::Front);
        assert_eq!(ring[0], Facelet::new(Face::Top, 0));
        assert_eq!(ring[3], Facelet::new(Face::Right, 6));
        assert_eq!(ring[8], Facelet::new(Face::Bottom, 6));
        assert_eq!(ring[11], Facelet::new(Face::Left, 8));
    }

    #[test]
    fn test_ring_membership_counts() {
        // Edge facelets sit on one foreign ring, corners on two, centres on none.
        let mut hits = [[0u8; FACELETS_PER_FACE]; 6];
        for face in Face::ALL {
            for facelet in ADJACENCY.ring(face) {
                hits[facelet.face.index()][facelet.index] += 1;
            }
        }
        for face in Face::ALL {
            for index in 0..FACELETS_PER_FACE {
                let expected = match index {
                    4 => 0,
                    0 | 2 | 6 | 8 => 2,
                    _ => 1,
                };
                assert_eq!(hits[face.index()][index], expected, "{face}[{index}]");
            }
        }
    }

    #[test]
    fn test_validate_reports_swapped_strips() {
        let mut rows = ADJACENCY.rows;
        rows[Face::Bottom.index()].swap(2, 3);
        let broken = AdjacencyTable { rows };
        let err = broken.validate().unwrap_err();
        assert_eq!(err.face, Face::Bottom);
    }

    #[test]
    fn test_validate_reports_reversed_strip() {
        let mut rows = ADJACENCY.rows;
        rows[Face::Front.index()][1].indices = [0, 3, 6];
        let broken = AdjacencyTable { rows };
        assert_eq!(broken.validate().unwrap_err().face, Face::Front);
    }
}
