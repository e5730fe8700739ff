//! Facelet storage and the quarter-turn permutation.

use std::ops::{Index, IndexMut};

use crate::adjacency::{AdjacencyTable, ADJACENCY, RIM, RING_LEN};
use crate::face::{Color, Direction, Face, Facelet, FACELETS_PER_FACE};

/// Rim slots a quarter turn advances the colours by.
const RIM_STEP: usize = 2;
/// Periphery slots a quarter turn advances the colours by (one whole strip).
const RING_STEP: usize = 3;

/// Six faces of nine stickers each.
///
/// Generic over the sticker payload so the same permutation can be checked
/// with synthetic markers; the cube itself uses [`Color`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState<T = Color> {
    faces: [[T; FACELETS_PER_FACE]; 6],
}

impl CubeState<Color> {
    /// Every face monochrome in its home colour.
    pub fn solved() -> Self {
        Self::from_fn(|facelet| facelet.face.home_color())
    }

    /// How many facelets carry each colour, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (_, color) in self.iter() {
            counts[color.index()] += 1;
        }
        counts
    }
}

impl CubeState<Facelet> {
    /// Every sticker labelled with the position it starts at.
    pub fn labelled() -> Self {
        Self::from_fn(|facelet| facelet)
    }
}

impl<T: Copy> CubeState<T> {
    pub fn from_fn(mut f: impl FnMut(Facelet) -> T) -> Self {
        let faces = Face::ALL
            .map(|face| std::array::from_fn(|index| f(Facelet::new(face, index))));
        Self { faces }
    }

    pub fn face(&self, face: Face) -> &[T; FACELETS_PER_FACE] {
        &self.faces[face.index()]
    }

    /// All 54 stickers with their positions, face by face.
    pub fn iter(&self) -> impl Iterator<Item = (Facelet, T)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self.face(face)
                .iter()
                .enumerate()
                .map(move |(index, &value)| (Facelet::new(face, index), value))
        })
    }

    /// Apply one quarter turn of `face`.
    ///
    /// The face's own rim turns with it and the twelve bordering facelets on
    /// the four neighbours advance one strip around the face. Every affected
    /// cell is read before any is written.
    pub fn rotate(&mut self, face: Face, direction: Direction) {
        let (rim_shift, ring_shift) = match direction {
            Direction::Clockwise => (RIM_STEP, RING_LEN - RING_STEP),
            Direction::CounterClockwise => (RIM.len() - RIM_STEP, RING_STEP),
        };

        let rim = AdjacencyTable::rim(face);
        let ring = ADJACENCY.ring(face);
        let old_rim = rim.map(|facelet| self[facelet]);
        let old_ring = ring.map(|facelet| self[facelet]);

        for (k, &facelet) in rim.iter().enumerate() {
            self[facelet] = old_rim[(k + rim_shift) % rim.len()];
        }
        for (j, &facelet) in ring.iter().enumerate() {
            self[facelet] = old_ring[(j + ring_shift) % RING_LEN];
        }
    }
}

impl<T> Index<Facelet> for CubeState<T> {
    type Output = T;

    fn index(&self, facelet: Facelet) -> &T {
        &self.faces[facelet.face.index()][facelet.index]
    }
}

impl<T> IndexMut<Facelet> for CubeState<T> {
    fn index_mut(&mut self, facelet: Facelet) -> &mut T {
        &mut self.faces[facelet.face.index()][facelet.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(face: Face, index: usize) -> Facelet {
        Facelet::new(face, index)
    }

    #[test]
    fn test_solved_counts() {
        assert_eq!(CubeState::solved().color_counts(), [9; 6]);
    }

    #[test]
    fn test_iter_visits_every_facelet_once() {
        let state = CubeState::labelled();
        let all: Vec<_> = state.iter().collect();
        assert_eq!(all.len(), 54);
        assert!(all.iter().all(|(position, label)| position == label));
    }

    #[test]
    fn test_front_clockwise_rim() {
        let mut state = CubeState::labelled();
        state.rotate(Face::Front, Direction::Clockwise);
        let expected = [2, 5, 8, 1, 4, 7, 0, 3, 6].map(|i| at(Face::Front, i));
        assert_eq!(state.face(Face::Front), &expected);
    }

    #[test]
    fn test_front_counterclockwise_rim() {
        let mut state = CubeState::labelled();
        state.rotate(Face::Front, Direction::CounterClockwise);
        let expected = [6, 3, 0, 7, 4, 1, 8, 5, 2].map(|i| at(Face::Front, i));
        assert_eq!(state.face(Face::Front), &expected);
    }

    #[test]
    fn test_front_clockwise_moves_strips_clockwise() {
        let mut state = CubeState::labelled();
        state.rotate(Face::Front, Direction::Clockwise);

        // left -> top
        assert_eq!(state[at(Face::Top, 0)], at(Face::Left, 2));
        assert_eq!(state[at(Face::Top, 1)], at(Face::Left, 5));
        assert_eq!(state[at(Face::Top, 2)], at(Face::Left, 8));
        // top -> right
        assert_eq!(state[at(Face::Right, 6)], at(Face::Top, 0));
        assert_eq!(state[at(Face::Right, 3)], at(Face::Top, 1));
        assert_eq!(state[at(Face::Right, 0)], at(Face::Top, 2));
        // right -> bottom
        assert_eq!(state[at(Face::Bottom, 8)], at(Face::Right, 6));
        assert_eq!(state[at(Face::Bottom, 7)], at(Face::Right, 3));
        assert_eq!(state[at(Face::Bottom, 6)], at(Face::Right, 0));
        // bottom -> left
        assert_eq!(state[at(Face::Left, 2)], at(Face::Bottom, 8));
        assert_eq!(state[at(Face::Left, 5)], at(Face::Bottom, 7));
        assert_eq!(state[at(Face::Left, 8)], at(Face::Bottom, 6));
    }

    #[test]
    fn test_top_clockwise_moves_front_row_to_left() {
        let mut state = CubeState::solved();
        state.rotate(Face::Top, Direction::Clockwise);
        assert_eq!(state.face(Face::Left)[6..], [Color::Green; 3]);
        assert_eq!(state.face(Face::Front)[6..], [Color::Red; 3]);
        assert_eq!(state.face(Face::Right)[6..], [Color::Yellow; 3]);
        assert_eq!(state.face(Face::Back)[6..], [Color::Orange; 3]);
        assert_eq!(state.face(Face::Front)[..6], [Color::Green; 6]);
        assert_eq!(state.face(Face::Top), &[Color::White; 9]);
        assert_eq!(state.face(Face::Bottom), &[Color::Blue; 9]);
    }

    #[test]
    fn test_centre_never_moves() {
        let mut state = CubeState::labelled();
        for face in Face::ALL {
            state.rotate(face, Direction::Clockwise);
            state.rotate(face.opposite(), Direction::CounterClockwise);
        }
        for face in Face::ALL {
            assert_eq!(state[at(face, 4)], at(face, 4));
        }
    }
}
