//! The cube as the rest of the program sees it.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::CubeError;
use crate::face::{Color, Direction, Face};
use crate::state::CubeState;

/// One quarter turn: a face and a sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// The twelve quarter turns, clockwise then counter-clockwise per face.
    pub const ALL: [Move; 12] = [
        Move::new(Face::Top, Direction::Clockwise),
        Move::new(Face::Top, Direction::CounterClockwise),
        Move::new(Face::Bottom, Direction::Clockwise),
        Move::new(Face::Bottom, Direction::CounterClockwise),
        Move::new(Face::Front, Direction::Clockwise),
        Move::new(Face::Front, Direction::CounterClockwise),
        Move::new(Face::Right, Direction::Clockwise),
        Move::new(Face::Right, Direction::CounterClockwise),
        Move::new(Face::Left, Direction::Clockwise),
        Move::new(Face::Left, Direction::CounterClockwise),
        Move::new(Face::Back, Direction::Clockwise),
        Move::new(Face::Back, Direction::CounterClockwise),
    ];

    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move::new(self.face, self.direction.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.face, self.direction)
    }
}

/// Parses `FACE` or `FACE:DIRECTION`; a bare face turns clockwise.
impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, direction) = match s.split_once(':') {
            Some((face, direction)) => (face.parse()?, direction.parse()?),
            None => (s.parse()?, Direction::Clockwise),
        };
        Ok(Move::new(face, direction))
    }
}

/// A single 3x3x3 cube, solved on creation and mutated by quarter turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeModel {
    state: CubeState,
}

impl Default for CubeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeModel {
    pub fn new() -> Self {
        Self {
            state: CubeState::solved(),
        }
    }

    pub fn from_state(state: CubeState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn rotate_face(&mut self, face: Face, direction: Direction) {
        debug!("turning {} {}", face, direction);
        self.state.rotate(face, direction);
    }

    /// Turn a face given by name, e.g. `("front", "ccw")`.
    ///
    /// Both names are resolved before the cube is touched, so an unknown
    /// face or direction leaves the model unchanged.
    pub fn rotate_named(&mut self, face: &str, direction: &str) -> Result<(), CubeError> {
        let face: Face = face.parse()?;
        let direction: Direction = direction.parse()?;
        self.rotate_face(face, direction);
        Ok(())
    }

    pub fn apply_move(&mut self, mv: Move) {
        self.rotate_face(mv.face, mv.direction);
    }

    pub fn apply(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    pub fn color_counts(&self) -> [usize; 6] {
        self.state.color_counts()
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.state.face(face).iter().all(|&c| c == face.home_color()))
    }

    pub fn reset(&mut self) {
        self.state = CubeState::solved();
    }

    pub fn color_at(&self, face: Face, index: usize) -> Color {
        self.state.face(face)[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_solved() {
        let model = CubeModel::new();
        assert!(model.is_solved());
        assert_eq!(model.color_counts(), [9; 6]);
        assert_eq!(model.color_at(Face::Right, 4), Color::Red);
    }

    #[test]
    fn test_single_turn_unsolves() {
        let mut model = CubeModel::new();
        model.rotate_face(Face::Right, Direction::Clockwise);
        assert!(!model.is_solved());
        model.reset();
        assert!(model.is_solved());
    }

    #[test]
    fn test_rotate_named() {
        let mut named = CubeModel::new();
        named.rotate_named("left", "counterclockwise").unwrap();
        let mut typed = CubeModel::new();
        typed.rotate_face(Face::Left, Direction::CounterClockwise);
        assert_eq!(named, typed);
    }

    #[test]
    fn test_rotate_named_rejects_unknown_face_without_mutation() {
        let mut model = CubeModel::new();
        model.rotate_face(Face::Front, Direction::Clockwise);
        let before = model.clone();

        let err = model.rotate_named("middle", "clockwise").unwrap_err();
        assert_eq!(
            err,
            CubeError::InvalidArgument {
                what: "face",
                value: "middle".to_string()
            }
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_rotate_named_rejects_unknown_direction_without_mutation() {
        let mut model = CubeModel::new();
        let err = model.rotate_named("top", "halfway").unwrap_err();
        assert!(matches!(err, CubeError::InvalidArgument { what: "direction", .. }));
        assert!(model.is_solved());
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!(
            "front".parse::<Move>().unwrap(),
            Move::new(Face::Front, Direction::Clockwise)
        );
        assert_eq!(
            "back:ccw".parse::<Move>().unwrap(),
            Move::new(Face::Back, Direction::CounterClockwise)
        );
        assert!("back:".parse::<Move>().is_err());
        assert!("under:cw".parse::<Move>().is_err());
        for mv in Move::ALL {
            let spelled = format!("{}:{}", mv.face, mv.direction);
            assert_eq!(spelled.parse::<Move>().unwrap(), mv);
        }
    }

    #[test]
    fn test_move_inverse_undoes_move() {
        for mv in Move::ALL {
            let mut model = CubeModel::new();
            model.apply(&[
                Move::new(Face::Front, Direction::Clockwise),
                Move::new(Face::Top, Direction::Clockwise),
            ]);
            let before = model.clone();
            model.apply(&[mv, mv.inverse()]);
            assert_eq!(model, before, "{mv}");
        }
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Face::Bottom, Direction::CounterClockwise);
        assert_eq!(mv.to_string(), "bottom counterclockwise");
    }
}
