//! Faces, facelets and colours of a 3x3x3 cube.
//!
//! The cube is centred at the origin with +X to the right, +Y up and +Z
//! toward the default viewer. Each face carries a frame (outward normal,
//! right, up) as seen from outside the cube, and facelets are numbered
//! row-major from the bottom-left of that view:
//!
//! ```text
//! 6 7 8
//! 3 4 5
//! 0 1 2
//! ```

use std::fmt;
use std::str::FromStr;

use cgmath::Vector3;

use crate::error::CubeError;

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = 9;

/// One of the six sides of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Right = 3,
    Left = 4,
    Back = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Right,
        Face::Left,
        Face::Back,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Front => "front",
            Face::Right => "right",
            Face::Left => "left",
            Face::Back => "back",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// Colour of every facelet on this face when the cube is solved.
    pub fn home_color(self) -> Color {
        match self {
            Face::Top => Color::White,
            Face::Front => Color::Green,
            Face::Bottom => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
            Face::Back => Color::Yellow,
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            Face::Top => Vector3::unit_y(),
            Face::Bottom => -Vector3::unit_y(),
            Face::Front => Vector3::unit_z(),
            Face::Right => Vector3::unit_x(),
            Face::Left => -Vector3::unit_x(),
            Face::Back => -Vector3::unit_z(),
        }
    }

    /// Direction of increasing column, seen from outside the face.
    pub fn right(self) -> Vector3<i32> {
        match self {
            Face::Top | Face::Bottom | Face::Front => Vector3::unit_x(),
            Face::Right => -Vector3::unit_z(),
            Face::Left => Vector3::unit_z(),
            Face::Back => -Vector3::unit_x(),
        }
    }

    /// Direction of increasing row, seen from outside the face.
    ///
    /// The top face is read with the front face below it, the bottom face
    /// with the back face below it.
    pub fn up(self) -> Vector3<i32> {
        match self {
            Face::Top => -Vector3::unit_z(),
            Face::Bottom => Vector3::unit_z(),
            Face::Front | Face::Right | Face::Left | Face::Back => Vector3::unit_y(),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Face::ALL
            .into_iter()
            .find(|face| face.name() == lowered)
            .ok_or_else(|| CubeError::invalid("face", s))
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CubeError::invalid("face", value.to_string()))
    }
}

/// Sense of a quarter turn, as seen from outside the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("clockwise"),
            Direction::CounterClockwise => f.write_str("counterclockwise"),
        }
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clockwise" | "cw" => Ok(Direction::Clockwise),
            "counterclockwise" | "counter-clockwise" | "ccw" => Ok(Direction::CounterClockwise),
            _ => Err(CubeError::invalid("direction", s)),
        }
    }
}

/// Sticker colour. One per face in the solved state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Green,
    Blue,
    Red,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
        Color::Yellow,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single sticker position: a face and a 0..9 index on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet {
    pub face: Face,
    pub index: usize,
}

impl Facelet {
    pub const fn new(face: Face, index: usize) -> Self {
        Self { face, index }
    }

    pub fn column(self) -> i32 {
        (self.index % 3) as i32
    }

    pub fn row(self) -> i32 {
        (self.index / 3) as i32
    }

    /// Centre of the cubie carrying this sticker, in unit cubie coordinates
    /// (each component in -1..=1).
    pub fn cubie(self) -> Vector3<i32> {
        let face = self.face;
        face.normal() + face.right() * (self.column() - 1) + face.up() * (self.row() - 1)
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_right_handed() {
        for face in Face::ALL {
            assert_eq!(
                face.right().cross(face.up()),
                face.normal(),
                "right x up != normal for {face:?}"
            );
        }
    }

    #[test]
    fn test_opposite_normals_cancel() {
        for face in Face::ALL {
            assert_eq!(face.normal() + face.opposite().normal(), Vector3::new(0, 0, 0));
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_home_colors_are_distinct() {
        let mut colors: Vec<Color> = Face::ALL.iter().map(|f| f.home_color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_face_parses_from_name_and_ordinal() {
        assert_eq!("front".parse::<Face>().unwrap(), Face::Front);
        assert_eq!(" Back ".parse::<Face>().unwrap(), Face::Back);
        assert_eq!(Face::try_from(3u8).unwrap(), Face::Right);
        for face in Face::ALL {
            assert_eq!(face.to_string().parse::<Face>().unwrap(), face);
            assert_eq!(Face::try_from(face as u8).unwrap(), face);
        }
    }

    #[test]
    fn test_unknown_face_is_invalid_argument() {
        let err = "middle".parse::<Face>().unwrap_err();
        assert!(matches!(err, CubeError::InvalidArgument { what: "face", .. }));
        assert!(Face::try_from(6u8).is_err());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("cw".parse::<Direction>().unwrap(), Direction::Clockwise);
        assert_eq!(
            "Counter-Clockwise".parse::<Direction>().unwrap(),
            Direction::CounterClockwise
        );
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Clockwise.inverse(), Direction::CounterClockwise);
    }

    #[test]
    fn test_facelet_cubie_positions() {
        // Front bottom-left corner is the (-1, -1, +1) cubie.
        assert_eq!(Facelet::new(Face::Front, 0).cubie(), Vector3::new(-1, -1, 1));
        // Top face is read with the front below it.
        assert_eq!(Facelet::new(Face::Top, 1).cubie(), Vector3::new(0, 1, 1));
        assert_eq!(Facelet::new(Face::Top, 7).cubie(), Vector3::new(0, 1, -1));
        // Centre facelets sit on the face axis.
        for face in Face::ALL {
            assert_eq!(Facelet::new(face, 4).cubie(), face.normal());
            let n = face.normal();
            assert_eq!(n.x.abs() + n.y.abs() + n.z.abs(), 1);
        }
    }
}
