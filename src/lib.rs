//! A 3x3x3 Rubik's cube: facelet model, quarter turns and the data the
//! renderer needs to draw it.

pub mod adjacency;
pub mod error;
pub mod face;
pub mod model;
pub mod palette;
pub mod state;
pub mod view;

pub use error::{CubeError, TableError};
pub use face::{Color, Direction, Face, Facelet};
pub use model::{CubeModel, Move};
pub use state::CubeState;
