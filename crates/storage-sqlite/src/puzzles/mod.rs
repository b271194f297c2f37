mod model;
mod repository;

pub use model::{NewPuzzleDB, PuzzleDB};
pub use repository::PuzzleRepository;
