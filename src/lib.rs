pub mod error;
pub mod file;
pub mod tiles;

mod tiles_tests;

pub use error::ReadError;
pub use file::{read_file, read_text, FileBuffer};
pub use tiles::{count_tiles, survey_tiles, TileSurvey, UnreadableDir};
