use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Depth of the `{z}/{x}/{y}` level. Entries found here are tiles.
pub const TILE_DEPTH: usize = 2;

const HIDDEN_MARKER: u8 = b'.';

/// A directory the walk could not open or enumerate.
#[derive(Debug)]
pub struct UnreadableDir {
    pub path: PathBuf,
    pub depth: usize,
    pub error: io::Error,
}

#[derive(Debug)]
pub struct TileSurvey {
    pub tiles: usize,
    pub unreadable: Vec<UnreadableDir>,
}

impl TileSurvey {
    pub fn is_complete(&self) -> bool {
        self.unreadable.is_empty()
    }
}

/// Count the tiles under `root`, which is expected to be laid out as
/// `{z}/{x}/{y}`. Any other layout gives a meaningless count.
///
/// Directories that cannot be opened count as zero and are logged.
pub fn count_tiles(root: impl AsRef<Path>) -> usize {
    survey_tiles(root).tiles
}

/// Same walk as [`count_tiles`], also returning the directories that could
/// not be read.
pub fn survey_tiles(root: impl AsRef<Path>) -> TileSurvey {
    let root = root.as_ref();
    let mut unreadable = Vec::new();
    let tiles = walk(root, 0, &mut unreadable);
    let survey = TileSurvey { tiles, unreadable };
    debug!(
        "counted {} tiles under {} ({} unreadable directories)",
        survey.tiles,
        root.display(),
        survey.unreadable.len()
    );
    survey
}

fn walk(path: &Path, depth: usize, unreadable: &mut Vec<UnreadableDir>) -> usize {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(error) => {
            warn!("Failed to open {}: {}", path.display(), error);
            unreadable.push(UnreadableDir {
                path: path.to_path_buf(),
                depth,
                error,
            });
            return 0;
        }
    };

    let mut count = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", path.display(), e);
                continue;
            }
        };
        let name = entry.file_name();
        if is_hidden(&name) {
            continue;
        }
        if depth >= TILE_DEPTH {
            count += 1;
        } else {
            count += walk(&path.join(&name), depth + 1, unreadable);
        }
    }
    count
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&HIDDEN_MARKER)
}
