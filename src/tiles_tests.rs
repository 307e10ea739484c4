#[cfg(test)]
mod tests {
    use crate::tiles::{count_tiles, survey_tiles};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_tiles(root: &Path, tiles: &[&str]) {
        for tile in tiles {
            let path = root.join(tile);
            fs::create_dir_all(path.parent().unwrap()).expect("Failed to create tile parent");
            fs::write(&path, b"png").expect("Failed to write tile");
        }
    }

    #[test]
    fn test_counts_leaf_directories() {
        let root = TempDir::new().expect("Failed to create temp dir");
        for leaf in ["0/0/0", "0/0/1", "0/1/0"] {
            fs::create_dir_all(root.path().join(leaf)).unwrap();
        }

        assert_eq!(count_tiles(root.path()), 3);
    }

    #[test]
    fn test_counts_tile_files_across_zoom_levels() {
        let root = TempDir::new().unwrap();
        make_tiles(
            root.path(),
            &[
                "0/0/0.png",
                "1/0/0.png",
                "1/0/1.png",
                "1/1/0.png",
                "1/1/1.png",
                "2/3/1.pbf",
            ],
        );

        assert_eq!(count_tiles(root.path()), 6);
    }

    #[test]
    fn test_skips_hidden_entries_at_every_depth() {
        let root = TempDir::new().unwrap();
        make_tiles(
            root.path(),
            &[
                "4/2/1.png",
                "4/2/.1.png.tmp",
                "4/.cache/0/0.png",
                ".git/0/0/0.png",
                "4/2/.DS_Store",
            ],
        );
        fs::write(root.path().join(".metadata"), b"{}").unwrap();

        let survey = survey_tiles(root.path());
        assert_eq!(survey.tiles, 1);
        assert!(survey.is_complete());
    }

    #[test]
    fn test_leaf_entries_are_not_descended_into() {
        let root = TempDir::new().unwrap();
        make_tiles(root.path(), &["0/0/0/nested.png", "0/0/1/a", "0/0/1/b"]);

        assert_eq!(count_tiles(root.path()), 2);
    }

    #[test]
    fn test_missing_root_counts_zero() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");

        let survey = survey_tiles(&missing);
        assert_eq!(survey.tiles, 0);
        assert_eq!(survey.unreadable.len(), 1);
        assert_eq!(survey.unreadable[0].path, missing);
        assert_eq!(survey.unreadable[0].depth, 0);
        assert_eq!(count_tiles(&missing), 0);
    }

    #[test]
    fn test_unreadable_subtree_does_not_stop_siblings() {
        let root = TempDir::new().unwrap();
        make_tiles(root.path(), &["3/1/1.png", "3/1/2.png", "5/0/0.png"]);
        // a plain file where a zoom directory is expected
        fs::write(root.path().join("4"), b"not a directory").unwrap();

        let survey = survey_tiles(root.path());
        assert_eq!(survey.tiles, 3);
        assert_eq!(survey.unreadable.len(), 1);
        assert_eq!(survey.unreadable[0].path, root.path().join("4"));
        assert_eq!(survey.unreadable[0].depth, 1);
    }

    #[test]
    fn test_empty_root() {
        let root = TempDir::new().unwrap();

        let survey = survey_tiles(root.path());
        assert_eq!(survey.tiles, 0);
        assert!(survey.is_complete());
    }
}
