pub mod controller_tree {
    use tempfile::TempDir;

    /// Materialize controller marker files (and their directories) under a
    /// fresh temporary root. Paths use `/` separators.
    pub fn create_tree(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("failed to create parent dirs");
            }
            std::fs::write(&path, b"").expect("failed to write marker file");
        }
        dir
    }
}
