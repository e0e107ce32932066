use crate::utils;

use std::{fs, io, path::PathBuf};

/// A uniquely named temporary directory. The directory, and anything left
/// within it, is removed when this instance is dropped.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a new scratch directory.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory beneath which the scratch directory will be created.
    /// * `postfix` - The postfix notation for the purpose of this directory.
    pub fn new(root: &str, postfix: &str) -> io::Result<Self> {
        let path = ScratchDir::generate_temp_dir_path(root, postfix);

        // The scratch directory itself must not already exist.
        fs::create_dir_all(root)?;
        fs::create_dir(&path)?;

        Ok(Self { path })
    }

    /// Generate a temporary directory path.
    ///
    /// # Arguments
    ///
    /// * `root` - The root temporary directory.
    /// * `postfix` - The postfix notation for the purpose of this directory.
    fn generate_temp_dir_path(root: &str, postfix: &str) -> PathBuf {
        let mut temp_path = PathBuf::from(root);
        temp_path.push(format!("{}-{postfix}", utils::generate_random_name(16)));

        temp_path
    }

    /// Get the scratch directory's path.
    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        _ = fs::remove_dir_all(&self.path);
    }
}
