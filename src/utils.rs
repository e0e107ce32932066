use std::path::Path;

/// Return a boolean value indicating whether a given directory exists.
///
/// # Arguments
///
/// * `path` - The path to the directory.
#[inline]
pub fn dir_exists(path: &str) -> bool {
    Path::new(path).is_dir()
}

/// Return a boolean value indicating whether a given file exists.
///
/// # Arguments
///
/// * `path` - The path to the file.
#[inline]
pub fn file_exists(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Get the final component of a path, if there is one.
///
/// # Arguments
///
/// * `fp` - The path to the file.
#[inline]
pub fn get_file_name(fp: &str) -> Option<String> {
    Path::new(fp)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
}

/// Join several path segments into a single path.
///
/// # Arguments
///
/// * `base` - The base (root) path.
/// * `paths` - A slice of strings to be appended to the base path.
#[inline]
pub fn join_path_segments<S: AsRef<str>>(base: &str, paths: &[S]) -> String {
    let mut p = Path::new(base).to_path_buf();

    for path in paths {
        p.push(path.as_ref());
    }

    p.to_string_lossy().to_string()
}

/// Swap the extensions of a specified file path.
///
/// # Arguments
///
/// * `fp` - The path to the file.
/// * `new_ext` - The new extension to be applied.
///
#[inline]
pub fn swap_file_extension(fp: &str, new_ext: &str) -> String {
    use std::path::PathBuf;

    let mut path = PathBuf::from(fp);
    path.set_extension(new_ext);

    path.to_string_lossy().to_string()
}

/// Generate a random alphanumeric name.
///
/// # Arguments
///
/// * `len` - The number of characters in the name.
pub fn generate_random_name(len: usize) -> String {
    use rand::{Rng, distr::Alphanumeric};

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Return the plural suffix for a count.
#[inline]
pub fn plural(count: usize) -> &'static str {
    if count != 1 { "s" } else { "" }
}
