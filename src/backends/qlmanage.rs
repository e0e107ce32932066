use super::{AttemptError, backend_trait::Backend};
use crate::{scratch_dir::ScratchDir, utils};

use std::path::Path;

/// The macOS Quick Look thumbnail generator.
///
/// `qlmanage` cannot be told where to write its output file. It always
/// writes `<output dir>/<svg file name>.png`, so each attempt is given its
/// own scratch directory and the thumbnail is then moved into place.
pub struct Qlmanage {
    program: String,
    temp_root: String,
}

impl Qlmanage {
    pub fn new(program: &str, temp_root: &str) -> Self {
        Self {
            program: program.to_string(),
            temp_root: temp_root.to_string(),
        }
    }

    pub fn as_argument_list(&self, svg_path: &str, out_dir: &str, size: u32) -> Vec<String> {
        vec![
            String::from("-t"),
            String::from("-s"),
            size.to_string(),
            String::from("-o"),
            out_dir.to_string(),
            svg_path.to_string(),
        ]
    }

    /// Move the thumbnail written by `qlmanage` to the requested output path.
    ///
    /// # Arguments
    ///
    /// * `out_dir` - The directory that `qlmanage` wrote into.
    /// * `svg_path` - The path to the source SVG file.
    /// * `png_path` - The final path of the PNG file.
    fn collect_output(out_dir: &Path, svg_path: &str, png_path: &str) -> Result<(), AttemptError> {
        let file_name = utils::get_file_name(svg_path)
            .ok_or_else(|| AttemptError::MissingOutput(svg_path.to_string()))?;

        let thumbnail = out_dir.join(format!("{file_name}.png"));
        super::require_output(&thumbnail)?;

        super::move_file(&thumbnail, Path::new(png_path))
    }
}

impl Backend for Qlmanage {
    fn name(&self) -> &str {
        "qlmanage"
    }

    fn attempt(&self, svg_path: &str, png_path: &str, size: u32) -> Result<(), AttemptError> {
        let scratch = ScratchDir::new(&self.temp_root, "qlmanage")
            .map_err(|e| AttemptError::Io(e.to_string()))?;
        let out_dir = scratch.get_path().to_string_lossy().to_string();

        let args = self.as_argument_list(svg_path, &out_dir, size);
        super::run_tool(&self.program, &args)?;

        Qlmanage::collect_output(scratch.get_path(), svg_path, png_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn arguments_write_the_thumbnail_into_the_scratch_directory() {
        let backend = Qlmanage::new("qlmanage", "/tmp");
        assert_eq!(
            backend.as_argument_list("designs/spiral.svg", "/tmp/abc-qlmanage", 1024),
            vec![
                "-t",
                "-s",
                "1024",
                "-o",
                "/tmp/abc-qlmanage",
                "designs/spiral.svg"
            ]
        );
    }

    #[test]
    fn thumbnail_is_moved_out_of_the_scratch_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let png = out.path().join("spiral.png");

        fs::write(scratch.path().join("spiral.svg.png"), b"thumbnail").unwrap();

        let r = Qlmanage::collect_output(
            scratch.path(),
            "/designs/spiral.svg",
            &png.to_string_lossy(),
        );

        assert_eq!(r, Ok(()));
        assert_eq!(fs::read(&png).unwrap(), b"thumbnail");
        assert!(!scratch.path().join("spiral.svg.png").exists());
        assert!(!png.starts_with(scratch.path()));
    }

    #[test]
    fn missing_thumbnail_fails_the_attempt() {
        let scratch = tempfile::tempdir().unwrap();

        assert!(matches!(
            Qlmanage::collect_output(scratch.path(), "spiral.svg", "spiral.png"),
            Err(AttemptError::MissingOutput(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn scratch_directory_is_removed_after_a_failed_attempt() {
        let temp_root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let png = out.path().join("icon.png");

        let backend = Qlmanage::new("true", &temp_root.path().to_string_lossy());
        assert!(matches!(
            backend.attempt("appIcon.svg", &png.to_string_lossy(), 180),
            Err(AttemptError::MissingOutput(_))
        ));

        assert_eq!(fs::read_dir(temp_root.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_program_fails_the_attempt() {
        let temp_root = tempfile::tempdir().unwrap();

        let backend = Qlmanage::new(
            "/no/such/qlmanage",
            &temp_root.path().to_string_lossy(),
        );
        assert!(matches!(
            backend.attempt("appIcon.svg", "icon.png", 40),
            Err(AttemptError::ToolNotFound(_))
        ));
    }
}
