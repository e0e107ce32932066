use super::{AttemptError, backend_trait::Backend};

use std::path::Path;

pub struct ImageMagick {
    program: String,
}

impl ImageMagick {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn as_argument_list(&self, svg_path: &str, png_path: &str, size: u32) -> Vec<String> {
        vec![
            // Keep the transparent regions of the SVG transparent.
            String::from("-background"),
            String::from("none"),
            String::from("-resize"),
            format!("{size}x{size}"),
            svg_path.to_string(),
            png_path.to_string(),
        ]
    }
}

impl Backend for ImageMagick {
    fn name(&self) -> &str {
        "ImageMagick"
    }

    fn attempt(&self, svg_path: &str, png_path: &str, size: u32) -> Result<(), AttemptError> {
        let args = self.as_argument_list(svg_path, png_path, size);
        super::run_tool(&self.program, &args)?;
        super::require_output(Path::new(png_path))
    }
}
