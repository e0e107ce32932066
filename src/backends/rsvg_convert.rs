use super::{AttemptError, backend_trait::Backend};

use std::path::Path;

/// The librsvg converter. This gives the best quality output.
pub struct RsvgConvert {
    program: String,
}

impl RsvgConvert {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn as_argument_list(&self, svg_path: &str, png_path: &str, size: u32) -> Vec<String> {
        vec![
            String::from("-w"),
            size.to_string(),
            String::from("-h"),
            size.to_string(),
            String::from("-o"),
            png_path.to_string(),
            // The input file path should always go last.
            svg_path.to_string(),
        ]
    }
}

impl Backend for RsvgConvert {
    fn name(&self) -> &str {
        "rsvg-convert"
    }

    fn attempt(&self, svg_path: &str, png_path: &str, size: u32) -> Result<(), AttemptError> {
        let args = self.as_argument_list(svg_path, png_path, size);
        super::run_tool(&self.program, &args)?;
        super::require_output(Path::new(png_path))
    }
}
