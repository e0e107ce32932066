use super::AttemptError;

pub trait Backend {
    /// The name reported when this backend satisfies a conversion.
    fn name(&self) -> &str;

    /// Rasterize an SVG file into a square PNG file.
    ///
    /// # Arguments
    ///
    /// * `svg_path` - The path to the source SVG file.
    /// * `png_path` - The path at which the PNG file should be written.
    /// * `size` - The width and height of the PNG, in pixels.
    fn attempt(&self, svg_path: &str, png_path: &str, size: u32) -> Result<(), AttemptError>;
}
