use serde_derive::{Deserialize, Serialize};

/// The locations of the external tools, and the files used by this tool.
/// Program paths default to the bare program names, which will be resolved
/// through `PATH`.
#[derive(Clone, Deserialize, Serialize)]
pub struct Paths {
    /// The path to the librsvg `rsvg-convert` executable.
    #[serde(default = "default_rsvg_convert")]
    pub rsvg_convert: String,
    /// The path to the ImageMagick `convert` executable.
    #[serde(default = "default_imagemagick")]
    pub imagemagick: String,
    /// The path to the macOS Quick Look `qlmanage` executable.
    #[serde(default = "default_qlmanage")]
    pub qlmanage: String,
    /// The directory beneath which scratch directories will be created.
    #[serde(default = "default_temp")]
    pub temp: String,
    /// The path to the log file.
    #[serde(default = "default_log")]
    pub log: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            rsvg_convert: default_rsvg_convert(),
            imagemagick: default_imagemagick(),
            qlmanage: default_qlmanage(),
            temp: default_temp(),
            log: default_log(),
        }
    }
}

fn default_rsvg_convert() -> String {
    "rsvg-convert".to_string()
}

fn default_imagemagick() -> String {
    "convert".to_string()
}

fn default_qlmanage() -> String {
    "qlmanage".to_string()
}

fn default_temp() -> String {
    std::env::temp_dir().to_string_lossy().to_string()
}

fn default_log() -> String {
    "svg-app-icons.log".to_string()
}
