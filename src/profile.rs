use crate::{backends::BackendKind, logger, paths::Paths, utils};

use serde_derive::{Deserialize, Serialize};
use std::{ffi::OsStr, fs, path::Path};

#[derive(Deserialize, Serialize)]
pub struct InputProfile {
    /// The locations of the external tools.
    #[serde(default)]
    pub tools: Paths,
    /// Parameters for generating the app icon set from a single SVG.
    pub app_icons: Option<AppIconParams>,
    /// Parameters for converting a fixed list of design SVGs.
    pub designs: Option<DesignParams>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IconTarget {
    /// The name of the output file, within the output directory.
    pub file_name: String,
    /// The width and height of the icon, in pixels.
    pub size: u32,
}

impl IconTarget {
    pub fn new(file_name: &str, size: u32) -> Self {
        Self {
            file_name: file_name.to_string(),
            size,
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct AppIconParams {
    /// The root directory of the project. Relative paths below are resolved against this.
    pub project_root: String,
    /// The source SVG file.
    #[serde(default = "default_source")]
    pub source: String,
    /// The icon set directory. This will be created if it does not exist.
    pub output_dir: String,
    /// The icons to be generated, in order.
    #[serde(default = "default_targets")]
    pub targets: Vec<IconTarget>,
    /// The backends to be tried for each icon, in order of preference.
    #[serde(default = "BackendKind::default_chain")]
    pub backends: Vec<BackendKind>,
    /// The advice given when one or more icons could not be generated.
    #[serde(default = "default_install_hint")]
    pub install_hint: String,
    /// The manual steps to be listed once every icon has been generated.
    #[serde(default = "default_next_steps")]
    pub next_steps: Vec<String>,
}

impl AppIconParams {
    pub fn source_path(&self) -> String {
        utils::join_path_segments(&self.project_root, &[&self.source])
    }

    pub fn output_path(&self) -> String {
        utils::join_path_segments(&self.project_root, &[&self.output_dir])
    }

    pub fn validate(&self) -> bool {
        let mut valid = true;

        if self.targets.is_empty() {
            logger::log("No icon targets were specified.", true);
            valid = false;
        }

        for target in &self.targets {
            if target.file_name.trim().is_empty() {
                logger::log("An icon target has an empty file name.", true);
                valid = false;
            } else if !is_bare_file_name(&target.file_name) {
                logger::log(
                    format!(
                        "The icon target '{}' must be a file name within the output directory.",
                        target.file_name
                    ),
                    true,
                );
                valid = false;
            }

            if target.size == 0 {
                logger::log(
                    format!("The icon target '{}' has a size of zero.", target.file_name),
                    true,
                );
                valid = false;
            }
        }

        for (i, target) in self.targets.iter().enumerate() {
            if self.targets[..i]
                .iter()
                .any(|t| t.file_name == target.file_name)
            {
                logger::log(
                    format!("The icon target '{}' is specified more than once.", target.file_name),
                    true,
                );
                valid = false;
            }
        }

        if self.backends.is_empty() {
            logger::log("No conversion backends were specified.", true);
            valid = false;
        }

        valid
    }
}

#[derive(Deserialize, Serialize)]
pub struct DesignParams {
    /// The directory containing the design SVGs. The PNGs are written alongside them.
    pub base_dir: String,
    /// The SVG file names, relative to the base directory.
    pub files: Vec<String>,
    /// The width and height of each PNG, in pixels.
    #[serde(default = "default_design_size")]
    pub size: u32,
    /// The backend used for every conversion.
    #[serde(default = "default_design_backend")]
    pub backend: BackendKind,
}

impl DesignParams {
    pub fn validate(&self) -> bool {
        let mut valid = true;

        if !utils::dir_exists(&self.base_dir) {
            logger::log(
                format!("The design directory '{}' does not exist.", self.base_dir),
                true,
            );
            valid = false;
        }

        if self.files.is_empty() {
            logger::log("No design files were specified.", true);
            valid = false;
        }

        if self.size == 0 {
            logger::log("The design output size must be greater than zero.", true);
            valid = false;
        }

        valid
    }
}

impl InputProfile {
    /// Read and parse a profile from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the profile file.
    pub fn from_file(path: &str) -> Option<Self> {
        if !utils::file_exists(path) {
            logger::log(
                format!("The profile file '{path}' does not exist."),
                true,
            );
            return None;
        }

        let json = match fs::read_to_string(path) {
            Ok(j) => j,
            Err(e) => {
                logger::log(
                    format!("An error occurred while attempting to read the profile file: {e}"),
                    true,
                );
                return None;
            }
        };

        InputProfile::parse_json(&json)
    }

    pub fn parse_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<InputProfile>(json) {
            Ok(p) => Some(p),
            Err(e) => {
                logger::log(
                    format!("An error occurred while attempting to parse the JSON data: {e}"),
                    true,
                );
                None
            }
        }
    }
}

/// Is the name a single path component, with no directories, parent
/// references or root?
fn is_bare_file_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(OsStr::new(name))
}

fn default_source() -> String {
    "appIcon.svg".to_string()
}

/// The iOS app icon sizes.
pub fn default_targets() -> Vec<IconTarget> {
    vec![
        IconTarget::new("icon-40x40@2x.png", 40),
        IconTarget::new("icon-60x60@2x.png", 60),
        IconTarget::new("icon-58x58@2x.png", 58),
        IconTarget::new("icon-87x87@3x.png", 87),
        IconTarget::new("icon-80x80@2x.png", 80),
        IconTarget::new("icon-120x120@3x.png", 120),
        IconTarget::new("icon-120x120@2x.png", 120),
        IconTarget::new("icon-180x180@3x.png", 180),
        IconTarget::new("icon-1024x1024.png", 1024),
    ]
}

fn default_install_hint() -> String {
    "brew install librsvg".to_string()
}

fn default_next_steps() -> Vec<String> {
    vec![
        "Open the project in Xcode".to_string(),
        "Select the app target".to_string(),
        "Go to 'General' tab".to_string(),
        "Under 'App Icons and Launch Screen', select 'AppIcon'".to_string(),
        "Build and run to see your new icon!".to_string(),
    ]
}

fn default_design_size() -> u32 {
    1024
}

fn default_design_backend() -> BackendKind {
    BackendKind::Qlmanage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_icons(json: &str) -> AppIconParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn minimal_app_icon_section_uses_the_ios_defaults() {
        let params = app_icons(
            r#"{ "project_root": "/projects/monitor", "output_dir": "Monitor/Assets.xcassets/AppIcon.appiconset" }"#,
        );

        assert_eq!(params.targets.len(), 9);
        assert_eq!(params.targets[0], IconTarget::new("icon-40x40@2x.png", 40));
        assert_eq!(params.targets[8], IconTarget::new("icon-1024x1024.png", 1024));
        assert_eq!(params.backends, BackendKind::default_chain());
        assert_eq!(params.install_hint, "brew install librsvg");
        assert_eq!(params.next_steps.len(), 5);
        assert!(params.validate());
    }

    #[test]
    fn relative_paths_are_resolved_against_the_project_root() {
        let params = app_icons(
            r#"{ "project_root": "/projects/monitor", "output_dir": "Monitor/Assets.xcassets/AppIcon.appiconset" }"#,
        );

        assert_eq!(
            params.source_path(),
            std::path::Path::new("/projects/monitor")
                .join("appIcon.svg")
                .to_string_lossy()
        );
        assert!(params.output_path().ends_with("AppIcon.appiconset"));
        assert!(params.output_path().starts_with("/projects/monitor"));
    }

    #[test]
    fn target_order_is_preserved() {
        let params = app_icons(
            r#"{
                "project_root": ".",
                "output_dir": "out",
                "targets": [
                    { "file_name": "b.png", "size": 20 },
                    { "file_name": "a.png", "size": 10 }
                ]
            }"#,
        );

        let names: Vec<&str> = params.targets.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.png"]);
    }

    #[test]
    fn zero_sizes_and_duplicate_names_are_rejected() {
        let zero = app_icons(
            r#"{ "project_root": ".", "output_dir": "out", "targets": [ { "file_name": "a.png", "size": 0 } ] }"#,
        );
        assert!(!zero.validate());

        let duplicate = app_icons(
            r#"{
                "project_root": ".",
                "output_dir": "out",
                "targets": [
                    { "file_name": "a.png", "size": 10 },
                    { "file_name": "a.png", "size": 20 }
                ]
            }"#,
        );
        assert!(!duplicate.validate());
    }

    #[test]
    fn target_names_must_stay_inside_the_output_directory() {
        for name in ["/etc/evil.png", "../up.png", "sub/a.png", ".."] {
            let json = format!(
                r#"{{ "project_root": ".", "output_dir": "out", "targets": [ {{ "file_name": {name:?}, "size": 40 }} ] }}"#
            );
            assert!(!app_icons(&json).validate(), "'{name}' was accepted");
        }

        let plain = app_icons(
            r#"{ "project_root": ".", "output_dir": "out", "targets": [ { "file_name": "icon-40x40@2x.png", "size": 40 } ] }"#,
        );
        assert!(plain.validate());
    }

    #[test]
    fn empty_backend_list_is_rejected() {
        let params = app_icons(r#"{ "project_root": ".", "output_dir": "out", "backends": [] }"#);
        assert!(!params.validate());
    }

    #[test]
    fn design_section_defaults_to_qlmanage_at_1024() {
        let dir = tempfile::tempdir().unwrap();
        let json = format!(
            r#"{{ "base_dir": {:?}, "files": ["spiral-professional-v1.svg"] }}"#,
            dir.path().to_string_lossy()
        );
        let params: DesignParams = serde_json::from_str(&json).unwrap();

        assert_eq!(params.size, 1024);
        assert_eq!(params.backend, BackendKind::Qlmanage);
        assert!(params.validate());
    }

    #[test]
    fn design_section_requires_an_existing_directory() {
        let params: DesignParams =
            serde_json::from_str(r#"{ "base_dir": "/no/such/designs", "files": ["a.svg"] }"#)
                .unwrap();
        assert!(!params.validate());
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(InputProfile::parse_json("{ not json").is_none());
    }

    #[test]
    fn profile_sections_are_optional() {
        let profile = InputProfile::parse_json("{}").unwrap();

        assert!(profile.app_icons.is_none());
        assert!(profile.designs.is_none());
        assert_eq!(profile.tools.rsvg_convert, "rsvg-convert");
    }

    #[test]
    fn missing_profile_file_is_rejected() {
        assert!(InputProfile::from_file("/no/such/profile.json").is_none());
    }
}
