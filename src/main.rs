mod backends;
mod converters;
mod design_processor;
mod icon_processor;
mod logger;
mod paths;
mod profile;
mod scratch_dir;
mod utils;

use converters::FallbackChain;
use design_processor::DesignProcessor;
use icon_processor::{FAILURE_EXIT_CODE, IconProcessor};
use profile::InputProfile;
use std::{env, process};

const DEFAULT_PROFILE_PATH: &str = "profile.json";

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    AppIcons,
    Designs,
}

#[derive(Debug, PartialEq, Eq)]
struct RunArgs {
    mode: Mode,
    profile_path: String,
    logging: bool,
}

/// Parse the command line arguments: `[app-icons|designs] [PROFILE] [--logging]`.
/// A profile path ending in `.json` may also be given without a mode.
fn parse_args<I: Iterator<Item = String>>(args: I) -> Option<RunArgs> {
    let mut logging = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg.to_lowercase() == "--logging" {
            logging = true;
        } else {
            positional.push(arg);
        }
    }

    // A lone profile path implies the default mode.
    if positional
        .first()
        .is_some_and(|p| p.to_lowercase().ends_with(".json"))
    {
        positional.insert(0, "app-icons".to_string());
    }

    let mode = match positional.first().map(String::as_str) {
        None | Some("app-icons") => Mode::AppIcons,
        Some("designs") => Mode::Designs,
        Some(other) => {
            logger::log(
                format!("Unknown mode '{other}', expected 'app-icons' or 'designs'."),
                true,
            );
            return None;
        }
    };

    if positional.len() > 2 {
        logger::log("Too many arguments were specified.", true);
        return None;
    }

    Some(RunArgs {
        mode,
        profile_path: positional
            .get(1)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string()),
        logging,
    })
}

fn run() -> i32 {
    let args = match parse_args(env::args().skip(1)) {
        Some(a) => a,
        None => return FAILURE_EXIT_CODE,
    };

    // Read and parse the profile data file.
    let profile = match InputProfile::from_file(&args.profile_path) {
        Some(p) => p,
        None => return FAILURE_EXIT_CODE,
    };

    // Do we need to enable logging?
    if args.logging {
        logger::set_enabled(true, &profile.tools.log);
    }

    logger::section("Initial Setup", false);
    logger::log(format!("Using the profile at '{}'.", args.profile_path), false);

    match args.mode {
        Mode::AppIcons => run_app_icons(&profile),
        Mode::Designs => run_designs(&profile),
    }
}

fn run_app_icons(profile: &InputProfile) -> i32 {
    let params = match &profile.app_icons {
        Some(p) => p,
        None => {
            logger::log("The profile does not contain an 'app_icons' section.", true);
            return FAILURE_EXIT_CODE;
        }
    };

    if !params.validate() {
        return FAILURE_EXIT_CODE;
    }

    let processor = match IconProcessor::new(params) {
        Some(p) => p,
        None => return FAILURE_EXIT_CODE,
    };

    let chain = FallbackChain::from_kinds(&params.backends, &profile.tools);
    processor.process(&chain).exit_code()
}

fn run_designs(profile: &InputProfile) -> i32 {
    let params = match &profile.designs {
        Some(p) => p,
        None => {
            logger::log("The profile does not contain a 'designs' section.", true);
            return FAILURE_EXIT_CODE;
        }
    };

    if !params.validate() {
        return FAILURE_EXIT_CODE;
    }

    let backend = params.backend.create(&profile.tools);
    DesignProcessor::new(params)
        .process(backend.as_ref())
        .exit_code()
}

fn main() {
    process::exit(run());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<RunArgs> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_generate_app_icons_from_the_default_profile() {
        assert_eq!(
            parse(&[]),
            Some(RunArgs {
                mode: Mode::AppIcons,
                profile_path: "profile.json".to_string(),
                logging: false,
            })
        );
    }

    #[test]
    fn mode_profile_and_logging_flag() {
        assert_eq!(
            parse(&["designs", "untwist.json", "--LOGGING"]),
            Some(RunArgs {
                mode: Mode::Designs,
                profile_path: "untwist.json".to_string(),
                logging: true,
            })
        );
        assert_eq!(
            parse(&["--logging", "app-icons"]).map(|a| (a.mode, a.logging)),
            Some((Mode::AppIcons, true))
        );
    }

    #[test]
    fn profile_without_a_mode_generates_app_icons() {
        assert_eq!(
            parse(&["custom.JSON", "--logging"]),
            Some(RunArgs {
                mode: Mode::AppIcons,
                profile_path: "custom.JSON".to_string(),
                logging: true,
            })
        );
        assert_eq!(parse(&["custom.json", "other.json"]), None);
    }

    #[test]
    fn unknown_modes_and_extra_arguments_are_rejected() {
        assert_eq!(parse(&["favicons"]), None);
        assert_eq!(parse(&["designs", "a.json", "b.json"]), None);
    }

    #[test]
    fn missing_app_icon_source_exits_with_failure() {
        let root = tempfile::tempdir().unwrap();
        let json = format!(
            r#"{{ "app_icons": {{ "project_root": {:?}, "output_dir": "out" }} }}"#,
            root.path().to_string_lossy()
        );
        let profile = InputProfile::parse_json(&json).unwrap();

        assert_eq!(run_app_icons(&profile), FAILURE_EXIT_CODE);
        assert!(!root.path().join("out").exists());
    }

    #[test]
    fn all_backends_missing_exits_with_failure() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("appIcon.svg"), "<svg/>").unwrap();
        let json = format!(
            r#"{{
                "tools": {{
                    "rsvg_convert": "/no/such/rsvg-convert",
                    "imagemagick": "/no/such/convert",
                    "qlmanage": "/no/such/qlmanage",
                    "temp": {:?}
                }},
                "app_icons": {{
                    "project_root": {:?},
                    "output_dir": "out",
                    "targets": [ {{ "file_name": "icon-1024x1024.png", "size": 1024 }} ]
                }}
            }}"#,
            root.path().join("scratch").to_string_lossy(),
            root.path().to_string_lossy()
        );
        let profile = InputProfile::parse_json(&json).unwrap();

        assert_eq!(run_app_icons(&profile), FAILURE_EXIT_CODE);
        assert!(!root.path().join("out").join("icon-1024x1024.png").exists());
    }

    #[test]
    fn missing_sections_exit_with_failure() {
        let profile = InputProfile::parse_json("{}").unwrap();

        assert_eq!(run_app_icons(&profile), FAILURE_EXIT_CODE);
        assert_eq!(run_designs(&profile), FAILURE_EXIT_CODE);
    }
}
