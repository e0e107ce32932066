use crate::{
    converters::{ConversionOutcome, FallbackChain},
    logger,
    profile::{AppIconParams, IconTarget},
    utils,
};

use std::fs;

pub const FAILURE_EXIT_CODE: i32 = 1;

/// The width of the file name column in the per-icon report lines.
const NAME_COLUMN_WIDTH: usize = 25;

/// The outcome of a batch of conversions.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// The number of conversions attempted.
    pub attempted: usize,
    /// The number of conversions that succeeded.
    pub succeeded: usize,
    /// The backend that satisfied the first successful conversion.
    pub method_used: Option<String>,
    /// The output file names that could not be generated.
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            FAILURE_EXIT_CODE
        }
    }
}

fn method_line(backend: &str) -> String {
    format!("🔧 Using {backend} for conversion")
}

fn success_line(target: &IconTarget) -> String {
    format!(
        "✅ {:<width$} ({}x{}px)",
        target.file_name,
        target.size,
        target.size,
        width = NAME_COLUMN_WIDTH
    )
}

fn failure_line(target: &IconTarget) -> String {
    format!(
        "❌ {:<width$} (FAILED)",
        target.file_name,
        width = NAME_COLUMN_WIDTH
    )
}

fn summary_line(succeeded: usize, total: usize) -> String {
    format!("✨ Generated {succeeded}/{total} icons successfully")
}

pub struct IconProcessor {
    pub source_path: String,
    pub output_dir: String,
    pub targets: Vec<IconTarget>,
    pub install_hint: String,
    pub next_steps: Vec<String>,
}

impl IconProcessor {
    pub fn new(params: &AppIconParams) -> Option<Self> {
        logger::section("Icon Generation Initialization", false);

        let source_path = params.source_path();
        if !utils::file_exists(&source_path) {
            logger::log(format!("❌ Error: SVG file not found at {source_path}"), true);
            logger::log(
                format!(
                    "   Please ensure {} exists in {}",
                    params.source, params.project_root
                ),
                true,
            );
            return None;
        }

        let output_dir = params.output_path();
        if let Err(e) = fs::create_dir_all(&output_dir) {
            logger::log(
                format!("❌ Error: the output directory '{output_dir}' could not be created: {e}"),
                true,
            );
            return None;
        }

        logger::log(
            format!(
                "{} icon{} will be generated.",
                params.targets.len(),
                utils::plural(params.targets.len())
            ),
            false,
        );

        Some(Self {
            source_path,
            output_dir,
            targets: params.targets.clone(),
            install_hint: params.install_hint.clone(),
            next_steps: params.next_steps.clone(),
        })
    }

    /// Generate each of the icons in turn.
    ///
    /// # Arguments
    ///
    /// * `chain` - The backends used to convert each icon.
    pub fn process(&self, chain: &FallbackChain) -> BatchReport {
        let source_name = utils::get_file_name(&self.source_path).unwrap_or_default();

        logger::section("Icon Generation", false);
        logger::log(format!("📱 Generating iOS App Icons from {source_name}"), true);
        logger::log(format!("📂 Output directory: {}", self.output_dir), true);
        logger::log("", true);

        let mut report = BatchReport::default();
        for target in &self.targets {
            report.attempted += 1;

            let png_path = utils::join_path_segments(&self.output_dir, &[&target.file_name]);
            match chain.convert(&self.source_path, &png_path, target.size) {
                ConversionOutcome::Converted { backend } => {
                    if report.method_used.is_none() {
                        logger::log(method_line(&backend), true);
                        logger::log("", true);
                        report.method_used = Some(backend);
                    }

                    logger::log(success_line(target), true);
                    report.succeeded += 1;
                }
                ConversionOutcome::Failed => {
                    logger::log(failure_line(target), true);
                    report.failed.push(target.file_name.clone());
                }
            }
        }

        self.print_summary(&report, chain);

        report
    }

    fn print_summary(&self, report: &BatchReport, chain: &FallbackChain) {
        logger::log("", true);
        logger::rule(true);
        logger::log(summary_line(report.succeeded, self.targets.len()), true);
        logger::log("", true);

        if !report.is_success() {
            logger::log("⚠️  Some icons failed to generate", true);
            logger::log(
                format!(
                    "   Install {} for best results:",
                    chain.preferred().unwrap_or("a converter")
                ),
                true,
            );
            logger::log(format!("   {}", self.install_hint), true);
            return;
        }

        if self.next_steps.is_empty() {
            return;
        }

        logger::log("📌 Next steps:", true);
        for (i, step) in self.next_steps.iter().enumerate() {
            logger::log(format!("   {}. {}", i + 1, step), true);
        }
    }
}
