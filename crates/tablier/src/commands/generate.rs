//! One-shot preview generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tablier_samples::SampleSet;
use tablier_static::{GenerateReport, Generator, TemplateEngine, Variations, MAX_SAMPLES};

use crate::config::ConfigFile;

/// Assemble a generator from configuration.
///
/// With `reloading` set, templates are read from the template source
/// directory instead of the copies compiled into the binary.
pub fn build_generator(
    config: &ConfigFile,
    output: Option<PathBuf>,
    reloading: bool,
) -> Result<Generator> {
    let samples = SampleSet::load(&config.paths.samples, MAX_SAMPLES);
    if samples.is_empty() {
        tracing::warn!("Search result previews will list no recipes");
    }
    let variations = Variations::standard(&samples).context("Invalid variant tables")?;

    let templates = if reloading {
        TemplateEngine::from_dir(&config.paths.templates)
    } else {
        TemplateEngine::embedded().context("Failed to load embedded templates")?
    };

    let output_dir = output.unwrap_or_else(|| config.paths.output.clone());

    Ok(Generator::new(output_dir, variations, templates))
}

pub fn log_report(report: &GenerateReport) {
    tracing::info!(
        "Generated {} previews in {}ms",
        report.files.len(),
        report.duration_ms
    );
    tracing::info!("Output: {}", report.output_dir.display());
}

/// Run the generate command.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Generating all possible template variations");

    let generator = build_generator(config, output, false)?;
    let report = generator.generate()?;

    log_report(&report);

    Ok(())
}
