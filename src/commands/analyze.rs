use crate::analysis::BiasAnalyzer;
use crate::cli;
use crate::config::{self, BiasmapConfig, InputConfig};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{self, loader, OutputFormat};
use crate::observability::{
    increment_processed, set_current_file, set_phase, set_progress, CommandPhase,
};
use crate::report::{ScanRecord, ScanSummary};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let scans = scan_files(&config.paths, &settings)?;
    let summary = ScanSummary::from_reports(scans.iter().map(|scan| &scan.bias_metrics));

    let format = resolve_format(config.format, &settings);
    let formatting = resolve_formatting(config.formatting_config, &settings, config.output.is_some());
    let rendered = render(&scans, &summary, format, formatting)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            if config.verbosity > 0 {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Explicit `--config` must load cleanly; otherwise discover one upward.
pub fn resolve_config(explicit: Option<&Path>) -> Result<BiasmapConfig> {
    let _phase = set_phase(CommandPhase::ConfigLoading);
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Analyze every path in order, stopping at the first failure.
pub fn scan_files(paths: &[PathBuf], settings: &BiasmapConfig) -> Result<Vec<ScanRecord>> {
    let analyzer = BiasAnalyzer::from_config(settings);
    let input = settings.input_config();
    set_progress(0, paths.len());

    paths
        .iter()
        .map(|path| {
            let record = scan_file(path, &analyzer, &input)
                .with_context(|| format!("Failed to analyze {}", path.display()));
            increment_processed();
            record
        })
        .collect()
}

pub fn scan_file(path: &Path, analyzer: &BiasAnalyzer, input: &InputConfig) -> Result<ScanRecord> {
    let _file = set_current_file(path);

    let loader::LoadedDataset { dataset, file_size } = {
        let _phase = set_phase(CommandPhase::Loading);
        loader::load_dataset(path, input)?
    };

    let report = {
        let _phase = set_phase(CommandPhase::Analysis);
        analyzer.analyze(&dataset)?
    };
    log::info!(
        "{}: overall risk {} across {} finding(s)",
        path.display(),
        report.overall_risk,
        report.findings.len()
    );

    Ok(ScanRecord::new(display_name(path), file_size, report))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// CLI flag first, then `[output] default_format`, then terminal.
pub fn resolve_format(flag: Option<cli::OutputFormat>, settings: &BiasmapConfig) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or_else(|| settings.default_format().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Terminal)
}

fn resolve_formatting(
    base: FormattingConfig,
    settings: &BiasmapConfig,
    to_file: bool,
) -> FormattingConfig {
    // Escape codes never go into files.
    if to_file {
        return FormattingConfig {
            color: ColorMode::Never,
            ..base
        };
    }
    match settings.output.as_ref().and_then(|output| output.use_color) {
        Some(false) => FormattingConfig {
            color: ColorMode::Never,
            ..base
        },
        Some(true) if base.color == ColorMode::Auto => FormattingConfig {
            color: ColorMode::Always,
            ..base
        },
        _ => base,
    }
}

pub fn render(
    scans: &[ScanRecord],
    summary: &ScanSummary,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<Vec<u8>> {
    let _phase = set_phase(CommandPhase::OutputGeneration);
    let mut buffer = Vec::new();
    {
        let mut writer = io::create_writer(format, Box::new(&mut buffer), formatting);
        writer.write_scans(scans, summary)?;
    }
    Ok(buffer)
}
