use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;

use polynet::io::{Format, read_snapshot, write_edge_list, write_records};
use polynet::{NetworkConfig, NetworkSummary, build_network};

use crate::cli::AnalyzeArgs;
use crate::config::build_network_config;
use crate::display::{Context as DisplayContext, Progress, print_batch_summary, print_config};
use crate::io::{create_output, infer_input_format, open_input};
use crate::util::path::output_path;
use crate::util::text::count_noun;

const RECORDS_SUFFIX: &str = ".junctions.json";
const EDGES_SUFFIX: &str = ".edges.tsv";

pub struct BatchOptions {
    pub output_dir: Option<PathBuf>,
    pub format: Option<Format>,
    pub edges: bool,
    pub include_small: bool,
}

pub struct SnapshotOutcome {
    pub summary: NetworkSummary,
    pub written: Vec<PathBuf>,
}

#[derive(Default)]
pub struct BatchReport {
    pub succeeded: Vec<(String, SnapshotOutcome)>,
    pub failed: Vec<(String, anyhow::Error)>,
}

pub fn run_analyze(args: AnalyzeArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_network_config(&args.network)?;

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    if ctx.interactive {
        print_config(&config);
    }

    let options = BatchOptions {
        output_dir: args.output.clone(),
        format: args.format.map(Into::into),
        edges: args.edges,
        include_small: args.include_small,
    };

    let mut progress = Progress::new(ctx.interactive, args.inputs.len());
    let report = analyze_batch(&args.inputs, &config, &options, &mut progress);
    progress.finish(report.succeeded.len(), report.failed.len());

    let summaries: Vec<(String, NetworkSummary)> = report
        .succeeded
        .iter()
        .map(|(name, outcome)| (name.clone(), outcome.summary))
        .collect();

    if ctx.interactive {
        print_batch_summary(&summaries);
    } else {
        write_summary_tsv(io::stdout().lock(), &summaries)?;
    }

    if !report.failed.is_empty() {
        bail!(
            "{} of {} snapshots failed: {}",
            report.failed.len(),
            args.inputs.len(),
            report
                .failed
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

/// Runs every snapshot independently; a failing snapshot is recorded and
/// the batch moves on.
pub fn analyze_batch(
    inputs: &[PathBuf],
    config: &NetworkConfig,
    options: &BatchOptions,
    progress: &mut Progress,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in inputs {
        let name = display_name(path);
        progress.start_item(&name);

        match analyze_snapshot(path, config, options) {
            Ok(outcome) => {
                progress.complete_item(&name, &build_substeps(&outcome));
                report.succeeded.push((name, outcome));
            }
            Err(e) => {
                progress.fail_item(&name, &e);
                report.failed.push((name, e));
            }
        }
    }

    report
}

fn analyze_snapshot(
    path: &Path,
    config: &NetworkConfig,
    options: &BatchOptions,
) -> Result<SnapshotOutcome> {
    let format = options.format.unwrap_or_else(|| infer_input_format(path));

    let reader = open_input(path)?;
    let snapshot = read_snapshot(reader, format, config.boundary)
        .with_context(|| format!("Failed to read {} snapshot: {}", format, path.display()))?;
    info!(
        "{}: {} binding sites on {} chains",
        path.display(),
        snapshot.site_count(),
        snapshot.chain_count()
    );

    let network = build_network(&snapshot, config).context("Network construction failed")?;

    let mut written = Vec::new();

    let records_path = output_path(path, options.output_dir.as_deref(), RECORDS_SUFFIX);
    let writer = create_output(&records_path)?;
    write_records(writer, &network.records())
        .with_context(|| format!("Failed to write {}", records_path.display()))?;
    written.push(records_path);

    if options.edges {
        let edges_path = output_path(path, options.output_dir.as_deref(), EDGES_SUFFIX);
        let writer = create_output(&edges_path)?;
        write_edge_list(writer, &network.edge_list(options.include_small))
            .with_context(|| format!("Failed to write {}", edges_path.display()))?;
        written.push(edges_path);
    }

    Ok(SnapshotOutcome {
        summary: network.summary(),
        written,
    })
}

fn build_substeps(outcome: &SnapshotOutcome) -> Vec<String> {
    let s = &outcome.summary;
    let mut steps = vec![
        format!(
            "{} ({} small, {})",
            count_noun(s.junctions, "junction"),
            s.small_junctions,
            count_noun(s.bridges, "bridge")
        ),
        format!(
            "{}, main holds {}",
            count_noun(s.components, "component"),
            s.main_component_size
        ),
        format!(
            "Average clustering {:.4} (simple {:.4})",
            s.average_clustering, s.average_simple_clustering
        ),
    ];

    for path in &outcome.written {
        steps.push(format!("Wrote {}", display_name(path)));
    }
    steps
}

fn write_summary_tsv<W: Write>(mut out: W, summaries: &[(String, NetworkSummary)]) -> Result<()> {
    writeln!(
        out,
        "snapshot\tjunctions\tsmall\tbridges\tcomponents\tmain_component\tavg_clustering\tavg_simple_clustering"
    )?;
    for (name, s) in summaries {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.6}\t{:.6}",
            name,
            s.junctions,
            s.small_junctions,
            s.bridges,
            s.components,
            s.main_component_size,
            s.average_clustering,
            s.average_simple_clustering
        )?;
    }
    out.flush()?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
