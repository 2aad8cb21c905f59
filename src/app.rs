// src/app.rs
use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, bail};
use mx_numplan_infra::{CsvPlanSource, DirectorySnapshotStore, FilePatternSink};
use mx_numplan_shared_kernel::NumplanError;
use mx_numplan_usecase::{AnalyzeSnapshots, PlanSummary, SummarizePlan, SyncPatterns};

use crate::{
    config::{Config, Mode},
    presentation::{self, Outcome},
};

/// Run one invocation and print its outcome to stdout.
pub fn run(config: &Config) -> Result<()> {
    let outcome = execute(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presentation::write_outcome(&mut out, &outcome, config).context("writing report")?;
    Ok(())
}

/// Wire the adapters for `config` and run the selected use case.
pub fn execute(config: &Config) -> Result<Outcome> {
    match &config.mode {
        Mode::Analyze => {
            let store = DirectorySnapshotStore::new(&config.data_dir);
            let report = AnalyzeSnapshots::new(&store, config.digits, config.category)
                .run()
                .with_context(|| format!("analyzing snapshots in {}", config.data_dir.display()))?;
            Ok(Outcome::Analysis(report))
        }
        Mode::Summarize => Ok(Outcome::Summary(summarize(config)?)),
        Mode::Sync { sink, partition, target, read_only } => {
            let summary = summarize(config)?;
            let desired = summary
                .category(config.category)
                .map(|c| presentation::render_patterns(&c.patterns, config))
                .unwrap_or_default();
            let sink_file = FilePatternSink::open(sink)
                .with_context(|| format!("opening sink {}", sink.display()))?;
            let report =
                SyncPatterns::new(&sink_file).run(partition, target, &desired, *read_only)?;
            Ok(Outcome::Sync { summary, report })
        }
    }
}

/// Exit status for a failed run: the status carried by the first workspace error
/// in the chain, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    let status = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<NumplanError>())
        .map_or(1, NumplanError::exit_status);
    ExitCode::from(status)
}

fn summarize(config: &Config) -> Result<PlanSummary> {
    let path = dataset_path(config)?;
    let source = CsvPlanSource::new(path);
    Ok(SummarizePlan::new(&source, config.digits).run()?)
}

fn dataset_path(config: &Config) -> Result<PathBuf> {
    if !config.wants_latest() {
        return Ok(config.from_file.clone());
    }
    let store = DirectorySnapshotStore::new(&config.data_dir);
    let Some(latest) = store.latest()? else {
        bail!("no pnn_Publico_DD_MM_YYYY.csv dataset found in {}", config.data_dir.display());
    };
    log::info!("using latest dataset {latest}");
    Ok(store.path_of(&latest))
}
