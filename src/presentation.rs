// src/presentation.rs
use std::io::Write;

use mx_numplan_domain::{ChangeKind, Pattern, PatternListDiff};
use mx_numplan_shared_kernel::{Category, DigitLength, Result};
use mx_numplan_usecase::{AnalysisReport, PlanSummary, SyncReport};
use serde::Serialize;

use crate::config::{Config, OutputFormat};

/// Everything one invocation produced, ready to be printed.
#[derive(Debug)]
pub enum Outcome {
    Summary(PlanSummary),
    Analysis(AnalysisReport),
    Sync { summary: PlanSummary, report: SyncReport },
}

/// Render patterns in the configured dialect.
pub fn render_patterns(patterns: &[Pattern], config: &Config) -> Vec<String> {
    patterns.iter().map(|p| config.syntax.render(p, &config.prefix)).collect()
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_table(out, outcome, config),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &document(outcome, config))?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&document(outcome, config))?;
            out.write_all(yaml.as_bytes())?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, outcome, config),
    }
}

// ---------- serializable views ----------

#[derive(Serialize)]
struct CategoryView {
    category: Category,
    raw_ranges: usize,
    intervals: usize,
    patterns: usize,
    covered_numbers: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rendered: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SummaryView<'a> {
    dataset: &'a str,
    digits: DigitLength,
    syntax: String,
    categories: Vec<CategoryView>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Document<'a> {
    Summary(SummaryView<'a>),
    Analysis(&'a AnalysisReport),
    Sync { summary: SummaryView<'a>, sync: &'a SyncReport },
}

fn summary_view<'a>(summary: &'a PlanSummary, config: &Config) -> SummaryView<'a> {
    let categories = summary
        .categories
        .iter()
        .map(|c| CategoryView {
            category: c.category,
            raw_ranges: c.raw_ranges,
            intervals: c.intervals.len(),
            patterns: c.patterns.len(),
            covered_numbers: c.covered_numbers,
            rendered: (config.show_patterns && c.category == config.category)
                .then(|| render_patterns(&c.patterns, config)),
        })
        .collect();
    SummaryView {
        dataset: &summary.dataset,
        digits: summary.digits,
        syntax: config.syntax.to_string(),
        categories,
    }
}

fn document<'a>(outcome: &'a Outcome, config: &Config) -> Document<'a> {
    match outcome {
        Outcome::Summary(summary) => Document::Summary(summary_view(summary, config)),
        Outcome::Analysis(report) => Document::Analysis(report),
        Outcome::Sync { summary, report } => {
            Document::Sync { summary: summary_view(summary, config), sync: report }
        }
    }
}

// ---------- table ----------

fn write_table<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> Result<()> {
    match outcome {
        Outcome::Summary(summary) => write_summary_table(out, summary, config),
        Outcome::Analysis(report) => write_analysis_table(out, report, config),
        Outcome::Sync { summary, report } => {
            write_summary_table(out, summary, config)?;
            writeln!(out)?;
            write_sync_table(out, report, config)
        }
    }
}

fn write_summary_table<W: Write>(
    out: &mut W,
    summary: &PlanSummary,
    config: &Config,
) -> Result<()> {
    let selected = summary.category(config.category);
    if config.show_patterns {
        if let Some(category) = selected {
            for line in render_patterns(&category.patterns, config) {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "mx_numplan v{} · {} · {} digits",
        crate::VERSION,
        summary.dataset,
        summary.digits
    )?;
    writeln!(out)?;
    writeln!(out, "CATEGORY        RANGES   INTERVALS    PATTERNS            NUMBERS")?;
    writeln!(out, "-----------------------------------------------------------------")?;
    for c in &summary.categories {
        writeln!(
            out,
            "{:<10}{:>12}{:>12}{:>12}{:>19}",
            c.category,
            c.raw_ranges,
            c.intervals.len(),
            c.patterns.len(),
            c.covered_numbers
        )?;
    }
    writeln!(out, "---")?;
    if let Some(c) = selected {
        writeln!(
            out,
            "summarized {} {} ranges to {} patterns",
            c.raw_ranges,
            c.category,
            c.patterns.len()
        )?;
    }
    Ok(())
}

fn write_analysis_table<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    config: &Config,
) -> Result<()> {
    writeln!(
        out,
        "mx_numplan v{} · {} numbers · {} snapshots",
        crate::VERSION,
        report.category,
        report.snapshots.len()
    )?;
    if report.comparisons.is_empty() {
        writeln!(out, "nothing to compare")?;
        return Ok(());
    }

    for cmp in &report.comparisons {
        writeln!(out)?;
        writeln!(out, "{} -> {}", cmp.old, cmp.new)?;
        writeln!(
            out,
            "  patterns  {:>9} -> {:<9} (+{} -{})",
            cmp.old_patterns,
            cmp.new_patterns,
            cmp.patterns.added.len(),
            cmp.patterns.removed.len()
        )?;
        writeln!(out, "  numbers   {:>9} -> {}", cmp.old_covered, cmp.new_covered)?;
        writeln!(
            out,
            "  ranges    {} added, {} removed",
            cmp.count(ChangeKind::Added),
            cmp.count(ChangeKind::Removed)
        )?;
        if config.show_patterns {
            for change in &cmp.changes {
                let sign = if change.kind == ChangeKind::Added { '+' } else { '-' };
                writeln!(out, "    {sign} {}-{}", change.range.start(), change.range.end())?;
            }
            write_pattern_changes(out, &cmp.patterns, config)?;
        }
    }
    Ok(())
}

/// Added and removed patterns interleaved in pattern order, one labelled line each.
fn write_pattern_changes<W: Write>(
    out: &mut W,
    diff: &PatternListDiff,
    config: &Config,
) -> Result<()> {
    let mut changes: Vec<(&Pattern, &str)> = diff
        .added
        .iter()
        .map(|p| (p, "added"))
        .chain(diff.removed.iter().map(|p| (p, "removed")))
        .collect();
    changes.sort();
    for (pattern, label) in changes {
        writeln!(out, "    {label:>7} {}", config.syntax.render(pattern, &config.prefix))?;
    }
    Ok(())
}

fn write_sync_table<W: Write>(out: &mut W, report: &SyncReport, config: &Config) -> Result<()> {
    writeln!(out, "provisioning {}", report.target)?;
    writeln!(out, "{} patterns exist in partition '{}'", report.existing, report.partition)?;
    writeln!(out, "{} new patterns need to be provisioned", report.to_add.len())?;
    writeln!(out, "{} patterns need to be removed", report.to_remove.len())?;
    if config.show_patterns {
        for pattern in &report.to_add {
            writeln!(out, "  + {pattern}")?;
        }
        for pattern in &report.to_remove {
            writeln!(out, "  - {pattern}")?;
        }
    }
    if !report.applied {
        writeln!(out, "read-only: sink left unchanged")?;
    }
    Ok(())
}

// ---------- csv ----------

fn write_csv<W: Write>(out: &mut W, outcome: &Outcome, config: &Config) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    match outcome {
        Outcome::Summary(summary) if config.show_patterns => {
            wtr.write_record(["category", "pattern"])?;
            if let Some(c) = summary.category(config.category) {
                for pattern in render_patterns(&c.patterns, config) {
                    wtr.write_record([c.category.as_str(), pattern.as_str()])?;
                }
            }
        }
        Outcome::Summary(summary) => {
            wtr.write_record([
                "category",
                "raw_ranges",
                "intervals",
                "patterns",
                "covered_numbers",
            ])?;
            for c in &summary.categories {
                wtr.write_record([
                    c.category.to_string(),
                    c.raw_ranges.to_string(),
                    c.intervals.len().to_string(),
                    c.patterns.len().to_string(),
                    c.covered_numbers.to_string(),
                ])?;
            }
        }
        Outcome::Analysis(report) => {
            wtr.write_record(["old", "new", "kind", "category", "start", "end"])?;
            for cmp in &report.comparisons {
                for change in &cmp.changes {
                    wtr.write_record([
                        cmp.old.name.clone(),
                        cmp.new.name.clone(),
                        change.kind.to_string(),
                        change.range.category().to_string(),
                        change.range.start().to_string(),
                        change.range.end().to_string(),
                    ])?;
                }
            }
        }
        Outcome::Sync { report, .. } => {
            wtr.write_record(["action", "pattern"])?;
            for pattern in &report.to_add {
                wtr.write_record(["add", pattern.as_str()])?;
            }
            for pattern in &report.to_remove {
                wtr.write_record(["remove", pattern.as_str()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
