use mx_numplan_domain::{
    NumberRange, Pattern, generate_patterns, merge_ranges, summarize::partition_by_category,
};
use mx_numplan_ports::dataset::{PlanRecord, PlanSource};
use mx_numplan_shared_kernel::{Category, DigitLength, DomainError, ErrorContext, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dto::{CategorySummary, PlanSummary};

/// Summarize the dataset behind a [`PlanSource`] into per-category dial patterns.
pub struct SummarizePlan<'a> {
    source: &'a dyn PlanSource,
    digits: DigitLength,
}

impl<'a> SummarizePlan<'a> {
    pub fn new(source: &'a dyn PlanSource, digits: DigitLength) -> Self {
        Self { source, digits }
    }

    pub fn run(&self) -> Result<PlanSummary> {
        let dataset = self.source.describe();
        log::info!("reading number ranges from {dataset}...");
        let records = self.source.records().with_context(|| format!("loading {dataset}"))?;
        summarize_records(&dataset, &records, self.digits)
    }
}

/// Validate raw records, then merge and summarize every category.
pub fn summarize_records(
    dataset: &str,
    records: &[PlanRecord],
    digits: DigitLength,
) -> Result<PlanSummary> {
    let ranges = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            to_range(record, digits).with_context(|| format!("{dataset}: record {}", index + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let groups = partition_by_category(&ranges);
    for (category, group) in &groups {
        log::info!("got {} {category} ranges", group.len());
    }

    let summarize = |category: &Category| -> Result<CategorySummary> {
        match groups.get(category) {
            Some(group) => summarize_category(*category, group)
                .with_context(|| format!("{dataset}: summarizing {category} ranges")),
            None => Ok(CategorySummary::empty(*category)),
        }
    };

    #[cfg(feature = "parallel")]
    let categories = Category::ALL.par_iter().map(summarize).collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let categories = Category::ALL.iter().map(summarize).collect::<Result<Vec<_>>>()?;

    Ok(PlanSummary { dataset: dataset.to_string(), digits, categories })
}

fn to_range(
    record: &PlanRecord,
    digits: DigitLength,
) -> std::result::Result<NumberRange, DomainError> {
    if record.digits != digits.get() {
        return Err(DomainError::invalid_range(format!(
            "{}-{} has {} digits, expected {digits}",
            record.start, record.end, record.digits
        )));
    }
    NumberRange::parse(&record.start, &record.end, record.category, digits)
}

fn summarize_category(
    category: Category,
    ranges: &[NumberRange],
) -> std::result::Result<CategorySummary, DomainError> {
    let intervals = merge_ranges(ranges)?;
    let mut patterns: Vec<Pattern> = Vec::new();
    for interval in &intervals {
        patterns.extend(generate_patterns(interval)?);
    }
    let covered_numbers = intervals.iter().map(|i| i.len()).sum();
    log::info!(
        "{category}: {} ranges -> {} intervals -> {} patterns covering {covered_numbers} numbers",
        ranges.len(),
        intervals.len(),
        patterns.len()
    );
    Ok(CategorySummary { category, raw_ranges: ranges.len(), intervals, patterns, covered_numbers })
}
