// crates/infra/src/csv_source.rs
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use mx_numplan_ports::dataset::{PlanRecord, PlanSource};
use mx_numplan_shared_kernel::{Category, InfraResult, InfrastructureError, Result};
use serde::Deserialize;

use crate::persistence::FileReader;

/// One row of the regulator's public numbering plan export.
///
/// Only the columns needed to build a carrier block are read; the export has
/// a dozen more (operator, municipality, ...) that are ignored.
#[derive(Debug, Deserialize)]
struct PlanRow {
    #[serde(rename = "NIR")]
    nir: String,
    #[serde(rename = "SERIE")]
    serie: String,
    #[serde(rename = "NUMERACION_INICIAL")]
    first: String,
    #[serde(rename = "NUMERACION_FINAL")]
    last: String,
    #[serde(rename = "TIPO_RED")]
    network: String,
}

/// [`PlanSource`] reading a numbering plan CSV from disk.
#[derive(Debug, Clone)]
pub struct CsvPlanSource {
    path: PathBuf,
}

impl CsvPlanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> InfraResult<Vec<PlanRecord>> {
        let reader = FileReader::open_buffered(&self.path)?;
        // Header cells in the published files carry a leading space.
        let mut csv = ReaderBuilder::new().trim(Trim::All).flexible(true).from_reader(reader);
        let headers = csv.headers()?.clone();

        let mut records = Vec::new();
        let mut raw = StringRecord::new();
        while csv.read_record(&mut raw)? {
            let line = raw.position().map_or(0, |p| p.line());
            if raw.iter().all(str::is_empty) {
                continue;
            }
            let row: PlanRow = raw
                .deserialize(Some(&headers))
                .map_err(|err| self.malformed(line, err.to_string()))?;
            records.push(self.to_record(&row).map_err(|details| self.malformed(line, details))?);
        }
        log::debug!("{}: {} rows", self.path.display(), records.len());
        Ok(records)
    }

    fn to_record(&self, row: &PlanRow) -> std::result::Result<PlanRecord, String> {
        let block = |text: &str| -> std::result::Result<String, String> {
            let value: u16 =
                text.parse().map_err(|_| format!("numbering '{text}' is not a number"))?;
            if value > 9999 {
                return Err(format!("numbering '{text}' exceeds 4 digits"));
            }
            Ok(format!("{}{}{value:04}", row.nir, row.serie))
        };
        let start = block(&row.first)?;
        let end = block(&row.last)?;
        let digits = u8::try_from(start.len()).map_err(|_| format!("number {start} is too long"))?;
        Ok(PlanRecord { start, end, category: Category::from_network_type(&row.network), digits })
    }

    fn malformed(&self, line: u64, details: String) -> InfrastructureError {
        InfrastructureError::MalformedRecord { path: self.path.clone(), line, details }
    }
}

impl PlanSource for CsvPlanSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn records(&self) -> Result<Vec<PlanRecord>> {
        Ok(self.read()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = " CLAVE_CENSAL, POBLACION, MUNICIPIO, NIR, SERIE, NUMERACION_INICIAL, \
                          NUMERACION_FINAL, OCUPACION, TIPO_RED, RAZON_SOCIAL\n";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builds_ten_digit_numbers_and_categories() {
        let file = write_csv(
            "09001001, AGUASCALIENTES, AGUASCALIENTES, 449, 153, 0, 999, 1000, MOVIL, TELCEL\n\
             09001001, AGUASCALIENTES, AGUASCALIENTES, 449, 910, 5000, 5999, 1000, FIJO, TELMEX\n",
        );
        let records = CsvPlanSource::new(file.path()).records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, "4491530000");
        assert_eq!(records[0].end, "4491530999");
        assert_eq!(records[0].category, Category::Mobile);
        assert_eq!(records[0].digits, 10);
        assert_eq!(records[1].start, "4499105000");
        assert_eq!(records[1].category, Category::Other);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_csv("01, X, Y, 55, 1234, 0, 9999, 10000, MOVIL, Z\n,,,,,,,,,\n");
        let records = CsvPlanSource::new(file.path()).records().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn non_numeric_block_reports_the_line() {
        let file = write_csv(
            "01, X, Y, 55, 1234, 0, 9999, 10000, MOVIL, Z\n\
             01, X, Y, 55, 1235, abc, 9999, 1, MOVIL, Z\n",
        );
        let err = CsvPlanSource::new(file.path()).records().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("abc"), "{message}");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = CsvPlanSource::new("/definitely/not/here.csv").records().unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
