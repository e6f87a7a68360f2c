use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Instant;

use calamine::{open_workbook_from_rs, Reader, Xlsx};

use crate::error::AppError;
use crate::parser::deserializers::cell_to_string;
use crate::parser::types::{ParseOutput, ParseWarning, Row};

/// Decode a spreadsheet-style export at `path` into rows.
/// Dispatches on the file extension: `csv`, or `xlsx`/`xlsm`.
pub fn parse_rows(path: &str) -> Result<ParseOutput, AppError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => parse_csv(path),
        "xlsx" | "xlsm" => parse_xlsx(path),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a CSV export from `path`.
pub fn parse_csv(path: &str) -> Result<ParseOutput, AppError> {
    let file = File::open(path)?;
    parse_csv_reader(BufReader::new(file))
}

/// Core CSV logic — accepts any `Read` source, useful for tests.
///
/// The first record is the header. Data records never fail the import:
/// short records pad missing cells with empty strings, long records drop
/// the overflow, and a record the reader cannot decode is skipped with a
/// warning.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<ParseOutput, AppError> {
    let start = Instant::now();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(AppError::EmptyFile);
    }

    let mut rows: Vec<Row> = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut skipped = 0usize;
    let mut row_idx = 0usize;

    for result in rdr.records() {
        row_idx += 1;
        match result {
            Ok(record) => {
                let mut row = Row::new();
                for (i, header) in headers.iter().enumerate() {
                    if header.is_empty() {
                        continue;
                    }
                    row.insert(header.clone(), record.get(i).unwrap_or("").to_string());
                }
                rows.push(row);
            }
            Err(err) => {
                // +1 for the header row
                tracing::warn!(line = row_idx + 1, error = %err, "skipping unreadable record");
                warnings.push(ParseWarning {
                    line: row_idx + 1,
                    message: err.to_string(),
                });
                skipped += 1;
            }
        }
    }

    let parse_duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        rows = rows.len(),
        skipped,
        elapsed_ms = parse_duration_ms,
        "CSV decoded"
    );

    Ok(ParseOutput {
        rows,
        warnings,
        total_rows_processed: row_idx,
        skipped_rows: skipped,
        detected_columns: headers.into_iter().filter(|h| !h.is_empty()).collect(),
        parse_duration_ms,
    })
}

/// Parse an XLSX/XLSM workbook from `path`. First worksheet only.
pub fn parse_xlsx(path: &str) -> Result<ParseOutput, AppError> {
    let file = File::open(path)?;
    parse_xlsx_reader(BufReader::new(file))
}

/// Core workbook logic — accepts any `Read + Seek` source, useful for tests.
///
/// The first row of the first worksheet is the header. Empty cells render
/// as empty strings, date cells as ISO datetimes. Rows whose cells are all
/// empty are skipped and counted.
pub fn parse_xlsx_reader<R: Read + Seek>(reader: R) -> Result<ParseOutput, AppError> {
    let start = Instant::now();

    let mut workbook: Xlsx<_> = open_workbook_from_rs(reader)?;
    let Some((_, range)) = workbook.worksheets().into_iter().next() else {
        return Err(AppError::EmptyFile);
    };

    let mut cell_rows = range.rows();
    let Some(header_cells) = cell_rows.next() else {
        return Err(AppError::EmptyFile);
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|c| cell_to_string(c).trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(AppError::EmptyFile);
    }

    let mut rows: Vec<Row> = Vec::new();
    let mut skipped = 0usize;
    let mut row_idx = 0usize;

    for cells in cell_rows {
        row_idx += 1;
        let mut row = Row::new();
        let mut blank = true;
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = cells.get(i).map(cell_to_string).unwrap_or_default();
            if !value.is_empty() {
                blank = false;
            }
            row.insert(header.clone(), value);
        }
        if blank {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    let parse_duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        rows = rows.len(),
        skipped,
        elapsed_ms = parse_duration_ms,
        "workbook decoded"
    );

    Ok(ParseOutput {
        rows,
        warnings: Vec::new(),
        total_rows_processed: row_idx,
        skipped_rows: skipped,
        detected_columns: headers.into_iter().filter(|h| !h.is_empty()).collect(),
        parse_duration_ms,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
