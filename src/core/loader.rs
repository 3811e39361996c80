use crate::core::{LoadedOutlets, OutletRecord, Result};
use crate::utils::error::ImportError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Reads the outlet list from `path`. Row 1 is the header and is discarded;
/// columns 1-3 are read positionally as (code, short name, full name). Rows
/// missing any of the three cells are dropped and counted, everything else is
/// trimmed and kept in row order. Opening failures are fatal and propagate.
pub fn load_outlets(path: &str) -> Result<LoadedOutlets> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") => load_from_xlsx(path),
        Some("csv") => load_from_csv(path),
        _ => Err(ImportError::ValidationError {
            message: format!("Unsupported input format: {} (expected .xlsx or .csv)", path),
        }),
    }
}

fn load_from_xlsx(path: &str) -> Result<LoadedOutlets> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| ImportError::ProcessingError {
            message: format!("{} contains no worksheets", path),
        })?;
    tracing::debug!("Reading worksheet '{}' from {}", sheet_name, path);

    let range = workbook.worksheet_range(&sheet_name)?;

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    // Skip the header row.
    for row in range.rows().skip(1) {
        match build_record(
            cell_text(row.first()),
            cell_text(row.get(1)),
            cell_text(row.get(2)),
        ) {
            Some(record) => records.push(record),
            None => skipped_rows += 1,
        }
    }

    Ok(LoadedOutlets {
        records,
        skipped_rows,
    })
}

fn load_from_csv(path: &str) -> Result<LoadedOutlets> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    for row in reader.records() {
        let row = row?;
        match build_record(field_text(&row, 0), field_text(&row, 1), field_text(&row, 2)) {
            Some(record) => records.push(record),
            None => skipped_rows += 1,
        }
    }

    Ok(LoadedOutlets {
        records,
        skipped_rows,
    })
}

fn build_record(
    store_code: Option<String>,
    short_name: Option<String>,
    store_name: Option<String>,
) -> Option<OutletRecord> {
    Some(OutletRecord {
        store_code: store_code?,
        short_name: short_name?,
        store_name: store_name?,
    })
}

/// Stringifies one spreadsheet cell; `None` for absent or blank cells.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    let text = match cell? {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn field_text(row: &csv::StringRecord, index: usize) -> Option<String> {
    let value = row.get(index)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_xlsx(path: &std::path::Path, rows: &[[&str; 3]]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Store Code").unwrap();
        worksheet.write_string(0, 1, "Short Store Name").unwrap();
        worksheet.write_string(0, 2, "Store Name").unwrap();
        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(r, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn loads_records_in_row_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");
        write_xlsx(
            &path,
            &[
                ["0001", "JKJSTT1", "Jakarta Selatan 1"],
                ["0002", "JKJSTT2", "Jakarta Selatan 2"],
                ["0003", "BDGDAG1", "Bandung Dago 1"],
            ],
        );

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.skipped_rows, 0);
        assert_eq!(loaded.records.len(), 3);
        assert_eq!(loaded.records[0].store_code, "0001");
        assert_eq!(loaded.records[1].short_name, "JKJSTT2");
        assert_eq!(loaded.records[2].store_name, "Bandung Dago 1");
    }

    #[test]
    fn skips_and_counts_rows_with_missing_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");
        write_xlsx(
            &path,
            &[
                ["0001", "JKJSTT1", "Jakarta Selatan 1"],
                ["0002", "", "Jakarta Selatan 2"],
                ["", "BDGDAG1", "Bandung Dago 1"],
                ["0004", "BDGDAG2", ""],
                ["0005", "SBYTP1", "Surabaya Tunjungan 1"],
            ],
        );

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped_rows, 3);
        assert_eq!(loaded.records[0].store_code, "0001");
        assert_eq!(loaded.records[1].store_code, "0005");
    }

    #[test]
    fn trims_whitespace_from_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");
        write_xlsx(&path, &[["  0001  ", " JKJSTT1", "Jakarta Selatan 1  "]]);

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].store_code, "0001");
        assert_eq!(loaded.records[0].short_name, "JKJSTT1");
        assert_eq!(loaded.records[0].store_name, "Jakarta Selatan 1");
    }

    #[test]
    fn whitespace_only_cell_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");
        write_xlsx(&path, &[["0001", "   ", "Jakarta Selatan 1"]]);

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped_rows, 1);
    }

    #[test]
    fn numeric_store_codes_are_stringified() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Store Code").unwrap();
        worksheet.write_string(0, 1, "Short Store Name").unwrap();
        worksheet.write_string(0, 2, "Store Name").unwrap();
        worksheet.write_number(1, 0, 17.0).unwrap();
        worksheet.write_string(1, 1, "JKJSTT1").unwrap();
        worksheet.write_string(1, 2, "Jakarta Selatan 1").unwrap();
        workbook.save(&path).unwrap();

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].store_code, "17");
    }

    #[test]
    fn header_only_sheet_yields_no_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.xlsx");
        write_xlsx(&path, &[]);

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped_rows, 0);
    }

    #[test]
    fn missing_file_is_a_fatal_error() {
        assert!(load_outlets("does-not-exist.xlsx").is_err());
        assert!(load_outlets("does-not-exist.csv").is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_outlets("outlets.txt").unwrap_err();
        assert!(matches!(err, ImportError::ValidationError { .. }));
    }

    #[test]
    fn loads_csv_with_header_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlets.csv");
        std::fs::write(
            &path,
            "Store Code,Short Store Name,Store Name\n\
             0001, JKJSTT1 ,Jakarta Selatan 1\n\
             0002,,Jakarta Selatan 2\n\
             0003,BDGDAG1,Bandung Dago 1\n",
        )
        .unwrap();

        let loaded = load_outlets(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped_rows, 1);
        assert_eq!(loaded.records[0].short_name, "JKJSTT1");
        assert_eq!(loaded.records[1].store_code, "0003");
    }
}
