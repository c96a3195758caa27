use serde_json::Value;

/// A fetched sheet tab: one header row naming the columns, then data rows.
///
/// Data rows are padded with empty cells up to the header width; cells
/// beyond the header width are dropped. An empty sheet has no header and
/// no rows.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Build a sheet from raw rows. The first row is the header; the rest
    /// become data rows, normalized to the header width.
    pub fn from_rows(mut raw: Vec<Vec<String>>) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let header = raw.remove(0);
        let width = header.len();
        let rows = raw
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { header, rows }
    }

    /// Column names, in sheet order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (header excluded), in fetch order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a column by exact name match.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|c| c == name)
    }

    /// True if the fetch produced no rows at all (not even a header).
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Parse the body of a `values` API response into raw rows.
///
/// The body is `{"values": [["Email", ...], ...]}`; a missing `values`
/// field means the tab has no data. Non-string cells (the API can return
/// numbers for unformatted columns) are stringified.
pub fn parse_values_response(body: &Value) -> Vec<Vec<String>> {
    let values = match body.get("values").and_then(Value::as_array) {
        Some(v) => v,
        None => return Vec::new(),
    };

    values
        .iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_to_string).collect())
                .unwrap_or_default()
        })
        .collect()
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
