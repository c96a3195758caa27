use serde::{Deserialize, Serialize};

use portal_sheets::Sheet;

use crate::model::MissingColumn;

/// A bot entry, decoded from one Bots sheet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotRecord {
    /// Stable identifier, the key the allow-list refers to.
    pub id: String,

    /// Display name shown in the selection UI.
    pub name: String,

    /// Target link the user is sent to.
    pub url: String,
}

/// The decoded Bots sheet, in fetch order.
#[derive(Debug, Clone, Default)]
pub struct BotDirectory {
    records: Vec<BotRecord>,
}

impl BotDirectory {
    /// Decode a fetched Bots sheet into typed records.
    ///
    /// Only `BotID` is required; `BotName` and `BotURL` columns fall back
    /// to empty strings when absent. Rows with an empty BotID are dropped —
    /// an allow-list token can never refer to them.
    pub fn from_sheet(sheet: &Sheet) -> Result<Self, MissingColumn> {
        let id_col = sheet.column("BotID").ok_or_else(|| MissingColumn {
            column: "BotID",
            found: sheet.header().to_vec(),
        })?;
        let name_col = sheet.column("BotName");
        let url_col = sheet.column("BotURL");

        let records = sheet
            .rows()
            .iter()
            .filter(|row| !row[id_col].trim().is_empty())
            .map(|row| BotRecord {
                id: row[id_col].clone(),
                name: name_col.map(|c| row[c].clone()).unwrap_or_default(),
                url: url_col.map(|c| row[c].clone()).unwrap_or_default(),
            })
            .collect();

        Ok(Self { records })
    }

    pub fn records(&self) -> &[BotRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bots_sheet(rows: Vec<Vec<&str>>) -> Sheet {
        let mut raw = vec![vec![
            "BotID".to_string(),
            "BotName".to_string(),
            "BotURL".to_string(),
        ]];
        raw.extend(
            rows.into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect()),
        );
        Sheet::from_rows(raw)
    }

    #[test]
    fn test_decode_preserves_order() {
        let dir = BotDirectory::from_sheet(&bots_sheet(vec![
            vec!["b2", "Bot Two", "http://x/2"],
            vec!["b1", "Bot One", "http://x/1"],
        ]))
        .unwrap();

        let ids: Vec<&str> = dir.records().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b1"]);
    }

    #[test]
    fn test_decode_missing_botid_column() {
        let sheet = Sheet::from_rows(vec![vec!["BotName".to_string(), "BotURL".to_string()]]);
        let err = BotDirectory::from_sheet(&sheet).unwrap_err();
        assert_eq!(err.column, "BotID");
    }

    #[test]
    fn test_decode_optional_columns_default_empty() {
        let sheet = Sheet::from_rows(vec![
            vec!["BotID".to_string()],
            vec!["b1".to_string()],
        ]);
        let dir = BotDirectory::from_sheet(&sheet).unwrap();
        assert_eq!(dir.records()[0].id, "b1");
        assert_eq!(dir.records()[0].name, "");
        assert_eq!(dir.records()[0].url, "");
    }

    #[test]
    fn test_blank_id_rows_dropped() {
        let dir = BotDirectory::from_sheet(&bots_sheet(vec![
            vec!["", "Ghost", "http://x/0"],
            vec!["b1", "Bot One", "http://x/1"],
        ]))
        .unwrap();
        assert_eq!(dir.records().len(), 1);
        assert_eq!(dir.records()[0].id, "b1");
    }
}
