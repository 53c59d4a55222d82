// sheets/requests.rs

use crate::model::{ColorAssignment, SheetUpdate};
use serde_json::{Value, json};

const TABLE_COLUMNS: usize = 3;

/// `updateCells` over the whole grid: header + rows are written and every other
/// cell value in the sheet is cleared, in one request.
pub fn table_request(sheet_id: i64, update: &SheetUpdate) -> Value {
    let header = update.header.iter().map(String::as_str);
    let body = update.rows.iter().map(|row| row.cells());

    let rows: Vec<Value> = std::iter::once(header.collect::<Vec<_>>())
        .chain(body.map(|cells| cells.to_vec()))
        .map(|cells| {
            let values: Vec<Value> = cells
                .into_iter()
                .map(|text| json!({ "userEnteredValue": { "stringValue": text } }))
                .collect();
            json!({ "values": values })
        })
        .collect();

    json!({
        "updateCells": {
            "range": { "sheetId": sheet_id },
            "rows": rows,
            "fields": "userEnteredValue",
        }
    })
}

/// `repeatCell` painting the first three columns of one row.
pub fn color_request(sheet_id: i64, assignment: &ColorAssignment) -> Value {
    json!({
        "repeatCell": {
            "range": {
                "sheetId": sheet_id,
                "startRowIndex": assignment.row_index - 1,
                "endRowIndex": assignment.row_index,
                "startColumnIndex": 0,
                "endColumnIndex": TABLE_COLUMNS,
            },
            "cell": {
                "userEnteredFormat": {
                    "backgroundColor": assignment.color,
                }
            },
            "fields": "userEnteredFormat.backgroundColor",
        }
    })
}

/// Single `batchUpdate` body; the API applies all requests or none.
pub fn publish_body(sheet_id: i64, update: &SheetUpdate) -> Value {
    let mut requests = Vec::with_capacity(update.colors.len() + 1);
    requests.push(table_request(sheet_id, update));
    requests.extend(update.colors.iter().map(|c| color_request(sheet_id, c)));
    json!({ "requests": requests })
}
