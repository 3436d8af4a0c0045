use crate::util::{normalize_quotes, ElementRefExt};
use scraper::{ElementRef, Selector};

/// Cell texts of every data row of a parameter table, in row order.
///
/// Header rows use `th` cells and therefore produce no cell texts here;
/// telling the 3-column type layout from the 4-column method layout is the
/// caller's job and is done by counting cells in the first row.
pub fn rows(table: ElementRef) -> Vec<Vec<String>> {
    let tr = Selector::parse("tr").unwrap();
    let td = Selector::parse("td").unwrap();

    table
        .select(&tr)
        .map(|row| {
            row.select(&td)
                .map(|cell| normalize_quotes(cell.plain_text().trim()))
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const TABLE: &str = r##"<table>
        <thead><tr><th>Parameter</th><th>Type</th><th>Required</th><th>Description</th></tr></thead>
        <tbody>
            <tr><td>chat_id</td><td>Integer or String</td><td>Yes</td><td>Unique identifier</td></tr>
            <tr><td>text</td><td>String</td><td>Yes</td><td>Text of the message, e.g. <em>bold</em></td></tr>
        </tbody>
    </table>"##;

    #[test]
    fn header_row_produces_no_cells() {
        let html = Html::parse_fragment(TABLE);
        let table = Selector::parse("table").unwrap();
        let rows = rows(html.select(&table).next().unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec!["chat_id", "Integer or String", "Yes", "Unique identifier"]
        );
        assert_eq!(rows[1][3], "Text of the message, e.g. bold");
    }
}
