/// Splits raw CSV text into rows of string cells.
///
/// Quoted cells may contain the delimiter, bare newlines, and doubled-quote
/// escapes (`""` inside a quoted cell yields one literal `"`). A leading
/// byte-order mark is stripped before scanning, and a final line without a
/// terminating newline still produces a row.
///
/// Malformed quoting never fails: an unterminated quote simply consumes the
/// remainder of the input into the final cell. This leniency is documented
/// behavior that downstream aggregation relies on.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let chars: Vec<char> = text.chars().collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '"' {
            if in_quotes && chars.get(i + 1) == Some(&'"') {
                cell.push('"');
                i += 2;
            } else {
                in_quotes = !in_quotes;
                i += 1;
            }
        } else if ch == ',' && !in_quotes {
            row.push(std::mem::take(&mut cell));
            i += 1;
        } else if (ch == '\n' || ch == '\r') && !in_quotes {
            row.push(std::mem::take(&mut cell));
            rows.push(std::mem::take(&mut row));
            if ch == '\r' && chars.get(i + 1) == Some(&'\n') {
                i += 2;
            } else {
                i += 1;
            }
        } else {
            cell.push(ch);
            i += 1;
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}
