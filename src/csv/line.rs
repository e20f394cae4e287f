/// Split one CSV line into fields.
///
/// A field is quoted only when `"` is its first non-blank character; commas
/// inside such a field do not split, and `""` inside it is an escaped quote.
/// A `"` anywhere else is an ordinary character. Each field is then passed
/// through [`clean_field`]. Empty fields are kept, so `a,,c` yields three
/// fields. Quoted fields spanning several physical lines are not supported.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    // only whitespace seen since `start`
    let mut at_field_start = true;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
                at_field_start = true;
            }
            c if c.is_whitespace() => {}
            _ => at_field_start = false,
        }
    }
    fields.push(clean_field(&line[start..]));
    fields
}

/// Trim whitespace, then strip outer quotes and unescape `""` if present.
/// A field with an unmatched quote is returned trimmed but otherwise verbatim.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}
