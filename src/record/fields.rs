/// Field access over one reassembled record. Only the two fields the
/// reports need are extractable; everything else is skipped over.
pub struct FieldExtractor;

impl FieldExtractor {
    /// First field of the record, with quoted-field escaping collapsed
    /// (`""` becomes `"`) and surrounding whitespace trimmed.
    pub fn artist(record: &str) -> String {
        let mut out = String::new();

        if let Some(quoted) = record.strip_prefix('"') {
            let mut chars = quoted.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        out.push('"');
                        chars.next();
                    } else {
                        break;
                    }
                } else {
                    out.push(c);
                }
            }
        } else {
            out.push_str(record.split(',').next().unwrap_or(""));
        }

        out.trim().to_string()
    }

    /// Everything after the third top-level comma, unquoted and flattened
    /// to a single line. `None` when the record has fewer than three
    /// separating commas; such records are skipped, not errors.
    pub fn lyric(record: &str) -> Option<String> {
        let bytes = record.as_bytes();
        let mut in_quotes = false;
        let mut commas = 0;
        let mut start = None;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    if i + 1 < bytes.len() && bytes[i + 1] == b'"' {
                        i += 2;
                        continue;
                    }
                    in_quotes = !in_quotes;
                }
                b',' if !in_quotes => {
                    commas += 1;
                    if commas == 3 {
                        start = Some(i + 1);
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        let mut text = record[start?..].trim_end_matches(['\n', '\r']);

        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            text = &text[1..text.len() - 1];
        }

        Some(
            text.chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect(),
        )
    }
}
