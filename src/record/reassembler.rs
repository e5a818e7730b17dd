use std::io::BufRead;

pub const DEFAULT_MIN_RECORD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReassemblyMode {
    /// Quoted spans carry across physical lines; a record ends when the
    /// quote nesting returns to "outside".
    #[default]
    QuoteAware,
    /// Every physical line is judged in isolation. Records with embedded
    /// line breaks come out truncated; kept as a degraded mode only.
    LineOnly,
}

/// Streams raw lines and yields reassembled record strings. One pass,
/// not restartable.
pub struct RecordReassembler<R: BufRead> {
    reader: R,
    mode: ReassemblyMode,
    min_record_len: usize,
    buffer: String,
    in_quotes: bool,
    lines_read: u64,
    done: bool,
}

impl<R: BufRead> RecordReassembler<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            mode: ReassemblyMode::QuoteAware,
            min_record_len: DEFAULT_MIN_RECORD_LEN,
            buffer: String::new(),
            in_quotes: false,
            lines_read: 0,
            done: false,
        }
    }

    pub fn with_mode(mut self, mode: ReassemblyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_min_record_len(mut self, len: usize) -> Self {
        self.min_record_len = len;
        self
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    fn next_line(&mut self) -> Option<String> {
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => {
                self.lines_read += 1;
                Some(String::from_utf8_lossy(&raw).into_owned())
            }
            Err(e) => {
                log::debug!("stopping reassembly on read error: {}", e);
                None
            }
        }
    }

    fn is_candidate_start(line: &str) -> bool {
        match line.chars().next() {
            Some(c) => !c.is_whitespace(),
            None => false,
        }
    }

    // Both filters apply on their own; a minimal record with two top-level
    // commas must not be rejected by the length floor.
    fn is_valid_record(&self, record: &str) -> bool {
        record.trim().len() >= self.min_record_len && top_level_comma_count(record) >= 2
    }
}

impl<R: BufRead> Iterator for RecordReassembler<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        loop {
            let Some(line) = self.next_line() else {
                // An unterminated quoted span at EOF drops the partial buffer.
                self.done = true;
                self.buffer.clear();
                return None;
            };

            if self.mode == ReassemblyMode::LineOnly {
                if Self::is_candidate_start(&line) && self.is_valid_record(&line) {
                    return Some(line);
                }
                continue;
            }

            if self.buffer.is_empty() && !Self::is_candidate_start(&line) {
                continue;
            }

            self.in_quotes = scan_quotes(&line, self.in_quotes);
            self.buffer.push_str(&line);

            if !self.in_quotes {
                let record = std::mem::take(&mut self.buffer);
                if self.is_valid_record(&record) {
                    return Some(record);
                }
            }
        }
    }
}

/// Advances the "inside quoted span" flag across one line. A doubled `""`
/// is an escaped quote, not a span boundary.
pub fn scan_quotes(line: &str, mut in_quotes: bool) -> bool {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'"' {
                i += 2;
                continue;
            }
            in_quotes = !in_quotes;
        }
        i += 1;
    }
    in_quotes
}

/// Counts commas that sit outside any quoted span.
pub fn top_level_comma_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut in_quotes = false;
    let mut count = 0;
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
            b',' if !in_quotes => count += 1,
            _ => {}
        }
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reassemble(input: &str) -> Vec<String> {
        RecordReassembler::new(Cursor::new(input)).collect()
    }

    #[test]
    fn test_single_line_records() {
        let records = reassemble("Queen,Bohemian Rhapsody,http://x,words\nAbba,SOS,http://y,more\n");
        assert_eq!(records.len(), 2);
        assert!(records[0].starts_with("Queen,"));
        assert!(records[1].starts_with("Abba,"));
    }

    #[test]
    fn test_multiline_quoted_lyric_is_one_record() {
        let input = "Queen,Song,link,\"first line\nsecond line\nthird\"\nAbba,SOS,link,short\n";
        let records = reassemble(input);
        assert_eq!(records.len(), 2);
        assert!(records[0].contains("second line"));
        assert!(records[0].contains("third"));
    }

    #[test]
    fn test_escaped_quotes_do_not_close_span() {
        let input = "A,B,C,\"she said \"\"hi\"\"\nand left\"\n";
        let records = reassemble(input);
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("and left"));
    }

    #[test]
    fn test_blank_and_indented_lines_skipped() {
        let input = "\n   stray continuation\nQueen,Song,link,text\n\n";
        let records = reassemble(input);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_line_without_commas_discarded() {
        let records = reassemble("just some words\nQueen,Song,link,text\n");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_short_record_with_two_commas_recognized() {
        // The length floor must not shadow the comma signal.
        let records = reassemble("a,b,c\n");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unterminated_quote_at_eof_dropped() {
        let records = reassemble("A,B,C,\"never closed\nstill going");
        assert!(records.is_empty());
    }

    #[test]
    fn test_line_only_mode_truncates_multiline_record() {
        let input = "Queen,Song,link,\"first line\nsecond line\"\n";

        let canonical = reassemble(input);
        let legacy: Vec<String> = RecordReassembler::new(Cursor::new(input))
            .with_mode(ReassemblyMode::LineOnly)
            .collect();

        assert_eq!(canonical.len(), 1);
        assert!(canonical[0].contains("second line"));

        assert_eq!(legacy.len(), 1);
        assert!(!legacy[0].contains("second line"));
    }

    #[test]
    fn test_lines_read_counter() {
        let mut reassembler = RecordReassembler::new(Cursor::new("a,b,c\nx,y,z\n"));
        assert_eq!(reassembler.by_ref().count(), 2);
        assert_eq!(reassembler.lines_read(), 2);
    }

    #[test]
    fn test_scan_quotes_pairs() {
        assert!(scan_quotes("\"open", false));
        assert!(!scan_quotes("\"closed\"", false));
        assert!(scan_quotes("\"with \"\" inside", false));
        assert!(!scan_quotes("tail\"", true));
    }

    #[test]
    fn test_top_level_comma_count() {
        assert_eq!(top_level_comma_count("a,b,c"), 2);
        assert_eq!(top_level_comma_count("\"a,b\",c"), 1);
        assert_eq!(top_level_comma_count("\"x\"\",\"\"y\""), 0);
        assert_eq!(top_level_comma_count("no commas"), 0);
    }
}
