use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads choices one non-whitespace character at a time from a line-buffered
/// source. Whitespace and line breaks between choices are skipped, and extra
/// characters typed on a line are kept for the following turns.
pub struct ChoiceReader<R> {
    source: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> ChoiceReader<R> {
    pub fn new(source: R) -> Self {
        ChoiceReader {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next choice character, or `None` once the source is exhausted.
    pub fn next_choice(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Ok(Some(c));
            }

            // Bytes that are not UTF-8 become U+FFFD and read as an invalid choice.
            let mut line: Vec<u8> = Vec::new();
            if self.source.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .chars()
                    .filter(|c| !c.is_whitespace()),
            );
        }
    }
}
