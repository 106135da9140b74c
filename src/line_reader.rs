// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io::BufRead;

use crate::error::Error;

/// Fixed physical line width used by the bytecode file format. A
/// physical line exactly this long continues onto the next physical
/// line; a shorter one ends the logical line. Width alone carries
/// the continuation signal — there is no escape character.
pub const LINE_WIDTH: usize = 72;

/// Reassembles logical lines that a `.tbc` writer has wrapped onto
/// multiple fixed-width physical lines.
pub struct LogicalLineReader<R> {
    inner: R,
}

impl<R: BufRead> LogicalLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next logical line, joining continuation lines as
    /// needed. Returns `Ok(None)` at end of input.
    pub fn read_logical_line(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let mut out = Vec::new();
        let mut read_any = false;
        loop {
            let mut raw = Vec::new();
            let n = self.inner.read_until(b'\n', &mut raw)?;
            if n == 0 {
                break;
            }
            read_any = true;
            strip_terminator(&mut raw);
            let continues = raw.len() == LINE_WIDTH;
            out.extend_from_slice(&raw);
            if !continues {
                return Ok(Some(out));
            }
        }
        if read_any {
            Ok(Some(out))
        } else {
            Ok(None)
        }
    }
}

fn strip_terminator(raw: &mut Vec<u8>) {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_single_short_line() {
        let mut r = LogicalLineReader::new(Cursor::new(b"hello\n".to_vec()));
        assert_eq!(r.read_logical_line().unwrap(), Some(b"hello".to_vec()));
        assert_eq!(r.read_logical_line().unwrap(), None);
    }

    #[test]
    fn test_continuation_joins_full_width_lines() {
        let first = vec![b'a'; LINE_WIDTH];
        let second = b"tail".to_vec();
        let mut data = first.clone();
        data.push(b'\n');
        data.extend_from_slice(&second);
        data.push(b'\n');
        let mut r = LogicalLineReader::new(Cursor::new(data));
        let mut expected = first;
        expected.extend_from_slice(&second);
        assert_eq!(r.read_logical_line().unwrap(), Some(expected));
        assert_eq!(r.read_logical_line().unwrap(), None);
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut r = LogicalLineReader::new(Cursor::new(b"abc\r\ndef\r\n".to_vec()));
        assert_eq!(r.read_logical_line().unwrap(), Some(b"abc".to_vec()));
        assert_eq!(r.read_logical_line().unwrap(), Some(b"def".to_vec()));
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut r = LogicalLineReader::new(Cursor::new(b"noeol".to_vec()));
        assert_eq!(r.read_logical_line().unwrap(), Some(b"noeol".to_vec()));
    }
}
