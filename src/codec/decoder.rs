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
use crate::codec::alphabet::{classify, Symbol, ZERO_MARKER};
use crate::codec::chunk::{reverse_every_4, reverse_every_5};
use crate::error::Error;

/// Decodes a single logical line produced by [`crate::codec::encode`].
///
/// Whitespace is skipped. The zero-run marker `z` stands for a whole
/// `0,0,0,0` chunk and is excluded from the 5-character reversal and
/// padding math that applies to ordinary digit runs either side of
/// it — folding it into that math (as some historical ports do) would
/// silently corrupt any blob containing an all-zero word.
pub fn decode(line: &[u8]) -> Result<Vec<u8>, Error> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let mut run: Vec<u8> = Vec::new();
    let mut saw_any = false;

    for &c in line {
        if c == ZERO_MARKER {
            saw_any = true;
            if !run.is_empty() {
                out.extend(decode_run(std::mem::take(&mut run)));
            }
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        match classify(c)? {
            Symbol::Whitespace => continue,
            Symbol::Digit(v) => {
                saw_any = true;
                run.push(v);
            }
        }
    }
    if !run.is_empty() {
        out.extend(decode_run(run));
    }
    if !saw_any {
        return Err(Error::EmptyDecode);
    }
    Ok(out)
}

/// Decodes one contiguous run of non-marker digits: pads to a
/// multiple of 5 with the digit value for `!`, reverses each 5-digit
/// chunk, runs the standard base-85 transform, reverses each 4-byte
/// result chunk, then trims the bytes contributed purely by padding.
fn decode_run(mut digits: Vec<u8>) -> Vec<u8> {
    let pad = (5 - digits.len() % 5) % 5;
    digits.resize(digits.len() + pad, 0);

    reverse_every_5(&mut digits);
    let mut bytes = decode_groups(&digits);
    reverse_every_4(&mut bytes);

    let keep = bytes.len() - pad.min(bytes.len());
    bytes.truncate(keep);
    bytes
}

/// Splits `digits` into 5-digit base-85 groups and collapses each
/// into a 4-byte big-endian word.
fn decode_groups(digits: &[u8]) -> Vec<u8> {
    debug_assert_eq!(digits.len() % 5, 0);
    let mut out = Vec::with_capacity(digits.len() / 5 * 4);
    for group in digits.chunks_exact(5) {
        let mut v: u64 = 0;
        for &d in group {
            v = v * 85 + d as u64;
        }
        out.extend_from_slice(&(v as u32).to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;

    #[test]
    fn test_decode_01() {
        assert_eq!(decode(b",CHr@").unwrap(), b"proc");
    }

    #[test]
    fn test_decode_02() {
        assert_eq!(decode(b"7YDEFTnw").unwrap(), b"button");
    }

    #[test]
    fn test_decode_round_trip() {
        for s in ["proc", "button", "-text", "Hello TclPro", "cbk_clicked", "tbcload::bcproc"] {
            let encoded = encode(s.as_bytes());
            assert_eq!(decode(&encoded).unwrap(), s.as_bytes());
        }
    }

    #[test]
    fn test_decode_zero_marker() {
        let raw = b"AAAA\x00\x00\x00\x00BBBB";
        let encoded = encode(raw);
        // Replace the middle 5-character group (all `!`) with the
        // zero-run marker, as a TclPro encoder producing compact
        // output for an all-zero word would.
        let mut spliced = Vec::new();
        spliced.extend_from_slice(&encoded[0..5]);
        spliced.push(b'z');
        spliced.extend_from_slice(&encoded[10..]);
        assert_eq!(decode(&spliced).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_decode_illegal_character() {
        assert!(matches!(decode(b"\x01bad"), Err(Error::IllegalCharacter(_))));
    }

    #[test]
    fn test_decode_whitespace_only_is_error() {
        assert!(matches!(decode(b"   "), Err(Error::EmptyDecode)));
    }

    #[test]
    fn test_decode_empty_input_is_empty_output() {
        assert_eq!(decode(b"").unwrap(), Vec::<u8>::new());
    }
}
