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
use crate::codec::alphabet::ENCODE_TABLE;
use crate::codec::chunk::{reverse_every_4, reverse_every_5};

/// Encodes `src` using the TclPro ASCII85 variant: align to 4 bytes,
/// reverse each 4-byte chunk, run the standard base-85 transform,
/// reverse each resulting 5-character chunk, then remap five
/// characters to avoid shell/Tcl metacharacters.
///
/// The caller is responsible for remembering the original length if
/// an exact round trip is required; padding characters introduced by
/// a non-multiple-of-4 input are trimmed from the tail of the result,
/// following the standard ASCII85 convention for a short final group.
pub fn encode(src: &[u8]) -> Vec<u8> {
    if src.is_empty() {
        return Vec::new();
    }
    let pad = (4 - src.len() % 4) % 4;
    let mut aligned = Vec::with_capacity(src.len() + pad);
    aligned.extend_from_slice(src);
    aligned.resize(src.len() + pad, 0);

    reverse_every_4(&mut aligned);

    let mut digits = encode_groups(&aligned);
    reverse_every_5(&mut digits);

    let mut out: Vec<u8> = digits.iter().map(|&d| ENCODE_TABLE[d as usize]).collect();
    let final_len = out.len() - pad;
    out.truncate(final_len);
    out
}

/// Splits `aligned` into 4-byte big-endian words and expands each
/// into five base-85 digits, most significant first.
fn encode_groups(aligned: &[u8]) -> Vec<u8> {
    debug_assert_eq!(aligned.len() % 4, 0);
    let mut digits = Vec::with_capacity(aligned.len() / 4 * 5);
    for word in aligned.chunks_exact(4) {
        let mut v = u32::from_be_bytes([word[0], word[1], word[2], word[3]]) as u64;
        let mut group = [0u8; 5];
        for slot in group.iter_mut().rev() {
            *slot = (v % 85) as u8;
            v /= 85;
        }
        digits.extend_from_slice(&group);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_01() {
        assert_eq!(encode(b"proc"), b",CHr@");
    }

    #[test]
    fn test_encode_02() {
        assert_eq!(encode(b"button"), b"7YDEFTnw");
    }

    #[test]
    fn test_encode_03() {
        assert_eq!(encode(b"-text"), b"Kt(yG@v");
    }

    #[test]
    fn test_encode_04() {
        assert_eq!(encode(b"Hello TclPro"), b"RZ!iChROo@jZSfD");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b""), Vec::<u8>::new());
    }
}
