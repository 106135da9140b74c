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
use crate::error::Error;

/// The zero-run marker: stands in for a full `0,0,0,0` byte chunk.
pub const ZERO_MARKER: u8 = b'z';

/// Maps a base-85 digit (0..=84) to the variant's printable character.
/// Identical to standard ASCII85 (`'!'..='u'`) except for five digits
/// whose standard character would collide with shell/Tcl metacharacters;
/// those are remapped to characters from the unused upper range.
pub const ENCODE_TABLE: [u8; 85] = build_encode_table();

/// Inverse of [`ENCODE_TABLE`]: maps any of the 128 ASCII byte values
/// to either a base-85 digit, or one of three sentinels.
const DIGIT_MAX: u8 = 84;
pub const WHITESPACE: u8 = 0xFE;
pub const ILLEGAL: u8 = 0xFF;

const fn build_encode_table() -> [u8; 85] {
    let mut table = [0u8; 85];
    let mut i = 0;
    while i < 85 {
        table[i] = 0x21 + i as u8;
        i += 1;
    }
    // Substituted digits: standard char -> replacement.
    table[1] = b'v';
    table[3] = b'w';
    table[58] = b'x';
    table[59] = b'y';
    table[60] = b'|';
    table
}

const fn build_decode_table() -> [u8; 128] {
    let mut table = [ILLEGAL; 128];
    let mut d = 0;
    while d < 85 {
        let c = 0x21 + d as u8;
        table[c as usize] = d as u8;
        d += 1;
    }
    // The five standard characters vacated by the substitution above
    // are illegal on decode (they no longer mean anything); their
    // slots are overwritten by the replacement characters instead.
    table[b'"' as usize] = ILLEGAL;
    table[b'$' as usize] = ILLEGAL;
    table[b'[' as usize] = ILLEGAL;
    table[b'\\' as usize] = ILLEGAL;
    table[b']' as usize] = ILLEGAL;
    table[b'v' as usize] = 1;
    table[b'w' as usize] = 3;
    table[b'x' as usize] = 58;
    table[b'y' as usize] = 59;
    table[b'|' as usize] = 60;
    // Whitespace is skipped rather than decoded.
    table[b' ' as usize] = WHITESPACE;
    table[b'\t' as usize] = WHITESPACE;
    table[b'\r' as usize] = WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table
}

const DECODE_TABLE: [u8; 128] = build_decode_table();

/// Classifies a single byte from an encoded logical line.
pub enum Symbol {
    Digit(u8),
    Whitespace,
}

/// Looks up the base-85 digit (or whitespace marker) for `c`.
///
/// The zero-run marker `z` is handled by the caller before this is
/// invoked; it is never itself a valid argument here.
pub fn classify(c: u8) -> Result<Symbol, Error> {
    if c >= 128 {
        return Err(Error::IllegalCharacter(c));
    }
    match DECODE_TABLE[c as usize] {
        ILLEGAL => Err(Error::IllegalCharacter(c)),
        WHITESPACE => Ok(Symbol::Whitespace),
        v if v <= DIGIT_MAX => Ok(Symbol::Digit(v)),
        _ => unreachable!(),
    }
}
