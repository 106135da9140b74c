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
//! The in-memory shape of a parsed procedure: a [`ByteCodeRecord`]
//! and the handful of types nested inside it.
use crate::error::Error;

/// Everything the file format stores for one compiled procedure.
/// Recursive: a `p`-tagged [`LiteralObject`] embeds another one of
/// these for a nested procedure body.
pub struct ByteCodeRecord {
    /// The raw procedure-info line, echoed verbatim to the output.
    pub proc_info: String,
    pub bytecode: Vec<u8>,
    pub code_delta: Vec<u8>,
    pub code_length: Vec<u8>,
    pub literals: Vec<LiteralObject>,
    /// Exception-range entries, kept as their raw text (the format
    /// does not require more than echoing them back).
    pub exception_ranges: Vec<String>,
    pub aux_data: Vec<AuxData>,
}

/// One entry of a ByteCodeRecord's literal table.
pub enum LiteralObject {
    Int(String),
    Double(String),
    Str(String),
    XString(Vec<u8>),
    Proc(Box<ProcLiteral>),
}

impl LiteralObject {
    /// The single-character tag this variant was parsed from.
    pub fn tag(&self) -> char {
        match self {
            LiteralObject::Int(_) => 'i',
            LiteralObject::Double(_) => 'd',
            LiteralObject::Str(_) => 's',
            LiteralObject::XString(_) => 'x',
            LiteralObject::Proc(_) => 'p',
        }
    }
}

/// A `p`-tagged literal: a nested procedure body plus its formal
/// parameter count and compiled-local table.
pub struct ProcLiteral {
    pub record: ByteCodeRecord,
    pub num_args: i64,
    pub compiled_locals: Vec<CompiledLocal>,
}

/// One entry of a procedure's compiled-local table.
pub struct CompiledLocal {
    /// Decoded (ASCII85) variable name.
    pub name: Vec<u8>,
    pub index: i64,
    pub mask: i64,
    /// Present iff the record's `hasDefault` flag was 1.
    pub default: Option<LiteralObject>,
}

/// An auxiliary-data record. Only the narrow foreach-descriptor shape
/// (`F`, one list, one variable) is interpreted; every other leading
/// tag is rejected rather than guessed at.
pub struct AuxData {
    /// The raw first line, e.g. `"F 1 1"`.
    pub header: String,
    /// The remaining three raw lines of the record, echoed verbatim.
    pub extra: [String; 3],
}

impl AuxData {
    /// Validates that `header` names the one auxiliary-data shape
    /// this disassembler understands: tag `F`, exactly one list and
    /// one variable.
    pub fn validate_header(header: &str) -> Result<(), Error> {
        let mut parts = header.split_whitespace();
        let tag = parts.next().ok_or_else(|| Error::UnsupportedAuxData(header.to_string()))?;
        let num_lists: Option<u32> = parts.next().and_then(|s| s.parse().ok());
        let num_vars: Option<u32> = parts.next().and_then(|s| s.parse().ok());
        match (tag, num_lists, num_vars) {
            ("F", Some(1), Some(1)) if parts.next().is_none() => Ok(()),
            _ => Err(Error::UnsupportedAuxData(header.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aux_data_validate_header_accepts_foreach_shape() {
        assert!(AuxData::validate_header("F 1 1").is_ok());
    }

    #[test]
    fn test_aux_data_validate_header_rejects_other_tag() {
        assert!(AuxData::validate_header("G 1 1").is_err());
    }

    #[test]
    fn test_aux_data_validate_header_rejects_wide_foreach() {
        assert!(AuxData::validate_header("F 2 1").is_err());
        assert!(AuxData::validate_header("F 1 3").is_err());
    }

    #[test]
    fn test_literal_object_tag() {
        assert_eq!(LiteralObject::Int("1".into()).tag(), 'i');
        assert_eq!(LiteralObject::XString(vec![]).tag(), 'x');
    }
}
