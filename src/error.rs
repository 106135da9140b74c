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
use std::fmt;
use std::io;

/// Errors which can arise at any stage of reading, decoding or
/// parsing a TclPro bytecode stream.
#[derive(Debug)]
pub enum Error {
    /// An underlying I/O operation failed.
    Io(io::Error),
    /// A logical line was shorter than the fixed physical line width
    /// expected by the line reader.
    ShortLine { expected: usize, found: usize },
    /// A character outside the 85-symbol alphabet (and not whitespace
    /// or the zero-run marker) was encountered while decoding.
    IllegalCharacter(u8),
    /// A decode was attempted on an empty logical line.
    EmptyDecode,
    /// An integer field could not be parsed from its decimal text.
    InvalidInteger(String),
    /// A length-prefixed field declared a negative or otherwise
    /// invalid count.
    InvalidCount(i64),
    /// A literal object tag byte did not match any of the known
    /// object kinds.
    UnsupportedObjectType(char),
    /// An opcode byte fell outside the known instruction table.
    UnknownOpcode(u8),
    /// Decoding an instruction's operands ran past the end of the
    /// available bytecode buffer.
    InstructionOverrun { offset: usize, needed: usize, available: usize },
    /// An auxiliary data descriptor named a handler this disassembler
    /// does not know how to interpret.
    UnsupportedAuxData(String),
    /// A length-prefixed blob declared a size larger than the
    /// remaining input, or larger than a sane upper bound.
    BufferOverflow { declared: usize, limit: usize },
    /// A record was missing a field required by its format.
    MissingField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::ShortLine { expected, found } => {
                write!(f, "short physical line: expected {} characters, found {}", expected, found)
            }
            Error::IllegalCharacter(b) => write!(f, "illegal character in encoded data: {:#04x}", b),
            Error::EmptyDecode => write!(f, "decode of empty logical line"),
            Error::InvalidInteger(s) => write!(f, "invalid integer field: {:?}", s),
            Error::InvalidCount(n) => write!(f, "invalid count: {}", n),
            Error::UnsupportedObjectType(c) => write!(f, "unsupported literal object tag: {:?}", c),
            Error::UnknownOpcode(op) => write!(f, "unknown opcode: {:#04x}", op),
            Error::InstructionOverrun { offset, needed, available } => write!(
                f,
                "instruction at offset {} requires {} bytes but only {} are available",
                offset, needed, available
            ),
            Error::UnsupportedAuxData(name) => write!(f, "unsupported auxiliary data type: {}", name),
            Error::BufferOverflow { declared, limit } => write!(
                f,
                "declared buffer length {} exceeds limit {}",
                declared, limit
            ),
            Error::MissingField(name) => write!(f, "missing required field: {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}
