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
//! A disassembler for TclPro compiled bytecode (`.tbc`) files: a
//! customized ASCII85 codec, a recursive-descent reader for the
//! nested procedure-record format, and an opcode-table-driven
//! instruction disassembler.
/// The non-standard ASCII85 codec used to embed binary blobs inside a
/// `.tbc` text file.
pub mod codec;
/// Walks a decoded bytecode block and renders its instructions.
pub mod disassembler;
/// The error type shared by every fallible operation in this crate.
pub mod error;
/// Joins a `.tbc` file's fixed-width wrapped physical lines back into
/// logical lines.
pub mod line_reader;
/// The Tcl bytecode interpreter's opcode descriptor table.
pub mod opcode;
/// The recursive-descent `.tbc` file parser.
pub mod parser;
/// In-memory shape of a parsed procedure record.
pub mod record;
/// Small helpers shared across modules (currently just hex-string
/// rendering).
pub mod util;
