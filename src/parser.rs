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
//! The recursive-descent reader for a `.tbc` bytecode file: skips the
//! text header, then walks the nested `ByteCodeRecord` structure,
//! printing a disassembly (or a hex dump) of each procedure it finds.
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use log::{debug, trace};

use crate::codec;
use crate::disassembler;
use crate::error::Error;
use crate::line_reader::LogicalLineReader;
use crate::record::{AuxData, ByteCodeRecord, CompiledLocal, LiteralObject, ProcLiteral};
use crate::util::ToHexString;

/// Literal text that precedes the first procedure record in a
/// well-formed file.
const HEADER_PREFIX: &str = "TclPro ByteCode ";

/// Upper bound on a single length-prefixed blob. Guards against a
/// declared length large enough to exhaust memory on adversarial
/// input.
const MAX_BLOB_LEN: usize = 20 * 1024;

/// Reads a `.tbc` stream and writes its disassembly. Construct with
/// [`new_parser`].
pub struct Parser<R, W> {
    reader: LogicalLineReader<R>,
    writer: BufWriter<W>,
    detail: bool,
}

/// Builds a [`Parser`] over an arbitrary byte-stream reader and
/// writer.
pub fn new_parser<R: Read, W: Write>(input: R, output: W) -> Parser<BufReader<R>, W> {
    Parser {
        reader: LogicalLineReader::new(BufReader::new(input)),
        writer: BufWriter::new(output),
        detail: false,
    }
}

impl<R: BufRead, W: Write> Parser<R, W> {
    /// When set, each procedure's bytecode is rendered as a full
    /// disassembly rather than a hex dump of its three raw blobs.
    pub fn set_detail(&mut self, detail: bool) {
        self.detail = detail;
    }

    /// Parses the whole stream, writing the disassembly to the
    /// configured writer. The writer is flushed on every exit path,
    /// including error paths, so partial output is never lost.
    pub fn parse(&mut self) -> Result<(), Error> {
        let result = self.parse_top_level();
        self.writer.flush()?;
        result
    }

    fn parse_top_level(&mut self) -> Result<(), Error> {
        self.skip_header()?;
        self.parse_bytecode_record()?;
        Ok(())
    }

    fn skip_header(&mut self) -> Result<(), Error> {
        loop {
            let line = self.next_raw_line()?;
            if line.starts_with(HEADER_PREFIX.as_bytes()) {
                debug!("parser: found header line");
                return Ok(());
            }
        }
    }

    fn next_raw_line(&mut self) -> Result<Vec<u8>, Error> {
        match self.reader.read_logical_line()? {
            Some(line) => Ok(line),
            None => Err(Error::MissingField("logical line")),
        }
    }

    fn next_raw_string(&mut self) -> Result<String, Error> {
        let line = self.next_raw_line()?;
        String::from_utf8(line).map_err(|_| Error::InvalidInteger("<non-utf8 line>".to_string()))
    }

    fn next_decoded_line(&mut self) -> Result<Vec<u8>, Error> {
        let line = self.next_raw_line()?;
        codec::decode(&line)
    }

    fn next_count(&mut self) -> Result<i64, Error> {
        let text = self.next_raw_string()?;
        let n: i64 = text
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInteger(text.clone()))?;
        if n < 0 {
            return Err(Error::InvalidCount(n));
        }
        Ok(n)
    }

    fn next_sized_blob(&mut self) -> Result<Vec<u8>, Error> {
        let declared = self.next_count()? as usize;
        if declared > MAX_BLOB_LEN {
            return Err(Error::BufferOverflow { declared, limit: MAX_BLOB_LEN });
        }
        let mut bytes = self.next_decoded_line()?;
        bytes.truncate(declared);
        if bytes.len() < declared {
            return Err(Error::MissingField("sized blob shorter than declared length"));
        }
        Ok(bytes)
    }

    /// Parses one `ByteCodeRecord`, emitting its rendering to the
    /// writer. `bytecode`/`code_delta`/`code_length` are stack-local
    /// to this call so nested procedures never clobber a parent's
    /// cached blobs.
    fn parse_bytecode_record(&mut self) -> Result<ByteCodeRecord, Error> {
        let proc_info = self.next_raw_string()?;
        writeln!(self.writer, "{}", proc_info)?;

        let bytecode = self.next_sized_blob()?;
        let code_delta = self.next_sized_blob()?;
        let code_length = self.next_sized_blob()?;
        trace!(
            "parse_bytecode_record: bytecode={}B delta={}B length={}B",
            bytecode.len(),
            code_delta.len(),
            code_length.len()
        );

        if self.detail {
            disassembler::disassemble(&bytecode, &code_delta, &code_length, &mut self.writer)?;
        } else {
            writeln!(self.writer, "\tbytecode: {}", bytecode.to_hex_string())?;
            writeln!(self.writer, "\tcodeDelta: {}", code_delta.to_hex_string())?;
            writeln!(self.writer, "\tcodeLength: {}", code_length.to_hex_string())?;
        }

        let num_literals = self.next_count()?;
        writeln!(self.writer, "[lit-{}]", num_literals)?;
        let mut literals = Vec::with_capacity(num_literals as usize);
        for _ in 0..num_literals {
            literals.push(self.parse_literal_object()?);
        }

        let num_exceptions = self.next_count()?;
        let mut exception_ranges = Vec::with_capacity(num_exceptions as usize);
        for _ in 0..num_exceptions {
            let line = self.next_raw_string()?;
            writeln!(self.writer, "{}", line)?;
            exception_ranges.push(line);
        }

        let num_aux = self.next_count()?;
        let mut aux_data = Vec::with_capacity(num_aux as usize);
        for _ in 0..num_aux {
            aux_data.push(self.parse_aux_data()?);
        }

        Ok(ByteCodeRecord {
            proc_info,
            bytecode,
            code_delta,
            code_length,
            literals,
            exception_ranges,
            aux_data,
        })
    }

    fn parse_literal_object(&mut self) -> Result<LiteralObject, Error> {
        let tag_line = self.next_raw_string()?;
        let tag = tag_line.chars().next().ok_or(Error::MissingField("literal tag"))?;
        match tag {
            'i' => {
                let text = self.next_raw_string()?;
                writeln!(self.writer, "{}", text)?;
                Ok(LiteralObject::Int(text))
            }
            'd' => {
                let text = self.next_raw_string()?;
                writeln!(self.writer, "{}", text)?;
                Ok(LiteralObject::Double(text))
            }
            's' => {
                let text = self.next_raw_string()?;
                writeln!(self.writer, "{}", text)?;
                Ok(LiteralObject::Str(text))
            }
            'x' => {
                let len = self.next_count()?;
                if len == 0 {
                    self.next_decoded_line()?;
                    Ok(LiteralObject::XString(Vec::new()))
                } else {
                    let bytes = self.next_decoded_line()?;
                    writeln!(self.writer, "{}", bytes.to_hex_string())?;
                    Ok(LiteralObject::XString(bytes))
                }
            }
            'p' => {
                let record = self.parse_bytecode_record()?;
                let counts = self.next_raw_string()?;
                let mut parts = counts.split_whitespace();
                let num_args: i64 = parts
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| Error::InvalidInteger(counts.clone()))?;
                let num_locals: i64 = parts
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| Error::InvalidInteger(counts.clone()))?;
                let mut compiled_locals = Vec::with_capacity(num_locals as usize);
                for _ in 0..num_locals {
                    compiled_locals.push(self.parse_compiled_local()?);
                }
                Ok(LiteralObject::Proc(Box::new(ProcLiteral {
                    record,
                    num_args,
                    compiled_locals,
                })))
            }
            other => Err(Error::UnsupportedObjectType(other)),
        }
    }

    fn parse_compiled_local(&mut self) -> Result<CompiledLocal, Error> {
        let name_len = self.next_count()? as usize;
        let name = self.next_decoded_line()?;
        let fields = self.next_raw_string()?;
        let mut parts = fields.split_whitespace();
        let index: i64 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::InvalidInteger(fields.clone()))?;
        let has_default: i64 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::InvalidInteger(fields.clone()))?;
        let mask: i64 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::InvalidInteger(fields.clone()))?;
        let default = if has_default == 1 {
            Some(self.parse_literal_object()?)
        } else {
            None
        };
        writeln!(
            self.writer,
            "\tlocal: name={} index={} mask={}",
            String::from_utf8_lossy(&name),
            index,
            mask
        )?;
        let _ = name_len;
        Ok(CompiledLocal { name, index, mask, default })
    }

    fn parse_aux_data(&mut self) -> Result<AuxData, Error> {
        let header = self.next_raw_string()?;
        AuxData::validate_header(&header)?;
        let extra = [self.next_raw_string()?, self.next_raw_string()?, self.next_raw_string()?];
        writeln!(self.writer, "{}", header)?;
        for line in &extra {
            writeln!(self.writer, "{}", line)?;
        }
        Ok(AuxData { header, extra })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn build_minimal_file() -> Vec<u8> {
        let mut lines: Vec<String> = Vec::new();
        lines.push("TclPro ByteCode 1.0".to_string());
        lines.push("proc foo 0 %".to_string());

        let bytecode = [0u8]; // "done"
        let encoded = codec::encode(&bytecode);
        lines.push(bytecode.len().to_string());
        lines.push(String::from_utf8(encoded).unwrap());

        let empty_encoded = codec::encode(&[]);
        lines.push("0".to_string());
        lines.push(String::from_utf8(empty_encoded.clone()).unwrap());
        lines.push("0".to_string());
        lines.push(String::from_utf8(empty_encoded).unwrap());

        lines.push("0".to_string()); // literals
        lines.push("0".to_string()); // exception ranges
        lines.push("0".to_string()); // aux data

        let mut out = String::new();
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.into_bytes()
    }

    #[test]
    fn test_parse_minimal_record_hex_mode() {
        let input = build_minimal_file();
        let mut output = Vec::new();
        {
            let mut parser = new_parser(Cursor::new(input), &mut output);
            parser.parse().unwrap();
        }
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("proc foo 0 %"));
        assert!(text.contains("bytecode:"));
        assert!(text.contains("[lit-0]"));
    }

    #[test]
    fn test_parse_minimal_record_detail_mode() {
        let input = build_minimal_file();
        let mut output = Vec::new();
        {
            let mut parser = new_parser(Cursor::new(input), &mut output);
            parser.set_detail(true);
            parser.parse().unwrap();
        }
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\t(0)done\n"));
    }

    #[test]
    fn test_parse_missing_header_errors() {
        let input = b"nothing of interest here\n".to_vec();
        let mut output = Vec::new();
        let mut parser = new_parser(Cursor::new(input), &mut output);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn test_parse_oversized_blob_length_errors() {
        let mut out = String::new();
        out.push_str("TclPro ByteCode 1.0\n");
        out.push_str("proc foo 0 %\n");
        out.push_str("999999999\n");
        out.push_str("!!!!\n");
        let mut output = Vec::new();
        let mut parser = new_parser(Cursor::new(out.into_bytes()), &mut output);
        assert!(matches!(parser.parse(), Err(Error::BufferOverflow { .. })));
    }
}
