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
//! Walks a decoded `ByteCodeBlock`, printing one line per instruction
//! and annotating command boundaries from the `CodeDelta` /
//! `CodeLength` side-tables.
use std::io::Write;

use log::trace;

use crate::error::Error;
use crate::opcode::{self, Operand, OperandKind};

/// Expands a `CodeDelta`/`CodeLength` byte stream into its entries.
/// Each entry is either a single byte, or — when that byte is `0xFF`
/// — the following 4 bytes read as a big-endian `u32`.
pub fn decode_varint_sequence(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0xFF && i + 4 < bytes.len() {
            let v = u32::from_be_bytes([bytes[i + 1], bytes[i + 2], bytes[i + 3], bytes[i + 4]]);
            out.push(v);
            i += 5;
        } else {
            out.push(bytes[i] as u32);
            i += 1;
        }
    }
    out
}

/// Disassembles `bytecode`, writing the textual rendering (plus
/// command-boundary headers derived from `code_delta`/`code_length`)
/// to `out`.
pub fn disassemble<W: Write>(
    bytecode: &[u8],
    code_delta: &[u8],
    code_length: &[u8],
    out: &mut W,
) -> Result<(), Error> {
    let deltas = decode_varint_sequence(code_delta);
    let lengths = decode_varint_sequence(code_length);

    let mut command = 0usize;
    let mut next_command_start: Option<usize> = if deltas.is_empty() { None } else { Some(0) };

    let mut offset = 0usize;
    while offset < bytecode.len() {
        while next_command_start == Some(offset) {
            let start = offset;
            let len = *lengths.get(command).unwrap_or(&0) as usize;
            let end = start + len.saturating_sub(1);
            write!(out, "\tCommand {},pc= {}-{}\n", command, start, end)?;
            next_command_start = match deltas.get(command) {
                Some(&delta) if command + 1 < deltas.len() => Some(start + delta as usize),
                _ => None,
            };
            command += 1;
        }

        let op = bytecode[offset];
        let desc = opcode::lookup(op)?;
        trace!("disassemble: offset={} opcode={} ({})", offset, op, desc.mnemonic);

        let mut cursor = offset + 1;
        let mut operands = [Operand::None, Operand::None];
        for (slot, kind) in desc.operands.iter().enumerate().take(desc.operand_count) {
            operands[slot] = read_operand(bytecode, offset, cursor, *kind)?;
            cursor += kind.width();
        }
        if cursor - offset != desc.total_bytes {
            return Err(Error::InstructionOverrun {
                offset,
                needed: desc.total_bytes,
                available: bytecode.len() - offset,
            });
        }

        write!(out, "\t({}){}", offset, desc.mnemonic)?;
        for operand in operands.iter().take(desc.operand_count) {
            write!(out, " {}", format_operand(*operand))?;
        }
        writeln!(out)?;

        offset = cursor;
    }
    Ok(())
}

fn read_operand(bytecode: &[u8], offset: usize, at: usize, kind: OperandKind) -> Result<Operand, Error> {
    let width = kind.width();
    if at + width > bytecode.len() {
        return Err(Error::InstructionOverrun {
            offset,
            needed: at + width - offset,
            available: bytecode.len() - offset,
        });
    }
    Ok(match kind {
        OperandKind::None => Operand::None,
        OperandKind::Int1 | OperandKind::Lvt1 | OperandKind::Offset1 => {
            Operand::Signed(bytecode[at] as i8 as i64)
        }
        OperandKind::UInt1 | OperandKind::Lit1 | OperandKind::Scls1 => {
            Operand::Unsigned(bytecode[at] as u64)
        }
        OperandKind::Int4 | OperandKind::Idx4 | OperandKind::Offset4 => {
            Operand::Signed(i32::from_be_bytes(bytecode[at..at + 4].try_into().unwrap()) as i64)
        }
        OperandKind::UInt4 | OperandKind::Lvt4 | OperandKind::Aux4 | OperandKind::Lit4 => {
            Operand::Unsigned(u32::from_be_bytes(bytecode[at..at + 4].try_into().unwrap()) as u64)
        }
    })
}

fn format_operand(op: Operand) -> String {
    match op {
        Operand::None => String::new(),
        Operand::Signed(v) => v.to_string(),
        Operand::Unsigned(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_varint_sequence_single_bytes() {
        assert_eq!(decode_varint_sequence(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_varint_sequence_extended_form() {
        let bytes = [0xFF, 0x00, 0x00, 0x01, 0x00, 5];
        assert_eq!(decode_varint_sequence(&bytes), vec![256, 5]);
    }

    #[test]
    fn test_disassemble_done_instruction() {
        let bytecode = [0u8]; // opcode 0 = "done"
        let mut out = Vec::new();
        disassemble(&bytecode, &[], &[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\t(0)done\n");
    }

    #[test]
    fn test_disassemble_push1_with_operand() {
        let bytecode = [1u8, 7]; // push1 lit#7
        let mut out = Vec::new();
        disassemble(&bytecode, &[2], &[2], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\tCommand 0,pc= 0-1\n\t(0)push1 7\n");
    }

    #[test]
    fn test_disassemble_back_to_back_commands_on_zero_delta() {
        let bytecode = [0u8]; // opcode 0 = "done"
        let mut out = Vec::new();
        // command 0 has delta 0 to command 1, so both start at pc 0.
        disassemble(&bytecode, &[0, 1], &[1, 1], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\tCommand 0,pc= 0-0\n\tCommand 1,pc= 0-0\n\t(0)done\n");
    }

    #[test]
    fn test_disassemble_unknown_opcode_errors() {
        let bytecode = [255u8]; // past the table's sentinel entry
        let mut out = Vec::new();
        assert!(disassemble(&bytecode, &[], &[], &mut out).is_err());
    }
}
