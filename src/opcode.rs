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
//! The instruction table for the Tcl bytecode interpreter: one
//! [`OpcodeDescriptor`] per opcode byte, giving its mnemonic, total
//! instruction length (opcode byte plus operands), effect on the
//! operand stack, and the kind of each operand.
use crate::error::Error;

/// The shape of a single instruction operand, determining how many
/// bytes it occupies in the bytecode stream and how those bytes are
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    None,
    /// One byte, sign-extended.
    Int1,
    /// Four bytes, big-endian, signed.
    Int4,
    /// One byte, zero-extended.
    UInt1,
    /// Four bytes, big-endian, unsigned.
    UInt4,
    /// Four bytes, big-endian; a signed index displayed in decimal.
    Idx4,
    /// One byte; index into the local variable table.
    Lvt1,
    /// Four bytes, big-endian; index into the local variable table.
    Lvt4,
    /// Four bytes, big-endian; index into the aux data table.
    Aux4,
    /// One byte, signed; a relative jump offset.
    Offset1,
    /// Four bytes, big-endian, signed; a relative jump offset.
    Offset4,
    /// One byte; index into the literal table.
    Lit1,
    /// Four bytes, big-endian; index into the literal table.
    Lit4,
    /// One byte; index into the string class table.
    Scls1,
}

impl OperandKind {
    /// Number of bytes this operand occupies in the instruction stream.
    pub const fn width(self) -> usize {
        match self {
            OperandKind::None => 0,
            OperandKind::Int1
            | OperandKind::UInt1
            | OperandKind::Lvt1
            | OperandKind::Offset1
            | OperandKind::Lit1
            | OperandKind::Scls1 => 1,
            OperandKind::Int4
            | OperandKind::UInt4
            | OperandKind::Idx4
            | OperandKind::Lvt4
            | OperandKind::Aux4
            | OperandKind::Offset4
            | OperandKind::Lit4 => 4,
        }
    }
}

/// A decoded instruction operand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Signed(i64),
    Unsigned(u64),
}

/// Describes one Tcl bytecode instruction: its mnemonic, total
/// encoded length in bytes (including the opcode byte itself), net
/// effect on the depth of the operand stack (`None` when the effect
/// can only be known at run time), and the kind of each operand.
pub struct OpcodeDescriptor {
    pub mnemonic: &'static str,
    pub total_bytes: usize,
    pub stack_effect: Option<i32>,
    pub operand_count: usize,
    pub operands: [OperandKind; 2],
}

/// Sentinel stack effect used by instructions whose effect on the
/// operand stack depends on a runtime operand count (e.g. `invokeStk1`).
pub const VARIABLE_STACK_EFFECT: Option<i32> = None;

/// The full instruction table, indexed directly by opcode byte value.
/// The final entry is an empty placeholder occupying the opcode byte
/// one past the last assigned instruction.
pub static OPCODE_TABLE: &[OpcodeDescriptor] = &[
    OpcodeDescriptor { mnemonic: "done", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "push1", total_bytes: 2, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::Lit1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "push4", total_bytes: 5, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::Lit4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "pop", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dup", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strcat", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "invokeStk1", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "invokeStk4", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "evalStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "exprStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadScalar1", total_bytes: 2, stack_effect: Some(1), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadScalar4", total_bytes: 5, stack_effect: Some(1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadScalarStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadArray1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadArray4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadArrayStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "loadStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeScalar1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeScalar4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeScalarStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeArray1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeArray4", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeArrayStk", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "storeStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrScalar1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrScalarStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrArray1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrArrayStk", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrScalar1Imm", total_bytes: 3, stack_effect: Some(+1), operand_count: 2, operands: [OperandKind::Lvt1, OperandKind::Int1] },
    OpcodeDescriptor { mnemonic: "incrScalarStkImm", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Int1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrArray1Imm", total_bytes: 3, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Lvt1, OperandKind::Int1] },
    OpcodeDescriptor { mnemonic: "incrArrayStkImm", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Int1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "incrStkImm", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Int1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jump1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Offset1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jump4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Offset4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jumpTrue1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Offset1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jumpTrue4", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Offset4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jumpFalse1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Offset1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "jumpFalse4", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Offset4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lor", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "land", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "bitor", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "bitxor", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "bitand", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "eq", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "neq", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lt", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "gt", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "le", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "ge", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lshift", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "rshift", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "add", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "sub", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "mult", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "div", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "mod", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "uplus", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "uminus", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "bitnot", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "not", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "callBuiltinFunc1", total_bytes: 2, stack_effect: Some(1), operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "callFunc1", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tryCvtToNumeric", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "break", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "continue", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "foreach_start4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Aux4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "foreach_step4", total_bytes: 5, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::Aux4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "beginCatch4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "endCatch", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "pushResult", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "pushReturnCode", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "streq", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strneq", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strcmp", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strlen", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strindex", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strmatch", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Int1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "list", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "listIndex", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "listLength", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendScalar1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendScalar4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendArray1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendArray4", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendArrayStk", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "appendStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendScalar1", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendScalar4", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendArray1", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendArray4", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendArrayStk", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lindexMulti", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "over", total_bytes: 5, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lsetList", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lsetFlat", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "returnImm", total_bytes: 9, stack_effect: Some(-1), operand_count: 2, operands: [OperandKind::Int4, OperandKind::UInt4] },
    OpcodeDescriptor { mnemonic: "expon", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "expandStart", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "expandStkTop", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "invokeExpanded", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "listIndexImm", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Idx4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "listRangeImm", total_bytes: 9, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Idx4, OperandKind::Idx4] },
    OpcodeDescriptor { mnemonic: "startCommand", total_bytes: 9, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Offset4, OperandKind::UInt4] },
    OpcodeDescriptor { mnemonic: "listIn", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "listNotIn", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "pushReturnOpts", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "returnStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictGet", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictSet", total_bytes: 9, stack_effect: None, operand_count: 2, operands: [OperandKind::UInt4, OperandKind::Lvt4] },
    OpcodeDescriptor { mnemonic: "dictUnset", total_bytes: 9, stack_effect: None, operand_count: 2, operands: [OperandKind::UInt4, OperandKind::Lvt4] },
    OpcodeDescriptor { mnemonic: "dictIncrImm", total_bytes: 9, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Int4, OperandKind::Lvt4] },
    OpcodeDescriptor { mnemonic: "dictAppend", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictLappend", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictFirst", total_bytes: 5, stack_effect: Some(+2), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictNext", total_bytes: 5, stack_effect: Some(+3), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictDone", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictUpdateStart", total_bytes: 9, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Lvt4, OperandKind::Aux4] },
    OpcodeDescriptor { mnemonic: "dictUpdateEnd", total_bytes: 9, stack_effect: Some(-1), operand_count: 2, operands: [OperandKind::Lvt4, OperandKind::Aux4] },
    OpcodeDescriptor { mnemonic: "jumpTable", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Aux4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "upvar", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "nsupvar", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "variable", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "syntax", total_bytes: 9, stack_effect: Some(-1), operand_count: 2, operands: [OperandKind::Int4, OperandKind::UInt4] },
    OpcodeDescriptor { mnemonic: "reverse", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "regexp", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Int1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "existScalar", total_bytes: 5, stack_effect: Some(1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "existArray", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "existArrayStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "existStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "nop", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "returnCodeBranch", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "unsetScalar", total_bytes: 6, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::UInt1, OperandKind::Lvt4] },
    OpcodeDescriptor { mnemonic: "unsetArray", total_bytes: 6, stack_effect: Some(-1), operand_count: 2, operands: [OperandKind::UInt1, OperandKind::Lvt4] },
    OpcodeDescriptor { mnemonic: "unsetArrayStk", total_bytes: 2, stack_effect: Some(-2), operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "unsetStk", total_bytes: 2, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictExpand", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictRecombineStk", total_bytes: 1, stack_effect: Some(-3), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictRecombineImm", total_bytes: 5, stack_effect: Some(-2), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "dictExists", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "verifyDict", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strmap", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strfind", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strrfind", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strrangeImm", total_bytes: 9, stack_effect: Some(0), operand_count: 2, operands: [OperandKind::Idx4, OperandKind::Idx4] },
    OpcodeDescriptor { mnemonic: "strrange", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "yield", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "coroName", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tailcall", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "currentNamespace", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "infoLevelNumber", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "infoLevelArgs", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "resolveCmd", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooSelf", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooClass", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooNamespace", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooIsObject", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "arrayExistsStk", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "arrayExistsImm", total_bytes: 5, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "arrayMakeStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "arrayMakeImm", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "invokeReplace", total_bytes: 6, stack_effect: None, operand_count: 2, operands: [OperandKind::UInt4, OperandKind::UInt1] },
    OpcodeDescriptor { mnemonic: "listConcat", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "expandDrop", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "foreach_start", total_bytes: 5, stack_effect: Some(+2), operand_count: 1, operands: [OperandKind::Aux4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "foreach_step", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "foreach_end", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lmap_collect", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strtrim", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strtrimLeft", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strtrimRight", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "concatStk", total_bytes: 5, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strcaseUpper", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strcaseLower", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strcaseTitle", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strreplace", total_bytes: 1, stack_effect: Some(-3), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "originCmd", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooNext", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tclooNextClass", total_bytes: 2, stack_effect: None, operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "yieldToInvoke", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "numericType", total_bytes: 1, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "tryCvtToBoolean", total_bytes: 1, stack_effect: Some(+1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "strclass", total_bytes: 2, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Scls1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendList", total_bytes: 5, stack_effect: Some(0), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendListArray", total_bytes: 5, stack_effect: Some(-1), operand_count: 1, operands: [OperandKind::Lvt4, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendListArrayStk", total_bytes: 1, stack_effect: Some(-2), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "lappendListStk", total_bytes: 1, stack_effect: Some(-1), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "clockRead", total_bytes: 2, stack_effect: Some(+1), operand_count: 1, operands: [OperandKind::UInt1, OperandKind::None] },
    OpcodeDescriptor { mnemonic: "", total_bytes: 0, stack_effect: Some(0), operand_count: 0, operands: [OperandKind::None, OperandKind::None] },
];

/// Looks up the descriptor for `opcode`, failing for opcodes past the
/// end of the table or for the trailing empty placeholder entry.
pub fn lookup(opcode: u8) -> Result<&'static OpcodeDescriptor, Error> {
    match OPCODE_TABLE.get(opcode as usize) {
        Some(desc) if !desc.mnemonic.is_empty() => Ok(desc),
        _ => Err(Error::UnknownOpcode(opcode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_done() {
        let desc = lookup(0).unwrap();
        assert_eq!(desc.mnemonic, "done");
        assert_eq!(desc.total_bytes, 1);
    }

    #[test]
    fn test_lookup_push1() {
        let desc = lookup(1).unwrap();
        assert_eq!(desc.mnemonic, "push1");
        assert_eq!(desc.operands[0], OperandKind::Lit1);
    }

    #[test]
    fn test_lookup_clock_read_is_last_real_entry() {
        let desc = lookup(189).unwrap();
        assert_eq!(desc.mnemonic, "clockRead");
    }

    #[test]
    fn test_lookup_sentinel_is_unknown() {
        assert!(lookup(190).is_err());
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(lookup(255).is_err());
    }

    #[test]
    fn test_variable_stack_effect_on_invoke() {
        let desc = lookup(6).unwrap();
        assert_eq!(desc.mnemonic, "invokeStk1");
        assert_eq!(desc.stack_effect, VARIABLE_STACK_EFFECT);
    }
}
