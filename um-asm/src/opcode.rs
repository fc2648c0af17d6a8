use crate::types::{Immediate25, Platter, RegisterId};

use consts::*;

use core::fmt;

pub mod consts;

const REG_MASK: Platter = 0x07;
const IMM_MASK: Platter = 0x01ff_ffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Instruction representation for the interpreter.
///
/// The standard operators encode three register names in the platter's low
/// nine bits; orthography instead packs a register name right below the
/// operator bits and a 25-bit immediate in the remainder.
pub enum Opcode {
    /// Conditional move.
    ///
    /// | Operation   | ```if $rC != 0 { $rA = $rB }``` |
    /// | Syntax      | `cmov $rA, $rB, $rC`            |
    /// | Encoding    | `0x0 - rA rB rC`                |
    CMOV(RegisterId, RegisterId, RegisterId),

    /// Array index.
    ///
    /// | Operation   | ```$rA = arrays[$rB][$rC];``` |
    /// | Syntax      | `aidx $rA, $rB, $rC`          |
    /// | Encoding    | `0x1 - rA rB rC`              |
    ///
    /// #### Panics
    /// - `$rB` does not name an active array.
    /// - `$rC` is not below the array's length.
    AIDX(RegisterId, RegisterId, RegisterId),

    /// Array amendment.
    ///
    /// | Operation   | ```arrays[$rA][$rB] = $rC;``` |
    /// | Syntax      | `aamd $rA, $rB, $rC`          |
    /// | Encoding    | `0x2 - rA rB rC`              |
    ///
    /// #### Panics
    /// - `$rA` does not name an active array.
    /// - `$rB` is not below the array's length.
    ///
    /// #### Execution
    /// A store into the program array, or into the source the program is
    /// currently shared with, resolves the copy-on-write aliasing first.
    AAMD(RegisterId, RegisterId, RegisterId),

    /// Addition modulo 2^32.
    ///
    /// | Operation   | ```$rA = $rB + $rC;``` |
    /// | Syntax      | `add $rA, $rB, $rC`    |
    /// | Encoding    | `0x3 - rA rB rC`       |
    ADD(RegisterId, RegisterId, RegisterId),

    /// Multiplication modulo 2^32.
    ///
    /// | Operation   | ```$rA = $rB * $rC;``` |
    /// | Syntax      | `mul $rA, $rB, $rC`    |
    /// | Encoding    | `0x4 - rA rB rC`       |
    MUL(RegisterId, RegisterId, RegisterId),

    /// Unsigned division.
    ///
    /// | Operation   | ```$rA = $rB / $rC;``` |
    /// | Syntax      | `div $rA, $rB, $rC`    |
    /// | Encoding    | `0x5 - rA rB rC`       |
    ///
    /// #### Panics
    /// - `$rC == 0`
    DIV(RegisterId, RegisterId, RegisterId),

    /// Not-and.
    ///
    /// | Operation   | ```$rA = !($rB & $rC);``` |
    /// | Syntax      | `nand $rA, $rB, $rC`      |
    /// | Encoding    | `0x6 - rA rB rC`          |
    NAND(RegisterId, RegisterId, RegisterId),

    /// Halt the machine.
    ///
    /// | Syntax      | `halt`       |
    /// | Encoding    | `0x7 - - - -`|
    HALT,

    /// Allocation.
    ///
    /// | Operation   | ```$rB = new_array($rC);``` |
    /// | Syntax      | `aloc $rB, $rC`             |
    /// | Encoding    | `0x8 - - rB rC`             |
    ///
    /// The fresh array has `$rC` platters, all zero, and an identifier
    /// distinct from every other active array.
    ALOC(RegisterId, RegisterId),

    /// Abandonment.
    ///
    /// | Operation   | ```free_array($rC);``` |
    /// | Syntax      | `aban $rC`             |
    /// | Encoding    | `0x9 - - - rC`         |
    ///
    /// #### Panics
    /// - `$rC` is zero or does not name an active array.
    ABAN(RegisterId),

    /// Output one byte.
    ///
    /// | Operation   | ```put($rC & 0xff);``` |
    /// | Syntax      | `out $rC`              |
    /// | Encoding    | `0xa - - - rC`         |
    OUT(RegisterId),

    /// Input one byte, or `0xffff_ffff` once the host reaches end of input.
    ///
    /// | Operation   | ```$rC = get();``` |
    /// | Syntax      | `in $rC`           |
    /// | Encoding    | `0xb - - - rC`     |
    IN(RegisterId),

    /// Load program.
    ///
    /// | Operation   | ```program = arrays[$rB]; $pc = $rC;``` |
    /// | Syntax      | `ldpr $rB, $rC`                         |
    /// | Encoding    | `0xc - - rB rC`                         |
    ///
    /// #### Execution
    /// Loading array zero only moves the program counter; any other array is
    /// installed copy-on-write.
    LDPR(RegisterId, RegisterId),

    /// Orthography, the load-immediate instruction.
    ///
    /// | Operation   | ```$rA = imm;```    |
    /// | Syntax      | `orth $rA, imm`     |
    /// | Encoding    | `0xd rA imm`        |
    ORTH(RegisterId, Immediate25),
}

impl Opcode {
    /// Size of an instruction in bytes.
    pub const LEN: usize = 4;

    /// Decode a platter into its instruction representation.
    pub const fn parse_word(word: Platter) -> Result<Self, InvalidOpcode> {
        use Opcode::*;

        let op = (word >> 28) as u8;

        let ra = ((word >> 6) & REG_MASK) as RegisterId;
        let rb = ((word >> 3) & REG_MASK) as RegisterId;
        let rc = (word & REG_MASK) as RegisterId;

        let ri = ((word >> 25) & REG_MASK) as RegisterId;
        let imm = word & IMM_MASK;

        match op {
            OP_CMOV => Ok(CMOV(ra, rb, rc)),
            OP_AIDX => Ok(AIDX(ra, rb, rc)),
            OP_AAMD => Ok(AAMD(ra, rb, rc)),
            OP_ADD => Ok(ADD(ra, rb, rc)),
            OP_MUL => Ok(MUL(ra, rb, rc)),
            OP_DIV => Ok(DIV(ra, rb, rc)),
            OP_NAND => Ok(NAND(ra, rb, rc)),
            OP_HALT => Ok(HALT),
            OP_ALOC => Ok(ALOC(rb, rc)),
            OP_ABAN => Ok(ABAN(rc)),
            OP_OUT => Ok(OUT(rc)),
            OP_IN => Ok(IN(rc)),
            OP_LDPR => Ok(LDPR(rb, rc)),
            OP_ORTH => Ok(ORTH(ri, imm)),
            _ => Err(InvalidOpcode),
        }
    }

    /// Numeric representation of the operator.
    pub const fn op(&self) -> u8 {
        use Opcode::*;

        match self {
            CMOV(..) => OP_CMOV,
            AIDX(..) => OP_AIDX,
            AAMD(..) => OP_AAMD,
            ADD(..) => OP_ADD,
            MUL(..) => OP_MUL,
            DIV(..) => OP_DIV,
            NAND(..) => OP_NAND,
            HALT => OP_HALT,
            ALOC(..) => OP_ALOC,
            ABAN(..) => OP_ABAN,
            OUT(..) => OP_OUT,
            IN(..) => OP_IN,
            LDPR(..) => OP_LDPR,
            ORTH(..) => OP_ORTH,
        }
    }
}

impl From<Opcode> for Platter {
    fn from(opcode: Opcode) -> Platter {
        let op = (opcode.op() as Platter) << 28;

        match opcode {
            Opcode::CMOV(ra, rb, rc)
            | Opcode::AIDX(ra, rb, rc)
            | Opcode::AAMD(ra, rb, rc)
            | Opcode::ADD(ra, rb, rc)
            | Opcode::MUL(ra, rb, rc)
            | Opcode::DIV(ra, rb, rc)
            | Opcode::NAND(ra, rb, rc) => {
                op | ((ra as Platter) << 6) | ((rb as Platter) << 3) | (rc as Platter)
            }
            Opcode::HALT => op,
            Opcode::ALOC(rb, rc) | Opcode::LDPR(rb, rc) => {
                op | ((rb as Platter) << 3) | (rc as Platter)
            }
            Opcode::ABAN(rc) | Opcode::OUT(rc) | Opcode::IN(rc) => op | (rc as Platter),
            Opcode::ORTH(ra, imm) => op | ((ra as Platter) << 25) | (imm & IMM_MASK),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The top four bits of a platter do not map to any operator.
pub struct InvalidOpcode;

impl fmt::Display for InvalidOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid opcode")
    }
}

impl std::error::Error for InvalidOpcode {}
