//! Numeric representation of each operator, as found in a platter's top
//! four bits.

/// Conditional move
pub const OP_CMOV: u8 = 0x00;
/// Array index
pub const OP_AIDX: u8 = 0x01;
/// Array amendment
pub const OP_AAMD: u8 = 0x02;
/// Addition
pub const OP_ADD: u8 = 0x03;
/// Multiplication
pub const OP_MUL: u8 = 0x04;
/// Division
pub const OP_DIV: u8 = 0x05;
/// Not-and
pub const OP_NAND: u8 = 0x06;
/// Halt
pub const OP_HALT: u8 = 0x07;
/// Allocation
pub const OP_ALOC: u8 = 0x08;
/// Abandonment
pub const OP_ABAN: u8 = 0x09;
/// Output
pub const OP_OUT: u8 = 0x0a;
/// Input
pub const OP_IN: u8 = 0x0b;
/// Load program
pub const OP_LDPR: u8 = 0x0c;
/// Orthography
pub const OP_ORTH: u8 = 0x0d;
