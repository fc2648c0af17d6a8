/// Unsigned 32-bit word, the machine's unit of everything.
pub type Platter = u32;

/// Register index, in `0..8`.
pub type RegisterId = usize;

/// 25-bit immediate carried by the orthography instruction.
pub type Immediate25 = u32;
