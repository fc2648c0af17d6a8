//! Atomic instruction-set types of the Universal Machine.
//!
//! Every value the machine manipulates is a *platter*, an unsigned 32-bit
//! word. A platter doubles as an instruction: the top four bits select the
//! operator, the remaining bits name registers or carry the orthography
//! immediate. This crate owns the word-level representation so the
//! interpreter never touches raw bit fields.

#![warn(missing_docs)]

mod opcode;
mod panic_reason;
mod types;

pub use opcode::{consts, InvalidOpcode, Opcode};
pub use panic_reason::PanicReason;
pub use types::{Immediate25, Platter, RegisterId};
