//! Terminal reset
//!
//! The console clears the host terminal before replaying the backlog, so the
//! restored output reads as one uninterrupted session.

use std::io::Write;

// RIS, a full terminal reset
const RESET: &[u8] = b"\x1bc";

/// Reset the host terminal. Failures are ignored; the stream may not be a
/// terminal at all.
pub fn reset<W: Write>(output: &mut W) {
    let _ = output.write_all(RESET);
    let _ = output.flush();
}
