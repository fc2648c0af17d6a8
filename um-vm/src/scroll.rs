//! Scroll loading
//!
//! A scroll is the program image: a raw sequence of platters in big-endian
//! byte order. Each platter is swapped to host order on the way in.

use crate::error::ScrollError;

use um_asm::Platter;

use std::fs;
use std::mem;
use std::path::Path;

use tracing::debug;

const PLATTER_SIZE: usize = mem::size_of::<Platter>();

/// Read and decode the scroll at `path`.
pub fn read_scroll<P: AsRef<Path>>(path: P) -> Result<Vec<Platter>, ScrollError> {
    let bytes = fs::read(path.as_ref())?;
    let program = parse_scroll(&bytes)?;
    debug!(
        path = %path.as_ref().display(),
        platters = program.len(),
        "scroll loaded"
    );
    Ok(program)
}

/// Decode a scroll already in memory.
pub fn parse_scroll(bytes: &[u8]) -> Result<Vec<Platter>, ScrollError> {
    if bytes.len() % PLATTER_SIZE != 0 {
        return Err(ScrollError::Truncated(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(PLATTER_SIZE)
        .map(|chunk| Platter::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platters_are_big_endian() {
        let program = parse_scroll(&[0xd0, 0x00, 0x00, 0x41, 0x70, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(vec![0xd000_0041, 0x7000_0000], program);
    }

    #[test]
    fn empty_scrolls_are_valid() {
        assert_eq!(Vec::<Platter>::new(), parse_scroll(&[]).unwrap());
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        assert!(matches!(
            parse_scroll(&[0x70, 0x00, 0x00]),
            Err(ScrollError::Truncated(3))
        ));
    }
}
