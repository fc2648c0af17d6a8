//! Snapshot wire format
//!
//! A snapshot is the magic `UMX\x01` followed by the execution core (program
//! counter, eight registers), the arena (slot-table capacity, then each slot
//! as `-1` for free or a length and that many platters), and the I/O state
//! (the 4096-byte backlog linearized oldest-first, the paste ring offset and
//! size, then the raw 1 MiB paste ring).
//!
//! All fields are little-endian, so snapshot files are portable across
//! hosts.

use std::io::{self, Read, Write};

pub(crate) fn write_u32<W: Write>(wtr: &mut W, value: u32) -> io::Result<()> {
    wtr.write_all(&value.to_le_bytes())
}

pub(crate) fn write_i32<W: Write>(wtr: &mut W, value: i32) -> io::Result<()> {
    wtr.write_all(&value.to_le_bytes())
}

pub(crate) fn read_u32<R: Read>(rdr: &mut R) -> io::Result<u32> {
    let mut bytes = [0u8; 4];
    rdr.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

pub(crate) fn read_i32<R: Read>(rdr: &mut R) -> io::Result<i32> {
    let mut bytes = [0u8; 4];
    rdr.read_exact(&mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_little_endian() {
        let mut bytes = Vec::new();
        write_u32(&mut bytes, 0x0102_0304).unwrap();
        write_i32(&mut bytes, -1).unwrap();
        assert_eq!(&[0x04, 0x03, 0x02, 0x01, 0xff, 0xff, 0xff, 0xff], bytes.as_slice());

        let mut rdr = bytes.as_slice();
        assert_eq!(0x0102_0304, read_u32(&mut rdr).unwrap());
        assert_eq!(-1, read_i32(&mut rdr).unwrap());
    }
}
