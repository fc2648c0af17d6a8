use super::Interpreter;
use crate::consts::SNAPSHOT_MAGIC;
use crate::error::SnapshotError;
use crate::snapshot::{read_u32, write_u32};

use std::io::{self, Read, Write};

use tracing::debug;

impl<R, W> Interpreter<R, W> {
    /// Serialize the whole machine: magic, execution core, arena, I/O.
    pub fn save_snapshot<T: Write>(&self, wtr: &mut T) -> io::Result<()> {
        wtr.write_all(&SNAPSHOT_MAGIC)?;
        write_u32(wtr, self.pc)?;
        for &register in &self.registers {
            write_u32(wtr, register)?;
        }
        self.arena.save_snapshot(wtr)?;
        self.io.save_snapshot(wtr)?;
        debug!(pc = self.pc, "snapshot saved");
        Ok(())
    }

    /// Replace the whole machine state with the snapshot read from `rdr`.
    ///
    /// The magic is checked before anything is touched; afterwards the core,
    /// arena, and I/O state are rebuilt in place. The instruction counter is
    /// not part of a snapshot and keeps counting across loads.
    pub fn load_snapshot<T: Read>(&mut self, rdr: &mut T) -> Result<(), SnapshotError> {
        let mut magic = [0u8; 4];
        rdr.read_exact(&mut magic)?;
        if magic != SNAPSHOT_MAGIC {
            return Err(SnapshotError::BadMagic);
        }
        self.pc = read_u32(rdr)?;
        for register in self.registers.iter_mut() {
            *register = read_u32(rdr)?;
        }
        self.arena.load_snapshot(rdr)?;
        self.io.load_snapshot(rdr)?;
        debug!(pc = self.pc, "snapshot loaded");
        Ok(())
    }
}
