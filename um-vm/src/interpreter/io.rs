use super::console::ConsoleAction;
use super::Interpreter;
use crate::io::InputEvent;
use crate::state::ExecuteState;

use um_asm::{Platter, RegisterId};

use std::io::{BufRead, Write};

impl<R, W> Interpreter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn output_byte(&mut self, rc: RegisterId) {
        let byte = (self.registers[rc] & 0xff) as u8;
        self.io.put(&mut self.output, byte);
        self.inc_pc();
    }

    /// Resolve one input instruction, running console sessions for as long
    /// as escape bytes keep arriving. After a console-driven snapshot load
    /// the next attempt consults the restored I/O state, paste queue first.
    pub(crate) fn input_byte(&mut self, rc: RegisterId) -> ExecuteState {
        loop {
            match self.io.get(&mut self.input, &mut self.output) {
                InputEvent::Byte(byte) => {
                    self.registers[rc] = byte as Platter;
                    break;
                }
                InputEvent::Eof => {
                    self.registers[rc] = Platter::MAX;
                    break;
                }
                InputEvent::Escape => {
                    if let ConsoleAction::Halt = self.console_enter() {
                        return ExecuteState::Halt;
                    }
                }
            }
        }
        self.inc_pc();
        ExecuteState::Proceed
    }
}
