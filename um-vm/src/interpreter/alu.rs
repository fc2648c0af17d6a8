use super::Interpreter;

use um_asm::{Platter, RegisterId};

impl<R, W> Interpreter<R, W> {
    pub(crate) fn alu_set(&mut self, ra: RegisterId, value: Platter) {
        self.registers[ra] = value;
        self.inc_pc();
    }

    pub(crate) fn inc_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }
}
