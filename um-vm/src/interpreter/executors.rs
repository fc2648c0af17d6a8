use super::Interpreter;
use crate::error::InterpreterError;
use crate::state::ExecuteState;

use um_asm::{Opcode, PanicReason, Platter};

use std::io::{BufRead, Write};

impl<R, W> Interpreter<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Run the fetch-decode-execute loop until the machine halts.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        let result = loop {
            match self.execute() {
                Ok(state) if state.should_continue() => continue,
                Ok(_) => break Ok(()),
                Err(err) => break Err(err),
            }
        };
        let _ = self.output.flush();
        result
    }

    /// Dispatch the instruction under the program counter.
    pub fn execute(&mut self) -> Result<ExecuteState, InterpreterError> {
        let platter = self.fetch()?;
        self.instructions += 1;
        let opcode = Opcode::parse_word(platter)
            .map_err(|_| InterpreterError::InvalidInstruction { platter, pc: self.pc })?;
        self.instruction(opcode)
            .map_err(|reason| InterpreterError::PanicInstruction {
                reason,
                platter,
                pc: self.pc,
            })
    }

    fn fetch(&self) -> Result<Platter, InterpreterError> {
        self.arena
            .program()
            .ok()
            .and_then(|program| program.get(self.pc as usize))
            .copied()
            .ok_or(InterpreterError::ProgramCounterOverflow { pc: self.pc })
    }

    fn instruction(&mut self, opcode: Opcode) -> Result<ExecuteState, PanicReason> {
        match opcode {
            Opcode::CMOV(ra, rb, rc) => {
                if self.registers[rc] != 0 {
                    self.registers[ra] = self.registers[rb];
                }
                self.inc_pc();
            }

            Opcode::AIDX(ra, rb, rc) => {
                let value = self.arena.read(self.registers[rb], self.registers[rc])?;
                self.alu_set(ra, value);
            }

            Opcode::AAMD(ra, rb, rc) => {
                self.arena
                    .write(self.registers[ra], self.registers[rb], self.registers[rc])?;
                self.inc_pc();
            }

            Opcode::ADD(ra, rb, rc) => {
                self.alu_set(ra, self.registers[rb].wrapping_add(self.registers[rc]));
            }

            Opcode::MUL(ra, rb, rc) => {
                self.alu_set(ra, self.registers[rb].wrapping_mul(self.registers[rc]));
            }

            Opcode::DIV(ra, rb, rc) => {
                let divisor = self.registers[rc];
                if divisor == 0 {
                    return Err(PanicReason::DivisionByZero);
                }
                self.alu_set(ra, self.registers[rb] / divisor);
            }

            Opcode::NAND(ra, rb, rc) => {
                self.alu_set(ra, !(self.registers[rb] & self.registers[rc]));
            }

            Opcode::HALT => return Ok(ExecuteState::Halt),

            Opcode::ALOC(rb, rc) => {
                let id = self.arena.alloc(self.registers[rc] as usize);
                self.registers[rb] = id;
                self.inc_pc();
            }

            Opcode::ABAN(rc) => {
                self.arena.delete(self.registers[rc])?;
                self.inc_pc();
            }

            Opcode::OUT(rc) => self.output_byte(rc),

            Opcode::IN(rc) => return Ok(self.input_byte(rc)),

            Opcode::LDPR(rb, rc) => {
                self.arena.replace_program(self.registers[rb])?;
                self.pc = self.registers[rc];
            }

            Opcode::ORTH(ra, imm) => self.alu_set(ra, imm),
        }

        Ok(ExecuteState::Proceed)
    }
}
