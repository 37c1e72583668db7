//! The execution engine: the decode/dispatch loop tying registers, memory,
//! and the instruction set together.

use std::io::{Read, Write};

use tracing::trace;

use crate::consts::LV_IMMEDIATE_BITS;
use crate::error::{UmError, UmResult};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::register::Registers;

/// Outcome of a single fetch-decode-dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Execution should continue with the next instruction.
    Continue,
    /// HALT was executed; the VM should stop cleanly.
    Halted,
}

/// The UM interpreter: eight registers, segmented memory, and a program
/// counter into segment 0.
pub struct Interpreter {
    registers: Registers,
    memory: Memory,
    pc: u32,
}

impl Interpreter {
    /// Builds a VM with `program` installed as segment 0 and the program
    /// counter at its start.
    pub fn new(program: Vec<u32>) -> Self {
        Interpreter { registers: Registers::new(), memory: Memory::new(program), pc: 0 }
    }

    /// Current contents of the register file, for tests and diagnostics.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Runs until HALT or a fatal error. `input`/`output` back the IN/OUT
    /// instructions; they are taken as trait objects so the engine never
    /// names a concrete stdio type and can be driven against in-memory
    /// buffers in tests.
    pub fn run<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> UmResult<()> {
        loop {
            match self.step(input, output)? {
                StepOutcome::Continue => continue,
                StepOutcome::Halted => return Ok(()),
            }
        }
    }

    /// Fetches, decodes, and dispatches exactly one instruction.
    fn step<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> UmResult<StepOutcome> {
        let word = self.memory.fetch(self.pc).ok_or(UmError::ProgramCounterOverrun)?;
        self.pc += 1;

        let opcode = Opcode::decode(word)?;
        trace!(pc = self.pc - 1, ?opcode, "dispatch");

        match opcode {
            Opcode::Cmov { a, b, c } => {
                if self.registers.get(c) != 0 {
                    self.registers.put(a, self.registers.get(b));
                }
            }
            Opcode::Sload { a, b, c } => {
                let value = self.memory.get(self.registers.get(b), self.registers.get(c))?;
                self.registers.put(a, value);
            }
            Opcode::Sstore { a, b, c } => {
                self.memory.put(self.registers.get(a), self.registers.get(b), self.registers.get(c))?;
            }
            Opcode::Add { a, b, c } => {
                let sum = self.registers.get(b).wrapping_add(self.registers.get(c));
                self.registers.put(a, sum);
            }
            Opcode::Mul { a, b, c } => {
                let product = self.registers.get(b).wrapping_mul(self.registers.get(c));
                self.registers.put(a, product);
            }
            Opcode::Div { a, b, c } => {
                let divisor = self.registers.get(c);
                if divisor == 0 {
                    return Err(UmError::DivisionByZero);
                }
                self.registers.put(a, self.registers.get(b) / divisor);
            }
            Opcode::Nand { a, b, c } => {
                self.registers.put(a, !(self.registers.get(b) & self.registers.get(c)));
            }
            Opcode::Halt => return Ok(StepOutcome::Halted),
            Opcode::Map { b, c } => {
                let id = self.memory.map(self.registers.get(c));
                self.registers.put(b, id);
            }
            Opcode::Unmap { c } => {
                self.memory.unmap(self.registers.get(c))?;
            }
            Opcode::Out { c } => {
                let value = self.registers.get(c);
                if value >= 256 {
                    return Err(UmError::OutputOutOfRange(value));
                }
                output.write_all(&[value as u8])?;
            }
            Opcode::In { c } => {
                let mut byte = [0u8; 1];
                match input.read(&mut byte)? {
                    0 => {
                        self.registers.put(c, u32::MAX);
                        return Ok(StepOutcome::Continue);
                    }
                    _ => self.registers.put(c, byte[0] as u32),
                }
            }
            Opcode::Loadp { b, c } => {
                let source = self.registers.get(b);
                if source != 0 {
                    self.memory.duplicate_into_zero(source)?;
                }
                self.pc = self.registers.get(c);
            }
            Opcode::Lv { a, value } => {
                debug_assert!(value < (1 << LV_IMMEDIATE_BITS));
                self.registers.put(a, value);
            }
        }

        Ok(StepOutcome::Continue)
    }
}
