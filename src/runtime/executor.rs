use std::{
	collections::TryReserveError,
	io::{ErrorKind, Read, Write},
	num::NonZeroUsize,
};

use thiserror::Error;
use tracing::debug;

use crate::mir::data::{Instruction, Operation, Program};

use super::tape::{Cell, Tape};

#[derive(Debug, Error)]
pub enum ExecuteError {
	#[error("i/o failure while running: {0}")]
	Io(#[from] std::io::Error),

	#[error("program is inconsistent at instruction {pc}")]
	InternalInconsistency { pc: usize },
}

/// Runs a `Program` against a fresh `Tape`, one instruction at a time.
pub struct Executor {
	tape: Tape,
	pc: usize,
}

impl Executor {
	#[must_use]
	pub fn new() -> Self {
		Self::with_tape_length(Tape::DEFAULT_LENGTH)
	}

	#[must_use]
	pub fn with_tape_length(length: NonZeroUsize) -> Self {
		Self {
			tape: Tape::new(length),
			pc: 0,
		}
	}

	/// # Errors
	///
	/// Returns `TryReserveError` if the tape cannot be allocated.
	pub fn try_with_tape_length(length: NonZeroUsize) -> Result<Self, TryReserveError> {
		Ok(Self {
			tape: Tape::try_new(length)?,
			pc: 0,
		})
	}

	#[must_use]
	pub const fn tape(&self) -> &Tape {
		&self.tape
	}

	#[must_use]
	pub const fn pc(&self) -> usize {
		self.pc
	}

	fn reset(&mut self) {
		self.tape.clear();
		self.pc = 0;
	}

	// A jump is only taken if it is linked with its partner in both directions.
	fn linked_target(
		&self,
		program: &Program,
		instruction: Instruction,
	) -> Result<usize, ExecuteError> {
		let pc = self.pc;
		let partner = program
			.get(instruction.target)
			.filter(|other| Some(other.operation) == instruction.operation.partner())
			.filter(|other| other.target == pc);

		match partner {
			Some(_) => Ok(instruction.target),
			None => Err(ExecuteError::InternalInconsistency { pc }),
		}
	}

	fn read_in(
		&mut self,
		input: &mut dyn Read,
		output: &mut dyn Write,
	) -> Result<(), ExecuteError> {
		let mut buffer = [0; 1];

		output.flush()?;

		let value = match input.read_exact(&mut buffer) {
			Ok(()) => Cell::from(buffer[0]),
			Err(error) if error.kind() == ErrorKind::UnexpectedEof => 0,
			Err(error) => return Err(error.into()),
		};

		self.tape.set(value);

		Ok(())
	}

	fn write_out(&self, output: &mut dyn Write) -> Result<(), ExecuteError> {
		let [low, _] = self.tape.get().to_le_bytes();

		output.write_all(&[low])?;

		Ok(())
	}

	/// Executes the instruction at the current program counter.
	///
	/// # Errors
	///
	/// Returns `ExecuteError::Io` if reading or writing fails, other than by
	/// reaching the end of the input.
	/// Returns `ExecuteError::InternalInconsistency` if the program counter is
	/// past the end or a jump is not properly linked.
	pub fn step(
		&mut self,
		program: &Program,
		input: &mut dyn Read,
		output: &mut dyn Write,
	) -> Result<(), ExecuteError> {
		let instruction = *program
			.get(self.pc)
			.ok_or(ExecuteError::InternalInconsistency { pc: self.pc })?;

		let mut next = self.pc + 1;

		match instruction.operation {
			Operation::MovePointerForward => self.tape.move_forward(),
			Operation::MovePointerBackward => self.tape.move_backward(),
			Operation::IncrementCell => self.tape.increment(),
			Operation::DecrementCell => self.tape.decrement(),
			Operation::WriteOut => self.write_out(output)?,
			Operation::ReadIn => self.read_in(input, output)?,
			Operation::JumpIfZero => {
				if self.tape.get() == 0 {
					next = self.linked_target(program, instruction)?;
				}
			}
			Operation::JumpIfNonZero => {
				if self.tape.get() != 0 {
					next = self.linked_target(program, instruction)?;
				}
			}
		}

		self.pc = next;

		Ok(())
	}

	/// Runs `program` from the start on a zeroed tape until the program
	/// counter passes the last instruction, returning the number of steps.
	///
	/// # Errors
	///
	/// See [`Executor::step`].
	pub fn run(
		&mut self,
		program: &Program,
		input: &mut dyn Read,
		output: &mut dyn Write,
	) -> Result<u64, ExecuteError> {
		let mut steps = 0;

		self.reset();

		while self.pc < program.len() {
			self.step(program, input, output)?;

			steps += 1;
		}

		output.flush()?;

		debug!(steps, pointer = self.tape.pointer(), "program finished");

		Ok(steps)
	}
}

impl Default for Executor {
	fn default() -> Self {
		Self::new()
	}
}

/// Runs `program` on a default-length tape.
///
/// # Errors
///
/// See [`Executor::step`].
pub fn execute(
	program: &Program,
	input: &mut dyn Read,
	output: &mut dyn Write,
) -> Result<(), ExecuteError> {
	Executor::new().run(program, input, output).map(|_| ())
}

#[cfg(test)]
mod tests {
	use std::{
		io::{empty, sink},
		num::NonZeroUsize,
	};

	use crate::{
		mir::data::{Instruction, Operation, Program},
		syntax::{compiler::compile, table::SymbolTable},
	};

	use super::{ExecuteError, Executor};

	fn run(source: &str, input: &[u8]) -> (Executor, Vec<u8>) {
		let program = compile(&SymbolTable::ascii(), source).unwrap();
		let mut executor = Executor::with_tape_length(NonZeroUsize::new(16).unwrap());
		let mut output = Vec::new();

		executor.run(&program, &mut &input[..], &mut output).unwrap();

		(executor, output)
	}

	#[test]
	fn empty_program_does_nothing() {
		let (executor, output) = run("", b"");

		assert_eq!(executor.pc(), 0);
		assert!(output.is_empty());
	}

	#[test]
	fn writes_low_byte_of_cell() {
		let source = "+".repeat(0x141) + ".";
		let (_, output) = run(&source, b"");

		assert_eq!(output, [0x41]);
	}

	#[test]
	fn echoes_until_end_of_input() {
		let (_, output) = run(",[.,]", b"hey");

		assert_eq!(output, b"hey");
	}

	#[test]
	fn end_of_input_clears_cell() {
		let (executor, _) = run("+++,", b"");

		assert_eq!(executor.tape().get(), 0);
	}

	#[test]
	fn loop_runs_once_per_unit() {
		let program = compile(&SymbolTable::ascii(), "+++++[-]").unwrap();
		let mut executor = Executor::new();
		let steps = executor.run(&program, &mut empty(), &mut sink()).unwrap();

		// Each of the 5 rounds passes the open check, the decrement and the close.
		assert_eq!(steps, 5 + 5 * 3);
		assert_eq!(executor.tape().get(), 0);
	}

	#[test]
	fn skipped_loop_lands_on_close() {
		let program = compile(&SymbolTable::ascii(), "[+]").unwrap();
		let mut executor = Executor::new();

		executor.step(&program, &mut empty(), &mut sink()).unwrap();

		assert_eq!(executor.pc(), 2);
	}

	#[test]
	fn moving_back_from_origin_uses_last_cell() {
		let (executor, _) = run("<+", b"");

		assert_eq!(executor.tape().pointer(), 15);
		assert_eq!(executor.tape().cells()[15], 1);
	}

	#[test]
	fn unlinked_jump_is_inconsistent() {
		let program = Program::from(vec![
			Instruction::jump(Operation::JumpIfZero, 5),
			Instruction::new(Operation::IncrementCell),
		]);
		let result = Executor::new().run(&program, &mut empty(), &mut sink());

		assert!(matches!(
			result,
			Err(ExecuteError::InternalInconsistency { pc: 0 })
		));
	}

	#[test]
	fn one_sided_link_is_inconsistent() {
		let program = Program::from(vec![
			Instruction::jump(Operation::JumpIfZero, 1),
			Instruction::jump(Operation::JumpIfNonZero, 1),
		]);
		let result = Executor::new().run(&program, &mut empty(), &mut sink());

		assert!(matches!(
			result,
			Err(ExecuteError::InternalInconsistency { pc: 0 })
		));
	}
}
