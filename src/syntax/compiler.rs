use std::str::CharIndices;

use thiserror::Error;
use tracing::{debug, trace};

use crate::mir::data::{Instruction, Operation, Program};

use super::table::SymbolTable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
	#[error("unmatched open bracket at byte {start}")]
	UnmatchedOpen { start: usize },

	#[error("unmatched close bracket at byte {start}")]
	UnmatchedClose { start: usize },
}

#[derive(Clone, Copy)]
struct Block {
	index: usize,
	start: usize,
}

#[derive(Default)]
pub struct Compiler {
	instructions: Vec<Instruction>,
	blocks: Vec<Block>,
}

impl Compiler {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn add_simple(&mut self, operation: Operation) {
		self.instructions.push(operation.into());
	}

	fn add_block_start(&mut self, start: usize) {
		let index = self.instructions.len();

		self.instructions.push(Operation::JumpIfZero.into());
		self.blocks.push(Block { index, start });
	}

	fn add_block_end(&mut self, start: usize) -> Result<(), CompileError> {
		let block = self
			.blocks
			.pop()
			.ok_or(CompileError::UnmatchedClose { start })?;

		let index = self.instructions.len();

		self.instructions
			.push(Instruction::jump(Operation::JumpIfNonZero, block.index));
		self.instructions[block.index].target = index;

		trace!(open = block.index, close = index, "linked jump pair");

		Ok(())
	}

	fn initialize(&mut self) {
		// State may be left behind if compiling fails.
		self.instructions.clear();
		self.blocks.clear();
	}

	/// # Errors
	///
	/// Returns `CompileError::UnmatchedClose` as soon as a close symbol has no pending open.
	/// Returns `CompileError::UnmatchedOpen` if an open symbol is still pending at the end.
	pub fn compile(
		&mut self,
		table: &SymbolTable,
		source: CharIndices,
	) -> Result<Program, CompileError> {
		self.initialize();

		for (i, c) in source {
			match table.lookup(c) {
				Some(Operation::JumpIfZero) => self.add_block_start(i),
				Some(Operation::JumpIfNonZero) => self.add_block_end(i)?,
				Some(operation) => self.add_simple(operation),
				None => {}
			}
		}

		if let Some(block) = self.blocks.last() {
			return Err(CompileError::UnmatchedOpen { start: block.start });
		}

		let instructions = std::mem::take(&mut self.instructions);

		debug!(instructions = instructions.len(), "compiled program");

		Ok(instructions.into())
	}
}

/// Compiles `source` with a fresh `Compiler`.
///
/// # Errors
///
/// See [`Compiler::compile`].
pub fn compile(table: &SymbolTable, source: &str) -> Result<Program, CompileError> {
	Compiler::new().compile(table, source.char_indices())
}

#[cfg(test)]
mod tests {
	use crate::{
		mir::data::{Instruction, Operation},
		syntax::table::SymbolTable,
	};

	use super::{compile, CompileError, Compiler};

	fn ascii(source: &str) -> Result<Vec<Instruction>, CompileError> {
		compile(&SymbolTable::ascii(), source).map(|p| p.instructions().to_vec())
	}

	#[test]
	fn simple_operations_have_zero_target() {
		let instructions = ascii("><+-.,").unwrap();
		let operations: Vec<_> = instructions.iter().map(|i| i.operation).collect();

		assert_eq!(operations, &Operation::ALL[..6]);
		assert!(instructions.iter().all(|i| i.target == 0));
	}

	#[test]
	fn nested_jumps_are_linked_both_ways() {
		let instructions = ascii("+[>[-]<-]").unwrap();

		assert_eq!(instructions[1], Instruction::jump(Operation::JumpIfZero, 8));
		assert_eq!(instructions[3], Instruction::jump(Operation::JumpIfZero, 5));
		assert_eq!(instructions[5], Instruction::jump(Operation::JumpIfNonZero, 3));
		assert_eq!(instructions[8], Instruction::jump(Operation::JumpIfNonZero, 1));
	}

	#[test]
	fn unknown_symbols_do_not_take_slots() {
		let plain = ascii("+[-]").unwrap();
		let noisy = ascii("a+ b[\n-c]d").unwrap();

		assert_eq!(plain, noisy);
		assert_eq!(plain[1].target, 3);
	}

	#[test]
	fn close_before_open_fails_immediately() {
		assert_eq!(ascii("+]["), Err(CompileError::UnmatchedClose { start: 1 }));
		assert_eq!(ascii("[]]"), Err(CompileError::UnmatchedClose { start: 2 }));
	}

	#[test]
	fn dangling_open_fails_at_end() {
		assert_eq!(ascii("[[]"), Err(CompileError::UnmatchedOpen { start: 0 }));
		assert_eq!(ascii("[]+["), Err(CompileError::UnmatchedOpen { start: 3 }));
	}

	#[test]
	fn compiler_recovers_after_failure() {
		let table = SymbolTable::ascii();
		let mut compiler = Compiler::new();

		assert!(compiler.compile(&table, "[[".char_indices()).is_err());

		let program = compiler.compile(&table, "[]".char_indices()).unwrap();

		assert_eq!(program.len(), 2);
		assert_eq!(program.instructions()[0].target, 1);
	}

	#[test]
	fn zero_width_source_compiles() {
		let program = compile(&SymbolTable::zero_width(), "\u{200D}x\u{200F}").unwrap();
		let operations: Vec<_> = program.instructions().iter().map(|i| i.operation).collect();

		assert_eq!(operations, [Operation::IncrementCell, Operation::WriteOut]);
	}
}
