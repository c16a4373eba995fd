use std::io::{Result, Write};

use crate::mir::data::{Instruction, Operation, Program};

use super::tab::Tab;

fn write_insn(w: &mut dyn Write, tab: Tab, pc: usize, insn: &Instruction) -> Result<()> {
	let Instruction { operation, target } = *insn;

	if operation.is_jump() {
		writeln!(w, "{pc:>6}  {tab}{operation} -> {target}")
	} else {
		writeln!(w, "{pc:>6}  {tab}{operation}")
	}
}

/// Writes one line per instruction, indenting loop bodies.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write(w: &mut dyn Write, program: &Program) -> Result<()> {
	let mut tab = Tab::default();

	for (pc, insn) in program.instructions().iter().enumerate() {
		if insn.operation == Operation::JumpIfNonZero {
			tab = tab.sub();
		}

		write_insn(w, tab, pc, insn)?;

		if insn.operation == Operation::JumpIfZero {
			tab = tab.add();
		}
	}

	Ok(())
}
