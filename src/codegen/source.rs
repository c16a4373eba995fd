use std::io::{Result, Write};

use crate::{
	mir::data::{Operation, Program},
	syntax::table::SymbolTable,
};

use super::tab::Tab;

#[derive(Default)]
struct State {
	line: String,
	tab: Tab,
}

impl State {
	fn flush_line(&mut self, w: &mut dyn Write) -> Result<()> {
		if self.line.is_empty() {
			return Ok(());
		}

		writeln!(w, "{}{}", self.tab, self.line)?;

		self.line.clear();

		Ok(())
	}

	fn write_bracket(&mut self, w: &mut dyn Write, symbol: char) -> Result<()> {
		self.flush_line(w)?;

		writeln!(w, "{}{symbol}", self.tab)
	}
}

/// Writes `program` back out as source text using the symbols of `table`.
///
/// Straight-line code shares a line and every bracket sits on its own line,
/// with loop bodies indented. The added whitespace is skipped on compile.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write(w: &mut dyn Write, table: &SymbolTable, program: &Program) -> Result<()> {
	let mut state = State::default();

	for insn in program.instructions() {
		let symbol = table.symbol(insn.operation);

		match insn.operation {
			Operation::JumpIfZero => {
				state.write_bracket(w, symbol)?;
				state.tab = state.tab.add();
			}
			Operation::JumpIfNonZero => {
				state.flush_line(w)?;
				state.tab = state.tab.sub();
				state.write_bracket(w, symbol)?;
			}
			_ => state.line.push(symbol),
		}
	}

	state.flush_line(w)
}
