use std::ops::Deref;

use arbitrary::{Arbitrary, Result, Unstructured};
use hush::{mir::data::Operation, syntax::table::SymbolTable};

#[derive(Arbitrary)]
enum Symbol {
	Forward,
	Backward,
	Increment,
	Decrement,
	Write,
	Read,
}

impl From<Symbol> for Operation {
	fn from(value: Symbol) -> Self {
		match value {
			Symbol::Forward => Self::MovePointerForward,
			Symbol::Backward => Self::MovePointerBackward,
			Symbol::Increment => Self::IncrementCell,
			Symbol::Decrement => Self::DecrementCell,
			Symbol::Write => Self::WriteOut,
			Symbol::Read => Self::ReadIn,
		}
	}
}

fn add_open_bracket(
	table: &SymbolTable,
	remaining: &mut usize,
	open: &mut usize,
	buffer: &mut String,
) {
	*remaining -= 1;
	*open += 1;
	buffer.push(table.symbol(Operation::JumpIfZero));
}

fn add_close_bracket(table: &SymbolTable, open: &mut usize, buffer: &mut String) {
	*open -= 1;
	buffer.push(table.symbol(Operation::JumpIfNonZero));
}

fn add_code_segment(
	table: &SymbolTable,
	u: &mut Unstructured,
	buffer: &mut String,
) -> Result<()> {
	let len = u.arbitrary_len::<Symbol>()?;

	buffer.reserve(len);

	for _ in 0..len {
		let element = Symbol::arbitrary(u)?;

		buffer.push(table.symbol(element.into()));
	}

	Ok(())
}

/// Zero-width source whose brackets are always well nested.
#[derive(Debug)]
pub struct StructuredString {
	content: String,
}

impl Arbitrary<'_> for StructuredString {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let table = SymbolTable::zero_width();
		let mut remaining = u.arbitrary_len::<Vec<Symbol>>()?;
		let mut open = 0;
		let mut content = String::new();

		while !u.is_empty() {
			add_code_segment(&table, u, &mut content)?;

			match (remaining, open) {
				(0, 0) => break,
				(0, _) => add_close_bracket(&table, &mut open, &mut content),
				(_, 0) => add_open_bracket(&table, &mut remaining, &mut open, &mut content),
				(_, _) => {
					if u.arbitrary()? {
						add_close_bracket(&table, &mut open, &mut content);
					} else {
						add_open_bracket(&table, &mut remaining, &mut open, &mut content);
					}
				}
			}
		}

		// Input may run out with brackets still pending.
		for _ in 0..open {
			content.push(table.symbol(Operation::JumpIfNonZero));
		}

		Ok(Self { content })
	}
}

impl Deref for StructuredString {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
