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
	Open,
	Close,
	Noise(char),
}

impl Symbol {
	fn encode(self, table: &SymbolTable) -> char {
		let operation = match self {
			Self::Forward => Operation::MovePointerForward,
			Self::Backward => Operation::MovePointerBackward,
			Self::Increment => Operation::IncrementCell,
			Self::Decrement => Operation::DecrementCell,
			Self::Write => Operation::WriteOut,
			Self::Read => Operation::ReadIn,
			Self::Open => Operation::JumpIfZero,
			Self::Close => Operation::JumpIfNonZero,
			Self::Noise(c) => return c,
		};

		table.symbol(operation)
	}
}

/// Zero-width source of any shape, mixed with arbitrary other characters.
#[derive(Debug)]
pub struct RestrictedString {
	content: String,
}

impl Arbitrary<'_> for RestrictedString {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let table = SymbolTable::zero_width();
		let len = u.arbitrary_len::<Symbol>()?;
		let mut content = String::with_capacity(len);

		for _ in 0..len {
			let element = Symbol::arbitrary(u)?;

			content.push(element.encode(&table));
		}

		Ok(Self { content })
	}
}

impl Deref for RestrictedString {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
