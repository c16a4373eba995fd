use std::str::FromStr;

use thiserror::Error;

use crate::mir::data::Operation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	#[error("symbol {symbol:?} is assigned to both `{first}` and `{second}`")]
	DuplicateSymbol {
		symbol: char,
		first: Operation,
		second: Operation,
	},

	#[error("unknown encoding `{0}`, expected `zero-width` or `ascii`")]
	UnknownEncoding(String),
}

/// Maps each of the 8 source symbols to its `Operation`.
///
/// Any character absent from the table is skipped by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
	symbols: [char; 8],
}

impl SymbolTable {
	/// Builds a table from one symbol per operation, ordered as `Operation::ALL`.
	///
	/// # Errors
	///
	/// Returns `TableError::DuplicateSymbol` if two operations share a symbol.
	pub fn new(symbols: [char; 8]) -> Result<Self, TableError> {
		for (i, &symbol) in symbols.iter().enumerate() {
			if let Some(j) = symbols[..i].iter().position(|&c| c == symbol) {
				return Err(TableError::DuplicateSymbol {
					symbol,
					first: Operation::ALL[j],
					second: Operation::ALL[i],
				});
			}
		}

		Ok(Self { symbols })
	}

	/// The invisible encoding, using characters from U+200B to U+202C.
	#[must_use]
	pub const fn zero_width() -> Self {
		Self {
			symbols: [
				'\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}',
				'\u{202C}',
			],
		}
	}

	#[must_use]
	pub const fn ascii() -> Self {
		Self {
			symbols: ['>', '<', '+', '-', '.', ',', '[', ']'],
		}
	}

	#[must_use]
	pub fn lookup(&self, symbol: char) -> Option<Operation> {
		let index = self.symbols.iter().position(|&c| c == symbol)?;

		Some(Operation::ALL[index])
	}

	#[must_use]
	pub fn symbol(&self, operation: Operation) -> char {
		self.symbols[operation.index()]
	}
}

impl Default for SymbolTable {
	fn default() -> Self {
		Self::zero_width()
	}
}

impl FromStr for SymbolTable {
	type Err = TableError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"zero-width" | "zws" => Ok(Self::zero_width()),
			"ascii" => Ok(Self::ascii()),
			name => Err(TableError::UnknownEncoding(name.to_string())),
		}
	}
}
