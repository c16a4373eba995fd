use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	MovePointerForward,
	MovePointerBackward,
	IncrementCell,
	DecrementCell,
	WriteOut,
	ReadIn,
	JumpIfZero,
	JumpIfNonZero,
}

impl Operation {
	/// Every operation, in the order symbol tables list them.
	pub const ALL: [Self; 8] = [
		Self::MovePointerForward,
		Self::MovePointerBackward,
		Self::IncrementCell,
		Self::DecrementCell,
		Self::WriteOut,
		Self::ReadIn,
		Self::JumpIfZero,
		Self::JumpIfNonZero,
	];

	/// Position of the operation within `Operation::ALL`.
	#[must_use]
	pub const fn index(self) -> usize {
		self as usize
	}

	#[must_use]
	pub const fn is_jump(self) -> bool {
		matches!(self, Self::JumpIfZero | Self::JumpIfNonZero)
	}

	/// Returns the operation a jump must be linked with.
	#[must_use]
	pub const fn partner(self) -> Option<Self> {
		match self {
			Self::JumpIfZero => Some(Self::JumpIfNonZero),
			Self::JumpIfNonZero => Some(Self::JumpIfZero),
			_ => None,
		}
	}

	#[must_use]
	pub const fn mnemonic(self) -> &'static str {
		match self {
			Self::MovePointerForward => "forward",
			Self::MovePointerBackward => "backward",
			Self::IncrementCell => "increment",
			Self::DecrementCell => "decrement",
			Self::WriteOut => "write",
			Self::ReadIn => "read",
			Self::JumpIfZero => "jump_if_zero",
			Self::JumpIfNonZero => "jump_if_non_zero",
		}
	}
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.write_str(self.mnemonic())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
	pub operation: Operation,
	pub target: usize,
}

impl Instruction {
	#[must_use]
	pub const fn new(operation: Operation) -> Self {
		Self::jump(operation, 0)
	}

	#[must_use]
	pub const fn jump(operation: Operation, target: usize) -> Self {
		Self { operation, target }
	}
}

impl From<Operation> for Instruction {
	fn from(operation: Operation) -> Self {
		Self::new(operation)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
	instructions: Box<[Instruction]>,
}

impl Program {
	#[must_use]
	pub const fn new(instructions: Box<[Instruction]>) -> Self {
		Self { instructions }
	}

	#[must_use]
	pub fn instructions(&self) -> &[Instruction] {
		&self.instructions
	}

	#[must_use]
	pub fn get(&self, pc: usize) -> Option<&Instruction> {
		self.instructions.get(pc)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.instructions.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.instructions.is_empty()
	}
}

impl From<Vec<Instruction>> for Program {
	fn from(instructions: Vec<Instruction>) -> Self {
		Self::new(instructions.into_boxed_slice())
	}
}
