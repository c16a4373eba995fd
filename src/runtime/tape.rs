use std::{collections::TryReserveError, num::NonZeroUsize};

pub type Cell = u16;

/// A fixed-length row of cells with a single data pointer.
///
/// Cell arithmetic wraps at the cell width and the pointer wraps at the tape
/// length, so no operation on a tape can fail.
#[derive(Debug, Clone)]
pub struct Tape {
	cells: Box<[Cell]>,
	pointer: usize,
}

impl Tape {
	pub const DEFAULT_LENGTH: NonZeroUsize = match NonZeroUsize::new(65535) {
		Some(length) => length,
		None => unreachable!(),
	};

	#[must_use]
	pub fn new(length: NonZeroUsize) -> Self {
		Self {
			cells: vec![0; length.get()].into_boxed_slice(),
			pointer: 0,
		}
	}

	/// Allocates the cells without aborting when `length` is too large.
	///
	/// # Errors
	///
	/// Returns `TryReserveError` if the cells cannot be allocated.
	pub fn try_new(length: NonZeroUsize) -> Result<Self, TryReserveError> {
		let mut cells = Vec::new();

		cells.try_reserve_exact(length.get())?;
		cells.resize(length.get(), 0);

		Ok(Self {
			cells: cells.into_boxed_slice(),
			pointer: 0,
		})
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	#[must_use]
	pub const fn pointer(&self) -> usize {
		self.pointer
	}

	#[must_use]
	pub fn get(&self) -> Cell {
		self.cells[self.pointer]
	}

	pub fn set(&mut self, value: Cell) {
		self.cells[self.pointer] = value;
	}

	#[must_use]
	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	/// Zeroes every cell and returns the pointer to the origin.
	pub fn clear(&mut self) {
		self.cells.fill(0);
		self.pointer = 0;
	}

	pub fn move_forward(&mut self) {
		self.pointer += 1;

		if self.pointer == self.cells.len() {
			self.pointer = 0;
		}
	}

	pub fn move_backward(&mut self) {
		self.pointer = self
			.pointer
			.checked_sub(1)
			.unwrap_or(self.cells.len() - 1);
	}

	pub fn increment(&mut self) {
		let cell = &mut self.cells[self.pointer];

		*cell = cell.wrapping_add(1);
	}

	pub fn decrement(&mut self) {
		let cell = &mut self.cells[self.pointer];

		*cell = cell.wrapping_sub(1);
	}
}

impl Default for Tape {
	fn default() -> Self {
		Self::new(Self::DEFAULT_LENGTH)
	}
}
