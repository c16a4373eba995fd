pub mod codegen {
	pub mod listing;
	pub mod source;

	mod tab;
}

pub mod mir {
	pub mod data;
}

pub mod runtime {
	pub mod executor;
	pub mod tape;
}

pub mod syntax {
	pub mod compiler;
	pub mod table;
}

pub mod error;
