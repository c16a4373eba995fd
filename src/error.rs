use std::{collections::TryReserveError, num::NonZeroUsize, path::PathBuf};

use thiserror::Error;

use crate::{
	runtime::executor::ExecuteError,
	syntax::compiler::CompileError,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure that ends a run of the interpreter.
#[derive(Debug, Error)]
pub enum Error {
	#[error("expected exactly one source file, got {count}")]
	Usage { count: usize },

	#[error("cannot read source file `{}`: {source}", path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot allocate a tape of {length} cells")]
	TapeTooLong {
		length: NonZeroUsize,
		#[source]
		source: TryReserveError,
	},

	#[error("compilation failed: {0}")]
	Compile(#[from] CompileError),

	#[error("execution failed: {0}")]
	Execute(#[from] ExecuteError),

	#[error("cannot write output: {0}")]
	Output(#[from] std::io::Error),
}
