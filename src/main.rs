use std::{
	io::{BufWriter, Write},
	num::NonZeroUsize,
	path::{Path, PathBuf},
	process::ExitCode,
};

use argh::FromArgs;
use hush::{
	codegen,
	error::{Error, Result},
	runtime::{executor::Executor, tape::Tape},
	syntax::{compiler::Compiler, table::SymbolTable},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// An interpreter for a tape language written in invisible characters.
#[derive(FromArgs)]
struct Arguments {
	/// the source file to run
	#[argh(positional)]
	input: Vec<PathBuf>,

	/// the symbol set the source is written in,
	/// currently supported: `zero-width`, `ascii`
	#[argh(option, short = 'e', default = "SymbolTable::zero_width()")]
	encoding: SymbolTable,

	/// the number of cells on the tape
	#[argh(option, default = "Tape::DEFAULT_LENGTH")]
	tape_length: NonZeroUsize,

	/// whether to print the compiled program instead of running it
	#[argh(switch, short = 'l')]
	listing: bool,

	/// the symbol set to rewrite the program in instead of running it
	#[argh(option, short = 't')]
	translate: Option<SymbolTable>,
}

fn init_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn source_path(inputs: &[PathBuf]) -> Result<&Path> {
	match inputs {
		[path] => Ok(path),
		_ => Err(Error::Usage {
			count: inputs.len(),
		}),
	}
}

// Bytes that are not valid UTF-8 become U+FFFD, which no table maps.
fn load_input(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| Error::SourceUnavailable {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run(arguments: &Arguments) -> Result<()> {
	let path = source_path(&arguments.input)?;
	let source = load_input(path)?;

	info!(path = %path.display(), "loaded source");

	let program = Compiler::new().compile(&arguments.encoding, source.char_indices())?;
	let output = &mut BufWriter::new(std::io::stdout().lock());

	if arguments.listing {
		codegen::listing::write(output, &program)?;
	} else if let Some(table) = &arguments.translate {
		codegen::source::write(output, table, &program)?;
	} else {
		let input = &mut std::io::stdin().lock();
		let length = arguments.tape_length;
		let mut executor = Executor::try_with_tape_length(length)
			.map_err(|source| Error::TapeTooLong { length, source })?;

		executor.run(&program, input, output)?;
	}

	output.flush()?;

	Ok(())
}

fn main() -> ExitCode {
	init_logging();

	let arguments = argh::from_env::<Arguments>();

	match run(&arguments) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");

			ExitCode::FAILURE
		}
	}
}
