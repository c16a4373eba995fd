#![no_main]

use hush::syntax::{compiler::Compiler, table::SymbolTable};
use hush_fuzz::structured_string::StructuredString;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: StructuredString| {
	let program = Compiler::new()
		.compile(&SymbolTable::zero_width(), source.char_indices())
		.expect("well nested source must compile");
	let instructions = program.instructions();

	for (i, insn) in instructions.iter().enumerate() {
		if let Some(partner) = insn.operation.partner() {
			let other = instructions[insn.target];

			assert_eq!(other.operation, partner);
			assert_eq!(other.target, i);
		}
	}
});
