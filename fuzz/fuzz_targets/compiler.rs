#![no_main]

use hush::syntax::{compiler::Compiler, table::SymbolTable};
use hush_fuzz::restricted_string::RestrictedString;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: RestrictedString| {
	let _ = Compiler::new().compile(&SymbolTable::zero_width(), source.char_indices());
});
