pub mod assembler;
pub mod emitter;
pub mod sanitizer;

#[cfg(test)]
mod tests;

// Checked-in output of the assembler for `tests::sample_rows`, compiled so
// the generated lookups run under test.
#[cfg(test)]
#[allow(dead_code)]
#[path = "testdata/units_sample.rs"]
mod units_sample;

pub use assembler::{assemble_module, usable_aliases};
pub use emitter::{EmitOutcome, EmittedUnit, UnitEmitter};
pub use sanitizer::unit_key_from_name;
