//! Parsing use cases

mod parse_unit;

pub use parse_unit::ParseUnitUseCase;
