//! Correlation application layer

pub mod correlator;

pub use correlator::Correlator;
