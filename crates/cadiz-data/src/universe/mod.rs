//! Universe management.
//!
//! The screener runs over a fixed equity universe. This module provides the
//! S&P 500 constituent list and the GICS sector taxonomy used to classify it.

pub mod gics;
pub mod sp500;

pub use gics::GicsSector;
pub use sp500::{Constituent, SP500Universe};

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s == symbol)
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for SP500Universe {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }

    fn contains(&self, symbol: &str) -> bool {
        self.constituent(symbol).is_some()
    }

    fn size(&self) -> usize {
        self.constituents().len()
    }
}
