//! Side value object - which registry an identifier belongs to

use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of a financial/physical mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Ledger-side records
    Financial,
    /// Real-world item records
    Physical,
}

impl Side {
    /// The side a mapping lookup returns ids for
    pub fn opposite(self) -> Side {
        match self {
            Side::Financial => Side::Physical,
            Side::Physical => Side::Financial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Financial => "financial",
            Side::Physical => "physical",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips() {
        assert_eq!(Side::Financial.opposite(), Side::Physical);
        assert_eq!(Side::Physical.opposite(), Side::Financial);
    }
}
