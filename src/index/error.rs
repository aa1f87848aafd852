use std::fmt;
use thiserror::Error;

use super::record::Subscale;

/// Which conversion table a failed lookup was against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionTable {
    Reflex,
    Cognitive,
}

impl fmt::Display for ConversionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionTable::Reflex => f.write_str("reflex behavior"),
            ConversionTable::Cognitive => f.write_str("cognitively mediated behavior"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// A raw subscore lies outside its subscale's ordinal range. Raised
    /// before any table lookup is attempted.
    #[error("{subscale} score {value} is outside its valid range 0-{max}")]
    OutOfRange {
        subscale: Subscale,
        value: u8,
        max: u8,
    },

    /// A rounded aggregate fraction has no exact entry in its conversion
    /// table, so no matrix value exists for the combination. Never silently
    /// mapped to a default.
    #[error("rounded {table} fraction {fraction:.2} has no conversion table entry")]
    LookupMismatch { table: ConversionTable, fraction: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_subscale_and_bounds() {
        let err = IndexError::OutOfRange {
            subscale: Subscale::Auditory,
            value: 5,
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "Auditory score 5 is outside its valid range 0-4"
        );
    }

    #[test]
    fn test_lookup_mismatch_message_names_table_and_fraction() {
        let err = IndexError::LookupMismatch {
            table: ConversionTable::Cognitive,
            fraction: 13.0 / 11.0,
        };
        assert_eq!(
            err.to_string(),
            "rounded cognitively mediated behavior fraction 1.18 has no conversion table entry"
        );
    }
}
