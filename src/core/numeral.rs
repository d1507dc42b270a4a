use crate::core::symbol::Symbol;
use crate::utils::error::{GuideError, NumeralFault, Result};
use std::str::FromStr;

const MAX_RUN: usize = 3;
const MAX_SUBTRACTION_DISTANCE: usize = 2;

/// Checks a numeral string and returns its symbols when it is well formed.
///
/// The rules, applied in order:
/// 1. every character is one of I, V, X, L, C, D, M (case-insensitive);
/// 2. no symbol appears more than three times in a row;
/// 3. when a symbol outranks its predecessor, the predecessor must have an
///    even rank (I, X, C, M) and sit at most two ranks below it.
pub fn check(text: &str) -> std::result::Result<Vec<Symbol>, NumeralFault> {
    if text.is_empty() {
        return Err(NumeralFault::Empty);
    }

    let symbols = text
        .chars()
        .map(|c| Symbol::from_char(c).ok_or(NumeralFault::UnknownSymbol(c)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut run = 0;
    let mut previous: Option<Symbol> = None;
    for &symbol in &symbols {
        run = if previous == Some(symbol) { run + 1 } else { 1 };
        if run > MAX_RUN {
            return Err(NumeralFault::ExcessiveRepeat(symbol.as_char()));
        }
        previous = Some(symbol);
    }

    for pair in symbols.windows(2) {
        let (last, current) = (pair[0].rank(), pair[1].rank());
        if current > last && (last % 2 > 0 || current - last > MAX_SUBTRACTION_DISTANCE) {
            return Err(NumeralFault::IllegalSubtraction {
                from: pair[1].as_char(),
                by: pair[0].as_char(),
            });
        }
    }

    Ok(symbols)
}

pub fn is_well_formed(text: &str) -> bool {
    check(text).is_ok()
}

/// Converts a symbol sequence to its integer value.
///
/// Only meaningful for sequences accepted by [`check`].
pub fn to_integer(symbols: &[Symbol]) -> u64 {
    let Some((first, rest)) = symbols.split_first() else {
        return 0;
    };

    let mut result = 0u64;
    let mut pending = first.value();
    let mut last = first.value();
    for symbol in rest {
        let current = symbol.value();
        if current == last {
            pending += current;
        } else if current < last {
            result += pending;
            pending = current;
        } else {
            pending = current.saturating_sub(pending);
        }
        last = current;
    }

    result + pending
}

/// A numeral string that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    symbols: Vec<Symbol>,
}

impl Numeral {
    pub fn parse(text: &str) -> Result<Self> {
        check(text)
            .map(|symbols| Numeral { symbols })
            .map_err(|fault| GuideError::MalformedNumeral {
                numeral: text.to_string(),
                fault,
            })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn value(&self) -> u64 {
        to_integer(&self.symbols)
    }
}

impl FromStr for Numeral {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self> {
        Numeral::parse(s)
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(text: &str) -> u64 {
        Numeral::parse(text).unwrap().value()
    }

    #[test]
    fn test_descending_numerals_sum_their_symbols() {
        assert_eq!(value_of("XII"), 12);
        assert_eq!(value_of("LVI"), 56);
        assert_eq!(value_of("MDCLXVI"), 1666);
        assert_eq!(value_of("XXX"), 30);
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(value_of("IV"), 4);
        assert_eq!(value_of("IX"), 9);
        assert_eq!(value_of("XLII"), 42);
        assert_eq!(value_of("MCMIII"), 1903);
        assert_eq!(value_of("MCMXLIV"), 1944);
    }

    #[test]
    fn test_lowercase_input_is_accepted() {
        assert_eq!(value_of("mcmxliv"), 1944);
    }

    #[test]
    fn test_rejects_unknown_symbols_and_empty_input() {
        assert_eq!(check(""), Err(NumeralFault::Empty));
        assert_eq!(check("XIZ"), Err(NumeralFault::UnknownSymbol('Z')));
    }

    #[test]
    fn test_rejects_four_in_a_row() {
        assert_eq!(check("XXXX"), Err(NumeralFault::ExcessiveRepeat('X')));
        assert_eq!(check("MMMMCM"), Err(NumeralFault::ExcessiveRepeat('M')));
        assert!(is_well_formed("XXXIX"));
    }

    #[test]
    fn test_rejects_subtraction_more_than_two_ranks_apart() {
        assert_eq!(
            check("IL"),
            Err(NumeralFault::IllegalSubtraction { from: 'L', by: 'I' })
        );
        assert!(!is_well_formed("XM"));
        assert!(!is_well_formed("IC"));
    }

    #[test]
    fn test_rejects_subtraction_by_odd_ranked_symbols() {
        assert!(!is_well_formed("VX"));
        assert!(!is_well_formed("LC"));
        assert!(!is_well_formed("DM"));
    }

    #[test]
    fn test_only_adjacent_pairs_are_checked() {
        // I->X and X->V are each acceptable on their own.
        assert!(is_well_formed("IXV"));
        assert_eq!(value_of("IXV"), 14);
    }

    #[test]
    fn test_conversion_is_stable() {
        let numeral = Numeral::parse("CDXLIV").unwrap();
        assert_eq!(numeral.value(), 444);
        assert_eq!(numeral.value(), numeral.value());
        assert_eq!(numeral.to_string(), "CDXLIV");
    }

    #[test]
    fn test_parse_reports_the_offending_numeral() {
        let err = "IIII".parse::<Numeral>().unwrap_err();
        match err {
            GuideError::MalformedNumeral { numeral, fault } => {
                assert_eq!(numeral, "IIII");
                assert_eq!(fault, NumeralFault::ExcessiveRepeat('I'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
