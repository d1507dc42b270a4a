use serde::{Deserialize, Serialize};

/// The seven canonical numeral symbols, declared in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// 0-based position in I, V, X, L, C, D, M.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn value(self) -> u64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    pub fn from_rank(rank: usize) -> Option<Symbol> {
        Self::ALL.get(rank).copied()
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        match c.to_ascii_uppercase() {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Accepts a token only when it is exactly one symbol character.
    pub fn from_token(token: &str) -> Option<Symbol> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_and_values_follow_canonical_order() {
        let values: Vec<u64> = Symbol::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
        for (rank, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.rank(), rank);
            assert_eq!(Symbol::from_rank(rank), Some(*symbol));
        }
        assert_eq!(Symbol::from_rank(7), None);
    }

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(Symbol::from_char('m'), Some(Symbol::M));
        assert_eq!(Symbol::from_char('D'), Some(Symbol::D));
        assert_eq!(Symbol::from_char('Q'), None);
    }

    #[test]
    fn test_from_token_requires_exactly_one_symbol() {
        assert_eq!(Symbol::from_token("v"), Some(Symbol::V));
        assert_eq!(Symbol::from_token("IV"), None);
        assert_eq!(Symbol::from_token(""), None);
    }
}
