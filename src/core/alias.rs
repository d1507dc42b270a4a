use crate::core::symbol::Symbol;
use crate::utils::error::{GuideError, Result};
use std::collections::HashMap;

/// Case-insensitive alias word -> canonical symbol.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    aliases: HashMap<String, Symbol>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias`, returning the symbol it stood for before, if any.
    pub fn define(&mut self, alias: &str, symbol: Symbol) -> Option<Symbol> {
        let previous = self.aliases.insert(alias.to_uppercase(), symbol);
        if let Some(old) = previous {
            if old != symbol {
                tracing::debug!("Alias '{}' redefined: {} -> {}", alias, old, symbol);
            }
        }
        previous
    }

    pub fn lookup(&self, alias: &str) -> Option<Symbol> {
        self.aliases.get(&alias.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Translates whitespace-separated alias words into a canonical numeral
    /// string, one symbol per word.
    pub fn resolve(&self, text: &str) -> Result<String> {
        text.split_whitespace()
            .map(|word| {
                self.lookup(word)
                    .map(Symbol::as_char)
                    .ok_or_else(|| GuideError::UnknownAlias {
                        alias: word.to_string(),
                    })
            })
            .collect()
    }
}
