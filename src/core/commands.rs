use crate::core::numeral::Numeral;
use crate::core::session::Session;
use crate::core::symbol::Symbol;
use crate::domain::model::CommandKind;
use crate::domain::ports::Interpreter;
use crate::utils::error::{GuideError, Result};
use regex::{Captures, Regex};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("command pattern must compile")
}

fn group<'c>(captures: &'c Captures<'_>, name: &str) -> Result<&'c str> {
    captures
        .name(name)
        .map(|m| m.as_str())
        .ok_or_else(|| GuideError::internal(format!("pattern matched without '{}'", name)))
}

/// Resolves an alias phrase and validates the resulting numeral.
fn quantity(session: &Session, phrase: &str) -> Result<Numeral> {
    let numeral = session.aliases.resolve(phrase)?;
    Numeral::parse(&numeral)
}

/// `<word> is <symbol>`
pub struct DefineAlias {
    pattern: Regex,
}

impl DefineAlias {
    pub fn new() -> Self {
        Self {
            pattern: pattern(r"(?i)^\s*(?P<alias>[a-z]+)\s+is\s+(?P<symbol>[IVXLCDM]+)\s*$"),
        }
    }
}

impl Default for DefineAlias {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter for DefineAlias {
    fn kind(&self) -> CommandKind {
        CommandKind::DefineAlias
    }

    fn matches<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        self.pattern.captures(line)
    }

    fn handle(&self, session: &mut Session, captures: &Captures<'_>) -> Result<Option<String>> {
        let alias = group(captures, "alias")?;
        let token = group(captures, "symbol")?;
        let symbol = Symbol::from_token(token).ok_or_else(|| GuideError::NotASingleSymbol {
            token: token.to_string(),
        })?;
        session.aliases.define(alias, symbol);
        tracing::debug!("Alias '{}' now stands for {}", alias, symbol);
        Ok(None)
    }
}

/// `<aliases> <item> is <n> Credits`
pub struct DefinePrice {
    pattern: Regex,
}

impl DefinePrice {
    pub fn new() -> Self {
        Self {
            pattern: pattern(
                r"(?i)^(?P<quantity>.*)\s+(?P<item>\S+)\s+is\s+(?P<credits>[0-9]+)\s+credits\s*$",
            ),
        }
    }
}

impl Default for DefinePrice {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter for DefinePrice {
    fn kind(&self) -> CommandKind {
        CommandKind::DefinePrice
    }

    fn matches<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        self.pattern.captures(line)
    }

    fn handle(&self, session: &mut Session, captures: &Captures<'_>) -> Result<Option<String>> {
        let item = group(captures, "item")?;
        let numeral = quantity(session, group(captures, "quantity")?)?;
        let credits: u64 = group(captures, "credits")?
            .parse()
            .map_err(|e| GuideError::internal(format!("credit amount out of range: {}", e)))?;

        let units = numeral.value();
        if units == 0 {
            return Err(GuideError::internal(format!("{} converted to zero", numeral)));
        }
        let unit_price = session.prices.define_from_total(item, credits, units);
        tracing::debug!(
            "{} {} for {} credits: unit price {}",
            units,
            item,
            credits,
            unit_price
        );
        Ok(None)
    }
}

/// `how much is <aliases> ?`
pub struct QueryValue {
    pattern: Regex,
}

impl QueryValue {
    pub fn new() -> Self {
        Self {
            pattern: pattern(r"(?i)^\s*how\s+much\s+is\s+(?P<quantity>.*?)\s*\?\s*$"),
        }
    }
}

impl Default for QueryValue {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter for QueryValue {
    fn kind(&self) -> CommandKind {
        CommandKind::QueryValue
    }

    fn matches<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        self.pattern.captures(line)
    }

    fn handle(&self, session: &mut Session, captures: &Captures<'_>) -> Result<Option<String>> {
        let phrase = group(captures, "quantity")?;
        let numeral = quantity(session, phrase)?;
        Ok(Some(format!("{} is {}", phrase, numeral.value())))
    }
}

/// `how many Credits is <aliases> <item> ?`
pub struct QueryPrice {
    pattern: Regex,
}

impl QueryPrice {
    pub fn new() -> Self {
        Self {
            pattern: pattern(
                r"(?i)^\s*how\s+many\s+credits\s+is\s+(?P<quantity>.*)\s+(?P<item>\S+?)\s*\?\s*$",
            ),
        }
    }
}

impl Default for QueryPrice {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter for QueryPrice {
    fn kind(&self) -> CommandKind {
        CommandKind::QueryPrice
    }

    fn matches<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        self.pattern.captures(line)
    }

    fn handle(&self, session: &mut Session, captures: &Captures<'_>) -> Result<Option<String>> {
        let phrase = group(captures, "quantity")?;
        let item = group(captures, "item")?;
        let numeral = quantity(session, phrase)?;
        let unit_price = session
            .prices
            .lookup(item)
            .ok_or_else(|| GuideError::UnknownItem {
                item: item.to_string(),
            })?;

        let total = unit_price * numeral.value() as f64;
        Ok(Some(format!(
            "{} {} is {} Credits",
            phrase.trim(),
            item,
            total
        )))
    }
}
