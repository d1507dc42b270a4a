use std::collections::HashMap;

/// Case-insensitive item name -> credits per unit.
#[derive(Debug, Clone, Default)]
pub struct PriceRegistry {
    prices: HashMap<String, f64>,
}

impl PriceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, item: &str, unit_price: f64) -> Option<f64> {
        self.prices.insert(item.to_uppercase(), unit_price)
    }

    /// Stores `credits / quantity` as the unit price of `item`.
    pub fn define_from_total(&mut self, item: &str, credits: u64, quantity: u64) -> f64 {
        let unit_price = credits as f64 / quantity as f64;
        self.define(item, unit_price);
        unit_price
    }

    pub fn lookup(&self, item: &str) -> Option<f64> {
        self.prices.get(&item.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_is_total_over_quantity() {
        let mut prices = PriceRegistry::new();
        assert_eq!(prices.define_from_total("Silver", 34, 2), 17.0);
        assert_eq!(prices.define_from_total("Iron", 3910, 20), 195.5);
        assert_eq!(prices.lookup("silver"), Some(17.0));
        assert_eq!(prices.lookup("IRON"), Some(195.5));
    }

    #[test]
    fn test_redefinition_overwrites() {
        let mut prices = PriceRegistry::new();
        prices.define("Gold", 14450.0);
        assert_eq!(prices.define("gold", 100.0), Some(14450.0));
        assert_eq!(prices.lookup("Gold"), Some(100.0));
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn test_missing_item() {
        assert_eq!(PriceRegistry::new().lookup("Dirt"), None);
    }
}
