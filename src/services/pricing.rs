/// Return the price after applying a tax percentage, rounded to 2 decimal places
pub fn price_with_tax(price: f64, tax_pct: f64) -> f64 {
    let final_price = (price * (1.0 + tax_pct) * 100.0).round() / 100.0;
    tracing::debug!(price, tax_pct, final_price, "calculated price with tax");
    final_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_tax_percentage() {
        assert_eq!(price_with_tax(100.0, 0.1), 110.0);
    }

    #[test]
    fn zero_price_stays_zero() {
        assert_eq!(price_with_tax(0.0, 0.18), 0.0);
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        assert_eq!(price_with_tax(9.99, 0.18), 11.79);
    }
}
