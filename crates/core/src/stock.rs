//! Stock coverage calculations for the inventory view.

/// Days of stock remaining at the current daily sales average.
///
/// Returns `None` when `daily_sales_avg` is not positive; a channel with no
/// sales has no meaningful coverage figure, and the caller must never see a
/// division error.
pub fn days_of_stock(current_stock: i32, daily_sales_avg: i32) -> Option<i32> {
    if daily_sales_avg > 0 {
        Some(current_stock / daily_sales_avg)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::days_of_stock;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(days_of_stock(45, 12), Some(3));
    }

    #[test]
    fn zero_daily_average_has_no_coverage() {
        assert_eq!(days_of_stock(100, 0), None);
    }

    #[test]
    fn zero_stock_is_zero_days() {
        assert_eq!(days_of_stock(0, 18), Some(0));
    }
}
