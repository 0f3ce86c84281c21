//! Property tests for stock deltas.

use proptest::prelude::*;

use super::stock::{edit_delta, ensure_available, reversal_delta, sale_delta};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Selling then reversing the same sale restores the original stock.
    #[test]
    fn prop_sale_then_reversal_round_trips(
        stock in 0i32..100_000,
        quantity in 1i32..100_000,
    ) {
        prop_assume!(quantity <= stock);
        let after_sale = ensure_available(stock, sale_delta(quantity)).unwrap();
        let restored = ensure_available(after_sale, reversal_delta(quantity)).unwrap();
        prop_assert_eq!(restored, stock);
    }

    /// A sale larger than the stock is always rejected.
    #[test]
    fn prop_oversell_always_rejected(
        stock in 0i32..100_000,
        extra in 1i32..1_000,
    ) {
        prop_assert!(ensure_available(stock, sale_delta(stock + extra)).is_err());
    }

    /// Editing a sale leaves the same stock as reversing it and selling anew.
    #[test]
    fn prop_edit_equals_reverse_then_resell(
        stock in 0i32..10_000,
        old_quantity in 1i32..10_000,
        new_quantity in 1i32..10_000,
    ) {
        let via_edit = ensure_available(stock, edit_delta(old_quantity, new_quantity));
        let via_reversal = ensure_available(stock, reversal_delta(old_quantity))
            .and_then(|s| ensure_available(s, sale_delta(new_quantity)));
        prop_assert_eq!(via_edit.is_ok(), via_reversal.is_ok());
        if let (Ok(a), Ok(b)) = (via_edit, via_reversal) {
            prop_assert_eq!(a, b);
        }
    }

    /// Stock never goes negative through an accepted delta.
    #[test]
    fn prop_accepted_stock_non_negative(
        stock in 0i32..10_000,
        delta in -20_000i32..20_000,
    ) {
        if let Ok(next) = ensure_available(stock, delta) {
            prop_assert!(next >= 0);
        }
    }
}
