//! Property tests for expense capital movements.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::movement::{CapitalMovement, ExpenseEffect, total_capital};

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn net(moves: &[CapitalMovement]) -> Decimal {
    total_capital(moves.iter().map(|m| (m.entry_type, m.amount)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Creating an expense lowers capital by exactly its amount.
    #[test]
    fn prop_create_subtracts_amount(amount in amount_strategy()) {
        prop_assert_eq!(net(&ExpenseEffect::created(amount)), -amount);
    }

    /// Editing an expense from A to B changes capital by A - B.
    #[test]
    fn prop_update_nets_old_minus_new(
        old_amount in amount_strategy(),
        new_amount in amount_strategy(),
    ) {
        prop_assert_eq!(
            net(&ExpenseEffect::updated(old_amount, new_amount)),
            old_amount - new_amount
        );
    }

    /// Any create / edit chain / delete sequence leaves capital untouched.
    #[test]
    fn prop_full_lifecycle_is_neutral(
        first in amount_strategy(),
        edits in proptest::collection::vec(amount_strategy(), 0..8),
    ) {
        let mut ledger = ExpenseEffect::created(first);
        let mut current = first;
        for next in edits {
            ledger.extend(ExpenseEffect::updated(current, next));
            current = next;
        }
        ledger.extend(ExpenseEffect::deleted(current));
        prop_assert_eq!(net(&ledger), Decimal::ZERO);
    }
}
