//! Custom Test Assertions
//!
//! Schedule invariant checks that report which line item broke which rule.

use core_kernel::{CalendarMonth, DateRange};
use domain_billing::{BillingLineItem, LineItemStatus, StayPeriod};

/// Asserts that a generated schedule satisfies every billing rule for `stay`
///
/// Checks, per item: month order, overlap-based night count, amount,
/// due date and initial status.
///
/// # Panics
///
/// Panics with a description of the first violated rule
pub fn assert_schedule_invariants(stay: &StayPeriod, items: &[BillingLineItem]) {
    assert!(!items.is_empty(), "Schedule for {:?} is empty", stay);

    assert_eq!(
        items[0].month,
        CalendarMonth::containing(stay.check_in()),
        "First item must bill the check-in month"
    );
    assert_eq!(
        items[0].due_date,
        stay.check_in(),
        "First item must be due on check-in"
    );

    for pair in items.windows(2) {
        assert_eq!(
            pair[0].month.next(),
            Some(pair[1].month),
            "Months must be consecutive: {} then {}",
            pair[0].month,
            pair[1].month
        );
    }

    let stay_range = stay.as_range();
    for (index, item) in items.iter().enumerate() {
        assert!(
            item.month.first_day() < stay.check_out(),
            "Item {} bills {} which starts on or after check-out",
            index,
            item.month
        );

        let overlap = stay_range
            .intersect(&item.month.as_range())
            .unwrap_or_else(|| panic!("Item {} bills {} outside the stay", index, item.month));
        assert_nights_match_overlap(item, &overlap);

        assert_eq!(
            item.amount,
            stay.price_per_night().for_nights(item.nights).expect("charge fits in a decimal"),
            "Item {} amount must be nights * price",
            index
        );

        if index > 0 {
            let expected_due = item.month.previous().map(|m| m.first_day());
            assert_eq!(
                Some(item.due_date),
                expected_due,
                "Item {} ({}) must be due on the 1st of the previous month",
                index,
                item.month
            );
        }

        assert_eq!(item.status, LineItemStatus::Unpaid, "Item {} must start unpaid", index);
    }
}

/// Asserts that an item's night count is the inclusive length of `overlap`
pub fn assert_nights_match_overlap(item: &BillingLineItem, overlap: &DateRange) {
    let expected = overlap.days() + 1;
    assert!(item.nights >= 1, "{} bills zero nights", item.month);
    assert_eq!(
        i64::from(item.nights),
        expected,
        "{} bills {} nights, overlap {} to {} has {}",
        item.month,
        item.nights,
        overlap.start,
        overlap.end,
        expected
    );
}
