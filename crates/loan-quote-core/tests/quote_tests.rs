use loan_quote_core::{Lender, LoanQuoteError, Market, QuoteCalculator};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Quote calculator tests
// ===========================================================================

fn lender(name: &str, rate: Decimal, amount: Decimal) -> Lender {
    Lender {
        name: name.into(),
        rate,
        amount,
    }
}

fn calculator(lenders: Vec<Lender>) -> QuoteCalculator {
    QuoteCalculator::new(Market::new(lenders))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_amount_not_multiple_of_hundred_rejected() {
    let calc = calculator(vec![]);
    let err = calc.find_best_quote(1020).unwrap_err();
    assert!(matches!(
        err,
        LoanQuoteError::InvalidLoanAmount { amount: 1020 }
    ));
}

#[test]
fn test_amount_too_small_rejected() {
    let calc = calculator(vec![]);
    let err = calc.find_best_quote(900).unwrap_err();
    assert!(matches!(err, LoanQuoteError::InvalidLoanAmount { .. }));
}

#[test]
fn test_amount_too_large_rejected() {
    let calc = calculator(vec![]);
    let err = calc.find_best_quote(15100).unwrap_err();
    assert!(matches!(err, LoanQuoteError::InvalidLoanAmount { .. }));
}

#[test]
fn test_validation_runs_before_capacity_check() {
    // A market rich enough for any request still rejects a bad amount.
    let calc = calculator(vec![lender("Deep", dec!(0.05), dec!(100000))]);
    let err = calc.find_best_quote(1020).unwrap_err();
    assert!(matches!(err, LoanQuoteError::InvalidLoanAmount { .. }));
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[test]
fn test_empty_market_yields_no_quote() {
    // Amount 1000 is itself valid, so the empty market is an absent result,
    // not an error.
    let calc = calculator(vec![]);
    let result = calc.find_best_quote(1000).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_insufficient_capacity_yields_no_quote() {
    let calc = calculator(vec![lender("Small", dec!(0.07), dec!(100))]);
    let result = calc.find_best_quote(1000).unwrap();
    assert_eq!(result, None);
}

// ---------------------------------------------------------------------------
// Reference quotes
// ---------------------------------------------------------------------------

#[test]
fn test_single_lender_quote() {
    let calc = calculator(vec![lender("TestLender1", dec!(0.07), dec!(1000))]);
    let quote = calc.find_best_quote(1000).unwrap().unwrap();

    assert_eq!(quote.requested_amount, dec!(1000));
    assert_eq!(quote.rate_percent, dec!(7.0));
    assert_eq!(quote.monthly_payment, dec!(30.88));
    assert_eq!(quote.total_repayment, dec!(1111.58));
}

#[test]
fn test_multiple_lenders_even_split() {
    let calc = calculator(vec![
        lender("TestLender1", dec!(0.06), dec!(400)),
        lender("TestLender2", dec!(0.07), dec!(400)),
        lender("TestLender3", dec!(0.08), dec!(400)),
    ]);
    let quote = calc.find_best_quote(1200).unwrap().unwrap();

    // Even thirds at 6/7/8% blend to exactly 7%.
    assert_eq!(quote.requested_amount, dec!(1200));
    assert_eq!(quote.rate_percent, dec!(7.0));
    assert_eq!(quote.monthly_payment, dec!(37.05));
    assert_eq!(quote.total_repayment, dec!(1333.89));
}

#[test]
fn test_multiple_lenders_uneven_split() {
    let calc = calculator(vec![
        lender("TestLender1", dec!(0.06), dec!(200)),
        lender("TestLender2", dec!(0.07), dec!(200)),
        lender("TestLender3", dec!(0.08), dec!(600)),
    ]);
    let quote = calc.find_best_quote(1000).unwrap().unwrap();

    // 0.06*0.2 + 0.07*0.2 + 0.08*0.6 = 0.074
    assert_eq!(quote.requested_amount, dec!(1000));
    assert_eq!(quote.rate_percent, dec!(7.4));
    assert_eq!(quote.monthly_payment, dec!(31.06));
    assert_eq!(quote.total_repayment, dec!(1118.17));
}

// ---------------------------------------------------------------------------
// Allocation behaviour
// ---------------------------------------------------------------------------

#[test]
fn test_lenders_past_satisfying_point_do_not_move_the_rate() {
    let sufficient = calculator(vec![lender("Cheap", dec!(0.05), dec!(1000))]);
    let with_dear_tail = calculator(vec![
        lender("Cheap", dec!(0.05), dec!(1000)),
        lender("Dear", dec!(0.10), dec!(500)),
    ]);

    let base = sufficient.find_best_quote(1000).unwrap().unwrap();
    let tailed = with_dear_tail.find_best_quote(1000).unwrap().unwrap();

    assert_eq!(base.rate_percent, dec!(5.0));
    assert_eq!(base, tailed);
}

#[test]
fn test_partial_draw_caps_at_amount_needed() {
    // The cheap lender is exhausted first; only 300 of the second lender's
    // 900 is drawn.
    let calc = calculator(vec![
        lender("A", dec!(0.04), dec!(700)),
        lender("B", dec!(0.08), dec!(900)),
    ]);
    let quote = calc.find_best_quote(1000).unwrap().unwrap();

    // 0.04*0.7 + 0.08*0.3 = 0.052
    assert_eq!(quote.rate_percent, dec!(5.2));
}

#[test]
fn test_input_order_is_irrelevant() {
    let forward = calculator(vec![
        lender("A", dec!(0.06), dec!(400)),
        lender("B", dec!(0.08), dec!(800)),
    ]);
    let reversed = calculator(vec![
        lender("B", dec!(0.08), dec!(800)),
        lender("A", dec!(0.06), dec!(400)),
    ]);

    assert_eq!(
        forward.find_best_quote(1000).unwrap(),
        reversed.find_best_quote(1000).unwrap()
    );
}

#[test]
fn test_idempotence() {
    let calc = calculator(vec![
        lender("A", dec!(0.069), dec!(480)),
        lender("B", dec!(0.071), dec!(520)),
        lender("C", dec!(0.104), dec!(170)),
    ]);

    let first = calc.find_best_quote(1000).unwrap().unwrap();
    let second = calc.find_best_quote(1000).unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rate_tied_lenders_blend_identically_either_order() {
    // With equal rates the blended rate is order-independent; the stable
    // tie-break is pinned separately on Market's rate-ordered view.
    let calc = calculator(vec![
        lender("First", dec!(0.07), dec!(600)),
        lender("Second", dec!(0.07), dec!(600)),
    ]);
    let quote = calc.find_best_quote(1000).unwrap().unwrap();
    assert_eq!(quote.rate_percent, dec!(7.0));
}
