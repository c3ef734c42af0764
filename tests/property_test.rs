use pricecalc::domain::arithmetic::evaluate;
use pricecalc::domain::discount::{DiscountPercent, Price, apply_discount};
use pricecalc::domain::operator::Operator;
use pricecalc::error::CalcError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const SAMPLES: usize = 2_000;

fn random_price(rng: &mut StdRng) -> Decimal {
    // Non-negative, two decimal places.
    Decimal::new(rng.gen_range(0..10_000_000), 2)
}

#[test]
fn test_below_threshold_never_changes_price() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let price = random_price(&mut rng);
        let percent = Decimal::new(rng.gen_range(-10_000..2_000), 2);
        assert!(percent < dec!(20));

        let result = apply_discount(Price::new(price), DiscountPercent::new(percent));
        assert_eq!(result.value(), price, "price {price}, percent {percent}");
    }
}

#[test]
fn test_at_or_above_threshold_scales_price() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let price = random_price(&mut rng);
        let percent = Decimal::new(rng.gen_range(2_000..20_000), 2);

        let result = apply_discount(Price::new(price), DiscountPercent::new(percent));
        let expected = price * (Decimal::ONE - percent / dec!(100));
        assert_eq!(result.value(), expected, "price {price}, percent {percent}");
        assert!(result.value() <= price);
    }
}

#[test]
fn test_discount_is_idempotent_per_input() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let price = Price::new(random_price(&mut rng));
        let percent = DiscountPercent::new(Decimal::new(rng.gen_range(0..10_000), 2));
        assert_eq!(apply_discount(price, percent), apply_discount(price, percent));
    }
}

#[test]
fn test_evaluate_matches_decimal_arithmetic() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let a = Decimal::new(rng.gen_range(-1_000_000..1_000_000), 3);
        let b = Decimal::new(rng.gen_range(-1_000_000..1_000_000), 3);

        assert_eq!(evaluate(a, b, Operator::Add).unwrap(), a + b);
        assert_eq!(evaluate(a, b, Operator::Subtract).unwrap(), a - b);
        assert_eq!(evaluate(a, b, Operator::Multiply).unwrap(), a * b);

        if b.is_zero() {
            assert!(matches!(
                evaluate(a, b, Operator::Divide),
                Err(CalcError::DivisionByZero)
            ));
        } else {
            assert_eq!(evaluate(a, b, Operator::Divide).unwrap(), a / b);
        }
    }
}
