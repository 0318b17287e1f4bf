//! Tests for Money arithmetic and rounding behavior

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod construction {
    use super::*;

    #[test]
    fn test_new_does_not_round() {
        let m = Money::new(dec!(261.33333333333333333333333333), Currency::INR);
        assert_eq!(m.amount(), dec!(261.33333333333333333333333333));
    }

    #[test]
    fn test_zero() {
        let m = Money::zero(Currency::INR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_from_minor_jpy_has_no_fraction() {
        let m = Money::from_minor(5000, Currency::JPY);
        assert_eq!(m.amount(), dec!(5000));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Money::new(dec!(1340), Currency::INR);
        let b = Money::new(dec!(228), Currency::INR);

        assert_eq!((a + b).amount(), dec!(1568));
        assert_eq!((a - b).amount(), dec!(1112));
    }

    #[test]
    fn test_multiply_by_quantity() {
        let unit = Money::new(dec!(180), Currency::INR);
        assert_eq!(unit.multiply(dec!(2)).amount(), dec!(360));
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        let m = Money::new(dec!(100), Currency::INR);
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_neg_and_abs() {
        let m = Money::new(dec!(50), Currency::INR);
        assert!((-m).is_negative());
        assert_eq!((-m).abs(), m);
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_half_up_at_midpoint() {
        // 0.005 rounds away from zero, unlike banker's rounding
        let m = Money::new(dec!(261.335), Currency::INR);
        assert_eq!(m.round_half_up(2).amount(), dec!(261.34));
    }

    #[test]
    fn test_round_to_currency() {
        let inr = Money::new(dec!(99.999), Currency::INR);
        assert_eq!(inr.round_to_currency().amount(), dec!(100.00));

        let jpy = Money::new(dec!(99.5), Currency::JPY);
        assert_eq!(jpy.round_to_currency().amount(), dec!(100));
    }

    #[test]
    fn test_raw_quotient_rounds_once_at_the_end() {
        let total = Money::new(dec!(1568), Currency::INR);
        let raw = total.divide(dec!(6)).unwrap();
        let rounded = raw.round_half_up(2);

        assert_eq!(rounded.amount(), dec!(261.33));
        // Six rounded shares fall short of the total by the known residual
        let sum = rounded.multiply(dec!(6));
        assert_eq!((total - sum).amount(), dec!(0.02));
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_allocate_distributes_remainder_to_first_parts() {
        let m = Money::new(dec!(100.00), Currency::INR);
        let parts = m.allocate(3).unwrap();

        assert_eq!(parts[0].amount(), dec!(33.34));
        assert_eq!(parts[1].amount(), dec!(33.33));
        assert_eq!(parts[2].amount(), dec!(33.33));
    }

    #[test]
    fn test_allocate_zero_parts_is_error() {
        let m = Money::new(dec!(100.00), Currency::INR);
        assert!(matches!(m.allocate(0), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_allocate_by_ratios_last_part_absorbs_residue() {
        let m = Money::new(dec!(161), Currency::INR);
        let parts = m
            .allocate_by_ratios(&[dec!(545), dec!(475), dec!(320)])
            .unwrap();

        let total: Decimal = parts.iter().map(|p| p.amount()).sum();
        assert_eq!(total, dec!(161));
    }

    #[test]
    fn test_allocate_by_empty_ratios_is_error() {
        let m = Money::new(dec!(100), Currency::INR);
        assert!(matches!(
            m.allocate_by_ratios(&[]),
            Err(MoneyError::InvalidAmount(_))
        ));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_round_trips_through_json() {
        let m = Money::new(dec!(1568.00), Currency::INR);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
