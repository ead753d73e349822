/// Platform fee in basis points (10% of the order nominal).
pub const PLATFORM_FEE_BP: i64 = 1000;

/// Fee for a completed order, integer rupiah, rounded half up.
/// Never goes through floating point.
pub fn platform_fee(nominal: i64) -> i64 {
    (nominal * PLATFORM_FEE_BP + 5_000) / 10_000
}

/// Merchant take-home after the platform fee.
pub fn net_amount(nominal: i64) -> i64 {
    nominal - platform_fee(nominal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_is_ten_percent() {
        assert_eq!(platform_fee(100_000), 10_000);
        assert_eq!(platform_fee(50_000), 5_000);
        assert_eq!(platform_fee(0), 0);
    }

    #[test]
    fn test_fee_rounds_half_up() {
        // 10% of 125 is 12.5, rounds up to 13
        assert_eq!(platform_fee(125), 13);
        // 10% of 124 is 12.4, rounds down to 12
        assert_eq!(platform_fee(124), 12);
        assert_eq!(platform_fee(126), 13);
        assert_eq!(platform_fee(5), 1);
        assert_eq!(platform_fee(4), 0);
    }

    #[test]
    fn test_net_amount() {
        assert_eq!(net_amount(125), 112);
        assert_eq!(net_amount(100_000), 90_000);
        assert_eq!(platform_fee(125) + net_amount(125), 125);
    }

    #[test]
    fn test_fee_never_exceeds_nominal() {
        for nominal in [1, 9, 10, 11, 999, 10_000, 1_000_000] {
            let fee = platform_fee(nominal);
            assert!(fee <= nominal);
            assert!(fee >= 0);
        }
    }
}
