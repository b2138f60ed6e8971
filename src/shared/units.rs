//! Pure conversion from integer base units to human-readable decimal strings.
//!
//! All math is exact u128 integer arithmetic. No async, no network calls.

/// Decimal exponent of the chain's base unit (wei per ether).
pub const ETH_DECIMALS: u32 = 18;

/// Format an integer base-unit amount as a decimal display string.
///
/// Trailing fractional zeros are trimmed, but at least one fractional digit
/// is always kept: `2 * 10^18` formats as `"2.0"`, not `"2"`.
pub fn format_base_units(amount: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = amount / scale;
    let frac = amount % scale;

    if frac == 0 {
        return format!("{whole}.0");
    }

    let frac = format!("{:0>width$}", frac, width = decimals as usize);
    let frac = frac.trim_end_matches('0');
    format!("{whole}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_keep_one_fractional_digit() {
        assert_eq!(format_base_units(0, ETH_DECIMALS), "0.0");
        assert_eq!(format_base_units(2_000_000_000_000_000_000, ETH_DECIMALS), "2.0");
        assert_eq!(format_base_units(10_000_000_000_000_000_000, ETH_DECIMALS), "10.0");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(format_base_units(1_500_000_000_000_000_000, ETH_DECIMALS), "1.5");
        assert_eq!(format_base_units(2_250_000_000_000_000_000, ETH_DECIMALS), "2.25");
    }

    #[test]
    fn test_sub_unit_amounts_keep_leading_zeros() {
        assert_eq!(format_base_units(1, ETH_DECIMALS), "0.000000000000000001");
        assert_eq!(format_base_units(1_000_000_000, ETH_DECIMALS), "0.000000001");
    }

    #[test]
    fn test_other_exponents() {
        assert_eq!(format_base_units(10_500_000, 6), "10.5");
        assert_eq!(format_base_units(42, 0), "42.0");
    }

    #[test]
    fn test_large_amounts() {
        // 120 million ether in wei, near the real total supply.
        assert_eq!(
            format_base_units(120_000_000_000_000_000_000_000_000, ETH_DECIMALS),
            "120000000.0"
        );
    }
}
