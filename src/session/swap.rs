//! Swap intent validation.
//!
//! Swaps are demo-only: the session validates the intent and describes it,
//! and nothing is ever submitted to any service. The only checks are that a
//! wallet is connected (enforced by the caller) and that the amount is a
//! positive decimal. Swapping an asset to itself is allowed.

use crate::error::ValidationError;
use crate::shared::AssetId;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// A validated, never-executed swap intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapConfirmation {
    amount: Decimal,
    from: AssetId,
    to: AssetId,
}

impl SwapConfirmation {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn from_asset(&self) -> &AssetId {
        &self.from
    }

    pub fn to_asset(&self) -> &AssetId {
        &self.to
    }

    /// The swap in user-facing words, e.g. `"1.5 ETHEREUM to BITCOIN"`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} to {}",
            self.amount.normalize(),
            self.from.ticker(),
            self.to.ticker()
        )
    }

    /// The full confirmation message shown to the user.
    pub fn message(&self) -> String {
        format!("Swapping {} (demo only)", self.describe())
    }
}

/// Validate an amount string and build the confirmation.
pub(crate) fn validate(
    amount: &str,
    from: &AssetId,
    to: &AssetId,
) -> Result<SwapConfirmation, ValidationError> {
    let parsed = Decimal::from_str(amount.trim())
        .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;

    if parsed <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(amount.to_string()));
    }

    Ok(SwapConfirmation {
        amount: parsed,
        from: from.clone(),
        to: to.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth() -> AssetId {
        AssetId::from("ethereum")
    }

    fn btc() -> AssetId {
        AssetId::from("bitcoin")
    }

    #[test]
    fn test_valid_amount_describes_swap() {
        let confirmation = validate("1.5", &eth(), &btc()).unwrap();
        assert_eq!(confirmation.describe(), "1.5 ETHEREUM to BITCOIN");
        assert_eq!(
            confirmation.message(),
            "Swapping 1.5 ETHEREUM to BITCOIN (demo only)"
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(matches!(
            validate("0", &eth(), &btc()),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            validate("-2", &eth(), &btc()),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        assert!(matches!(
            validate("lots", &eth(), &btc()),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate("", &eth(), &btc()),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let confirmation = validate(" 2.25 ", &eth(), &btc()).unwrap();
        assert_eq!(confirmation.amount(), Decimal::from_str("2.25").unwrap());
    }

    #[test]
    fn test_same_asset_swap_allowed() {
        let confirmation = validate("3", &btc(), &btc()).unwrap();
        assert_eq!(confirmation.describe(), "3 BITCOIN to BITCOIN");
    }

    #[test]
    fn test_trailing_zeros_normalized() {
        let confirmation = validate("1.50", &eth(), &btc()).unwrap();
        assert_eq!(confirmation.describe(), "1.5 ETHEREUM to BITCOIN");
    }
}
