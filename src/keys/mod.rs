//! Local key pairs — generation, hex import, address derivation.
//!
//! Key material lives only in memory for the lifetime of the session. There
//! is no storage, no encryption, and no signing: the wallet only derives an
//! address to query balances for.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};

use crate::error::KeyError;

const SECRET_LEN: usize = 32;

/// A secp256k1 key pair with its derived chain address.
///
/// Invariant: the address is always derived from the held secret, so the two
/// can never disagree.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
    address: String,
}

impl Keypair {
    /// Generate a fresh random key pair. Infallible.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let address = derive_address(&signing_key);
        Self { signing_key, address }
    }

    /// Import a key pair from a hex-encoded private key.
    ///
    /// Accepts the secret with or without a `0x` prefix. Rejects non-hex
    /// input, wrong lengths, and scalars outside the curve order.
    pub fn from_hex(secret_hex: &str) -> Result<Self, KeyError> {
        let stripped = secret_hex
            .strip_prefix("0x")
            .or_else(|| secret_hex.strip_prefix("0X"))
            .unwrap_or(secret_hex);

        let bytes = hex::decode(stripped).map_err(|_| KeyError::InvalidHex)?;
        if bytes.len() != SECRET_LEN {
            return Err(KeyError::InvalidLength {
                expected: SECRET_LEN,
                got: bytes.len(),
            });
        }

        let signing_key =
            SigningKey::from_slice(&bytes).map_err(|_| KeyError::InvalidScalar)?;
        let address = derive_address(&signing_key);
        Ok(Self { signing_key, address })
    }

    /// The derived `0x`-prefixed chain address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The private key as a `0x`-prefixed hex string.
    pub fn secret_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signing_key.to_bytes()))
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Chain address = `keccak256(uncompressed_pubkey[1..])[12..]`, hex-encoded.
fn derive_address(signing_key: &SigningKey) -> String {
    let public = signing_key.verifying_key().to_encoded_point(false);
    let hash = Keccak256::digest(&public.as_bytes()[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_address_and_secret() {
        let pair = Keypair::generate();
        assert!(pair.address().starts_with("0x"));
        assert_eq!(pair.address().len(), 42);
        assert!(pair.secret_hex().starts_with("0x"));
        assert_eq!(pair.secret_hex().len(), 66);
    }

    #[test]
    fn test_address_rederives_from_secret() {
        let pair = Keypair::generate();
        let reimported = Keypair::from_hex(&pair.secret_hex()).unwrap();
        assert_eq!(pair.address(), reimported.address());
    }

    #[test]
    fn test_generate_is_random() {
        let a = Keypair::generate();
        let b = Keypair::generate();
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_import_known_vector() {
        // Private key 0x01 pairs with the well-known generator-point address.
        let pair = Keypair::from_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(
            pair.address(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_import_accepts_bare_hex() {
        let with_prefix = Keypair::from_hex(
            "0x4646464646464646464646464646464646464646464646464646464646464646",
        )
        .unwrap();
        let without = Keypair::from_hex(
            "4646464646464646464646464646464646464646464646464646464646464646",
        )
        .unwrap();
        assert_eq!(with_prefix.address(), without.address());
    }

    #[test]
    fn test_import_rejects_non_hex() {
        assert_eq!(
            Keypair::from_hex("0xnot-a-key").unwrap_err(),
            KeyError::InvalidHex
        );
    }

    #[test]
    fn test_import_rejects_wrong_length() {
        assert_eq!(
            Keypair::from_hex("0xdeadbeef").unwrap_err(),
            KeyError::InvalidLength { expected: 32, got: 4 }
        );
    }

    #[test]
    fn test_import_rejects_zero_scalar() {
        assert_eq!(
            Keypair::from_hex(
                "0x0000000000000000000000000000000000000000000000000000000000000000",
            )
            .unwrap_err(),
            KeyError::InvalidScalar
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let pair = Keypair::generate();
        let debug = format!("{:?}", pair);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(&pair.secret_hex()[2..]));
    }
}
