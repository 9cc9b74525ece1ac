use std::{fmt, path::Path, str::FromStr};

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Base58-encoded 32-byte Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn from_base58(s: &str) -> Result<Self, LedgerError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|err| LedgerError::InvalidAddress(format!("invalid base58: {err}")))?;
        if bytes.len() != 32 {
            return Err(LedgerError::InvalidAddress(format!(
                "address must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        if bytes.len() != 32 {
            return Err(LedgerError::InvalidAddress(format!(
                "address must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bs58::encode(bytes).into_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bs58::decode(&self.0).into_vec().unwrap_or_default()
    }

    pub fn verifying_key(&self) -> Result<VerifyingKey, LedgerError> {
        let bytes: [u8; 32] = self
            .to_bytes()
            .try_into()
            .map_err(|_| LedgerError::InvalidAddress(self.0.clone()))?;
        VerifyingKey::from_bytes(&bytes)
            .map_err(|err| LedgerError::InvalidAddress(format!("{}: {err}", self.0)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

/// Ed25519 signing keypair in the ledger's CLI wallet format
/// (a JSON array of 64 bytes: secret key followed by public key).
pub struct Keypair {
    signing_key: SigningKey,
    address: Address,
}

impl Keypair {
    /// Generate a fresh keypair from the OS CSPRNG. Disposable faucet
    /// identities are created this way once per funding iteration.
    pub fn generate() -> Self {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        let signing_key = SigningKey::from_bytes(&secret);
        let address = Address::from_bytes(signing_key.verifying_key().as_bytes())
            .expect("verifying key is always 32 bytes");
        Self {
            signing_key,
            address,
        }
    }

    pub fn from_secret_key(secret: &[u8]) -> Result<Self, LedgerError> {
        let secret: [u8; 32] = secret.try_into().map_err(|_| {
            LedgerError::InvalidKeypair(format!("secret key must be 32 bytes, got {}", secret.len()))
        })?;
        let signing_key = SigningKey::from_bytes(&secret);
        let address = Address::from_bytes(signing_key.verifying_key().as_bytes())?;
        Ok(Self {
            signing_key,
            address,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let contents = std::fs::read_to_string(&path).map_err(|err| {
            LedgerError::InvalidKeypair(format!("{}: {err}", path.as_ref().display()))
        })?;
        let bytes: Vec<u8> = serde_json::from_str(&contents)
            .map_err(|err| LedgerError::InvalidKeypair(format!("not a byte array: {err}")))?;
        if bytes.len() != 64 {
            return Err(LedgerError::InvalidKeypair(format!(
                "keypair file must contain 64 bytes, got {}",
                bytes.len()
            )));
        }
        Self::from_secret_key(&bytes[..32])
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(self.signing_key.as_bytes());
        bytes.extend_from_slice(self.signing_key.verifying_key().as_bytes());
        let json = serde_json::to_string(&bytes)?;
        std::fs::write(&path, json).map_err(|err| {
            LedgerError::InvalidKeypair(format!("{}: {err}", path.as_ref().display()))
        })?;
        Ok(())
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    pub fn verify(address: &Address, message: &[u8], signature: &Signature) -> bool {
        match address.verifying_key() {
            Ok(key) => key.verify(message, signature).is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_address_is_32_bytes_of_base58() {
        let keypair = Keypair::generate();
        assert_eq!(keypair.address().to_bytes().len(), 32);
        assert!(Address::from_base58(keypair.address().as_str()).is_ok());
    }

    #[test]
    fn keypair_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payer.json");

        let keypair = Keypair::generate();
        keypair.write_file(&path).unwrap();
        let loaded = Keypair::from_file(&path).unwrap();

        assert_eq!(loaded.address(), keypair.address());
    }

    #[test]
    fn rejects_short_keypair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.json");
        std::fs::write(&path, serde_json::to_string(&vec![1u8; 32]).unwrap()).unwrap();

        let err = Keypair::from_file(&path).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidKeypair(_)));
    }

    #[test]
    fn rejects_missing_keypair_file() {
        assert!(matches!(
            Keypair::from_file("/nonexistent/payer.json").unwrap_err(),
            LedgerError::InvalidKeypair(_)
        ));
    }

    #[test]
    fn rejects_malformed_address() {
        assert!(Address::from_base58("not-base58-0OIl").is_err());
        assert!(Address::from_bytes(&[0u8; 16]).is_err());
    }

    #[test]
    fn signature_verifies_against_address() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"sweep");
        assert!(Keypair::verify(keypair.address(), b"sweep", &signature));
        assert!(!Keypair::verify(keypair.address(), b"tampered", &signature));
    }
}
