use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::{
    error::LedgerError,
    keypair::{Address, Keypair},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// Native-unit transfer from the message payer.
    Transfer { to: Address, lamports: u64 },
    /// Opaque launchpad program operation; `data` is the operation's
    /// input contract as-is.
    ProgramCall {
        op: String,
        data: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub payer: Address,
    pub instruction: Instruction,
}

/// Signed transaction envelope. The wire form is the base64 of the JSON
/// bytes; the signature covers the serialized message and is produced by
/// the payer's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub message: Message,
    pub signature: String,
}

impl Transaction {
    pub fn sign(message: Message, signer: &Keypair) -> Result<Self, LedgerError> {
        let bytes = serde_json::to_vec(&message)?;
        let signature = bs58::encode(signer.sign(&bytes).to_bytes()).into_string();
        Ok(Self { message, signature })
    }

    pub fn transfer(from: &Keypair, to: &Address, lamports: u64) -> Result<Self, LedgerError> {
        let message = Message {
            payer: from.address().clone(),
            instruction: Instruction::Transfer {
                to: to.clone(),
                lamports,
            },
        };
        Self::sign(message, from)
    }

    pub fn program_call(
        signer: &Keypair,
        op: &str,
        data: serde_json::Value,
    ) -> Result<Self, LedgerError> {
        let message = Message {
            payer: signer.address().clone(),
            instruction: Instruction::ProgramCall {
                op: op.to_string(),
                data,
            },
        };
        Self::sign(message, signer)
    }

    pub fn verify(&self) -> Result<bool, LedgerError> {
        let bytes = serde_json::to_vec(&self.message)?;
        let signature_bytes: [u8; 64] = bs58::decode(&self.signature)
            .into_vec()
            .map_err(|err| LedgerError::MalformedResponse(format!("signature base58: {err}")))?
            .try_into()
            .map_err(|_| LedgerError::MalformedResponse("signature must be 64 bytes".to_string()))?;
        let signature = ed25519_dalek::Signature::from_bytes(&signature_bytes);
        Ok(Keypair::verify(&self.message.payer, &bytes, &signature))
    }

    pub fn encode(&self) -> Result<String, LedgerError> {
        Ok(BASE64.encode(serde_json::to_vec(self)?))
    }

    pub fn decode(wire: &str) -> Result<Self, LedgerError> {
        let bytes = BASE64
            .decode(wire)
            .map_err(|err| LedgerError::MalformedResponse(format!("transaction base64: {err}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
