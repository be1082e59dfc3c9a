//! Signer configurations accepted by the custody service.
//!
//! A signer either holds its own key material (keypair signers) or delegates
//! custody to Fireblocks. The wire discriminant is the `type` field; the full
//! set of recognized literals lives in [`SignerType`], which is the one place
//! to extend when a new chain or custody kind is added.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use strum::{Display, EnumIter, EnumString};
use zeroize::ZeroizeOnDrop;

/// Secret key material for a keypair signer. The bytes are zeroized whenever
/// the value is dropped.
///
/// Note: We purposely restrict the API to minimize accidental leaking and
/// copying of data. Think carefully before adding new methods!
#[derive(Clone, Deserialize, Eq, PartialEq, Serialize, ZeroizeOnDrop)]
pub struct SecretKey(String);

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecretKey").field(&"REDACTED").finish()
    }
}

impl SecretKey {
    /// Convert an existing `string` to a `SecretKey` by taking ownership of
    /// its data; this ensures no copies are made.
    pub fn from_string(string: String) -> SecretKey {
        SecretKey(string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretKey {
    fn from(string: String) -> Self {
        SecretKey(string)
    }
}

impl AsRef<str> for SecretKey {
    /// Access the underlying key material.
    ///
    /// Warning: Think very carefully before cloning the underlying `&str`, as
    /// there is no guarantee it gets zeroized once copied out.
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The closed set of wire literals accepted in a signer's `type` field.
///
/// Adding support for a new chain or custody kind means adding a variant here
/// (and its counterpart on [`Signer`]); nothing else in discrimination or
/// validation changes.
#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SignerType {
    SolanaKeypair,
    EvmKeypair,
    SolanaFireblocksCustodial,
    EvmFireblocksCustodial,
}

impl SignerType {
    /// Keypair signers carry their own `secretKey`; custodial signers do not.
    pub fn requires_secret_key(&self) -> bool {
        match self {
            Self::SolanaKeypair | Self::EvmKeypair => true,
            Self::SolanaFireblocksCustodial | Self::EvmFireblocksCustodial => false,
        }
    }

    /// True when key material is held by the custody service rather than in
    /// the wallet configuration.
    pub fn is_custodial(&self) -> bool {
        !self.requires_secret_key()
    }

    pub fn chain(&self) -> Chain {
        match self {
            Self::SolanaKeypair | Self::SolanaFireblocksCustodial => Chain::Solana,
            Self::EvmKeypair | Self::EvmFireblocksCustodial => Chain::Evm,
        }
    }
}

/// The chain a signer operates on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    Solana,
    Evm,
}

/// An entity authorized to approve wallet transactions, selected on the wire
/// by the `type` discriminant.
///
/// Keypair variants hold local key material; Fireblocks variants delegate
/// custody and carry no secret. A stray `secretKey` on a custodial signer is
/// ignored during deserialization, but an unrecognized `type` is always a
/// hard failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Signer {
    SolanaKeypair {
        #[serde(rename = "secretKey")]
        secret_key: SecretKey,
    },
    EvmKeypair {
        #[serde(rename = "secretKey")]
        secret_key: SecretKey,
    },
    SolanaFireblocksCustodial,
    EvmFireblocksCustodial,
}

impl Signer {
    /// The wire discriminant for this signer.
    pub fn signer_type(&self) -> SignerType {
        match self {
            Self::SolanaKeypair { .. } => SignerType::SolanaKeypair,
            Self::EvmKeypair { .. } => SignerType::EvmKeypair,
            Self::SolanaFireblocksCustodial => SignerType::SolanaFireblocksCustodial,
            Self::EvmFireblocksCustodial => SignerType::EvmFireblocksCustodial,
        }
    }

    pub fn chain(&self) -> Chain {
        self.signer_type().chain()
    }

    pub fn is_custodial(&self) -> bool {
        self.signer_type().is_custodial()
    }

    /// Local key material, if this signer holds any.
    pub fn secret_key(&self) -> Option<&SecretKey> {
        match self {
            Self::SolanaKeypair { secret_key } | Self::EvmKeypair { secret_key } => Some(secret_key),
            Self::SolanaFireblocksCustodial | Self::EvmFireblocksCustodial => None,
        }
    }
}
