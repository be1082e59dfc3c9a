//! The shape registry: validation of untrusted values against the named wire
//! shapes.
//!
//! Callers run deserialized JSON through [`validate`] (or the per-type
//! `TryFrom<&Value>` impls) before acting on it, so that a malformed signer
//! configuration is rejected up front rather than misrouted during a signing
//! operation. Validation is stateless and pure; failures are deterministic
//! and carry the first offending field.

use crate::{
    error::ShapeError,
    types::{LinkedUser, Signer, SignerType, TransactionApproval, WalletConfig, WalletOptions},
};
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

/// Names of the shapes this registry can validate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Shape {
    LinkedUser,
    TransactionApproval,
    Signer,
    WalletConfig,
    WalletOptions,
}

/// A candidate value narrowed to the shape it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    LinkedUser(LinkedUser),
    TransactionApproval(TransactionApproval),
    Signer(Signer),
    WalletConfig(WalletConfig),
    WalletOptions(WalletOptions),
}

impl Validated {
    pub fn shape(&self) -> Shape {
        match self {
            Self::LinkedUser(_) => Shape::LinkedUser,
            Self::TransactionApproval(_) => Shape::TransactionApproval,
            Self::Signer(_) => Shape::Signer,
            Self::WalletConfig(_) => Shape::WalletConfig,
            Self::WalletOptions(_) => Shape::WalletOptions,
        }
    }
}

/// Check `candidate` against the named shape, returning the narrowed typed
/// value or a [`ShapeError::Mismatch`] naming the first offending field.
pub fn validate(candidate: &Value, shape: Shape) -> Result<Validated, ShapeError> {
    let result = match shape {
        Shape::LinkedUser => LinkedUser::try_from(candidate).map(Validated::LinkedUser),
        Shape::TransactionApproval => {
            TransactionApproval::try_from(candidate).map(Validated::TransactionApproval)
        }
        Shape::Signer => Signer::try_from(candidate).map(Validated::Signer),
        Shape::WalletConfig => WalletConfig::try_from(candidate).map(Validated::WalletConfig),
        Shape::WalletOptions => WalletOptions::try_from(candidate).map(Validated::WalletOptions),
    };
    if let Err(error) = &result {
        warn!(%shape, field = error.field(), "shape validation failed");
    }
    result
}

/// Inspect a signer candidate's `type` field and return which variant of the
/// registry it names. An unrecognized literal is a hard failure, never
/// coerced to a default variant.
pub fn discriminate(candidate: &Value) -> Result<SignerType, ShapeError> {
    let map = object(candidate, Shape::Signer)?;
    let literal = require_string(map, "type")?;
    SignerType::from_str(literal)
        .map_err(|_| ShapeError::mismatch("type", "a recognized signer type", map.get("type")))
}

impl TryFrom<&Value> for LinkedUser {
    type Error = ShapeError;

    fn try_from(candidate: &Value) -> Result<Self, Self::Error> {
        let map = object(candidate, Shape::LinkedUser)?;
        Ok(LinkedUser {
            email: optional_string(map, "email")?,
            phone: optional_string(map, "phone")?,
            user_id: optional_integer(map, "userId")?,
        })
    }
}

impl TryFrom<&Value> for TransactionApproval {
    type Error = ShapeError;

    fn try_from(candidate: &Value) -> Result<Self, Self::Error> {
        let map = object(candidate, Shape::TransactionApproval)?;
        let signer = require_string(map, "signer")?.to_string();
        // Omitted and explicit-null signatures both mean "pending", but the
        // wire distinction is kept.
        let signature = match map.get("signature") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(signature)) => Some(Some(signature.clone())),
            other => return Err(ShapeError::mismatch("signature", "a string or null", other)),
        };
        Ok(TransactionApproval { signer, signature })
    }
}

impl TryFrom<&Value> for Signer {
    type Error = ShapeError;

    fn try_from(candidate: &Value) -> Result<Self, Self::Error> {
        let map = object(candidate, Shape::Signer)?;
        Ok(match discriminate(candidate)? {
            SignerType::SolanaKeypair => Signer::SolanaKeypair {
                secret_key: require_string(map, "secretKey")?.to_string().into(),
            },
            SignerType::EvmKeypair => Signer::EvmKeypair {
                secret_key: require_string(map, "secretKey")?.to_string().into(),
            },
            SignerType::SolanaFireblocksCustodial => Signer::SolanaFireblocksCustodial,
            SignerType::EvmFireblocksCustodial => Signer::EvmFireblocksCustodial,
        })
    }
}

impl TryFrom<&Value> for WalletConfig {
    type Error = ShapeError;

    fn try_from(candidate: &Value) -> Result<Self, Self::Error> {
        let map = object(candidate, Shape::WalletConfig)?;
        let admin_signer = map
            .get("adminSigner")
            .ok_or_else(|| ShapeError::mismatch("adminSigner", "a signer object", None))?;
        Ok(WalletConfig::new(Signer::try_from(admin_signer)?))
    }
}

impl TryFrom<&Value> for WalletOptions {
    type Error = ShapeError;

    fn try_from(candidate: &Value) -> Result<Self, Self::Error> {
        let map = object(candidate, Shape::WalletOptions)?;
        let config = map
            .get("config")
            .ok_or_else(|| ShapeError::mismatch("config", "a wallet config object", None))?;
        let linked_user = match map.get("linkedUser") {
            None | Some(Value::Null) => None,
            Some(candidate) => Some(LinkedUser::try_from(candidate)?),
        };
        Ok(WalletOptions {
            config: WalletConfig::try_from(config)?,
            linked_user,
        })
    }
}

fn object<'a>(candidate: &'a Value, shape: Shape) -> Result<&'a Map<String, Value>, ShapeError> {
    candidate
        .as_object()
        .ok_or_else(|| ShapeError::mismatch(shape.to_string(), "an object", Some(candidate)))
}

fn require_string<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ShapeError> {
    match map.get(field) {
        Some(Value::String(string)) => Ok(string),
        other => Err(ShapeError::mismatch(field, "a string", other)),
    }
}

fn optional_string(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ShapeError> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(string)) => Ok(Some(string.clone())),
        other => Err(ShapeError::mismatch(field, "a string", other)),
    }
}

fn optional_integer(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ShapeError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) => match value.as_i64() {
            Some(integer) => Ok(Some(integer)),
            None => Err(ShapeError::mismatch(field, "an integer", Some(value))),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn every_shape_is_selectable_by_name() {
        for shape in Shape::iter() {
            assert_eq!(Shape::from_str(&shape.to_string()).unwrap(), shape);
        }
        assert!(Shape::from_str("Wallet").is_err());
    }

    #[test]
    fn linked_user_validates_with_any_subset_of_fields() -> Result<(), ShapeError> {
        let candidates = [
            json!({}),
            json!({ "email": "custody@example.com" }),
            json!({ "phone": "+15550100" }),
            json!({ "userId": 42 }),
            json!({ "email": "custody@example.com", "phone": "+15550100", "userId": 42 }),
        ];
        for candidate in candidates {
            let validated = validate(&candidate, Shape::LinkedUser)?;
            assert_eq!(validated.shape(), Shape::LinkedUser);
        }
        Ok(())
    }

    #[test]
    fn linked_user_rejects_a_non_integer_user_id() {
        let candidate = json!({ "userId": "42" });
        let error = validate(&candidate, Shape::LinkedUser).unwrap_err();
        assert_eq!(error.field(), "userId");
    }

    #[test]
    fn approval_accepts_pending_and_complete_signatures() -> Result<(), ShapeError> {
        let pending_absent = json!({ "signer": "0xsigner" });
        let pending_null = json!({ "signer": "0xsigner", "signature": null });
        let complete = json!({ "signer": "0xsigner", "signature": "0xsignature" });

        let approval = TransactionApproval::try_from(&pending_absent)?;
        assert_eq!(approval.signature, None);
        assert!(!approval.is_approved());

        let approval = TransactionApproval::try_from(&pending_null)?;
        assert_eq!(approval.signature, Some(None));
        assert!(!approval.is_approved());

        let approval = TransactionApproval::try_from(&complete)?;
        assert!(approval.is_approved());
        Ok(())
    }

    #[test]
    fn approval_requires_a_signer() {
        let error = validate(&json!({ "signature": null }), Shape::TransactionApproval).unwrap_err();
        assert_eq!(error.field(), "signer");
    }

    #[test]
    fn keypair_signer_without_secret_key_fails_on_secret_key() {
        for literal in ["solana-keypair", "evm-keypair"] {
            let error = validate(&json!({ "type": literal }), Shape::Signer).unwrap_err();
            assert_eq!(error.field(), "secretKey");
        }
    }

    #[test]
    fn custodial_signer_tolerates_a_stray_secret_key() -> Result<(), ShapeError> {
        let bare = json!({ "type": "solana-fireblocks-custodial" });
        let stray = json!({ "type": "evm-fireblocks-custodial", "secretKey": "0xabc" });
        assert_eq!(
            validate(&bare, Shape::Signer)?,
            Validated::Signer(Signer::SolanaFireblocksCustodial)
        );
        assert_eq!(
            validate(&stray, Shape::Signer)?,
            Validated::Signer(Signer::EvmFireblocksCustodial)
        );
        Ok(())
    }

    #[test]
    fn signer_without_a_type_fails_on_type() {
        let error = validate(&json!({ "secretKey": "0xabc" }), Shape::Signer).unwrap_err();
        assert_eq!(error.field(), "type");
    }

    #[test]
    fn unrecognized_discriminant_is_a_hard_failure() {
        let candidate = json!({ "type": "bitcoin-keypair", "secretKey": "xprv" });
        let error = discriminate(&candidate).unwrap_err();
        assert_eq!(error.field(), "type");
        assert!(validate(&candidate, Shape::Signer).is_err());
    }

    #[test]
    fn discriminate_recognizes_every_registered_literal() -> Result<(), ShapeError> {
        for signer_type in SignerType::iter() {
            let candidate = json!({ "type": signer_type.to_string() });
            assert_eq!(discriminate(&candidate)?, signer_type);
        }
        Ok(())
    }

    #[test]
    fn wallet_options_scenario_validates() -> Result<(), ShapeError> {
        let candidate = json!({
            "config": { "adminSigner": { "type": "evm-keypair", "secretKey": "0xabc" } },
            "linkedUser": null
        });
        let validated = validate(&candidate, Shape::WalletOptions)?;
        let Validated::WalletOptions(options) = validated else {
            panic!("validated against the wrong shape");
        };
        assert!(options.linked_user.is_none());
        assert_eq!(
            options.config.admin_signer.signer_type(),
            SignerType::EvmKeypair
        );
        Ok(())
    }

    #[test]
    fn wallet_options_scenario_without_secret_key_fails_on_secret_key() {
        let candidate = json!({
            "config": { "adminSigner": { "type": "evm-keypair" } },
            "linkedUser": null
        });
        let error = validate(&candidate, Shape::WalletOptions).unwrap_err();
        assert_eq!(error.field(), "secretKey");
    }

    #[test]
    fn wallet_options_require_a_config() {
        let error = validate(&json!({ "linkedUser": null }), Shape::WalletOptions).unwrap_err();
        assert_eq!(error.field(), "config");
    }

    #[test]
    fn non_object_candidates_fail_up_front() {
        let error = validate(&json!("not a wallet"), Shape::WalletOptions).unwrap_err();
        assert_eq!(error.field(), "WalletOptions");
    }

    #[test]
    fn validated_values_round_trip_onto_the_wire() -> Result<(), ShapeError> {
        let candidate = json!({
            "config": { "adminSigner": { "type": "evm-keypair", "secretKey": "0xabc" } }
        });
        let Validated::WalletOptions(options) = validate(&candidate, Shape::WalletOptions)? else {
            panic!("validated against the wrong shape");
        };
        assert_eq!(serde_json::to_value(&options).unwrap(), candidate);
        Ok(())
    }
}
