//! Wallet configuration payloads.

use crate::types::{LinkedUser, Signer};
use serde::{Deserialize, Serialize};

/// Configuration shared by every wallet kind. A wallet always designates
/// exactly one administrative signer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub admin_signer: Signer,
}

impl WalletConfig {
    pub fn new(admin_signer: Signer) -> Self {
        Self { admin_signer }
    }
}

/// Options for creating or describing a wallet. A wallet may exist without a
/// linked human user (a system or custodial wallet) but never without a
/// config.
///
/// `linkedUser` may arrive absent or as an explicit null; both deserialize to
/// `None` and reserialize as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletOptions {
    pub config: WalletConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_user: Option<LinkedUser>,
}

impl WalletOptions {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            linked_user: None,
        }
    }

    pub fn with_linked_user(mut self, linked_user: LinkedUser) -> Self {
        self.linked_user = Some(linked_user);
        self
    }
}
