//! Per-signer approval records for a pending transaction.

use serde::{Deserialize, Serialize};

/// One signer's approval of a transaction.
///
/// `signature` distinguishes two kinds of absence on the wire: the field may
/// be omitted entirely, or carried as an explicit null while the approval is
/// pending. Both mean "not yet approved", but the distinction is preserved
/// through a round trip. Once a signature string is set it is treated as
/// immutable evidence of approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionApproval {
    /// Address or key identifier of the approving signer.
    pub signer: String,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<Option<String>>,
}

impl TransactionApproval {
    /// A pending approval for `signer`, with no signature on the wire.
    pub fn new(signer: impl Into<String>) -> Self {
        Self {
            signer: signer.into(),
            signature: None,
        }
    }

    /// Record the signer's signature, completing the approval.
    pub fn approve(&mut self, signature: impl Into<String>) {
        self.signature = Some(Some(signature.into()));
    }

    /// True once a signature has been recorded.
    pub fn is_approved(&self) -> bool {
        matches!(self.signature, Some(Some(_)))
    }
}
