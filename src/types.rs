//! Wire types exchanged with the wallet-custody service.
//!
//! All of these are ephemeral value objects owned by the calling code; this
//! crate only fixes their structure and JSON field names.

pub mod approval;
pub mod linked_user;
pub mod signer;
pub mod wallet;

pub use approval::TransactionApproval;
pub use linked_user::LinkedUser;
pub use signer::{Chain, SecretKey, Signer, SignerType};
pub use wallet::{WalletConfig, WalletOptions};
