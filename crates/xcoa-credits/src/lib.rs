//! # xCOA Copyright Credits
//!
//! This crate provides the pay-per-use credit ledger that funds
//! copyright-contact requests on the xCOA platform, together with the
//! static fee schedule that prices each request.
//!
//! Credits are independent of subscription plan quotas: a user on any tier
//! buys credits separately and spends them when xCOA contacts a scale's
//! copyright holder on their behalf.
//!
//! ## Overview
//!
//! The xcoa-credits crate handles:
//! - **Fee Schedule**: Base fee per organization type × request-type
//!   multiplier, rounded up to whole credits
//! - **Credit Store**: The `CreditStore` trait with an atomic
//!   sufficient-balance debit
//! - **In-Memory Store**: Reference implementation for single-process
//!   deployments and tests
//!
//! ## Atomicity
//!
//! The balance check and the debit are one operation. Two concurrent
//! debits that each request the full remaining balance resolve to exactly
//! one success and one `InsufficientCredits` rejection; the balance never
//! goes negative. A database-backed implementation should use a
//! conditional update (`UPDATE ... SET balance = balance - fee WHERE
//! balance >= fee`) or an equivalent transactional primitive.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uuid::Uuid;
//! use xcoa_credits::{contact_fee, CreditStore, MemoryCreditStore, OrganizationType, RequestType};
//!
//! async fn example() {
//!     let store = MemoryCreditStore::new();
//!     let user_id = Uuid::now_v7();
//!
//!     store.deposit(user_id, 20).await.unwrap();
//!
//!     let fee = contact_fee(OrganizationType::University, RequestType::LicenseInquiry);
//!     assert_eq!(fee, 8);
//!
//!     let remaining = store.debit(user_id, fee).await.unwrap();
//!     assert_eq!(remaining, 12);
//! }
//! ```

pub mod error;
pub mod fees;
pub mod store;

// Re-export main types
pub use error::{CreditError, CreditResult};
pub use fees::{contact_fee, OrganizationType, RequestType};
pub use store::CreditStore;

#[cfg(feature = "memory")]
pub use store::MemoryCreditStore;
