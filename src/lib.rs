#![doc(html_root_url = "https://docs.rs/bc-shamir-consensus/0.1.0")]
#![warn(rust_2018_idioms)]

//! # Introduction
//!
//! Exact, fault-tolerant reconstruction of Shamir secret shares.
//!
//! Shares are points on a polynomial over the integers. Every
//! threshold-sized subset of the shares is interpolated with exact rational
//! arithmetic, and the polynomial that the largest number of shares agree
//! with determines the secret. Shares that do not lie on it are reported as
//! bad.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! bc-shamir-consensus = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use bc_shamir_consensus::{Share, recover_secret};
//!
//! // f(x) = 2x^2 - 3x + 5; the share at x = 4 should be 25.
//! let shares = vec![
//!     Share::new(1, 4u32, "alice"),
//!     Share::new(2, 7u32, "bob"),
//!     Share::new(3, 14u32, "carol"),
//!     Share::new(4, 26u32, "dave"),
//! ];
//! let recovery = recover_secret(&shares, 3).unwrap();
//! assert_eq!(recovery.secret_string().as_deref(), Some("5"));
//! assert_eq!(recovery.bad_shares(), vec![3]);
//! ```

mod constants;
pub use constants::{DEALER_COEFFICIENT_SIZE, MIN_THRESHOLD, SHARE_LABEL_PREFIX};

mod shamir_error;
pub use shamir_error::{Result, ShamirError};

mod rational;
pub use rational::Rational;

mod combinations;
pub use combinations::{Combinations, combinations};

mod share;
pub use share::Share;

mod interpolate;
pub use interpolate::{lagrange_basis, value_at, value_at_zero};

mod shamir;
pub use shamir::{Recovery, recover_secret, split_secret};

mod integrity;
pub use integrity::{IntegrityHook, Sha256Hook, ShareAudit, recover_and_audit};
