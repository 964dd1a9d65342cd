//! Credentials and request signing for the Buttercoin REST API
//!
//! Every authenticated Buttercoin request carries three headers: the access
//! key, a millisecond timestamp, and an HMAC-SHA256 signature over that
//! timestamp and the request URL. This crate owns the credentials and the
//! signing algorithm; the HTTP side lives in `buttercoin-rest`.
//!
//! # Example
//!
//! ```
//! use buttercoin_auth::{sign, HttpVerb};
//!
//! let signature = sign(
//!     HttpVerb::Get,
//!     "key",
//!     "https://api.buttercoin.com/v1/key",
//!     1403558182457,
//!     "",
//!     b"abcdefghijklmnopqrstuvwxyz123456",
//! );
//! assert_eq!(signature, "amakcIy40XLCUaSz6urhl+687F2pIexux+TJ2bl+66I=");
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{canonical_message, sign, HttpVerb, RequestSigner};
