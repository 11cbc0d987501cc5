//! `stockdesk-auth`: token boundary for the managed identity provider.
//!
//! Sign-up and sign-in happen elsewhere; this crate only turns a bearer token
//! into the owner it speaks for. It is decoupled from HTTP and storage.

pub mod claims;
pub mod jwt;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
