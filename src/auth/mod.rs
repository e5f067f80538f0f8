//! Admin authentication against the external brochure API.

pub mod client;
pub mod error;
pub mod form;

pub use client::{token_preview, AuthClient, AuthMode, AuthRequest, AuthResponse};
pub use error::AuthError;
pub use form::{AuthForm, Field, Settled, Submission};
