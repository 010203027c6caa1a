//! Outbound email delivery.
//!
//! The rest of the crate talks to the delivery provider through the
//! [`EmailProvider`] trait; [`ResendClient`] is the HTTP implementation.

mod provider;
mod resend;
mod types;

pub use provider::{EmailProvider, ProviderError};
pub use resend::{ResendClient, RESEND_API_BASE};
pub use types::{OutboundEmail, SentEmail};
