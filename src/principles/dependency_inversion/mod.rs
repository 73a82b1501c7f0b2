//! Dependency Inversion: a payment service and its processors.
//!
//! [`before::PaymentService`] builds a PayPal processor itself, so switching
//! providers means editing the service. [`after::PaymentService`] receives any
//! [`after::PaymentProcessor`] from its caller.

pub mod after;
pub mod before;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    Paypal,
    Stripe,
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorKind::Paypal => f.write_str("PayPal"),
            ProcessorKind::Stripe => f.write_str("Stripe"),
        }
    }
}

/// Whole amounts keep one decimal place: `$100.0`, `$75.5`.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("${:?}", amount)
}
