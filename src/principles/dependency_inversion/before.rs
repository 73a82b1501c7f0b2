use super::{format_amount, ProcessorKind};
use crate::config::toml_config::PaymentsConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::Result;

pub struct PayPalPaymentProcessor {
    console: SharedConsole,
}

impl PayPalPaymentProcessor {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn initiate_payment(&self, amount: f64) {
        self.console.print(&format!(
            "- Initiating payment of {} using PayPal.",
            format_amount(amount)
        ));
    }

    pub fn verify_payment(&self) -> bool {
        self.console.print("- Verifying payment using PayPal.");
        true
    }

    pub fn refund_payment(&self, amount: f64) {
        self.console
            .print(&format!("- Refunding {} using PayPal.", format_amount(amount)));
    }
}

/// Wired to PayPal; another provider means editing this type.
pub struct PaymentService {
    processor: PayPalPaymentProcessor,
    console: SharedConsole,
}

impl PaymentService {
    pub fn new(console: SharedConsole) -> Self {
        Self {
            processor: PayPalPaymentProcessor::new(console.clone()),
            console,
        }
    }

    pub fn process_payment(&self, amount: f64) -> bool {
        self.processor.initiate_payment(amount);
        let verified = self.processor.verify_payment();
        if verified {
            self.console.print(&format!(
                "- Payment of {} processed successfully.",
                format_amount(amount)
            ));
        }
        verified
    }

    pub fn refund_payment(&self, amount: f64) {
        self.processor.refund_payment(amount);
    }
}

pub struct PaymentsDemo {
    config: PaymentsConfig,
}

impl PaymentsDemo {
    pub fn new(config: PaymentsConfig) -> Self {
        Self { config }
    }
}

impl Demo for PaymentsDemo {
    fn principle(&self) -> Principle {
        Principle::DependencyInversion
    }

    fn variant(&self) -> Variant {
        Variant::Before
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let service = PaymentService::new(console);

        for transaction in &self.config.transactions {
            if transaction.processor != ProcessorKind::Paypal {
                tracing::warn!(
                    "Skipping {} transaction: PaymentService only knows PayPal",
                    transaction.processor
                );
                continue;
            }

            service.process_payment(transaction.amount);
            if let Some(refund) = transaction.refund {
                service.refund_payment(refund);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use std::sync::Arc;

    #[test]
    fn test_service_is_hard_wired_to_paypal() {
        let console = MemoryConsole::new();
        let service = PaymentService::new(Arc::new(console.clone()));

        assert!(service.process_payment(100.0));

        assert_eq!(
            console.lines(),
            vec![
                "- Initiating payment of $100.0 using PayPal.",
                "- Verifying payment using PayPal.",
                "- Payment of $100.0 processed successfully.",
            ]
        );
    }
}
