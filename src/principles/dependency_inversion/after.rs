use super::{format_amount, ProcessorKind};
use crate::config::toml_config::PaymentsConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::Result;

/// The abstraction both the service and the concrete processors depend on.
pub trait PaymentProcessor {
    fn initiate_payment(&self, amount: f64);
    fn verify_payment(&self) -> bool;
    fn refund_payment(&self, amount: f64);
}

impl<P: PaymentProcessor + ?Sized> PaymentProcessor for Box<P> {
    fn initiate_payment(&self, amount: f64) {
        (**self).initiate_payment(amount)
    }

    fn verify_payment(&self) -> bool {
        (**self).verify_payment()
    }

    fn refund_payment(&self, amount: f64) {
        (**self).refund_payment(amount)
    }
}

pub struct PayPalPaymentProcessor {
    console: SharedConsole,
}

impl PayPalPaymentProcessor {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for PayPalPaymentProcessor {
    fn initiate_payment(&self, amount: f64) {
        self.console.print(&format!(
            "- Initiating payment of {} using PayPal.",
            format_amount(amount)
        ));
    }

    fn verify_payment(&self) -> bool {
        self.console.print("- Verifying payment using PayPal.");
        true
    }

    fn refund_payment(&self, amount: f64) {
        self.console
            .print(&format!("- Refunding {} using PayPal.", format_amount(amount)));
    }
}

pub struct StripePaymentProcessor {
    console: SharedConsole,
}

impl StripePaymentProcessor {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for StripePaymentProcessor {
    fn initiate_payment(&self, amount: f64) {
        self.console.print(&format!(
            "- Initiating payment of {} using Stripe.",
            format_amount(amount)
        ));
    }

    fn verify_payment(&self) -> bool {
        self.console.print("- Verifying payment using Stripe.");
        true
    }

    fn refund_payment(&self, amount: f64) {
        self.console
            .print(&format!("- Refunding {} using Stripe.", format_amount(amount)));
    }
}

/// Picks the concrete processor on behalf of the caller.
pub fn processor_for(kind: ProcessorKind, console: SharedConsole) -> Box<dyn PaymentProcessor> {
    match kind {
        ProcessorKind::Paypal => Box::new(PayPalPaymentProcessor::new(console)),
        ProcessorKind::Stripe => Box::new(StripePaymentProcessor::new(console)),
    }
}

pub struct PaymentService<P: PaymentProcessor> {
    processor: P,
    console: SharedConsole,
}

impl<P: PaymentProcessor> PaymentService<P> {
    pub fn new(processor: P, console: SharedConsole) -> Self {
        Self { processor, console }
    }

    /// Initiates then verifies. Returns whether verification succeeded.
    pub fn process_payment(&self, amount: f64) -> bool {
        self.processor.initiate_payment(amount);
        let verified = self.processor.verify_payment();
        if verified {
            self.console.print(&format!(
                "- Payment of {} processed successfully.",
                format_amount(amount)
            ));
        } else {
            tracing::warn!("Payment of {} was not verified", format_amount(amount));
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
        Variant::After
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        for transaction in &self.config.transactions {
            tracing::debug!("Injecting {} processor", transaction.processor);
            let processor = processor_for(transaction.processor, console.clone());
            let service = PaymentService::new(processor, console.clone());

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

    struct DecliningProcessor {
        console: SharedConsole,
    }

    impl PaymentProcessor for DecliningProcessor {
        fn initiate_payment(&self, amount: f64) {
            self.console.print(&format!("- Initiating {}", format_amount(amount)));
        }

        fn verify_payment(&self) -> bool {
            self.console.print("- Verifying");
            false
        }

        fn refund_payment(&self, _amount: f64) {}
    }

    #[test]
    fn test_process_payment_with_paypal() {
        let console = MemoryConsole::new();
        let shared: SharedConsole = Arc::new(console.clone());
        let service = PaymentService::new(PayPalPaymentProcessor::new(shared.clone()), shared);

        assert!(service.process_payment(100.0));
        service.refund_payment(80.0);

        assert_eq!(
            console.lines(),
            vec![
                "- Initiating payment of $100.0 using PayPal.",
                "- Verifying payment using PayPal.",
                "- Payment of $100.0 processed successfully.",
                "- Refunding $80.0 using PayPal.",
            ]
        );
    }

    #[test]
    fn test_failed_verification_skips_success_message() {
        let console = MemoryConsole::new();
        let shared: SharedConsole = Arc::new(console.clone());
        let service = PaymentService::new(
            DecliningProcessor {
                console: shared.clone(),
            },
            shared,
        );

        assert!(!service.process_payment(10.0));
        assert_eq!(console.lines(), vec!["- Initiating $10.0", "- Verifying"]);
    }

    #[test]
    fn test_processor_for_selects_variant() {
        let console = MemoryConsole::new();
        let shared: SharedConsole = Arc::new(console.clone());
        let service = PaymentService::new(
            processor_for(ProcessorKind::Stripe, shared.clone()),
            shared,
        );

        service.refund_payment(75.0);

        assert_eq!(console.lines(), vec!["- Refunding $75.0 using Stripe."]);
    }
}
