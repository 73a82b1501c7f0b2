use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::{Result, SolidError};

/// One interface for every kind of order.
pub trait Order {
    fn place_order(&self);
    fn process_payment(&self);
    /// Not applicable to in-store orders.
    fn deliver_to_customer(&self) -> Result<()>;
    /// Not applicable to in-store orders.
    fn send_email_receipt(&self) -> Result<()>;
}

pub struct OnlineOrder {
    console: SharedConsole,
}

impl OnlineOrder {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl Order for OnlineOrder {
    fn place_order(&self) {
        self.console.print("- Order placed online");
    }

    fn process_payment(&self) {
        self.console.print("- Payment processed online");
    }

    fn deliver_to_customer(&self) -> Result<()> {
        self.console.print("- Order delivered to customer");
        Ok(())
    }

    fn send_email_receipt(&self) -> Result<()> {
        self.console.print("- Email receipt sent to customer");
        Ok(())
    }
}

pub struct InStoreOrder {
    console: SharedConsole,
}

impl InStoreOrder {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl Order for InStoreOrder {
    fn place_order(&self) {
        self.console.print("- Order placed in store");
    }

    fn process_payment(&self) {
        self.console.print("- Payment processed at counter");
    }

    // Picked up at the counter; there is nothing to deliver.
    fn deliver_to_customer(&self) -> Result<()> {
        Err(SolidError::UnsupportedOperation {
            order: "In-store order",
            operation: "delivery to customer",
        })
    }

    // Receipts are printed at the counter.
    fn send_email_receipt(&self) -> Result<()> {
        Err(SolidError::UnsupportedOperation {
            order: "In-store order",
            operation: "email receipts",
        })
    }
}

pub struct OrdersDemo;

impl Demo for OrdersDemo {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn variant(&self) -> Variant {
        Variant::Before
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        console.blank_line();
        console.print("Online order:");
        let online_order = OnlineOrder::new(console.clone());
        online_order.place_order();
        online_order.process_payment();
        online_order.deliver_to_customer()?;
        online_order.send_email_receipt()?;

        console.blank_line();
        console.print("In store order:");
        let in_store_order = InStoreOrder::new(console.clone());
        in_store_order.place_order();
        in_store_order.process_payment();
        // deliver_to_customer and send_email_receipt compile here but always fail.

        Ok(())
    }
}
