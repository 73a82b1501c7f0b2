use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::Result;

/// Operations every order supports.
pub trait Order {
    fn place_order(&self);
    fn process_payment(&self);
}

/// Operations only orders placed online support.
pub trait OnlineOrderFeatures {
    fn deliver_to_customer(&self);
    fn send_email_receipt(&self);
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
}

impl OnlineOrderFeatures for OnlineOrder {
    fn deliver_to_customer(&self) {
        self.console.print("- Order delivered to customer");
    }

    fn send_email_receipt(&self) {
        self.console.print("- Email receipt sent to customer");
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
        self.console.print("- Payment processed at the counter");
    }
}

/// Runs an order from placement through delivery and receipt.
///
/// Only orders with [`OnlineOrderFeatures`] are accepted, so an in-store order
/// does not compile here:
///
/// ```compile_fail
/// use solid_principles::adapters::StdoutConsole;
/// use solid_principles::principles::interface_segregation::after::{
///     complete_online_order, InStoreOrder,
/// };
///
/// complete_online_order(&InStoreOrder::new(StdoutConsole::shared()));
/// ```
pub fn complete_online_order<O>(order: &O)
where
    O: Order + OnlineOrderFeatures + ?Sized,
{
    order.place_order();
    order.process_payment();
    order.deliver_to_customer();
    order.send_email_receipt();
}

pub struct OrdersDemo;

impl Demo for OrdersDemo {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn variant(&self) -> Variant {
        Variant::After
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        console.blank_line();
        console.print("Online order:");
        complete_online_order(&OnlineOrder::new(console.clone()));

        console.blank_line();
        console.print("In store order:");
        let in_store_order = InStoreOrder::new(console.clone());
        in_store_order.place_order();
        in_store_order.process_payment();

        Ok(())
    }
}
