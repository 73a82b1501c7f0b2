//! Interface Segregation: online and in-store orders.
//!
//! [`before::Order`] forces delivery and e-mail receipts onto in-store orders,
//! which can only refuse at runtime. [`after`] moves those operations into
//! [`after::OnlineOrderFeatures`], implemented only where they make sense.

pub mod after;
pub mod before;
