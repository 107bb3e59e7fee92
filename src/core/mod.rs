pub mod service;

pub use crate::domain::model::{PurchaseOrder, PurchaseTotals, TicketPrices};
pub use crate::domain::ports::{ConfigProvider, PaymentProcessor, SeatReservationService};
pub use crate::utils::error::Result;
