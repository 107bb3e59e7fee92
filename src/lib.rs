pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::gateway::{HttpPaymentGateway, HttpSeatReservation};
pub use config::toml_config::TomlConfig;
pub use core::service::TicketService;
pub use domain::model::{
    AccountId, PurchaseOrder, PurchaseTotals, TicketPrices, TicketType, TicketTypeRequest,
};
pub use domain::ports::{ConfigProvider, PaymentProcessor, SeatReservationService};
pub use utils::error::{PurchaseRejection, Result, TicketError};
