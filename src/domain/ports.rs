use crate::domain::model::{AccountId, TicketPrices};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Third-party payment collaborator. Called once per valid purchase with the
/// full amount; failures propagate to the caller unchanged.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process_payment(&self, account_id: AccountId, amount: u64) -> Result<()>;
}

/// Third-party seat booking collaborator. Receives the total number of seats
/// to reserve, not individual seats.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn prices(&self) -> TicketPrices;
    fn payment_endpoint(&self) -> &str;
    fn reservation_endpoint(&self) -> &str;
}
