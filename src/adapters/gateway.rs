use crate::domain::model::AccountId;
use crate::domain::ports::{PaymentProcessor, SeatReservationService};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Payment collaborator reached over HTTP. One JSON body per purchase; any
/// non-2xx status fails the call.
#[derive(Debug, Clone)]
pub struct HttpPaymentGateway {
    endpoint: String,
    client: Client,
}

impl HttpPaymentGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for HttpPaymentGateway {
    async fn process_payment(&self, account_id: AccountId, amount: u64) -> Result<()> {
        tracing::debug!(account_id, amount, endpoint = %self.endpoint, "requesting payment");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "account_id": account_id,
                "amount": amount,
            }))
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "payment gateway response");
        response.error_for_status()?;
        Ok(())
    }
}

/// Seat booking collaborator reached over HTTP. Receives the seat total for
/// the whole purchase, not individual seats.
#[derive(Debug, Clone)]
pub struct HttpSeatReservation {
    endpoint: String,
    client: Client,
}

impl HttpSeatReservation {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SeatReservationService for HttpSeatReservation {
    async fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<()> {
        tracing::debug!(account_id, seat_count, endpoint = %self.endpoint, "reserving seats");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "account_id": account_id,
                "seats": seat_count,
            }))
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "reservation service response");
        response.error_for_status()?;
        Ok(())
    }
}
