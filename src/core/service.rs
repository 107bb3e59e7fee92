use crate::domain::model::{
    AccountId, PurchaseOrder, PurchaseTotals, TicketPrices, TicketType, TicketTypeRequest,
    MAX_REQUESTS_PER_PURCHASE, MAX_TICKETS_PER_PURCHASE,
};
use crate::domain::ports::{PaymentProcessor, SeatReservationService};
use crate::utils::error::{PurchaseRejection, Result, TicketError};

/// Validates purchase orders and, when they pass, charges the payment
/// collaborator and books seats with the reservation collaborator.
///
/// One instance holds only the pricing table and the two ports; every call
/// is independent.
pub struct TicketService<P: PaymentProcessor, S: SeatReservationService> {
    prices: TicketPrices,
    payment: P,
    seating: S,
}

impl<P: PaymentProcessor, S: SeatReservationService> TicketService<P, S> {
    pub fn new(prices: TicketPrices, payment: P, seating: S) -> Self {
        Self {
            prices,
            payment,
            seating,
        }
    }

    /// Runs one purchase as received from a caller. An order without a
    /// ticket collection is refused before any business rule runs, with a
    /// different error than a rule violation.
    pub async fn purchase(&self, order: &PurchaseOrder) -> Result<()> {
        let tickets = order
            .tickets
            .as_deref()
            .ok_or(TicketError::MissingRequests)?;
        self.purchase_tickets(order.account_id, tickets).await
    }

    /// Validates the request set, then pays and reserves in that order.
    /// Neither collaborator is called unless every rule holds. Payment must
    /// be confirmed before the reservation is attempted; there is no
    /// compensating action if the reservation then fails.
    pub async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<()> {
        self.validate(account_id, requests)?;

        let totals = self.totals(requests);
        tracing::debug!(
            account_id,
            cost = totals.cost,
            seats = totals.seats,
            "purchase request validated"
        );

        self.payment.process_payment(account_id, totals.cost).await?;
        self.seating.reserve_seats(account_id, totals.seats).await?;

        tracing::info!(
            account_id,
            cost = totals.cost,
            seats = totals.seats,
            "purchase completed"
        );
        Ok(())
    }

    fn validate(&self, account_id: AccountId, requests: &[TicketTypeRequest]) -> Result<()> {
        if account_id <= 0 {
            return Err(rejected(
                account_id,
                requests,
                PurchaseRejection::AccountIdNotPositive(account_id),
            ));
        }

        if requests.is_empty() {
            return Err(rejected(account_id, requests, PurchaseRejection::EmptyOrder));
        }
        if requests.len() > MAX_REQUESTS_PER_PURCHASE {
            return Err(rejected(
                account_id,
                requests,
                PurchaseRejection::TooManyRequests(requests.len()),
            ));
        }

        let total: u32 = requests.iter().map(TicketTypeRequest::count).sum();
        if total > MAX_TICKETS_PER_PURCHASE {
            return Err(rejected(
                account_id,
                requests,
                PurchaseRejection::TooManyTickets(total),
            ));
        }

        let adults = count_of(requests, TicketType::Adult);
        let infants = count_of(requests, TicketType::Infant);
        if adults == 0 {
            return Err(rejected(
                account_id,
                requests,
                PurchaseRejection::NoAdultTicket,
            ));
        }
        // One infant per adult lap; infants never get their own seat.
        if infants > adults {
            return Err(rejected(
                account_id,
                requests,
                PurchaseRejection::InfantsExceedAdults { infants, adults },
            ));
        }

        Ok(())
    }

    fn totals(&self, requests: &[TicketTypeRequest]) -> PurchaseTotals {
        let mut cost = 0u64;
        let mut seats = 0u32;

        for request in requests {
            let count = request.count();
            match request.ticket_type() {
                TicketType::Adult => {
                    cost += u64::from(self.prices.adult) * u64::from(count);
                    seats += count;
                }
                TicketType::Child => {
                    cost += u64::from(self.prices.child) * u64::from(count);
                    seats += count;
                }
                TicketType::Infant => {
                    // Lap-seated: charged at the configured infant rate
                    // (zero by default), no seat reserved.
                    cost += u64::from(self.prices.infant) * u64::from(count);
                }
            }
        }

        PurchaseTotals { cost, seats }
    }
}

fn count_of(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u32 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == ticket_type)
        .map(TicketTypeRequest::count)
        .sum()
}

fn rejected(
    account_id: AccountId,
    requests: &[TicketTypeRequest],
    reason: PurchaseRejection,
) -> TicketError {
    TicketError::InvalidPurchase {
        account_id,
        reason,
        requests: requests.to_vec(),
    }
}
