use crate::domain::model::{
    AccountId, TicketType, TicketTypeRequest, MAX_REQUESTS_PER_PURCHASE, MAX_TICKETS_PER_PURCHASE,
    MAX_TICKETS_PER_REQUEST, MIN_TICKETS_PER_REQUEST,
};
use thiserror::Error;

/// Why a structurally well-formed purchase order was refused.
///
/// Carried inside [`TicketError::InvalidPurchase`] together with the account
/// and a snapshot of the offending requests; the numbers here are for logs
/// and operators, not for programmatic dispatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRejection {
    #[error("account id {0} is not positive")]
    AccountIdNotPositive(AccountId),

    #[error("order contains no ticket requests")]
    EmptyOrder,

    #[error("order has {0} ticket requests, at most {max} are allowed", max = MAX_REQUESTS_PER_PURCHASE)]
    TooManyRequests(usize),

    #[error("order totals {0} tickets, at most {max} can be bought at once", max = MAX_TICKETS_PER_PURCHASE)]
    TooManyTickets(u32),

    #[error("at least one adult ticket is required")]
    NoAdultTicket,

    #[error("{infants} infants cannot sit on {adults} adult laps")]
    InfantsExceedAdults { infants: u32, adults: u32 },
}

#[derive(Error, Debug)]
pub enum TicketError {
    /// The ticket collection itself was absent from the order. Distinct from
    /// every business-rule violation and reported before any rule runs.
    #[error("no ticket requests were supplied")]
    MissingRequests,

    #[error("invalid purchase for account {account_id}: {reason}")]
    InvalidPurchase {
        account_id: AccountId,
        reason: PurchaseRejection,
        requests: Vec<TicketTypeRequest>,
    },

    #[error(
        "cannot request {requested} {ticket_type:?} tickets, allowed count is {min}..={max}",
        min = MIN_TICKETS_PER_REQUEST,
        max = MAX_TICKETS_PER_REQUEST
    )]
    TicketCountOutOfRange {
        ticket_type: TicketType,
        requested: i64,
    },

    #[error("configuration error: {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("gateway request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TicketError>;
