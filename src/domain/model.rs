use crate::utils::error::{Result, TicketError};
use serde::{Deserialize, Serialize};

pub type AccountId = i64;

pub const MIN_TICKETS_PER_REQUEST: i64 = 1;
pub const MAX_TICKETS_PER_REQUEST: i64 = 20;
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;
pub const MAX_REQUESTS_PER_PURCHASE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// A request for N tickets of one category.
///
/// Construction enforces the per-request count range, so an out-of-range
/// value never exists; deserialization funnels through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Result<Self> {
        if !(MIN_TICKETS_PER_REQUEST..=MAX_TICKETS_PER_REQUEST).contains(&count) {
            return Err(TicketError::TicketCountOutOfRange {
                ticket_type,
                requested: count,
            });
        }

        Ok(Self {
            ticket_type,
            count: count as u32,
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Deserialize)]
struct RawTicketRequest {
    ticket_type: TicketType,
    count: i64,
}

impl TryFrom<RawTicketRequest> for TicketTypeRequest {
    type Error = TicketError;

    fn try_from(raw: RawTicketRequest) -> Result<Self> {
        TicketTypeRequest::new(raw.ticket_type, raw.count)
    }
}

/// One purchase as it arrives from a caller. `tickets` stays optional so an
/// absent collection is distinguishable from an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<TicketTypeRequest>>,
}

/// What a validated order amounts to: the sum to charge and the seats to
/// reserve. Infants appear in neither total by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseTotals {
    pub cost: u64,
    pub seats: u32,
}

/// Per-category ticket rates. Business configuration, not business law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPrices {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: 20,
            child: 10,
            infant: 0,
        }
    }
}
