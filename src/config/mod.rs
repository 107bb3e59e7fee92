pub mod toml_config;

use crate::domain::model::{TicketType, TicketTypeRequest};
use crate::utils::error::{Result, TicketError};
#[cfg(feature = "cli")]
use crate::{
    domain::model::{PurchaseOrder, TicketPrices},
    domain::ports::ConfigProvider,
    utils::validation::{validate_url, Validate},
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cinema-tickets")]
#[command(about = "Validate a cinema ticket purchase and book it with the gateways")]
pub struct CliConfig {
    /// Purchasing account; must be positive to pass validation.
    #[arg(long)]
    pub account_id: i64,

    /// Ticket lines in `type:count` form, e.g. `adult:2,child:1`.
    #[arg(long, value_delimiter = ',')]
    pub tickets: Vec<String>,

    #[arg(long, default_value = "20")]
    pub adult_price: u32,

    #[arg(long, default_value = "10")]
    pub child_price: u32,

    #[arg(long, default_value = "0")]
    pub infant_price: u32,

    #[arg(long, default_value = "http://localhost:8080/payments")]
    pub payment_url: String,

    #[arg(long, default_value = "http://localhost:8080/reservations")]
    pub reservation_url: String,

    /// Optional TOML file overriding prices and gateway endpoints.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON objects, one per line")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Builds the purchase order from the raw ticket specs. An omitted
    /// `--tickets` flag is a missing collection, not an empty one.
    pub fn purchase_order(&self) -> Result<PurchaseOrder> {
        if self.tickets.is_empty() {
            return Ok(PurchaseOrder {
                account_id: self.account_id,
                tickets: None,
            });
        }

        let tickets = self
            .tickets
            .iter()
            .map(|spec| parse_ticket_spec(spec))
            .collect::<Result<Vec<_>>>()?;

        Ok(PurchaseOrder {
            account_id: self.account_id,
            tickets: Some(tickets),
        })
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn prices(&self) -> TicketPrices {
        TicketPrices {
            adult: self.adult_price,
            child: self.child_price,
            infant: self.infant_price,
        }
    }

    fn payment_endpoint(&self) -> &str {
        &self.payment_url
    }

    fn reservation_endpoint(&self) -> &str {
        &self.reservation_url
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("payment_url", &self.payment_url)?;
        validate_url("reservation_url", &self.reservation_url)?;
        Ok(())
    }
}

/// Parses one `type:count` ticket line as passed on the command line.
pub fn parse_ticket_spec(spec: &str) -> Result<TicketTypeRequest> {
    let (name, count) = spec.split_once(':').ok_or_else(|| TicketError::ConfigError {
        field: "tickets".to_string(),
        message: format!("expected `type:count`, got `{}`", spec),
    })?;

    let ticket_type = match name.trim().to_ascii_lowercase().as_str() {
        "adult" => TicketType::Adult,
        "child" => TicketType::Child,
        "infant" => TicketType::Infant,
        other => {
            return Err(TicketError::ConfigError {
                field: "tickets".to_string(),
                message: format!("unknown ticket type `{}`", other),
            })
        }
    };

    let count: i64 = count.trim().parse().map_err(|_| TicketError::ConfigError {
        field: "tickets".to_string(),
        message: format!("ticket count is not a number in `{}`", spec),
    })?;

    TicketTypeRequest::new(ticket_type, count)
}
