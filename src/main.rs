use anyhow::Context;
use cinema_tickets::utils::{logger, validation::Validate};
use cinema_tickets::{
    CliConfig, ConfigProvider, HttpPaymentGateway, HttpSeatReservation, TicketPrices,
    TicketService, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cinema-tickets CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // A TOML file, when given, overrides prices and gateway endpoints.
    let (prices, payment_url, reservation_url): (TicketPrices, String, String) =
        match &config.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)
                    .with_context(|| format!("failed to load config file {}", path))?;
                file.validate()
                    .with_context(|| format!("invalid config file {}", path))?;
                (
                    file.prices(),
                    file.payment_endpoint().to_string(),
                    file.reservation_endpoint().to_string(),
                )
            }
            None => (
                config.prices(),
                config.payment_url.clone(),
                config.reservation_url.clone(),
            ),
        };

    let order = match config.purchase_order() {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Could not read ticket requests: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let payment = HttpPaymentGateway::new(payment_url);
    let seating = HttpSeatReservation::new(reservation_url);
    let service = TicketService::new(prices, payment, seating);

    match service.purchase(&order).await {
        Ok(()) => {
            tracing::info!("Purchase completed for account {}", order.account_id);
            println!("✅ Purchase completed for account {}", order.account_id);
        }
        Err(e) => {
            tracing::error!("Purchase failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
