use crate::domain::model::TicketPrices;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceInfo,
    #[serde(default)]
    pub pricing: PricingConfig,
    pub gateways: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let prices = TicketPrices::default();
        Self {
            adult: prices.adult,
            child: prices.child,
            infant: prices.infant,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub payment_url: String,
    pub reservation_url: String,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TicketError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment variables.
    /// Unknown variables are left in place so the parse error names them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_url("gateways.payment_url", &self.gateways.payment_url)?;
        validate_url("gateways.reservation_url", &self.gateways.reservation_url)?;
        validate_range("pricing.adult", self.pricing.adult, 0, 10_000)?;
        validate_range("pricing.child", self.pricing.child, 0, 10_000)?;
        validate_range("pricing.infant", self.pricing.infant, 0, 10_000)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn prices(&self) -> TicketPrices {
        TicketPrices {
            adult: self.pricing.adult,
            child: self.pricing.child,
            infant: self.pricing.infant,
        }
    }

    fn payment_endpoint(&self) -> &str {
        &self.gateways.payment_url
    }

    fn reservation_endpoint(&self) -> &str {
        &self.gateways.reservation_url
    }
}
