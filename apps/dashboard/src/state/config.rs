//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FIXHUB_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use fixhub_core::Money;

/// How the store assigns entity ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4.
    #[default]
    Uuid,
    /// Monotonic counter scoped to the store: "1", "2", ...
    Sequential,
}

impl IdStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uuid" => Some(IdStrategy::Uuid),
            "sequential" | "counter" => Some(IdStrategy::Sequential),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the navigation header.
    pub organization_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Separator between whole units and cents (for display).
    pub decimal_separator: char,

    /// Load the demo dataset when the store is built.
    pub seed_demo_data: bool,

    /// Id assignment strategy for new records.
    pub id_strategy: IdStrategy,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Organization: "FixHub"
    /// - Currency: Brazilian real (R$), comma decimals
    /// - Demo data: loaded
    /// - Ids: UUID v4
    fn default() -> Self {
        ConfigState {
            organization_name: "FixHub".to_string(),
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            seed_demo_data: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FIXHUB_ORGANIZATION_NAME`: Override organization name
    /// - `FIXHUB_CURRENCY_SYMBOL`: Override currency symbol
    /// - `FIXHUB_DECIMAL_SEPARATOR`: A single character, e.g. `.`
    /// - `FIXHUB_SEED_DEMO_DATA`: `true`/`false` (also `1`/`0`)
    /// - `FIXHUB_ID_STRATEGY`: `uuid` or `sequential`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("FIXHUB_ORGANIZATION_NAME") {
            config.organization_name = name;
        }

        if let Some(symbol) = lookup("FIXHUB_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(separator) = lookup("FIXHUB_DECIMAL_SEPARATOR") {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.decimal_separator = c,
                _ => warn!(value = %separator, "Ignoring invalid FIXHUB_DECIMAL_SEPARATOR"),
            }
        }

        if let Some(seed) = lookup("FIXHUB_SEED_DEMO_DATA") {
            match parse_bool(&seed) {
                Some(value) => config.seed_demo_data = value,
                None => warn!(value = %seed, "Ignoring invalid FIXHUB_SEED_DEMO_DATA"),
            }
        }

        if let Some(strategy) = lookup("FIXHUB_ID_STRATEGY") {
            match IdStrategy::parse(&strategy) {
                Some(value) => config.id_strategy = value,
                None => warn!(value = %strategy, "Ignoring invalid FIXHUB_ID_STRATEGY"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use fixhub_core::Money;
    /// use fixhub_dashboard::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(8500)), "R$ 85,00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}{}{:02}",
            sign,
            self.currency_symbol,
            amount.major().abs(),
            self.decimal_separator,
            amount.minor()
        )
    }

    /// Formats a derived floating-point price (e.g. purchase unit price).
    pub fn format_unit_price(&self, value: f64) -> String {
        if !value.is_finite() {
            return "-".to_string();
        }
        let sign = if value < 0.0 { "-" } else { "" };
        let digits = format!("{:.2}", value.abs())
            .replace('.', self.decimal_separator.encode_utf8(&mut [0; 4]));
        format!("{}{} {}", sign, self.currency_symbol, digits)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
