use serde::{Deserialize, Serialize};

use crate::engine::BalanceObserver;

/// Balance alert thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAlertConfig {
    /// Balances strictly below this value raise `BalanceAlert::Negative`
    #[serde(default = "default_low_watermark")]
    pub low_watermark: i64,

    /// Balances at or above this value raise `BalanceAlert::TooHigh`
    #[serde(default = "default_high_watermark")]
    pub high_watermark: i64,
}

impl Default for BalanceAlertConfig {
    fn default() -> Self {
        Self {
            low_watermark: default_low_watermark(),
            high_watermark: default_high_watermark(),
        }
    }
}

// Default value functions for serde
fn default_low_watermark() -> i64 {
    0
}

fn default_high_watermark() -> i64 {
    6_000
}

impl BalanceAlertConfig {
    /// Load thresholds from `LEDGER_LOW_WATERMARK` / `LEDGER_HIGH_WATERMARK`,
    /// falling back to the defaults for missing or unparsable values
    pub fn with_env_config() -> Self {
        let low_watermark = std::env::var("LEDGER_LOW_WATERMARK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_low_watermark);
        let high_watermark = std::env::var("LEDGER_HIGH_WATERMARK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_high_watermark);

        tracing::info!(
            "Balance alerts configured: low_watermark={}, high_watermark={}",
            low_watermark,
            high_watermark
        );
        Self {
            low_watermark,
            high_watermark,
        }
    }

    /// Classify a balance against the thresholds
    ///
    /// The low check wins when both thresholds would match.
    pub fn check(&self, balance: i64) -> Option<BalanceAlert> {
        if balance < self.low_watermark {
            return Some(BalanceAlert::Negative(balance));
        }
        if balance >= self.high_watermark {
            return Some(BalanceAlert::TooHigh(balance));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceAlert {
    Negative(i64),
    TooHigh(i64),
}

/// Balance observer that logs and records threshold breaches
#[derive(Debug, Clone, Default)]
pub struct BalanceMonitor {
    config: BalanceAlertConfig,
    alerts: Vec<BalanceAlert>,
}

impl BalanceMonitor {
    pub fn new(config: BalanceAlertConfig) -> Self {
        Self {
            config,
            alerts: Vec::new(),
        }
    }

    pub fn config(&self) -> &BalanceAlertConfig {
        &self.config
    }

    /// Alerts raised so far, in notification order
    pub fn alerts(&self) -> &[BalanceAlert] {
        &self.alerts
    }
}

impl BalanceObserver for BalanceMonitor {
    fn balance_changed(&mut self, new_balance: i64) {
        match self.config.check(new_balance) {
            Some(alert @ BalanceAlert::Negative(_)) => {
                tracing::warn!(balance = new_balance, "Balance negative");
                self.alerts.push(alert);
            }
            Some(alert @ BalanceAlert::TooHigh(_)) => {
                tracing::warn!(balance = new_balance, "Balance too high");
                self.alerts.push(alert);
            }
            None => tracing::debug!(balance = new_balance, "Balance changed"),
        }
    }
}
