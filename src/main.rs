use stock_ledger::{BalanceAlertConfig, BalanceMonitor, Ledger, LedgerError, Order, RejectionCollector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        tracing::error!("❌ Ledger run failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LedgerError> {
    let monitor = BalanceMonitor::new(BalanceAlertConfig::with_env_config());
    let mut ledger = Ledger::new(monitor);
    ledger.set_balance(5_000);
    ledger.set_inventory("FOOGL", 1_000)?;
    ledger.set_inventory("PAPL", 2_000)?;

    tracing::info!("📒 Initial ledger: {}", ledger.snapshot());

    let orders = vec![
        Order::sell(200, "FOOGL", 12),
        Order::buy(1_500, "PAPL", 12),
        Order::buy(3_000, "FOOGL", 666),
    ];

    let mut rejected = RejectionCollector::new();
    let report = ledger.process(&orders, &mut rejected)?;

    tracing::info!(
        "✅ Processed {} orders: {} accepted, {} rejected",
        report.total(),
        report.accepted,
        report.rejected
    );

    let snapshot = ledger.snapshot();
    tracing::info!("📒 Final ledger: {}", snapshot);
    match snapshot.to_json() {
        Ok(json) => tracing::debug!("Final ledger JSON: {}", json),
        Err(e) => tracing::warn!("⚠️  Could not serialize ledger snapshot: {}", e),
    }

    for (account_id, orders) in rejected.by_account() {
        let orders: Vec<String> = orders.iter().map(Order::to_string).collect();
        tracing::info!("🚫 Rejected orders for account {}: [{}]", account_id, orders.join(", "));
    }

    Ok(())
}
