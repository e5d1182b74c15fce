//! Full pipeline demo: generate, sort out-of-line, grow on a timer, and
//! log every event.
//!
//! Run with: `cargo run --example grow_and_sort --features logging`

use std::sync::Arc;
use std::time::Duration;

use growsort::{Bus, GrowthScheduler, LogWriter, RunConfig, Subscribe, SubscriberSet};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = RunConfig {
        size: 50_000,
        interval: Duration::from_millis(50),
        max_ticks: 10,
        ..RunConfig::default()
    };
    let bus = Bus::new(cfg.bus_capacity);

    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    SubscriberSet::attach(Arc::new(SubscriberSet::new(subs)), &bus);

    let mut scheduler = GrowthScheduler::new(cfg, bus);
    let report = scheduler.run().await?;

    println!(
        "sorted {} items in {} ms (final attempt {} ms, {} growth ticks, avg regrow {} ms)",
        report.items.len(),
        report.total_ms,
        report.final_sort_ms,
        report.ticks,
        report.avg_regrow_ms,
    );
    Ok(())
}
