//! End-to-end demo: traverse a three-point route and print each emitted
//! position.
//!
//! The speed is exaggerated and the tick shortened so the run finishes in a
//! few seconds; a real deployment uses the default 1 s tick and a plausible
//! speed, and forwards emissions to a platform location provider instead of
//! stdout.
//!
//! ```sh
//! cargo run -p wp-sim --example follow_route
//! ```

use std::sync::Arc;
use std::time::Duration;

use wp_core::GeoPoint;
use wp_route::Path;
use wp_sim::{LocationSink, MovementScheduler, SchedulerConfig, SinkError};

struct StdoutSink;

impl LocationSink for StdoutSink {
    fn emit(&self, position: GeoPoint, timestamp_ms: u64, is_final: bool) -> Result<(), SinkError> {
        let marker = if is_final { "  <- arrived" } else { "" };
        println!("[{timestamp_ms}] {position}{marker}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Taipei Main Station → Taipei 101 → Songshan Airport.
    let route = Path::from_points(vec![
        GeoPoint::new(25.0478, 121.5170),
        GeoPoint::new(25.0340, 121.5645),
        GeoPoint::new(25.0697, 121.5525),
    ]);

    let scheduler = MovementScheduler::new(Arc::new(StdoutSink)).with_config(SchedulerConfig {
        tick_period: Duration::from_millis(200),
    });

    let handle = scheduler.start(&route, 3_600.0)?; // ~1 km/s, demo pace
    let status = handle.wait().await?;
    println!("session finished: {status}");
    Ok(())
}
