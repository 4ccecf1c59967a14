//! Transparent surface plus a timed teardown through the lifecycle handle.
//!
//! Run with: `cargo run --example transparent --release`

use std::thread;
use std::time::Duration;

use swirl::Visualization;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Visualization::new()
        .with_theme("transparent")
        .with_title("Galaxy (transparent, disposes after 30s)")
        .run_with(|handle| {
            thread::spawn(move || {
                thread::sleep(Duration::from_secs(30));
                handle.dispose();
            });
        })
        .expect("visualization failed");
}
