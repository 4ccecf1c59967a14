//! Stock galaxy with default theming.
//!
//! Run with: `cargo run --example galaxy --release`

use swirl::Visualization;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Visualization::new().run().expect("visualization failed");
}
