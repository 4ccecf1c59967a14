//! Host-style theme record with custom galaxy parameters.
//!
//! Run with: `cargo run --example themed --release`

use swirl::{Color, GalaxyParams, Visualization};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let params = GalaxyParams::default()
        .with_branches(5)
        .with_spin(1.4)
        .with_colors(
            Color::parse("#ffd166").expect("valid color"),
            Color::parse("#118ab2").expect("valid color"),
        );

    Visualization::new()
        .with_theme_json(r##"{"threejs":{"backgroundColor":"#0b132b"}}"##)
        .with_params(params)
        .with_title("Galaxy (themed)")
        .run()
        .expect("visualization failed");
}
