//! Common test utilities and logging infrastructure
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=dynamic_color::hex=trace` - Include parse cache hits
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing
//!
//! Not every test binary uses every helper.

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dynamic_color::Color;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent. `log` records emitted by the library are bridged into the
/// tracing subscriber, so hex fallbacks show up at debug level.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("dynamic_color=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_thread_ids(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Log test context information.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

/// The brick red used throughout the original adjustment fixtures.
pub fn brick() -> Color {
    Color::from_hex(0x00c0_392b)
}

/// The olive green used by the serialization fixtures.
pub fn olive() -> Color {
    Color::from_hex(0x0076_9a2b)
}

/// The primaries plus black, with their expected hex forms.
pub fn primaries() -> [(Color, &'static str, u32); 5] {
    [
        (Color::RED, "#ff0000", 0x00ff_0000),
        (Color::BLUE, "#0000ff", 0x0000_00ff),
        (Color::GREEN, "#00ff00", 0x0000_ff00),
        (Color::YELLOW, "#ffff00", 0x00ff_ff00),
        (Color::BLACK, "#000000", 0x0000_0000),
    ]
}
