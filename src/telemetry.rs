//! Telemetry helpers for hosts embedding `ohlc-chart`.
//!
//! The engine only emits `tracing` events (dataset filtering, rejected
//! viewport updates, skipped draws). Installing a subscriber is left to the
//! host, either through the helpers below or its own setup.

/// Installs a compact `fmt` subscriber filtered at `info`, unless `RUST_LOG` says otherwise.
///
/// See [`init_tracing_with_default_filter`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// `default_directive` is used when `RUST_LOG` is unset or unparsable, e.g.
/// `"ohlc_chart=debug"` to surface viewport and dataset diagnostics.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_tracing_with_default_filter(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
