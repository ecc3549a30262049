//! Opt-in `tracing` setup for hosts embedding the crate.
//!
//! The library itself only emits events through `tracing` macros; it never
//! installs a subscriber on its own. Hosts that want the default console
//! output call [`init_default_tracing`], everyone else wires their own
//! subscriber and filter.

/// Whether the `telemetry` feature was compiled in.
#[must_use]
pub const fn telemetry_compiled() -> bool {
    cfg!(feature = "telemetry")
}

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, defaulting
/// to `info` when the variable is unset.
///
/// Returns `true` on success and `false` when the feature is disabled or a
/// global subscriber is already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
