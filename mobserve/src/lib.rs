//! Observability hooks for capability invocations.
//!
//! Core crates stay silent; hosts that want telemetry attach one of these hook
//! implementations to the runtime instead.

mod metrics_hooks;
mod tracing_hooks;

#[cfg(test)]
mod tests;

pub use metrics_hooks::MetricsInvocationHooks;
pub use tracing_hooks::TracingInvocationHooks;
