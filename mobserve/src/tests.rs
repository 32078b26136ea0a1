use std::time::Duration;

use mcapability::{
    CapabilityCall, CapabilityError, CapabilityRuntimeHooks, InvocationContext, InvocationResult,
};

use crate::{MetricsInvocationHooks, TracingInvocationHooks};

fn sample_call() -> CapabilityCall {
    CapabilityCall {
        id: "call-1".to_string(),
        name: "getAuthorDetails".to_string(),
        arguments: "{}".to_string(),
    }
}

fn sample_context() -> InvocationContext {
    InvocationContext::new("inv-1").with_trace_id("trace-1")
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    let hooks = TracingInvocationHooks;
    let error = CapabilityError::invalid_field("limit", "must be between 1 and 50");

    hooks.on_invocation_start(&sample_call(), &sample_context());
    hooks.on_invocation_success(
        &sample_call(),
        &sample_context(),
        &InvocationResult::new("call-1", "ok"),
        Duration::from_millis(20),
    );
    hooks.on_invocation_failure(
        &sample_call(),
        &sample_context(),
        &error,
        Duration::from_millis(20),
    );
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    let hooks = MetricsInvocationHooks;
    let error = CapabilityError::execution("handler failed");

    hooks.on_invocation_start(&sample_call(), &sample_context());
    hooks.on_invocation_success(
        &sample_call(),
        &sample_context(),
        &InvocationResult::new("call-1", "ok"),
        Duration::from_millis(20),
    );
    hooks.on_invocation_failure(
        &sample_call(),
        &sample_context(),
        &error,
        Duration::from_millis(20),
    );
}
