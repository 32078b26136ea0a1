//! Capability runtime trait and default registry-backed dispatcher.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    CapabilityCall, CapabilityError, CapabilityFuture, CapabilityRegistry, CapabilityRuntimeHooks,
    InvocationContext, InvocationResult, NoopCapabilityRuntimeHooks,
};

pub trait CapabilityRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        call: CapabilityCall,
        context: InvocationContext,
    ) -> CapabilityFuture<'a, Result<InvocationResult, CapabilityError>>;

    /// Dispatches and flattens any failure into its display string. Hosts that
    /// treat capability output as conversational text use this path: nothing
    /// ever escapes the boundary as anything but a string.
    fn execute_to_text<'a>(
        &'a self,
        call: CapabilityCall,
        context: InvocationContext,
    ) -> CapabilityFuture<'a, String> {
        let future = self.execute(call, context);
        Box::pin(async move {
            match future.await {
                Ok(result) => result.output,
                Err(error) => error.to_string(),
            }
        })
    }
}

#[derive(Clone)]
pub struct DefaultCapabilityRuntime {
    registry: Arc<CapabilityRegistry>,
    hooks: Arc<dyn CapabilityRuntimeHooks>,
}

impl Default for DefaultCapabilityRuntime {
    fn default() -> Self {
        Self::new(Arc::new(CapabilityRegistry::new()))
    }
}

impl DefaultCapabilityRuntime {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopCapabilityRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn CapabilityRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> Arc<CapabilityRegistry> {
        Arc::clone(&self.registry)
    }
}

impl CapabilityRuntime for DefaultCapabilityRuntime {
    fn execute<'a>(
        &'a self,
        call: CapabilityCall,
        context: InvocationContext,
    ) -> CapabilityFuture<'a, Result<InvocationResult, CapabilityError>> {
        Box::pin(async move {
            self.hooks.on_invocation_start(&call, &context);
            let started = Instant::now();

            let outcome = match self.registry.get(&call.name) {
                Some(capability) => capability
                    .invoke(&call.arguments, &context)
                    .await
                    .map(|output| InvocationResult::from_call(&call, output))
                    .map_err(|error| error.with_capability(call.name.clone())),
                None => Err(CapabilityError::not_registered(format!(
                    "capability '{}' is not registered",
                    call.name
                ))),
            };

            let elapsed = started.elapsed();
            match &outcome {
                Ok(result) => self
                    .hooks
                    .on_invocation_success(&call, &context, result, elapsed),
                Err(error) => self
                    .hooks
                    .on_invocation_failure(&call, &context, error, elapsed),
            }

            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::{Capability, CapabilityDefinition, CapabilityErrorKind};

    #[derive(Debug)]
    struct EchoCapability;

    impl Capability for EchoCapability {
        fn definition(&self) -> CapabilityDefinition {
            CapabilityDefinition {
                name: "echo".to_string(),
                description: "Echoes arguments".to_string(),
                input_schema: "{\"type\":\"string\"}".to_string(),
            }
        }

        fn invoke<'a>(
            &'a self,
            args_json: &'a str,
            context: &'a InvocationContext,
        ) -> CapabilityFuture<'a, Result<String, CapabilityError>> {
            Box::pin(async move {
                Ok(format!(
                    "invocation={} args={}",
                    context.invocation_id, args_json
                ))
            })
        }
    }

    #[derive(Debug)]
    struct BrokenCapability;

    impl Capability for BrokenCapability {
        fn definition(&self) -> CapabilityDefinition {
            CapabilityDefinition {
                name: "broken".to_string(),
                description: "Always fails".to_string(),
                input_schema: "{\"type\":\"object\"}".to_string(),
            }
        }

        fn invoke<'a>(
            &'a self,
            _args_json: &'a str,
            _context: &'a InvocationContext,
        ) -> CapabilityFuture<'a, Result<String, CapabilityError>> {
            Box::pin(async move { Err(CapabilityError::execution("handler exploded")) })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl CapabilityRuntimeHooks for RecordingHooks {
        fn on_invocation_start(&self, call: &CapabilityCall, _context: &InvocationContext) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{}", call.name));
        }

        fn on_invocation_success(
            &self,
            call: &CapabilityCall,
            _context: &InvocationContext,
            _result: &InvocationResult,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{}", call.name));
        }

        fn on_invocation_failure(
            &self,
            call: &CapabilityCall,
            _context: &InvocationContext,
            error: &CapabilityError,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{}:{:?}", call.name, error.kind));
        }
    }

    fn call(name: &str, arguments: &str) -> CapabilityCall {
        CapabilityCall {
            id: format!("call_{name}"),
            name: name.to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[tokio::test]
    async fn runtime_executes_registered_capability() {
        let mut registry = CapabilityRegistry::new();
        registry.register(EchoCapability);
        let runtime = DefaultCapabilityRuntime::new(Arc::new(registry));

        let result = runtime
            .execute(call("echo", "hello"), InvocationContext::new("inv-1"))
            .await
            .expect("execution should succeed");

        assert_eq!(result.call_id, "call_echo");
        assert_eq!(result.output, "invocation=inv-1 args=hello");
    }

    #[tokio::test]
    async fn runtime_reports_unknown_capability() {
        let runtime = DefaultCapabilityRuntime::default();

        let error = runtime
            .execute(call("missing", "{}"), InvocationContext::new("inv-2"))
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, CapabilityErrorKind::NotRegistered);
    }

    #[tokio::test]
    async fn runtime_tags_handler_errors_with_capability_name() {
        let mut registry = CapabilityRegistry::new();
        registry.register(BrokenCapability);
        let runtime = DefaultCapabilityRuntime::new(Arc::new(registry));

        let error = runtime
            .execute(call("broken", "{}"), InvocationContext::new("inv-3"))
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, CapabilityErrorKind::Execution);
        assert_eq!(error.capability.as_deref(), Some("broken"));
        assert_eq!(error.message, "handler exploded");
    }

    #[tokio::test]
    async fn execute_to_text_flattens_errors_into_strings() {
        let mut registry = CapabilityRegistry::new();
        registry.register(BrokenCapability);
        let runtime = DefaultCapabilityRuntime::new(Arc::new(registry));

        let text = runtime
            .execute_to_text(call("broken", "{}"), InvocationContext::new("inv-4"))
            .await;

        assert!(text.contains("handler exploded"));
    }

    #[tokio::test]
    async fn hooks_observe_success_and_failure() {
        let hooks = Arc::new(RecordingHooks::default());
        let mut registry = CapabilityRegistry::new();
        registry.register(EchoCapability);
        registry.register(BrokenCapability);
        let runtime =
            DefaultCapabilityRuntime::new(Arc::new(registry)).with_hooks(hooks.clone());

        runtime
            .execute(call("echo", "hi"), InvocationContext::new("inv-5"))
            .await
            .expect("echo should succeed");
        runtime
            .execute(call("broken", "{}"), InvocationContext::new("inv-6"))
            .await
            .expect_err("broken should fail");

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:echo".to_string(),
                "success:echo".to_string(),
                "start:broken".to_string(),
                "failure:broken:Execution".to_string(),
            ]
        );
    }

    #[test]
    fn registry_tracks_registered_capabilities() {
        let mut registry = CapabilityRegistry::new();
        assert!(registry.is_empty());

        registry.register(EchoCapability);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("echo"));
        assert_eq!(registry.definitions().len(), 1);

        let removed = registry.remove("echo");
        assert!(removed.is_some());
        assert!(registry.is_empty());
    }
}
