//! Capability registry for lookup by declared capability name.
//!
//! The registry is a plain value: callers construct it, register handlers into
//! it, and hand the finished registry to whatever serves the host. Nothing is
//! registered as a side effect of crate initialization.

use std::future::Future;
use std::sync::Arc;

use mcommon::Registry;

use crate::{
    Capability, CapabilityDefinition, CapabilityError, FunctionCapability, InvocationContext,
};

#[derive(Default)]
pub struct CapabilityRegistry {
    capabilities: Registry<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C>(&mut self, capability: C)
    where
        C: Capability + 'static,
    {
        let name = capability.definition().name;
        self.capabilities.insert(name, Arc::new(capability));
    }

    pub fn register_fn<F, Fut>(&mut self, definition: CapabilityDefinition, handler: F)
    where
        F: Fn(String, InvocationContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, CapabilityError>> + Send + 'static,
    {
        self.register(FunctionCapability::new(definition, handler));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.remove(name)
    }

    pub fn definitions(&self) -> Vec<CapabilityDefinition> {
        self.capabilities
            .values()
            .map(|capability| capability.definition())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_fn_wraps_a_closure_backed_capability() {
        let mut registry = CapabilityRegistry::new();
        registry.register_fn(
            CapabilityDefinition {
                name: "echo".to_string(),
                description: "Echoes arguments".to_string(),
                input_schema: "{\"type\":\"string\"}".to_string(),
            },
            |args_json, context| async move {
                Ok(format!("invocation={} args={args_json}", context.invocation_id))
            },
        );

        let capability = registry.get("echo").expect("capability should be registered");
        assert_eq!(capability.definition().name, "echo");

        let output = capability
            .invoke("hello", &InvocationContext::new("inv-1"))
            .await
            .expect("invocation should succeed");
        assert_eq!(output, "invocation=inv-1 args=hello");
    }
}
