//! Capability declaration, call, context, and result types.

use mcommon::{InvocationId, MetadataMap, TraceId};

/// Host-facing declaration of one capability: its name, a human-readable
/// description, and a JSON-schema string the host checks arguments against
/// before dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: String,
}

/// One dispatch request from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub invocation_id: InvocationId,
    pub trace_id: Option<TraceId>,
    pub metadata: MetadataMap,
}

impl InvocationContext {
    pub fn new(invocation_id: impl Into<InvocationId>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            trace_id: None,
            metadata: MetadataMap::new(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub call_id: String,
    pub output: String,
}

impl InvocationResult {
    pub fn new(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            output: output.into(),
        }
    }

    pub fn from_call(call: &CapabilityCall, output: impl Into<String>) -> Self {
        Self::new(call.id.clone(), output)
    }
}
