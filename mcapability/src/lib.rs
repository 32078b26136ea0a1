//! Capability layer for registering and dispatching host-callable operations.

mod args;
mod capability;
mod error;
mod hooks;
mod registry;
mod runtime;
mod types;

pub mod prelude {
    pub use crate::{
        Capability, CapabilityCall, CapabilityDefinition, CapabilityError, CapabilityErrorKind,
        CapabilityFuture, CapabilityRegistry, CapabilityRuntime, CapabilityRuntimeHooks,
        DefaultCapabilityRuntime, InvocationContext, InvocationResult,
        NoopCapabilityRuntimeHooks,
    };
}

pub use args::{
    optional_integer_in_range, optional_string, parse_json_object, parse_json_value,
    required_string,
};
pub use capability::{Capability, CapabilityFuture, FunctionCapability};
pub use error::{CapabilityError, CapabilityErrorKind};
pub use hooks::{CapabilityRuntimeHooks, NoopCapabilityRuntimeHooks};
pub use registry::CapabilityRegistry;
pub use runtime::{CapabilityRuntime, DefaultCapabilityRuntime};
pub use types::{CapabilityCall, CapabilityDefinition, InvocationContext, InvocationResult};
