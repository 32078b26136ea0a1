//! Capability trait contract for registry-managed handlers.
//!
//! ```rust
//! use mcapability::{Capability, CapabilityDefinition, FunctionCapability};
//!
//! let capability = FunctionCapability::new(
//!     CapabilityDefinition {
//!         name: "echo".to_string(),
//!         description: "Echoes input".to_string(),
//!         input_schema: r#"{"type":"string"}"#.to_string(),
//!     },
//!     |args, _ctx| async move { Ok(args) },
//! );
//!
//! assert_eq!(capability.definition().name, "echo");
//! ```

use std::future::Future;
use std::sync::Arc;

use mcommon::BoxFuture;

use crate::{CapabilityDefinition, CapabilityError, InvocationContext};

pub type CapabilityFuture<'a, T> = BoxFuture<'a, T>;

pub trait Capability: Send + Sync {
    fn definition(&self) -> CapabilityDefinition;

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        context: &'a InvocationContext,
    ) -> CapabilityFuture<'a, Result<String, CapabilityError>>;
}

type CapabilityHandler = dyn Fn(String, InvocationContext) -> CapabilityFuture<'static, Result<String, CapabilityError>>
    + Send
    + Sync;

pub struct FunctionCapability {
    definition: CapabilityDefinition,
    handler: Arc<CapabilityHandler>,
}

impl FunctionCapability {
    pub fn new<F, Fut>(definition: CapabilityDefinition, handler: F) -> Self
    where
        F: Fn(String, InvocationContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, CapabilityError>> + Send + 'static,
    {
        let handler: Arc<CapabilityHandler> =
            Arc::new(move |args_json, context| Box::pin(handler(args_json, context)));

        Self {
            definition,
            handler,
        }
    }
}

impl Capability for FunctionCapability {
    fn definition(&self) -> CapabilityDefinition {
        self.definition.clone()
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        context: &'a InvocationContext,
    ) -> CapabilityFuture<'a, Result<String, CapabilityError>> {
        let args_json = args_json.to_string();
        let context = context.clone();
        (self.handler)(args_json, context)
    }
}
