//! The `getAuthorDetails` capability.

use std::sync::Arc;

use mcapability::{
    Capability, CapabilityDefinition, CapabilityError, CapabilityFuture, InvocationContext,
    parse_json_object, required_string,
};
use mupstream::{AnalyticsTransport, AuthorDetailsQuery};

use crate::capabilities::translate::{Operation, describe_upstream_error};
use crate::render::{AuthorProfileView, to_pretty_json};
use crate::schema;

pub const NO_AUTHOR_DETAILS_TEXT: &str = "No author details found for the provided handle.";

/// Looks up profile and activity details for one author handle and renders
/// them as pretty-printed JSON text.
#[derive(Debug, Clone)]
pub struct AuthorDetailsCapability {
    transport: Arc<dyn AnalyticsTransport>,
}

impl AuthorDetailsCapability {
    pub fn new(transport: Arc<dyn AnalyticsTransport>) -> Self {
        Self { transport }
    }

    async fn run(&self, args_json: &str) -> Result<String, CapabilityError> {
        let args = parse_json_object(args_json)?;
        let author_handle = required_string(&args, "author_handle")?;

        let query = AuthorDetailsQuery::new(author_handle);
        let envelope = match self.transport.author_details(query).await {
            Ok(envelope) => envelope,
            Err(error) => return Ok(describe_upstream_error(Operation::AuthorDetails, &error)),
        };

        // A missing envelope and an envelope without a result both mean the
        // upstream had nothing to say about this handle.
        match envelope.and_then(|envelope| envelope.result) {
            Some(details) => to_pretty_json(&AuthorProfileView::from(details))
                .map_err(|err| CapabilityError::execution(err.to_string())),
            None => Ok(NO_AUTHOR_DETAILS_TEXT.to_string()),
        }
    }
}

impl Capability for AuthorDetailsCapability {
    fn definition(&self) -> CapabilityDefinition {
        schema::author_details_definition()
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a InvocationContext,
    ) -> CapabilityFuture<'a, Result<String, CapabilityError>> {
        Box::pin(self.run(args_json))
    }
}
