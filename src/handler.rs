//! Handler value types.
//!
//! Bindings carry an opaque handler so a host can wire mounted routers into
//! whatever server it runs. Dispatching requests to these handlers is the
//! host's job; this crate only stores and enumerates them.

use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Request view a host hands to a handler.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    pub method: Method,
    /// Full request path as the host matched it.
    pub path: String,
    /// Parsed JSON body, if the host chose to parse one.
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Value,
}

/// Shared handler callback stored inside a binding.
pub type Handler = Arc<dyn Fn(HandlerRequest) -> HandlerResponse + Send + Sync>;

/// Stock handler that echoes the request back as JSON.
pub fn echo_handler(req: HandlerRequest) -> HandlerResponse {
    HandlerResponse {
        status: 200,
        body: serde_json::json!({
            "method": req.method.to_string(),
            "path": req.path,
            "body": req.body,
        }),
    }
}
