use tracing::{Level, Span};

use super::TraceId;


/// Root span for a request (one booking attempt, one filter pass, ...).
pub fn root_span(op: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(Level::INFO, "request", op, trace_id = %trace_id)
}
