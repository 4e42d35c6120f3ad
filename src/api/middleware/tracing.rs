//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, HttpMakeClassifier, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for engine requests.
///
/// Opens an `INFO` span per request (method, URI, version), notes the
/// request start at `DEBUG`, and logs the response status with its latency
/// in milliseconds at `INFO`. Misses show up as `status=404` on the same span.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/ib/underlyings/1/edit version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// INFO request{method=TRACE uri=/ib/underlyings version=HTTP/1.1}: finished processing request latency=0 ms status=404
/// ```
pub fn layer() -> TraceLayer<HttpMakeClassifier> {
    let span = DefaultMakeSpan::new().level(Level::INFO);
    let on_request = DefaultOnRequest::new().level(Level::DEBUG);
    let on_response = DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis);

    TraceLayer::new_for_http()
        .make_span_with(span)
        .on_request(on_request)
        .on_response(on_response)
}
