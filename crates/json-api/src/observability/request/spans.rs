//! HTTP span naming and route labels.

use uuid::Uuid;

const ID_PLACEHOLDER: &str = "{id}";

/// Collection segments whose next segment is a resource id.
const COLLECTIONS: &[&str] = &["products"];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Replace id segments so spans and metric labels stay low-cardinality.
fn normalise_route(path: &str) -> String {
    let mut previous = "";

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            let is_id = COLLECTIONS.contains(&previous) || Uuid::parse_str(segment).is_ok();

            previous = segment;

            if is_id && !segment.is_empty() {
                ID_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
