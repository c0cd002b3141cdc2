use crate::consts::ANCHOR_MARKER;

/// Remove a single leading anchor marker from a chapter id.
pub fn strip_anchor_marker(id: &str) -> &str {
    if id.starts_with(ANCHOR_MARKER) {
        &id[ANCHOR_MARKER.len_utf8()..]
    } else {
        id
    }
}
