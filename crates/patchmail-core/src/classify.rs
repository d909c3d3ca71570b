use crate::types::RecipientRole;

const TO_MARKERS: &[&str] = &["maintainer", "supporter"];
const CC_MARKERS: &[&str] = &["open list", "subscriber list", "moderated list"];

/// Decides which header a line of `get_maintainer.pl` output belongs to.
///
/// Matching is a plain case-sensitive substring test against the whole line.
/// To markers win over Cc markers; lines matching neither are ignored.
#[must_use]
pub fn classify_line(line: &str) -> Option<RecipientRole> {
    if TO_MARKERS.iter().any(|marker| line.contains(marker)) {
        Some(RecipientRole::To)
    } else if CC_MARKERS.iter().any(|marker| line.contains(marker)) {
        Some(RecipientRole::Cc)
    } else {
        None
    }
}
