//! Single-line alert titles with trailing tag elision

use crate::event::{NotificationEvents, TriggerData};
use crate::text::char_len;

/// Marks that one or more trailing tags were dropped
pub const TAG_ELLIPSIS: &str = "....";

/// `<state> <name> <tags> (<count>)`, eliding trailing tags past `limit`
pub fn compose_title(events: &NotificationEvents, trigger: &TriggerData, limit: usize) -> String {
    let subject = events
        .subject_state()
        .map(|s| s.as_str())
        .unwrap_or_default();
    let title = format!(
        "{} {} {} ({})",
        subject,
        trigger.name,
        trigger.tag_list(),
        events.len()
    );
    if char_len(&title) <= limit {
        return title;
    }
    elide_tags(subject, trigger, events.len(), limit)
}

/// Drop trailing tags one at a time until the title fits in `limit`.
///
/// Every candidate carries [`TAG_ELLIPSIS`]. If none fits, the zero-tag form
/// is returned even though it is still over the limit.
pub fn elide_tags(subject: &str, trigger: &TriggerData, count: usize, limit: usize) -> String {
    let elided = |kept: usize| {
        format!(
            "{} {} {}{} ({})",
            subject,
            trigger.name,
            trigger.bracketed_tags(kept),
            TAG_ELLIPSIS,
            count
        )
    };

    for kept in (0..trigger.tags.len()).rev() {
        let title = elided(kept);
        if char_len(&title) <= limit {
            tracing::debug!(
                "Title for '{}' keeps {} of {} tags",
                trigger.id,
                kept,
                trigger.tags.len()
            );
            return title;
        }
    }

    tracing::debug!("Title for '{}' exceeds {} chars with no tags", trigger.id, limit);
    elided(0)
}
