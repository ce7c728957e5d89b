//! Message body composition: rendered description followed by the event list

use std::sync::Arc;

use crate::budget::{allocate, reserve_events};
use crate::event::NotificationEvents;
use crate::event_list::{elision_marker, render_events, EventFormat, THROTTLE_NOTICE};
use crate::markdown::MarkdownRenderer;
use crate::text::{char_len, truncate_chars};

/// Appended to a truncated raw description before it is re-rendered
pub const DESCRIPTION_ELLIPSIS: &str = "...\n";

/// Builds message bodies within a code point budget
#[derive(Debug, Clone)]
pub struct BodyComposer {
    renderer: Arc<dyn MarkdownRenderer>,
    format: EventFormat,
}

impl BodyComposer {
    pub fn new(renderer: Arc<dyn MarkdownRenderer>, format: EventFormat) -> Self {
        Self { renderer, format }
    }

    /// Compose the body for `desc` and `events` within `budget` (negative is
    /// unlimited).
    pub fn compose(
        &self,
        desc: &str,
        events: &NotificationEvents,
        throttled: bool,
        budget: i64,
    ) -> String {
        let mut html_desc = self.renderer.render(desc);
        let html_desc_len = char_len(&html_desc);

        let mut events_string = render_events(events, -1, throttled, &self.format);
        let events_len = char_len(&events_string);

        let (desc_new_len, events_new_len) = allocate(budget, html_desc_len, events_len);
        let (desc_new_len, events_new_len) = if events_new_len < events_len {
            reserve_events(
                budget,
                desc_new_len,
                events_new_len,
                self.summary_floor(events, throttled, budget).min(events_len),
            )
        } else {
            (desc_new_len, events_new_len)
        };

        if desc_new_len != html_desc_len {
            html_desc = self.fit_description(desc, html_desc_len, desc_new_len);
        }
        if events_new_len != events_len {
            tracing::debug!(
                "Event list exceeds its share: {} chars, {} allowed",
                events_len,
                events_new_len
            );
            events_string = render_events(events, events_new_len as i64, throttled, &self.format);
        }

        html_desc.push_str(&events_string);
        html_desc
    }

    /// Room the event list needs to report that events were left out: the
    /// widest elision marker, plus the throttle notice when both fit.
    fn summary_floor(&self, events: &NotificationEvents, throttled: bool, budget: i64) -> usize {
        let marker = char_len(&elision_marker(events.len()));
        let notice = if throttled { char_len(THROTTLE_NOTICE) } else { 0 };
        match usize::try_from(budget) {
            Ok(budget) if marker + notice <= budget => marker + notice,
            _ => marker,
        }
    }

    /// Render a cut of the raw description whose output is at most `target`
    /// code points, or nothing when no cut fits.
    ///
    /// The first cut assumes the markup overhead of the full description
    /// stays constant. When the rendering still overshoots, the kept prefix
    /// is bisected below that guess.
    fn fit_description(&self, desc: &str, rendered_len: usize, target: usize) -> String {
        let raw_len = char_len(desc);
        let overhead = rendered_len as i64 - raw_len as i64;
        let guess = (target as i64 - overhead - char_len(DESCRIPTION_ELLIPSIS) as i64)
            .clamp(0, raw_len as i64) as usize;

        tracing::debug!(
            "Truncating description from {} to {} chars (markup overhead {})",
            raw_len,
            guess,
            overhead
        );

        let html = self.render_prefix(desc, guess);
        if char_len(&html) <= target {
            return html;
        }

        let mut fitted = String::new();
        let (mut low, mut high) = (0, guess);
        while low < high {
            let keep = low + (high - low) / 2;
            let html = self.render_prefix(desc, keep);
            if char_len(&html) <= target {
                fitted = html;
                low = keep + 1;
            } else {
                high = keep;
            }
        }
        if fitted.is_empty() {
            tracing::debug!("No cut of the description fits {} chars", target);
        }
        fitted
    }

    /// Render the first `keep` code points of `desc`, marked with
    /// [`DESCRIPTION_ELLIPSIS`] when anything was cut.
    fn render_prefix(&self, desc: &str, keep: usize) -> String {
        let prefix = truncate_chars(desc, keep);
        if prefix.len() == desc.len() {
            return self.renderer.render(desc);
        }
        let mut raw = prefix.to_string();
        raw.push_str(DESCRIPTION_ELLIPSIS);
        self.renderer.render(&raw)
    }
}
