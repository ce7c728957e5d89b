//! Rendering an event batch into budgeted, human-readable lines

use chrono_tz::Tz;

use crate::event::{Event, NotificationEvents};
use crate::text::char_len;

/// Appended when the trigger is throttled
pub const THROTTLE_NOTICE: &str =
    "\nPlease, fix your system or tune this trigger to generate less events.";

/// Summary line for `remaining` events that did not fit
pub fn elision_marker(remaining: usize) -> String {
    format!("\n...and {} more events.", remaining)
}

/// How event lines are rendered
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormat {
    tz: Tz,
    timestamp_format: String,
}

impl Default for EventFormat {
    fn default() -> Self {
        Self::new(Tz::UTC, "%H:%M")
    }
}

impl EventFormat {
    pub fn new(tz: Tz, timestamp_format: &str) -> Self {
        Self {
            tz,
            timestamp_format: timestamp_format.to_string(),
        }
    }

    /// `<time>: <metric> = <value> (<old> to <new>)`, then `. <message>` when
    /// present, newline terminated
    pub fn line(&self, event: &Event) -> String {
        let mut line = format!(
            "{}: {} = {} ({} to {})",
            event.format_timestamp(&self.tz, &self.timestamp_format),
            event.metric,
            event.metric_value(),
            event.old_state,
            event.state
        );
        match event.message() {
            Some(message) => {
                line.push_str(". ");
                line.push_str(message);
                line.push('\n');
            }
            None => line.push('\n'),
        }
        line
    }
}

/// Event lines selected for a budget, plus the trailers that follow them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLines {
    lines: Vec<String>,
    omitted: usize,
    trailers: Vec<String>,
}

impl EventLines {
    /// Select event lines in order until the next one would overflow `budget`.
    ///
    /// A negative budget is unlimited. Room for the elision marker is held
    /// back for every line except the last, and room for the throttle notice
    /// is held back for all of them. The output never exceeds a non-negative
    /// budget; when even the trailers do not fit, the ones that don't are
    /// left out.
    pub fn build(
        events: &NotificationEvents,
        budget: i64,
        throttled: bool,
        format: &EventFormat,
    ) -> Self {
        let limit = usize::try_from(budget).ok();
        let total = events.len();
        let throttle_len = if throttled {
            char_len(THROTTLE_NOTICE)
        } else {
            0
        };

        let mut lines = Vec::with_capacity(total);
        let mut used = 0;
        for (printed, event) in events.iter().enumerate() {
            let line = format.line(event);
            let line_len = char_len(&line);
            if let Some(limit) = limit {
                let marker_len = if printed + 1 < total {
                    char_len(&elision_marker(total - printed))
                } else {
                    0
                };
                if used + line_len + marker_len + throttle_len > limit {
                    break;
                }
            }
            used += line_len;
            lines.push(line);
        }

        let omitted = total - lines.len();
        let mut trailers = Vec::new();
        let mut fits = |trailer: String, used: &mut usize| {
            let len = char_len(&trailer);
            if limit.map_or(true, |limit| *used + len <= limit) {
                *used += len;
                trailers.push(trailer);
            }
        };
        if omitted > 0 {
            fits(elision_marker(omitted), &mut used);
        }
        if throttled {
            fits(THROTTLE_NOTICE.to_string(), &mut used);
        }

        if omitted > 0 {
            tracing::debug!(
                "Event list elided: {} of {} events printed (budget {})",
                lines.len(),
                total,
                budget
            );
        }

        Self {
            lines,
            omitted,
            trailers,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn printed(&self) -> usize {
        self.lines.len()
    }

    pub fn omitted(&self) -> usize {
        self.omitted
    }
}

impl std::fmt::Display for EventLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in self.lines.iter().chain(&self.trailers) {
            f.write_str(part)?;
        }
        Ok(())
    }
}

/// Render `events` within `budget` code points (negative is unlimited)
pub fn render_events(
    events: &NotificationEvents,
    budget: i64,
    throttled: bool,
    format: &EventFormat,
) -> String {
    EventLines::build(events, budget, throttled, format).to_string()
}
