//! Splitting a message budget between the description and the event list.
//!
//! When both parts fit, nothing changes. Otherwise the budget is split in
//! half and a part that already fits in its half keeps its full length,
//! handing the remainder to the other part. The description always gives up
//! [`ELLIPSIS_RESERVE`] extra characters so the `"...\n"` suffix and any
//! markup it pulls in still fit after truncation.

/// Characters held back from a truncated description
pub const ELLIPSIS_RESERVE: usize = 10;

/// Returns `(desc_budget, events_budget)` for a `total` budget.
///
/// A negative `total` is unlimited. Results never exceed the corresponding
/// input length.
pub fn allocate(total: i64, desc_len: usize, events_len: usize) -> (usize, usize) {
    let Ok(total) = usize::try_from(total) else {
        return (desc_len, events_len);
    };
    if desc_len.saturating_add(events_len) <= total {
        return (desc_len, events_len);
    }

    let half = total / 2;
    let (desc, events) = if desc_len > half && events_len <= half {
        (
            total
                .saturating_sub(events_len)
                .saturating_sub(ELLIPSIS_RESERVE),
            events_len,
        )
    } else if events_len > half && desc_len <= half {
        (desc_len, total - desc_len)
    } else {
        (half.saturating_sub(ELLIPSIS_RESERVE), half)
    };

    (desc.min(desc_len), events.min(events_len))
}

/// Raise the event list's share of `total` to at least `floor`, taking the
/// difference from the description.
///
/// Leaves the split alone when `total` is unlimited or cannot hold `floor`.
pub fn reserve_events(total: i64, desc: usize, events: usize, floor: usize) -> (usize, usize) {
    let Ok(total) = usize::try_from(total) else {
        return (desc, events);
    };
    if events >= floor || floor > total {
        return (desc, events);
    }
    (desc.min(total - floor), floor)
}
