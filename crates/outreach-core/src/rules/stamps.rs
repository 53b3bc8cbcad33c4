use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Timestamps are kept at millisecond precision, the resolution of the slot format.
pub fn stamp(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(3)
}

/// Stamp for a mutation: never at or before the previous one, even if the clock stepped back.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = stamp(now);
    let floor = stamp(previous) + Duration::milliseconds(1);
    if now < floor {
        floor
    } else {
        now
    }
}
