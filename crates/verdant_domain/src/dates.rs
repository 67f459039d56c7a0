use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Time source for creation and completion stamps. Substitutable so the
/// lifecycle operations stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current date with the time of day zeroed to local midnight. Callers hold
/// on to one value per computation pass so every plant is measured against
/// the same anchor.
pub fn start_of_today() -> DateTime<Utc> {
    let local = Local::now();
    let midnight = local.date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or(local)
        .with_timezone(&Utc)
}

/// Linear day addition: `base` plus `days` times 24 hours of milliseconds.
/// Daylight-saving transitions are not corrected for; `day_diff`'s rounding
/// absorbs the drift.
pub fn add_days(base: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    base + Duration::milliseconds(days * DAY_MS)
}

/// Rounded signed day count `target - base`.
pub fn day_diff(target: DateTime<Utc>, base: DateTime<Utc>) -> i64 {
    let millis = target.signed_duration_since(base).num_milliseconds();
    (millis as f64 / DAY_MS as f64).round() as i64
}
