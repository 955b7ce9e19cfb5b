/// Wall-clock milliseconds, the timestamp every input and frame handler receives.
///
/// Browser only; native callers pass synthetic timestamps instead.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Whole milliseconds from `since` to `now`, never negative.
///
/// A clock that steps backwards, or a non-finite stamp, counts as no time passing.
pub fn whole_millis_between(since: f64, now: f64) -> u64 {
    let elapsed = (now - since).floor();
    if elapsed.is_finite() && elapsed > 0.0 { elapsed as u64 } else { 0 }
}
