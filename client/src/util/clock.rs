//! Wall-clock timestamps for chat messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build reads `Date.now()`; SSR and tests use the system clock.
//! Both report milliseconds since the Unix epoch as `f64`, the unit the
//! message log stores.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
