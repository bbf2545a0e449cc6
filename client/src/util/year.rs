//! Current calendar year for the footer copyright line.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// The current year: browser local time when hydrated, UTC otherwise.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
