//! Timestamp helper for new records.

/// Current time as an ISO-8601 string, the format the backend's
/// `createdAt` fields use. Empty outside the browser.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
