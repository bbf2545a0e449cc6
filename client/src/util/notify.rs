//! Blocking acknowledgement dialog shown after a contact form submission.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Show `message` in a `window.alert`. Returns `true` if a dialog was shown.
pub fn acknowledge(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
