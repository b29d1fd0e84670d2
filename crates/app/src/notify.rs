#[cfg(feature = "desktop")]
const APP_NAME: &str = "Herizon";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            eprintln!("[notify] Failed to show desktop notification: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_noop_does_not_panic() {
        // Without the desktop feature, send() is a no-op and must not panic.
        send("Welcome to Herizon!", "Your profile is ready.");
    }
}
