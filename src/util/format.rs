//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a monetary amount the way the tables display it.
pub fn money(amount: f64) -> String {
    format!("\u{20b9} {amount:.2}")
}

/// Today's calendar date as ISO `yyyy-mm-dd`, used as the create-mode
/// default for the expense date field. Empty on the server; the value
/// is only consulted from browser event handlers.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            format!(
                "{:04}-{:02}-{:02}",
                now.get_full_year() as u32,
                now.get_month() as u32 + 1,
                now.get_date() as u32
            )
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
