use serde::Serialize;

/// `Intl.DateTimeFormat` options for page dates.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DateFormatOptions {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub hour12: bool,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            year: "numeric",
            month: "long",
            day: "numeric",
            hour: "2-digit",
            minute: "2-digit",
            hour12: false,
        }
    }
}
