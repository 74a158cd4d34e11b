/// Select value for "anything not listed"; details go in the message.
pub const OTHER_OPTION: &str = "other";

pub const SERVICE_AREAS: [&str; 11] = [
    "Laketown",
    "Kestopur",
    "Baguiati",
    "Joramondir",
    "Jyngra",
    "Loknath Mandir",
    "Teghoria",
    "Chinar Park",
    "Nopara",
    "City Centre 2",
    "Rajarhat",
];

pub fn is_service_area(area: &str) -> bool {
    SERVICE_AREAS.contains(&area)
}

/// Short list for the contact block, e.g. "Laketown, Kestopur, ... and surrounding areas".
pub fn coverage_summary(shown: usize) -> String {
    let shown = shown.min(SERVICE_AREAS.len());
    format!("{} and surrounding areas", SERVICE_AREAS[..shown].join(", "))
}
