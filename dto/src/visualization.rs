const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Turn a base64-encoded PNG, as sent by the analysis service, into something an `<img>` can display.
pub fn to_png_data_url(visualization: &str) -> String {
    format!("{PNG_DATA_URL_PREFIX}{visualization}")
}

/// Lists are displayed as a single comma-separated line.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
