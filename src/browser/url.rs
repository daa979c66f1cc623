/// Normalize an incomplete URL by adding a missing scheme
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    const PASSTHROUGH: [&str; 7] =
        ["http://", "https://", "file://", "data:", "about:", "chrome://", "chrome-extension://"];
    if PASSTHROUGH.iter().any(|scheme| trimmed.starts_with(scheme)) {
        return trimmed.to_string();
    }

    // Local files given as paths
    if trimmed.starts_with('/') {
        return format!("file://{}", trimmed);
    }

    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}
