/// Base URL of the review API and its upload storage.
///
/// `BACKEND_URL` at compile time wins. Otherwise debug builds talk to the
/// local API server and release builds assume the API shares our origin.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url,
        None if cfg!(debug_assertions) => "http://127.0.0.1:8000",
        None => "",
    }
}

/// Absolute URL of an uploaded asset given its stored relative path.
pub fn uploads_url(path: &str) -> String {
    format!(
        "{}/uploads/{}",
        get_backend_url(),
        path.trim_start_matches('/')
    )
}

// Served by Trunk from frontend/assets.
pub const DEFAULT_THUMBNAIL: &str = "/assets/default-thumbnail.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploads_url_joins_under_uploads() {
        let url = uploads_url("a.jpg");
        assert!(url.ends_with("/uploads/a.jpg"));
        assert!(url.starts_with(get_backend_url()));
    }

    #[test]
    fn uploads_url_does_not_double_slash() {
        assert!(uploads_url("/videos/b.mp4").ends_with("/uploads/videos/b.mp4"));
    }
}
