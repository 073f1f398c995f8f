use serde::Deserialize;
use std::fmt;
use crate::config;

// The review API is loose about scalar types: ids and ratings arrive either as
// JSON numbers or as strings depending on the backend driver.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Opaque review identifier, stable across renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Scalar")]
pub struct ReviewId(String);

impl From<Scalar> for ReviewId {
    fn from(value: Scalar) -> Self {
        ReviewId(value.into())
    }
}

impl From<&str> for ReviewId {
    fn from(value: &str) -> Self {
        ReviewId(value.to_string())
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rating exactly as the API sent it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Scalar")]
pub struct Rating(String);

impl From<Scalar> for Rating {
    fn from(value: Scalar) -> Self {
        Rating(value.into())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    pub rating: Rating,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
}

impl Review {
    /// URL of the testimonial video, if the review has one.
    pub fn video_url(&self) -> Option<String> {
        non_empty(&self.video).map(config::uploads_url)
    }

    /// URL of the thumbnail, if the review has one.
    pub fn thumbnail_url(&self) -> Option<String> {
        non_empty(&self.video_thumbnail).map(config::uploads_url)
    }
}

fn non_empty(path: &Option<String>) -> Option<&str> {
    path.as_deref().map(str::trim).filter(|p| !p.is_empty())
}

/// Body of a `GET /api/reviews` response.
#[derive(Debug, Deserialize)]
pub struct ReviewEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Review>,
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
