use serde_derive::{Deserialize, Serialize};

const H3_URI_SCHEME: &str = "h3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactLocation {
    pub bucket: String,
    pub key: String,
}

impl ArtifactLocation {
    pub fn new<B, K>(bucket: B, key: K) -> Self
    where
        B: Into<String>,
        K: Into<String>,
    {
        ArtifactLocation {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    // Logical object-store locator, not a filesystem path; always '/' separated.
    pub fn locator(&self) -> String {
        format!("{}://{}", H3_URI_SCHEME, join(&self.bucket, &self.key))
    }
}

fn join(bucket: &str, key: &str) -> String {
    let segments = bucket
        .split('/')
        .chain(key.split('/'))
        .filter(|it| !it.is_empty())
        .collect::<Vec<_>>();

    segments.join("/")
}
