use serde::{Deserialize, Serialize};

/// One amphibian entry as delivered by the upstream endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amphibian {
    pub name: String,
    /// Kind of amphibian (e.g., "Toad", "Salamander").
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(rename = "img_src")]
    pub image_url: String,
}

impl Amphibian {
    /// Card title line: `name (type)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
