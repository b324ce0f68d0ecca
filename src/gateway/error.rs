use thiserror::Error;

/// Errors that can occur while fetching the amphibian list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: connect, DNS, reset, or body read.
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("Upstream at '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body is not a JSON array of amphibian objects.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_kind_and_message() {
        let err = FetchError::Status {
            url: "http://x/amphibians".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), "status");
        assert_eq!(
            err.to_string(),
            "Upstream at 'http://x/amphibians' returned status 503"
        );
    }

    #[test]
    fn decode_kind() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::Decode {
            url: "http://x".to_string(),
            source,
        };
        assert_eq!(err.kind(), "decode");
    }
}
