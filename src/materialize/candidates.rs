//! External-candidate lookup
//!
//! Upstream/downstream slices can often be replaced by a part someone has
//! already built. When a proxy endpoint is configured, materialization asks
//! it for substitution candidates by insert name (`US_<gene>` /
//! `DS_<gene>`) and breed code. The lookup is strictly best-effort: any
//! network or decoding failure degrades to an empty candidate list.

use crate::core::breed::Breed;
use crate::core::dnaslice::PartCandidate;
use log::{debug, warn};
use std::time::Duration;

/// Source of substitution candidates for upstream/downstream slices
pub trait CandidateSource {
    /// Candidates matching an insert name; empty on miss or failure
    fn fetch_candidates(&self, insert_name: &str, breed: Breed) -> Vec<PartCandidate>;
}

/// HTTP proxy implementation of [`CandidateSource`]
///
/// Queries `<base>/candidates?insert=<name>&breed=<code>` and expects a
/// JSON array of `{id, name}` records.
pub struct HttpCandidateSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpCandidateSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn request(&self, insert_name: &str, breed: Breed) -> reqwest::Result<Vec<PartCandidate>> {
        let url = format!(
            "{}/candidates?insert={}&breed={}",
            self.base_url.trim_end_matches('/'),
            insert_name,
            breed.code()
        );
        debug!("candidate lookup: {}", url);
        self.client
            .get(&url)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?
            .json()
    }
}

impl CandidateSource for HttpCandidateSource {
    fn fetch_candidates(&self, insert_name: &str, breed: Breed) -> Vec<PartCandidate> {
        match self.request(insert_name, breed) {
            Ok(candidates) => {
                debug!(
                    "{} candidate(s) for insert '{}'",
                    candidates.len(),
                    insert_name
                );
                candidates
            }
            Err(e) => {
                warn!("candidate lookup for '{}' failed: {}", insert_name, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_proxy_degrades_to_empty() {
        // Nothing listens on the loopback discard port
        let source = HttpCandidateSource::new("http://127.0.0.1:9");
        let candidates = source.fetch_candidates("US_ADH1", Breed::Upstream);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_candidate_json_shape() {
        let decoded: Vec<PartCandidate> =
            serde_json::from_str(r#"[{"id":"R12","name":"US_ADH1_v2"}]"#).unwrap();
        assert_eq!(decoded[0].id, "R12");
        assert_eq!(decoded[0].name, "US_ADH1_v2");
    }
}
