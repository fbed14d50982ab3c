//! Client for the WoRMS (World Register of Marine Species) Aphia name
//! services.
//!
//! Wraps the three remote operations needed for taxon lookups: find an
//! AphiaID by exact name, fetch the full record for an ID, and fuzzy-match
//! candidate records by name. Ambiguous or empty results are "no match",
//! not errors; transport faults propagate to the caller.

use crate::{Result, VireoError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Production Aphia REST endpoint.
pub const WORMS_REST_URL: &str = "https://www.marinespecies.org/rest";

/// AphiaID value the exact-name service returns when a name has multiple
/// matches.
pub const AMBIGUOUS_APHIA_ID: i64 = -999;

/// A taxon record from the Aphia service.
///
/// Core identification fields are typed; everything else the service sends
/// is carried through untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AphiaRecord {
    #[serde(rename = "AphiaID")]
    pub aphia_id: i64,
    pub scientificname: String,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default, rename = "valid_AphiaID")]
    pub valid_aphia_id: Option<i64>,
    #[serde(default)]
    pub valid_name: Option<String>,
    #[serde(default)]
    pub lsid: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The remote Aphia operations this crate consumes.
#[cfg_attr(test, automock)]
pub trait AphiaService {
    /// AphiaID for an exact scientific name; `None` when the service has no
    /// match, [`AMBIGUOUS_APHIA_ID`] when it has several.
    fn aphia_id_by_name(&self, name: &str) -> Result<Option<i64>>;

    /// Full record for a known AphiaID.
    fn record_by_id(&self, id: i64) -> Result<AphiaRecord>;

    /// Fuzzy-match candidates, one inner list per queried name.
    fn records_by_match_names(&self, name: &str) -> Result<Vec<Vec<AphiaRecord>>>;
}

/// Exact-name lookup. Returns `Ok(None)` when the registry reports no
/// match or the ambiguous-match sentinel.
pub fn lookup_exact<S: AphiaService + ?Sized>(
    service: &S,
    name: &str,
) -> Result<Option<AphiaRecord>> {
    match service.aphia_id_by_name(name)? {
        None | Some(AMBIGUOUS_APHIA_ID) => Ok(None),
        Some(id) => Ok(Some(service.record_by_id(id)?)),
    }
}

/// Fuzzy-name lookup. Returns a record only when the service reports
/// exactly one candidate list containing exactly one candidate.
pub fn lookup_fuzzy<S: AphiaService + ?Sized>(
    service: &S,
    name: &str,
) -> Result<Option<AphiaRecord>> {
    let mut matches = service.records_by_match_names(name)?;
    if matches.len() == 1 && matches[0].len() == 1 {
        Ok(Some(matches.remove(0).remove(0)))
    } else {
        Ok(None)
    }
}

/// Blocking HTTP client for the Aphia REST service.
pub struct WormsClient {
    base_url: String,
    marine_only: bool,
    client: reqwest::blocking::Client,
}

impl WormsClient {
    /// Create a client against the production WoRMS endpoint.
    pub fn new(marine_only: bool) -> Result<Self> {
        Self::with_base_url(WORMS_REST_URL, marine_only, Duration::from_secs(30))
    }

    /// Create a client against an explicit endpoint, for mirrors and tests.
    pub fn with_base_url(base_url: &str, marine_only: bool, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vireo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            marine_only,
            client,
        })
    }

    /// Exact-name lookup against this client.
    pub fn lookup_exact(&self, name: &str) -> Result<Option<AphiaRecord>> {
        lookup_exact(self, name)
    }

    /// Fuzzy-name lookup against this client.
    pub fn lookup_fuzzy(&self, name: &str) -> Result<Option<AphiaRecord>> {
        lookup_fuzzy(self, name)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| VireoError::Config(format!("invalid WoRMS base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| VireoError::Config("WoRMS base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl AphiaService for WormsClient {
    fn aphia_id_by_name(&self, name: &str) -> Result<Option<i64>> {
        let url = self.endpoint(&["AphiaIDByName", name])?;
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(&[("marine_only", self.marine_only)])
            .send()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(VireoError::Service(format!(
                "AphiaIDByName returned status {}",
                response.status()
            )));
        }
        Ok(Some(response.json()?))
    }

    fn record_by_id(&self, id: i64) -> Result<AphiaRecord> {
        let url = self.endpoint(&["AphiaRecordByAphiaID", &id.to_string()])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        if !response.status().is_success() || response.status() == StatusCode::NO_CONTENT {
            return Err(VireoError::Service(format!(
                "AphiaRecordByAphiaID({}) returned status {}",
                id,
                response.status()
            )));
        }
        Ok(response.json()?)
    }

    fn records_by_match_names(&self, name: &str) -> Result<Vec<Vec<AphiaRecord>>> {
        let url = self.endpoint(&["AphiaRecordsByMatchNames"])?;
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(&[("scientificnames[]", name)])
            .query(&[("marine_only", self.marine_only)])
            .send()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(VireoError::Service(format!(
                "AphiaRecordsByMatchNames returned status {}",
                response.status()
            )));
        }
        Ok(response.json()?)
    }
}
