use crate::url::{base_token, normalize_url};
use crate::InvalidUrlError;
use serde::Deserialize;

/// How a candidate link is tested for membership in the crawl's origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginPolicy {
    /// The raw link must start with the raw seed string
    ///
    /// Scheme, host casing and trailing slashes all have to match the seed
    /// byte for byte.
    #[default]
    RawPrefix,

    /// The normalized `host[:port]` of the link must equal the seed's
    SameHost,
}

/// The boundary a crawl must not cross
#[derive(Debug, Clone)]
pub struct Origin {
    seed: String,
    host: String,
    policy: OriginPolicy,
}

impl Origin {
    /// Builds the origin of a crawl rooted at `seed`
    pub fn new(seed: &str, policy: OriginPolicy) -> Result<Self, InvalidUrlError> {
        let key = normalize_url(seed)?;
        Ok(Self {
            seed: seed.to_string(),
            host: base_token(&key).to_string(),
            policy,
        })
    }

    /// The raw seed address
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn policy(&self) -> OriginPolicy {
        self.policy
    }

    /// Returns true if `candidate` lies inside this origin
    ///
    /// Under [`OriginPolicy::SameHost`] a candidate that cannot be normalized
    /// is treated as foreign.
    pub fn contains(&self, candidate: &str) -> bool {
        match self.policy {
            OriginPolicy::RawPrefix => candidate.starts_with(&self.seed),
            OriginPolicy::SameHost => normalize_url(candidate)
                .map(|key| base_token(&key) == self.host)
                .unwrap_or(false),
        }
    }
}
