//! PokeAPI type retrieval with an on-disk cache

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};

const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Delay between uncached fetches, to respect PokeAPI rate limits
const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// PokeAPI client backed by a JSON cache file
///
/// Names already present in the cache are never re-fetched; anything new is
/// fetched one request at a time with a fixed delay in between, and the
/// cache file is rewritten afterwards. A name that cannot be fetched is
/// warned about and left out of the returned map, which the evaluation
/// engine treats as "unresolvable".
pub struct PokeApi {
    client: reqwest::Client,
    cache_path: PathBuf,
    request_delay: Duration,
}

impl PokeApi {
    /// Create a client caching into the given file
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache_path: cache_path.into(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    /// Override the delay between uncached requests
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Resolve the type sets for a list of Pokemon names
    ///
    /// The returned map contains only the names that resolved, keyed exactly
    /// as requested (normalization is applied to the request URL, not the
    /// cache key).
    pub async fn resolve_types(&self, names: &[String]) -> Result<HashMap<String, Vec<String>>> {
        let mut cache = read_type_cache(&self.cache_path)?;
        let mut fetched_any = false;

        for name in names {
            if cache.contains_key(name) {
                continue;
            }

            match self.fetch_types(name).await {
                Ok(types) => {
                    cache.insert(name.clone(), types);
                }
                Err(e) => {
                    tracing::warn!(pokemon = %name, error = %e, "Could not fetch types");
                }
            }

            fetched_any = true;
            tokio::time::sleep(self.request_delay).await;
        }

        if fetched_any {
            write_type_cache(&self.cache_path, &cache)?;
        }

        Ok(names
            .iter()
            .filter_map(|name| cache.get(name).map(|types| (name.clone(), types.clone())))
            .collect())
    }

    async fn fetch_types(&self, name: &str) -> Result<Vec<String>> {
        let url = format!("{}/pokemon/{}", POKEAPI_URL, normalize_name(name));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("PokeAPI returned status {}", response.status());
        }

        let data: serde_json::Value = response.json().await.context("Invalid PokeAPI response")?;
        let types = data
            .get("types")
            .and_then(|t| t.as_array())
            .context("PokeAPI response missing types array")?;

        types
            .iter()
            .map(|entry| {
                entry
                    .get("type")
                    .and_then(|t| t.get("name"))
                    .and_then(|n| n.as_str())
                    .map(str::to_string)
                    .context("PokeAPI type entry missing name")
            })
            .collect()
    }
}

/// Normalize a display name into a PokeAPI resource name
///
/// Lowercases, maps the gender symbols to `-f`/`-m`, strips periods and
/// apostrophes, and replaces spaces with hyphens ("Mr. Mime" -> "mr-mime").
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace('♀', "-f")
        .replace('♂', "-m")
        .replace(['.', '\''], "")
        .replace(' ', "-")
}

fn read_type_cache(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read type cache {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid type cache {}", path.display()))
}

fn write_type_cache(path: &Path, cache: &HashMap<String, Vec<String>>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(cache)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write type cache {}", path.display()))
}
