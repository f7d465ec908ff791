use crate::gc::error::{GcError, GcResult};
use std::fs;
use std::path::{Path, PathBuf};
use ureq::Agent;

/// NCBI E-utilities efetch endpoint
pub const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Contact address sent with E-utilities requests unless overridden
pub const DEFAULT_EMAIL: &str = "A.N.Other@example.com";

/// Upper bound on a fetched response body (whole chromosomes fit).
const MAX_RESPONSE_BYTES: u64 = 4 * 1024 * 1024 * 1024;

/// Something that can retrieve the FASTA text for an accession id
pub trait SequenceFetcher {
    fn fetch(&self, id: &str) -> GcResult<String>;
}

/// Fetches nucleotide records as plain-text FASTA from NCBI Entrez.
pub struct EntrezFetcher {
    agent: Agent,
    email: String,
}

impl EntrezFetcher {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            email: email.into(),
        }
    }
}

impl SequenceFetcher for EntrezFetcher {
    fn fetch(&self, id: &str) -> GcResult<String> {
        let fetch_err = |e: ureq::Error| GcError::Fetch {
            id: id.to_string(),
            reason: e.to_string(),
        };
        let mut response = self
            .agent
            .get(EFETCH_URL)
            .query("db", "nucleotide")
            .query("id", id)
            .query("rettype", "fasta")
            .query("retmode", "text")
            .query("tool", env!("CARGO_PKG_NAME"))
            .query("email", &self.email)
            .call()
            .map_err(fetch_err)?;
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_RESPONSE_BYTES)
            .read_to_string()
            .map_err(fetch_err)?;
        Ok(body)
    }
}

/// Resolves accession ids to local FASTA files, fetching on cache miss.
///
/// The cache is a plain `{id}.fasta` file in `cache_dir`. An existing file
/// is trusted as-is; its contents are never validated.
pub struct SequenceSource<F: SequenceFetcher> {
    cache_dir: PathBuf,
    fetcher: F,
}

impl<F: SequenceFetcher> SequenceSource<F> {
    pub fn new(cache_dir: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            fetcher,
        }
    }

    /// Path the cache file for `id` lives at (whether or not it exists)
    pub fn cache_path(&self, id: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.fasta", id))
    }

    /// Whether `id` is already cached
    pub fn is_cached(&self, id: &str) -> bool {
        self.cache_path(id).exists()
    }

    /// Return the local FASTA path for `id`.
    ///
    /// On a cache miss the fetched text is written verbatim to the cache
    /// file. Fetch failures propagate; nothing is retried.
    pub fn locate(&self, id: &str) -> GcResult<PathBuf> {
        let path = self.cache_path(id);
        if path.exists() {
            log::debug!("Cache hit for {} at {}", id, path.display());
            return Ok(path);
        }
        log::info!("Fetching {} from nucleotide database", id);
        let record = self.fetcher.fetch(id)?;
        write_cache(&path, &record)?;
        log::debug!("Wrote {} bytes to {}", record.len(), path.display());
        Ok(path)
    }
}

fn write_cache(path: &Path, record: &str) -> GcResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, record)?;
    Ok(())
}
