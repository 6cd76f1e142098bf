// src/fetch/http.rs
// Blocking HTTP GET + badge extraction.

use std::{fs, path::{Path, PathBuf}};

use reqwest::blocking::Client;

use crate::{
    config::options::FetchOptions,
    core::{html, sanitize::sanitize_filename},
    errors::FetchError,
    file::ensure_directory,
};

use super::PointsFetcher;

pub struct HttpPointsFetcher {
    client: Client,
    badge_class: String,
    debug_dir: Option<PathBuf>,
}

impl HttpPointsFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(opts.timeout)
            .build()?;
        Ok(Self {
            client,
            badge_class: opts.badge_class.clone(),
            debug_dir: opts.debug_dir.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http(format!("HTTP {} {}", status, url)));
        }
        Ok(resp.text()?)
    }

    /// Keep the page around when the badge isn't there; best-effort.
    fn dump_page(&self, dir: &Path, url: &str, body: &str) {
        let stem = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .map(|seg| sanitize_filename(seg, 0))
            .unwrap_or_else(|| s!("page"));
        let path = dir.join(join!(&stem, ".html"));
        let res = ensure_directory(dir).and_then(|_| fs::write(&path, body));
        match res {
            Ok(()) => logd!("Fetch: Saved page for {} → {}", url, path.display()),
            Err(e) => logw!("Fetch: Could not save page for {}: {}", url, e),
        }
    }
}

impl PointsFetcher for HttpPointsFetcher {
    fn fetch(&self, profile_url: &str) -> Result<u64, FetchError> {
        let body = self.get(profile_url)?;

        let Some(text) = html::element_text_by_class(&body, &self.badge_class) else {
            if let Some(dir) = &self.debug_dir {
                self.dump_page(dir, profile_url, &body);
            }
            return Err(FetchError::BadgeMissing(self.badge_class.clone()));
        };

        html::parse_leading_int(&text).ok_or(FetchError::Unparseable(text))
    }
}
