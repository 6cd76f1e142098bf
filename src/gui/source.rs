// src/gui/source.rs
//
// Where the viewer reads the document from. Loading blocks, so the app runs it
// on a worker thread and collects the result on the next frame.

use std::{fmt, fs, path::PathBuf, time::Duration};

use reqwest::blocking::Client;

use crate::{
    config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT},
    errors::SourceError,
    model::LeaderboardDocument,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// `http://` / `https://` → URL, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lc = crate::core::html::to_lower(t);
        if lc.starts_with("http://") || lc.starts_with("https://") {
            DocumentSource::Url(s!(t))
        } else {
            DocumentSource::File(PathBuf::from(t))
        }
    }

    pub fn load(&self) -> Result<LeaderboardDocument, SourceError> {
        let text = match self {
            DocumentSource::File(path) => fs::read_to_string(path)
                .map_err(|source| SourceError::Read { path: path.clone(), source })?,
            DocumentSource::Url(url) => http_text(url)?,
        };
        Ok(LeaderboardDocument::from_json(&text)?)
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(p) => write!(f, "{}", p.display()),
            DocumentSource::Url(u) => f.write_str(u),
        }
    }
}

fn http_text(url: &str) -> Result<String, SourceError> {
    let fail = |reason: String| SourceError::Http { url: s!(url), reason };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| fail(e.to_string()))?;

    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(fail(format!("status: {}", status)));
    }
    resp.text().map_err(|e| fail(e.to_string()))
}
