use std::path::PathBuf;

use clap::Parser;
use url::Url;

use super::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "pdf-translator", version, about = "Terminal client for the PDF translation server")]
pub struct Cli {
    /// Start location: a server URL, optionally with `#translate`, or a bare `#fragment`.
    pub location: Option<String>,

    /// Path to the RON config file.
    #[arg(long, env = "PDF_TRANSLATOR_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Server base URL; overrides `server_url` from the config file.
    #[arg(long, env = "PDF_TRANSLATOR_SERVER")]
    pub server: Option<String>,

    /// Log level; overrides `log_level` from the config file.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Server and fragment parsed from the positional start location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartLocation {
    pub server: Option<Url>,
    pub fragment: Option<String>,
}

impl Cli {
    pub fn start_location(&self) -> StartLocation {
        let Some(raw) = self.location.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return StartLocation::default();
        };
        match Url::parse(raw) {
            Ok(mut url) if url.has_host() => {
                let fragment = url.fragment().map(str::to_string);
                url.set_fragment(None);
                StartLocation {
                    server: Some(url),
                    fragment,
                }
            }
            _ => StartLocation {
                server: None,
                fragment: Some(raw.trim_start_matches('#').to_string()),
            },
        }
    }
}
