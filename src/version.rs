// Wed Oct 14 2026 - Alex

//! Named constants pulled out of the native version headers.

use crate::error::{GenError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const API_VERSION_MARKER: &str = "CEF_API_VERSION_LAST";

static LAST_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#define\s+CEF_API_VERSION_LAST\s+CEF_API_VERSION_(\d+)").expect("last version regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Preprocessor condition opening the platform block.
    pub fn marker(&self) -> &'static str {
        match self {
            Platform::Windows => "#if defined(OS_WIN)",
            Platform::MacOs => "#elif defined(OS_MAC)",
            Platform::Linux => "#elif defined(OS_LINUX)",
        }
    }

    /// Suffix of the generated `CEF_API_HASH_PLATFORM_*` constant.
    pub fn constant_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => "WIN",
            Platform::MacOs => "MACOS",
            Platform::Linux => "LINUX",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "OS_WIN",
            Platform::MacOs => "OS_MAC",
            Platform::Linux => "OS_LINUX",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDetails {
    pub version: String,
    pub hashes: Vec<(Platform, String)>,
}

impl ApiDetails {
    pub fn hash(&self, platform: Platform) -> Option<&str> {
        self.hashes.iter().find(|(p, _)| *p == platform).map(|(_, h)| h.as_str())
    }

    pub fn require_hash(&self, platform: Platform) -> Result<&str> {
        self.hash(platform)
            .ok_or_else(|| GenError::MissingConstant(format!("CEF_API_HASH_{} ({})", self.version, platform)))
    }
}

/// Raw value of `#define NAME value`, as written in the header.
pub fn extract_define(text: &str, name: &str) -> Result<String> {
    let pattern = format!(r"(?m)^#define\s+{}\s+(.*?)\s*$", regex::escape(name));
    let re = Regex::new(&pattern)?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| GenError::MissingConstant(name.to_string()))
}

/// The latest API version and its per-platform hash literal.
pub fn extract_api_details(text: &str) -> Result<ApiDetails> {
    let version = LAST_VERSION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| GenError::MissingVersionMarker(API_VERSION_MARKER.to_string()))?;

    let hash_re = Regex::new(&format!(r#"^#define\s+CEF_API_HASH_{}\s+"(\w+)""#, version))?;

    let mut hashes = Vec::new();
    let mut current: Option<Platform> = None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(platform) = Platform::ALL.iter().find(|p| line.contains(p.marker())) {
            current = Some(*platform);
        }

        if let (Some(platform), Some(caps)) = (current, hash_re.captures(line)) {
            hashes.push((platform, caps[1].to_string()));
            current = None;
        }
    }

    Ok(ApiDetails { version, hashes })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstants {
    pub cef_version: String,
    pub cef_version_major: String,
    pub cef_commit_number: String,
    pub cef_commit_hash: String,
    pub chrome_version_major: String,
    pub chrome_version_minor: String,
    pub chrome_version_build: String,
    pub chrome_version_patch: String,
    pub api: ApiDetails,
}

impl VersionConstants {
    pub fn extract(version_h: &str, api_versions_h: &str) -> Result<Self> {
        let api = extract_api_details(api_versions_h)?;
        for platform in Platform::ALL {
            api.require_hash(platform)?;
        }

        Ok(Self {
            cef_version: extract_define(version_h, "CEF_VERSION")?,
            cef_version_major: extract_define(version_h, "CEF_VERSION_MAJOR")?,
            cef_commit_number: extract_define(version_h, "CEF_COMMIT_NUMBER")?,
            cef_commit_hash: extract_define(version_h, "CEF_COMMIT_HASH")?,
            chrome_version_major: extract_define(version_h, "CHROME_VERSION_MAJOR")?,
            chrome_version_minor: extract_define(version_h, "CHROME_VERSION_MINOR")?,
            chrome_version_build: extract_define(version_h, "CHROME_VERSION_BUILD")?,
            chrome_version_patch: extract_define(version_h, "CHROME_VERSION_PATCH")?,
            api,
        })
    }
}
