use crate::error::RankError;
use std::fmt;
use std::path::PathBuf;

/// Environment parameters read at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    Token,
    Repository,
    Label,
    OutputFile,
    ApiUrl,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::Token => "GITHUB_TOKEN",
            EnvKey::Repository => "GITHUB_REPOSITORY",
            EnvKey::Label => "FEATURE_LABEL",
            EnvKey::OutputFile => "OUTPUT_FILE",
            EnvKey::ApiUrl => "GITHUB_API_URL",
        }
    }
}

/// Label used when `FEATURE_LABEL` is not set.
pub const DEFAULT_LABEL: &str = "feature-request";
/// Output file used when `OUTPUT_FILE` is not set.
pub const DEFAULT_OUTPUT_FILE: &str = "RANKED_FEATURES.md";
/// API base used when `GITHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// A repository identifier of the form `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parses `owner/name`.
    ///
    /// Exactly one `/` is accepted, and neither side may be empty.
    pub fn parse(identifier: &str) -> Result<Self, RankError> {
        let parts: Vec<&str> = identifier.split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(RankError::configuration(format!(
                "malformed repository identifier '{identifier}'. Expected 'owner/repo'."
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Run configuration, built once and passed to every stage.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub repository: Repository,
    pub label: String,
    pub output_path: PathBuf,
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("label", &self.label)
            .field("output_path", &self.output_path)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, RankError> {
        load_config(|key| std::env::var(key).ok())
    }
}

/// Builds a [`Config`] from a key lookup.
///
/// `lookup` receives environment variable names (see [`EnvKey::as_str`]) and
/// returns their value, if any. Empty values are treated as unset.
///
/// - Returns `Err(RankError::Configuration)` if the token or repository is
///   missing, or the repository is not `owner/repo`.
/// - Optional keys fall back to [`DEFAULT_LABEL`], [`DEFAULT_OUTPUT_FILE`]
///   and [`DEFAULT_API_URL`].
pub fn load_config<F>(lookup: F) -> Result<Config, RankError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: EnvKey| lookup(key.as_str()).filter(|value| !value.is_empty());

    let token = get(EnvKey::Token).ok_or_else(|| {
        RankError::configuration(format!(
            "missing required credential: {} is not set",
            EnvKey::Token.as_str()
        ))
    })?;

    let repository = get(EnvKey::Repository).ok_or_else(|| {
        RankError::configuration(format!(
            "malformed repository identifier: {} is not set",
            EnvKey::Repository.as_str()
        ))
    })?;
    let repository = Repository::parse(&repository)?;

    let label = get(EnvKey::Label).unwrap_or_else(|| DEFAULT_LABEL.to_string());
    let output_path = PathBuf::from(
        get(EnvKey::OutputFile).unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
    );
    let api_url = get(EnvKey::ApiUrl)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(Config {
        token,
        repository,
        label,
        output_path,
        api_url,
    })
}
