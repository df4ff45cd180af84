use crate::config::types::CrawlInput;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(InputFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads, parses and validates an input file
///
/// # Arguments
///
/// * `path` - Path to a `.json` or `.toml` input file
///
/// # Returns
///
/// * `Ok(CrawlInput)` - Successfully loaded and validated input
/// * `Err(ConfigError)` - Failed to load, parse, or validate the input
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use gh_search_crawler::config::load_input;
///
/// let input = load_input(Path::new("input_data.json")).unwrap();
/// println!("Searching {} for {:?}", input.search_type, input.keywords);
/// ```
pub fn load_input(path: &Path) -> Result<CrawlInput, ConfigError> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_input(&content, format)
}

/// Parses and validates input content in the given format
pub fn parse_input(content: &str, format: InputFormat) -> Result<CrawlInput, ConfigError> {
    let input: CrawlInput = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Toml => toml::from_str(content)?,
    };

    validate(&input)?;

    Ok(input)
}

/// Computes a SHA-256 hash of the input file content
///
/// Logged at startup so a result file can be traced back to its input.
pub fn compute_input_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads an input file and returns both the input and its hash
pub fn load_input_with_hash(path: &Path) -> Result<(CrawlInput, String), ConfigError> {
    let input = load_input(path)?;
    let hash = compute_input_hash(path)?;
    Ok((input, hash))
}
