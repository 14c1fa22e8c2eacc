//! Content Validation Rules
//!
//! Syntax checks the wasm proposals and access configs depend on: address
//! format, coin sets, code bytes, source URLs, builder images, labels and the
//! governance title/description limits. `ValidationRules` is the seam a host
//! chain implements to plug its own rules; `ContentLimits` carries the
//! x/wasm defaults.

use serde::{Deserialize, Serialize};

use crate::address::{Address, ADDRESS_LEN};
use crate::coins::Coins;
use crate::error::{Result, WasmError};

/// Maximum size of uploaded wasm byte code (500 KiB)
pub const MAX_WASM_SIZE: usize = 500 * 1024;
pub const MAX_LABEL_SIZE: usize = 128;
pub const MAX_BUILD_TAG_SIZE: usize = 128;
pub const MAX_TITLE_LENGTH: usize = 140;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Checks supplied by the host chain
pub trait ValidationRules {
    /// Address must be non-empty and of the expected fixed length
    fn verify_address(&self, addr: &Address) -> Result<()>;

    fn is_valid_coin_set(&self, coins: &Coins) -> bool;

    fn validate_code(&self, code: &[u8]) -> Result<()>;

    fn validate_source_url(&self, source: &str) -> Result<()>;

    fn validate_builder(&self, builder: &str) -> Result<()>;

    fn validate_label(&self, label: &str) -> Result<()>;

    fn max_title_len(&self) -> usize;

    fn max_description_len(&self) -> usize;
}

/// Default x/wasm limits, overridable from the module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLimits {
    /// Address length in bytes
    pub address_len: usize,
    /// Maximum wasm byte code size in bytes
    pub max_wasm_size: usize,
    pub max_label_size: usize,
    pub max_build_tag_size: usize,
    pub max_title_len: usize,
    pub max_description_len: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            address_len: ADDRESS_LEN,
            max_wasm_size: MAX_WASM_SIZE,
            max_label_size: MAX_LABEL_SIZE,
            max_build_tag_size: MAX_BUILD_TAG_SIZE,
            max_title_len: MAX_TITLE_LENGTH,
            max_description_len: MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationRules for ContentLimits {
    fn verify_address(&self, addr: &Address) -> Result<()> {
        if addr.is_empty() {
            return Err(WasmError::InvalidAddress("addresses cannot be empty".to_string()));
        }
        if addr.len() != self.address_len {
            return Err(WasmError::InvalidAddress(format!(
                "incorrect address length (expected {}, got {})",
                self.address_len,
                addr.len()
            )));
        }
        Ok(())
    }

    fn is_valid_coin_set(&self, coins: &Coins) -> bool {
        coins.is_valid()
    }

    fn validate_code(&self, code: &[u8]) -> Result<()> {
        if code.is_empty() {
            return Err(WasmError::InvalidRequest("code bytes is required".to_string()));
        }
        if code.len() > self.max_wasm_size {
            return Err(WasmError::InvalidRequest(format!(
                "code bytes cannot be longer than {} bytes",
                self.max_wasm_size
            )));
        }
        Ok(())
    }

    fn validate_source_url(&self, source: &str) -> Result<()> {
        if source.is_empty() {
            return Ok(());
        }

        let parsed = url::Url::parse(source).map_err(|e| match e {
            url::ParseError::RelativeUrlWithoutBase => {
                WasmError::InvalidRequest("source not an absolute url".to_string())
            }
            _ => WasmError::InvalidRequest("source not an url".to_string()),
        })?;

        if parsed.scheme() != "https" {
            return Err(WasmError::InvalidRequest("source must use https".to_string()));
        }
        Ok(())
    }

    fn validate_builder(&self, builder: &str) -> Result<()> {
        if builder.is_empty() {
            return Ok(());
        }
        if builder.len() > self.max_build_tag_size {
            return Err(WasmError::InvalidRequest(format!(
                "builder tag longer than {} characters",
                self.max_build_tag_size
            )));
        }
        if !is_docker_image_tag(builder) {
            return Err(WasmError::InvalidRequest(
                "builder invalid tag supplied for builder".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_label(&self, label: &str) -> Result<()> {
        if label.is_empty() {
            return Err(WasmError::InvalidRequest("label is required".to_string()));
        }
        if label.len() > self.max_label_size {
            return Err(WasmError::InvalidRequest(format!(
                "label cannot be longer than {} characters",
                self.max_label_size
            )));
        }
        Ok(())
    }

    fn max_title_len(&self) -> usize {
        self.max_title_len
    }

    fn max_description_len(&self) -> usize {
        self.max_description_len
    }
}

/// Matches `registry/path[/more]:tag`, e.g. `cosmwasm/rust-optimizer:0.12.0`.
///
/// Path segments are lower case, at least two characters, start and end
/// with `[a-z0-9]` and may contain `.`, `_` and `-` in between. At least two
/// segments are required. The tag starts with `[A-Za-z0-9_]` and continues
/// with `[A-Za-z0-9_.-]`.
fn is_docker_image_tag(builder: &str) -> bool {
    let Some((path, tag)) = builder.split_once(':') else {
        return false;
    };

    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 || !segments.iter().all(|s| is_path_segment(s)) {
        return false;
    }

    let mut tag_chars = tag.chars();
    let tag_head = matches!(tag_chars.next(), Some(c) if c.is_ascii_alphanumeric() || c == '_');
    tag_head && tag_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn is_path_segment(segment: &str) -> bool {
    let edge = |c: u8| c.is_ascii_lowercase() || c.is_ascii_digit();
    let inner = |c: u8| edge(c) || matches!(c, b'.' | b'_' | b'-');

    match segment.as_bytes() {
        [first, middle @ .., last] => edge(*first) && edge(*last) && middle.iter().all(|c| inner(*c)),
        _ => false,
    }
}

/// Checks shared by every wasm proposal: no surrounding whitespace,
/// non-empty, within the configured length. Title first, then description.
pub fn validate_proposal_commons(
    title: &str,
    description: &str,
    rules: &dyn ValidationRules,
) -> Result<()> {
    if title.trim() != title {
        return Err(WasmError::InvalidRequest(
            "proposal title must not start/end with white spaces".to_string(),
        ));
    }
    if title.is_empty() {
        return Err(WasmError::MissingField("proposal title cannot be blank".to_string()));
    }
    if title.len() > rules.max_title_len() {
        return Err(WasmError::InvalidRequest(format!(
            "proposal title is longer than max length of {}",
            rules.max_title_len()
        )));
    }
    if description.trim() != description {
        return Err(WasmError::InvalidRequest(
            "proposal description must not start/end with white spaces".to_string(),
        ));
    }
    if description.is_empty() {
        return Err(WasmError::MissingField(
            "proposal description cannot be blank".to_string(),
        ));
    }
    if description.len() > rules.max_description_len() {
        return Err(WasmError::InvalidRequest(format!(
            "proposal description is longer than max length of {}",
            rules.max_description_len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod builder {
        use super::*;

        #[rstest(
            input,
            case(""),
            case("cosmwasm/rust-optimizer:0.12.0"),
            case("cosmwasm/workspace-optimizer:0.10.4"),
            case("ghcr.io/cosmwasm/optimizer:v1_0"),
            case("my-org/my.image/tool:latest")
        )]
        fn valid(input: &str) {
            assert!(ContentLimits::default().validate_builder(input).is_ok());
        }

        #[rstest(
            input,
            case("rust-optimizer:0.12.0"),
            case("cosmwasm/rust-optimizer"),
            case("CosmWasm/rust-optimizer:0.12.0"),
            case("cosmwasm/rust-optimizer-:0.12.0"),
            case("cosmwasm/a:0.12.0"),
            case("cosmwasm/rust-optimizer:.12"),
            case("cosmwasm/rust-optimizer:")
        )]
        fn invalid(input: &str) {
            let err = ContentLimits::default().validate_builder(input).unwrap_err();
            assert!(matches!(err, WasmError::InvalidRequest(_)));
        }

        #[test]
        fn too_long() {
            let builder = format!("cosmwasm/{}:1.0", "a".repeat(MAX_BUILD_TAG_SIZE));
            assert!(ContentLimits::default().validate_builder(&builder).is_err());
        }

        #[test]
        fn length_checked_before_format() {
            let builder = "X".repeat(MAX_BUILD_TAG_SIZE + 1);
            let err = ContentLimits::default().validate_builder(&builder).unwrap_err();
            assert_eq!(
                err,
                WasmError::InvalidRequest(format!("builder tag longer than {} characters", MAX_BUILD_TAG_SIZE))
            );
        }
    }

    mod source_url {
        use super::*;

        #[rstest(
            input,
            case(""),
            case("https://github.com/CosmWasm/cosmwasm-examples"),
            case("https://example.com:8080/path?query=value")
        )]
        fn valid(input: &str) {
            assert!(ContentLimits::default().validate_source_url(input).is_ok());
        }

        #[rstest(
            input,
            case("http://github.com/CosmWasm/cosmwasm-examples"),
            case("github.com/CosmWasm"),
            case("/relative/path"),
            case("ftp://example.com/code.wasm")
        )]
        fn invalid(input: &str) {
            assert!(ContentLimits::default().validate_source_url(input).is_err());
        }
    }

    mod code {
        use super::*;

        #[test]
        fn empty_and_oversized() {
            let rules = ContentLimits::default();
            assert!(rules.validate_code(&[]).is_err());
            assert!(rules.validate_code(&vec![0u8; MAX_WASM_SIZE + 1]).is_err());
            assert!(rules.validate_code(&vec![0u8; MAX_WASM_SIZE]).is_ok());
        }
    }

    mod label {
        use super::*;

        #[rstest(input, case("foo"), case("a"), case(& "a".repeat(MAX_LABEL_SIZE)))]
        fn valid(input: &str) {
            assert!(ContentLimits::default().validate_label(input).is_ok());
        }

        #[rstest(input, case(""), case(& "a".repeat(MAX_LABEL_SIZE + 1)))]
        fn invalid(input: &str) {
            assert!(ContentLimits::default().validate_label(input).is_err());
        }
    }

    mod address {
        use super::*;

        #[test]
        fn length_is_enforced() {
            let rules = ContentLimits::default();
            assert!(rules.verify_address(&Address::from([1u8; ADDRESS_LEN])).is_ok());
            assert!(rules.verify_address(&Address::from([1u8; ADDRESS_LEN - 1])).is_err());
            assert!(rules.verify_address(&Address::default()).is_err());

            let wide = ContentLimits { address_len: 32, ..Default::default() };
            assert!(wide.verify_address(&Address::from([1u8; 32])).is_ok());
        }
    }

    mod commons {
        use super::*;

        #[rstest(
            title,
            description,
            case("Foo", "Bar"),
            case(& "a".repeat(MAX_TITLE_LENGTH), "Bar"),
            case("Foo", & "a".repeat(MAX_DESCRIPTION_LENGTH))
        )]
        fn valid(title: &str, description: &str) {
            assert!(validate_proposal_commons(title, description, &ContentLimits::default()).is_ok());
        }

        #[rstest(
            title,
            description,
            case("", "Bar"),
            case(" Foo", "Bar"),
            case("Foo ", "Bar"),
            case(& "a".repeat(MAX_TITLE_LENGTH + 1), "Bar"),
            case("Foo", ""),
            case("Foo", " Bar"),
            case("Foo", "Bar\n"),
            case("Foo", & "a".repeat(MAX_DESCRIPTION_LENGTH + 1))
        )]
        fn invalid(title: &str, description: &str) {
            assert!(validate_proposal_commons(title, description, &ContentLimits::default()).is_err());
        }

        #[test]
        fn blank_is_missing_field() {
            let err = validate_proposal_commons("", "Bar", &ContentLimits::default()).unwrap_err();
            assert!(matches!(err, WasmError::MissingField(_)));
        }
    }
}
