use crate::utils::error::{Result, ScrapeError};

/// Decides whether a phone number is undesirable. Three independent rejection
/// rules; any one of them firing excludes the number.
#[derive(Debug, Clone)]
pub struct NumberFilter {
    blacklist: Vec<String>,
}

impl NumberFilter {
    pub fn new(blacklist: Vec<String>) -> Self {
        Self { blacklist }
    }

    /// Returns `true` when the number should be excluded.
    ///
    /// Rules, checked in order:
    /// 1. contains any blacklisted substring anywhere;
    /// 2. starts with `0` and contains another `0` anywhere after it;
    /// 3. contains a run of three or more identical consecutive digits.
    ///
    /// An empty input means extraction upstream produced garbage, so it is an
    /// error rather than a verdict.
    pub fn is_unwanted(&self, phone_number: &str) -> Result<bool> {
        let mut chars = phone_number.chars();
        let first = chars.next().ok_or(ScrapeError::InvalidInput)?;

        if self
            .blacklist
            .iter()
            .any(|unwanted| phone_number.contains(unwanted.as_str()))
        {
            return Ok(true);
        }

        // Literal rule from the business side: a leading zero plus any other
        // zero, not "two zeros anywhere".
        if first == '0' && chars.as_str().contains('0') {
            return Ok(true);
        }

        if has_repeated_run(phone_number) {
            return Ok(true);
        }

        Ok(false)
    }
}

/// True when the string contains three or more identical consecutive
/// characters. Longer runs contain a length-3 run, so a plain scan is
/// equivalent to the `(\d)\1{2,3}` pattern for a yes/no answer.
fn has_repeated_run(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
