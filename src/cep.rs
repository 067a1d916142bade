//! CEP (Brazilian postal code) validation and the shared request type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A valid CEP is exactly 8 ASCII digits.
static CEP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("valid regex"));

/// Request body shared by `POST /cep` and `POST /weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepRequest {
    /// The postal code to look up.
    pub cep: String,
}

/// Check whether a string is a well-formed CEP.
pub fn is_valid_cep(cep: &str) -> bool {
    CEP_PATTERN.is_match(cep)
}
