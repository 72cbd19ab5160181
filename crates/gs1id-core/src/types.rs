/// Input types for the validator: [`IdentifierType`], [`ValidationRequest`],
/// and the [`RequestError`] raised when a caller breaks the input contract.
///
/// A [`ValidationRequest`] can only be built through [`ValidationRequest::new`]
/// (or its `Deserialize` impl, which re-runs the same checks), so an empty
/// value or an unknown type never reaches rule evaluation.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A violation of the validator's input contract.
///
/// These are caller errors ("bad request"), distinct from an identifier that
/// was evaluated and found invalid.  An invalid identifier is a normal
/// [`crate::ValidationOutcome`] with `is_valid == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The identifier value was the empty string.
    EmptyValue,
    /// The identifier type is not one of the eight recognised codes.
    UnrecognizedType {
        /// The type text that was rejected.
        got: String,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => f.write_str("identifier value must not be empty"),
            Self::UnrecognizedType { got } => write!(
                f,
                "unrecognized identifier type {got:?}: expected one of {}",
                IdentifierType::codes().join(", ")
            ),
        }
    }
}

impl std::error::Error for RequestError {}

// ---------------------------------------------------------------------------
// IdentifierType
// ---------------------------------------------------------------------------

/// The GS1 identifier families understood by the validator.
///
/// Serialises to and from the upper-case code (`"GTIN"`, `"GLN"`, …).
/// Parsing is ASCII case-insensitive, so `"gtin"` and `"Gtin"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentifierType {
    /// Global Trade Item Number (8, 12, 13 or 14 digits).
    Gtin,
    /// Global Location Number (13 digits).
    Gln,
    /// Serial Shipping Container Code (18 digits).
    Sscc,
    /// Global Returnable Asset Identifier (alphanumeric).
    Grai,
    /// Global Individual Asset Identifier (alphanumeric).
    Giai,
    /// Global Service Relation Number (18 digits).
    Gsrn,
    /// Global Document Type Identifier (13-digit base plus optional serial).
    Gdti,
    /// Any other identifier; only a generic charset and length rule applies.
    Other,
}

impl IdentifierType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Gtin,
        Self::Gln,
        Self::Sscc,
        Self::Grai,
        Self::Giai,
        Self::Gsrn,
        Self::Gdti,
        Self::Other,
    ];

    /// Returns the canonical upper-case code for this type.
    pub fn code(self) -> &'static str {
        match self {
            Self::Gtin => "GTIN",
            Self::Gln => "GLN",
            Self::Sscc => "SSCC",
            Self::Grai => "GRAI",
            Self::Giai => "GIAI",
            Self::Gsrn => "GSRN",
            Self::Gdti => "GDTI",
            Self::Other => "OTHER",
        }
    }

    /// Returns the canonical codes of every variant.
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.into_iter().map(Self::code).collect()
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for IdentifierType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| RequestError::UnrecognizedType { got: s.to_owned() })
    }
}

impl Serialize for IdentifierType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for IdentifierType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// ValidationRequest
// ---------------------------------------------------------------------------

/// A single identifier to validate.
///
/// The value is kept verbatim: no trimming or case folding is applied, so
/// surrounding whitespace is measured and reported by the rules like any
/// other character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    #[serde(rename = "identifier_value")]
    value: String,
    #[serde(rename = "identifier_type")]
    identifier_type: IdentifierType,
}

impl ValidationRequest {
    /// Builds a request, rejecting an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyValue`] if `value` is empty.
    pub fn new(
        value: impl Into<String>,
        identifier_type: IdentifierType,
    ) -> Result<Self, RequestError> {
        let value = value.into();
        if value.is_empty() {
            return Err(RequestError::EmptyValue);
        }
        Ok(Self {
            value,
            identifier_type,
        })
    }

    /// Builds a request from untyped text, as received from a form or a file.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyValue`] for an empty value and
    /// [`RequestError::UnrecognizedType`] for an unknown type code.  The value
    /// is checked first.
    pub fn parse(value: &str, identifier_type: &str) -> Result<Self, RequestError> {
        if value.is_empty() {
            return Err(RequestError::EmptyValue);
        }
        let identifier_type = identifier_type.parse()?;
        Self::new(value, identifier_type)
    }

    /// The identifier value exactly as supplied.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The identifier family to validate against.
    pub fn identifier_type(&self) -> IdentifierType {
        self.identifier_type
    }
}

/// Wire shape of a request before the input contract is enforced.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRequest {
    #[serde(alias = "identifierValue")]
    pub(crate) identifier_value: String,
    #[serde(alias = "identifierType")]
    pub(crate) identifier_type: String,
}

impl RawRequest {
    /// Applies the input contract.
    pub(crate) fn into_request(self) -> Result<ValidationRequest, RequestError> {
        ValidationRequest::parse(&self.identifier_value, &self.identifier_type)
    }
}

impl<'de> Deserialize<'de> for ValidationRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawRequest::deserialize(deserializer)?
            .into_request()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn parse_every_canonical_code() {
        for ty in IdentifierType::ALL {
            let parsed: IdentifierType = ty.code().parse().expect("canonical code parses");
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("gtin".parse::<IdentifierType>(), Ok(IdentifierType::Gtin));
        assert_eq!("Other".parse::<IdentifierType>(), Ok(IdentifierType::Other));
    }

    #[test]
    fn parse_unknown_type_is_rejected() {
        let err = "EAN".parse::<IdentifierType>().expect_err("EAN is not a type");
        assert_eq!(
            err,
            RequestError::UnrecognizedType {
                got: "EAN".to_owned()
            }
        );
        assert!(err.to_string().contains("GTIN"), "{err}");
    }

    #[test]
    fn parse_type_with_whitespace_is_rejected() {
        assert!(" GTIN".parse::<IdentifierType>().is_err());
    }

    #[test]
    fn display_is_canonical_code() {
        assert_eq!(IdentifierType::Gdti.to_string(), "GDTI");
        assert_eq!(IdentifierType::Other.to_string(), "OTHER");
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_eq!(
            ValidationRequest::new("", IdentifierType::Gtin),
            Err(RequestError::EmptyValue)
        );
    }

    #[test]
    fn parse_checks_value_before_type() {
        assert_eq!(
            ValidationRequest::parse("", "NOPE"),
            Err(RequestError::EmptyValue)
        );
    }

    #[test]
    fn value_is_not_trimmed() {
        let req = ValidationRequest::new(" 123 ", IdentifierType::Other).expect("non-empty");
        assert_eq!(req.value(), " 123 ");
    }

    #[test]
    fn deserialize_snake_case_fields() {
        let req: ValidationRequest = serde_json::from_str(
            r#"{"identifier_value":"4006381333931","identifier_type":"GTIN"}"#,
        )
        .expect("valid request");
        assert_eq!(req.value(), "4006381333931");
        assert_eq!(req.identifier_type(), IdentifierType::Gtin);
    }

    #[test]
    fn deserialize_camel_case_aliases() {
        let req: ValidationRequest =
            serde_json::from_str(r#"{"identifierValue":"ABC-123","identifierType":"other"}"#)
                .expect("valid request");
        assert_eq!(req.identifier_type(), IdentifierType::Other);
    }

    #[test]
    fn deserialize_enforces_contract() {
        let empty = serde_json::from_str::<ValidationRequest>(
            r#"{"identifier_value":"","identifier_type":"GTIN"}"#,
        );
        assert!(empty.is_err());
        let unknown = serde_json::from_str::<ValidationRequest>(
            r#"{"identifier_value":"123","identifier_type":"ISBN"}"#,
        );
        assert!(unknown.is_err());
    }

    #[test]
    fn serialize_uses_canonical_code() {
        let req = ValidationRequest::new("ABC-123", IdentifierType::Other).expect("non-empty");
        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(
            json,
            r#"{"identifier_value":"ABC-123","identifier_type":"OTHER"}"#
        );
    }
}
