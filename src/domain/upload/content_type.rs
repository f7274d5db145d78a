//! Content type selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidContentTypeError;

/// Content kinds the service can generate from an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Blog,
    Seo,
    Faq,
    Social,
    Newsletter,
    Quotes,
}

impl ContentType {
    /// All content types, in the order the service lists them
    pub const ALL: [ContentType; 6] = [
        Self::Blog,
        Self::Seo,
        Self::Faq,
        Self::Social,
        Self::Newsletter,
        Self::Quotes,
    ];

    /// Get the wire name used in the upload form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Seo => "seo",
            Self::Faq => "faq",
            Self::Social => "social",
            Self::Newsletter => "newsletter",
            Self::Quotes => "quotes",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = InvalidContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "seo" => Ok(Self::Seo),
            "faq" => Ok(Self::Faq),
            "social" => Ok(Self::Social),
            "newsletter" => Ok(Self::Newsletter),
            "quotes" => Ok(Self::Quotes),
            _ => Err(InvalidContentTypeError {
                input: s.to_string(),
            }),
        }
    }
}
