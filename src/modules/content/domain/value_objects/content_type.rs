use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog entry a content record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
    Anime,
    #[serde(other)]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Tv => "tv",
            ContentType::Anime => "anime",
            ContentType::Unknown => "unknown",
        }
    }

    /// Only anime entries take part in series grouping
    pub fn is_anime(&self) -> bool {
        matches!(self, ContentType::Anime)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "movie" => ContentType::Movie,
            "tv" => ContentType::Tv,
            "anime" => ContentType::Anime,
            _ => ContentType::Unknown,
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for ContentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ContentType::from("ANIME"), ContentType::Anime);
        assert_eq!(ContentType::from(" Movie "), ContentType::Movie);
        assert_eq!(ContentType::from("tv"), ContentType::Tv);
    }

    #[test]
    fn test_unrecognised_values_are_unknown() {
        assert_eq!(ContentType::from("ova"), ContentType::Unknown);
        assert!(!ContentType::Unknown.is_anime());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ContentType::Anime).unwrap(), "\"anime\"");
        let parsed: ContentType = serde_json::from_str("\"tv\"").unwrap();
        assert_eq!(parsed, ContentType::Tv);
    }

    #[test]
    fn test_serde_falls_back_to_unknown() {
        let parsed: ContentType = serde_json::from_str("\"podcast\"").unwrap();
        assert_eq!(parsed, ContentType::Unknown);
    }
}
