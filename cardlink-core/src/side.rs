use serde::{Deserialize, Serialize};

/// One of the two opposing factions partitioning the full card pool.
///
/// `Unknown` covers records whose `side` field is missing upstream — they
/// still flow through the pipeline but never participate in cross-side
/// collision disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Light Side
    Light,
    /// Dark Side
    Dark,
    /// Side field absent or unrecognized
    Unknown,
}

impl Side {
    /// Returns the full name of this side.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Unknown => "Unknown",
        }
    }

    /// The short bracketed tag prefixed to display names when a cross-side
    /// name collision needs disambiguating (e.g., `[LS]`, `[DS]`).
    ///
    /// `Unknown` has no tag — unknown-side rows are never disambiguated.
    pub fn bracket_tag(&self) -> &'static str {
        match self {
            Self::Light => "[LS]",
            Self::Dark => "[DS]",
            Self::Unknown => "",
        }
    }

    /// Lenient parse for upstream `side` values. Unrecognized or absent
    /// values map to `Unknown` rather than failing the record.
    pub fn from_raw(s: Option<&str>) -> Self {
        match s {
            Some(v) => v.parse().unwrap_or(Self::Unknown),
            None => Self::Unknown,
        }
    }
}

/// Error when parsing a side from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideParseError(pub String);

impl std::fmt::Display for SideParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown side: '{}'", self.0)
    }
}

impl std::error::Error for SideParseError {}

impl std::str::FromStr for Side {
    type Err = SideParseError;

    /// Parse a side from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" | "ls" | "light side" => Ok(Self::Light),
            "dark" | "ds" | "dark side" => Ok(Self::Dark),
            _ => Err(SideParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        assert_eq!("Light".parse::<Side>().unwrap(), Side::Light);
        assert_eq!("dark".parse::<Side>().unwrap(), Side::Dark);
        assert_eq!("DS".parse::<Side>().unwrap(), Side::Dark);
        assert!("sideways".parse::<Side>().is_err());
    }

    #[test]
    fn from_raw_is_lenient() {
        assert_eq!(Side::from_raw(Some("Light")), Side::Light);
        assert_eq!(Side::from_raw(Some("neither")), Side::Unknown);
        assert_eq!(Side::from_raw(None), Side::Unknown);
    }

    #[test]
    fn bracket_tags() {
        assert_eq!(Side::Light.bracket_tag(), "[LS]");
        assert_eq!(Side::Dark.bracket_tag(), "[DS]");
        assert_eq!(Side::Unknown.bracket_tag(), "");
    }
}
