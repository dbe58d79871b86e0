use std::fmt;
use std::str::FromStr;

/// Error returned when a configuration name does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// What was being parsed, e.g. `"strategy"`.
    pub what: &'static str,
    pub input: String,
    /// Accepted spellings.
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} {:?} (expected one of: {})",
            self.what,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseKindError {}

/// The three interchangeable corner-rounding techniques.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrategyKind {
    /// Fill a rounded-rect path with an image pattern on every render.
    #[default]
    PathClip,
    /// Draw the plain image and let the compositor clip to an outline.
    OutlineClip,
    /// Fill a rectangle whose corners are rounded by a path effect.
    EffectClip,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::PathClip, Self::OutlineClip, Self::EffectClip];

    const NAMES: &'static [&'static str] = &["path-clip", "outline-clip", "effect-clip"];

    /// Stable configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PathClip => "path-clip",
            Self::OutlineClip => "outline-clip",
            Self::EffectClip => "effect-clip",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        match norm.as_str() {
            "path-clip" | "path" | "shader" => Ok(Self::PathClip),
            "outline-clip" | "outline" => Ok(Self::OutlineClip),
            "effect-clip" | "effect" | "corner-effect" => Ok(Self::EffectClip),
            _ => Err(ParseKindError {
                what: "strategy",
                input: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
