use std::fmt;
use std::str::FromStr;

use crate::paint::Color;
use crate::strategy::{CornerPercent, ParseKindError, StrategyKind};

/// How the host's output reaches the screen.
///
/// Only decides where the compositor clip is applied; strategies behave the
/// same in both modes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LayerMode {
    /// Layer is uploaded as is; the GPU presenter applies the outline clip.
    #[default]
    Hardware,
    /// Layer is composited into the frame on the CPU, outline clip included.
    Software,
}

impl LayerMode {
    const NAMES: &'static [&'static str] = &["hardware", "software"];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
        }
    }
}

impl fmt::Display for LayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerMode {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hardware" | "hw" | "gpu" => Ok(Self::Hardware),
            "software" | "sw" | "cpu" => Ok(Self::Software),
            _ => Err(ParseKindError {
                what: "layer mode",
                input: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// Initial host settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HostConfig {
    pub strategy: StrategyKind,
    pub corner_percent: CornerPercent,
    pub layer_mode: LayerMode,
    /// Background behind the rounded image.
    pub clear_color: Color,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::PathClip,
            corner_percent: CornerPercent::MIN,
            layer_mode: LayerMode::Hardware,
            clear_color: Color::from_srgb_u8(24, 24, 28, 255),
        }
    }
}

impl HostConfig {
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_corner_percent(mut self, percent: CornerPercent) -> Self {
        self.corner_percent = percent;
        self
    }

    pub fn with_layer_mode(mut self, mode: LayerMode) -> Self {
        self.layer_mode = mode;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = HostConfig::default();
        assert_eq!(c.strategy, StrategyKind::PathClip);
        assert_eq!(c.corner_percent.get(), 0);
        assert_eq!(c.layer_mode, LayerMode::Hardware);
        assert!(c.clear_color.is_opaque());
    }

    #[test]
    fn builder_overrides() {
        let c = HostConfig::default()
            .with_strategy(StrategyKind::EffectClip)
            .with_corner_percent(CornerPercent::new(30))
            .with_layer_mode(LayerMode::Software);
        assert_eq!(c.strategy, StrategyKind::EffectClip);
        assert_eq!(c.corner_percent.get(), 30);
        assert_eq!(c.layer_mode, LayerMode::Software);
    }

    #[test]
    fn layer_mode_parses() {
        assert_eq!("SW".parse::<LayerMode>(), Ok(LayerMode::Software));
        assert_eq!("hardware".parse::<LayerMode>(), Ok(LayerMode::Hardware));
        let err = "vulkan".parse::<LayerMode>().unwrap_err();
        assert_eq!(err.what, "layer mode");
        assert_eq!(LayerMode::Software.to_string(), "software");
    }
}
