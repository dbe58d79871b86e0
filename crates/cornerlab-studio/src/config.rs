//! Studio settings: defaults, then environment, then the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};

use cornerlab_engine::host::{HostConfig, LayerMode};
use cornerlab_engine::strategy::{CornerPercent, StrategyKind};

pub const ENV_IMAGE: &str = "CORNERLAB_IMAGE";
pub const ENV_STRATEGY: &str = "CORNERLAB_STRATEGY";
pub const ENV_CORNER: &str = "CORNERLAB_CORNER";
pub const ENV_LAYER: &str = "CORNERLAB_LAYER";

#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Image to show; a generated gradient when absent.
    pub image: Option<PathBuf>,
    pub host: HostConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            image: None,
            host: HostConfig::default().with_corner_percent(CornerPercent::new(10)),
        }
    }
}

impl StudioConfig {
    /// Reads the process environment and arguments.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds the config from `args` (without the program name) and an
    /// environment lookup. A positional argument overrides `CORNERLAB_IMAGE`.
    pub fn resolve<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = env(ENV_IMAGE) {
            config.image = Some(PathBuf::from(path));
        }
        if let Some(value) = env(ENV_STRATEGY) {
            let kind: StrategyKind = value.parse().with_context(|| format!("invalid {ENV_STRATEGY}"))?;
            config.host = config.host.with_strategy(kind);
        }
        if let Some(value) = env(ENV_CORNER) {
            let percent: i32 = value
                .trim()
                .trim_end_matches('%')
                .parse()
                .with_context(|| format!("invalid {ENV_CORNER} {value:?}"))?;
            config.host = config.host.with_corner_percent(CornerPercent::new(percent));
        }
        if let Some(value) = env(ENV_LAYER) {
            let mode: LayerMode = value.parse().with_context(|| format!("invalid {ENV_LAYER}"))?;
            config.host = config.host.with_layer_mode(mode);
        }

        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            config.image = Some(PathBuf::from(path));
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument {extra:?} (usage: cornerlab-studio [IMAGE])");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve(args: &[&str], vars: &[(&str, &str)]) -> Result<StudioConfig> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        StudioConfig::resolve(args.iter().map(|a| a.to_string()), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_input() {
        let config = resolve(&[], &[]).unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.image, None);
        assert_eq!(config.host.strategy, StrategyKind::PathClip);
        assert_eq!(config.host.layer_mode, LayerMode::Hardware);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = resolve(
            &[],
            &[
                (ENV_IMAGE, "photo.png"),
                (ENV_STRATEGY, "effect-clip"),
                (ENV_CORNER, "35%"),
                (ENV_LAYER, "software"),
            ],
        )
        .unwrap();
        assert_eq!(config.image, Some(PathBuf::from("photo.png")));
        assert_eq!(config.host.strategy, StrategyKind::EffectClip);
        assert_eq!(config.host.corner_percent.get(), 35);
        assert_eq!(config.host.layer_mode, LayerMode::Software);
    }

    #[test]
    fn argument_wins_over_environment() {
        let config = resolve(&["cli.jpg"], &[(ENV_IMAGE, "env.png")]).unwrap();
        assert_eq!(config.image, Some(PathBuf::from("cli.jpg")));
    }

    #[test]
    fn corner_percent_is_clamped() {
        let config = resolve(&[], &[(ENV_CORNER, "250")]).unwrap();
        assert_eq!(config.host.corner_percent, CornerPercent::MAX);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = resolve(&[], &[(ENV_STRATEGY, "  "), (ENV_IMAGE, "")]).unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn bad_values_are_errors() {
        let err = resolve(&[], &[(ENV_STRATEGY, "blur")]).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_STRATEGY));
        assert!(resolve(&[], &[(ENV_CORNER, "lots")]).is_err());
        assert!(resolve(&[], &[(ENV_LAYER, "metal")]).is_err());
        assert!(resolve(&["a.png", "b.png"], &[]).is_err());
    }
}
