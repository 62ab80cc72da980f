/// TOML configuration for the terminal host
use anyhow::Context;
use isle3d_core::MotionConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub motion: MotionConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    pub fps: u32,
    /// Terminals without key release reporting get a synthetic key-up after
    /// this long without an arrow key repeat. Must exceed the keyboard's
    /// auto-repeat delay, commonly up to 660 ms.
    pub key_release_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            key_release_ms: 600,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.motion.validate()?;
        anyhow::ensure!(config.terminal.fps > 0, "terminal.fps must be positive");
        Ok(config)
    }
}
