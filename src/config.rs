//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "jumping-lamp")]
#[command(about = "A desk lamp jumping around a textured room")]
pub struct AppConfig {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Animation ticks per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Directory the room textures are read from
    #[arg(long, default_value = "assets")]
    pub asset_dir: PathBuf,

    /// Start with the animation running instead of paused
    #[arg(long)]
    pub animate: bool,
}

impl AppConfig {
    /// Time between two animation ticks.
    pub fn tick_duration_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            fps: 30,
            asset_dir: PathBuf::from("assets"),
            animate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_match_default() {
        let parsed = AppConfig::try_parse_from(["jumping-lamp"]).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = AppConfig::try_parse_from([
            "jumping-lamp",
            "--width",
            "1024",
            "--fps",
            "60",
            "--asset-dir",
            "textures",
            "--animate",
        ])
        .unwrap();
        assert_eq!(parsed.width, 1024);
        assert_eq!(parsed.height, 800);
        assert_eq!(parsed.asset_dir, PathBuf::from("textures"));
        assert!(parsed.animate);
        assert_eq!(parsed.tick_duration_millis(), 16);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(AppConfig::try_parse_from(["jumping-lamp", "--fps", "0"]).is_err());
    }

    #[test]
    fn default_ticks_thirty_times_a_second() {
        assert_eq!(AppConfig::default().tick_duration_millis(), 33);
    }
}
