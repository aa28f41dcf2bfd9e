//! Configuration management for geoheat.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::colormaps::get_colormap;
use crate::error::{GeoheatError, Result};
use crate::geobox::Grid;
use crate::interpolation::{get_strategy, DEFAULT_BANDWIDTH};
use crate::renderer::{HeatmapRenderer, DEFAULT_BORDER};

/// Command-line arguments for geoheat
#[derive(Parser, Debug, Default)]
#[command(name = "geoheat")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with the samples to render (built-in demo set when omitted)
    pub samples: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, env = "GEOHEAT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, env = "GEOHEAT_WIDTH")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, env = "GEOHEAT_HEIGHT")]
    pub height: Option<u32>,

    /// Padding around the samples as a fraction of their extent
    #[arg(short, long, env = "GEOHEAT_BORDER")]
    pub border: Option<f64>,

    /// Interpolation strategy (idw, gaussian)
    #[arg(short, long, env = "GEOHEAT_STRATEGY")]
    pub strategy: Option<String>,

    /// Gaussian kernel bandwidth in degrees
    #[arg(long, env = "GEOHEAT_BANDWIDTH")]
    pub bandwidth: Option<f64>,

    /// Color mapper (linear, colorblind, blue, cyan)
    #[arg(short = 'm', long, env = "GEOHEAT_COLORMAP")]
    pub colormap: Option<String>,

    /// Opacity passed to color mappers that use it
    #[arg(short, long, env = "GEOHEAT_ALPHA")]
    pub alpha: Option<u8>,

    /// Number of render threads
    #[arg(short, long, env = "GEOHEAT_WORKERS")]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "GEOHEAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GEOHEAT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Padding fraction around the samples
    #[serde(default = "default_border")]
    pub border: f64,

    /// Interpolation strategy name
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// Gaussian kernel bandwidth
    #[serde(default = "default_bandwidth")]
    pub bandwidth: f64,

    /// Color mapper name
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Opacity for pass-through color mappers
    #[serde(default = "default_alpha")]
    pub alpha: u8,
}

impl RenderConfig {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height)
    }

    /// Build the renderer described by this configuration
    pub fn build_renderer(&self) -> Result<HeatmapRenderer> {
        let strategy = get_strategy(&self.strategy, self.bandwidth)?;
        let colormap = get_colormap(&self.colormap)?;
        Ok(HeatmapRenderer::new(strategy, colormap)
            .with_border(self.border)
            .with_alpha(self.alpha))
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Sample file; the demo set is used when absent
    #[serde(default)]
    pub samples: Option<PathBuf>,

    /// Output PNG path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Number of render threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(config_path) => Self::load_from_file(config_path)?,
            None => Config::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override with every argument that was given
    fn apply_args(&mut self, args: Args) {
        if args.samples.is_some() {
            self.samples = args.samples;
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        if let Some(width) = args.width {
            self.render.width = width;
        }
        if let Some(height) = args.height {
            self.render.height = height;
        }
        if let Some(border) = args.border {
            self.render.border = border;
        }
        if let Some(strategy) = args.strategy {
            self.render.strategy = strategy;
        }
        if let Some(bandwidth) = args.bandwidth {
            self.render.bandwidth = bandwidth;
        }
        if let Some(colormap) = args.colormap {
            self.render.colormap = colormap;
        }
        if let Some(alpha) = args.alpha {
            self.render.alpha = alpha;
        }
        if args.workers.is_some() {
            self.workers = args.workers;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(GeoheatError::Config {
                message: "Output path cannot be empty".to_string(),
            });
        }

        if self.render.width == 0 || self.render.height == 0 {
            return Err(GeoheatError::Config {
                message: format!(
                    "Image dimensions must be positive, got {}x{}",
                    self.render.width, self.render.height
                ),
            });
        }

        if !self.render.border.is_finite() || self.render.border < 0.0 {
            return Err(GeoheatError::Config {
                message: format!(
                    "Border must be a finite fraction >= 0, got {}",
                    self.render.border
                ),
            });
        }

        if !self.render.bandwidth.is_finite() || self.render.bandwidth <= 0.0 {
            return Err(GeoheatError::Config {
                message: format!(
                    "Bandwidth must be a positive number, got {}",
                    self.render.bandwidth
                ),
            });
        }

        if self.workers == Some(0) {
            return Err(GeoheatError::Config {
                message: "Worker count cannot be 0".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(GeoheatError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Resolve names the same way the renderer does
        get_strategy(&self.render.strategy, self.render.bandwidth).map_err(|e| {
            GeoheatError::Config {
                message: e.to_string(),
            }
        })?;
        get_colormap(&self.render.colormap).map_err(|e| GeoheatError::Config {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            samples: None,
            output: default_output(),
            workers: None,
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            border: default_border(),
            strategy: default_strategy(),
            bandwidth: default_bandwidth(),
            colormap: default_colormap(),
            alpha: default_alpha(),
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_border() -> f64 {
    DEFAULT_BORDER
}

fn default_strategy() -> String {
    "idw".to_string()
}

fn default_bandwidth() -> f64 {
    DEFAULT_BANDWIDTH
}

fn default_colormap() -> String {
    "linear".to_string()
}

fn default_alpha() -> u8 {
    255
}

fn default_output() -> PathBuf {
    PathBuf::from("heatmap.png")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.width, 800);
        assert_eq!(config.render.height, 600);
        assert_eq!(config.render.border, 0.2);
        assert_eq!(config.render.strategy, "idw");
        assert_eq!(config.render.bandwidth, 0.1);
        assert_eq!(config.render.colormap, "linear");
        assert_eq!(config.output, PathBuf::from("heatmap.png"));
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"render": {"strategy": "gaussian", "width": 64}}"#).unwrap();
        assert_eq!(config.render.strategy, "gaussian");
        assert_eq!(config.render.width, 64);
        assert_eq!(config.render.height, 600);
        assert_eq!(config.output, PathBuf::from("heatmap.png"));
    }

    #[test]
    fn test_args_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"render": {{"width": 64, "height": 32, "colormap": "blue"}}, "output": "file.png"}}"#
        )
        .unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            width: Some(128),
            output: Some(PathBuf::from("cli.png")),
            ..Default::default()
        };
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.render.width, 128);
        assert_eq!(config.render.height, 32);
        assert_eq!(config.render.colormap, "blue");
        assert_eq!(config.output, PathBuf::from("cli.png"));
    }

    #[test]
    fn test_args_without_file() {
        let args = Args {
            strategy: Some("gaussian".to_string()),
            bandwidth: Some(0.5),
            workers: Some(2),
            ..Default::default()
        };
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.render.strategy, "gaussian");
        assert_eq!(config.render.bandwidth, 0.5);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.render.width, 800);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.render.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.border = -0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.bandwidth = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.strategy = "kriging".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.colormap = "viridis".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.workers = Some(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_matches_renderer_lookup() {
        let mut config = Config::default();
        config.render.strategy = "IDW".to_string();
        config.render.colormap = "Linear".to_string();
        assert!(config.validate().is_ok());
        assert!(config.render.build_renderer().is_ok());

        let mut config = Config::default();
        config.render.strategy = "Gaussian".to_string();
        config.render.colormap = "CYAN".to_string();
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.render.strategy = "kriging".to_string();
        assert!(matches!(
            config.validate(),
            Err(GeoheatError::Config { .. })
        ));
    }

    #[test]
    fn test_build_renderer() {
        let mut config = Config::default();
        config.render.strategy = "gaussian".to_string();
        config.render.colormap = "colorblind".to_string();
        let renderer = config.render.build_renderer().unwrap();
        assert_eq!(renderer.strategy().name(), "gaussian");
        assert_eq!(renderer.colormap().name(), "colorblind");
        assert_eq!(config.render.grid().unwrap(), Grid::new(800, 600).unwrap());
    }
}
