//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TWISTOR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use twistor_geometry::{Complex, ProjectiveLine, Quaternion, Spinor};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geometry tolerances
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Inputs for the exploratory session
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TWISTOR_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TWISTOR_DEBUG__LOG_LEVEL=trace -> debug.log_level = "trace"
        figment = figment.merge(Env::prefixed("TWISTOR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Magnitude below which an intersection coordinate counts as zero
    pub intersection_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            intersection_tolerance: ProjectiveLine::INTERSECTION_TOLERANCE,
        }
    }
}

/// Inputs for the exploratory session run by the binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Spacetime events [t, x, y, z]
    pub events: Vec<[f64; 4]>,
    /// Rotation axis [x, y, z] (need not be unit length)
    pub rotation_axis: [f64; 3],
    /// Rotation angle in degrees
    pub rotation_angle_degrees: f64,
    /// λ spinor as [[re, im], [re, im]]
    pub lambda_spinor: [[f64; 2]; 2],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            events: vec![[1.0, 1.0, 1.0, 1.0], [2.0, 2.0, 2.0, 2.0]],
            rotation_axis: [0.0, 1.0, 0.0],
            rotation_angle_degrees: 45.0,
            lambda_spinor: [[1.0, 0.0], [0.0, 1.0]],
        }
    }
}

impl DemoConfig {
    /// Rotation quaternion for the configured axis and angle
    pub fn rotation(&self) -> Result<Quaternion, twistor_geometry::MathError> {
        Quaternion::from_axis_angle(self.rotation_axis, self.rotation_angle_degrees.to_radians())
    }

    /// The configured λ spinor
    pub fn lambda(&self) -> Spinor {
        let [a, b] = self.lambda_spinor;
        Spinor::new(Complex::new(a[0], a[1]), Complex::new(b[0], b[1]))
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
