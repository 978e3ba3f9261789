use std::{fs, io, path::{Path, PathBuf}};
use serde::Deserialize;
use ct_logging::{log_error, log_warning, LogLevel};
use crate::{Error, Result, LOG_CAT};

pub const DEFAULT_SETTINGS_PATH : &str = "studio.toml";

/// Logging settings, `[logging]`
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Maximum log level, parsed with [`LogLevel::from_str`](core::str::FromStr::from_str)
    pub level:        String,
    pub always_flush: bool,
    /// Optional file that receives a copy of the log
    pub file:         Option<PathBuf>,
}

impl LoggingSettings {
    pub fn max_level(&self) -> Result<LogLevel> {
        self.level.parse().map_err(|_| Error::InvalidSetting("logging.level must be one of severe, error, warning, info, verbose or debug"))
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            always_flush: false,
            file: None,
        }
    }
}

/// Graphics camera settings, `[camera]`
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub name:         String,
    /// Vertical field of view in degrees
    pub fov_y:        f32,
    pub aspect_ratio: f32,
    pub near_plane:   f32,
    pub far_plane:    f32,
    pub position:     [f32; 3],
    pub target:       [f32; 3],
    pub up:           [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            name: "camera".to_string(),
            fov_y: 45.0,
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

/// Pinhole camera settings, `[vision]`
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisionSettings {
    /// Focal lengths `fx, fy` in pixels
    pub focal:           [f32; 2],
    /// Principal point `cx, cy` in pixels
    pub principal_point: [f32; 2],
    pub distortion:      [f32; 5],
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            focal: [800.0, 800.0],
            principal_point: [320.0, 240.0],
            distortion: [0.0; 5],
        }
    }
}

/// Settings loaded from `studio.toml`
///
/// Every key is optional, missing keys use their default.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioSettings {
    pub logging: LoggingSettings,
    pub camera:  CameraSettings,
    pub vision:  VisionSettings,
}

impl StudioSettings {
    /// Parse settings from a toml string
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|err| {
            log_error!(LOG_CAT, Self::parse, "Failed to parse studio settings, err: {err}");
            Error::from(err)
        })
    }

    /// Load settings from a file, a missing file results in the default settings
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(toml) => Self::parse(&toml),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_warning!(LOG_CAT, "'{}' does not exist, using default settings", path.display());
                Ok(Self::default())
            },
            Err(err) => {
                log_error!(LOG_CAT, Self::load::<P>, "Failed to read '{}', err: {err}", path.display());
                Err(err.into())
            },
        }
    }

    /// Check that all values are in their valid range
    pub fn validate(&self) -> Result<()> {
        self.logging.max_level()?;

        let camera = &self.camera;
        if !(camera.fov_y > 0.0) {
            return Err(Error::InvalidSetting("camera.fov_y must be positive"));
        }
        if !(camera.aspect_ratio > 0.0) {
            return Err(Error::InvalidSetting("camera.aspect_ratio must be positive"));
        }
        if !(camera.near_plane > 0.0) {
            return Err(Error::InvalidSetting("camera.near_plane must be positive"));
        }
        if !(camera.far_plane > camera.near_plane) {
            return Err(Error::InvalidSetting("camera.far_plane must be larger than camera.near_plane"));
        }

        if !self.vision.focal.iter().all(|&f| f > 0.0) {
            return Err(Error::InvalidSetting("vision.focal must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let settings = StudioSettings::parse("").unwrap();
        assert_eq!(settings, StudioSettings::default());
        assert_eq!(settings.logging.max_level().unwrap(), LogLevel::Info);
        assert_eq!(settings.camera.name, "camera");
        assert_eq!(settings.vision.principal_point, [320.0, 240.0]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_sections() {
        let settings = StudioSettings::parse(r#"
            [logging]
            level = "Debug"
            file = "studio.log"

            [camera]
            fov_y = 60.0
            position = [1.0, 2.0, 3.0]

            [vision]
            focal = [500.0, 510.0]
        "#).unwrap();

        assert_eq!(settings.logging.max_level().unwrap(), LogLevel::Debug);
        assert_eq!(settings.logging.file, Some(PathBuf::from("studio.log")));
        assert!(!settings.logging.always_flush);

        assert_eq!(settings.camera.fov_y, 60.0);
        assert_eq!(settings.camera.position, [1.0, 2.0, 3.0]);
        assert_eq!(settings.camera.far_plane, 1000.0);

        assert_eq!(settings.vision.focal, [500.0, 510.0]);
        assert_eq!(settings.vision.distortion, [0.0; 5]);
    }

    #[test]
    fn malformed_toml() {
        assert!(matches!(StudioSettings::parse("[camera"), Err(Error::ParseSettings(_))));
        assert!(matches!(StudioSettings::parse("[camera]\nfov_y = \"wide\""), Err(Error::ParseSettings(_))));
        assert!(matches!(StudioSettings::parse("[camera]\nposition = [1.0, 2.0]"), Err(Error::ParseSettings(_))));
        assert!(matches!(StudioSettings::parse("[lens]\nzoom = 2.0"), Err(Error::ParseSettings(_))));
    }

    #[test]
    fn invalid_values() {
        let check = |toml: &str| {
            let settings = StudioSettings::parse(toml).unwrap();
            assert!(matches!(settings.validate(), Err(Error::InvalidSetting(_))), "{toml}");
        };

        check("[logging]\nlevel = \"loud\"");
        check("[camera]\nfov_y = 0.0");
        check("[camera]\naspect_ratio = -1.0");
        check("[camera]\nnear_plane = 0.0");
        check("[camera]\nnear_plane = 10.0\nfar_plane = 10.0");
        check("[camera]\nfov_y = nan");
        check("[vision]\nfocal = [800.0, 0.0]");
    }

    #[test]
    fn missing_file_is_default() {
        let settings = StudioSettings::load("this/path/does/not/exist/studio.toml").unwrap();
        assert_eq!(settings, StudioSettings::default());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        // Reading a directory fails with something other than `NotFound`
        let dir = std::env::temp_dir();
        assert!(matches!(StudioSettings::load(&dir), Err(Error::Io(_))));
        assert!(matches!(StudioSettings::load(dir.as_path()), Err(Error::Io(_))));
    }
}
