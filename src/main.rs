use std::{env, fs::File, process::ExitCode};

use ct::{
    camera::{Camera, CameraInfo, PinholeCamera},
    settings::{LoggingSettings, StudioSettings, DEFAULT_SETTINGS_PATH},
    Result, LOG_CAT,
};
use ct_logging::{log_info, log_severe, log_verbose, log_warning, set_logger, Logger};
use ct_math::*;

static LOGGER : Logger = Logger::new();

fn setup_logging(settings: &LoggingSettings) -> Result<()> {
    LOGGER.set_max_level(settings.max_level()?);
    LOGGER.set_always_flush(settings.always_flush);

    if let Some(path) = &settings.file {
        let file = File::create(path)?;
        if LOGGER.add_writer(Box::new(file)).is_err() {
            log_warning!(LOG_CAT, "No writer slot left for log file '{}'", path.display());
        }
    }
    Ok(())
}

fn run(settings_path: &str) -> Result<()> {
    let settings = StudioSettings::load(settings_path)?;
    settings.validate()?;
    setup_logging(&settings.logging)?;
    log_info!(LOG_CAT, "Loaded settings from '{}'", settings_path);

    let camera = Camera::new(CameraInfo::from(&settings.camera));
    log_info!(LOG_CAT, "Camera '{}'", camera.name());
    log_verbose!(LOG_CAT, "view: {}", camera.view());
    log_verbose!(LOG_CAT, "projection: {}", camera.projection());

    let points = [
        f32v3::zero(),
        f32v3::new(1.0, 1.0, 0.0),
        f32v3::new(-2.0, 0.5, -10.0),
        f32v3::new(0.0, 0.0, 10.0),
    ];
    for point in points {
        match camera.project(point) {
            Some(ndc) => log_info!(LOG_CAT, "{point} -> ndc {ndc}"),
            None      => log_info!(LOG_CAT, "{point} is behind the camera"),
        }
    }

    let pinhole = PinholeCamera::from(&settings.vision);
    log_verbose!(LOG_CAT, "intrinsics: {}", pinhole.intrinsics);
    for point in points {
        match pinhole.project(point) {
            Some(pixel) => log_info!(LOG_CAT, "{point} -> pixel {pixel}"),
            None        => log_info!(LOG_CAT, "{point} is not in front of the pinhole camera"),
        }
    }
    let center = pinhole.unproject(pinhole.principal_point(), 1.0);
    log_info!(LOG_CAT, "principal point at depth 1 -> {center}");

    Ok(())
}

fn main() -> ExitCode {
    set_logger(&LOGGER);

    let settings_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let result = run(&settings_path);
    if let Err(err) = &result {
        log_severe!(LOG_CAT, main, "{err}");
    }
    LOGGER.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
