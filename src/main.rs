use blue_sniper::camera::CameraCapture;
use blue_sniper::cli::{self, Args, Command};
use blue_sniper::config::Config;
use blue_sniper::game::{Point, Session, SessionReport, SystemClock};
use blue_sniper::input::CrosstermInput;
use blue_sniper::render::Backdrop;
use blue_sniper::terminal::TerminalDisplay;
use blue_sniper::GameError;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_file.as_deref());

    match &args.command {
        Some(Command::ListCameras) => return cli::list_cameras(),
        Some(Command::Config { action }) => {
            return cli::handle_config_action(action.clone(), args.config.as_deref())
        }
        None => {}
    }

    match play(&args) {
        Ok(report) => {
            println!("Game Over! Final Score: {}", report.score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings and errors only. The TUI owns the
/// terminal, so `--log-file` is the way to see logs during a game.
fn init_logging(log_file: Option<&Path>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        match std::fs::File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!(
                "Warning: cannot open log file '{}': {}; logging to stderr",
                path.display(),
                e
            ),
        }
    }

    builder.init();
}

/// SIGINT/SIGTERM set the returned flag; the session polls it every frame.
fn setup_shutdown_handler() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })?;
    Ok(flag)
}

fn play(args: &Args) -> Result<SessionReport, GameError> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    let backdrop = config
        .display
        .background
        .as_deref()
        .map(|path| Backdrop::load(path, config.display.background_opacity as f32))
        .transpose()?;
    let shutdown = setup_shutdown_handler()?;

    let settings = config.camera_settings();
    let mut camera = CameraCapture::open(settings.clone())?;
    camera.start()?;
    let resolution = camera.actual_resolution().unwrap_or(settings.resolution);
    log::info!(
        "camera streaming at {}x{} @ {} fps",
        resolution.width,
        resolution.height,
        camera.actual_fps().unwrap_or(settings.fps)
    );

    let rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut display = TerminalDisplay::new(config.charset(), config.display.invert)?;

    let result = Session::new(
        config.rules(),
        Point::center_of(resolution.width, resolution.height),
        &mut camera,
        CrosstermInput::new(),
        &mut display,
        SystemClock::new(),
        config.detector(),
        rng,
    )
    .with_backdrop(backdrop)
    .with_shutdown_flag(shutdown)
    .run();

    // Terminal first, so any error below prints on a sane screen
    let restored = display.restore();
    camera.stop();

    let report = result?;
    restored?;
    if let Some(reason) = report.end_reason {
        log::info!("game ended: {}", reason);
    }
    Ok(report)
}
