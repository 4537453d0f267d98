use std::path::{Path, PathBuf};

use clap::Parser;
use macroquad::prelude::*;
use macroquad::window::Conf;
use tracing::{error, info, warn};

use concert_organ::app::OrganController;
use concert_organ::audio::AudioDriver;
use concert_organ::config::{AppConfig, CONFIG_FILE, WINDOW_TITLE};
use concert_organ::input::MacroquadKeyboard;
use concert_organ::panel::{HELP_LINES, PanelView, SpriteSet, SpriteShape};
use concert_organ::util::error::UserError;
use concert_organ::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "concert-organ", about = "Arrow-key organ")]
struct Args {
    /// Path to config JSON file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Directory for log files (overrides the config file).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let config = match AppConfig::load_from(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {e:#}", UserError::config_load_error(&args.config));
            std::process::exit(1);
        }
    };

    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| config.log_dir.as_ref().map(PathBuf::from));
    if let Err(e) = init_logging(log_dir.as_deref(), args.verbose) {
        eprintln!("{}: {e:#}", UserError::logging_init_error());
    }

    info!(config = %args.config.display(), "concert-organ starting");
    for path in [
        &config.audio.main_sample_path,
        &config.audio.easter_egg_sample_path,
    ] {
        if !Path::new(path).exists() {
            warn!("{}", UserError::sample_missing(Path::new(path)));
        }
    }

    let (window_width, window_height) = config.window_size();
    let conf = Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run(config));
}

async fn run(config: AppConfig) {
    let driver = match AudioDriver::new() {
        Ok(d) => d,
        Err(e) => {
            error!("{}: {e:#}", UserError::audio_init_error());
            return;
        }
    };

    let mut organ = OrganController::new(driver, &config.audio);
    organ.begin_loading(&config.audio);
    let mut keyboard = MacroquadKeyboard::new();

    prevent_quit();
    loop {
        organ.pump(&mut keyboard);
        organ.update(keyboard.now_us());

        draw_panel(&organ.panel_view());

        if is_quit_requested() {
            break;
        }
        next_frame().await;
    }

    if let Err(e) = organ.shutdown() {
        warn!("failed to release samples: {e:#}");
    }
    info!("concert-organ stopped");
}

const TITLE_BAR_HEIGHT: f32 = 28.0;
const GLYPH_RADIUS: f32 = 22.0;

fn draw_panel(view: &PanelView) {
    let (idle, lit) = match view.sprite_set {
        SpriteSet::Higher => (Color::from_rgba(90, 60, 30, 255), Color::from_rgba(255, 200, 80, 255)),
        SpriteSet::Lower => (Color::from_rgba(30, 50, 90, 255), Color::from_rgba(110, 190, 255, 255)),
    };

    clear_background(BLACK);
    draw_rectangle(0.0, 0.0, screen_width(), TITLE_BAR_HEIGHT, DARKBLUE);
    draw_text(WINDOW_TITLE, 10.0, 20.0, 22.0, WHITE);
    draw_text("x", screen_width() - 20.0, 20.0, 22.0, WHITE);

    let spacing = screen_width() / (view.glyphs.len() as f32 + 1.0);
    let y = TITLE_BAR_HEIGHT + 60.0;
    for (i, state) in view.glyphs.iter().enumerate() {
        let center = vec2(spacing * (i as f32 + 1.0), y);
        let color = if state.active { lit } else { idle };
        draw_glyph(state.glyph.shape(), state.glyph.rotation_deg(), center, color);
    }

    let mut text_y = y + 80.0;
    for line in HELP_LINES {
        draw_text(line, 20.0, text_y, 24.0, LIGHTGRAY);
        text_y += 28.0;
    }
}

/// Rotate clockwise on a y-down screen.
fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

fn draw_glyph(shape: SpriteShape, rotation_deg: f32, center: Vec2, color: Color) {
    let r = GLYPH_RADIUS;
    match shape {
        SpriteShape::Dot => draw_circle(center.x, center.y, r * 0.5, color),
        SpriteShape::Arrow | SpriteShape::DiagonalArrow => {
            let base = if shape == SpriteShape::Arrow {
                vec2(0.0, 1.0)
            } else {
                vec2(1.0, 1.0).normalize()
            };
            let dir = rotate(base, rotation_deg);
            let perp = vec2(-dir.y, dir.x);
            draw_triangle(
                center + dir * r,
                center - dir * (r * 0.5) + perp * (r * 0.6),
                center - dir * (r * 0.5) - perp * (r * 0.6),
                color,
            );
        }
        SpriteShape::Shift => {
            draw_rectangle(center.x - r * 0.7, center.y - r * 0.5, r * 1.4, r * 0.3, color);
            draw_rectangle(center.x - r * 0.7, center.y + r * 0.2, r * 1.4, r * 0.3, color);
        }
    }
}
