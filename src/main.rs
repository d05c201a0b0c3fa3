use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod config;
mod constants;
mod float;
mod gallery;
mod hover;
mod layout;
mod logging;
mod page;
mod render;
mod scene;
mod state;
mod texture_loader;
mod theme;
mod ticker;
mod transition;

use crate::config::Config;
use crate::constants::*;
use crate::gallery::Gallery;
use crate::layout::Point;
use crate::page::Page;
use crate::render::Renderer;
use crate::theme::ThemeMode;
use crate::ticker::Ticker;

// Longest step fed to the animations, so a stalled window does not jump
const MAX_FRAME_TIME: f32 = 0.1;

/// A three page photo gallery drawn as a notebook.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the `images/` tree
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Settings file, defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to open, out of range numbers are clamped
    #[arg(long, allow_negative_numbers = true)]
    page: Option<i64>,

    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Write the effective settings back to the settings file and continue
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn settings(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) if path.exists() => config::load_from_path(path)?,
            // --save-config creates it below
            Some(path) if self.save_config => {
                tracing::debug!(path = %path.display(), "settings file not found, using defaults");
                Config::default()
            }
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        if let Some(assets) = &self.assets {
            config.asset_root = assets.clone();
        }
        if let Some(page) = self.page {
            config.initial_page = page;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }

        if self.save_config {
            let path = self
                .config
                .clone()
                .or_else(config::default_path)
                .context("no config directory on this platform")?;
            config::save_to_path(&config, &path)?;
            tracing::info!(path = %path.display(), "settings saved");
        }
        Ok(config)
    }
}

// --- Map window coordinates onto the render texture ---
fn to_render_space(rl: &RaylibHandle) -> Option<Point> {
    if !rl.is_cursor_on_screen() {
        return None;
    }
    let sw = rl.get_screen_width().max(1) as f32;
    let sh = rl.get_screen_height().max(1) as f32;
    let mouse = rl.get_mouse_position();
    Some(Point::new(
        mouse.x * RENDER_WIDTH as f32 / sw,
        mouse.y * RENDER_HEIGHT as f32 / sh,
    ))
}

fn handle_keys(rl: &RaylibHandle, gallery: &mut Gallery) {
    for (key, page) in [
        (KeyboardKey::KEY_ONE, Page::One),
        (KeyboardKey::KEY_TWO, Page::Two),
        (KeyboardKey::KEY_THREE, Page::Three),
    ] {
        if rl.is_key_pressed(key) {
            gallery.select_page(page.number() as i64);
        }
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        gallery.step_page(false);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        gallery.step_page(true);
    }
}

fn main() -> Result<()> {
    logging::initialize_logging()?;

    let cli = Cli::parse();
    let config = cli.settings()?;
    tracing::info!(?config, "starting");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Gallery Book")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load every image the book can show ---
    let textures = texture_loader::load_textures(&mut rl, &thread, &config.asset_root, &layout::all_assets());
    let renderer = Renderer::new(&textures);

    // --- Gallery State ---
    let mut theme_port = theme::port_for(config.theme, config.theme_poll_seconds);
    let mut ticker = Ticker::new();
    let mut gallery = Gallery::new(Page::clamped(config.initial_page));
    gallery.mount(&mut ticker, theme_port.as_mut());
    gallery.play_intro();

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_TIME);

        // --- Input ---
        let pointer = to_render_space(&rl);
        gallery.pointer_moved(pointer);
        if let Some(p) = pointer {
            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                gallery.click(p);
            }
        }
        handle_keys(&rl, &mut gallery);

        // --- Update Logic ---
        theme_port.refresh(dt);
        ticker.tick(dt);
        gallery.update(dt);
        let scene = gallery.scene();

        // --- Render into the fixed size framebuffer ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            renderer.draw(&mut d, &scene);
        });

        // Framebuffer is stored upside down, flip it while scaling to the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    gallery.unmount(theme_port.as_mut());
    tracing::info!(
        frames = ticker.frame(),
        live_ticks = ticker.active(),
        page = %gallery.shown_page(),
        "closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gallery-book").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn flags_override_the_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "theme = \"light\"\ninitial_page = 1\nasset_root = \"from-file\"\nfps = 30\n")
            .expect("failed to write settings");
        let path_arg = path.to_str().expect("utf-8 temp path");

        let config = parse(&["--config", path_arg, "--theme", "dark", "--page", "9", "--assets", "from-cli"])
            .settings()
            .expect("settings should load");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.initial_page, 9);
        assert_eq!(config.asset_root, PathBuf::from("from-cli"));
        assert_eq!(config.fps, 30);
        assert_eq!(Page::clamped(config.initial_page), Page::Three);
    }

    #[test]
    fn file_values_stay_without_flags() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "theme = \"light\"\ninitial_page = 2\n").expect("failed to write settings");

        let config = parse(&["--config", path.to_str().expect("utf-8 temp path")])
            .settings()
            .expect("settings should load");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.initial_page, 2);
    }

    #[test]
    fn save_config_creates_a_new_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("new").join("settings.toml");
        let path_arg = path.to_str().expect("utf-8 temp path");

        let config = parse(&["--config", path_arg, "--page", "2", "--save-config"])
            .settings()
            .expect("settings should be created");
        assert_eq!(config.initial_page, 2);
        assert!(path.exists());

        let saved = config::load_from_path(&path).expect("saved settings should load");
        assert_eq!(saved, config);
    }

    #[test]
    fn missing_explicit_file_without_save_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.toml");
        let result = parse(&["--config", path.to_str().expect("utf-8 temp path")]).settings();
        assert!(result.is_err());
    }
}
