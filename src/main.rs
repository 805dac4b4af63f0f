use anyhow::Context;
use log::{error, info};
use macroquad::prelude::*;
use touchpad::event;
use touchpad::overlay::MacroquadPainter;
use touchpad::{
    ControlsConfig, GunSwitch, InputState, Intent, SwitchDirection, TouchControlSurface,
};

const GUNS: [&str; 4] = ["pistol", "shotgun", "laser", "grenade"];

/// Cycles through [`GUNS`] when a gun-switch button is tapped.
#[derive(Default)]
struct Armory {
    current: usize,
}

impl Armory {
    fn name(&self) -> &'static str {
        GUNS[self.current]
    }
}

impl GunSwitch for Armory {
    fn switch_gun(&mut self, direction: SwitchDirection) {
        let n = GUNS.len() as i32;
        self.current = (self.current as i32 + direction.step()).rem_euclid(n) as usize;
        info!("switched to {}", self.name());
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "🕹️ Touch Controls".to_owned(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn load_config() -> anyhow::Result<ControlsConfig> {
    let path =
        std::env::var("TOUCHPAD_CONFIG").unwrap_or_else(|_| "touch_controls.toml".to_owned());
    ControlsConfig::load_or_default(&path).with_context(|| format!("load controls from {path}"))
}

fn draw_hud(input: &InputState, gun: &str) {
    let flags = [
        ("LEFT", Intent::Left),
        ("RIGHT", Intent::Right),
        ("UP", Intent::Up),
        ("DOWN", Intent::Down),
        ("FIRE", Intent::Fire),
        ("FIELD", Intent::Field),
    ];
    let mut x = screen_width() / 2.0 - 180.0;
    for (label, intent) in flags {
        let color = if input.get(intent) {
            Color::from_rgba(100, 255, 150, 255)
        } else {
            Color::from_rgba(90, 90, 110, 255)
        };
        draw_text(label, x, 40.0, 24.0, color);
        x += measure_text(label, None, 24, 1.0).width + 16.0;
    }
    draw_text(
        &format!("gun: {gun}"),
        screen_width() / 2.0 - 60.0,
        72.0,
        24.0,
        Color::from_rgba(255, 200, 100, 255),
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = load_config().unwrap_or_else(|e| {
        error!("{e:#}, falling back to defaults");
        ControlsConfig::default()
    });

    let mut size = (screen_width(), screen_height());
    let mut controls = TouchControlSurface::init(
        config,
        InputState::new(),
        Armory::default(),
        size.0,
        size.1,
    );
    let mut painter = MacroquadPainter;

    loop {
        let now = (screen_width(), screen_height());
        if now != size {
            size = now;
            controls.reposition(size.0, size.1);
        }

        controls.handle_batch(event::poll());
        // Lost end events must not leave a control held.
        if controls.tracked_contacts() > 0 && !event::any_contact_down() {
            controls.release_all();
        }
        controls.tick();

        clear_background(Color::from_rgba(5, 5, 15, 255));
        controls.render(&mut painter);
        draw_hud(controls.input(), controls.gun_switch().name());

        next_frame().await
    }
}
