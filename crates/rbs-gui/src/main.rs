//! Ruleset Builder Studio - Desktop GUI Application

use iced::Size;
use iced::window;
use rbs_gui::app::App;
use rbs_gui::logging::{LogConfig, init_logging};

/// Application entry point.
pub fn main() -> iced::Result {
    if let Err(e) = init_logging(&LogConfig::default()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    tracing::info!("Starting Ruleset Builder Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 800.0),
            min_size: Some(Size::new(800.0, 600.0)),
            ..Default::default()
        })
        .run()
}
