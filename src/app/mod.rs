// SPDX-License-Identifier: MPL-2.0
//! Demo application showing snackbars in an iced window.
//!
//! The `App` owns the stage (the host surface), the task scheduler and the
//! live snackbars, so every lifecycle transition runs inside `App::update`
//! on the UI loop. Tasks queued by the scheduler during an update are
//! returned from that same update.

mod message;
mod scheduler;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use scheduler::TaskScheduler;

use crate::config::{self, Config};
use crate::domain::Size;
use crate::icon;
use crate::snackbar::{Snackbar, SnackbarOptions};
use crate::ui::theming::{SnackbarColors, ThemeMode};
use crate::ui::Stage;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 280;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

const DEFAULT_MESSAGE: &str = "Saved";

/// Root iced application state.
pub struct App {
    stage: Stage,
    scheduler: TaskScheduler,
    snackbars: Vec<Snackbar>,
    options: SnackbarOptions,
    message: String,
    icon: Handle,
    theme_mode: ThemeMode,
    shown: usize,
    /// Incremented from the dismiss callbacks.
    dismissed: Arc<AtomicUsize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("live", &self.snackbars.len())
            .field("shown", &self.shown)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Config::default()
        });

        (Self::with_config(config, flags), Task::none())
    }

    fn with_config(config: Config, flags: Flags) -> Self {
        let mut options = config.snackbar_options();
        let max_delay = Duration::from_millis(config::defaults::MAX_AUTO_DISMISS_DELAY_MS);
        if let Some(secs) = flags.delay_secs.filter(|s| s.is_finite() && *s >= 0.0) {
            let delay = Duration::try_from_secs_f32(secs).unwrap_or(max_delay);
            options = options.auto_dismiss_delay(delay.min(max_delay));
        }

        Self {
            stage: Stage::new(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            scheduler: TaskScheduler::new(),
            snackbars: Vec::new(),
            options,
            message: flags.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            icon: icon::checkmark_badge(),
            theme_mode: flags.theme.unwrap_or(config.theme),
            shown: 0,
            dismissed: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn title(&self) -> String {
        match self.snackbars.len() {
            0 => "Snackbar demo".to_string(),
            live => format!("Snackbar demo ({live} showing)"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.stage.is_animating(Instant::now()));

        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPressed => self.show_snackbar(),
            Message::DismissAllPressed => {
                for snackbar in &mut self.snackbars {
                    snackbar.dismiss(&mut self.stage, &mut self.scheduler);
                }
            }
            Message::Snackbar(message) => {
                if let Some(snackbar) = self.snackbars.iter_mut().find(|s| s.id() == message.id()) {
                    snackbar.update(message, &mut self.stage, &mut self.scheduler);
                }
            }
            Message::Frame(_) => {}
            Message::WindowResized(size) => {
                self.stage.resize(Size::new(size.width, size.height));
            }
        }

        self.snackbars.retain(|s| !s.is_dismissed());
        self.scheduler.drain().map(Message::Snackbar)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            stage: &self.stage,
            colors: SnackbarColors::for_mode(self.theme_mode),
            shown: self.shown,
            dismissed: self.dismissed.load(Ordering::Relaxed),
            now: Instant::now(),
        })
    }

    fn show_snackbar(&mut self) {
        self.shown += 1;
        let counter = Arc::clone(&self.dismissed);
        let text = if self.shown == 1 {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, self.shown)
        };

        let mut snackbar = Snackbar::with_options(text, self.icon.clone(), self.options).on_dismiss(
            move |snackbar| {
                counter.fetch_add(1, Ordering::Relaxed);
                tracing::info!(id = %snackbar.id(), text = snackbar.message(), "snackbar closed");
            },
        );
        snackbar.show(&mut self.stage, &mut self.scheduler);
        self.snackbars.push(snackbar);
    }
}
