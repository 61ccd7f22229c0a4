use crate::color_scheme::{ColorScheme, ColorSchemeId};
use crate::config::Config;
use crate::refresh::AppEvent;
use crate::system::cpu::{CpuStatic, UtilizationSample};

/// Which view/mode the app is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
    /// Modal text popup (About, benchmark rating result)
    Message,
}

/// Tint of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Busy,
    Ok,
    Error,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,

    /// Static CPU facts, read once at startup
    pub cpu: CpuStatic,
    /// Latest published utilization; None until the first sample lands
    pub sample: Option<UtilizationSample>,

    /// Mirror of the controller state, for drawing the footer toggle
    pub auto_refresh: bool,
    /// A rating request is on the wire
    pub rating_in_flight: bool,

    // Status line
    pub status: String,
    pub status_level: StatusLevel,

    // Message popup content
    pub message_title: String,
    pub message_body: String,

    // Color scheme
    pub color_scheme_id: ColorSchemeId,
    pub color_scheme: ColorScheme,

    pub config: Config,
}

impl App {
    pub fn new(cpu: CpuStatic, config: Config) -> Self {
        Self {
            mode: AppMode::Normal,
            should_quit: false,
            cpu,
            sample: None,
            auto_refresh: false,
            rating_in_flight: false,
            status: "Press 'Refresh' to update CPU usage.".to_string(),
            status_level: StatusLevel::Info,
            message_title: String::new(),
            message_body: String::new(),
            color_scheme_id: config.color_scheme_id,
            color_scheme: ColorScheme::from_id(config.color_scheme_id),
            config,
        }
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = text.into();
        self.status_level = level;
    }

    /// Apply one event drained from the sample/rating channel. Runs on the
    /// render thread only.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Sample(sample) => {
                self.sample = Some(sample);
                self.set_status(StatusLevel::Ok, "CPU information updated!");
            }
            AppEvent::Rating(text) => {
                self.rating_in_flight = false;
                self.open_message(
                    " CPU Multithread Rating ",
                    format!("{}\n\nRating: {}", self.cpu.model, text),
                );
                self.set_status(StatusLevel::Info, "Benchmark rating received.");
            }
        }
    }

    pub fn open_message(&mut self, title: &str, body: impl Into<String>) {
        self.message_title = title.to_string();
        self.message_body = body.into();
        self.mode = AppMode::Message;
    }

    pub fn open_about(&mut self) {
        self.open_message(
            " About ",
            "cpuscope — terminal CPU information viewer\n\n\
             Shows CPU model, cores, frequency, cache and live\n\
             per-core usage. Built with ratatui, crossterm and sysinfo.",
        );
    }

    /// Cycle to the next color scheme, wrapping around
    pub fn cycle_color_scheme(&mut self) {
        let all = ColorSchemeId::all();
        let idx = all
            .iter()
            .position(|id| *id == self.color_scheme_id)
            .unwrap_or(0);
        let next = all[(idx + 1) % all.len()];
        self.color_scheme_id = next;
        self.color_scheme = ColorScheme::from_id(next);
        self.config.color_scheme_id = next;
        self.set_status(
            StatusLevel::Info,
            format!("Color scheme: {}", next.name()),
        );
    }

    /// Latest sample, or a zeroed stand-in sized to the core count so the
    /// grid renders before the first publish
    pub fn display_sample(&self) -> UtilizationSample {
        self.sample
            .clone()
            .unwrap_or_else(|| UtilizationSample::zeroed(self.cpu.logical_cores))
    }
}
