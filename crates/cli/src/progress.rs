use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Kinds of operation a spinner is shown for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressType {
    /// Reading datasets from disk
    Data,
    /// One call to the hosted platform
    Remote,
    /// Several sequential calls (provision, refresh, deploy)
    Batch,
}

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub spinner_chars: &'static str,
    pub tick_interval: Duration,
    pub color: &'static str,
}

impl ProgressType {
    pub fn config(self) -> ProgressConfig {
        match self {
            ProgressType::Data => ProgressConfig {
                spinner_chars: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
                tick_interval: Duration::from_millis(80),
                color: "cyan",
            },
            ProgressType::Remote => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠞⠖⠦⠴⠲⠳⠓",
                tick_interval: Duration::from_millis(120),
                color: "blue",
            },
            ProgressType::Batch => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠒⠂⠂⠒⠲⠴⠦⠖⠒⠐⠐⠒⠓⠋",
                tick_interval: Duration::from_millis(150),
                color: "yellow",
            },
        }
    }

    /// Spinner on stderr; hidden automatically when stderr is not a terminal
    pub fn create_spinner(self, message: &str) -> Spinner {
        let config = self.config();
        let bar = ProgressBar::new_spinner();
        let template = format!("{{spinner:.{}}} {{msg}}", config.color);
        let spinner_style = ProgressStyle::default_spinner()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(config.spinner_chars);

        bar.set_style(spinner_style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(config.tick_interval);

        Spinner { bar }
    }
}

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn finish_success(&self, message: &str) {
        self.bar
            .finish_with_message(style(format!("✓ {}", message)).green().to_string());
    }

    pub fn finish_error(&self, message: &str) {
        self.bar
            .finish_with_message(style(format!("✗ {}", message)).red().to_string());
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
