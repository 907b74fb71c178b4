//! Output sinks
//!
//! The console sink is the only destination notices are written to. It picks
//! a formatter from the configured output format and writes one line per
//! notice to stdout.

use crate::config::OutputFormat;
use crate::core::{Notice, NoticeSink, NotifyError};
use crate::formatting::{JsonFormatter, NoticeFormatter, PlainTextFormatter};
use std::io::{self, Write};

/// Writes rendered notices to stdout.
pub struct ConsoleSink {
    formatter: Box<dyn NoticeFormatter>,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        let formatter: Box<dyn NoticeFormatter> = match format {
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::PlainText => Box::new(PlainTextFormatter),
        };
        Self { formatter }
    }

    /// Renders a notice without writing it.
    pub fn render(&self, notice: &Notice) -> String {
        self.formatter.format_notice(notice)
    }
}

impl NoticeSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, notice: &Notice) -> Result<(), NotifyError> {
        let line = self.render(notice);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
            .and_then(|_| stdout.flush())
            .map_err(|source| NotifyError::Delivery {
                sink: self.name().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ChannelKind;

    #[test]
    fn test_render_follows_format() {
        let notice = Notice {
            channel: ChannelKind::App,
            recipient: "Cleo".to_string(),
            message: "Ping".to_string(),
        };

        let plain = ConsoleSink::new(OutputFormat::PlainText);
        assert_eq!(plain.render(&notice), "[APP] To: Cleo - Message: Ping");

        let json = ConsoleSink::new(OutputFormat::Json);
        assert!(json.render(&notice).starts_with("{\"channel\":\"app\""));
    }
}
