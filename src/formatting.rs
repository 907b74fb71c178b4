// src/formatting.rs

use crate::core::Notice;

/// A trait for rendering a notice as a single output line.
pub trait NoticeFormatter: Send + Sync {
    fn format_notice(&self, notice: &Notice) -> String;
}

/// Human-readable rendering: `[EMAIL] To: Ana - Message: Hello`.
pub struct PlainTextFormatter;

impl NoticeFormatter for PlainTextFormatter {
    fn format_notice(&self, notice: &Notice) -> String {
        format!(
            "[{}] To: {} - Message: {}",
            notice.channel.label(),
            notice.recipient,
            notice.message
        )
    }
}

/// One JSON object per notice, for piping into other tools.
pub struct JsonFormatter;

impl NoticeFormatter for JsonFormatter {
    fn format_notice(&self, notice: &Notice) -> String {
        serde_json::to_string(notice).expect("Notice has only string and enum fields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ChannelKind;

    fn notice(channel: ChannelKind, recipient: &str, message: &str) -> Notice {
        Notice {
            channel,
            recipient: recipient.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_plain_text_per_channel() {
        let formatter = PlainTextFormatter;
        assert_eq!(
            formatter.format_notice(&notice(ChannelKind::Email, "Ana", "Hello")),
            "[EMAIL] To: Ana - Message: Hello"
        );
        assert_eq!(
            formatter.format_notice(&notice(ChannelKind::Sms, "Bob", "Ping")),
            "[SMS] To: Bob - Message: Ping"
        );
        assert_eq!(
            formatter.format_notice(&notice(ChannelKind::App, "Cleo", "Ping")),
            "[APP] To: Cleo - Message: Ping"
        );
    }

    #[test]
    fn test_plain_text_keeps_empty_message() {
        let line = PlainTextFormatter.format_notice(&notice(ChannelKind::Email, "Ana", ""));
        assert_eq!(line, "[EMAIL] To: Ana - Message: ");
    }

    #[test]
    fn test_json_line() {
        let line = JsonFormatter.format_notice(&notice(ChannelKind::Sms, "Bob", "say \"hi\""));
        assert_eq!(
            line,
            r#"{"channel":"sms","recipient":"Bob","message":"say \"hi\""}"#
        );
        let parsed: Notice = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.recipient, "Bob");
    }
}
