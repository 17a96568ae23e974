//! Status line and key hint footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{current_theme, Theme};

/// Render the playback status line.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer of `(key, description)` hints.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, &theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Keys in the accent color, descriptions secondary, separated by ` | `.
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.text_secondary)));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(format!(": {}", desc), theme.text_secondary_style()));
    }
    spans
}
