//! Rendering for the autocue view.
//!
//! Layout, top to bottom: title, transcript pane (with the inspection
//! panel on the right when open), range bar, status line, footer.
//! The builders are pure so they can be tested without a terminal.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::footer::{render_footer, render_status_line};
use super::theme::{current_theme, Theme};
use super::ui::centered_rect;
use crate::player::MediaPlayer;
use crate::sync::{EngineStatus, LineHighlight, SliderValues, SyncSession};
use crate::transcript::MediaDescriptor;

/// Widest speaker column before names are truncated.
const MAX_SPEAKER_WIDTH: usize = 12;

/// Keyboard shortcuts shown in the help overlay.
pub const HELP_LINES: &[(&str, &str)] = &[
    ("space", "pause / resume"),
    ("[ ]", "move window start"),
    ("{ }", "move window end"),
    ("j k", "move line cursor"),
    ("i", "inspect line under cursor"),
    ("+ -", "playback speed"),
    ("?", "toggle this help"),
    ("esc", "close overlay"),
    ("q", "quit"),
];

/// Keys shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "pause"),
    ("[ ] { }", "range"),
    ("i", "inspect"),
    ("?", "help"),
    ("q", "quit"),
];

/// Player-side facts the view needs but the session does not track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockStatus {
    pub time: f64,
    pub running: bool,
    pub speed: f64,
}

/// View-only state owned by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Line under the inspection cursor
    pub cursor: usize,
    pub show_help: bool,
}

/// Format seconds as `MM:SS.d`.
pub fn format_timecode(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).floor() as u64;
    let total_secs = tenths / 10;
    format!(
        "{:02}:{:02}.{}",
        total_secs / 60,
        total_secs % 60,
        tenths % 10
    )
}

/// Map a slider position onto a bar of `width` cells.
fn slider_cell(value: usize, last_line: usize, width: usize) -> usize {
    let positions = last_line as u128 + 1;
    let cell = (value as u128).min(positions) * (width as u128 - 1) / positions;
    // cell <= width - 1
    cell as usize
}

/// Build the range bar: `─` outside the window, `━` inside, `┃` handles.
pub fn build_range_bar(width: usize, values: SliderValues, last_line: usize) -> Vec<char> {
    if width == 0 {
        return Vec::new();
    }
    let low = slider_cell(values.low, last_line, width);
    let high = slider_cell(values.high, last_line, width);

    let mut bar = vec!['─'; width];
    for cell in bar.iter_mut().take(high + 1).skip(low) {
        *cell = '━';
    }
    bar[low] = '┃';
    bar[high] = '┃';
    bar
}

/// Cut `text` to at most `width` columns.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{:<width$}", text, width = width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Speaker column width for a transcript.
pub fn speaker_width(descriptor: &MediaDescriptor) -> usize {
    descriptor
        .transcript
        .iter()
        .map(|line| line.speaker.width())
        .max()
        .unwrap_or(0)
        .min(MAX_SPEAKER_WIDTH)
}

/// Build the visible transcript lines.
///
/// Hidden lines are skipped. Returns the lines and the row of the active
/// line among them, if it is visible.
pub fn build_transcript_lines(
    descriptor: &MediaDescriptor,
    highlights: &[LineHighlight],
    cursor: Option<usize>,
    theme: &Theme,
) -> (Vec<Line<'static>>, Option<usize>) {
    let speaker_width = speaker_width(descriptor);
    let mut lines = Vec::new();
    let mut active_row = None;

    for (index, (line, highlight)) in descriptor.transcript.iter().zip(highlights).enumerate() {
        if !highlight.is_visible() {
            continue;
        }
        if *highlight == LineHighlight::Active {
            active_row = Some(lines.len());
        }

        let marker = if cursor == Some(index) { "▸ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker.to_string(), theme.accent_style()),
            Span::raw(fit_width(&line.speaker, speaker_width)),
            Span::raw(" │ "),
        ];
        for word in &line.words {
            let text = word.display(&descriptor.display_attribute);
            if text.is_empty() {
                continue;
            }
            if word.is_match {
                spans.push(Span::styled(text.to_string(), theme.match_style()));
            } else {
                spans.push(Span::raw(text.to_string()));
            }
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans).style(theme.line_style(*highlight)));
    }

    (lines, active_row)
}

/// Scroll offset that keeps `focus_row` near the middle of the pane.
pub fn scroll_offset(focus_row: Option<usize>, total_rows: usize, height: usize) -> usize {
    let Some(row) = focus_row else {
        return 0;
    };
    let max_offset = total_rows.saturating_sub(height);
    row.saturating_sub(height / 2).min(max_offset)
}

/// Build the inspection panel for one line.
pub fn build_inspector_lines(descriptor: &MediaDescriptor, index: usize, theme: &Theme) -> Vec<Line<'static>> {
    let Some(line) = descriptor.transcript.get(index) else {
        return Vec::new();
    };

    let mut out = vec![
        Line::from(vec![
            Span::styled(format!("Line {}", index), theme.accent_bold_style()),
            Span::raw(format!("  {}", line.speaker)),
        ]),
        Line::styled(
            format!(
                "{} - {}  ({:.2}s)",
                format_timecode(line.from),
                format_timecode(line.to),
                line.duration()
            ),
            theme.text_secondary_style(),
        ),
        Line::raw(""),
    ];

    for word in &line.words {
        let heading = word.display(&descriptor.display_attribute).to_string();
        let style = if word.is_match {
            theme.match_style()
        } else {
            theme.text_style()
        };
        out.push(Line::styled(heading, style));
        for attribute in word.describe() {
            out.push(Line::styled(format!("  {}", attribute), theme.text_secondary_style()));
        }
    }
    out
}

/// One-line playback summary.
pub fn build_status_text<P: MediaPlayer>(session: &SyncSession<P>, clock: ClockStatus) -> String {
    let icon = match (clock.running, session.status()) {
        (true, _) => "▶",
        (false, EngineStatus::Idle) => "■",
        (false, _) => "⏸",
    };
    let window = session.window();
    let engine = session.engine();
    format!(
        " {} {}  lines {}-{} ({} - {})  line {}  spd {:.1}x",
        icon,
        format_timecode(clock.time),
        window.start_line,
        window.end_line,
        format_timecode(engine.start_time()),
        format_timecode(engine.end_time()),
        session.current_line(),
        clock.speed,
    )
}

/// Draw the whole view.
pub fn draw<P: MediaPlayer>(frame: &mut Frame, session: &SyncSession<P>, clock: ClockStatus, view: ViewState) {
    let theme = current_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::styled(
        format!(" {}", session.display_title()),
        theme.accent_bold_style(),
    ));
    frame.render_widget(title, rows[0]);

    render_transcript(frame, rows[1], session, view, &theme);
    render_range_bar(frame, rows[2], session, &theme);
    render_status_line(frame, rows[3], &build_status_text(session, clock));
    render_footer(frame, rows[4], FOOTER_KEYS);

    if view.show_help {
        render_help(frame, &theme);
    }
}

fn render_transcript<P: MediaPlayer>(
    frame: &mut Frame,
    area: Rect,
    session: &SyncSession<P>,
    view: ViewState,
    theme: &Theme,
) {
    let (text_area, inspector_area) = match session.inspecting() {
        Some(_) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(area);
            (cols[0], Some(cols[1]))
        }
        None => (area, None),
    };

    let highlights = session.highlights();
    let (lines, active_row) =
        build_transcript_lines(session.descriptor(), &highlights, Some(view.cursor), theme);
    let height = text_area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(active_row, lines.len(), height);

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" transcript "))
        .scroll((offset as u16, 0));
    frame.render_widget(transcript, text_area);

    if let (Some(area), Some(index)) = (inspector_area, session.inspecting()) {
        let panel = Paragraph::new(build_inspector_lines(session.descriptor(), index, theme))
            .block(Block::default().borders(Borders::ALL).title(" inspect "))
            .wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
    }
}

fn render_range_bar<P: MediaPlayer>(frame: &mut Frame, area: Rect, session: &SyncSession<P>, theme: &Theme) {
    let range = session.range();
    let last_line = *range.slider_range().end();
    let label = format!(" {}/{} ", range.slider_values().low, last_line);
    let bar_width = (area.width as usize).saturating_sub(label.width() + 1);
    let bar: String = build_range_bar(bar_width, range.slider_values(), last_line)
        .into_iter()
        .collect();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(bar, theme.accent_style()),
        Span::styled(label, theme.text_secondary_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(50, 60, frame.area());
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:>8}  ", key), theme.accent_bold_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default())
            .block(Block::default().borders(Borders::ALL).title(" keys ")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::RecordingPlayer;
    use crate::sync::SessionOptions;
    use crate::transcript::{AnnotationLine, MovieInfo, WordToken};

    fn descriptor() -> MediaDescriptor {
        MediaDescriptor {
            title: None,
            display_attribute: "word".to_string(),
            corpus_id: None,
            start_at: 1,
            end_at: 1,
            min_start: 0,
            max_end: 2,
            last_line: 2,
            movie: MovieInfo {
                path: "media/x".to_string(),
                movie_loc: "x_01".to_string(),
                supplied: "m4v".to_string(),
                line_key: None,
            },
            transcript: vec![
                AnnotationLine::new(0.0, 2.0, "A", vec![WordToken::new([("word", "ja")])]),
                AnnotationLine::new(
                    2.0,
                    5.0,
                    "B",
                    vec![
                        WordToken::new([("word", "det")]),
                        WordToken::new([("word", "stemmer"), ("pos", "verb:pres")]).matched(),
                    ],
                ),
                AnnotationLine::new(5.0, 9.0, "A", vec![WordToken::new([("word", "nei")])]),
            ]
            .into(),
        }
    }

    #[test]
    fn format_timecode_formats_tenths() {
        assert_eq!(format_timecode(0.0), "00:00.0");
        assert_eq!(format_timecode(65.27), "01:05.2");
        assert_eq!(format_timecode(-3.0), "00:00.0");
    }

    #[test]
    fn range_bar_covers_full_selection() {
        let bar = build_range_bar(11, SliderValues::new(0, 11), 10);
        assert_eq!(bar[0], '┃');
        assert_eq!(bar[10], '┃');
        assert!(bar[1..10].iter().all(|&c| c == '━'));
    }

    #[test]
    fn range_bar_marks_partial_selection() {
        let bar: String = build_range_bar(12, SliderValues::new(4, 8), 10).into_iter().collect();
        assert_eq!(bar, "────┃━━━┃───");
    }

    #[test]
    fn range_bar_handles_huge_slider_range() {
        let bar: String = build_range_bar(12, SliderValues::new(0, 1), usize::MAX)
            .into_iter()
            .collect();
        assert_eq!(bar, "┃───────────");

        let full = build_range_bar(12, SliderValues::new(0, usize::MAX), usize::MAX);
        assert_eq!(full.iter().filter(|&&c| c == '┃').count(), 2);
    }

    #[test]
    fn range_bar_handles_zero_width() {
        assert!(build_range_bar(0, SliderValues::new(0, 1), 3).is_empty());
    }

    #[test]
    fn hidden_lines_are_skipped() {
        let d = descriptor();
        let highlights = vec![LineHighlight::Hidden, LineHighlight::Active, LineHighlight::Hidden];
        let (lines, active_row) = build_transcript_lines(&d, &highlights, None, &Theme::plain());

        assert_eq!(lines.len(), 1);
        assert_eq!(active_row, Some(0));
    }

    #[test]
    fn match_words_are_emphasized() {
        let d = descriptor();
        let theme = Theme::autocue();
        let highlights = vec![LineHighlight::InWindow; 3];
        let (lines, _) = build_transcript_lines(&d, &highlights, Some(1), &theme);

        let line = &lines[1];
        assert_eq!(line.spans[0].content, "▸ ");
        let hit = line.spans.iter().find(|s| s.content == "stemmer").unwrap();
        assert_eq!(hit.style, theme.match_style());
    }

    #[test]
    fn scroll_offset_centers_focus() {
        assert_eq!(scroll_offset(None, 100, 10), 0);
        assert_eq!(scroll_offset(Some(3), 100, 10), 0);
        assert_eq!(scroll_offset(Some(50), 100, 10), 45);
        assert_eq!(scroll_offset(Some(99), 100, 10), 90);
    }

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("ab", 4), "ab  ");
        assert_eq!(fit_width("abcdef", 4), "abc…");
    }

    #[test]
    fn inspector_lists_word_attributes() {
        let d = descriptor();
        let lines = build_inspector_lines(&d, 1, &Theme::plain());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(text[0], "Line 1  B");
        assert!(text.contains(&"  pos : verb/pres".to_string()));
        assert!(build_inspector_lines(&d, 9, &Theme::plain()).is_empty());
    }

    #[test]
    fn status_text_reports_window_and_line() {
        let session = SyncSession::mount(descriptor(), SessionOptions::default(), RecordingPlayer::new());
        let clock = ClockStatus {
            time: 2.5,
            running: true,
            speed: 1.0,
        };
        let status = build_status_text(&session, clock);

        assert!(status.contains("lines 1-1"));
        assert!(status.contains("00:02.0 - 00:05.0"));
        assert!(status.contains("line 1"));
    }
}
