//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Banner and introductory text
//! - Editable query panel with colored bases
//! - Count sentences, count table, and bar chart panels
//! - Status bar with mode and sequence info
//! - Help overlay
//!
//! The counting pipeline (extract, tally, adapt) is re-run on every draw;
//! nothing derived from the input is cached between frames.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::model::{AppMode, AppState, NucleotideCounts};
use crate::report::{count_sentences, BarChartSpec, CountTable, ABOUT};
use crate::sequence::extract_sequence;

/// Height of the banner panel.
const BANNER_HEIGHT: u16 = 5;
/// Height of the introductory text panel.
const INTRO_HEIGHT: u16 = 2;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Height of the sentences panel (four sentences plus borders).
const SENTENCES_HEIGHT: u16 = 6;
/// Height of the count table panel (header, four rows, borders).
const TABLE_HEIGHT: u16 = 7;
/// Gap between chart bars.
const BAR_GAP: u16 = 2;

/// ASCII banner shown at the top of the page.
const BANNER: [&str; 4] = [
    r" ___  _  _   _      ___ ___  _   _ _  _ _____",
    r"|   \| \| | /_\    / __/ _ \| | | | \| |_   _|",
    r"| |) | .` |/ _ \  | (_| (_) | |_| | .` | | |",
    r"|___/|_|\_/_/ \_\  \___\___/ \___/|_|\_| |_|",
];

/// Color scheme for nucleotides.
///
/// This trait allows for different color schemes to be implemented
/// (e.g., for RNA or ambiguity codes later).
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
///
/// Matching is case-sensitive: lowercase letters are not counted and
/// render dimmed like any other foreign character.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete page.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // One pipeline pass per frame
    let sequence = extract_sequence(&state.input);
    let counts = NucleotideCounts::tally(&sequence);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(INTRO_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_banner(frame, main_layout[0]);
    render_intro(frame, main_layout[1]);

    // Content: input panel (left) + output panels (right)
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);

    render_input_panel(frame, state, content_layout[0]);

    let output_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SENTENCES_HEIGHT),
            Constraint::Length(TABLE_HEIGHT),
            Constraint::Min(6),
        ])
        .split(content_layout[1]);

    render_sentences_panel(frame, &counts, output_layout[0]);
    render_table_panel(frame, &counts, output_layout[1]);
    render_bar_chart_panel(frame, &counts, output_layout[2]);

    render_status_bar(frame, state, &sequence, &counts, main_layout[3]);

    if state.show_help {
        render_help_overlay(frame, area);
    }
}

/// Renders the ASCII banner.
fn render_banner(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = BANNER
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                *l,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Renders the introductory text under the banner.
fn render_intro(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(ABOUT)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Builds the styled lines for the input panel.
///
/// The header line is dimmed; sequence characters get their base color;
/// the cursor position is inverted while in insert mode.
fn input_lines(input: &str, cursor: usize, insert_mode: bool) -> Vec<Line<'static>> {
    let color_scheme = DnaColorScheme;
    let cursor_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut index = 0usize; // global character index, newlines included

    for (line_no, raw_line) in input.split('\n').enumerate() {
        let mut spans: Vec<Span> = Vec::new();

        for c in raw_line.chars() {
            let style = if insert_mode && index == cursor {
                cursor_style
            } else if line_no == 0 {
                // Header/label line: never counted, shown dimmed
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(color_scheme.get_color(c))
            };
            spans.push(Span::styled(c.to_string(), style));
            index += 1;
        }

        // Cursor sitting on the line break (or at the very end)
        if insert_mode && index == cursor {
            spans.push(Span::styled(" ", cursor_style));
        }
        index += 1; // the '\n' consumed by split

        lines.push(Line::from(spans));
    }

    lines
}

/// Renders the editable query panel.
fn render_input_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let insert_mode = state.mode == AppMode::Insert;
    let lines = input_lines(&state.input, state.cursor, insert_mode);

    let title = if insert_mode {
        "Sequence input (editing)"
    } else {
        "Sequence input"
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the four descriptive count sentences.
fn render_sentences_panel(frame: &mut Frame, counts: &NucleotideCounts, area: Rect) {
    let lines: Vec<Line> = count_sentences(counts)
        .into_iter()
        .map(Line::from)
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Count");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the two-column count table.
fn render_table_panel(frame: &mut Frame, counts: &NucleotideCounts, area: Rect) {
    let color_scheme = DnaColorScheme;
    let table = CountTable::from_counts(counts);

    let header = Row::new(CountTable::column_names().to_vec()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            let symbol = row.nucleotide.chars().next().unwrap_or(' ');
            Row::new(vec![
                Span::styled(
                    row.nucleotide,
                    Style::default().fg(color_scheme.get_color(symbol)),
                ),
                Span::raw(row.count.to_string()),
            ])
        })
        .collect();

    let widths = [Constraint::Length(10), Constraint::Length(7)];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Table"));
    frame.render_widget(widget, area);
}

/// Renders the bar chart, one fixed-width bar per base.
fn render_bar_chart_panel(frame: &mut Frame, counts: &NucleotideCounts, area: Rect) {
    let color_scheme = DnaColorScheme;
    let spec = BarChartSpec::from_table(&CountTable::from_counts(counts));

    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .map(|(label, value)| {
            let color = color_scheme.get_color(label.chars().next().unwrap_or(' '));
            Bar::default()
                .label(Line::from(*label))
                .value(*value)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let widget = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Bar chart"))
        .bar_width(spec.bar_width)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(widget, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(
    frame: &mut Frame,
    state: &AppState,
    sequence: &str,
    counts: &NucleotideCounts,
    area: Rect,
) {
    let mode_str = match state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
    };

    let message = state
        .status_message
        .as_deref()
        .unwrap_or("i:edit  r:reset  ?:help  q:quit");

    let position_info = format!(
        "Seq len {} | Counted {} ",
        sequence.chars().count(),
        counts.total()
    );

    let left_content = format!(" {} | {} ", mode_str, message);
    let left_len = left_content.len();

    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + position_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}

/// Renders the help overlay in the center of the screen.
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let overlay = centered_rect(46, 12, area);

    let lines = vec![
        Line::from("Normal mode"),
        Line::from("  i        edit the query text"),
        Line::from("  r        reset input to the default query"),
        Line::from("  q / Esc  quit"),
        Line::from(""),
        Line::from("Insert mode"),
        Line::from("  type     insert at the cursor"),
        Line::from("  Enter    line break   Backspace  delete"),
        Line::from("  Esc      back to normal mode"),
        Line::from(""),
        Line::from("Press any key to close"),
    ];

    let block = Block::default().borders(Borders::ALL).title("Help");
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

/// Returns a rect of the given size centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
