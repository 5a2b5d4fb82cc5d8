//! Pure view/render functions.
//!
//! Everything here takes `&AppState` by immutable reference and draws to a
//! ratatui frame; no mutation, no side effects. The reducer guarantees the
//! state tuple is internally consistent (selection inside the grid, cursor
//! inside the expression) before every draw.

use kalq_core::plot;
use kalq_core::result::EvalResult;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::state::AppState;

/// Height of the mode indicator line.
const MODE_HEIGHT: u16 = 1;

/// Height of the bordered display area (expression + result).
const DISPLAY_HEIGHT: u16 = 4;

/// Height of the bordered history panel.
const HISTORY_HEIGHT: u16 = 6;

/// Height of the key-hint status line.
const STATUS_HEIGHT: u16 = 1;

/// Vertical screen units per mathematical unit in the plot overlay.
const PLOT_Y_SCALE: f64 = 2.0;

/// Horizontal screen units per mathematical unit in the plot overlay.
const PLOT_X_SCALE: f64 = 2.0;

/// Renders the entire calculator to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(Span::styled(
            " kalq ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if let Some(plot) = &state.plot {
        render_plot(frame, inner, &plot.source);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(MODE_HEIGHT),
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(HISTORY_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(inner);

    render_mode_line(state, frame, chunks[0]);
    render_display(state, frame, chunks[1]);
    render_grid(state, frame, chunks[2]);
    render_history(state, frame, chunks[3]);
    render_status_line(frame, chunks[4]);

    if state.show_help {
        render_help(frame, area);
    }
}

fn render_mode_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" mode: "),
        Span::styled(
            state.engine.mode.display_name(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (j cycles)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_display(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let body = block.inner(area);
    frame.render_widget(block, area);

    let width = body.width.saturating_sub(2) as usize;
    let expr_line = expression_with_cursor(state, width);

    let result_text = state
        .result
        .as_ref()
        .map(|r| r.to_string())
        .unwrap_or_default();
    let result_style = match &state.result {
        Some(EvalResult::Error(_)) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };
    let result_line = Line::from(vec![
        Span::raw(" = "),
        Span::styled(truncate_to_width(&result_text, width), result_style),
    ]);

    frame.render_widget(Paragraph::new(vec![expr_line, result_line]), body);
}

/// Builds the expression line with a reversed cell marking the cursor.
fn expression_with_cursor(state: &AppState, width: usize) -> Line<'static> {
    let text = state.expr.text();
    let cursor = state.expr.cursor();

    let before: String = text.chars().take(cursor).collect();
    let at: String = text.chars().skip(cursor).take(1).collect();
    let after: String = text.chars().skip(cursor + 1).collect();

    let cursor_cell = if at.is_empty() { " ".to_string() } else { at };

    // Long expressions keep the cursor visible by trimming the head.
    let mut head = before;
    while head.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() + 2 > width
        && !head.is_empty()
    {
        head.remove(0);
    }

    Line::from(vec![
        Span::raw(" > "),
        Span::raw(head),
        Span::styled(cursor_cell, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(truncate_to_width(&after, width)),
    ])
}

fn render_grid(state: &AppState, frame: &mut Frame, area: Rect) {
    let grid = state.engine.mode.grid();

    let mut lines: Vec<Line<'static>> = vec![Line::default()];
    for (row_idx, row) in grid.iter().enumerate() {
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(row.len() * 2);
        for (col_idx, label) in row.iter().enumerate() {
            let selected = state.selection.row == row_idx && state.selection.col == col_idx;
            let cell = if selected {
                Span::styled(
                    format!("[ {label} ]"),
                    Style::default()
                        .add_modifier(Modifier::REVERSED | Modifier::BOLD),
                )
            } else {
                Span::raw(format!("  {label}  "))
            };
            spans.push(cell);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_history(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " history ",
            Style::default().fg(Color::DarkGray),
        ));
    let body = block.inner(area);
    frame.render_widget(block, area);

    let visible = body.height as usize;
    let width = body.width.saturating_sub(2) as usize;
    let lines: Vec<Line<'static>> = state
        .engine
        .history
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let text = format!("{} = {}", entry.expression, entry.display);
            Line::from(Span::raw(format!(" {}", truncate_to_width(&text, width))))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), body);
}

fn render_status_line(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(" h", Style::default().fg(Color::DarkGray)),
        Span::raw(" help  "),
        Span::styled("j", Style::default().fg(Color::DarkGray)),
        Span::raw(" mode  "),
        Span::styled("c", Style::default().fg(Color::DarkGray)),
        Span::raw(" clear  "),
        Span::styled("q", Style::default().fg(Color::DarkGray)),
        Span::raw(" quit"),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

const HELP_LINES: &[&str] = &[
    "arrows     navigate the button grid",
    "enter/space  press the selected button",
    "0-9 + - * /  type directly into the expression",
    "ctrl+←/→   move the text cursor",
    "home/end   jump to start/end of the expression",
    "backspace  delete before the cursor",
    "h          show this help",
    "j          cycle calculator mode",
    "c / esc    clear expression and result",
    "q          quit",
    "",
    "plot <expr>  then = draws an ascii graph of f(x)",
    "",
    "press any key to close",
];

fn render_help(frame: &mut Frame, area: Rect) {
    let width = (HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4)
        .min(area.width.saturating_sub(4));
    let height = (HELP_LINES.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup = centered(area, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " help ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let body = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line<'static>> = HELP_LINES
        .iter()
        .map(|l| Line::from(Span::raw(format!(" {l}"))))
        .collect();
    frame.render_widget(Paragraph::new(lines), body);
}

/// Draws the sampled function over axes through the area's midlines.
fn render_plot(frame: &mut Frame, area: Rect, source: &str) {
    let width = area.width as usize;
    let height = area.height.saturating_sub(2) as usize;
    if width < 4 || height < 4 {
        return;
    }

    let half_width = width as f64 / 2.0;
    let x_min = -half_width / PLOT_X_SCALE;
    let x_max = half_width / PLOT_X_SCALE;
    let samples = plot::sample(source, width, x_min, x_max);

    let mid_row = height / 2;
    let mid_col = width / 2;
    let mut cells = vec![vec![' '; width]; height];
    for row in &mut cells {
        row[mid_col] = '|';
    }
    cells[mid_row] = vec!['-'; width];
    cells[mid_row][mid_col] = '+';

    for (col, sample) in samples.iter().enumerate() {
        let Some(y) = sample.y else { continue };
        let screen_y = mid_row as f64 - y * PLOT_Y_SCALE;
        if screen_y >= 0.0 && (screen_y as usize) < height {
            cells[screen_y as usize][col] = '*';
        }
    }

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height + 2);
    lines.push(Line::from(Span::styled(
        format!("Plot: {source}"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for row in cells {
        lines.push(Line::from(Span::raw(row.into_iter().collect::<String>())));
    }
    lines.push(Line::from(Span::styled(
        "press any key to return",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
