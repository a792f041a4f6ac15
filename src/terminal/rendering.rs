//! Pure ratatui rendering of the game screen.
//!
//! Nothing here touches terminal state; it only draws into a ratatui
//! `Frame`, so it can be exercised with ratatui's `TestBackend`.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::frame::AsciiFrame;
use crate::ascii::CellColor;
use crate::render::HUD_COLOR;

/// Text shown over the picture.
#[derive(Debug, Clone)]
pub struct HudText {
    pub score: String,
    pub time: String,
    pub status: Option<String>,
}

fn fg(color: CellColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Convert a grid to ratatui lines, merging runs of equal color into one span.
pub fn grid_lines(grid: &AsciiFrame) -> Vec<Line<'static>> {
    if grid.width == 0 {
        return Vec::new();
    }
    let width = grid.width as usize;

    grid.chars
        .chunks(width)
        .zip(grid.colors.chunks(width))
        .map(|(chars, colors)| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_color = colors.first().copied().unwrap_or_default();
            for (&ch, &color) in chars.iter().zip(colors) {
                if color != run_color && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), Style::default().fg(fg(run_color))));
                }
                run_color = color;
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, Style::default().fg(fg(run_color))));
            }
            Line::from(spans)
        })
        .collect()
}

/// Area left for the picture once the status line is reserved.
pub fn picture_area(area: Rect, status_line: bool) -> Rect {
    if status_line {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    }
}

/// Center a `width` x `height` box inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the picture, HUD labels and optional status line.
pub fn render_game(frame: &mut ratatui::Frame, grid: &AsciiFrame, hud: &HudText) {
    let area = frame.area();
    let main = picture_area(area, hud.status.is_some());
    let picture = centered(main, grid.width, grid.height);

    frame.render_widget(Paragraph::new(grid_lines(grid)), picture);

    let label_style = Style::default()
        .fg(Color::Rgb(HUD_COLOR[0], HUD_COLOR[1], HUD_COLOR[2]))
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let label_row = Rect { height: 1.min(picture.height), ..picture };
    frame.render_widget(Paragraph::new(hud.score.as_str()).style(label_style), Rect {
        width: (hud.score.chars().count() as u16).min(label_row.width),
        ..label_row
    });
    let time_width = (hud.time.chars().count() as u16).min(label_row.width);
    frame.render_widget(
        Paragraph::new(hud.time.as_str()).style(label_style).alignment(Alignment::Right),
        Rect {
            x: label_row.x + label_row.width - time_width,
            width: time_width,
            ..label_row
        },
    );

    if let Some(status) = &hud.status {
        let status_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1.min(area.height),
        };
        frame.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::Black).bg(Color::White)),
            status_area,
        );
    }
}
