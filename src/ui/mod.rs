use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod content;
pub mod drawer;
pub mod layout;
pub mod nav;
pub mod navbar;
pub mod sidebar;

use crate::app::App;
use crate::core::{Module, StatusLevel};
use crate::shell::breakpoint::LayoutMode;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let areas = layout::areas(size, app.mode(), app.panel.state());

    match app.mode() {
        LayoutMode::Wide => {
            navbar::draw_top(f, areas.navbar, app);
            if app.panel.is_open() {
                app.sidebar.render(f, areas.sidebar, &app.ctx);
            }
            app.content.render(f, areas.content, &app.ctx);
        }
        LayoutMode::Compact => {
            app.content.render(f, areas.content, &app.ctx);
            navbar::draw_bottom(f, areas.navbar, app);
            if app.panel.is_open() {
                dim(f, areas.content);
                app.drawer.render(f, areas.drawer, &app.ctx);
            }
        }
    }

    draw_status_line(f, areas.status_line, app);

    if app.help_open {
        draw_help_popup(f, size);
    }
}

/// Dim the content behind the drawer. A style-only block restyles the
/// cells without clearing their symbols.
fn dim(f: &mut Frame, area: Rect) {
    let scrim = Block::default().style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(scrim, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::Gray,
            StatusLevel::Warn => Color::Yellow,
        };
        let paragraph = Paragraph::new(Span::styled(
            format!(" {text}"),
            Style::default().fg(color),
        ));
        f.render_widget(paragraph, area);
        return;
    }

    let panel = app.panel.state();
    let dark = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(" Mode ", dark),
        Span::raw(match app.mode() {
            LayoutMode::Wide => "wide  ",
            LayoutMode::Compact => "compact  ",
        }),
        Span::styled("Panel ", dark),
        Span::raw(if panel.is_open { "open  " } else { "closed  " }),
        Span::styled("Drawer ", dark),
        Span::raw(format!(
            "{}{}  ",
            panel.drawer_position.title(),
            if panel.is_expanded { " (expanded)" } else { "" }
        )),
    ];
    if app.scroll_lock.is_engaged() {
        spans.push(Span::styled("scroll locked  ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled("? ", dark));
    spans.push(Span::raw("help"));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Shell"),
        Line::from("  Ctrl-b     Toggle panel"),
        Line::from("  Ctrl-m     Bottom/side drawer"),
        Line::from("  Esc        Close panel"),
        Line::from("  Tab        Switch panel/content focus"),
        Line::from(""),
        Line::from("Panel"),
        Line::from("  j / k      Move selection"),
        Line::from("  Enter      Select item"),
        Line::from("  Enter/Space  Resize drawer (on the handle)"),
        Line::from(""),
        Line::from("Content"),
        Line::from("  [ / ]      Prev/Next tab"),
        Line::from("  1-3        Jump to tab"),
        Line::from("  j / k      Scroll cards"),
        Line::from("  Mouse      Scroll; click outside the drawer closes it"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
