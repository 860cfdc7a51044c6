//! Top (wide) and bottom (compact) navigation bars

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::shell::controller::DrawerPosition;
use crate::ui::nav::{self, Glyph};

/// Desktop top bar: hamburger toggle, title, user badge.
pub fn draw_top(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let toggle_style = if app.panel.is_open() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let left = Line::from(vec![
        Span::styled(format!(" {} ", Glyph::Menu.symbol()), toggle_style),
        Span::styled(" Dashboard", Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(left), chunks[0]);

    let badge = Line::from(vec![
        Span::styled(" JD ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" John Doe "),
    ]);
    f.render_widget(Paragraph::new(badge).alignment(Alignment::Right), chunks[1]);
}

/// Mobile bottom bar: drawer-position switch, the first few nav items,
/// and the menu toggle.
pub fn draw_bottom(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let switch_target = match app.panel.drawer_position() {
        DrawerPosition::Bottom => "side",
        DrawerPosition::Side => "bottom",
    };
    let mut spans = vec![Span::styled(
        format!(" ⇄ {switch_target} (C-m) "),
        Style::default().fg(Color::DarkGray),
    )];

    for (index, item) in nav::ITEMS.iter().take(nav::QUICK_BAR_ITEMS).enumerate() {
        let style = if index == app.ctx.active_nav {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!("  {} {}", item.icon.symbol(), item.label),
            style,
        ));
    }

    let menu_style = if app.panel.is_open() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(
        format!("  {} Menu (C-b) ", Glyph::Menu.symbol()),
        menu_style,
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}
