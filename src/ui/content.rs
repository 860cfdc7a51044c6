//! Main content area: greeting, content tabs, project card grid

use chrono::{Local, Timelike};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module, StatusLevel};
use crate::shell::breakpoint::LayoutMode;

const CARD_HEIGHT: u16 = 6;

/// Content tabs above the project grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTab {
    Recent,
    Favorites,
    Archived,
}

impl ContentTab {
    pub const ALL: [ContentTab; 3] = [
        ContentTab::Recent,
        ContentTab::Favorites,
        ContentTab::Archived,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ContentTab::Recent => "Recent",
            ContentTab::Favorites => "Favorites",
            ContentTab::Archived => "Archived",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ContentTab::Recent => "🕒",
            ContentTab::Favorites => "⭐",
            ContentTab::Archived => "📦",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ContentTab::Recent => '1',
            ContentTab::Favorites => '2',
            ContentTab::Archived => '3',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub last_updated: &'static str,
    pub members: &'static str,
}

fn sample_projects() -> Vec<Project> {
    const ICONS: [&str; 6] = ["📊", "🎨", "🚀", "💡", "🔧", "📱"];
    (1..=6)
        .map(|index: usize| Project {
            title: format!("Project {index}"),
            description:
                "This is a sample project description that shows how content flows in the responsive layout.",
            icon: ICONS[(index - 1) % ICONS.len()],
            status: "Active",
            last_updated: "2 hours ago",
            members: "A B C",
        })
        .collect()
}

/// The main content pane. Tab selection and scroll offset are ephemeral
/// presentation state owned here; the shell never sees them.
pub struct Content {
    active_tab: ContentTab,
    scroll: u16,
    projects: Vec<Project>,
}

impl Content {
    pub fn new() -> Self {
        Self {
            active_tab: ContentTab::Recent,
            scroll: 0,
            projects: sample_projects(),
        }
    }

    pub fn active_tab(&self) -> ContentTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: ContentTab) {
        self.active_tab = tab;
        self.scroll = 0;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let tabs = ContentTab::ALL;
        let index = tabs.iter().position(|tab| *tab == self.active_tab).unwrap_or(0);
        let next = if forward {
            (index + 1) % tabs.len()
        } else {
            (index + tabs.len() - 1) % tabs.len()
        };
        self.set_tab(tabs[next]);
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = (self.scroll + amount).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        // Card rows, single-column worst case
        self.projects.len().saturating_sub(1) as u16
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Content {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('[') => {
                self.cycle_tab(false);
                Action::None
            }
            KeyCode::Char(']') => {
                self.cycle_tab(true);
                Action::None
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.set_tab(ContentTab::ALL[index]);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                if ctx.scroll_locked {
                    return scroll_locked_notice();
                }
                self.scroll_down(if key.code == KeyCode::PageDown { 2 } else { 1 });
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                if ctx.scroll_locked {
                    return scroll_locked_notice();
                }
                self.scroll_up(if key.code == KeyCode::PageUp { 2 } else { 1 });
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let heading = match ctx.mode {
            LayoutMode::Compact => greeting(Local::now().hour()),
            LayoutMode::Wide => "Project Overview",
        };
        let header = Text::from(vec![
            Line::from(Span::styled(
                heading,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Here's what's happening with your projects today.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let mut spans = Vec::new();
        for tab in ContentTab::ALL {
            let style = if tab == self.active_tab {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(
                format!(" {} {} [{}] ", tab.glyph(), tab.title(), tab.shortcut()),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

        self.draw_grid(frame, chunks[2], ctx);
    }
}

impl Content {
    fn draw_grid(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let columns = match ctx.mode {
            LayoutMode::Compact => 1,
            LayoutMode::Wide => {
                if area.width >= 120 {
                    3
                } else {
                    2
                }
            }
        };

        let rows: Vec<&[Project]> = self.projects.chunks(columns).collect();
        for (row_index, row) in rows.iter().enumerate().skip(self.scroll as usize) {
            let offset = (row_index - self.scroll as usize) as u16 * CARD_HEIGHT;
            if offset + CARD_HEIGHT > area.height {
                break;
            }
            let row_area = Rect {
                x: area.x,
                y: area.y + offset,
                width: area.width,
                height: CARD_HEIGHT,
            };
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_area);
            for (project, cell) in row.iter().zip(cells.iter()) {
                draw_card(frame, *cell, project);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, project: &Project) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} {}", project.icon, project.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Text::from(vec![
        Line::from(project.description),
        Line::from(vec![
            Span::styled(project.status, Style::default().fg(Color::Green)),
            Span::styled(
                format!("  {}", project.last_updated),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("members: {}", project.members),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn scroll_locked_notice() -> Action {
    Action::Notify(
        "Scrolling is locked while the drawer is open".to_string(),
        StatusLevel::Warn,
    )
}

fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning! 👋",
        12..=17 => "Good afternoon! 👋",
        _ => "Good evening! 👋",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cycle_tab_round_trips() {
        let mut content = Content::new();
        assert_eq!(content.active_tab(), ContentTab::Recent);
        content.cycle_tab(true);
        assert_eq!(content.active_tab(), ContentTab::Favorites);
        content.cycle_tab(true);
        content.cycle_tab(true);
        assert_eq!(content.active_tab(), ContentTab::Recent);
        content.cycle_tab(false);
        assert_eq!(content.active_tab(), ContentTab::Archived);
    }

    #[test]
    fn test_switching_tabs_resets_scroll() {
        let mut content = Content::new();
        content.scroll_down(3);
        assert!(content.scroll() > 0);
        content.set_tab(ContentTab::Favorites);
        assert_eq!(content.scroll(), 0);
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let mut content = Content::new();
        content.scroll_down(100);
        assert_eq!(content.scroll(), content.max_scroll());
        content.scroll_up(100);
        assert_eq!(content.scroll(), 0);
    }

    #[test]
    fn test_scroll_keys_respect_the_lock() {
        let mut content = Content::new();
        let mut ctx = Context::new();
        ctx.scroll_locked = true;
        let action = content.handle_key(press(KeyCode::Char('j')), &mut ctx);
        assert_eq!(content.scroll(), 0);
        assert!(matches!(action, Action::Notify(_, StatusLevel::Warn)));

        ctx.scroll_locked = false;
        content.handle_key(press(KeyCode::Char('j')), &mut ctx);
        assert_eq!(content.scroll(), 1);
    }

    #[test]
    fn test_number_keys_jump_to_tabs() {
        let mut content = Content::new();
        let mut ctx = Context::new();
        content.handle_key(press(KeyCode::Char('3')), &mut ctx);
        assert_eq!(content.active_tab(), ContentTab::Archived);
        content.handle_key(press(KeyCode::Char('1')), &mut ctx);
        assert_eq!(content.active_tab(), ContentTab::Recent);
    }

    #[test]
    fn test_greeting_follows_the_clock() {
        assert_eq!(greeting(8), "Good morning! 👋");
        assert_eq!(greeting(14), "Good afternoon! 👋");
        assert_eq!(greeting(22), "Good evening! 👋");
        assert_eq!(greeting(2), "Good evening! 👋");
    }
}
