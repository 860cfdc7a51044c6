//! Canonical navigation data shared by every panel surface

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use crate::core::{Action, Context, StatusLevel};

/// Renderable icon glyphs, one concrete variant per icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Home,
    Search,
    Heart,
    User,
    Settings,
    Menu,
    Close,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Home => "⌂",
            Glyph::Search => "⌕",
            Glyph::Heart => "♥",
            Glyph::User => "◉",
            Glyph::Settings => "⚙",
            Glyph::Menu => "≡",
            Glyph::Close => "✕",
        }
    }
}

/// One navigation entry
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Glyph,
}

/// The one nav item list. Sidebar, drawer, and bottom navbar all render
/// from this; none of them keeps a copy.
pub const ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home", icon: Glyph::Home },
    NavItem { id: "search", label: "Search", icon: Glyph::Search },
    NavItem { id: "favorites", label: "Favorites", icon: Glyph::Heart },
    NavItem { id: "profile", label: "Profile", icon: Glyph::User },
    NavItem { id: "settings", label: "Settings", icon: Glyph::Settings },
    NavItem { id: "dashboard", label: "Dashboard", icon: Glyph::Home },
    NavItem { id: "analytics", label: "Analytics", icon: Glyph::Search },
    NavItem { id: "projects", label: "Projects", icon: Glyph::User },
    NavItem { id: "team", label: "Team", icon: Glyph::User },
    NavItem { id: "messages", label: "Messages", icon: Glyph::Heart },
    NavItem { id: "calendar", label: "Calendar", icon: Glyph::Search },
    NavItem { id: "files", label: "Files", icon: Glyph::Settings },
    NavItem { id: "notifications", label: "Notifications", icon: Glyph::Heart },
    NavItem { id: "help", label: "Help", icon: Glyph::Search },
    NavItem { id: "reports", label: "Reports", icon: Glyph::Settings },
    NavItem { id: "billing", label: "Billing", icon: Glyph::User },
    NavItem { id: "integrations", label: "Integrations", icon: Glyph::Home },
    NavItem { id: "activity", label: "Activity", icon: Glyph::Search },
    NavItem { id: "security", label: "Security", icon: Glyph::Settings },
    NavItem { id: "backup", label: "Backup", icon: Glyph::Heart },
];

/// How many items the compact bottom navbar shows
pub const QUICK_BAR_ITEMS: usize = 4;

pub fn cursor_down(ctx: &mut Context) {
    if ctx.nav_cursor + 1 < ITEMS.len() {
        ctx.nav_cursor += 1;
    }
}

pub fn cursor_up(ctx: &mut Context) {
    ctx.nav_cursor = ctx.nav_cursor.saturating_sub(1);
}

/// Activate the item under the cursor
pub fn activate(ctx: &mut Context) -> Action {
    let Some(item) = ITEMS.get(ctx.nav_cursor) else {
        return Action::None;
    };
    ctx.active_nav = ctx.nav_cursor;
    Action::Notify(format!("{} selected", item.label), StatusLevel::Info)
}

/// Render the nav list with the shared active/cursor state. `selected`
/// is the row to highlight, or `None` when the surface is unfocused.
pub fn draw_items(frame: &mut Frame, area: Rect, ctx: &Context, selected: Option<usize>) {
    let items: Vec<ListItem> = ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == ctx.active_nav {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", item.icon.symbol()), style),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸");
    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
