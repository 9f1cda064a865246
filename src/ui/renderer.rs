use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::palette::{ColorKey, OptionKey};
use crate::core::selection::OptionList;
use crate::ui::app::{Button, Focus, HitTarget, UiApp};
use crate::ui::effects::offset_rect;
use crate::utils::color::terminal_color;

pub const HEADING_TEXT: &str = "Pick a color and an animation";

const HELP_TEXT: &str =
    "Tab focus • ←/→ or h/l move • Enter pick • a apply • r reset • q quit";

pub fn ui(f: &mut Frame, app: &mut UiApp) {
    app.hit_map.clear();

    let background = Block::default().style(Style::default().bg(app.theme.background_color));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // heading stage
            Constraint::Length(3), // colors
            Constraint::Length(3), // animations
            Constraint::Length(3), // buttons
            Constraint::Length(1), // feedback
            Constraint::Length(1), // help
        ])
        .split(f.area());

    let title = format!("marquee v{}", env!("CARGO_PKG_VERSION"));
    f.render_widget(
        Paragraph::new(Span::styled(title, app.theme.title_style)),
        chunks[0],
    );

    render_heading(f, app, chunks[1]);
    render_option_list(f, app, OptionList::Color, chunks[2]);
    render_option_list(f, app, OptionList::Animation, chunks[3]);
    render_buttons(f, app, chunks[4]);

    if let Some(message) = app.controller.surface().heading().feedback.as_deref() {
        f.render_widget(
            Paragraph::new(Span::styled(message.to_string(), app.theme.feedback_style))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }

    f.render_widget(
        Paragraph::new(Span::styled(HELP_TEXT, app.theme.help_style)).alignment(Alignment::Center),
        chunks[6],
    );
}

fn render_heading(f: &mut Frame, app: &UiApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let surface = app.controller.surface();
    let painted = surface.painted_color(app.theme.background_rgb);
    let style = Style::default()
        .fg(terminal_color(painted, app.color_depth))
        .add_modifier(Modifier::BOLD);

    let text_width = (HEADING_TEXT.width() as u16).min(inner.width);
    let base = Rect {
        x: inner.x + (inner.width - text_width) / 2,
        y: inner.y + inner.height / 2,
        width: text_width,
        height: 1,
    };
    let target = offset_rect(base, surface.effect_frame(), inner);
    f.render_widget(Paragraph::new(Span::styled(HEADING_TEXT, style)), target);
}

fn render_option_list(f: &mut Frame, app: &mut UiApp, list: OptionList, area: Rect) {
    let focused = app.focus.list() == Some(list);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.picker(list).title())
        .border_style(if focused {
            app.theme.focused_border_style
        } else {
            app.theme.border_style
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let palette = app.controller.palette();
    let heading = app.controller.surface().heading();
    let picker = app.picker(list);

    let mut hits = Vec::new();
    let mut x = inner.x;
    let right = inner.x + inner.width;
    for (index, item) in picker.items.iter().enumerate() {
        let label = format!("[ {} ]", item.label);
        let width = label.width() as u16;
        if inner.height == 0 || x + width > right {
            break;
        }

        let mut style = app.theme.option_style;
        if let Some(key) = ColorKey::from_id(item.id).filter(|_| list == OptionList::Color) {
            style = style.fg(terminal_color(palette.color(key), app.color_depth));
        }
        if heading.is_highlighted(list, item.id) {
            style = style.patch(app.theme.selected_option_style);
        }
        if focused && picker.cursor == index {
            style = style.patch(app.theme.cursor_style);
        }

        let rect = Rect {
            x,
            y: inner.y,
            width,
            height: 1,
        };
        f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        hits.push((rect, HitTarget::Option(list, item.id)));
        x += width + 1;
    }
    app.hit_map.extend(hits);
}

fn render_buttons(f: &mut Frame, app: &mut UiApp, area: Rect) {
    let focused = app.focus == Focus::Buttons;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            app.theme.focused_border_style
        } else {
            app.theme.border_style
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut x = inner.x;
    let right = inner.x + inner.width;
    for button in Button::ALL {
        let label = format!("< {} >", button.label());
        let width = label.width() as u16;
        if inner.height == 0 || x + width > right {
            break;
        }
        let mut style = app.theme.button_style;
        if focused && app.button == button {
            style = style.patch(app.theme.cursor_style);
        }
        let rect = Rect {
            x,
            y: inner.y,
            width,
            height: 1,
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
        app.hit_map.push((rect, HitTarget::Button(button)));
        x += width + 2;
    }
}
