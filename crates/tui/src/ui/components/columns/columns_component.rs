use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme;

use crossterm::event::{KeyCode, KeyEvent};
use feedrail_types::{Column, ColumnKind, Effect, resolve};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Minimum width of one column pane.
const PANE_MIN_WIDTH: u16 = 28;

/// Renders the column panes and reacts to navigation focus events.
#[derive(Debug, Default)]
pub struct ColumnsViewComponent;

impl ColumnsViewComponent {
    /// Number of panes that fit in `area`.
    pub(crate) fn visible_count(area: Rect) -> usize {
        (area.width / PANE_MIN_WIDTH).max(1) as usize
    }

    fn pane_lines(column: &Column) -> Vec<Line<'static>> {
        let descriptor = resolve(column);
        let mut lines = vec![Line::from(format!("{}  {}", descriptor.icon.glyph(), kind_label(column)))];
        if let Some(owner) = &column.owner {
            lines.push(Line::from(format!("owner: {owner}")));
        }
        if let Some(repo) = &column.repo {
            lines.push(Line::from(format!("repo: {repo}")));
        }
        lines
    }
}

fn kind_label(column: &Column) -> String {
    match column.kind {
        ColumnKind::Notifications => "notifications".into(),
        ColumnKind::Activity => column.subtype.clone().unwrap_or_else(|| "activity".into()),
        ColumnKind::Unknown => "unknown".into(),
    }
}

impl Component for ColumnsViewComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let visible = Self::visible_count(app.columns_view.last_area);
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            // Manual scrolling; does not publish anything
            KeyCode::Right => {
                let max_offset = app.columns.len().saturating_sub(visible);
                if app.columns_view.offset < max_offset {
                    app.columns_view.offset += 1;
                    app.columns_view.target = app.columns_view.offset;
                }
            }
            KeyCode::Left => {
                if app.columns_view.offset > 0 {
                    app.columns_view.offset -= 1;
                    app.columns_view.target = app.columns_view.offset;
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.columns_view.last_area = area;

        if app.columns.is_empty() {
            frame.render_widget(
                Paragraph::new("No columns configured — press + in the sidebar")
                    .centered()
                    .style(theme::text_muted()),
                area,
            );
            return;
        }

        let visible = Self::visible_count(area).min(app.columns.len());
        let offset = app.columns_view.offset.min(app.columns.len() - 1);
        let constraints = vec![Constraint::Ratio(1, visible as u32); visible];
        let panes = Layout::horizontal(constraints).split(area);

        for (slot, pane_area) in panes.iter().enumerate() {
            let index = offset + slot;
            let Some(column) = app.columns.get(index) else {
                break;
            };
            let is_selected = app.columns_view.selected == Some(index);
            let is_flashing = app.columns_view.is_flashing(index);

            let border_style = if is_flashing {
                theme::flash_style()
            } else {
                theme::border_style(is_selected)
            };
            let title = format!(" {} ", column.id);
            let block = Block::default()
                .title(Line::styled(title, theme::title_style()))
                .borders(Borders::ALL)
                .border_style(border_style);
            let body = Paragraph::new(Self::pane_lines(column))
                .style(theme::text_style())
                .block(block);
            frame.render_widget(body, *pane_area);
        }
    }
}
