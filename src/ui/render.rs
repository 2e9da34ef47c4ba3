use crate::store::Ingredient;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::text_field::TextField;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    PLACEHOLDER_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LABEL_WIDTH: u16 = 9;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = Header::new();
    frame.render_widget(header.widget(&app.config().store.base_url), regions.header);

    draw_form(frame, app, regions.form);
    draw_search(frame, app, regions.search);
    draw_list(frame, app, regions.list);

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if let Some(message) = app.request().error() {
        draw_error_modal(frame, message);
    }
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form_focused = matches!(app.focus(), Focus::Title | Focus::Amount);
    let block = titled_block("Add ingredient", form_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width <= LABEL_WIDTH || inner.height < 2 {
        return;
    }

    // The modal captures input, so park the hardware cursor while it is up.
    let typing = !app.has_error();
    let row = |offset: u16| Rect {
        x: inner.x,
        y: inner.y + offset,
        width: inner.width,
        height: 1,
    };
    let field_rect = |r: Rect| Rect {
        x: r.x + LABEL_WIDTH,
        y: r.y,
        width: r.width - LABEL_WIDTH,
        height: 1,
    };

    let title_row = row(0);
    draw_label(frame, " Title", title_row, app.focus() == Focus::Title);
    draw_field(
        frame,
        app.title_field(),
        field_rect(title_row),
        typing && app.focus() == Focus::Title,
        "e.g. Flour",
    );

    let amount_row = row(1);
    draw_label(frame, " Amount", amount_row, app.focus() == Focus::Amount);
    draw_field(
        frame,
        app.amount_field(),
        field_rect(amount_row),
        typing && app.focus() == Focus::Amount,
        "e.g. 2.5",
    );

    if inner.height < 3 {
        return;
    }
    let status_row = row(2);
    if let Some(hint) = app.form_hint() {
        let hint_line = Span::styled(format!(" {hint}"), Style::default().fg(STATUS_ERROR));
        frame.render_widget(Paragraph::new(hint_line), status_row);
    } else if app.request().is_loading() {
        let spin = SPINNER_FRAMES[app.tick_count() % SPINNER_FRAMES.len()];
        let busy_line = Span::styled(format!(" {spin} Working"), Style::default().fg(ACCENT));
        frame.render_widget(Paragraph::new(busy_line), status_row);
    }
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Search;
    let block = titled_block("Search", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 2 || inner.height < 1 {
        return;
    }

    let field_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width - 1,
        height: 1,
    };
    draw_field(
        frame,
        app.search_field(),
        field_area,
        focused && !app.has_error(),
        "Filter by exact title",
    );
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::List;
    let entries = app.ingredients().entries();
    let title = format!("Ingredients ({})", entries.len());
    let block = titled_block(&title, focused);

    if entries.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " Nothing here yet.",
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let row_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = entries
        .iter()
        .map(|ingredient| list_row(ingredient, row_width))
        .collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn list_row(ingredient: &Ingredient, width: usize) -> ListItem<'static> {
    let amount = format!("{} x ", ingredient.amount);
    let padding = width
        .saturating_sub(1 + ingredient.title.chars().count())
        .saturating_sub(amount.chars().count());
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", ingredient.title),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(amount, Style::default().fg(ACCENT)),
    ]);
    ListItem::new(line)
}

fn draw_error_modal(frame: &mut Frame<'_>, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 6).max(30);
    let modal = centered_rect_by_size(area, width, 5);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(Span::styled(" Error ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let body = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Dismiss",
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(body).block(block), modal);
}

fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let title_color = if focused { ACCENT } else { HEADER_TEXT };
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(title_color),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_label(frame: &mut Frame<'_>, label: &str, row: Rect, active: bool) {
    let color = if active { ACCENT } else { HEADER_TEXT };
    let area = Rect {
        x: row.x,
        y: row.y,
        width: LABEL_WIDTH,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label.to_string(), Style::default().fg(color))),
        area,
    );
}

fn draw_field(
    frame: &mut Frame<'_>,
    field: &TextField,
    area: Rect,
    cursor_here: bool,
    placeholder: &str,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let widget = if field.is_empty() {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    } else {
        Paragraph::new(Span::styled(
            field.text().to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    frame.render_widget(widget, area);

    if cursor_here {
        let x = area.x + (field.cursor() as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}
