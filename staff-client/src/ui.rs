//! Rendering
//!
//! Draws a [`DirectoryApp`] into a ratatui frame. No state changes here.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::{DirectoryApp, DraftField, EDIT_FORM, EmployeeDraft, Focus, NEW_FORM, ViewMode};

/// Placeholder row text for an empty directory
pub const EMPTY_PLACEHOLDER: &str = "No employees found";

const LABEL_WIDTH: u16 = 16;

pub fn render(f: &mut Frame, app: &DirectoryApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Status (loading / error)
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status(f, app, chunks[1]);

    // 编辑模式只隐藏表格，新增表单始终可见
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    match (app.view, &app.edit) {
        (ViewMode::Edit, Some(edit)) => render_form(
            f,
            app,
            body[0],
            " Edit Employee ",
            &EDIT_FORM,
            &edit.draft,
            app.focus == Focus::EditForm,
            Some(&edit.draft.employee_id),
        ),
        _ => render_table(f, app, body[0]),
    }
    render_form(
        f,
        app,
        body[1],
        " Add Employee ",
        &NEW_FORM,
        &app.new_draft,
        app.focus == Focus::NewForm,
        None,
    );

    let help = match app.focus {
        Focus::Table => "q quit | j/k move | r refresh | e edit | d delete | a add | x clear error",
        Focus::NewForm => "Tab/Shift-Tab field | Enter add | Esc back to table",
        Focus::EditForm => "Tab/Shift-Tab field | Enter save | Esc cancel",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn render_header(f: &mut Frame, app: &DirectoryApp, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Staff Directory "),
        Span::styled(
            format!(" {} employees ", app.employees.len()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_status(f: &mut Frame, app: &DirectoryApp, area: Rect) {
    let mut spans = Vec::new();
    if app.loading {
        spans.push(Span::styled(
            " Loading... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(error) = &app.error {
        spans.push(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            "(x to dismiss)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, app: &DirectoryApp, area: Rect) {
    let header = Row::new(
        ["Employee ID", "Name", "Surname", "Email", "Phone", "Position", "Image"]
            .into_iter()
            .map(Cell::from),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = if app.employees.is_empty() {
        vec![Row::new(vec![Cell::from(EMPTY_PLACEHOLDER)])]
    } else {
        app.employees
            .iter()
            .map(|e| {
                Row::new(vec![
                    Cell::from(e.employee_id.as_str()),
                    Cell::from(e.name.as_str()),
                    Cell::from(e.surname.as_str()),
                    Cell::from(e.email.as_str()),
                    Cell::from(e.phone_number.as_str()),
                    Cell::from(e.employee_position.as_str()),
                    Cell::from(if e.image.is_some() { "yes" } else { "" }),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(20),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(5),
    ];

    let border = if app.focus == Focus::Table {
        Color::Yellow
    } else {
        Color::Gray
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Employees ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.focus == Focus::Table && !app.employees.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

#[allow(clippy::too_many_arguments)]
fn render_form(
    f: &mut Frame,
    app: &DirectoryApp,
    area: Rect,
    title: &str,
    fields: &[DraftField],
    draft: &EmployeeDraft,
    focused: bool,
    read_only_id: Option<&str>,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::Gray }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    if let Some(employee_id) = read_only_id
        && y < bottom
    {
        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", DraftField::EmployeeId.label(), width = LABEL_WIDTH as usize),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(employee_id, Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    let value_width = inner.width.saturating_sub(LABEL_WIDTH + 1);

    for (index, field) in fields.iter().enumerate() {
        if y >= bottom {
            break;
        }
        let active = focused && index == app.field_index;
        let label_style = if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let label = Paragraph::new(Span::styled(field.label(), label_style));
        f.render_widget(label, Rect::new(inner.x, y, LABEL_WIDTH.min(inner.width), 1));

        let value_area = Rect::new(inner.x + LABEL_WIDTH + 1, y, value_width, 1);
        if active {
            let scroll = app.input.visual_scroll(value_width as usize);
            let value = Paragraph::new(app.input.value())
                .style(Style::default().fg(Color::Yellow))
                .scroll((0, scroll as u16));
            f.render_widget(value, value_area);
            f.set_cursor_position((
                value_area.x + (app.input.visual_cursor().max(scroll) - scroll) as u16,
                y,
            ));
        } else {
            f.render_widget(Paragraph::new(draft.get(*field)), value_area);
        }
        y += 1;
    }
}
