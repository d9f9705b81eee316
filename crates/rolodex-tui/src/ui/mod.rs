use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use ratatui::Frame;

use rolodex_core::domain::Contact;
use rolodex_core::dto::{ContactDetailDto, InteractionRowDto};
use rolodex_core::ContactField;

use crate::app::{
    AddContactForm, App, DetailPane, DetailState, DetailTab, EditForm, InteractionForm, Mode,
    PhotoPrompt,
};
use crate::util::describe_picture;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    match &app.mode {
        Mode::ModalAddContact(form) => render_add_contact(frame, size, app, form),
        Mode::Detail(state) => render_detail(frame, size, app, state),
        _ => {}
    }

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let query = app.directory.search_query();
    let editing = matches!(app.mode, Mode::SearchEditing);
    let shown = app.directory.filtered_contacts().len();
    let mut spans = vec![field_span("Search", query, editing)];
    if editing {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        format!("   {} of {} contacts", shown, app.directory.len()),
        Style::default().fg(Color::DarkGray),
    ));

    let block = Block::default().borders(Borders::ALL).title("Rolodex");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match &app.mode {
        Mode::List => "j/k move  enter open  / search  c clear  a add  d delete  ? help  q quit",
        Mode::SearchEditing => "type to search  enter/esc done",
        Mode::ModalAddContact(_) => "tab next  shift+tab prev  enter select  esc cancel",
        Mode::Detail(state) => match &state.pane {
            DetailPane::View => {
                "tab switch tab  e edit  t tag  h/l pick tag  x delete tag  i interaction  esc close"
            }
            DetailPane::Edit(_) => {
                "tab next  shift+tab prev  enter select  ctrl+s save  esc cancel"
            }
            DetailPane::PhotoPath(_) => "enter load photo  esc back",
            DetailPane::NewTag => "enter add tag  esc cancel",
            DetailPane::NewInteraction(_) => {
                "tab next  shift+tab prev  enter select  ctrl+n today  esc close form"
            }
        },
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let rows = app.directory.rows();
    if rows.is_empty() {
        let paragraph = Paragraph::new(app.empty_hint())
            .block(Block::default().borders(Borders::ALL).title("Contacts"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Name", "Email", "Tags", "Last Interaction", "Actions"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let name = Line::from(vec![
                Span::styled(
                    format!("({}) ", row.initials),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(row.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]);
            Row::new(vec![
                Cell::from(name),
                Cell::from(row.email.clone()),
                Cell::from(tag_badges(&row.tags)),
                Cell::from(row.last_interaction.clone()),
                Cell::from(Span::styled("[d]elete", Style::default().fg(Color::Red))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(24),
        Constraint::Percentage(26),
        Constraint::Percentage(16),
        Constraint::Percentage(10),
    ];

    let mut state = TableState::default().with_selected(Some(app.selected));
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Contacts"))
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_add_contact(frame: &mut Frame<'_>, area: Rect, app: &App, form: &AddContactForm) {
    let modal = centered_rect(60, 40, area);
    frame.render_widget(Clear, modal);

    let draft = app.directory.new_contact_draft();
    let block = Block::default().borders(Borders::ALL).title("Add New Contact");
    let mut lines = vec![
        field_line("Name", &draft.name, form.focus == 0),
        field_line("Email", &draft.email, form.focus == 1),
        Line::from(""),
    ];
    lines.push(buttons(form.is_save_focus(), form.is_cancel_focus(), "[Add]"));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, modal);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App, state: &DetailState) {
    let Some(detail) = app.directory.selected_detail() else {
        return;
    };
    let modal = centered_rect(80, 85, area);
    frame.render_widget(Clear, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(modal);

    let title = format!("{}  {}", detail.initials, detail.name);
    let tabs = Tabs::new(DetailTab::TITLES)
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(state.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    match state.tab {
        DetailTab::Details => match &state.pane {
            DetailPane::Edit(form) => render_edit_form(frame, chunks[1], app, form),
            DetailPane::PhotoPath(prompt) => {
                render_edit_form(frame, chunks[1], app, &prompt.form);
                render_photo_prompt(frame, area, prompt);
            }
            _ => render_detail_view(frame, chunks[1], app, &detail, state),
        },
        DetailTab::Interactions => render_interactions(frame, chunks[1], app, &detail, state),
    }
}

fn render_detail_view(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &App,
    detail: &ContactDetailDto,
    state: &DetailState,
) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(detail.name.clone(), bold)),
        label_line("Photo", describe_picture(&detail.profile_picture)),
        label_line("Email", detail.email.clone()),
        label_line("Phone", detail.phone.clone()),
        label_line("How We Met", detail.how_we_met.clone()),
        Line::from(""),
        Line::from(Span::styled("Socials", bold)),
    ];
    for link in &detail.social_links {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}: {} ", link.label, link.handle)),
            Span::styled(link.url.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    if let Some(site) = &detail.personal_site {
        lines.push(Line::from(vec![
            Span::raw("  Personal Site: "),
            Span::styled(site.clone(), Style::default().fg(Color::Blue)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Notes", bold)));
    for note in detail.notes.lines() {
        lines.push(Line::from(format!("  {}", note)));
    }

    lines.push(Line::from(""));
    let mut tag_spans = vec![Span::styled("Tags: ", bold)];
    for (idx, tag) in detail.tags.iter().enumerate() {
        let style = if idx == state.tag_cursor {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default().fg(Color::LightBlue)
        };
        tag_spans.push(Span::styled(format!("[{} x]", tag), style));
        tag_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tag_spans));
    if matches!(state.pane, DetailPane::NewTag) {
        lines.push(field_line("New tag", app.directory.new_tag_input(), true));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_edit_form(frame: &mut Frame<'_>, area: Rect, app: &App, form: &EditForm) {
    let Some(buffer) = app.directory.edit_buffer() else {
        let paragraph = Paragraph::new("Opening editor...")
            .block(Block::default().borders(Borders::ALL).title("Edit"));
        frame.render_widget(paragraph, area);
        return;
    };
    let contact: &Contact = buffer.contact();

    let mut lines: Vec<Line> = ContactField::ALL
        .iter()
        .enumerate()
        .flat_map(|(idx, field)| {
            multiline_field(field.label(), &field.read(contact), form.focus == idx)
        })
        .collect();
    lines.push(field_line(
        "Photo",
        &describe_picture(&contact.profile_picture),
        form.is_photo_focus(),
    ));
    lines.push(Line::from(Span::styled(
        "Enter on Photo picks an image file.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(buttons(form.is_save_focus(), form.is_cancel_focus(), "[Save]"));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Edit"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_photo_prompt(frame: &mut Frame<'_>, area: Rect, prompt: &PhotoPrompt) {
    let modal = centered_rect(60, 20, area);
    frame.render_widget(Clear, modal);
    let paragraph = Paragraph::new(field_line("Path", &prompt.path, true)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Upload Profile Photo"),
    );
    frame.render_widget(paragraph, modal);
}

fn render_interactions(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &App,
    detail: &ContactDetailDto,
    state: &DetailState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    let form_lines = match &state.pane {
        DetailPane::NewInteraction(form) => interaction_form_lines(app, form),
        _ => vec![Line::from(Span::styled(
            "Press 'i' to log a new interaction.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let form = Paragraph::new(form_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add New Interaction"),
    );
    frame.render_widget(form, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Interaction Log");
    if detail.interactions.is_empty() {
        let paragraph = Paragraph::new("No interactions yet.")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let header = Row::new(["Date", "Topics", "Medium"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = detail.interactions.iter().map(interaction_row).collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Percentage(60),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, chunks[1]);
}

fn interaction_form_lines(app: &App, form: &InteractionForm) -> Vec<Line<'static>> {
    let draft = app.directory.new_interaction_draft();
    vec![
        field_line(
            "Date (YYYY-MM-DD)",
            draft.date.as_deref().unwrap_or_default(),
            form.focus == 0,
        ),
        field_line("Topics (comma-separated)", &form.topics, form.focus == 1),
        field_line(
            "Medium",
            draft.medium.as_deref().unwrap_or_default(),
            form.focus == 2,
        ),
        Line::from(Span::styled(
            "Ctrl+N sets the date to today.",
            Style::default().fg(Color::DarkGray),
        )),
        buttons(form.is_save_focus(), form.is_cancel_focus(), "[Add]"),
    ]
}

fn interaction_row(interaction: &InteractionRowDto) -> Row<'static> {
    Row::new(vec![
        Cell::from(interaction.date.clone()),
        Cell::from(interaction.topics.clone()),
        Cell::from(interaction.medium.clone()),
    ])
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 70, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: Ctrl+C quit, ? help (list and detail views)"),
        Line::from("List: j/k move, enter open, / search, c clear search, a add, d delete, q quit"),
        Line::from("Search: matches name, email, or any tag (case-insensitive)"),
        Line::from("Detail: tab switch tab, e edit, t add tag, h/l pick tag, x delete tag, i add interaction, esc close"),
        Line::from("Edit: tab/shift+tab move, enter activate, Ctrl+S save, esc cancel"),
        Line::from("Interaction form: tab/shift+tab move, Ctrl+N today, enter activate, esc close"),
        Line::from("Text fields: Ctrl+U clear, Ctrl+W delete word"),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn tag_badges(tags: &[String]) -> Line<'static> {
    let spans: Vec<Span> = tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(
                    format!("[{}]", tag),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn buttons(save_focused: bool, cancel_focused: bool, save_label: &'static str) -> Line<'static> {
    let save_style = if save_focused {
        Style::default().fg(Color::Black).bg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Green)
    };
    let cancel_style = if cancel_focused {
        Style::default().fg(Color::Black).bg(Color::LightRed)
    } else {
        Style::default().fg(Color::Red)
    };
    Line::from(vec![
        Span::styled(save_label, save_style),
        Span::raw("  "),
        Span::styled("[Cancel]", cancel_style),
    ])
}

fn label_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn field_span(label: &str, value: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Span::styled(format!("{}: {}", label, value), style)
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), style),
    ])
}

/// Like `field_line`, with each further line of the value indented under
/// the first.
fn multiline_field(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let mut parts = value.split('\n');
    let first = parts.next().unwrap_or_default();
    let indent = " ".repeat(label.chars().count() + 2);
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mut lines = vec![field_line(label, first, focused)];
    lines.extend(parts.map(|part| {
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(part.to_string(), style),
        ])
    }));
    lines
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
