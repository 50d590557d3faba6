use crate::forms::{AddFriendField, Payer, SplitBillField};
use crate::ledger::{BalanceStatus, Friend};
use crate::ui::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    // Sidebar (friends + add form) on the left, split form / assistant on the right
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    if app.show_add_friend {
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(body_chunks[0]);
        render_friend_list(frame, app, sidebar[0]);
        render_add_friend(frame, app, sidebar[1]);
    } else {
        render_friend_list(frame, app, body_chunks[0]);
    }

    match app.selected_friend() {
        Some(friend) => render_split_bill(frame, app, friend, body_chunks[1]),
        None => render_assistant(frame, app, body_chunks[1]),
    }

    render_footer(frame, app, main_chunks[2]);

    if app.show_help {
        render_help(frame, app);
    }
}

fn border_style(app: &App, pane: Focus) -> Style {
    let color = if app.focus == pane {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };
    Style::default().fg(color)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Eat-'N-Split  ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} friends", app.directory.len()),
            Style::default().fg(app.theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent)),
    )
    .style(Style::default().bg(app.theme.bg));

    frame.render_widget(header, area);
}

fn balance_style(app: &App, friend: &Friend) -> Style {
    match friend.status() {
        BalanceStatus::Owed(_) => Style::default().fg(app.theme.owed),
        BalanceStatus::Owing(_) => Style::default().fg(app.theme.owing),
        BalanceStatus::Even => Style::default().fg(app.theme.fg),
    }
}

fn render_friend_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .directory
        .iter()
        .enumerate()
        .map(|(i, friend)| {
            let is_selected = app.selection.is_selected(friend.id);
            let marker = if is_selected { "● " } else { "  " };
            let button = if is_selected { "[Close]" } else { "[Select]" };

            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(app.theme.accent)),
                    Span::styled(
                        friend.name.clone(),
                        Style::default()
                            .fg(app.theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {button}"), Style::default().fg(app.theme.fg_dim)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", friend.status_line()),
                    balance_style(app, friend),
                )),
            ];

            let item = ListItem::new(lines);
            if i == app.cursor && app.focus == Focus::FriendList {
                item.style(Style::default().bg(app.theme.cursor_bg))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Friends ")
                .border_style(border_style(app, Focus::FriendList)),
        )
        .style(Style::default().fg(app.theme.fg).bg(app.theme.bg));

    frame.render_widget(list, area);
}

/// A `label: value` line, highlighted when `active`.
fn field_line<'a>(app: &App, label: &'a str, value: String, active: bool) -> Line<'a> {
    let value_style = if active {
        Style::default()
            .fg(app.theme.secondary)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(app.theme.fg)
    };
    let cursor = if active { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(app.theme.fg_dim)),
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(app.theme.accent)),
    ])
}

fn render_add_friend(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.add_friend_form;
    let focused = app.focus == Focus::AddFriend;

    let text = vec![
        field_line(
            app,
            "Friend name",
            form.name.clone(),
            focused && form.active == AddFriendField::Name,
        ),
        field_line(
            app,
            "Image URL",
            form.image.clone(),
            focused && form.active == AddFriendField::Image,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Add  [a] Close",
            Style::default().fg(app.theme.fg_dim),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add Friend ")
                .border_style(border_style(app, Focus::AddFriend)),
        )
        .style(Style::default().bg(app.theme.bg));

    frame.render_widget(paragraph, area);
}

fn render_split_bill(frame: &mut Frame, app: &App, friend: &Friend, area: Rect) {
    let form = &app.split_bill_form;
    let focused = app.focus == Focus::SplitBill;
    let active = |field: SplitBillField| focused && form.active == field;
    let number = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_default();

    let payer = match form.payer {
        Payer::You => "You".to_string(),
        Payer::Friend => friend.name.clone(),
    };

    let text = vec![
        Line::from(Span::styled(
            format!("Split a bill with {}", friend.name),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(app, "Bill value", number(form.bill()), active(SplitBillField::Bill)),
        field_line(
            app,
            "Your expense",
            number(form.your_expense()),
            active(SplitBillField::YourExpense),
        ),
        Line::from(vec![
            Span::styled(
                format!("{:<18}", format!("{}'s expense", friend.name)),
                Style::default().fg(app.theme.fg_dim),
            ),
            Span::styled(number(form.friend_expense()), Style::default().fg(app.theme.fg_dim)),
        ]),
        field_line(
            app,
            "Who is paying",
            format!("◀ {payer} ▶"),
            active(SplitBillField::Payer),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[↑↓] Field  [0-9] Amount  [←→] Payer  [Enter] Split bill  [Esc] Back",
            Style::default().fg(app.theme.fg_dim),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Split Bill ")
                .border_style(border_style(app, Focus::SplitBill)),
        )
        .style(Style::default().bg(app.theme.bg))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_assistant(frame: &mut Frame, app: &App, area: Rect) {
    let mut text = vec![Line::from(Span::styled(
        "Actions",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ))];

    for action in app.assistant().actions() {
        let params: Vec<String> = action
            .parameters()
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind))
            .collect();
        text.push(Line::from(vec![
            Span::styled(
                format!("  {}", action.name()),
                Style::default().fg(app.theme.secondary),
            ),
            Span::raw(format!("({})", params.join(", "))),
            Span::styled(
                format!("  {}", action.description()),
                Style::default().fg(app.theme.fg_dim),
            ),
        ]));
    }

    text.push(Line::from(""));
    if let Some(context) = app.assistant().context() {
        text.push(Line::from(Span::styled(
            context.description.clone(),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for friend in context.value.as_array().into_iter().flatten() {
            text.push(Line::from(format!("  {friend}")));
        }
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press : to call an action, e.g. splitBill friendId=933372 amount=15",
        Style::default().fg(app.theme.fg_dim),
    )));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Assistant ")
                .border_style(Style::default().fg(app.theme.fg_dim)),
        )
        .style(Style::default().fg(app.theme.fg).bg(app.theme.bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.focus == Focus::Prompt {
        Line::from(vec![
            Span::styled(":", Style::default().fg(app.theme.accent)),
            Span::styled(app.prompt_input.clone(), Style::default().fg(app.theme.fg)),
            Span::styled("▏", Style::default().fg(app.theme.accent)),
        ])
    } else if let Some(status) = &app.status {
        let color = if status.is_error {
            app.theme.owing
        } else {
            app.theme.owed
        };
        Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
    } else {
        let hints = match app.focus {
            Focus::FriendList => {
                "[↑↓/jk] Move  [Enter] Select  [a] Add friend  [:] Assistant  [t] Theme  [i] Help  [q] Quit"
            }
            Focus::AddFriend => "[↑↓] Field  [Enter] Add  [Tab] Switch  [Esc] Back",
            Focus::SplitBill => "[↑↓] Field  [Enter] Split  [Tab] Switch  [Esc] Back",
            Focus::Prompt => "",
        };
        Line::from(Span::styled(hints, Style::default().fg(app.theme.fg_dim)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, app: &App) {
    let [area] = Layout::horizontal([Constraint::Length(60)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(area);

    let rows = [
        ("j / k, ↑ / ↓", "Move through friends"),
        ("Enter / Space", "Select or close a friend"),
        ("a", "Open or close the add-friend form"),
        (":", "Assistant prompt"),
        ("Tab", "Switch between open panes"),
        ("t", "Next theme"),
        ("Esc", "Back to the friend list"),
        ("q", "Quit"),
    ];

    let mut text: Vec<Line> = rows
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<16}"), Style::default().fg(app.theme.secondary)),
                Span::raw(*what),
            ])
        })
        .collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        format!("Theme: {}", app.theme.name),
        Style::default().fg(app.theme.fg_dim),
    )));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help [i/Esc to close] ")
                .border_style(Style::default().fg(app.theme.accent)),
        )
        .style(Style::default().fg(app.theme.fg).bg(app.theme.bg));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
