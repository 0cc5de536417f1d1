use crate::ui::app::App;
use crate::ui::navigator::Page;
use crate::ui::theme::DifficultyTone;
use crate::ui::toast::{Severity, Toast};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
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

    match app.navigator.page() {
        Page::Main => render_main(frame, app, main_chunks[1]),
        Page::List => render_list(frame, app, main_chunks[1]),
        Page::Detail => render_detail(frame, app, main_chunks[1]),
    }

    render_footer(frame, app, main_chunks[2]);

    if let Some(toast) = &app.toast {
        render_toast(frame, app, toast);
    }

    if app.show_help {
        render_help(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let subtitle = match app.navigator.page() {
        Page::Main => "Curated scripts for game automation and enhancement".to_string(),
        Page::List => format!("{} Scripts", app.navigator.active_category().to_uppercase()),
        Page::Detail => app
            .selected_script()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Script".to_string()),
    };

    let header_text = vec![Line::from(vec![
        Span::styled(
            "  ⬡ HEXA SCRIPT  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle, Style::default().fg(theme.fg_dim)),
    ])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = app
        .catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if i == app.main_index {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            let content = format!(
                "  {}  ({} scripts)",
                category.info.title,
                category.scripts.len()
            );
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("📁 Categories")
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(list, body_chunks[0]);

    let text = match app.selected_category() {
        Some(category) => {
            let mut highlight_spans = vec![Span::styled(
                "Highlights: ",
                Style::default().fg(theme.fg_dim),
            )];
            for (i, label) in category.info.highlights.iter().enumerate() {
                if i > 0 {
                    highlight_spans.push(Span::raw("  "));
                }
                highlight_spans.push(Span::styled(
                    format!("[{label}]"),
                    Style::default().fg(theme.secondary),
                ));
            }

            vec![
                Line::from(vec![Span::styled(
                    category.info.title.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(category.info.blurb.clone()),
                Line::from(""),
                Line::from(highlight_spans),
                Line::from(""),
                Line::from("────────────────────────────────────────"),
                Line::from(""),
                Line::from("Press Enter to browse this category"),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "All scripts are tested and optimized for performance and safety",
                    Style::default().fg(theme.fg_dim),
                )]),
            ]
        }
        None => vec![
            Line::from("No category selected"),
            Line::from(""),
            Line::from("Use ↑↓ or j/k to navigate"),
        ],
    };

    let details = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🖥️  Category Details")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, body_chunks[1]);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let scripts = app.active_scripts();
    let items: Vec<ListItem> = scripts
        .iter()
        .enumerate()
        .map(|(i, script)| {
            let selected = i == app.list_index;
            if selected {
                let style = Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD);
                ListItem::new(format!(
                    "  {}  [{}]",
                    script.name,
                    script.difficulty.as_str()
                ))
                .style(style)
            } else {
                let tone = DifficultyTone::from_label(script.difficulty.as_str());
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("  {}  ", script.name),
                        Style::default().fg(theme.fg),
                    ),
                    Span::styled(
                        format!("[{}]", script.difficulty.as_str()),
                        Style::default().fg(theme.difficulty_color(tone)),
                    ),
                ]))
            }
        })
        .collect();

    let title = format!(
        "📜 {} Scripts",
        app.navigator.active_category().to_uppercase()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(list, body_chunks[0]);

    let text = match app.selected_script() {
        Some(script) => {
            let tone = DifficultyTone::from_label(script.difficulty.as_str());
            vec![
                Line::from(vec![Span::styled(
                    script.name.clone(),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(script.description.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Difficulty: ", Style::default().fg(theme.fg_dim)),
                    Span::styled(
                        script.difficulty.as_str(),
                        Style::default().fg(theme.difficulty_color(tone)),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Tags: ", Style::default().fg(theme.fg_dim)),
                    Span::styled(
                        script.tags.join(", "),
                        Style::default().fg(theme.secondary),
                    ),
                ]),
                Line::from(""),
                Line::from("────────────────────────────────────────"),
                Line::from(""),
                Line::from("Press Enter to view the script source"),
            ]
        }
        None => vec![
            Line::from("No scripts in this category"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Esc to go back",
                Style::default().fg(theme.fg_dim),
            )]),
        ],
    };

    let details = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🖥️  Script Details")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, body_chunks[1]);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let Some(script) = app.selected_script() else {
        // Stale selection: degrade to an empty view.
        let empty = Paragraph::new(vec![
            Line::from("Script no longer available"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Esc to go back",
                Style::default().fg(theme.fg_dim),
            )]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        );
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let tone = DifficultyTone::from_label(script.difficulty.as_str());
    let mut badge_spans = vec![
        Span::styled(
            format!(" {} ", script.difficulty.as_str()),
            Style::default()
                .fg(theme.bg)
                .bg(theme.difficulty_color(tone)),
        ),
        Span::raw("  "),
    ];
    for (i, tag) in script.tags.iter().enumerate() {
        if i > 0 {
            badge_spans.push(Span::raw(" "));
        }
        badge_spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(theme.secondary),
        ));
    }

    let meta = Paragraph::new(vec![
        Line::from(vec![Span::styled(
            script.name.clone(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(script.description.clone()),
        Line::from(""),
        Line::from(badge_spans),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("🖥️  Script")
            .border_style(Style::default().fg(theme.fg_dim)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(meta, chunks[0]);

    let source_lines: Vec<Line> = script.content.lines().map(Line::from).collect();
    let source = Paragraph::new(source_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📋 Source (y to copy)")
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().fg(theme.fg))
        .scroll((app.detail_scroll, 0));
    frame.render_widget(source, chunks[1]);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.navigator.page() {
        Page::Main => "[↑↓/jk] Navigate  [Enter/l] Browse  [?] Help  [Q] Quit",
        Page::List => "[↑↓/jk] Navigate  [Enter/l] View  [Esc/h] Back  [?] Help  [Q] Quit",
        Page::Detail => "[jk] Scroll  [y] Copy Script  [Esc/h] Back  [?] Help  [Q] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_toast(frame: &mut Frame, app: &App, toast: &Toast) {
    let theme = &app.theme;
    let area = frame.area();

    let border_color = match toast.notification.severity {
        Severity::Success => theme.success,
        Severity::Error => theme.error,
    };

    let width = (toast.notification.message.len() as u16 + 4)
        .min(area.width.saturating_sub(2))
        .max(20);
    let rect = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(4),
        width,
        height: 3,
    };

    let body = Paragraph::new(toast.notification.message.clone())
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(toast.notification.title.clone())
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(Clear, rect);
    frame.render_widget(body, rect);
}

fn render_help(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    let width = 52.min(area.width.saturating_sub(4));
    let height = 12.min(area.height.saturating_sub(4));
    let rect = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let key = |k: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Style::default().fg(theme.secondary)),
            Span::styled(action.to_string(), Style::default().fg(theme.fg)),
        ])
    };

    let text = vec![
        key("↑↓ / jk", "Navigate / scroll"),
        key("Enter / l", "Open category or script"),
        key("Esc / h", "Go back"),
        key("y / c", "Copy script to clipboard"),
        key("?", "Toggle this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  By Hexa Script",
            Style::default().fg(theme.fg_dim),
        )]),
    ];

    let help = Paragraph::new(text)
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(Clear, rect);
    frame.render_widget(help, rect);
}
