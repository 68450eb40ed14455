use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use translator_core::{
    option_at, option_label, AlertId, AlertKind, AppViewModel, DropZoneContent, Focus,
    HistoryView, LanguageField, Panel, OPTION_COUNT,
};

use super::constants::*;
use super::layout;

/// Clickable element of the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Nav(Panel),
    GetStarted,
    DropZone,
    RemoveFile,
    LanguageSelect(LanguageField),
    LanguageOption(usize),
    Swap,
    Submit,
    AlertClose(AlertId),
    AlertLink,
    RefreshHistory,
    ClearHistory,
    HistoryRow(usize),
    ServerPageClose,
}

/// Screen regions of clickable elements; later entries are drawn on top.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    fn add(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, target)| *target)
    }
}

/// Draws the view model and returns where its controls landed.
pub fn render(frame: &mut Frame, view: &AppViewModel) -> HitMap {
    let mut hits = HitMap::default();
    let areas = layout::screen(frame.area(), view.alerts.len());

    render_header(frame, view, areas.header, &mut hits);
    render_alerts(frame, view, areas.alerts, &mut hits);
    match view.panel {
        Panel::HowItWorks => render_how_it_works(frame, areas.body, &mut hits),
        Panel::Translate => render_translate(frame, view, areas.body, &mut hits),
    }
    render_help(frame, view, areas.help);

    if let Some(input) = &view.picker {
        render_picker(frame, input);
    }
    if view.server_page.is_some() {
        render_server_page(frame, view, &mut hits);
    }
    hits
}

fn render_header(frame: &mut Frame, view: &AppViewModel, area: Rect, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            APP_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(block, area);

    let [how, translate] = layout::nav_buttons(area);
    for (rect, label, panel) in [
        (how, NAV_HOW_IT_WORKS, Panel::HowItWorks),
        (translate, NAV_TRANSLATE, Panel::Translate),
    ] {
        let style = if view.panel == panel {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        frame.render_widget(Paragraph::new(label).style(style), rect);
        hits.add(rect, HitTarget::Nav(panel));
    }
}

fn alert_style(kind: AlertKind) -> (Color, &'static str) {
    match kind {
        AlertKind::Error => (Color::Red, "✗"),
        AlertKind::Warning => (Color::Yellow, "!"),
        AlertKind::Info => (Color::Blue, "i"),
        AlertKind::Success => (Color::Green, "✓"),
    }
}

fn render_alerts(frame: &mut Frame, view: &AppViewModel, area: Rect, hits: &mut HitMap) {
    for (row, alert) in view.alerts.iter().take(MAX_VISIBLE_ALERTS).enumerate() {
        let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1).intersection(area);
        let (color, icon) = alert_style(alert.kind);
        let prefix = format!(" {icon} {} ", alert.message);
        let mut spans = vec![Span::styled(prefix.clone(), Style::default().fg(color))];
        if let Some(link) = &alert.link {
            let label = format!("[{}]", link.label);
            let x = line_area.x + Line::from(prefix.as_str()).width() as u16;
            hits.add(
                Rect::new(x, line_area.y, label.chars().count() as u16, 1).intersection(line_area),
                HitTarget::AlertLink,
            );
            spans.push(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::UNDERLINED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), line_area);

        let close_width = ALERT_CLOSE.len() as u16;
        let close = Rect::new(
            line_area.right().saturating_sub(close_width + 1),
            line_area.y,
            close_width,
            1,
        )
        .intersection(line_area);
        frame.render_widget(Paragraph::new(ALERT_CLOSE).style(Style::default().fg(color)), close);
        hits.add(close, HitTarget::AlertClose(alert.id));
    }
}

fn render_how_it_works(frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title(" How It Works ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (idx, (title, text)) in HOW_IT_WORKS_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {title}", idx + 1),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("   {text}")));
        lines.push(Line::default());
    }
    let text_height = inner.height.saturating_sub(2);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), text_height),
    );

    let button_row = Rect::new(inner.x, inner.bottom().saturating_sub(2), inner.width, 1);
    let button = layout::centered_button(GET_STARTED, button_row);
    frame.render_widget(
        Paragraph::new(GET_STARTED)
            .style(Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)),
        button,
    );
    hits.add(button, HitTarget::GetStarted);
}

fn focus_style(view: &AppViewModel, focus: Focus) -> Style {
    if !view.controls_enabled {
        Style::default().fg(DISABLED)
    } else if view.focus == focus {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_translate(frame: &mut Frame, view: &AppViewModel, area: Rect, hits: &mut HitMap) {
    let areas = layout::translate(area);

    render_drop_zone(frame, view, areas.drop_zone, hits);
    render_language(frame, view, LanguageField::Source, areas.source, hits);
    render_language(frame, view, LanguageField::Target, areas.target, hits);

    let swap = Paragraph::new(view.swap_label)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(focus_style(view, Focus::Swap)));
    frame.render_widget(swap, areas.swap);
    hits.add(areas.swap, HitTarget::Swap);

    let submit_style = focus_style(view, Focus::Submit);
    let submit = Paragraph::new(view.submit_label)
        .alignment(ratatui::layout::Alignment::Center)
        .style(submit_style)
        .block(Block::default().borders(Borders::ALL).border_style(submit_style));
    frame.render_widget(submit, areas.submit);
    hits.add(areas.submit, HitTarget::Submit);

    if let Some(percent) = view.progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT))
            .percent(u16::from(percent.min(100)));
        frame.render_widget(gauge, areas.progress);
    }

    render_history(frame, view, areas.history, hits);

    if let Some(menu) = view.language_menu {
        let anchor = match menu.field {
            LanguageField::Source => areas.source,
            LanguageField::Target => areas.target,
        };
        render_language_menu(frame, menu.highlighted, anchor, area, hits);
    }
}

fn render_drop_zone(frame: &mut Frame, view: &AppViewModel, area: Rect, hits: &mut HitMap) {
    let zone = &view.drop_zone;
    let border = if zone.drag_over {
        Style::default().fg(DRAG_OVER).add_modifier(Modifier::BOLD)
    } else if zone.is_populated() {
        Style::default().fg(POPULATED)
    } else {
        focus_style(view, Focus::DropZone)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" PDF ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.add(area, HitTarget::DropZone);

    match &zone.content {
        DropZoneContent::Prompt(prompt) => {
            frame.render_widget(
                Paragraph::new(*prompt).alignment(ratatui::layout::Alignment::Center),
                inner.inner(Margin::new(0, inner.height / 3)),
            );
        }
        DropZoneContent::File { name, size_label } => {
            let lines = vec![
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(POPULATED).add_modifier(Modifier::BOLD),
                )),
                Line::from(size_label.clone()),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
                inner,
            );
            let remove = Rect::new(
                inner.right().saturating_sub(REMOVE_FILE.len() as u16),
                inner.y,
                REMOVE_FILE.len() as u16,
                1,
            )
            .intersection(inner);
            frame.render_widget(
                Paragraph::new(REMOVE_FILE).style(focus_style(view, Focus::RemoveFile)),
                remove,
            );
            hits.add(remove, HitTarget::RemoveFile);
        }
    }
}

fn language_text(code: Option<&str>) -> String {
    code.map(|code| option_label(code).unwrap_or(code).to_string())
        .unwrap_or_else(|| LANGUAGE_PLACEHOLDER.to_string())
}

fn render_language(
    frame: &mut Frame,
    view: &AppViewModel,
    field: LanguageField,
    area: Rect,
    hits: &mut HitMap,
) {
    let (title, code, focus) = match field {
        LanguageField::Source => (" From ", view.source_language.as_deref(), Focus::SourceLanguage),
        LanguageField::Target => (" To ", view.target_language.as_deref(), Focus::TargetLanguage),
    };
    let style = focus_style(view, focus);
    let widget = Paragraph::new(format!("{} ▾", language_text(code))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title),
    );
    frame.render_widget(widget, area);
    hits.add(area, HitTarget::LanguageSelect(field));
}

fn render_language_menu(
    frame: &mut Frame,
    highlighted: usize,
    anchor: Rect,
    bounds: Rect,
    hits: &mut HitMap,
) {
    let menu_area = layout::dropdown(anchor, OPTION_COUNT, bounds);
    let items: Vec<ListItem> = (0..OPTION_COUNT)
        .map(|idx| ListItem::new(language_text(option_at(idx))))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(highlighted));

    frame.render_widget(Clear, menu_area);
    frame.render_stateful_widget(list, menu_area, &mut state);

    // Rows are clickable only when the list is not scrolled.
    let inner = menu_area.inner(Margin::new(1, 1));
    if inner.height as usize >= OPTION_COUNT {
        for idx in 0..OPTION_COUNT {
            hits.add(
                Rect::new(inner.x, inner.y + idx as u16, inner.width, 1),
                HitTarget::LanguageOption(idx),
            );
        }
    }
}

fn render_history(frame: &mut Frame, view: &AppViewModel, area: Rect, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(view, Focus::History))
        .title(HISTORY_TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let refresh_width = REFRESH_HISTORY.len() as u16;
    let clear_width = CLEAR_HISTORY.len() as u16;
    let clear = Rect::new(area.right().saturating_sub(clear_width + 2), area.y, clear_width, 1)
        .intersection(area);
    let refresh = Rect::new(clear.x.saturating_sub(refresh_width + 1), area.y, refresh_width, 1)
        .intersection(area);
    frame.render_widget(Paragraph::new(REFRESH_HISTORY).style(Style::default().fg(ACCENT)), refresh);
    frame.render_widget(Paragraph::new(CLEAR_HISTORY).style(Style::default().fg(ACCENT)), clear);
    hits.add(refresh, HitTarget::RefreshHistory);
    hits.add(clear, HitTarget::ClearHistory);

    match &view.history {
        HistoryView::Placeholder(text) => {
            frame.render_widget(
                Paragraph::new(*text)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(Style::default().fg(DISABLED)),
                inner,
            );
        }
        HistoryView::Rows(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|row| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            row.original_filename.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  {}  ", row.languages)),
                        Span::styled(row.created_at.clone(), Style::default().fg(DISABLED)),
                        Span::styled(
                            format!("  {}", row.download_link),
                            Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
                        ),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("» ");
            let mut state = ListState::default();
            state.select(view.history_selected);
            frame.render_stateful_widget(list, inner, &mut state);

            let offset = state.offset();
            for (row, idx) in (offset..rows.len()).enumerate().take(inner.height as usize) {
                hits.add(
                    Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                    HitTarget::HistoryRow(idx),
                );
            }
        }
    }
}

fn render_help(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let text = if view.picker.is_some() {
        HELP_PICKER
    } else if view.language_menu.is_some() {
        HELP_MENU
    } else if view.server_page.is_some() {
        HELP_SERVER_PAGE
    } else {
        match view.panel {
            Panel::HowItWorks => HELP_HOW_IT_WORKS,
            Panel::Translate => HELP_TRANSLATE,
        }
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(DISABLED)),
        area,
    );
}

fn render_picker(frame: &mut Frame, input: &str) {
    let area = layout::centered_rect(70, 20, frame.area());
    let popup = Rect::new(area.x, area.y, area.width, area.height.max(3));
    let widget = Paragraph::new(format!("{input}▏")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Open PDF "),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn render_server_page(frame: &mut Frame, view: &AppViewModel, hits: &mut HitMap) {
    let Some(page) = &view.server_page else {
        return;
    };
    let area = layout::centered_rect(80, 70, frame.area());
    let title = format!(
        " {} (HTTP {}) ",
        page.title.as_deref().unwrap_or("Server response"),
        page.status
    );
    let mut lines: Vec<Line> = page
        .flashes
        .iter()
        .map(|flash| {
            Line::from(Span::styled(
                flash.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines.extend(page.text.lines().map(|line| Line::from(line.to_string())));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);

    let close_width = ALERT_CLOSE.len() as u16;
    let close = Rect::new(area.right().saturating_sub(close_width + 1), area.y, close_width, 1)
        .intersection(area);
    frame.render_widget(Paragraph::new(ALERT_CLOSE).style(Style::default().fg(Color::Yellow)), close);
    hits.add(close, HitTarget::ServerPageClose);
}
