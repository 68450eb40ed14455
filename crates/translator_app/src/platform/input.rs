//! Terminal events to messages.
//!
//! Dropped files arrive as bracketed paste; a mouse drag over the drop zone
//! stands in for the browser's drag-over highlight.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use translator_core::{option_at, AppViewModel, Focus, LanguageField, Msg, Panel};

use super::ui::render::{HitMap, HitTarget};

/// Which layer currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Picker,
    LanguageMenu,
    ServerPage,
    Normal(Panel),
}

pub fn mode_of(view: &AppViewModel) -> InputMode {
    if view.picker.is_some() {
        InputMode::Picker
    } else if view.language_menu.is_some() {
        InputMode::LanguageMenu
    } else if view.server_page.is_some() {
        InputMode::ServerPage
    } else {
        InputMode::Normal(view.panel)
    }
}

pub fn map_event(view: &AppViewModel, hits: &HitMap, event: Event) -> Vec<Msg> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            map_key(mode_of(view), view.focus, key).into_iter().collect()
        }
        Event::Paste(text) => vec![Msg::PathDropped(text)],
        Event::Mouse(mouse) => map_mouse(view, hits, mouse),
        _ => Vec::new(),
    }
}

pub fn map_key(mode: InputMode, focus: Focus, key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return Some(Msg::Shutdown);
    }

    match mode {
        InputMode::Picker => match key.code {
            KeyCode::Esc => Some(Msg::EscapePressed),
            KeyCode::Enter => Some(Msg::PickerConfirmed),
            KeyCode::Backspace => Some(Msg::PickerBackspace),
            KeyCode::Char(c) if !ctrl => Some(Msg::PickerInput(c)),
            _ => None,
        },
        InputMode::LanguageMenu => match key.code {
            KeyCode::Esc => Some(Msg::EscapePressed),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::LanguageMenuMoved { forward: false }),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::LanguageMenuMoved { forward: true }),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::LanguageMenuConfirmed),
            _ => None,
        },
        InputMode::ServerPage => match key.code {
            KeyCode::Esc => Some(Msg::EscapePressed),
            KeyCode::Enter => Some(Msg::ServerPageDismissed),
            _ => None,
        },
        InputMode::Normal(panel) => map_normal_key(panel, focus, key),
    }
}

fn map_normal_key(panel: Panel, focus: Focus, key: KeyEvent) -> Option<Msg> {
    let ctrl_or_super = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') if ctrl_or_super => Some(Msg::UploadShortcut),
        KeyCode::Esc => Some(Msg::EscapePressed),
        KeyCode::F(1) => Some(Msg::NavigateTo(Panel::HowItWorks)),
        KeyCode::F(2) => Some(Msg::NavigateTo(Panel::Translate)),
        KeyCode::Left if alt => Some(Msg::LocationBack),
        KeyCode::Right if alt => Some(Msg::LocationForward),
        KeyCode::Char('q') if !ctrl_or_super => Some(Msg::Shutdown),
        _ if ctrl_or_super || alt => None,
        code => match panel {
            Panel::HowItWorks => match code {
                KeyCode::Enter => Some(Msg::ActivateFocused),
                _ => None,
            },
            Panel::Translate => map_translate_key(focus, code),
        },
    }
}

fn map_translate_key(focus: Focus, code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Tab => Some(Msg::FocusMoved { forward: true }),
        KeyCode::BackTab => Some(Msg::FocusMoved { forward: false }),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::ActivateFocused),
        KeyCode::Up | KeyCode::Char('k') if focus == Focus::History => {
            Some(Msg::HistorySelectionMoved { forward: false })
        }
        KeyCode::Down | KeyCode::Char('j') if focus == Focus::History => {
            Some(Msg::HistorySelectionMoved { forward: true })
        }
        KeyCode::Delete | KeyCode::Backspace if focus == Focus::RemoveFile => {
            Some(Msg::RemoveFileClicked)
        }
        KeyCode::Char('r') => Some(Msg::RefreshHistoryClicked),
        KeyCode::Char('C') => Some(Msg::ClearHistoryClicked),
        KeyCode::Char('d') => Some(Msg::DownloadFromAlert),
        KeyCode::Char('s') => Some(Msg::SwapClicked),
        KeyCode::Char('x') => Some(Msg::DismissNewestAlert),
        _ => None,
    }
}

pub fn map_mouse(view: &AppViewModel, hits: &HitMap, mouse: MouseEvent) -> Vec<Msg> {
    let target = hits.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(view, target),
        MouseEventKind::Drag(MouseButton::Left) => {
            let over = target == Some(HitTarget::DropZone) || target == Some(HitTarget::RemoveFile);
            if over != view.drop_zone.drag_over {
                vec![Msg::DragHover(over)]
            } else {
                Vec::new()
            }
        }
        MouseEventKind::Up(MouseButton::Left) if view.drop_zone.drag_over => {
            vec![Msg::DragHover(false)]
        }
        MouseEventKind::ScrollDown if matches!(target, Some(HitTarget::HistoryRow(_))) => {
            vec![Msg::HistorySelectionMoved { forward: true }]
        }
        MouseEventKind::ScrollUp if matches!(target, Some(HitTarget::HistoryRow(_))) => {
            vec![Msg::HistorySelectionMoved { forward: false }]
        }
        _ => Vec::new(),
    }
}

fn click(view: &AppViewModel, target: Option<HitTarget>) -> Vec<Msg> {
    let menu_open = view.language_menu.is_some();
    match target {
        Some(HitTarget::LanguageOption(idx)) => match view.language_menu {
            Some(menu) => vec![Msg::LanguageChanged {
                field: menu.field,
                code: option_at(idx).map(str::to_string),
            }],
            None => Vec::new(),
        },
        // A click outside an open dropdown only closes it.
        _ if menu_open => vec![Msg::EscapePressed],
        None => Vec::new(),
        Some(HitTarget::ServerPageClose) => vec![Msg::ServerPageDismissed],
        Some(_) if view.server_page.is_some() || view.picker.is_some() => Vec::new(),
        Some(HitTarget::Nav(panel)) => vec![Msg::NavigateTo(panel)],
        Some(HitTarget::GetStarted) => vec![Msg::NavigateTo(Panel::Translate)],
        Some(HitTarget::DropZone) => vec![
            Msg::FocusSet(Focus::DropZone),
            Msg::DropZoneClicked { on_button: false },
        ],
        // The click also reaches the zone underneath, which ignores button clicks.
        Some(HitTarget::RemoveFile) => vec![
            Msg::RemoveFileClicked,
            Msg::DropZoneClicked { on_button: true },
        ],
        Some(HitTarget::LanguageSelect(field)) => vec![
            Msg::FocusSet(match field {
                LanguageField::Source => Focus::SourceLanguage,
                LanguageField::Target => Focus::TargetLanguage,
            }),
            Msg::LanguageMenuOpened(field),
        ],
        Some(HitTarget::Swap) => vec![Msg::FocusSet(Focus::Swap), Msg::SwapClicked],
        Some(HitTarget::Submit) => vec![Msg::FocusSet(Focus::Submit), Msg::SubmitClicked],
        Some(HitTarget::AlertClose(id)) => vec![Msg::AlertDismissed(id)],
        Some(HitTarget::AlertLink) => vec![Msg::DownloadFromAlert],
        Some(HitTarget::RefreshHistory) => vec![Msg::RefreshHistoryClicked],
        Some(HitTarget::ClearHistory) => vec![Msg::ClearHistoryClicked],
        Some(HitTarget::HistoryRow(idx)) => vec![Msg::HistorySelected(idx), Msg::DownloadSelected],
    }
}
