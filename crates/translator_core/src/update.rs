use std::time::Duration;

use client_logging::{client_debug, client_error, client_info, client_warn};

use crate::alert::{AlertKind, AlertLink, ALERT_TIMEOUT};
use crate::effect::DownloadTarget;
use crate::file::{normalize_dropped_path, validate_file};
use crate::form::validate_form;
use crate::language::{preferred_language, LanguageField, LanguageMenu};
use crate::progress::{SimulatedProgress, PROGRESS_INTERVAL};
use crate::{AppState, Effect, Focus, Msg, Panel, SubmissionState, UploadResult};

/// How long the swap control shows its confirmation label.
pub const SWAP_FEEDBACK: Duration = Duration::from_millis(1000);

const UPLOAD_FAILED: &str = "An error occurred during upload. Please try again.";
const TRANSLATION_DONE: &str = "Translation completed successfully!";
const BOTH_LANGUAGES_FIRST: &str = "Please select both languages first.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let before = state.clone();
    let mut effects = Vec::new();
    apply(&mut state, msg, &mut effects);
    if state != before {
        state.mark_dirty();
    }
    (state, effects)
}

fn apply(state: &mut AppState, msg: Msg, effects: &mut Vec<Effect>) {
    match msg {
        Msg::Started { fragment, locale } => {
            let panel = Panel::from_fragment(fragment.as_deref());
            state.reset_location(fragment.as_deref());
            state.show_panel(panel);
            if let Some(code) = locale.as_deref().and_then(preferred_language) {
                // Target is still empty, so this cannot conflict.
                let _ = state.languages.set(LanguageField::Source, Some(code.to_string()));
            }
            client_info!("Controller started on panel {:?}", panel);
            effects.push(Effect::RefreshHistory);
        }
        Msg::NavigateTo(panel) => state.show_panel(panel),
        Msg::LocationBack => {
            if let Some(fragment) = state.location.back() {
                state.panel = Panel::from_fragment(Some(fragment));
            }
        }
        Msg::LocationForward => {
            if let Some(fragment) = state.location.forward() {
                state.panel = Panel::from_fragment(Some(fragment));
            }
        }
        Msg::EscapePressed => {
            if state.picker.take().is_some()
                || state.language_menu.take().is_some()
                || state.server_page.take().is_some()
            {
                return;
            }
            state.show_panel(Panel::HowItWorks);
        }
        Msg::UploadShortcut => {
            if state.panel == Panel::Translate && !state.is_locked() {
                open_picker(state);
            }
        }
        Msg::DropZoneClicked { on_button } => {
            if on_button
                || state.panel != Panel::Translate
                || state.is_locked()
                || state.file.is_some()
            {
                return;
            }
            open_picker(state);
        }
        Msg::DragHover(hovering) => {
            if state.panel == Panel::Translate && !state.is_locked() {
                state.drag_over = hovering;
            }
        }
        Msg::PathDropped(raw) => {
            state.drag_over = false;
            if let Some(input) = state.picker.as_mut() {
                input.push_str(raw.lines().next().unwrap_or_default().trim());
                return;
            }
            if state.panel != Panel::Translate || state.is_locked() {
                return;
            }
            if let Some(path) = normalize_dropped_path(&raw) {
                effects.push(Effect::InspectFile { path });
            }
        }
        Msg::PickerInput(c) => {
            if let Some(input) = state.picker.as_mut() {
                input.push(c);
            }
        }
        Msg::PickerBackspace => {
            if let Some(input) = state.picker.as_mut() {
                input.pop();
            }
        }
        Msg::PickerConfirmed => {
            let Some(input) = state.picker.take() else {
                return;
            };
            if let Some(path) = normalize_dropped_path(&input) {
                effects.push(Effect::InspectFile { path });
            }
        }
        Msg::FileInspected(result) => {
            if state.is_locked() {
                client_warn!("Ignoring file selection while a submission is in flight");
                return;
            }
            match result {
                Ok(file) => match validate_file(&file) {
                    Ok(()) => {
                        client_info!("Selected {} ({} bytes)", file.name, file.size);
                        state.file = Some(file);
                    }
                    Err(rejection) => {
                        client_debug!("Rejected {}: {:?}", file.name, rejection);
                        show_alert(state, effects, AlertKind::Error, rejection.to_string(), None);
                    }
                },
                Err(message) => {
                    client_warn!("File inspection failed: {}", message);
                    show_alert(
                        state,
                        effects,
                        AlertKind::Error,
                        format!("Could not read the selected file: {message}"),
                        None,
                    );
                }
            }
        }
        Msg::RemoveFileClicked => {
            if !state.is_locked() {
                state.remove_file();
            }
        }
        Msg::LanguageChanged { field, code } => {
            state.language_menu = None;
            change_language(state, effects, field, code);
        }
        Msg::LanguageMenuOpened(field) => {
            if state.panel == Panel::Translate && !state.is_locked() {
                state.language_menu = Some(LanguageMenu::open(field, state.languages.get(field)));
            }
        }
        Msg::LanguageMenuMoved { forward } => {
            if let Some(menu) = state.language_menu.as_mut() {
                menu.move_highlight(forward);
            }
        }
        Msg::LanguageMenuConfirmed => {
            if let Some(menu) = state.language_menu.take() {
                let code = menu.chosen().map(str::to_string);
                change_language(state, effects, menu.field, code);
            }
        }
        Msg::SwapClicked => {
            if state.is_locked() {
                return;
            }
            if state.languages.swap() {
                state.swap_generation += 1;
                state.swap_feedback = Some(state.swap_generation);
                effects.push(Effect::ScheduleSwapReset {
                    generation: state.swap_generation,
                    after: SWAP_FEEDBACK,
                });
            } else {
                show_alert(
                    state,
                    effects,
                    AlertKind::Warning,
                    BOTH_LANGUAGES_FIRST.to_string(),
                    None,
                );
            }
        }
        Msg::SwapFeedbackExpired { generation } => {
            if state.swap_feedback == Some(generation) {
                state.swap_feedback = None;
            }
        }
        Msg::SubmitClicked => submit(state, effects),
        Msg::ProgressTick { increment } => {
            if state.submission != SubmissionState::InFlight {
                return;
            }
            if let Some(progress) = state.progress.as_mut() {
                if !progress.is_capped() && progress.advance(increment) {
                    effects.push(Effect::StopProgress);
                }
            }
        }
        Msg::UploadFinished(result) => finish_upload(state, effects, result),
        Msg::RefreshHistoryClicked => effects.push(Effect::RefreshHistory),
        Msg::HistoryLoaded(result) => {
            match result {
                Ok(entries) => {
                    client_info!("Translation history refreshed with {} items", entries.len());
                    state.history = entries;
                    state.history_selected = match state.history.len() {
                        0 => None,
                        len => Some(state.history_selected.unwrap_or(0).min(len - 1)),
                    };
                }
                Err(message) => client_warn!("Failed to refresh history: {}", message),
            }
            if let SubmissionState::Succeeded { resource_url } = state.submission.clone() {
                state.reset_form_state();
                state.remove_file();
                show_alert(
                    state,
                    effects,
                    AlertKind::Success,
                    TRANSLATION_DONE.to_string(),
                    Some(AlertLink {
                        label: "Download Now".to_string(),
                        url: resource_url,
                    }),
                );
            }
        }
        Msg::ClearHistoryClicked => effects.push(Effect::ClearHistory),
        Msg::HistoryCleared(result) => match result {
            Ok(()) => {
                show_alert(
                    state,
                    effects,
                    AlertKind::Info,
                    "History cleared successfully".to_string(),
                    None,
                );
                effects.push(Effect::RefreshHistory);
            }
            Err(message) => {
                client_error!("Clear history error: {}", message);
                show_alert(
                    state,
                    effects,
                    AlertKind::Error,
                    "Error clearing history".to_string(),
                    None,
                );
            }
        },
        Msg::HistorySelectionMoved { forward } => {
            let len = state.history.len();
            if len == 0 {
                state.history_selected = None;
                return;
            }
            let current = state.history_selected.unwrap_or(0);
            state.history_selected = Some(if forward {
                (current + 1).min(len - 1)
            } else {
                current.saturating_sub(1)
            });
        }
        Msg::HistorySelected(index) => {
            if index < state.history.len() {
                state.history_selected = Some(index);
                state.focus = Focus::History;
            }
        }
        Msg::DownloadSelected => {
            if let Some(entry) = state
                .history_selected
                .and_then(|idx| state.history.get(idx))
            {
                effects.push(Effect::Download {
                    target: DownloadTarget::Filename(entry.translated_filename.clone()),
                });
            }
        }
        Msg::DownloadFromAlert => {
            if let Some(link) = state.alerts.all().iter().find_map(|a| a.link.as_ref()) {
                effects.push(Effect::Download {
                    target: DownloadTarget::Url(link.url.clone()),
                });
            }
        }
        Msg::DownloadFinished(result) => match result {
            Ok(path) => show_alert(
                state,
                effects,
                AlertKind::Success,
                format!("Saved {}", path.display()),
                None,
            ),
            Err(message) => {
                client_error!("Download error: {}", message);
                show_alert(
                    state,
                    effects,
                    AlertKind::Error,
                    "Error downloading file".to_string(),
                    None,
                );
            }
        },
        Msg::AlertDismissed(id) => {
            state.alerts.dismiss(id);
        }
        Msg::DismissNewestAlert => {
            if let Some(id) = state.alerts.newest().map(|a| a.id) {
                state.alerts.dismiss(id);
            }
        }
        Msg::ServerPageDismissed => state.server_page = None,
        Msg::FocusMoved { forward } => {
            if state.panel == Panel::Translate {
                state.focus = state.focus.cycle(forward, state.file.is_some());
            }
        }
        Msg::FocusSet(focus) => {
            if focus != Focus::RemoveFile || state.file.is_some() {
                state.focus = focus;
            }
        }
        Msg::ActivateFocused => activate_focused(state, effects),
        Msg::Shutdown => {
            client_info!("Controller shutting down");
            effects.push(Effect::StopProgress);
            effects.push(Effect::Quit);
        }
        Msg::NoOp => {}
    }
}

fn activate_focused(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.picker.is_some() || state.language_menu.is_some() || state.server_page.is_some() {
        return;
    }
    if state.panel == Panel::HowItWorks {
        // "Get Started".
        state.show_panel(Panel::Translate);
        return;
    }
    let msg = match state.focus {
        Focus::DropZone => Msg::DropZoneClicked { on_button: false },
        Focus::RemoveFile => Msg::RemoveFileClicked,
        Focus::SourceLanguage => Msg::LanguageMenuOpened(LanguageField::Source),
        Focus::TargetLanguage => Msg::LanguageMenuOpened(LanguageField::Target),
        Focus::Swap => Msg::SwapClicked,
        Focus::Submit => Msg::SubmitClicked,
        Focus::History => Msg::DownloadSelected,
    };
    apply(state, msg, effects);
}

fn open_picker(state: &mut AppState) {
    if state.picker.is_none() {
        state.picker = Some(String::new());
    }
}

fn change_language(
    state: &mut AppState,
    effects: &mut Vec<Effect>,
    field: LanguageField,
    code: Option<String>,
) {
    if state.is_locked() {
        return;
    }
    if let Err(conflict) = state.languages.set(field, code) {
        show_alert(state, effects, AlertKind::Warning, conflict.to_string(), None);
    }
}

fn submit(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.is_locked() {
        return;
    }
    match validate_form(state.file.as_ref(), &state.languages) {
        Ok(request) => {
            client_info!(
                "Submitting {} ({} -> {})",
                request.file_name,
                request.source_language,
                request.target_language
            );
            state.submission = SubmissionState::InFlight;
            state.progress = Some(SimulatedProgress::default());
            state.drag_over = false;
            state.picker = None;
            effects.push(Effect::SubmitUpload(request));
            effects.push(Effect::StartProgress {
                interval: PROGRESS_INTERVAL,
            });
        }
        Err(err) => show_alert(state, effects, AlertKind::Error, err.to_string(), None),
    }
}

fn finish_upload(state: &mut AppState, effects: &mut Vec<Effect>, result: UploadResult) {
    if state.submission != SubmissionState::InFlight {
        client_warn!("Upload result arrived with no submission in flight");
        return;
    }
    effects.push(Effect::StopProgress);
    match result {
        UploadResult::Redirected { final_url } => {
            client_info!("Upload redirected to {}", final_url);
            state.submission = SubmissionState::Succeeded {
                resource_url: final_url,
            };
            effects.push(Effect::RefreshHistory);
        }
        UploadResult::ServerRendered(page) => {
            client_warn!("Server answered upload with a page (status {})", page.status);
            state.reset_form_state();
            state.server_page = Some(page);
        }
        UploadResult::TransportFailed { message } => {
            client_error!("Upload error: {}", message);
            state.reset_form_state();
            show_alert(state, effects, AlertKind::Error, UPLOAD_FAILED.to_string(), None);
        }
    }
}

fn show_alert(
    state: &mut AppState,
    effects: &mut Vec<Effect>,
    kind: AlertKind,
    message: String,
    link: Option<AlertLink>,
) {
    let alert_id = state.alerts.push(kind, message, link);
    effects.push(Effect::ScheduleAlertDismiss {
        alert_id,
        after: ALERT_TIMEOUT,
    });
}
