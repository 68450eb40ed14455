use pretty_assertions::assert_eq;
use translator_core::{
    update, AlertKind, AppState, Effect, LanguageField, Msg, SWAP_DONE_LABEL, SWAP_FEEDBACK,
    SWAP_LABEL,
};

fn started(locale: Option<&str>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::Started {
            fragment: Some("translate".into()),
            locale: locale.map(str::to_string),
        },
    );
    state
}

fn set(state: AppState, field: LanguageField, code: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::LanguageChanged {
            field,
            code: Some(code.to_string()),
        },
    )
}

fn pair(state: &AppState) -> (Option<String>, Option<String>) {
    let view = state.view();
    (view.source_language, view.target_language)
}

#[test]
fn locale_preselects_source_when_offered() {
    assert_eq!(pair(&started(Some("es_ES.UTF-8"))), (Some("es".into()), None));
    assert_eq!(pair(&started(Some("nl-NL"))), (None, None));
    assert_eq!(pair(&started(None)), (None, None));
}

#[test]
fn choosing_same_target_resets_target() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Source, "en");
    let (state, effects) = set(state, LanguageField::Target, "en");

    assert_eq!(pair(&state), (Some("en".into()), None));
    let view = state.view();
    assert_eq!(view.alerts[0].kind, AlertKind::Warning);
    assert_eq!(
        view.alerts[0].message,
        "Source and target languages cannot be the same."
    );
    assert_eq!(effects.len(), 1);
}

#[test]
fn choosing_same_source_resets_source() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Target, "fr");
    let (state, _) = set(state, LanguageField::Source, "fr");
    assert_eq!(pair(&state), (None, Some("fr".into())));
}

#[test]
fn every_equal_pair_is_rejected() {
    for (code, _) in translator_core::LANGUAGES {
        let state = started(None);
        let (state, _) = set(state, LanguageField::Source, code);
        let (state, _) = set(state, LanguageField::Target, code);
        assert_eq!(pair(&state), (Some(code.to_string()), None));
        assert_eq!(state.view().alerts.len(), 1);
    }
}

#[test]
fn swapping_twice_restores_original_pair() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Source, "en");
    let (state, _) = set(state, LanguageField::Target, "es");

    let (state, effects) = update(state, Msg::SwapClicked);
    assert_eq!(pair(&state), (Some("es".into()), Some("en".into())));
    assert_eq!(state.view().swap_label, SWAP_DONE_LABEL);
    assert_eq!(
        effects,
        vec![Effect::ScheduleSwapReset {
            generation: 1,
            after: SWAP_FEEDBACK
        }]
    );

    let (state, _) = update(state, Msg::SwapClicked);
    assert_eq!(pair(&state), (Some("en".into()), Some("es".into())));
}

#[test]
fn stale_swap_reset_does_not_clear_newer_feedback() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Source, "en");
    let (state, _) = set(state, LanguageField::Target, "es");
    let (state, _) = update(state, Msg::SwapClicked);
    let (state, _) = update(state, Msg::SwapClicked);

    let (state, _) = update(state, Msg::SwapFeedbackExpired { generation: 1 });
    assert_eq!(state.view().swap_label, SWAP_DONE_LABEL);
    let (state, _) = update(state, Msg::SwapFeedbackExpired { generation: 2 });
    assert_eq!(state.view().swap_label, SWAP_LABEL);
}

#[test]
fn swap_with_missing_language_warns() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Source, "en");
    let (state, _) = update(state, Msg::SwapClicked);
    let view = state.view();
    assert_eq!(view.source_language.as_deref(), Some("en"));
    assert_eq!(view.alerts[0].message, "Please select both languages first.");
}

#[test]
fn dropdown_choice_goes_through_conflict_check() {
    let state = started(None);
    let (state, _) = set(state, LanguageField::Target, "en");

    let (state, _) = update(state, Msg::LanguageMenuOpened(LanguageField::Source));
    let menu = state.view().language_menu.expect("menu open");
    assert_eq!(menu.highlighted, 0);

    // Position 1 is "en", the value already used by the target.
    let (state, _) = update(state, Msg::LanguageMenuMoved { forward: true });
    let (state, _) = update(state, Msg::LanguageMenuConfirmed);
    assert_eq!(state.view().language_menu, None);
    assert_eq!(pair(&state), (None, Some("en".into())));
    assert_eq!(state.view().alerts.len(), 1);

    let (state, _) = update(state, Msg::LanguageMenuOpened(LanguageField::Source));
    let (state, _) = update(state, Msg::LanguageMenuMoved { forward: true });
    let (state, _) = update(state, Msg::LanguageMenuMoved { forward: true });
    let (state, _) = update(state, Msg::LanguageMenuConfirmed);
    assert_eq!(pair(&state), (Some("es".into()), Some("en".into())));
}

#[test]
fn escape_closes_dropdown_before_navigating() {
    let state = started(None);
    let (state, _) = update(state, Msg::LanguageMenuOpened(LanguageField::Target));
    let (state, _) = update(state, Msg::EscapePressed);
    let view = state.view();
    assert_eq!(view.language_menu, None);
    assert_eq!(view.panel, translator_core::Panel::Translate);
}
