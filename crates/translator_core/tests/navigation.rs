use std::sync::Once;

use translator_core::{update, AppState, Effect, Msg, Panel};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn start(fragment: Option<&str>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::Started {
            fragment: fragment.map(str::to_string),
            locale: None,
        },
    );
    state
}

#[test]
fn initial_panel_comes_from_fragment() {
    init_logging();
    assert_eq!(start(Some("translate")).view().panel, Panel::Translate);
    assert_eq!(start(Some("how-it-works")).view().panel, Panel::HowItWorks);
    assert_eq!(start(Some("pricing")).view().panel, Panel::HowItWorks);
    assert_eq!(start(None).view().panel, Panel::HowItWorks);
}

#[test]
fn start_requests_history() {
    init_logging();
    let (_, effects) = update(
        AppState::new(),
        Msg::Started {
            fragment: None,
            locale: None,
        },
    );
    assert_eq!(effects, vec![Effect::RefreshHistory]);
}

#[test]
fn escape_from_translate_returns_to_how_it_works() {
    init_logging();
    let state = start(Some("translate"));
    assert_eq!(state.view().location, "translate");

    let (state, effects) = update(state, Msg::EscapePressed);
    let view = state.view();
    assert_eq!(view.panel, Panel::HowItWorks);
    assert_eq!(view.location, "how-it-works");
    assert!(effects.is_empty());
}

#[test]
fn escape_on_how_it_works_stays_there() {
    init_logging();
    let state = start(None);
    let (state, _) = update(state, Msg::EscapePressed);
    assert_eq!(state.view().panel, Panel::HowItWorks);
}

#[test]
fn navigating_twice_to_same_panel_is_idempotent() {
    init_logging();
    let state = start(None);
    let (once, _) = update(state, Msg::NavigateTo(Panel::Translate));
    let (twice, _) = update(once.clone(), Msg::NavigateTo(Panel::Translate));
    assert_eq!(once.view().panel, twice.view().panel);
    assert_eq!(once.view().location, twice.view().location);
}

#[test]
fn back_and_forward_resolve_panel_from_fragment() {
    init_logging();
    let state = start(None);
    let (state, _) = update(state, Msg::NavigateTo(Panel::Translate));
    assert_eq!(state.view().panel, Panel::Translate);

    let (state, _) = update(state, Msg::LocationBack);
    assert_eq!(state.view().panel, Panel::HowItWorks);
    assert_eq!(state.view().location, "how-it-works");

    let (mut state, _) = update(state, Msg::LocationForward);
    assert_eq!(state.view().panel, Panel::Translate);
    assert!(state.consume_dirty());

    // Forward at the end of the stack changes nothing.
    let (mut state, _) = update(state, Msg::LocationForward);
    assert!(!state.consume_dirty());
}

#[test]
fn back_to_initial_empty_location_shows_how_it_works() {
    init_logging();
    // Initial load pushes the resolved fragment on top of the raw start location.
    let state = start(Some("translate"));
    let (state, _) = update(state, Msg::LocationBack);
    assert_eq!(state.view().panel, Panel::Translate);
    assert_eq!(state.view().location, "translate");
}

#[test]
fn activate_on_how_it_works_acts_as_get_started() {
    init_logging();
    let state = start(None);
    let (state, _) = update(state, Msg::ActivateFocused);
    assert_eq!(state.view().panel, Panel::Translate);
}
