use translator_core::{update, AppState, Effect, Msg, ALERT_TIMEOUT};

fn two_alerts() -> (AppState, Vec<u64>) {
    let (state, first) = update(AppState::new(), Msg::SwapClicked);
    let (state, second) = update(state, Msg::ClearHistoryClicked);
    let (state, third) = update(state, Msg::HistoryCleared(Err("boom".into())));
    let ids = first
        .iter()
        .chain(second.iter())
        .chain(third.iter())
        .filter_map(|effect| match effect {
            Effect::ScheduleAlertDismiss { alert_id, after } => {
                assert_eq!(*after, ALERT_TIMEOUT);
                Some(*alert_id)
            }
            _ => None,
        })
        .collect();
    (state, ids)
}

#[test]
fn newest_alert_is_on_top() {
    let (state, ids) = two_alerts();
    assert_eq!(ids.len(), 2);
    let view = state.view();
    assert_eq!(view.alerts[0].id, ids[1]);
    assert_eq!(view.alerts[1].id, ids[0]);
}

#[test]
fn expired_or_dismissed_alert_is_removed_once() {
    let (state, ids) = two_alerts();
    let (mut state, _) = update(state, Msg::AlertDismissed(ids[0]));
    assert!(state.consume_dirty());
    assert_eq!(state.view().alerts.len(), 1);

    // Auto-dismiss firing after a manual close is a no-op.
    let (mut state, _) = update(state, Msg::AlertDismissed(ids[0]));
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::DismissNewestAlert);
    assert!(state.view().alerts.is_empty());
}
