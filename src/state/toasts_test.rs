use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = ToastsState::default();
    state.push(ToastLevel::Success, "saved");
    state.push(ToastLevel::Error, "failed");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "saved");
    assert_eq!(state.items[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastsState::default();
    let first = state.push(ToastLevel::Info, "one");
    let second = state.push(ToastLevel::Info, "two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismissing_unknown_id_is_harmless() {
    let mut state = ToastsState::default();
    state.push(ToastLevel::Info, "one");
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn level_class_suffixes_are_stable() {
    assert_eq!(ToastLevel::Info.class_suffix(), "info");
    assert_eq!(ToastLevel::Success.class_suffix(), "success");
    assert_eq!(ToastLevel::Error.class_suffix(), "error");
}
