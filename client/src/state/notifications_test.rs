use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut n = Notifications::default();
    let a = n.push(ToastLevel::Success, "Saved");
    let b = n.push(ToastLevel::Error, "Failed");
    assert!(b > a);
    assert_eq!(n.items().len(), 2);
    assert_eq!(n.items()[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut n = Notifications::default();
    let a = n.push(ToastLevel::Success, "one");
    let b = n.push(ToastLevel::Success, "two");
    assert!(n.dismiss(a));
    assert_eq!(n.items().len(), 1);
    assert_eq!(n.items()[0].id, b);
}

#[test]
fn dismiss_unknown_id_reports_false() {
    let mut n = Notifications::default();
    n.push(ToastLevel::Success, "one");
    assert!(!n.dismiss(42));
    assert_eq!(n.items().len(), 1);
}

#[test]
fn push_past_limit_drops_oldest() {
    let mut n = Notifications::default();
    for i in 0..=MAX_VISIBLE_TOASTS {
        n.push(ToastLevel::Error, format!("toast {i}"));
    }
    assert_eq!(n.items().len(), MAX_VISIBLE_TOASTS);
    assert_eq!(n.items()[0].text, "toast 1");
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut n = Notifications::default();
    let a = n.push(ToastLevel::Success, "one");
    n.dismiss(a);
    let b = n.push(ToastLevel::Success, "two");
    assert_ne!(a, b);
}
