//! Tests for the surface adapter.

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn surface() -> SurfaceAdapter {
    SurfaceAdapter::new(SurfaceId::from("frame-1"))
}

fn ipc(body: &str) -> WebViewEvent {
    WebViewEvent::IpcMessage {
        surface_id: SurfaceId::from("frame-1"),
        body: body.to_string(),
    }
}

fn record<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |v: &T| sink.borrow_mut().push(v.clone()))
}

#[test]
fn ready_follows_attach_and_close() {
    let s = surface();
    assert!(!s.is_ready());

    s.handle_event(&WebViewEvent::Attached {
        surface_id: SurfaceId::from("frame-1"),
    });
    assert!(s.is_ready());

    s.handle_event(&WebViewEvent::Closed {
        surface_id: SurfaceId::from("frame-1"),
    });
    assert!(!s.is_ready());
}

#[test]
fn ignores_events_for_other_surfaces() {
    let s = surface();
    let handled = s.handle_event(&WebViewEvent::Attached {
        surface_id: SurfaceId::from("frame-2"),
    });
    assert!(!handled);
    assert!(!s.is_ready());
}

#[test]
fn found_in_page_becomes_find_result() {
    let s = surface();
    let (log, sink) = record::<FindResult>();
    let _sub = s.on_found_in_page(sink);

    s.handle_event(&ipc(
        r#"{"kind":"found_in_page","payload":{"matches":3,"activeMatchOrdinal":1,"finalUpdate":true}}"#,
    ));

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].matches, 3);
    assert_eq!(log[0].active_match_ordinal, Some(1));
}

#[test]
fn malformed_found_in_page_is_dropped() {
    let s = surface();
    let (log, sink) = record::<FindResult>();
    let _sub = s.on_found_in_page(sink);

    s.handle_event(&ipc(r#"{"kind":"found_in_page","payload":"three"}"#));
    assert!(log.borrow().is_empty());
}

#[test]
fn page_focus_messages_drive_focus_and_blur() {
    let s = surface();
    let events = Rc::new(RefCell::new(Vec::new()));
    let e1 = Rc::clone(&events);
    let _f = s.on_focus(move || e1.borrow_mut().push("focus"));
    let e2 = Rc::clone(&events);
    let _b = s.on_blur(move || e2.borrow_mut().push("blur"));

    s.handle_event(&ipc(r#"{"kind":"did_focus","payload":null}"#));
    assert!(s.is_focused());
    s.handle_event(&ipc(r#"{"kind":"did_blur","payload":null}"#));
    assert!(!s.is_focused());

    assert_eq!(*events.borrow(), vec!["focus", "blur"]);
}

#[test]
fn chrome_focus_changes_drive_focus_and_blur() {
    let s = surface();
    let (log, sink) = record::<()>();
    let _f = s.on_focus(move || sink(&()));

    s.handle_event(&WebViewEvent::FocusChanged {
        surface_id: SurfaceId::from("frame-1"),
        focused: true,
    });
    assert!(s.is_focused());
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn duplicate_focus_events_are_all_delivered() {
    let s = surface();
    let (log, sink) = record::<()>();
    let _f = s.on_focus(move || sink(&()));

    s.set_focused(true);
    s.set_focused(true);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn every_message_reaches_message_listeners() {
    let s = surface();
    let (log, sink) = record::<SurfaceMessage>();
    let _sub = s.on_message(sink);

    s.handle_event(&ipc(r#"{"kind":"custom","payload":{"a":1}}"#));
    s.handle_event(&ipc(r#"{"kind":"did_focus","payload":null}"#));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].channel, "custom");
    assert_eq!(log[0].payload, serde_json::json!({"a": 1}));
    assert_eq!(log[1].channel, "did_focus");
}

#[test]
fn unparseable_ipc_is_ignored() {
    let s = surface();
    let (log, sink) = record::<SurfaceMessage>();
    let _sub = s.on_message(sink);

    s.handle_event(&ipc("{{{"));
    assert!(log.borrow().is_empty());
}

#[test]
fn disposed_surface_delivers_nothing() {
    let s = surface();
    s.handle_event(&WebViewEvent::Attached {
        surface_id: SurfaceId::from("frame-1"),
    });
    let (log, sink) = record::<()>();
    let _f = s.on_focus(move || sink(&()));

    s.dispose();
    assert!(!s.is_ready());
    assert!(!s.handle_event(&ipc(r#"{"kind":"did_focus","payload":null}"#)));
    s.set_focused(true);
    assert!(log.borrow().is_empty());
}

#[test]
fn clones_share_state() {
    let s = surface();
    let other = s.clone();
    s.handle_event(&WebViewEvent::Attached {
        surface_id: SurfaceId::from("frame-1"),
    });
    assert!(other.is_ready());
}
