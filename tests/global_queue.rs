//! Facade operations against the process-wide queue.
//!
//! Every test here shares one queue, so each takes `LOCK` and starts by
//! flushing it.

use evtype::raw::codes;
use evtype::{
    queue, Event, EventType, KeyboardEvent, MouseMotionEvent, QueueError, QuitEvent, RawEvent,
    Scancode, UnknownEvent, UserEvent, WatchFilter,
};
use std::sync::{Arc, Mutex, MutexGuard};

static LOCK: Mutex<()> = Mutex::new(());

fn setup() -> MutexGuard<'static, ()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    Event::flush_all();
    guard
}

#[test]
fn quit_round_trip() {
    let _guard = setup();

    Event::push(QuitEvent::new()).unwrap();
    assert_eq!(Event::queue_size(None), 1);
    assert!(Event::in_queue(EventType::Quit));

    let mut event = Event::default();
    assert!(event.poll());
    assert!(event.is::<QuitEvent>());
    assert_eq!(event.event_type(), Some(EventType::Quit));

    assert!(!event.poll());
    assert!(event.is_empty());
}

#[test]
fn mouse_motion_fields_survive_the_queue() {
    let _guard = setup();

    let mut motion = MouseMotionEvent::new();
    motion.set_x(839);
    motion.set_y(351);
    Event::push(motion).unwrap();

    let mut event = Event::default();
    assert!(event.poll());
    let motion = event.get::<MouseMotionEvent>().unwrap();
    assert_eq!((motion.x(), motion.y()), (839, 351));
    assert!(motion.timestamp() <= queue::global().ticks());
}

#[test]
fn flush_all_empties_the_queue() {
    let _guard = setup();

    Event::push(QuitEvent::new()).unwrap();
    Event::push(KeyboardEvent::new()).unwrap();
    Event::push(MouseMotionEvent::new()).unwrap();
    assert_eq!(Event::queue_size(None), 3);

    Event::flush_all_type(EventType::KeyDown);
    assert_eq!(Event::queue_size(None), 2);
    assert!(!Event::in_queue(EventType::KeyDown));

    Event::flush_all();
    assert_eq!(Event::queue_size(None), 0);
}

#[test]
fn flush_drops_one_record() {
    let _guard = setup();

    Event::push(QuitEvent::new()).unwrap();
    Event::push(QuitEvent::new()).unwrap();
    Event::flush_type(EventType::Quit);
    assert_eq!(Event::queue_size(Some(EventType::Quit)), 1);

    Event::flush();
    assert_eq!(Event::queue_size(None), 0);
}

#[test]
fn push_then_poll_returns_the_same_event() {
    let _guard = setup();

    let mut key = KeyboardEvent::new();
    key.set_scancode(Scancode::ESCAPE);
    key.set_window_id(3);
    key.set_timestamp(1234);
    Event::push(key).unwrap();

    let mut event = Event::default();
    assert!(event.poll());
    assert_eq!(event, Event::from(key));
    assert_eq!(event.window_id(), Some(3));
}

#[test]
fn unregistered_codes_come_back_as_unknown() {
    let _guard = setup();

    queue::global().push(RawEvent::new(0x7000)).unwrap();

    let mut event = Event::default();
    assert!(event.poll());
    let unknown = event.get::<UnknownEvent>().unwrap();
    assert_eq!(unknown.code(), 0x7000);
    assert_eq!(event.event_type(), Some(EventType::Unknown(0x7000)));
}

#[test]
fn user_events_carry_their_payload() {
    let _guard = setup();

    let code = queue::global().register_user_events(1).unwrap();
    assert!(code >= codes::USEREVENT);

    let mut user = UserEvent::with_type(code).unwrap();
    user.set_code(7);
    user.set_data1(0xdead);
    Event::push(user).unwrap();
    assert!(Event::in_queue(EventType::User(code)));

    let mut event = Event::default();
    assert!(event.poll());
    let user = event.get::<UserEvent>().unwrap();
    assert_eq!((user.code(), user.data1(), user.data2()), (7, 0xdead, 0));
}

#[test]
fn empty_events_cannot_be_pushed() {
    let _guard = setup();
    assert_eq!(Event::push(Event::Empty), Err(QueueError::EmptyEvent));
    assert_eq!(Event::queue_size(None), 0);
}

#[test]
fn watchers_and_sources_on_the_global_queue() {
    let _guard = setup();
    let queue = queue::global();

    let seen = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&seen);
    let id = queue.add_watcher(
        move |_: &Event| *sink.lock().unwrap() += 1,
        WatchFilter::Types(vec![EventType::Quit]),
        None,
    );

    queue.add_virtual_source("virtual:it", |source| {
        source.quit();
        source.move_mouse(1, 2, 3);
    });
    Event::update();
    assert_eq!(Event::queue_size(None), 2);
    assert_eq!(*seen.lock().unwrap(), 1);

    assert!(queue.remove_source("virtual:it"));
    assert!(queue.remove_watcher(id));
}

#[test]
fn install_after_first_use_fails() {
    let _guard = setup();
    let err = queue::install(evtype::QueueConfig::default()).unwrap_err();
    assert_eq!(err, QueueError::AlreadyInstalled);
}
