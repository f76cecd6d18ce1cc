use evtype::backends::virtual_input::VirtualSource;
use evtype::{
    queue, Event, EventType, KeyboardEvent, Keycode, MouseButton, MouseButtonEvent, QueueConfig,
    Scancode,
};

fn main() {
    env_logger::init();

    let config = QueueConfig {
        log_events: true,
        ..QueueConfig::default()
    };
    let queue = queue::install(config).expect("queue already installed");

    // Script some input and let the pump deliver it
    let mut source = VirtualSource::new("virtual:demo", "Demo Virtual Source");
    source.move_mouse(1, 839, 351);
    source.click(1, MouseButton::Left, 839, 351);
    source.press_key(Scancode::ESCAPE, Keycode::ESCAPE);
    source.quit();
    queue.add_source(source);

    Event::update();
    println!("{} event(s) pending", Event::queue_size(None));

    let mut event = Event::default();
    while event.poll() {
        match event {
            Event::MouseMotion(motion) => {
                println!("(Virtual) Mouse at {},{}", motion.x(), motion.y());
            }
            Event::MouseButton(button) => print_button(&button),
            Event::Keyboard(key) => print_key(&key),
            Event::Quit(_) => {
                println!("(Virtual) Quit requested");
                break;
            }
            _ => println!("(Virtual) {:?}", event.event_type()),
        }
    }

    assert!(!Event::in_queue(EventType::Quit));
}

fn print_button(button: &MouseButtonEvent) {
    let verb = if button.is_pressed() { "pressed" } else { "released" };
    println!("(Virtual) Button {:?} {}", button.button(), verb);
}

fn print_key(key: &KeyboardEvent) {
    let verb = if key.is_pressed() { "pressed" } else { "released" };
    println!("(Virtual) Key {:?} {}", key.scancode(), verb);
}
