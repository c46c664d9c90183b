use std::sync::Arc;
use std::thread;
use std::time::Duration;

use autotext_core::{Clock, Runtime, StdClock, StdScheduler};

mod list;

use list::MessageList;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Autotext Demo ===");
    println!("A list of notes whose cells grow with their text, and a composer");
    println!("that keeps clear of the keyboard. Set RUST_LOG=debug for transitions.");
    println!();

    let scheduler = Arc::new(StdScheduler::new());
    let runtime = Runtime::new(scheduler.clone());
    let clock = StdClock;
    let started = clock.now();
    let run_frames = || {
        while scheduler.take_frame_request() {
            thread::sleep(FRAME_INTERVAL);
            runtime
                .handle()
                .drain_frame_callbacks(clock.elapsed_nanos(started));
        }
    };

    let list = MessageList::new(runtime.handle(), 3);

    list.type_into(0, "Short note");
    run_frames();
    list.type_into(1, "A note long enough to wrap onto a second line of the cell");
    list.type_into(2, "Another one that wraps, typed while the previous cell animates");
    run_frames();
    list.type_into(
        1,
        " and keeps going well past the maximum height so the cell stops growing",
    );
    run_frames();
    list.clear(2);
    run_frames();

    list.show_keyboard(216.0);
    list.type_into_composer("Replying with the keyboard up");
    run_frames();
    list.hide_keyboard();

    println!();
    list.print_summary();
}
