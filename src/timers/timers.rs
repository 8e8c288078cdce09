use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }
}

/// Named stopwatches for the setup and solve phases.
///
/// A key accumulates time over repeated start / stop pairs until
/// it is reset.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    timers: HashMap<&'static str, InnerTimer>,
}

impl Timers {
    pub fn reset_timer(&mut self, key: &'static str) {
        self.timers.insert(key, InnerTimer::default());
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        self.timers.entry(key).or_default().start();
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        // there should always be an active timer when this is reached
        if let Some(key) = self.stack.pop() {
            if let Some(t) = self.timers.get_mut(key) {
                t.stop();
            }
        }
    }

    /// elapsed time for `key`, zero if it has never run
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.timers.get(key).map_or(Duration::ZERO, |t| t.elapsed)
    }
}

macro_rules! timeit {
    ($timer:expr => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

#[test]
fn test_timeit_accumulates() {
    let mut timers = Timers::default();
    let mut hits = 0;

    timeit! {timers => "solve"; {
        hits += 1;
    }}
    timeit! {timers => "solve"; {
        hits += 1;
    }}

    assert_eq!(hits, 2);
    assert!(timers.elapsed("solve") >= Duration::ZERO);
    assert_eq!(timers.elapsed("setup"), Duration::ZERO);

    timers.reset_timer("solve");
    assert_eq!(timers.elapsed("solve"), Duration::ZERO);
}
