//! Virtual-clock [`TimerHost`] for deterministic timing tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::debounce::TimerHost;

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    tasks: Vec<(u64, Duration, Task)>,
}

/// Timers that only advance when the test says so.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<Queue>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Move the clock forward, running due tasks in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let task = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by_key(|(_, (id, at, _))| (*at, *id))
                    .map(|(idx, _)| idx);
                match due {
                    Some(idx) => {
                        let (_, at, task) = queue.tasks.remove(idx);
                        queue.now = at;
                        task
                    }
                    None => break,
                }
            };
            task();
        }
        self.queue.borrow_mut().now = target;
    }
}

impl TimerHost for ManualTimers {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> u64 {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let at = queue.now + delay;
        queue.tasks.push((id, at, task));
        id
    }

    fn cancel(&self, handle: u64) {
        self.queue.borrow_mut().tasks.retain(|(id, _, _)| *id != handle);
    }
}
