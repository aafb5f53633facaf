use log::debug;

/// Handle to a periodic task issued by [`TickScheduler`].
///
/// Not `Clone`: cancelling consumes the handle, so a cancelled task cannot
/// be referred to again.
#[derive(Debug, PartialEq, Eq)]
pub struct TaskHandle {
    id: u64,
}

impl TaskHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug)]
struct ScheduledTask {
    id: u64,
    interval: f64,
    next_due: f64,
}

/// Single-slot periodic scheduler driven by an external clock (seconds).
///
/// At most one task is active at a time, and each poll fires at most one
/// tick, so ticks never overlap.
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    active: Option<ScheduledTask>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `interval` seconds; the first tick is due at
    /// `now + interval`. Any task still active is dropped first.
    pub fn schedule_every(&mut self, interval: f64, now: f64) -> TaskHandle {
        if let Some(stale) = self.active.take() {
            debug!("dropping task {} still active at reschedule", stale.id);
        }
        self.next_id += 1;
        let id = self.next_id;
        self.active = Some(ScheduledTask {
            id,
            interval,
            next_due: now + interval,
        });
        TaskHandle { id }
    }

    /// Cancel `handle`. Returns false if it was no longer the active task.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match &self.active {
            Some(task) if task.id == handle.id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, handle: &TaskHandle) -> bool {
        self.active.as_ref().is_some_and(|t| t.id == handle.id)
    }

    pub fn interval(&self) -> Option<f64> {
        self.active.as_ref().map(|t| t.interval)
    }

    /// Returns the id of the active task if a tick is due at `now`.
    ///
    /// A clock that fell several intervals behind yields one tick and
    /// re-anchors on `now`, instead of firing a burst.
    pub fn poll(&mut self, now: f64) -> Option<u64> {
        let task = self.active.as_mut()?;
        if now < task.next_due {
            return None;
        }
        task.next_due += task.interval;
        if task.next_due <= now {
            task.next_due = now + task.interval;
        }
        Some(task.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_at_interval() {
        let mut s = TickScheduler::new();
        let handle = s.schedule_every(0.25, 0.0);
        assert_eq!(s.poll(0.125), None);
        assert_eq!(s.poll(0.25), Some(handle.id()));
        assert_eq!(s.poll(0.375), None);
        assert_eq!(s.poll(0.5), Some(handle.id()));
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut s = TickScheduler::new();
        let handle = s.schedule_every(0.25, 0.0);
        assert!(s.cancel(handle));
        assert_eq!(s.poll(10.0), None);
        assert_eq!(s.interval(), None);
    }

    #[test]
    fn test_reschedule_applies_from_next_tick() {
        let mut s = TickScheduler::new();
        let old = s.schedule_every(0.25, 0.0);
        assert!(s.poll(0.25).is_some());
        assert!(s.cancel(old));
        let new = s.schedule_every(0.125, 0.25);
        assert_eq!(s.poll(0.3), None);
        assert_eq!(s.poll(0.375), Some(new.id()));
        assert_eq!(s.interval(), Some(0.125));
    }

    #[test]
    fn test_stale_handle_cannot_cancel_new_task() {
        let mut s = TickScheduler::new();
        let first = s.schedule_every(0.25, 0.0);
        let second = s.schedule_every(0.25, 0.0);
        assert!(!s.is_active(&first));
        assert!(!s.cancel(first));
        assert!(s.is_active(&second));
    }

    #[test]
    fn test_no_burst_after_stall() {
        let mut s = TickScheduler::new();
        s.schedule_every(0.25, 0.0);
        assert!(s.poll(4.0).is_some());
        assert_eq!(s.poll(4.0), None);
        assert!(s.poll(4.25).is_some());
    }
}
