//! Caller-clocked timers.
//!
//! Nothing here reads the system clock. The owner passes the current time in
//! milliseconds, which keeps the backdrop single-threaded and lets tests step
//! time by hand.

/// A repeating timer.
///
/// Periods missed while the owner was not polling are skipped rather than
/// replayed, so a stalled event loop does not cause a burst of fires.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl IntervalTimer {
    /// Create an unarmed timer. A zero period is treated as one millisecond.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Arm the timer so it first fires one period after `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
    }

    /// Arm the timer so it fires at the next poll at or after `due_ms`.
    pub fn arm_at(&mut self, due_ms: u64) {
        self.next_due_ms = Some(due_ms);
    }

    /// Disarm the timer. It will not fire until armed again.
    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Milliseconds until the next fire, zero if overdue, `None` if unarmed.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }

    /// Returns true once per elapsed period.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                let missed = (now_ms - due) / self.period_ms;
                self.next_due_ms = Some(due + (missed + 1) * self.period_ms);
                true
            }
            _ => false,
        }
    }
}

/// A frame produced by [`AnimationLoop::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    /// Frames produced since the loop was first started, starting at zero.
    pub index: u64,
    /// Milliseconds since the loop was first started. Never decreases, even
    /// across a stop and restart.
    pub elapsed_ms: u64,
}

/// Handle for the frame-driven animation loop.
///
/// A stopped loop never yields a frame, so after [`AnimationLoop::stop`]
/// there is no outstanding callback.
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    frame: IntervalTimer,
    origin_ms: Option<u64>,
    running: bool,
    frames: u64,
}

impl AnimationLoop {
    /// Create a stopped loop with the given frame interval.
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame: IntervalTimer::new(frame_interval_ms),
            origin_ms: None,
            running: false,
            frames: 0,
        }
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame.period_ms()
    }

    /// Start the loop. The first frame is due immediately. Starting a
    /// running loop does nothing.
    ///
    /// The time origin is fixed by the first start; a restart keeps it.
    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.origin_ms.get_or_insert(now_ms);
        self.running = true;
        self.frame.arm_at(now_ms);
    }

    /// Stop the loop and cancel the pending frame.
    pub fn stop(&mut self) {
        self.running = false;
        self.frame.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds until the next frame is due, `None` when stopped.
    pub fn time_until_next_frame(&self, now_ms: u64) -> Option<u64> {
        self.frame.remaining_ms(now_ms)
    }

    /// Yield a frame if one is due and re-arm for the next.
    pub fn poll(&mut self, now_ms: u64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let origin = self.origin_ms?;
        if !self.frame.poll(now_ms) {
            return None;
        }
        let tick = FrameTick {
            index: self.frames,
            elapsed_ms: now_ms.saturating_sub(origin),
        };
        self.frames += 1;
        Some(tick)
    }
}
