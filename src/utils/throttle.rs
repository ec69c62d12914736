//! 简单节流：距上次放行至少 wait 才再次放行，首次调用总是放行

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle {
    wait: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(wait: Duration) -> Self {
        Self { wait, last: None }
    }

    /// 尝试放行本次调用
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.wait => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
