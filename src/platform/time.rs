//! Frame pacing

use std::time::Duration;

/// Holds each frame to a fixed minimum duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_delay: Duration,
}

impl FramePacer {
    pub fn new(frame_delay: Duration) -> Self {
        Self { frame_delay }
    }

    /// A pacer that never sleeps
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Time left in the frame after `frame_time` of work, if any
    pub fn remaining(&self, frame_time: Duration) -> Option<Duration> {
        if self.frame_delay > frame_time {
            Some(self.frame_delay - frame_time)
        } else {
            None
        }
    }

    /// Sleep out the rest of the frame
    pub fn wait(&self, frame_time: Duration) {
        if let Some(delay) = self.remaining(frame_time) {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let pacer = FramePacer::new(Duration::from_millis(16));
        assert_eq!(
            pacer.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
        assert_eq!(pacer.remaining(Duration::from_millis(16)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(40)), None);
    }

    #[test]
    fn test_unpaced_never_waits() {
        let pacer = FramePacer::unpaced();
        assert_eq!(pacer.remaining(Duration::ZERO), None);
    }
}
