use std::time::{Duration, Instant};

/// Frame rate is averaged over windows of this length
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// In-memory statistics for the current session. Nothing here outlives the
/// process.
pub struct GameMetrics {
    pub round_started: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub rounds_played: u32,
    /// Frames drawn per second over the last full window
    pub fps: u32,
    running: bool,
    frames_in_window: u32,
    window_started: Instant,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            rounds_played: 0,
            fps: 0,
            running: true,
            frames_in_window: 0,
            window_started: Instant::now(),
        }
    }

    /// Count a drawn frame
    pub fn on_frame(&mut self) {
        self.record_frame(Instant::now());
    }

    fn record_frame(&mut self, now: Instant) {
        self.frames_in_window += 1;

        let window = now.saturating_duration_since(self.window_started);
        if window >= FPS_WINDOW {
            self.fps = (self.frames_in_window as f64 / window.as_secs_f64()).round() as u32;
            self.frames_in_window = 0;
            self.window_started = now;
        }
    }

    /// Refresh the round clock; it stops once the round is over
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.round_started.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.rounds_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_round_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.rounds_played, 1);

        metrics.on_round_over(5);
        assert_eq!(metrics.best_score, 10); // Should not decrease
        assert_eq!(metrics.rounds_played, 2);

        metrics.on_round_over(15);
        assert_eq!(metrics.best_score, 15);
        assert_eq!(metrics.rounds_played, 3);
    }

    #[test]
    fn test_clock_stops_at_round_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_round_over(0);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_fps_over_one_second_window() {
        let mut metrics = GameMetrics::new();
        let start = metrics.window_started;
        assert_eq!(metrics.fps, 0);

        // 8 frames at 125ms apart: the window closes on the 8th
        for i in 1..=8 {
            metrics.record_frame(start + Duration::from_millis(125 * i));
        }
        assert_eq!(metrics.fps, 8);
        assert_eq!(metrics.frames_in_window, 0);

        // A half-full window keeps the last reading
        for i in 1..=3 {
            metrics.record_frame(start + Duration::from_millis(1000 + 100 * i));
        }
        assert_eq!(metrics.fps, 8);

        // Slower second window: 4 frames over 2 seconds
        metrics.record_frame(start + Duration::from_millis(3000));
        assert_eq!(metrics.fps, 2);
    }
}
