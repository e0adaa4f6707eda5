use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_speed: Duration,
    pub initial_delay: Duration,
    pub pause: Duration,
    pub erase_speed: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            initial_delay: Duration::from_millis(500),
            pause: Duration::from_millis(2000),
            erase_speed: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting out the initial delay.
    Idle,
    Typing,
    Paused,
    Erasing,
}

/// Reveals and retracts `source` one character per tick, forever.
///
/// The engine does no timing of its own: every [`Typewriter::tick`] performs one
/// transition and returns how long the caller should wait before the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    char_len: usize,
    revealed: usize,
    phase: Phase,
    config: TypewriterConfig,
}

impl Typewriter {
    pub fn new(source: impl Into<String>, config: TypewriterConfig) -> Self {
        let source = source.into();
        Self {
            char_len: source.chars().count(),
            source,
            revealed: 0,
            phase: Phase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters currently shown.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn revealed_text(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }

    /// Delay before the first tick from the current state.
    pub fn start_delay(&self) -> Duration {
        match self.phase {
            Phase::Idle => self.config.initial_delay,
            Phase::Typing => self.config.type_speed,
            Phase::Paused => self.config.pause,
            Phase::Erasing => self.config.erase_speed,
        }
    }

    /// Replaces the text. A different text restarts from `Idle` with nothing revealed.
    /// Returns true when a reset happened.
    pub fn set_source(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if source == self.source {
            return false;
        }
        *self = Self::new(source, self.config);
        true
    }

    /// Advances one step and returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Typing;
                self.config.type_speed
            }
            Phase::Typing => {
                if self.revealed < self.char_len {
                    self.revealed += 1;
                }
                if self.revealed == self.char_len {
                    self.phase = Phase::Paused;
                    self.config.pause
                } else {
                    self.config.type_speed
                }
            }
            Phase::Paused => {
                self.phase = Phase::Erasing;
                self.config.erase_speed
            }
            Phase::Erasing => {
                self.revealed = self.revealed.saturating_sub(1);
                if self.revealed == 0 {
                    self.phase = Phase::Typing;
                    self.config.type_speed
                } else {
                    self.config.erase_speed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(type_ms: u64, delay_ms: u64) -> TypewriterConfig {
        TypewriterConfig {
            type_speed: Duration::from_millis(type_ms),
            initial_delay: Duration::from_millis(delay_ms),
            pause: Duration::from_millis(1000),
            erase_speed: Duration::from_millis(50),
        }
    }

    /// Runs the engine on a virtual clock and returns the text visible at `at`.
    fn text_at(engine: &mut Typewriter, at: Duration) -> String {
        let mut clock = engine.start_delay();
        while clock <= at {
            clock += engine.tick();
        }
        engine.revealed_text().to_string()
    }

    #[test]
    fn test_hi_after_100_and_200_ms() {
        let mut engine = Typewriter::new("Hi", config(100, 0));
        assert_eq!(text_at(&mut engine, Duration::from_millis(100)), "H");

        let mut engine = Typewriter::new("Hi", config(100, 0));
        assert_eq!(text_at(&mut engine, Duration::from_millis(200)), "Hi");
        assert_eq!(engine.phase(), Phase::Paused);
    }

    #[test]
    fn test_full_cycle_phases() {
        let mut engine = Typewriter::new("abc", config(10, 5));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.start_delay(), Duration::from_millis(5));

        engine.tick();
        assert_eq!(engine.phase(), Phase::Typing);
        for _ in 0..3 {
            engine.tick();
        }
        assert_eq!(engine.revealed_text(), "abc");
        assert_eq!(engine.phase(), Phase::Paused);

        assert_eq!(engine.tick(), Duration::from_millis(50));
        assert_eq!(engine.phase(), Phase::Erasing);
        for _ in 0..3 {
            engine.tick();
        }
        assert_eq!(engine.revealed_text(), "");
        assert_eq!(engine.phase(), Phase::Typing);
    }

    #[test]
    fn test_revealed_is_always_prefix_and_monotonic_per_phase() {
        let source = "héllo wörld ✓";
        let mut engine = Typewriter::new(source, config(10, 0));
        let mut prev_len = 0;
        let mut prev_phase = engine.phase();
        for _ in 0..200 {
            engine.tick();
            let text = engine.revealed_text();
            assert!(source.starts_with(text));
            let len = engine.revealed_len();
            match (prev_phase, engine.phase()) {
                (Phase::Typing, Phase::Typing) => assert!(len >= prev_len),
                (Phase::Erasing, Phase::Erasing) => assert!(len <= prev_len),
                _ => {}
            }
            prev_len = len;
            prev_phase = engine.phase();
        }
    }

    #[test]
    fn test_source_change_resets_to_idle() {
        let mut engine = Typewriter::new("first", config(10, 20));
        for _ in 0..4 {
            engine.tick();
        }
        assert_eq!(engine.revealed_text(), "fir");

        assert!(!engine.set_source("first"));
        assert_eq!(engine.revealed_text(), "fir");

        assert!(engine.set_source("second"));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.revealed_text(), "");
        assert_eq!(engine.start_delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_empty_source_cycles_without_revealing() {
        let mut engine = Typewriter::new("", config(10, 0));
        for _ in 0..8 {
            let delay = engine.tick();
            assert!(delay > Duration::ZERO);
            assert_eq!(engine.revealed_text(), "");
        }
    }
}
