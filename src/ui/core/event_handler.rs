use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Longest sleep between input polls
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(EventType::Key(key));
                }
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        let remaining = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        tokio::time::sleep(remaining.min(INPUT_POLL_INTERVAL)).await;

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            Ok(EventType::Tick)
        } else {
            Ok(EventType::Other)
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }
}
