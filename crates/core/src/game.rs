//! Game state machine: `Starting` -> `Running` -> `Over`.
//!
//! A `Game` wraps one [`World`]. There is no way back from `Over`; a replay
//! constructs a fresh `Game`.

use crate::config::GameConfig;
use crate::types::{EndReason, GameAction, TICK_MS};
use crate::world::{TickEvents, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown before play; jumps are ignored, quit still ends the run.
    Starting { ticks_left: u32 },
    Running,
    Over(EndReason),
}

#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    phase: Phase,
    seed: u32,
}

impl Game {
    /// Start a fresh game instance.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let phase = if config.countdown_ticks == 0 {
            Phase::Running
        } else {
            Phase::Starting {
                ticks_left: config.countdown_ticks,
            }
        };
        Self {
            world: World::new(config, seed),
            phase,
            seed,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            Phase::Over(reason) => Some(reason),
            _ => None,
        }
    }

    /// Advance one tick with at most one input action.
    ///
    /// Quit is honoured in every live phase, including the countdown, and
    /// ends the run before anything moves.
    pub fn tick(&mut self, action: Option<GameAction>) -> TickEvents {
        if action == Some(GameAction::Quit) && !self.is_over() {
            self.world.end();
            self.phase = Phase::Over(EndReason::Quit);
            return TickEvents::default();
        }

        match self.phase {
            Phase::Starting { ticks_left } => {
                self.phase = if ticks_left <= 1 {
                    Phase::Running
                } else {
                    Phase::Starting {
                        ticks_left: ticks_left - 1,
                    }
                };
                TickEvents::default()
            }
            Phase::Running => {
                let events = self.world.step(action == Some(GameAction::Jump));
                if events.collided {
                    self.phase = Phase::Over(EndReason::Collision);
                }
                events
            }
            Phase::Over(_) => TickEvents::default(),
        }
    }

    /// One-line status text for the current phase.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Starting { ticks_left } => {
                let secs = (ticks_left * TICK_MS).div_ceil(1000);
                format!("Starting CRAB CRAWL in {secs}...  Press SPACE to jump!")
            }
            Phase::Running => format!(
                "CRAB CRAWL - Score: {}  (Press SPACE to jump, Q to quit)",
                self.world.score()
            ),
            Phase::Over(reason) => format!(
                "GAME OVER! Final Score: {}  ({})",
                self.world.score(),
                reason.as_str()
            ),
        }
    }

    /// End-of-run banner lines.
    pub fn summary_lines(&self) -> [String; 4] {
        let rule = "=".repeat(40);
        [
            rule.clone(),
            format!("{:>25}", "GAME OVER!"),
            format!("      Final Score: {}", self.world.score()),
            rule,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    #[test]
    fn countdown_runs_before_play() {
        let mut g = Game::new(GameConfig::new(Variant::Deep), 1);
        assert_eq!(g.phase(), Phase::Starting { ticks_left: 60 });
        for _ in 0..59 {
            g.tick(Some(GameAction::Jump));
            assert!(matches!(g.phase(), Phase::Starting { .. }));
        }
        g.tick(None);
        assert_eq!(g.phase(), Phase::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.world().frame_count(), 0);
        assert!(!g.world().player().is_airborne());
    }

    #[test]
    fn quit_during_countdown_ends_with_zero_score() {
        let mut g = Game::new(GameConfig::new(Variant::Deep), 1);
        g.tick(None);
        g.tick(Some(GameAction::Quit));
        assert_eq!(g.phase(), Phase::Over(EndReason::Quit));
        assert_eq!(g.score(), 0);
        assert!(g.world().game_over());
        g.tick(None);
        assert_eq!(g.world().frame_count(), 0);
    }

    #[test]
    fn countdown_status_shows_seconds() {
        let g = Game::new(GameConfig::new(Variant::Deep), 1);
        assert!(g.status_line().contains("in 3..."));
    }

    #[test]
    fn quit_ends_without_scoring() {
        let mut g = Game::new(GameConfig::default().without_countdown(), 1);
        g.tick(None);
        g.tick(None);
        assert_eq!(g.score(), 2);
        g.tick(Some(GameAction::Quit));
        assert_eq!(g.phase(), Phase::Over(EndReason::Quit));
        assert_eq!(g.score(), 2);
        assert!(g.world().game_over());
        g.tick(None);
        assert_eq!(g.score(), 2);
    }

    #[test]
    fn over_status_mentions_score() {
        let mut g = Game::new(GameConfig::default().without_countdown(), 1);
        g.tick(None);
        g.tick(Some(GameAction::Quit));
        assert_eq!(g.status_line(), "GAME OVER! Final Score: 1  (quit)");
        assert_eq!(g.summary_lines()[2], "      Final Score: 1");
    }
}
