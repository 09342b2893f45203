//! Delayed commands
//!
//! Anything that should happen "in T seconds" is queued here as plain data
//! and run by the game loop on its own clock. Commands hold no references
//! into game state; the loop re-checks the rules state before applying one.

use serde::{Deserialize, Serialize};

/// Work the game loop can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pull and launch the next wave
    TriggerWave,
    /// Throw one follow-up fruit of a chain
    SpawnSingle,
    /// The blade sound finished
    SwooshFinished,
    /// Switch to the game-over screen
    ShowGameOver,
}

impl Command {
    /// Whether the command still runs after the game has ended
    pub fn survives_game_over(&self) -> bool {
        matches!(self, Command::ShowGameOver)
    }
}

/// A queued command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedCommand {
    /// Game clock (seconds) at which the command fires
    pub due: f64,
    pub command: Command,
    /// Insertion order, for stable ties
    seq: u64,
}

/// Pending commands ordered by due time, then insertion
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pending: Vec<TimedCommand>,
    next_seq: u64,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `command` to fire `delay` seconds after `now`
    pub fn after(&mut self, now: f64, delay: f64, command: Command) {
        let entry = TimedCommand {
            due: now + delay.max(0.0),
            command,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let index = self
            .pending
            .iter()
            .position(|p| (p.due, p.seq) > (entry.due, entry.seq))
            .unwrap_or(self.pending.len());
        self.pending.insert(index, entry);
    }

    /// Remove and return every command due at or before `now`, in order
    pub fn take_due(&mut self, now: f64) -> Vec<TimedCommand> {
        let ready = self.pending.iter().take_while(|p| p.due <= now).count();
        self.pending.drain(..ready).collect()
    }

    /// Drop every pending command that does not survive game over
    pub fn cancel_gameplay(&mut self) {
        self.pending.retain(|p| p.command.survives_game_over());
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Pending commands, soonest first
    pub fn pending(&self) -> &[TimedCommand] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_order() {
        let mut schedule = Schedule::new();
        schedule.after(0.0, 2.0, Command::TriggerWave);
        schedule.after(0.0, 0.5, Command::SpawnSingle);
        schedule.after(0.0, 0.5, Command::SwooshFinished);

        assert!(schedule.take_due(0.4).is_empty());
        let due: Vec<_> = schedule.take_due(1.0).iter().map(|c| c.command).collect();
        assert_eq!(due, vec![Command::SpawnSingle, Command::SwooshFinished]);
        assert_eq!(schedule.pending().len(), 1);

        let due = schedule.take_due(2.0);
        assert_eq!(due[0].command, Command::TriggerWave);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_cancel_keeps_game_over_screen() {
        let mut schedule = Schedule::new();
        schedule.after(0.0, 1.0, Command::SpawnSingle);
        schedule.after(0.0, 1.0, Command::TriggerWave);
        schedule.after(0.0, 0.5, Command::ShowGameOver);
        schedule.cancel_gameplay();
        assert_eq!(schedule.pending().len(), 1);
        assert_eq!(schedule.pending()[0].command, Command::ShowGameOver);
    }

    #[test]
    fn test_negative_delay_fires_now() {
        let mut schedule = Schedule::new();
        schedule.after(3.0, -1.0, Command::TriggerWave);
        assert_eq!(schedule.take_due(3.0).len(), 1);
    }
}
