//! Full-game simulation over a cyclic batting order

use super::config::SimConfig;
use super::inning::{GameState, InningSimulator};
use super::outcome::{AtBatOutcome, OutcomeModel};
use crate::error::{Result, SimError};
use crate::player::{lineup_name, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Line score of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub innings: Vec<u32>,
    pub total: u32,
    pub plate_appearances: u32,
}

/// Drives a fixed lineup through a game.
///
/// The batting order is an explicit index that carries over between
/// innings: the inning after a third out starts with the next slot, not
/// the leadoff hitter.
#[derive(Debug, Clone)]
pub struct GameSimulator<'a> {
    lineup: &'a [Player],
    models: Vec<OutcomeModel<'a>>,
    innings: u32,
    inning: InningSimulator,
    next_batter: usize,
}

impl<'a> GameSimulator<'a> {
    pub fn new(lineup: &'a [Player], config: &SimConfig) -> Result<Self> {
        if lineup.is_empty() {
            return Err(SimError::EmptyLineup);
        }
        if lineup.iter().all(|p| p.out_chance() <= 0.0) {
            return Err(SimError::DegenerateLineup { lineup: lineup_name(lineup) });
        }

        let models = lineup.iter().map(OutcomeModel::new).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            lineup,
            models,
            innings: config.innings,
            inning: InningSimulator::new(config.max_plate_appearances),
            next_batter: 0,
        })
    }

    pub fn lineup(&self) -> &'a [Player] {
        self.lineup
    }

    /// Slot of the batter due up next.
    pub fn next_batter(&self) -> usize {
        self.next_batter
    }

    /// Resume the batting order at `slot` (taken modulo lineup length).
    pub fn set_next_batter(&mut self, slot: usize) {
        self.next_batter = slot % self.lineup.len();
    }

    /// Play a full game, sampling each plate appearance from `rng`.
    pub fn simulate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameResult> {
        let models = &self.models;
        let len = models.len();
        let next_batter = &mut self.next_batter;
        let inning = self.inning;
        let innings = self.innings;

        play_innings(innings, &inning, |_| {
            let model = &models[*next_batter];
            *next_batter = (*next_batter + 1) % len;
            model.sample(rng)
        })
    }

    /// Play a full game with outcomes chosen by `pick`, which sees the
    /// batter and the state they walk up to. The batting order still
    /// advances one slot per plate appearance.
    pub fn simulate_with<F>(&mut self, mut pick: F) -> Result<GameResult>
    where
        F: FnMut(&Player, &GameState) -> AtBatOutcome,
    {
        let lineup = self.lineup;
        let next_batter = &mut self.next_batter;
        let inning = self.inning;

        play_innings(self.innings, &inning, |state| {
            let player = &lineup[*next_batter];
            *next_batter = (*next_batter + 1) % lineup.len();
            pick(player, state)
        })
    }
}

fn play_innings<F>(innings: u32, inning: &InningSimulator, mut next_outcome: F) -> Result<GameResult>
where
    F: FnMut(&GameState) -> AtBatOutcome,
{
    let mut scores = Vec::with_capacity(innings as usize);
    let mut plate_appearances = 0;

    for _ in 0..innings {
        let result = inning.play(&mut next_outcome)?;
        scores.push(result.score);
        plate_appearances += result.plate_appearances;
    }

    let total = scores.iter().sum();
    log::debug!("Game complete: {} runs {:?}", total, scores);
    Ok(GameResult { innings: scores, total, plate_appearances })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use crate::engine::outcome::AtBatOutcome::*;

    fn strikeout_artist(name: &str) -> Player {
        Player::new(name, 1.0, 0.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn test_all_strikeouts_score_nothing() {
        let lineup = vec![strikeout_artist("A"), strikeout_artist("B"), strikeout_artist("C")];
        let mut game = GameSimulator::new(&lineup, &SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = game.simulate(&mut rng).unwrap();
        assert_eq!(result.total, 0);
        assert_eq!(result.innings, vec![0; 7]);
        assert_eq!(result.plate_appearances, 21);
    }

    #[test]
    fn test_batting_order_carries_across_innings() {
        let lineup: Vec<Player> = ["A", "B", "C", "D"].into_iter().map(strikeout_artist).collect();
        let config = SimConfig { innings: 2, ..Default::default() };
        let mut game = GameSimulator::new(&lineup, &config).unwrap();

        let mut batters = Vec::new();
        game.simulate_with(|player, _| {
            batters.push(player.name().to_string());
            Strikeout
        })
        .unwrap();

        assert_eq!(batters, vec!["A", "B", "C", "D", "A", "B"]);
        assert_eq!(game.next_batter(), 2);
    }

    #[test]
    fn test_resume_from_snapshot() {
        let lineup: Vec<Player> = ["A", "B", "C"].into_iter().map(strikeout_artist).collect();
        let config = SimConfig { innings: 1, ..Default::default() };
        let mut game = GameSimulator::new(&lineup, &config).unwrap();
        game.set_next_batter(4);
        assert_eq!(game.next_batter(), 1);

        let mut first = None;
        game.simulate_with(|player, _| {
            first.get_or_insert_with(|| player.name().to_string());
            Strikeout
        })
        .unwrap();
        assert_eq!(first.as_deref(), Some("B"));
    }

    #[test]
    fn test_total_is_sum_of_innings() {
        // Runs per inning: 1, 0, 2, 0, 0, 1, 0
        let walks_per_inning = [4usize, 0, 5, 0, 0, 4, 0];
        let mut script = Vec::new();
        for walks in walks_per_inning {
            script.extend(std::iter::repeat(Walk).take(walks));
            script.extend([Strikeout, Strikeout, Strikeout]);
        }

        let lineup: Vec<Player> = ["A", "B", "C"].into_iter().map(strikeout_artist).collect();
        let mut game = GameSimulator::new(&lineup, &SimConfig::default()).unwrap();
        let mut iter = script.into_iter();
        let result = game.simulate_with(|_, _| iter.next().unwrap_or(Strikeout)).unwrap();

        assert_eq!(result.innings, vec![1, 0, 2, 0, 0, 1, 0]);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let roster = crate::player::demo_roster();
        let config = SimConfig::default();

        let mut a = GameSimulator::new(roster.players(), &config).unwrap();
        let mut b = GameSimulator::new(roster.players(), &config).unwrap();
        let ra = a.simulate(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let rb = b.simulate(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(ra.total, ra.innings.iter().sum::<u32>());
    }

    #[test]
    fn test_empty_lineup_rejected() {
        let err = GameSimulator::new(&[], &SimConfig::default()).unwrap_err();
        assert_eq!(err, SimError::EmptyLineup);
    }

    #[test]
    fn test_lineup_without_outs_rejected() {
        let walker = |name: &str| Player::new(name, 0.0, 1.0, 1.0, 0.0).unwrap();
        let lineup = vec![walker("A"), walker("B"), walker("C")];

        let err = GameSimulator::new(&lineup, &SimConfig::default()).unwrap_err();
        assert_eq!(err, SimError::DegenerateLineup { lineup: "ABC".to_string() });
    }
}
