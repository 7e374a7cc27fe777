use rand::Rng;
use serde::{Deserialize, Serialize};

use chipshot_core::launch_params::{LaunchAngle, LaunchParameters};

/// Fewest points a correct answer can award.
pub const MIN_AWARD: u32 = 4;
/// Most points a correct answer can award.
pub const MAX_AWARD: u32 = 8;

/// Which stat a reward point went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Power,
    Loft,
    Wind,
}

const STATS: [Stat; 3] = [Stat::Power, Stat::Loft, Stat::Wind];

/// Points gained from a single correct answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    pub power: u32,
    pub loft: u32,
    pub wind: u32,
}

impl StatBonus {
    pub fn total(&self) -> u32 {
        self.power + self.loft + self.wind
    }

    fn add(&mut self, stat: Stat) {
        match stat {
            Stat::Power => self.power += 1,
            Stat::Loft => self.loft += 1,
            Stat::Wind => self.wind += 1,
        }
    }
}

/// Stat levels accumulated over a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPoints {
    pub power: u32,
    pub loft: u32,
    pub wind: u32,
}

impl Default for StatPoints {
    /// Starting levels before any answer; loft 20 is roughly a 27 degree launch.
    fn default() -> Self {
        Self {
            power: 10,
            loft: 20,
            wind: 0,
        }
    }
}

impl StatPoints {
    /// Reward a correct answer with `MIN_AWARD..=MAX_AWARD` points, each
    /// assigned to a uniformly chosen stat.
    pub fn award_correct_answer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StatBonus {
        let total = rng.random_range(MIN_AWARD..=MAX_AWARD);
        let mut bonus = StatBonus::default();
        for _ in 0..total {
            bonus.add(STATS[rng.random_range(0..STATS.len())]);
        }
        self.apply(bonus);
        bonus
    }

    pub fn apply(&mut self, bonus: StatBonus) {
        self.power += bonus.power;
        self.loft += bonus.loft;
        self.wind += bonus.wind;
    }

    /// Shot parameters for these stats. Loft drives the launch angle and wind
    /// is always a tailwind.
    pub fn to_launch_params(&self) -> LaunchParameters {
        LaunchParameters::new(
            self.power as f32,
            LaunchAngle::Loft(self.loft as f32),
            self.wind as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn starting_stats() {
        let stats = StatPoints::default();
        assert_eq!((stats.power, stats.loft, stats.wind), (10, 20, 0));
        let params = stats.to_launch_params();
        assert_eq!(params.power, 10.0);
        assert!((params.angle.degrees() - 27.0).abs() < 1e-4);
        assert_eq!(params.wind, 0.0);
        assert_eq!(params.bounce_limit, None);
    }

    #[test]
    fn award_stays_in_range_and_is_applied() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stats = StatPoints::default();
        let mut expected = stats;
        for _ in 0..200 {
            let bonus = stats.award_correct_answer(&mut rng);
            assert!((MIN_AWARD..=MAX_AWARD).contains(&bonus.total()));
            expected.apply(bonus);
            assert_eq!(stats, expected);
        }
    }

    #[test]
    fn awards_reach_every_stat() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatPoints::default();
        for _ in 0..50 {
            stats.award_correct_answer(&mut rng);
        }
        assert!(stats.power > 10);
        assert!(stats.loft > 20);
        assert!(stats.wind > 0);
    }

    #[test]
    fn same_seed_same_awards() {
        let mut a = StatPoints::default();
        let mut b = StatPoints::default();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        for _ in 0..6 {
            assert_eq!(
                a.award_correct_answer(&mut rng_a),
                b.award_correct_answer(&mut rng_b)
            );
        }
        assert_eq!(a, b);
    }

    #[test]
    fn stats_map_onto_launch() {
        let stats = StatPoints {
            power: 22,
            loft: 50,
            wind: 6,
        };
        let params = stats.to_launch_params();
        assert_eq!(params.power, 22.0);
        assert_eq!(params.angle, LaunchAngle::Loft(50.0));
        assert!((params.angle.degrees() - 45.0).abs() < 1e-4);
        assert_eq!(params.wind, 6.0);
    }
}
