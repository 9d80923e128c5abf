// src/combat/src/lib.rs
//! Turn-based fights between the party and a single opponent.

use dungeon::RandomSource;
use hero::Hero;
use log::{debug, info};

pub mod boss;
pub mod combatant;
pub mod enemy;

pub use crate::boss::Archangel;
pub use crate::combatant::{Combatant, HERO_NAME};
pub use crate::enemy::Enemy;


/// Combat configuration constants
mod constants {
    /// Minimum damage dealt by a single turn
    pub const MIN_DAMAGE: i32 = 1;
}

/// Which side acts on a given turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Party,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Party => Side::Opponent,
            Side::Opponent => Side::Party,
        }
    }
}

/// Handles combat between the party and one opponent
pub struct Combat;

impl Combat {
    /// Run a fight to completion.
    ///
    /// The opening side is a coin flip. On a party turn the hero and every
    /// recruit strike together; on an opponent turn one random member of
    /// the party (hero included) takes the hit. Recruits that drop to zero
    /// health leave the team at once. Turns alternate until one side is down.
    pub fn resolve<O>(hero: &mut Hero, opponent: &mut O, rng: &mut dyn RandomSource) -> CombatResult
    where
        O: Combatant + ?Sized,
    {
        let opening = if rng.coin() { Side::Party } else { Side::Opponent };
        let mut result = CombatResult::new(opening);
        let mut turn = opening;

        debug!(
            "combat vs {} ({} hp, {} atk), {:?} opens",
            opponent.name(),
            opponent.health(),
            opponent.attack_power(),
            opening
        );

        while hero.is_alive() && opponent.is_alive() {
            result.turns += 1;
            match turn {
                Side::Party => Self::party_turn(hero, opponent, &mut result),
                Side::Opponent => Self::opponent_turn(hero, opponent, rng, &mut result),
            }
            turn = turn.other();
        }

        result.winner = if hero.is_alive() {
            result.log(format!("{} has been defeated!", capitalize(opponent.name())));
            Side::Party
        } else {
            result.log(format!("{} has fallen.", HERO_NAME));
            Side::Opponent
        };

        info!(
            "combat vs {} finished after {} turns, winner {:?}",
            opponent.name(),
            result.turns,
            result.winner
        );
        result
    }

    fn party_turn<O>(hero: &Hero, opponent: &mut O, result: &mut CombatResult)
    where
        O: Combatant + ?Sized,
    {
        let damage = hero.party_attack().max(constants::MIN_DAMAGE);
        opponent.take_damage(damage);
        result.log(format!(
            "Your party deals {} damage to {} ({} hp left).",
            damage,
            opponent.name(),
            opponent.health()
        ));
    }

    fn opponent_turn<O>(
        hero: &mut Hero,
        opponent: &O,
        rng: &mut dyn RandomSource,
        result: &mut CombatResult,
    ) where
        O: Combatant + ?Sized,
    {
        let damage = opponent.attack_power().max(constants::MIN_DAMAGE);
        // 0 is the hero, 1.. are recruits in recruitment order
        let target = rng.index(1 + hero.team().len());

        if target == 0 {
            hero.take_damage(damage);
            result.log(format!(
                "{} hits {} for {} damage ({} hp left).",
                capitalize(opponent.name()),
                HERO_NAME,
                damage,
                hero.health
            ));
            return;
        }

        let index = target - 1;
        let recruit = &mut hero.team_mut()[index];
        recruit.take_damage(damage);
        result.log(format!(
            "{} hits {} for {} damage.",
            capitalize(opponent.name()),
            recruit.name,
            damage
        ));

        if !recruit.is_alive() {
            if let Some(fallen) = hero.dismiss(index) {
                result.log(format!("{} has been defeated.", fallen.name));
                result.fallen.push(fallen.name);
            }
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>,   // Combat messages for UI
    pub opening: Side,       // Side that acted first
    pub winner: Side,        // Side left standing
    pub turns: u32,          // Turns played
    pub fallen: Vec<String>, // Recruits lost during the fight
}

impl CombatResult {
    fn new(opening: Side) -> Self {
        Self {
            logs: Vec::new(),
            opening,
            winner: Side::Party,
            turns: 0,
            fallen: Vec::new(),
        }
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    /// Whether the opponent was defeated
    pub fn party_won(&self) -> bool {
        self.winner == Side::Party
    }
}
