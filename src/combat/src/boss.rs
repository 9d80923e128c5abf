// src/combat/src/boss.rs

use crate::combatant::Combatant;

/// 最终楼层出口处的大天使
///
/// 每次遭遇都重新创建，不写入存档。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Archangel {
    pub health: i32,
    pub attack_power: i32,
}

impl Archangel {
    pub const NAME: &'static str = "the Archangel";
    pub const HEALTH: i32 = 15;
    pub const ATTACK: i32 = 10;

    pub fn new() -> Self {
        Self {
            health: Self::HEALTH,
            attack_power: Self::ATTACK,
        }
    }
}

impl Default for Archangel {
    fn default() -> Self {
        Self::new()
    }
}

impl Combatant for Archangel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}
