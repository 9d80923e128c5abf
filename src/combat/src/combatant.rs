// src/combat/src/combatant.rs

use hero::{Hero, Recruit};

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值（可能被打成负数）
    fn health(&self) -> i32;

    /// 获取攻击力
    fn attack_power(&self) -> i32;

    /// 造成伤害
    fn take_damage(&mut self, amount: i32);

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

/// 玩家角色的名字
pub const HERO_NAME: &str = "Erresire";

impl Combatant for Hero {
    fn name(&self) -> &str {
        HERO_NAME
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

impl Combatant for Recruit {
    fn name(&self) -> &str {
        &self.name
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
