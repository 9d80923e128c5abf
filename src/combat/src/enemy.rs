// src/combat/src/enemy.rs

use dungeon::Room;

use crate::combatant::Combatant;

/// 房间里的敌人，属性取自房间记录
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub health: i32,
    pub attack_power: i32,
}

impl Enemy {
    pub fn new(health: i32, attack_power: i32) -> Self {
        Self {
            health,
            attack_power,
        }
    }

    pub fn from_room(room: &Room) -> Self {
        Self::new(room.enemy_health, room.enemy_attack)
    }

    /// 战斗结束后把剩余生命写回房间
    pub fn write_back(&self, room: &mut Room) {
        room.enemy_health = self.health;
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        "the enemy"
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
