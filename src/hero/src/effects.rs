// src/hero/src/effects.rs
use log::debug;

use crate::core::Hero;

/// 宝箱带来的效果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChestEffect {
    /// 武器：英雄攻击 +5，每名队员攻击 +2
    Weapon,
    /// 全队生命 +1
    Vitality,
    /// 英雄恢复当前生命的 10%（向下取整），至少 1 点
    Recovery { healed: i32 },
}

impl ChestEffect {
    pub const WEAPON_HERO_BONUS: i32 = 5;
    pub const WEAPON_TEAM_BONUS: i32 = 2;
}

impl Hero {
    /// 打开宝箱，内容 1-3 以外的值没有效果
    pub fn open_chest(&mut self, content: u8) -> Option<ChestEffect> {
        let effect = match content {
            1 => {
                self.attack_power += ChestEffect::WEAPON_HERO_BONUS;
                for recruit in self.team_mut() {
                    recruit.attack_power += ChestEffect::WEAPON_TEAM_BONUS;
                }
                ChestEffect::Weapon
            }
            2 => {
                self.health += 1;
                for recruit in self.team_mut() {
                    recruit.health += 1;
                }
                ChestEffect::Vitality
            }
            3 => {
                let healed = (self.health / 10).max(1);
                self.health += healed;
                ChestEffect::Recovery { healed }
            }
            _ => return None,
        };
        debug!("chest {} opened: {:?}", content, effect);
        Some(effect)
    }
}
