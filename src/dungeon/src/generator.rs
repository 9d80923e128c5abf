//src/dungeon/src/generator.rs
use log::debug;

use crate::level::Floor;
use crate::rng::RandomSource;
use crate::room::Coord;

/// 事件布置概率（1/n）
mod constants {
    pub const ENEMY_ONE_IN: u32 = 10;
    pub const SAVE_POINT_ONE_IN: u32 = 10;
    pub const TAVERN_ONE_IN: u32 = 10;
    pub const CHEST_ONE_IN: u32 = 4;
    /// 宝箱内容取值 1..=3
    pub const CHEST_KINDS: u32 = 3;
}

/// 整局游戏中允许布置的敌人总数
pub const ENEMY_CAP: u32 = 10;

/// 敌人配额
///
/// 计数贯穿整个会话，换层时不会重置：配额用完后，后面的楼层不再出现敌人。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyBudget {
    placed: u32,
    cap: u32,
}

impl EnemyBudget {
    pub fn new(cap: u32) -> Self {
        Self { placed: 0, cap }
    }

    /// 已布置的敌人数
    pub fn placed(&self) -> u32 {
        self.placed
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn remaining(&self) -> u32 {
        self.cap.saturating_sub(self.placed)
    }

    pub fn is_exhausted(&self) -> bool {
        self.placed >= self.cap
    }

    /// 占用一个名额，配额已满时返回 false
    fn try_take(&mut self) -> bool {
        if self.is_exhausted() {
            false
        } else {
            self.placed += 1;
            true
        }
    }
}

impl Default for EnemyBudget {
    fn default() -> Self {
        Self::new(ENEMY_CAP)
    }
}

/// 楼层生成器
pub struct FloorGenerator;

impl FloorGenerator {
    /// 生成一整层 100 个房间，每个房间独立抽取各类事件
    ///
    /// 事件之间互不排斥，同一房间可能同时有敌人、存档点、酒馆和宝箱。
    pub fn generate(number: u32, budget: &mut EnemyBudget, rng: &mut dyn RandomSource) -> Floor {
        let mut floor = Floor::blank(number);

        for coord in Coord::all() {
            let room = floor.room_mut(coord);

            // 先掷骰再检查配额，保证随机序列与配额状态无关
            if rng.one_in(constants::ENEMY_ONE_IN) && budget.try_take() {
                room.place_enemy();
            }
            if rng.one_in(constants::SAVE_POINT_ONE_IN) {
                room.has_save_point = true;
            }
            if rng.one_in(constants::TAVERN_ONE_IN) {
                room.has_tavern = true;
            }
            if rng.one_in(constants::CHEST_ONE_IN) {
                room.place_chest(rng.die(constants::CHEST_KINDS) as u8);
            }
        }

        debug!(
            "generated floor {}: {} enemies, {} of {} enemy slots used",
            number,
            floor.enemy_count(),
            budget.placed(),
            budget.cap()
        );
        floor
    }
}
