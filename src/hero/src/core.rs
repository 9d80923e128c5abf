// src/hero/src/core.rs
use dungeon::{Coord, RandomSource};
use log::info;
use thiserror::Error;

use crate::recruit::{Recruit, TAVERN_POOL};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeroError {
    #[error("队伍已满（最多 {max} 名队员）")]
    TeamFull { max: usize },
}

/// 英雄核心数据结构
///
/// `position` 只是坐标，不持有房间；房间归会话中的当前楼层所有。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub health: i32,
    pub attack_power: i32,
    pub position: Coord,
    /// 按招募顺序排列，最早加入的在前
    team: Vec<Recruit>,
}

impl Hero {
    /// 队伍人数上限
    pub const MAX_TEAM: usize = 3;
    pub const START_HEALTH: i32 = 3;
    pub const START_ATTACK: i32 = 3;

    /// 新游戏的英雄：3 点生命、3 点攻击，站在入口
    pub fn new() -> Self {
        Self::with_stats(Self::START_HEALTH, Self::START_ATTACK, Coord::START)
    }

    pub fn with_stats(health: i32, attack_power: i32, position: Coord) -> Self {
        Self {
            health,
            attack_power,
            position,
            team: Vec::with_capacity(Self::MAX_TEAM),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn team(&self) -> &[Recruit] {
        &self.team
    }

    pub fn team_mut(&mut self) -> &mut [Recruit] {
        &mut self.team
    }

    pub fn is_team_full(&self) -> bool {
        self.team.len() >= Self::MAX_TEAM
    }

    /// 加入一名队员
    pub fn recruit(&mut self, recruit: Recruit) -> Result<(), HeroError> {
        if self.is_team_full() {
            return Err(HeroError::TeamFull {
                max: Self::MAX_TEAM,
            });
        }
        self.team.push(recruit);
        Ok(())
    }

    /// 在酒馆从固定名单中随机招募一人；队伍已满时不掷骰
    pub fn recruit_from_tavern(&mut self, rng: &mut dyn RandomSource) -> Result<Recruit, HeroError> {
        if self.is_team_full() {
            return Err(HeroError::TeamFull {
                max: Self::MAX_TEAM,
            });
        }
        let recruit = TAVERN_POOL[rng.index(TAVERN_POOL.len())].instantiate();
        self.recruit(recruit.clone())?;
        info!("{} joined the party ({} members)", recruit.name, self.team.len());
        Ok(recruit)
    }

    /// 移除一名队员，其余队员保持原有顺序
    pub fn dismiss(&mut self, index: usize) -> Option<Recruit> {
        (index < self.team.len()).then(|| self.team.remove(index))
    }

    /// 队伍一回合的总伤害：英雄攻击力加上所有在队队员的攻击力
    pub fn party_attack(&self) -> i32 {
        self.attack_power + self.team.iter().map(|r| r.attack_power).sum::<i32>()
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}
