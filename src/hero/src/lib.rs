// src/hero/src/lib.rs
//! 英雄与队伍：生命、攻击、招募以及宝箱效果

mod core;
mod effects;
mod recruit;

pub use self::{
    core::{Hero, HeroError},
    effects::ChestEffect,
    recruit::{Recruit, RecruitTemplate, TAVERN_POOL},
};
