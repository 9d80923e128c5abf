//src/dungeon/src/lib.rs
//! 地牢网格：房间、楼层以及楼层生成

pub mod generator;
pub mod level;
pub mod rng;
pub mod room;

pub use crate::generator::{ENEMY_CAP, EnemyBudget, FloorGenerator};
pub use crate::level::Floor;
pub use crate::rng::{DungeonRng, RandomSource};
pub use crate::room::{Column, Coord, Direction, Room};

/// Boss 所在的最终楼层
pub const FINAL_FLOOR: u32 = 10;
