//! 会话状态：当前楼层、英雄、掷骰计数与胜负状态
//!
//! 会话独占当前楼层的网格。英雄只记录坐标，换层时新网格与英雄坐标在同一个
//! 方法里一起替换，不会出现指向旧楼层的位置。

use dungeon::{Coord, EnemyBudget, Floor, FloorGenerator, RandomSource, Room};
use error::GameError;
use hero::Hero;
use log::info;
use save::{PlayerRecord, SaveGateway};

/// 一局游戏的规则参数
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Boss 所在楼层
    pub final_floor: u32,
    /// 掷骰次数超过该值即告失败
    pub max_dice_throws: u32,
    /// 整局可布置的敌人总数
    pub enemy_cap: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            final_floor: dungeon::FINAL_FLOOR,
            max_dice_throws: 15,
            enemy_cap: dungeon::ENEMY_CAP,
        }
    }
}

/// 失败原因
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    /// 被房间里的敌人击败
    Slain,
    /// 被大天使击败
    SlainByBoss,
    /// 掷骰次数用尽
    DiceExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost(LossReason),
}

/// 游戏状态管理器
#[derive(Clone, Debug)]
pub struct Session {
    /// 当前楼层
    pub floor: Floor,
    /// 玩家角色
    pub hero: Hero,
    /// 本层已掷骰次数，换层时清零
    pub dice_throws: u32,
    /// 贯穿整局的敌人配额
    pub enemy_budget: EnemyBudget,
    pub status: GameStatus,
    pub rules: Rules,
}

impl Session {
    /// 新游戏：生成第一层，英雄站在 A1
    pub fn new_game(rules: Rules, rng: &mut dyn RandomSource) -> Self {
        let mut enemy_budget = EnemyBudget::new(rules.enemy_cap);
        let floor = FloorGenerator::generate(1, &mut enemy_budget, rng);
        Self::assemble(rules, floor, Hero::new(), 0, enemy_budget)
    }

    /// 用读档得到的网格和玩家数据恢复会话
    ///
    /// 楼层编号取自网格；敌人配额从零开始计数，与新启动的进程一致。
    pub fn restore(rules: Rules, floor: Floor, record: PlayerRecord) -> Self {
        Self::assemble(
            rules,
            floor,
            record.hero,
            record.dice_throws,
            EnemyBudget::new(rules.enemy_cap),
        )
    }

    /// 先读网格再读玩家，任一失败都不会产生会话
    pub fn load(rules: Rules, gateway: &mut dyn SaveGateway) -> Result<Self, GameError> {
        let floor = gateway.load_grid()?;
        let record = gateway.load_player()?;
        let session = Self::restore(rules, floor, record);
        info!(
            "restored session on floor {} at {}",
            session.floor_number(),
            session.hero.position
        );
        Ok(session)
    }

    fn assemble(
        rules: Rules,
        mut floor: Floor,
        hero: Hero,
        dice_throws: u32,
        enemy_budget: EnemyBudget,
    ) -> Self {
        floor.place_player(hero.position);
        Self {
            floor,
            hero,
            dice_throws,
            enemy_budget,
            status: GameStatus::Active,
            rules,
        }
    }

    pub fn floor_number(&self) -> u32 {
        self.floor.number()
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn is_final_floor(&self) -> bool {
        self.floor_number() >= self.rules.final_floor
    }

    pub fn current_room(&self) -> &Room {
        self.floor.room(self.hero.position)
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        self.floor.room_mut(self.hero.position)
    }

    /// 把英雄移到同层的另一个房间；旧房间只清除占用标记，访问标记保留
    pub fn relocate(&mut self, coord: Coord) {
        self.floor.place_player(coord);
        self.hero.position = coord;
    }

    /// 进入下一层：丢弃旧网格，生成新网格，掷骰计数清零，英雄回到 A1
    pub fn advance_floor(&mut self, rng: &mut dyn RandomSource) {
        let next = self.floor_number() + 1;
        let mut floor = FloorGenerator::generate(next, &mut self.enemy_budget, rng);
        floor.place_player(Coord::START);

        self.floor = floor;
        self.hero.position = Coord::START;
        self.dice_throws = 0;
        info!("descended to floor {}", next);
    }

    /// 写入玩家数据与整层网格
    pub fn save(&self, gateway: &mut dyn SaveGateway) -> Result<(), GameError> {
        gateway.save_player(&self.hero, self.dice_throws)?;
        gateway.save_grid(&self.floor)
    }

    pub fn finish(&mut self, status: GameStatus) {
        if self.is_active() {
            info!("session finished: {:?}", status);
            self.status = status;
        }
    }
}
