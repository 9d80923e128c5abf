// src/save/src/lib.rs
//! 存档系统：把当前楼层与玩家数据写成两个文本文件

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use dungeon::Floor;
use error::GameError;
use hero::Hero;
use log::info;

mod format;

pub use crate::format::{PlayerRecord, decode_grid, decode_player, encode_grid, encode_player};

/// 默认的房间存档文件名
pub const GRID_FILE: &str = "celdas.txt";
/// 默认的玩家存档文件名
pub const PLAYER_FILE: &str = "jugador.txt";

/// 存档网关
///
/// 核心状态机只通过这个接口读写存档，测试中可以替换为内存实现。
pub trait SaveGateway {
    /// 保存整层网格
    fn save_grid(&mut self, floor: &Floor) -> Result<(), GameError>;

    /// 读取网格，替换调用方当前的整层
    fn load_grid(&mut self) -> Result<Floor, GameError>;

    /// 保存英雄、队伍与掷骰次数
    fn save_player(&mut self, hero: &Hero, dice_throws: u32) -> Result<(), GameError>;

    fn load_player(&mut self) -> Result<PlayerRecord, GameError>;
}

/// 基于文件的存档系统
#[derive(Debug, Clone)]
pub struct SaveSystem {
    save_dir: PathBuf,
    grid_file: String,
    player_file: String,
}

impl SaveSystem {
    /// 使用默认文件名初始化存档系统
    pub fn new(save_dir: impl AsRef<Path>) -> Self {
        Self::with_files(save_dir, GRID_FILE, PLAYER_FILE)
    }

    pub fn with_files(
        save_dir: impl AsRef<Path>,
        grid_file: impl Into<String>,
        player_file: impl Into<String>,
    ) -> Self {
        Self {
            save_dir: save_dir.as_ref().to_path_buf(),
            grid_file: grid_file.into(),
            player_file: player_file.into(),
        }
    }

    /// 获取存档目录路径
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn grid_path(&self) -> PathBuf {
        self.save_dir.join(&self.grid_file)
    }

    pub fn player_path(&self) -> PathBuf {
        self.save_dir.join(&self.player_file)
    }

    /// 检查是否存在完整的存档
    pub fn has_save(&self) -> bool {
        self.grid_path().is_file() && self.player_path().is_file()
    }

    /// 先写临时文件再重命名，避免留下写了一半的存档
    fn write_atomic(path: &Path, contents: &str) -> Result<(), GameError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GameError::io(parent, e))?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| GameError::io(&temp_path, e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| GameError::io(&temp_path, e))?;

        // 原子性重命名
        fs::rename(&temp_path, path).map_err(|e| GameError::io(path, e))
    }

    fn read(path: &Path) -> Result<String, GameError> {
        fs::read_to_string(path).map_err(|e| GameError::io(path, e))
    }
}

impl SaveGateway for SaveSystem {
    fn save_grid(&mut self, floor: &Floor) -> Result<(), GameError> {
        let path = self.grid_path();
        Self::write_atomic(&path, &encode_grid(floor))?;
        info!("saved floor {} to {}", floor.number(), path.display());
        Ok(())
    }

    fn load_grid(&mut self) -> Result<Floor, GameError> {
        let path = self.grid_path();
        let floor = decode_grid(&Self::read(&path)?)?;
        info!("loaded floor {} from {}", floor.number(), path.display());
        Ok(floor)
    }

    fn save_player(&mut self, hero: &Hero, dice_throws: u32) -> Result<(), GameError> {
        let path = self.player_path();
        Self::write_atomic(&path, &encode_player(hero, dice_throws))?;
        info!("saved player at {} to {}", hero.position, path.display());
        Ok(())
    }

    fn load_player(&mut self) -> Result<PlayerRecord, GameError> {
        let path = self.player_path();
        let record = decode_player(&Self::read(&path)?)?;
        info!("loaded player at {} from {}", record.hero.position, path.display());
        Ok(record)
    }
}
