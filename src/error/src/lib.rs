//! 游戏错误处理模块
//!
//! 处理存档读写、玩家输入等过程中可能出现的错误。失败不会跨组件传播为 panic，
//! 调用方拿到 `Result` 后决定是报告给玩家还是结束会话。

use std::path::PathBuf;
use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 存档文件无法打开或写入
    #[error("cannot access save file {}: {source}", path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 无法识别的菜单选项或移动方向
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 存档数据损坏
    #[error("Corrupted save data: {0}")]
    CorruptedSave(String),

    /// 坐标超出 A1..J10
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl GameError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::IoUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn corrupted(reason: impl Into<String>) -> Self {
        GameError::CorruptedSave(reason.into())
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::IoUnavailable { path, source } => match source.kind() {
            std::io::ErrorKind::NotFound => format!("Save file '{}' does not exist", path.display()),
            std::io::ErrorKind::PermissionDenied => {
                format!("No permission to access save file '{}'", path.display())
            }
            _ => format!("Could not open '{}': {}", path.display(), source),
        },
        GameError::CorruptedSave(reason) => format!("The save data is corrupted ({})", reason),
        GameError::InvalidInput(what) => format!("Invalid option: {}", what),
        _ => error.to_string(),
    }
}
