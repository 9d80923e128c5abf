//src/dungeon/src/room.rs
use std::fmt;
use std::str::FromStr;

use error::GameError;
use strum::{EnumIter, IntoEnumIterator};

/// 网格的列 (A-J)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, strum::Display)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl Column {
    pub const COUNT: usize = 10;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Column::iter().nth(index)
    }

    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Self::from_index((letter as u8 - b'A') as usize)
        } else {
            None
        }
    }
}

/// 移动方向，对应 W/S/A/D 键
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 大小写敏感：只接受大写的 W/A/S/D
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'W' => Some(Direction::Up),
            'S' => Some(Direction::Down),
            'A' => Some(Direction::Left),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Direction::Up => 'W',
            Direction::Down => 'S',
            Direction::Left => 'A',
            Direction::Right => 'D',
        }
    }
}

/// 网格坐标，行号 1-10
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub column: Column,
    pub row: u8,
}

impl Coord {
    pub const ROWS: u8 = 10;
    /// 每层的入口
    pub const START: Coord = Coord {
        column: Column::A,
        row: 1,
    };
    /// 每层的出口（最终层为 Boss 房间）
    pub const EXIT: Coord = Coord {
        column: Column::J,
        row: 10,
    };

    pub fn new(column: Column, row: u8) -> Option<Self> {
        (1..=Self::ROWS).contains(&row).then_some(Self { column, row })
    }

    /// 向某方向走一步，越界的一步被吸收（坐标不变）
    pub fn step(self, direction: Direction) -> Coord {
        let col = self.column.index();
        match direction {
            Direction::Up if self.row > 1 => Coord {
                row: self.row - 1,
                ..self
            },
            Direction::Down if self.row < Self::ROWS => Coord {
                row: self.row + 1,
                ..self
            },
            Direction::Left if col > 0 => Coord {
                column: Column::from_index(col - 1).unwrap_or(self.column),
                ..self
            },
            Direction::Right if col + 1 < Column::COUNT => Coord {
                column: Column::from_index(col + 1).unwrap_or(self.column),
                ..self
            },
            _ => self,
        }
    }

    /// 按列优先、行升序遍历全部 100 个坐标 (A1..A10, B1..B10, ...)
    pub fn all() -> impl Iterator<Item = Coord> {
        Column::iter().flat_map(|column| (1..=Self::ROWS).map(move |row| Coord { column, row }))
    }

    pub fn is_exit(self) -> bool {
        self == Self::EXIT
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column.letter(), self.row)
    }
}

impl FromStr for Coord {
    type Err = GameError;

    /// 解析 "C7" / "J10" 形式的坐标
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());
        let mut chars = s.chars();
        let column = chars.next().and_then(Column::from_letter).ok_or_else(invalid)?;
        let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        Coord::new(column, row).ok_or_else(invalid)
    }
}

/// 网格中的一个房间
///
/// 事件标记一旦被消耗就会被清除（存档点除外，它可以重复使用）。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub floor: u32,
    pub coord: Coord,
    pub has_player: bool,
    pub visited: bool,
    pub has_enemy: bool,
    pub has_save_point: bool,
    pub has_tavern: bool,
    pub has_chest: bool,
    pub enemy_health: i32,
    pub enemy_attack: i32,
    /// 宝箱内容 1-3，没有宝箱时为 0
    pub chest_content: u8,
}

impl Room {
    /// 空房间
    pub fn new(floor: u32, coord: Coord) -> Self {
        Self {
            floor,
            coord,
            has_player: false,
            visited: false,
            has_enemy: false,
            has_save_point: false,
            has_tavern: false,
            has_chest: false,
            enemy_health: 0,
            enemy_attack: 0,
            chest_content: 0,
        }
    }

    /// 放置一个与楼层强度相符的敌人
    pub fn place_enemy(&mut self) {
        self.has_enemy = true;
        self.enemy_health = self.floor as i32 + 1;
        self.enemy_attack = self.floor as i32;
    }

    pub fn place_chest(&mut self, content: u8) {
        self.has_chest = true;
        self.chest_content = content;
    }

    /// 是否还有未触发的事件
    pub fn has_event(&self) -> bool {
        self.has_enemy || self.has_save_point || self.has_tavern || self.has_chest
    }
}
