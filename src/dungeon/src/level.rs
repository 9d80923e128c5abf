//src/dungeon/src/level.rs
use error::GameError;

use crate::room::{Column, Coord, Room};

/// 表示地牢的一层：10x10 的房间网格
///
/// 房间按列优先存放，下标为 `column * 10 + (row - 1)`，按坐标查找是 O(1)。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Floor {
    number: u32,
    rooms: Vec<Room>,
}

impl Floor {
    pub const ROOM_COUNT: usize = Column::COUNT * Coord::ROWS as usize;

    /// 所有房间均为空的楼层
    pub fn blank(number: u32) -> Self {
        Self {
            number,
            rooms: Coord::all().map(|coord| Room::new(number, coord)).collect(),
        }
    }

    /// 从任意顺序的房间记录重建楼层
    ///
    /// 100 个坐标必须各出现一次，且所有房间属于同一层。
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, GameError> {
        let number = rooms
            .first()
            .map(|room| room.floor)
            .ok_or_else(|| GameError::corrupted("no rooms in grid"))?;

        let mut slots: Vec<Option<Room>> = vec![None; Self::ROOM_COUNT];
        for room in rooms {
            if room.floor != number {
                return Err(GameError::corrupted(format!(
                    "room {} belongs to floor {}, expected {}",
                    room.coord, room.floor, number
                )));
            }
            let slot = &mut slots[Self::slot(room.coord)];
            if slot.is_some() {
                return Err(GameError::corrupted(format!("duplicate room {}", room.coord)));
            }
            *slot = Some(room);
        }

        let rooms = slots
            .into_iter()
            .zip(Coord::all())
            .map(|(room, coord)| {
                room.ok_or_else(|| GameError::corrupted(format!("missing room {}", coord)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { number, rooms })
    }

    fn slot(coord: Coord) -> usize {
        coord.column.index() * Coord::ROWS as usize + (coord.row as usize - 1)
    }

    /// 楼层编号（从 1 开始）
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn room(&self, coord: Coord) -> &Room {
        &self.rooms[Self::slot(coord)]
    }

    pub fn room_mut(&mut self, coord: Coord) -> &mut Room {
        &mut self.rooms[Self::slot(coord)]
    }

    /// 按列优先顺序遍历房间
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// 仍有敌人的房间数量
    pub fn enemy_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.has_enemy).count()
    }

    /// 玩家当前所在的坐标
    pub fn player_coord(&self) -> Option<Coord> {
        self.rooms.iter().find(|room| room.has_player).map(|room| room.coord)
    }

    /// 把玩家放到某个房间：清除其他房间的占用标记，目标房间标记为已访问
    pub fn place_player(&mut self, coord: Coord) {
        for room in self.rooms.iter_mut().filter(|room| room.has_player) {
            room.has_player = false;
        }
        let room = self.room_mut(coord);
        room.has_player = true;
        room.visited = true;
    }
}
