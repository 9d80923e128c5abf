// src/save/src/format.rs
//! 存档的文本格式
//!
//! 房间：每行一条记录
//! `floor column row visited hasEnemy hasSavePoint hasTavern hasChest enemyHealth enemyAttack chestContent`，
//! 布尔值写作 0/1。
//!
//! 玩家：生命、攻击、位置（如 `C7`）、队伍人数，随后每名队员的名字、生命、攻击，
//! 最后一行是掷骰次数。每个值占一行。

use std::str::{FromStr, SplitWhitespace};

use dungeon::{Column, Coord, Floor, Room};
use error::GameError;
use hero::{Hero, Recruit};

/// 读档得到的玩家数据
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub hero: Hero,
    pub dice_throws: u32,
}

const ROOM_FIELDS: usize = 11;

fn flag(value: bool) -> u8 {
    value as u8
}

pub fn encode_grid(floor: &Floor) -> String {
    let mut out = String::with_capacity(floor.len() * 32);
    for room in floor.rooms() {
        out.push_str(&format!(
            "{} {} {} {} {} {} {} {} {} {} {}\n",
            room.floor,
            room.coord.column.letter(),
            room.coord.row,
            flag(room.visited),
            flag(room.has_enemy),
            flag(room.has_save_point),
            flag(room.has_tavern),
            flag(room.has_chest),
            room.enemy_health,
            room.enemy_attack,
            room.chest_content
        ));
    }
    out
}

pub fn decode_grid(text: &str) -> Result<Floor, GameError> {
    let rooms = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| decode_room(number + 1, line))
        .collect::<Result<Vec<_>, _>>()?;
    Floor::from_rooms(rooms)
}

fn decode_room(line_number: usize, line: &str) -> Result<Room, GameError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != ROOM_FIELDS {
        return Err(GameError::corrupted(format!(
            "line {}: expected {} fields, found {}",
            line_number,
            ROOM_FIELDS,
            fields.len()
        )));
    }

    let bad = |what: &str| GameError::corrupted(format!("line {}: bad {}", line_number, what));
    let number = |index: usize, what: &str| fields[index].parse::<i32>().map_err(|_| bad(what));
    let boolean = |index: usize, what: &str| match fields[index] {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(bad(what)),
    };

    let floor: u32 = fields[0].parse().map_err(|_| bad("floor"))?;
    let column = single_char(fields[1])
        .and_then(Column::from_letter)
        .ok_or_else(|| bad("column"))?;
    let row: u8 = fields[2].parse().map_err(|_| bad("row"))?;
    let coord = Coord::new(column, row).ok_or_else(|| bad("row"))?;
    let chest_content: u8 = fields[10].parse().map_err(|_| bad("chest content"))?;

    Ok(Room {
        floor,
        coord,
        has_player: false,
        visited: boolean(3, "visited flag")?,
        has_enemy: boolean(4, "enemy flag")?,
        has_save_point: boolean(5, "save point flag")?,
        has_tavern: boolean(6, "tavern flag")?,
        has_chest: boolean(7, "chest flag")?,
        enemy_health: number(8, "enemy health")?,
        enemy_attack: number(9, "enemy attack")?,
        chest_content,
    })
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn encode_player(hero: &Hero, dice_throws: u32) -> String {
    let mut lines = vec![
        hero.health.to_string(),
        hero.attack_power.to_string(),
        hero.position.to_string(),
        hero.team().len().to_string(),
    ];
    for recruit in hero.team() {
        lines.push(recruit.name.clone());
        lines.push(recruit.health.to_string());
        lines.push(recruit.attack_power.to_string());
    }
    lines.push(dice_throws.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// 按空白切分的读取器
struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T, GameError> {
        let raw = self
            .inner
            .next()
            .ok_or_else(|| GameError::corrupted(format!("missing {}", what)))?;
        raw.parse()
            .map_err(|_| GameError::corrupted(format!("bad {}: '{}'", what, raw)))
    }
}

pub fn decode_player(text: &str) -> Result<PlayerRecord, GameError> {
    let mut fields = Fields::new(text);

    let health: i32 = fields.next("health")?;
    let attack_power: i32 = fields.next("attack power")?;
    let position: Coord = fields.next("position")?;
    let team_size: usize = fields.next("team size")?;
    if team_size > Hero::MAX_TEAM {
        return Err(GameError::corrupted(format!(
            "team of {} exceeds {}",
            team_size,
            Hero::MAX_TEAM
        )));
    }

    let mut hero = Hero::with_stats(health, attack_power, position);
    for _ in 0..team_size {
        let name: String = fields.next("recruit name")?;
        let health: i32 = fields.next("recruit health")?;
        let attack_power: i32 = fields.next("recruit attack")?;
        hero.recruit(Recruit::new(name, health, attack_power))
            .map_err(|e| GameError::corrupted(e.to_string()))?;
    }

    let dice_throws: u32 = fields.next("dice throw count")?;
    Ok(PlayerRecord { hero, dice_throws })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::TAVERN_POOL;
    use pretty_assertions::assert_eq;

    #[test]
    fn room_lines_use_documented_layout() {
        let mut floor = Floor::blank(4);
        let c7: Coord = "C7".parse().unwrap();
        floor.room_mut(c7).place_enemy();
        floor.room_mut(c7).place_chest(2);
        floor.room_mut(c7).visited = true;

        let text = encode_grid(&floor);
        assert_eq!(text.lines().count(), 100);
        assert_eq!(text.lines().next(), Some("4 A 1 0 0 0 0 0 0 0 0"));
        assert!(text.lines().any(|line| line == "4 C 7 1 1 0 0 1 5 4 2"));
    }

    #[test]
    fn occupancy_is_not_persisted() {
        let mut floor = Floor::blank(1);
        floor.place_player(Coord::START);
        let decoded = decode_grid(&encode_grid(&floor)).unwrap();
        assert_eq!(decoded.player_coord(), None);
        assert!(decoded.room(Coord::START).visited);
    }

    #[test]
    fn grid_rejects_malformed_lines() {
        let mut text = encode_grid(&Floor::blank(1));
        text = text.replacen("1 A 1 0", "1 A 1 7", 1);
        assert!(matches!(decode_grid(&text), Err(GameError::CorruptedSave(_))));

        assert!(decode_grid("1 A 1 0 0\n").is_err());
        assert!(decode_grid("").is_err());
    }

    #[test]
    fn player_record_layout() {
        let mut hero = Hero::with_stats(7, 9, "C7".parse().unwrap());
        hero.recruit(TAVERN_POOL[1].instantiate()).unwrap();

        let text = encode_player(&hero, 4);
        assert_eq!(text, "7\n9\nC7\n1\nYsolde\n6\n4\n4\n");

        let record = decode_player(&text).unwrap();
        assert_eq!(record.hero, hero);
        assert_eq!(record.dice_throws, 4);
    }

    #[test]
    fn player_record_without_team() {
        let text = encode_player(&Hero::new(), 0);
        assert_eq!(text, "3\n3\nA1\n0\n0\n");
        assert_eq!(decode_player(&text).unwrap().hero, Hero::new());
    }

    #[test]
    fn player_record_rejects_oversized_team() {
        let text = "3\n3\nA1\n4\n";
        assert!(decode_player(text).is_err());
    }

    #[test]
    fn player_record_rejects_truncation() {
        assert!(decode_player("3\n3\nA1\n1\nBrann\n5\n").is_err());
        assert!(decode_player("3\n3\nZ9\n0\n0\n").is_err());
    }
}
