// src/hero/src/recruit.rs

/// 酒馆里可以招募的同伴
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recruit {
    pub name: String,
    pub health: i32,
    pub attack_power: i32,
}

impl Recruit {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// 招募模板
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecruitTemplate {
    pub name: &'static str,
    pub health: i32,
    pub attack_power: i32,
}

impl RecruitTemplate {
    pub fn instantiate(&self) -> Recruit {
        Recruit::new(self.name, self.health, self.attack_power)
    }
}

/// 酒馆的固定招募名单，名字不含空白以便写入存档
pub const TAVERN_POOL: [RecruitTemplate; 5] = [
    RecruitTemplate { name: "Brann", health: 5, attack_power: 5 },
    RecruitTemplate { name: "Ysolde", health: 6, attack_power: 4 },
    RecruitTemplate { name: "Pip", health: 1, attack_power: 1 },
    RecruitTemplate { name: "Kestrel", health: 4, attack_power: 6 },
    RecruitTemplate { name: "Maud", health: 2, attack_power: 4 },
];
