//! 游戏循环：主菜单与逐回合的交互
//!
//! 每个回合按固定阶段推进：
//! - 等待回车后掷骰
//! - 读取方向（空行会重新提示）
//! - 移动结算（可能触发房间事件、换层或 Boss 战）
//! - 会话仍在进行时渲染棋盘
//! - 检查掷骰次数上限

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dungeon::DungeonRng;
use log::{info, warn};
use save::SaveSystem;

use crate::input::{InputSource, MenuChoice, is_blank, parse_direction};
use crate::movement::{self, MoveOutcome};
use crate::renderer;
use crate::session::{Rules, Session};

/// 主游戏循环
pub struct GameLoop<I: InputSource, W: Write> {
    input: I,
    output: W,
    rng: DungeonRng,
    saves: SaveSystem,
    rules: Rules,
}

impl<I: InputSource, W: Write> GameLoop<I, W> {
    pub fn new(input: I, output: W, rng: DungeonRng, saves: SaveSystem, rules: Rules) -> Self {
        Self {
            input,
            output,
            rng,
            saves,
            rules,
        }
    }

    /// 取回输出（测试中用于检查打印内容）
    pub fn into_output(self) -> W {
        self.output
    }

    /// 显示主菜单并运行所选的会话，返回结束时的会话（如果有）
    pub fn run(&mut self) -> Result<Option<Session>> {
        writeln!(self.output, "{}", renderer::menu())?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;

        let Some(line) = self.input.read_line()? else {
            return Ok(None);
        };

        let mut session = match MenuChoice::parse(&line) {
            Ok(MenuChoice::NewGame) => {
                self.clear_screen()?;
                writeln!(self.output, "{}", renderer::intro())?;
                if !self.wait_for_enter("Press Enter to continue...")? {
                    return Ok(None);
                }
                self.clear_screen()?;
                info!("starting a new game");
                Session::new_game(self.rules, &mut self.rng)
            }
            Ok(MenuChoice::LoadGame) => {
                self.clear_screen()?;
                match Session::load(self.rules, &mut self.saves) {
                    Ok(session) => {
                        writeln!(self.output, "Saved game loaded.")?;
                        session
                    }
                    Err(e) => {
                        warn!("load failed: {}", e);
                        writeln!(self.output, "Could not load the saved game: {}", error::handle_error(&e))?;
                        return Ok(None);
                    }
                }
            }
            Ok(MenuChoice::Quit) => {
                self.clear_screen()?;
                writeln!(self.output, "Thanks for playing. See you soon!")?;
                return Ok(None);
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "Invalid option. Leaving the game.")?;
                return Ok(None);
            }
        };

        write!(self.output, "{}", renderer::board(&session))?;
        self.play(&mut session)?;
        Ok(Some(session))
    }

    /// 回合循环，直到会话结束或输入关闭
    pub fn play(&mut self, session: &mut Session) -> Result<()> {
        while session.is_active() {
            if !self.play_turn(session)? {
                info!("input closed, leaving the session");
                break;
            }
        }

        if let Some(verdict) = renderer::verdict(session.status) {
            writeln!(self.output, "\n{}", verdict)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// 执行一个回合；输入关闭时返回 false
    fn play_turn(&mut self, session: &mut Session) -> Result<bool> {
        if !self.wait_for_enter("\nPress Enter to roll the dice...")? {
            return Ok(false);
        }

        let throw = movement::throw_dice(session, &mut self.rng);
        writeln!(self.output, "\n{}", renderer::dice(&throw))?;
        let Some(line) = self.read_direction_line()? else {
            return Ok(false);
        };
        let direction = match parse_direction(&line) {
            Ok(direction) => Some(direction),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };

        let outcome = movement::advance(session, direction, throw.total(), &mut self.rng, &mut self.saves);
        for message in renderer::outcome(&outcome) {
            writeln!(self.output, "{}", message)?;
        }

        let show_board = matches!(outcome, MoveOutcome::Arrived { .. } | MoveOutcome::FloorTransition { .. });
        if show_board && session.is_active() {
            write!(self.output, "{}", renderer::board(session))?;
        }

        movement::enforce_throw_limit(session);
        Ok(true)
    }

    /// 读取方向输入；空行（只按了回车）不算方向，重新提示
    fn read_direction_line(&mut self) -> Result<Option<String>> {
        loop {
            write!(self.output, "Choose a direction to move (W, A, S, D): ")?;
            self.output.flush()?;

            match self.input.read_line()? {
                Some(line) if is_blank(&line) => continue,
                other => return Ok(other),
            }
        }
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.input.read_line()?.is_some())
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
