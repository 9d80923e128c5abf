pub mod config;
pub mod game_loop;
pub mod input;
pub mod movement;
pub mod renderer;
pub mod room_events;
pub mod session;
