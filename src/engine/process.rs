//! Game processes: a grid bound to an observer with registered players.

use image::RgbaImage;

use crate::error::{DocError, Result};

use super::grid::Grid;
use super::observer::Observer;
use super::ObserverType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Created,
    Initialized,
    Reset,
}

/// A player registered with a game process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub observer_type: ObserverType,
}

/// A running game on a single grid.
///
/// Call [`release`](GameProcess::release) as soon as the frame has been
/// captured; the process holds the scaled textures and the last frame.
pub struct GameProcess {
    grid: Grid,
    observer: Box<dyn Observer>,
    players: Vec<Player>,
    state: State,
    frame: Option<RgbaImage>,
}

impl GameProcess {
    pub(crate) fn new(grid: Grid, observer: Box<dyn Observer>) -> Self {
        Self {
            grid,
            observer,
            players: Vec::new(),
            state: State::Created,
            frame: None,
        }
    }

    /// The observer mode of the global observation.
    pub fn observer_type(&self) -> ObserverType {
        self.observer.observer_type()
    }

    /// Players registered so far.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Register a player and return its id (starting at 1).
    pub fn register_player(
        &mut self,
        name: impl Into<String>,
        observer_type: ObserverType,
    ) -> Result<u32> {
        if self.state != State::Created {
            return Err(engine_error("Players must be registered before init"));
        }

        let expected = self.grid.player_count();
        if self.players.len() as u32 >= expected {
            return Err(engine_error(format!(
                "Cannot register more than {} player(s)",
                expected
            )));
        }

        let id = self.players.len() as u32 + 1;
        self.players.push(Player {
            id,
            name: name.into(),
            observer_type,
        });
        Ok(id)
    }

    /// Initialise the game. Every player slot must be filled.
    pub fn init(&mut self) -> Result<()> {
        let expected = self.grid.player_count();
        if self.players.len() as u32 != expected {
            return Err(DocError::Engine {
                message: format!(
                    "Game needs {} player(s) but {} registered",
                    expected,
                    self.players.len()
                ),
                help: Some("Register one player per slot before calling init".to_string()),
            });
        }

        self.state = State::Initialized;
        Ok(())
    }

    /// Reset to the level's initial state and render it.
    pub fn reset(&mut self) -> Result<()> {
        if self.state == State::Created {
            return Err(engine_error("Game must be initialised before reset"));
        }

        self.frame = Some(self.observer.render(&self.grid));
        self.state = State::Reset;
        Ok(())
    }

    /// Copy of the frame rendered by the last reset.
    pub fn observe(&self) -> Result<RgbaImage> {
        self.frame
            .clone()
            .ok_or_else(|| engine_error("Game must be reset before it can be observed"))
    }

    /// Release the textures and frame held by this process.
    pub fn release(self) {
        let GameProcess {
            observer, frame, ..
        } = self;
        drop(frame);
        drop(observer);
    }
}

fn engine_error(message: impl Into<String>) -> DocError {
    DocError::Engine {
        message: message.into(),
        help: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameDescription;
    use crate::gdy::Gdy;

    fn description() -> GameDescription {
        GameDescription::from_gdy(
            Gdy::parse(
                r#"
Environment:
  Name: Process
  TileSize: 4
Objects:
  - Name: avatar
    MapCharacter: A
    Block:
      Color: [0.0, 1.0, 0.0]
      Shape: square
"#,
            )
            .unwrap(),
            vec![],
        )
    }

    #[test]
    fn test_full_lifecycle() {
        let grid = description().load_level_string("A1.A2\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();

        assert_eq!(game.observer_type(), ObserverType::Block2D);
        assert_eq!(game.register_player("P0", ObserverType::Block2D).unwrap(), 1);
        assert_eq!(game.register_player("P1", ObserverType::Block2D).unwrap(), 2);
        game.init().unwrap();
        game.reset().unwrap();

        let frame = game.observe().unwrap();
        game.release();

        assert_eq!(frame.dimensions(), (12, 4));
        assert_eq!(frame.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(frame.get_pixel(4, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_init_requires_all_players() {
        let grid = description().load_level_string("A1A2\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();
        game.register_player("P0", ObserverType::Block2D).unwrap();

        assert!(game.init().is_err());
    }

    #[test]
    fn test_register_too_many_players() {
        let grid = description().load_level_string("A\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();
        game.register_player("P0", ObserverType::Block2D).unwrap();

        assert!(game.register_player("P1", ObserverType::Block2D).is_err());
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_reset_before_init_fails() {
        let grid = description().load_level_string("A\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();

        assert!(game.reset().is_err());
    }

    #[test]
    fn test_observe_before_reset_fails() {
        let grid = description().load_level_string("A\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();
        game.register_player("P0", ObserverType::Block2D).unwrap();
        game.init().unwrap();

        assert!(game.observe().is_err());
    }

    #[test]
    fn test_register_after_init_fails() {
        let grid = description().load_level_string("A\n").unwrap();
        let mut game = grid.create_game(ObserverType::Block2D).unwrap();
        game.register_player("P0", ObserverType::Block2D).unwrap();
        game.init().unwrap();

        assert!(game.register_player("P1", ObserverType::Block2D).is_err());
    }
}
