use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::GameEntity;

/// Payload used to start a new game session.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartGame {
    /// Identifier of the player opening the game.
    pub player: String,
}

/// Game session returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Game {
    /// Identifier generated by the store on creation.
    pub id: String,
    /// Identifier of the first player.
    pub player1: String,
    /// Identifier of the second player.
    pub player2: String,
}

impl From<GameEntity> for Game {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id.to_hex(),
            player1: value.player1,
            player2: value.player2,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    use super::*;

    #[test]
    fn start_game_ignores_unknown_fields() {
        let request: StartGame =
            serde_json::from_value(json!({"player": "alice", "color": "red"})).unwrap();
        assert_eq!(request.player, "alice");
    }

    #[test]
    fn start_game_requires_string_player() {
        assert!(serde_json::from_value::<StartGame>(json!({})).is_err());
        assert!(serde_json::from_value::<StartGame>(json!({"player": 7})).is_err());
    }

    #[test]
    fn game_serializes_hex_id() {
        let id = ObjectId::new();
        let game: Game = GameEntity {
            id,
            player1: "alice".into(),
            player2: "alice".into(),
        }
        .into();

        assert_eq!(
            serde_json::to_value(&game).unwrap(),
            json!({"id": id.to_hex(), "player1": "alice", "player2": "alice"})
        );
    }
}
