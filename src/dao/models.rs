use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::dao::{
    storage::{StorageError, StorageResult},
    store::EntityKind,
};

const ID_FIELD: &str = "_id";
const PLAYER1_FIELD: &str = "player1";
const PLAYER2_FIELD: &str = "player2";

/// Game session as persisted in the `games` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Identifier generated by the store on insert.
    pub id: ObjectId,
    /// Identifier of the first player.
    pub player1: String,
    /// Identifier of the second player.
    pub player2: String,
}

impl GameEntity {
    /// Build the document inserted for a new game; the store assigns `_id`.
    pub fn new_document(player1: &str, player2: &str) -> Document {
        doc! {
            "player1": player1,
            "player2": player2,
        }
    }
}

impl TryFrom<Document> for GameEntity {
    type Error = StorageError;

    fn try_from(document: Document) -> StorageResult<Self> {
        let malformed = |message: String| StorageError::Malformed {
            collection: EntityKind::Game.collection_name(),
            message,
        };

        let id = document
            .get_object_id(ID_FIELD)
            .map_err(|err| malformed(format!("{ID_FIELD}: {err}")))?;
        let player1 = document
            .get_str(PLAYER1_FIELD)
            .map_err(|err| malformed(format!("{PLAYER1_FIELD}: {err}")))?
            .to_owned();
        let player2 = document
            .get_str(PLAYER2_FIELD)
            .map_err(|err| malformed(format!("{PLAYER2_FIELD}: {err}")))?
            .to_owned();

        Ok(Self {
            id,
            player1,
            player2,
        })
    }
}

/// Parse a hex identifier produced by the store back into an ObjectId.
pub fn parse_object_id(id: &str) -> StorageResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StorageError::InvalidId { id: id.to_owned() })
}
