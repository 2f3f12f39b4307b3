use tracing::{error, info};

use crate::{
    dao::{models::GameEntity, storage::StorageError, store::EntityKind},
    dto::game::{Game, StartGame},
    error::ServiceError,
    state::SharedState,
};

/// Persist a new game for the requesting player and return it as stored.
///
/// Both player slots receive the submitted identifier; there is no join step for a
/// second player yet.
pub async fn start_game(state: &SharedState, request: StartGame) -> Result<Game, ServiceError> {
    let store = state.store();
    let document = GameEntity::new_document(&request.player, &request.player);

    let id = store.insert(EntityKind::Game, document).await?;
    info!(%id, player = %request.player, "game created");

    let stored = store
        .get(EntityKind::Game, id.clone())
        .await
        .map_err(|err| read_back_error(&id, err))?;
    let game = GameEntity::try_from(stored).map_err(|err| read_back_error(&id, err))?;

    Ok(game.into())
}

/// Fetch a previously created game by its identifier.
pub async fn get_game(state: &SharedState, id: String) -> Result<Game, ServiceError> {
    let stored = state.store().get(EntityKind::Game, id).await?;
    let game = GameEntity::try_from(stored)?;
    Ok(game.into())
}

/// A document that was just inserted must be readable; anything else is a server fault.
fn read_back_error(id: &str, err: StorageError) -> ServiceError {
    match err {
        StorageError::Unavailable { .. } => ServiceError::Unavailable(err),
        other => {
            error!(%id, error = %other, "created game could not be read back");
            ServiceError::Internal(format!("game `{id}` could not be read back: {other}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;
    use mongodb::bson::{Document, doc};

    use super::*;
    use crate::{
        dao::{
            memory::MemoryDocumentStore,
            storage::StorageResult,
            store::DocumentStore,
        },
        state::AppState,
    };

    /// Store that accepts inserts but never finds anything afterwards.
    struct ForgetfulStore;

    impl DocumentStore for ForgetfulStore {
        fn insert(&self, _: EntityKind, _: Document) -> BoxFuture<'static, StorageResult<String>> {
            Box::pin(async { Ok("65f000000000000000000000".to_owned()) })
        }

        fn get(&self, kind: EntityKind, id: String) -> BoxFuture<'static, StorageResult<Document>> {
            Box::pin(async move {
                Err(StorageError::NotFound {
                    collection: kind.collection_name(),
                    id,
                })
            })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async { Ok(()) })
        }

        fn close(&self) -> BoxFuture<'static, ()> {
            Box::pin(async {})
        }
    }

    fn request(player: &str) -> StartGame {
        StartGame {
            player: player.to_owned(),
        }
    }

    #[tokio::test]
    async fn start_game_assigns_player_to_both_slots() {
        let store = MemoryDocumentStore::new();
        let state = AppState::new(Arc::new(store.clone()));

        let game = start_game(&state, request("alice")).await.unwrap();

        assert_eq!(game.player1, "alice");
        assert_eq!(game.player2, "alice");
        assert_eq!(store.count(EntityKind::Game), 1);
        assert_eq!(get_game(&state, game.id.clone()).await.unwrap(), game);
    }

    #[tokio::test]
    async fn missing_read_back_is_internal() {
        let state = AppState::new(Arc::new(ForgetfulStore));
        let err = start_game(&state, request("alice")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[tokio::test]
    async fn closed_store_is_unavailable() {
        let state = AppState::new(Arc::new(MemoryDocumentStore::new()));
        state.close().await;

        let err = start_game(&state, request("alice")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn get_game_surfaces_missing_and_invalid_ids() {
        let store = MemoryDocumentStore::new();
        let id = DocumentStore::insert(&store, EntityKind::Game, doc! { "player1": "x" })
            .await
            .unwrap();
        let state = AppState::new(Arc::new(store));

        // stored without player2
        assert!(matches!(
            get_game(&state, id).await,
            Err(ServiceError::Internal(_))
        ));
        assert!(matches!(
            get_game(&state, "zzz".into()).await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            get_game(&state, "65f000000000000000000000".into()).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
