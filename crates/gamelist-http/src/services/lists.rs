//! Game list management.

use tracing::{debug, instrument};

use gamelist_core::error::InvalidInputError;
use gamelist_core::{GameList, Result, UpdateListPayload};

use crate::client::ApiClient;
use crate::endpoints::{
    ADD_GAME, CreateListRequest, CreateListResponse, EDIT_GAME_USER, EditGameUserRequest,
    GAMELISTS, GAMELISTS_ROOT, ListGameRequest, REMOVE_GAME,
};
use crate::request::ApiRequest;

#[derive(Debug, Clone)]
pub struct ListService {
    client: ApiClient,
}

impl ListService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a list named `name`; its description starts out as the name.
    ///
    /// Returns the new list's id when the service reports one.
    #[instrument(skip(self))]
    pub async fn create_list(&self, name: &str) -> Result<Option<String>> {
        let body = CreateListRequest {
            name,
            description: name,
        };
        let request = ApiRequest::post(self.client.url(GAMELISTS)).json(&body)?;
        let response: Option<CreateListResponse> = self.client.fetch(request).await?;

        let id = response.and_then(|r| r.id);
        debug!(?id, "List created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_list(&self, list_id: &str) -> Result<GameList> {
        let list_id = non_empty(list_id, "list id")?;
        self.client
            .fetch(ApiRequest::get(self.client.url(&["gamelists", list_id])))
            .await
    }

    /// Every list owned by `user_id`.
    #[instrument(skip(self))]
    pub async fn user_lists(&self, user_id: &str) -> Result<Vec<GameList>> {
        let user_id = non_empty(user_id, "user id")?;
        self.fetch_lists(&["gamelists", "user", user_id]).await
    }

    /// Lists of `user_id` that the current user may add games to.
    #[instrument(skip(self))]
    pub async fn available_lists(&self, user_id: &str) -> Result<Vec<GameList>> {
        let user_id = non_empty(user_id, "user id")?;
        self.fetch_lists(&["gamelists", "user", user_id, "available"])
            .await
    }

    /// Replace a list's name, description and games.
    #[instrument(skip(self, payload), fields(list_id = %payload.id))]
    pub async fn update_list(&self, payload: &UpdateListPayload) -> Result<()> {
        non_empty(&payload.id, "list id")?;
        let request = ApiRequest::patch(self.client.url(GAMELISTS_ROOT)).json(payload)?;
        self.client.send(request).await
    }

    #[instrument(skip(self))]
    pub async fn add_game(&self, list_id: &str, game_id: &str) -> Result<()> {
        self.patch_game(ADD_GAME, list_id, game_id).await
    }

    #[instrument(skip(self))]
    pub async fn remove_game(&self, list_id: &str, game_id: &str) -> Result<()> {
        self.patch_game(REMOVE_GAME, list_id, game_id).await
    }

    /// Assign a game on a list to a user.
    #[instrument(skip(self))]
    pub async fn attach_game_to_user(
        &self,
        list_id: &str,
        game_id: &str,
        user_id: &str,
    ) -> Result<()> {
        let user_id = non_empty(user_id, "user id")?;
        self.edit_game_user(list_id, game_id, Some(user_id)).await
    }

    /// Clear the user assigned to a game on a list.
    #[instrument(skip(self))]
    pub async fn detach_game_from_user(&self, list_id: &str, game_id: &str) -> Result<()> {
        self.edit_game_user(list_id, game_id, None).await
    }

    async fn fetch_lists(&self, segments: &[&str]) -> Result<Vec<GameList>> {
        let lists: Option<Vec<GameList>> = self
            .client
            .fetch(ApiRequest::get(self.client.url(segments)))
            .await?;
        Ok(lists.unwrap_or_default())
    }

    async fn patch_game(&self, path: &[&str], list_id: &str, game_id: &str) -> Result<()> {
        let body = ListGameRequest {
            game_id: non_empty(game_id, "game id")?,
            list_id: non_empty(list_id, "list id")?,
        };
        let request = ApiRequest::patch(self.client.url(path)).json(&body)?;
        self.client.send(request).await
    }

    async fn edit_game_user(
        &self,
        list_id: &str,
        game_id: &str,
        user_id: Option<&str>,
    ) -> Result<()> {
        let body = EditGameUserRequest {
            game_id: non_empty(game_id, "game id")?,
            list_id: non_empty(list_id, "list id")?,
            user_id,
        };
        let request = ApiRequest::patch(self.client.url(EDIT_GAME_USER)).json(&body)?;
        self.client.send(request).await
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(InvalidInputError::EmptySegment { field }.into());
    }
    Ok(value)
}
