//! Favorites domain logic.
//!
//! [`FavoritesService`] sequences existence checks and store calls and turns
//! store outcomes into [`CoreError`] variants. It holds no mutable state; all
//! state lives behind the injected [`FavoritesStore`].

use std::sync::Arc;

use favorites_core::asset_kind::AssetKind;
use favorites_core::error::CoreError;
use favorites_core::pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use favorites_core::types::{new_id, DbId};
use favorites_core::validation::{validate_description, validate_payload};
use favorites_db::models::{Asset, Favorite, User};
use favorites_db::{FavoriteInsert, FavoritesStore, StoreError};

/// Listing limits applied by every paginated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Page size used when the caller omits one.
    pub default_page_size: i64,
    /// Requested page sizes above this are clamped down.
    pub max_page_size: i64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

pub type ServiceResult<T> = Result<T, CoreError>;

/// Log an unexpected store failure and collapse it into [`CoreError::Internal`].
fn internal(err: StoreError) -> CoreError {
    tracing::error!(error = %err, "Store operation failed");
    CoreError::Internal(err.to_string())
}

#[derive(Clone)]
pub struct FavoritesService {
    store: Arc<dyn FavoritesStore>,
    settings: PageSettings,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn FavoritesStore>, settings: PageSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> PageSettings {
        self.settings
    }

    fn page_request(&self, page: i64, limit: i64) -> PageRequest {
        PageRequest::clamped(page, limit, self.settings.max_page_size)
    }

    async fn require_user(&self, user_id: DbId) -> ServiceResult<()> {
        if self.store.user_exists(user_id).await.map_err(internal)? {
            Ok(())
        } else {
            Err(CoreError::UserNotFound(user_id))
        }
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    /// Create a user under a freshly generated id.
    pub async fn create_user(&self) -> ServiceResult<User> {
        self.ensure_user(new_id()).await
    }

    /// Create the user if absent; return the stored row either way.
    pub async fn ensure_user(&self, id: DbId) -> ServiceResult<User> {
        let user = self.store.create_user(id).await.map_err(internal)?;
        tracing::info!(user_id = %user.id, "User ensured");
        Ok(user)
    }

    pub async fn list_users(&self, page: i64, limit: i64) -> ServiceResult<Page<User>> {
        let request = self.page_request(page, limit);
        let listing = self
            .store
            .list_users(request.limit(), request.offset())
            .await
            .map_err(internal)?;
        Ok(Page::new(listing.items, request, listing.total))
    }

    /// Delete a user together with all of the user's favorites.
    pub async fn delete_user(&self, id: DbId) -> ServiceResult<()> {
        self.require_user(id).await?;
        if !self.store.delete_user(id).await.map_err(internal)? {
            // Deleted concurrently between the check and the delete.
            return Err(CoreError::UserNotFound(id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    /// Validate the kind tag and payload, then store a new asset.
    pub async fn create_asset(&self, kind: &str, payload: serde_json::Value) -> ServiceResult<Asset> {
        let kind: AssetKind = kind.parse()?;
        validate_payload(&payload)?;
        let asset = self.store.create_asset(kind, payload).await.map_err(internal)?;
        tracing::info!(asset_id = %asset.id, kind = %asset.kind, "Asset created");
        Ok(asset)
    }

    pub async fn get_asset(&self, id: DbId) -> ServiceResult<Asset> {
        self.store
            .get_asset(id)
            .await
            .map_err(internal)?
            .ok_or(CoreError::AssetNotFound(id))
    }

    /// List assets newest-first. An empty or absent `kind` means no filter.
    pub async fn list_assets(
        &self,
        page: i64,
        limit: i64,
        kind: Option<&str>,
    ) -> ServiceResult<Page<Asset>> {
        let kind = AssetKind::parse_filter(kind)?;
        let request = self.page_request(page, limit);
        let listing = self
            .store
            .list_assets(request.limit(), request.offset(), kind)
            .await
            .map_err(internal)?;
        Ok(Page::new(listing.items, request, listing.total))
    }

    /// Delete an asset; every favorite pointing at it goes with it.
    pub async fn delete_asset(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.asset_exists(id).await.map_err(internal)? {
            return Err(CoreError::AssetNotFound(id));
        }
        if !self.store.delete_asset(id).await.map_err(internal)? {
            return Err(CoreError::AssetNotFound(id));
        }
        tracing::info!(asset_id = %id, "Asset deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Favorites
    // -----------------------------------------------------------------------

    /// Add an asset to a user's favorites.
    ///
    /// Checks run in order: user exists, asset exists, then a conditional
    /// insert that reports [`CoreError::AlreadyFavorited`] when an active
    /// favorite for the pair already exists.
    pub async fn add_favorite(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: Option<&str>,
    ) -> ServiceResult<Favorite> {
        if let Some(text) = description {
            validate_description(text)?;
        }
        self.require_user(user_id).await?;
        if !self.store.asset_exists(asset_id).await.map_err(internal)? {
            return Err(CoreError::AssetNotFound(asset_id));
        }

        match self.store.add_favorite(user_id, asset_id, description).await {
            Ok(FavoriteInsert::Created(favorite)) => {
                tracing::info!(
                    user_id = %user_id,
                    asset_id = %asset_id,
                    favorite_id = %favorite.id,
                    "Favorite added",
                );
                Ok(favorite)
            }
            Ok(FavoriteInsert::AlreadyActive) => {
                Err(CoreError::AlreadyFavorited { user_id, asset_id })
            }
            Err(StoreError::MissingUser) => Err(CoreError::UserNotFound(user_id)),
            Err(StoreError::MissingAsset) => Err(CoreError::AssetNotFound(asset_id)),
            Err(err) => Err(internal(err)),
        }
    }

    /// List a user's active favorites, newest first.
    pub async fn list_favorites(
        &self,
        user_id: DbId,
        page: i64,
        page_size: i64,
        kind: Option<&str>,
    ) -> ServiceResult<Page<Favorite>> {
        self.require_user(user_id).await?;
        let kind = AssetKind::parse_filter(kind)?;
        let request = self.page_request(page, page_size);
        let listing = self
            .store
            .get_favorites(user_id, request.limit(), request.offset(), kind)
            .await
            .map_err(internal)?;
        Ok(Page::new(listing.items, request, listing.total))
    }

    /// Replace the description on the user's active favorite of `asset_id`.
    pub async fn update_favorite_description(
        &self,
        user_id: DbId,
        asset_id: DbId,
        description: &str,
    ) -> ServiceResult<Favorite> {
        validate_description(description)?;
        self.require_user(user_id).await?;
        let favorite = self
            .store
            .update_favorite_description(user_id, asset_id, description)
            .await
            .map_err(internal)?
            .ok_or(CoreError::NotInFavorites { user_id, asset_id })?;
        tracing::info!(user_id = %user_id, asset_id = %asset_id, "Favorite description updated");
        Ok(favorite)
    }

    /// Soft-delete the user's active favorite of `asset_id`.
    pub async fn remove_favorite(&self, user_id: DbId, asset_id: DbId) -> ServiceResult<()> {
        self.require_user(user_id).await?;
        if !self
            .store
            .remove_favorite(user_id, asset_id)
            .await
            .map_err(internal)?
        {
            return Err(CoreError::NotInFavorites { user_id, asset_id });
        }
        tracing::info!(user_id = %user_id, asset_id = %asset_id, "Favorite removed");
        Ok(())
    }
}
