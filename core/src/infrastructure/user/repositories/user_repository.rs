use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::{Page, SearchRequest},
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::infrastructure::search::{
    FieldKind, FieldRegistry, apply_dynamic_filters, paginate, resolve_sort,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
    fields: FieldRegistry<UserEntity>,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            fields: user_fields(),
        }
    }
}

/// Searchable user columns. `password` and `is_deleted` stay out of reach.
fn user_fields() -> FieldRegistry<UserEntity> {
    FieldRegistry::new()
        .field(UserColumn::Id, FieldKind::Integer)
        .field(UserColumn::Username, FieldKind::Text)
        .field(UserColumn::Email, FieldKind::Text)
        .field(UserColumn::FullName, FieldKind::Text)
        .field(UserColumn::Phone, FieldKind::Text)
        .field(UserColumn::Address, FieldKind::Text)
        .field(UserColumn::IsActive, FieldKind::Boolean)
        .field(UserColumn::Role, FieldKind::Text)
        .field(UserColumn::CreateDate, FieldKind::DateTime)
        .field(UserColumn::UpdateDate, FieldKind::DateTime)
}

impl UserRepository for PostgresUserRepository {
    async fn search_users(&self, request: SearchRequest) -> Result<Page<User>, CoreError> {
        let query = apply_dynamic_filters(
            UserEntity::find().filter(UserColumn::IsDeleted.eq(false)),
            &self.fields,
            &request,
        );
        let query = match resolve_sort(&self.fields, &request) {
            Some((column, order)) => query.order_by(column, order),
            None => query.order_by_desc(UserColumn::CreateDate),
        }
        .order_by_asc(UserColumn::Id);

        let page = paginate(&self.db, query, request.page, request.page_size)
            .await
            .map_err(|e| {
                error!("Failed to search users: {}", e);
                CoreError::from(e)
            })?;

        Ok(page.map(User::from))
    }

    async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .filter(UserColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }
}
