use crate::domain::user::entities::{User, UserRole};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            full_name: model.full_name,
            phone: model.phone,
            address: model.address,
            avatar: model.avatar,
            is_active: model.is_active,
            role: UserRole::from(model.role.as_str()),
            create_date: model.create_date.and_utc(),
            update_date: model.update_date.map(|dt| dt.and_utc()),
        }
    }
}
