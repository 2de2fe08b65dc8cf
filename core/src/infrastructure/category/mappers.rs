use crate::domain::category::entities::Category;
use crate::entity::categories::Model as CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name_category: model.name_category,
        }
    }
}
