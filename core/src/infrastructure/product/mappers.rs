use crate::domain::product::entities::{Product, ShoppingHistoryItem};
use crate::entity::{orders::Model as OrderModel, products::Model as ProductModel};

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            brand_id: model.brand_id,
            price: model.price,
            main_image_url: model.main_image_url,
            stock: model.stock,
            category_id: model.category_id,
            collab_status: model.collab_status,
            create_date: model.create_date.and_utc(),
            update_date: model.update_date.map(|dt| dt.and_utc()),
        }
    }
}

impl ShoppingHistoryItem {
    pub(crate) fn from_order(order: OrderModel, product_name: Option<String>) -> Self {
        ShoppingHistoryItem {
            id: order.id,
            product_id: order.product_id,
            product_name,
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at.and_utc(),
        }
    }
}
