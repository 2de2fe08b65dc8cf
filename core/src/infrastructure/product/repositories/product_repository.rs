use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ShoppingHistoryItem},
        ports::ProductRepository,
    },
    search::{Page, SearchRequest},
};
use crate::entity::{
    orders::{self, Column as OrderColumn, Entity as OrderEntity},
    products::{self, Column as ProductColumn, Entity as ProductEntity},
    size_product, sizes, wishlists,
};
use crate::infrastructure::search::{
    FieldKind, FieldRegistry, apply_dynamic_filters, paginate, resolve_sort,
};

/// Legacy key restricting a product search to one size, resolved through
/// `size_product` and `sizes`.
const SIZE_TYPE_KEY: &str = "size_type";

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
    product_fields: FieldRegistry<ProductEntity>,
    order_fields: FieldRegistry<OrderEntity>,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            product_fields: product_fields(),
            order_fields: order_fields(),
        }
    }

    async fn fetch_page(
        &self,
        query: sea_orm::Select<ProductEntity>,
        request: &SearchRequest,
    ) -> Result<Page<Product>, CoreError> {
        let query = apply_dynamic_filters(query, &self.product_fields, request);
        let query = match resolve_sort(&self.product_fields, request) {
            Some((column, order)) => query.order_by(column, order),
            None => query,
        }
        .order_by_asc(ProductColumn::Id);

        let page = paginate(&self.db, query, request.page, request.page_size)
            .await
            .map_err(|e| {
                error!("Failed to search products: {}", e);
                CoreError::from(e)
            })?;

        Ok(page.map(Product::from))
    }

    async fn product_names(&self, product_ids: Vec<i32>) -> Result<HashMap<i32, String>, CoreError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let names = ProductEntity::find()
            .filter(ProductColumn::Id.is_in(product_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load product names: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(|product| (product.id, product.name))
            .collect();

        Ok(names)
    }
}

fn product_fields() -> FieldRegistry<ProductEntity> {
    FieldRegistry::new()
        .field(ProductColumn::Id, FieldKind::Integer)
        .field(ProductColumn::Name, FieldKind::Text)
        .field(ProductColumn::Description, FieldKind::Text)
        .field(ProductColumn::BrandId, FieldKind::Integer)
        .field(ProductColumn::Price, FieldKind::Float)
        .field(ProductColumn::MainImageUrl, FieldKind::Text)
        .field(ProductColumn::Stock, FieldKind::Integer)
        .field(ProductColumn::CategoryId, FieldKind::Integer)
        .field(ProductColumn::CollabStatus, FieldKind::Integer)
        .field(ProductColumn::CreateDate, FieldKind::DateTime)
        .field(ProductColumn::UpdateDate, FieldKind::DateTime)
}

fn order_fields() -> FieldRegistry<OrderEntity> {
    FieldRegistry::new()
        .field(OrderColumn::Id, FieldKind::Integer)
        .field(OrderColumn::ProductId, FieldKind::Integer)
        .field(OrderColumn::Quantity, FieldKind::Integer)
        .field(OrderColumn::TotalPrice, FieldKind::Float)
        .field(OrderColumn::Status, FieldKind::Text)
        .field(OrderColumn::CreatedAt, FieldKind::DateTime)
}

fn size_type(request: &mut SearchRequest) -> Option<String> {
    match request.take_legacy(SIZE_TYPE_KEY)? {
        Value::String(size) if !size.trim().is_empty() => Some(size.trim().to_string()),
        Value::Number(size) => Some(size.to_string()),
        _ => None,
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn search_products(&self, mut request: SearchRequest) -> Result<Page<Product>, CoreError> {
        let mut query = ProductEntity::find();

        if let Some(size) = size_type(&mut request) {
            debug!(size = %size, "Restricting products to size");
            query = query
                .join(JoinType::InnerJoin, products::Relation::SizeProduct.def())
                .join(JoinType::InnerJoin, size_product::Relation::Size.def())
                .filter(sizes::Column::SizeName.eq(size))
                .distinct();
        }

        self.fetch_page(query, &request).await
    }

    async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_wishlist(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> Result<Page<Product>, CoreError> {
        let query = ProductEntity::find()
            .join(JoinType::InnerJoin, products::Relation::Wishlist.def())
            .filter(wishlists::Column::UserId.eq(user_id))
            .distinct();

        self.fetch_page(query, &request).await
    }

    async fn get_shopping_history(
        &self,
        user_id: i32,
        request: SearchRequest,
    ) -> Result<Page<ShoppingHistoryItem>, CoreError> {
        let query = apply_dynamic_filters(
            OrderEntity::find().filter(OrderColumn::UserId.eq(user_id)),
            &self.order_fields,
            &request,
        );
        let query = match resolve_sort(&self.order_fields, &request) {
            Some((column, order)) => query.order_by(column, order),
            None => query.order_by_desc(OrderColumn::CreatedAt),
        }
        .order_by_desc(OrderColumn::Id);

        let page: Page<orders::Model> = paginate(&self.db, query, request.page, request.page_size)
            .await
            .map_err(|e| {
                error!("Failed to fetch shopping history: {}", e);
                CoreError::from(e)
            })?;

        let product_ids = page.items.iter().map(|order| order.product_id).collect();
        let names = self.product_names(product_ids).await?;

        Ok(page.map(|order| {
            let product_name = names.get(&order.product_id).cloned();
            ShoppingHistoryItem::from_order(order, product_name)
        }))
    }
}
