use crate::domain::{
    category::ports::CategoryRepository,
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    search::SearchRequest,
    user::ports::UserRepository,
};

/// Application service wiring every repository port together.
///
/// The service traits (`ProductService`, `UserService`, `CategoryService`,
/// `HealthCheckService`) are implemented on this struct in their own domain
/// modules.
#[derive(Clone)]
pub struct Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    pub(crate) product_repository: P,
    pub(crate) user_repository: U,
    pub(crate) category_repository: C,
    pub(crate) health_check_repository: HC,
}

impl<P, U, C, HC> Service<P, U, C, HC>
where
    P: ProductRepository,
    U: UserRepository,
    C: CategoryRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        product_repository: P,
        user_repository: U,
        category_repository: C,
        health_check_repository: HC,
    ) -> Self {
        Self {
            product_repository,
            user_repository,
            category_repository,
            health_check_repository,
        }
    }
}

/// Rejects paging the engine cannot serve before any query is built.
pub(crate) fn ensure_valid_paging(request: &SearchRequest) -> Result<(), CoreError> {
    request.validate().map_err(CoreError::InvalidPagination)
}

#[cfg(test)]
pub(crate) mod test_service {
    use super::Service;
    use crate::domain::{
        category::ports::MockCategoryRepository, health::ports::MockHealthCheckRepository,
        product::ports::MockProductRepository, user::ports::MockUserRepository,
    };

    pub(crate) type MockService = Service<
        MockProductRepository,
        MockUserRepository,
        MockCategoryRepository,
        MockHealthCheckRepository,
    >;

    pub(crate) fn with_products(products: MockProductRepository) -> MockService {
        Service::new(
            products,
            MockUserRepository::new(),
            MockCategoryRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    pub(crate) fn with_users(users: MockUserRepository) -> MockService {
        Service::new(
            MockProductRepository::new(),
            users,
            MockCategoryRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    pub(crate) fn with_categories(categories: MockCategoryRepository) -> MockService {
        Service::new(
            MockProductRepository::new(),
            MockUserRepository::new(),
            categories,
            MockHealthCheckRepository::new(),
        )
    }

    pub(crate) fn with_health(health: MockHealthCheckRepository) -> MockService {
        Service::new(
            MockProductRepository::new(),
            MockUserRepository::new(),
            MockCategoryRepository::new(),
            health,
        )
    }
}
