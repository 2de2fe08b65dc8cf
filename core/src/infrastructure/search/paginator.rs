use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect, Select};
use tracing::debug;

use super::SearchError;
use crate::domain::search::Page;

/// Largest offset or limit the database drivers accept as a bound parameter.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Counts the filtered query, then fetches the requested slice.
///
/// The count ignores offset/limit. A page past the end yields no items but
/// still reports the full count. Callers are expected to have ordered the
/// query, ending with a primary-key tie-break.
pub async fn paginate<E, C>(
    db: &C,
    query: Select<E>,
    page: u64,
    page_size: u64,
) -> Result<Page<E::Model>, SearchError>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    C: ConnectionTrait,
{
    if page_size == 0 {
        return Err(SearchError::EmptyPage);
    }

    let offset = page
        .saturating_sub(1)
        .checked_mul(page_size)
        .filter(|offset| *offset <= MAX_BOUND);

    let (total_count, items) = match offset {
        Some(offset) => {
            let count_query = query.clone();
            let page_query = query.offset(offset).limit(page_size.min(MAX_BOUND));
            tokio::try_join!(count_query.count(db), page_query.all(db))?
        }
        None => (query.count(db).await?, Vec::new()),
    };

    debug!(total_count, page, page_size, returned = items.len(), "Paginated query");

    Ok(Page::new(items, total_count, page, page_size))
}
