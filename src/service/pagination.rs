//! Page slicing for the list operation.

use crate::error::{CountryError, Result};
use crate::models::requests::INVALID_PAGINATION_MESSAGE;
use crate::models::{PaginatedResponse, PaginationMeta};

// == Validation ==
/// Rejects a page or limit below 1.
pub fn validate(page: usize, limit: usize) -> Result<()> {
    if page < 1 || limit < 1 {
        return Err(CountryError::InvalidArgument(
            INVALID_PAGINATION_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

// == Paging ==
/// Returns page `page` (1-based) of `items`, `limit` items per page.
///
/// A page past the end yields an empty `data` list, not an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Result<PaginatedResponse<T>> {
    validate(page, limit)?;

    let total_items = items.len();
    let offset = (page - 1).saturating_mul(limit);
    let data = items.iter().skip(offset).take(limit).cloned().collect();

    Ok(PaginatedResponse {
        data,
        pagination: PaginationMeta {
            total_items,
            total_pages: total_items.div_ceil(limit),
            current_page: page,
            items_per_page: limit,
        },
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 1, 10).unwrap();

        assert_eq!(page.data, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.pagination.total_items, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.items_per_page, 10);
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 4, 5).unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.current_page, 4);
    }

    #[test]
    fn test_empty_dataset() {
        let page = paginate::<u32>(&[], 1, 10).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, usize::MAX, usize::MAX).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_rejects_zero() {
        assert!(matches!(
            paginate(&[1u32], 0, 10),
            Err(CountryError::InvalidArgument(_))
        ));
        assert!(matches!(
            paginate(&[1u32], 1, 0),
            Err(CountryError::InvalidArgument(_))
        ));
    }
}
