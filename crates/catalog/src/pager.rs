//! Pure page derivation over the catalog.
//!
//! Nothing here touches state or the network: page math is a function of a
//! slice and a requested page number, which keeps every property trivially
//! testable.

use crate::types::Product;

/// Fixed number of products per page.
pub const PRODUCTS_PER_PAGE: usize = 8;

/// One page of the catalog as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Products visible on this page, in server order.
    pub products: Vec<Product>,
    /// 1-based page number, already clamped.
    pub current_page: usize,
    /// `ceil(catalog length / 8)`; 0 for an empty catalog, which still
    /// reads as a single empty page.
    pub total_pages: usize,
}

/// Number of pages needed for `len` products.
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    len.div_ceil(PRODUCTS_PER_PAGE)
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
///
/// Out-of-range requests (including 0) clamp rather than error; an empty
/// catalog reads as page 1.
#[must_use]
pub const fn clamp_page(requested: usize, total_pages: usize) -> usize {
    let upper = if total_pages == 0 { 1 } else { total_pages };
    if requested < 1 {
        1
    } else if requested > upper {
        upper
    } else {
        requested
    }
}

/// The slice of `items` visible on 1-based `page`.
///
/// Out-of-range pages yield an empty slice; slicing never panics.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PRODUCTS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PRODUCTS_PER_PAGE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(8), 1);
        assert_eq!(total_pages(9), 2);
        assert_eq!(total_pages(16), 2);
        assert_eq!(total_pages(17), 3);

        for len in 0..=100 {
            assert_eq!(total_pages(len), len.div_ceil(8));
        }
    }

    #[test]
    fn test_pages_partition_the_collection() {
        for len in 0_usize..=40 {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len);

            let mut reassembled = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&items, page);
                assert!(slice.len() <= PRODUCTS_PER_PAGE);
                reassembled.extend_from_slice(slice);
            }
            // Every item appears exactly once, in order.
            assert_eq!(reassembled, items);
        }
    }

    #[test]
    fn test_seventeen_products_three_pages() {
        let items: Vec<usize> = (0..17).collect();
        assert_eq!(total_pages(items.len()), 3);
        assert_eq!(page_slice(&items, 1).len(), 8);
        assert_eq!(page_slice(&items, 2).len(), 8);
        assert_eq!(page_slice(&items, 3).len(), 1);
        assert_eq!(clamp_page(4, 3), 3);
    }

    #[test]
    fn test_out_of_range_pages_yield_empty_slices() {
        let items: Vec<usize> = (0..10).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 3).is_empty());
        assert!(page_slice(&items, usize::MAX).is_empty());
        assert!(page_slice::<usize>(&[], 1).is_empty());
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(99, 3), 3);

        // Empty catalog: a single empty page 1.
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_last_page_boundary() {
        let items: Vec<usize> = (0..16).collect();
        assert_eq!(total_pages(items.len()), 2);
        assert_eq!(page_slice(&items, 2).len(), 8);
        assert!(page_slice(&items, 3).is_empty());
    }
}
