//! Pagination window computation.
//!
//! Produces the visible page controls for a paginated result list: a sliding
//! window of numbered pages with first/last anchors and non-interactive
//! ellipsis markers in between.

/// One item in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A non-interactive gap marker.
    Ellipsis,
}

/// Computes the visible pagination items for `current` of `total` pages.
///
/// With five or fewer pages, all are shown. Otherwise a window anchored on
/// the current page is shown together with the first and last page:
///
/// ```
/// use litscope::ui::pagination::{visible_pages, PageItem};
///
/// let items = visible_pages(5, 10);
/// assert_eq!(items, [
///     PageItem::Page(1),
///     PageItem::Ellipsis,
///     PageItem::Page(4),
///     PageItem::Page(5),
///     PageItem::Page(6),
///     PageItem::Ellipsis,
///     PageItem::Page(10),
/// ]);
/// ```
#[must_use]
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    const MAX_VISIBLE: usize = 5;

    if total <= MAX_VISIBLE {
        return (1..=total).map(PageItem::Page).collect();
    }

    if current <= 3 {
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Ellipsis,
            PageItem::Page(total),
        ]
    } else if current >= total - 2 {
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(total - 3),
            PageItem::Page(total - 2),
            PageItem::Page(total - 1),
            PageItem::Page(total),
        ]
    } else {
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(current - 1),
            PageItem::Page(current),
            PageItem::Page(current + 1),
            PageItem::Ellipsis,
            PageItem::Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn few_pages_are_all_shown() {
        assert_eq!(visible_pages(1, 1), [Page(1)]);
        assert_eq!(
            visible_pages(2, 4),
            [Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(
            visible_pages(5, 5),
            [Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn start_window_for_early_pages() {
        let expected = [Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(visible_pages(1, 10), expected);
        assert_eq!(visible_pages(3, 10), expected);
    }

    #[test]
    fn end_window_for_late_pages() {
        let expected = [Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(visible_pages(10, 10), expected);
        assert_eq!(visible_pages(8, 10), expected);
    }

    #[test]
    fn middle_window_slides_around_current() {
        assert_eq!(
            visible_pages(5, 10),
            [
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(
            visible_pages(4, 10),
            [
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn current_page_is_always_visible() {
        for total in 1..=20 {
            for current in 1..=total {
                let items = visible_pages(current, total);
                assert!(
                    items.contains(&Page(current)),
                    "page {current} missing for total {total}"
                );
                assert!(items.contains(&Page(1)));
                assert!(items.contains(&Page(total)));
            }
        }
    }
}
