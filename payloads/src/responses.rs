use crate::{
    BookingId, BookingStatus, LocationId, ProductTypeId, SpaceCategory,
    SpaceId,
};
use jiff::{
    Timestamp,
    civil::{Date, Time},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope wrapping every successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

/// Body of an unsuccessful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
    /// Field path to message, for server-side validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// Paging metadata returned alongside every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Pagination for `page` (1-indexed) over `total_items` items.
    pub fn new(page: u32, items_per_page: u32, total_items: u32) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page).max(1);
        let current_page = page.max(1);
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize)
            .saturating_mul(self.items_per_page as usize)
    }

    /// 1-indexed inclusive range of items shown on this page, or `None` when
    /// the page is empty.
    pub fn item_range(&self) -> Option<(u32, u32)> {
        let start = u32::try_from(self.offset()).ok()?.checked_add(1)?;
        if start > self.total_items {
            return None;
        }
        let end = start
            .saturating_add(self.items_per_page.saturating_sub(1))
            .min(self.total_items);
        Some((start, end))
    }

    pub fn range_label(&self) -> String {
        match self.item_range() {
            Some((start, end)) => {
                format!("Showing {start}-{end} of {}", self.total_items)
            }
            None => "No results".to_string(),
        }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Slice one page out of a complete, already-filtered result set.
    pub fn from_all(all: Vec<T>, page: u32, limit: u32) -> Self {
        let pagination = Pagination::new(page, limit, all.len() as u32);
        let items = all
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.items_per_page as usize)
            .collect();
        Self { items, pagination }
    }
}

/// Snapshot of a location's occupancy, computed when the location is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub total_spaces: u32,
    pub available_spaces: u32,
    pub total_capacity: u32,
    pub active_bookings: u32,
    /// Percentage of bookable spaces currently occupied or reserved.
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub details: crate::Location,
    pub stats: LocationStats,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: SpaceId,
    pub details: crate::Space,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: ProductTypeId,
    pub details: crate::ProductType,
    /// Spaces created from this type so far.
    pub space_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub details: crate::Booking,
    pub space_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: SpaceCategory,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceStats {
    pub total_spaces: u32,
    pub available: u32,
    pub occupied: u32,
    pub reserved: u32,
    pub maintenance: u32,
    pub inactive: u32,
    pub total_capacity: u32,
    pub occupancy_rate: f64,
    pub by_type: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: u32,
    pub pending: u32,
    pub confirmed: u32,
    pub checked_in: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
    pub cancellation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub booking_id: BookingId,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub status: BookingStatus,
}

/// A space's opening hours and existing bookings for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceAvailability {
    pub space_id: SpaceId,
    pub date: Date,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
    pub booked_slots: Vec<BookedSlot>,
}

impl SpaceAvailability {
    pub fn is_fully_free(&self) -> bool {
        self.is_open && self.booked_slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous() {
        let p = Pagination::new(1, 10, 35);
        assert_eq!(p.total_pages, 4);
        assert!(!p.has_prev_page);
        assert!(p.has_next_page);
        assert_eq!(p.range_label(), "Showing 1-10 of 35");
    }

    #[test]
    fn last_page_has_no_next() {
        let p = Pagination::new(4, 10, 35);
        assert!(p.has_prev_page);
        assert!(!p.has_next_page);
        assert_eq!(p.item_range(), Some((31, 35)));
    }

    #[test]
    fn empty_collection_is_a_single_page() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_prev_page && !p.has_next_page);
        assert_eq!(p.range_label(), "No results");
    }

    #[test]
    fn from_all_slices_requested_page() {
        let page = Paginated::from_all((1..=25).collect::<Vec<u32>>(), 3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.current_page, 3);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn huge_page_sizes_show_every_item() {
        let p = Pagination::new(1, u32::MAX, 7);
        assert_eq!(p.item_range(), Some((1, 7)));
        assert_eq!(p.range_label(), "Showing 1-7 of 7");

        let beyond = Pagination::new(u32::MAX, u32::MAX, 7);
        assert_eq!(beyond.item_range(), None);
    }

    #[test]
    fn pagination_uses_camel_case_on_the_wire() {
        let value = serde_json::to_value(Pagination::new(2, 5, 12)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "currentPage": 2,
                "totalPages": 3,
                "totalItems": 12,
                "itemsPerPage": 5,
                "hasNextPage": true,
                "hasPrevPage": true,
            })
        );
    }
}
