// Pagination Value Types
//
// A listing applies ONE predicate to both the total count and the data
// page; these types carry the page window and the resulting metadata.

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Requested page window. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self> {
        if page == 0 {
            return Err(DomainError::ValidationError(
                "page must be >= 1".to_string(),
            ));
        }
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(DomainError::ValidationError(format!(
                "size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, size })
    }

    pub fn offset(self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.size)
    }

    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata returned alongside a data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_page: u32,
    pub total_data: u64,
}

impl PageInfo {
    /// `total_page == ceil(total_data / size)`; a negative count from
    /// storage is treated as zero.
    pub fn new(request: PageRequest, total_data: i64) -> Self {
        let total_data = total_data.max(0) as u64;
        let size = u64::from(request.size);
        let total_page = total_data.div_ceil(size) as u32;
        Self {
            page: request.page,
            size: request.size,
            total_page,
            total_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_page_is_ceiling() {
        let req = PageRequest::new(1, 10).unwrap();
        assert_eq!(PageInfo::new(req, 0).total_page, 0);
        assert_eq!(PageInfo::new(req, 1).total_page, 1);
        assert_eq!(PageInfo::new(req, 10).total_page, 1);
        assert_eq!(PageInfo::new(req, 11).total_page, 2);
        assert_eq!(PageInfo::new(req, 12).total_page, 2);
    }

    #[test]
    fn test_offset_and_limit() {
        let req = PageRequest::new(3, 10).unwrap();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_rejects_page_zero_and_bad_sizes() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn test_negative_count_clamped() {
        let req = PageRequest::default();
        let info = PageInfo::new(req, -5);
        assert_eq!(info.total_data, 0);
        assert_eq!(info.total_page, 0);
    }
}
