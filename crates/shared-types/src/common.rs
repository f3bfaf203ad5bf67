use serde::{Deserialize, Serialize};

/// Lifecycle status shared by every managed record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }

    /// Parse a status string; anything other than "inactive" is active.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "inactive" => Status::Inactive,
            _ => Status::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

/// Valid statuses in display order.
pub const STATUSES: &[Status] = &[Status::Active, Status::Inactive];

/// School grades offered by the academic screens.
pub const GRADES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Class sections within a grade.
pub const SECTIONS: &[&str] = &["A", "B", "C", "D"];

/// Sentinel categorical filter value meaning "do not filter on this axis".
pub const FILTER_ALL: &str = "all";

/// Metadata describing one window over a filtered collection.
///
/// `page` is 0-indexed; `total` counts filtered records, not the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = if page_size > 0 {
            total.div_ceil(page_size)
        } else {
            1
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page + 1 < total_pages,
            has_prev: page > 0,
        }
    }

    /// Human-readable window label, e.g. `"6-10 of 12"`.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let start = self.page * self.page_size + 1;
        let end = ((self.page + 1) * self.page_size).min(self.total);
        if start > end {
            return format!("0 of {}", self.total);
        }
        format!("{start}-{end} of {}", self.total)
    }
}

/// Coerce a requested page size to one of the allowed options.
///
/// Falls back to `default` when the request is not offered.
pub fn normalize_page_size(requested: usize, options: &[usize], default: usize) -> usize {
    if options.contains(&requested) {
        requested
    } else {
        default.max(1)
    }
}
