//! Pagination and classification filters for list queries.

/// Offset/limit window applied after filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of entries to skip
    pub offset: usize,

    /// Maximum number of entries to return
    pub limit: usize,
}

impl Page {
    /// Default window for plan listings.
    pub const PLANS: Page = Page {
        offset: 0,
        limit: 5,
    };

    /// Default window for template listings.
    pub const TEMPLATES: Page = Page {
        offset: 0,
        limit: 9,
    };

    /// Create a page from optional offset and limit, falling back to
    /// `default` for whichever is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::models::Page;
    ///
    /// let page = Page::new(Some(5), None, Page::PLANS);
    /// assert_eq!(page, Page { offset: 5, limit: 5 });
    /// ```
    pub fn new(offset: Option<usize>, limit: Option<usize>, default: Page) -> Self {
        Self {
            offset: offset.unwrap_or(default.offset),
            limit: limit.unwrap_or(default.limit),
        }
    }

    /// Applies the window to an already ordered list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.limit).collect()
    }
}

/// Completion classification for plan listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    /// Plans with at least one task and every task completed
    Completed,

    /// Every other plan, including plans whose tasks were all removed
    Uncompleted,
}

impl CompletionFilter {
    /// Decides whether a plan with the given counts belongs to this class.
    pub fn matches(&self, total_tasks: u32, completed_tasks: u32) -> bool {
        let completed = total_tasks > 0 && completed_tasks == total_tasks;
        match self {
            CompletionFilter::Completed => completed,
            CompletionFilter::Uncompleted => !completed,
        }
    }
}
