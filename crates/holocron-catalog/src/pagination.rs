// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Page math and the page-selection control.

/// Records per list page; fixed by the catalog.
pub const PAGE_SIZE: u64 = 10;

/// Pages needed for `count` records.
pub fn total_pages(count: u64) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Current position in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-indexed page on display.
    pub current_page: u32,
    /// Page count derived from the last successful fetch.
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageState {
    /// Buttons for this state.
    pub fn controls(&self) -> Vec<PageButton> {
        controls(self.total_pages, self.current_page)
    }
}

/// One page-selection button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Page this button selects.
    pub number: u32,
    /// False for the page already on display.
    pub enabled: bool,
}

impl PageButton {
    /// Page to fetch when pressed; `None` when disabled.
    pub fn select(self) -> Option<u32> {
        self.enabled.then_some(self.number)
    }
}

/// One button per page `1..=total_pages`, the current one disabled. No windowing.
pub fn controls(total_pages: u32, current_page: u32) -> Vec<PageButton> {
    (1..=total_pages)
        .map(|number| PageButton {
            number,
            enabled: number != current_page,
        })
        .collect()
}
