//! Page-number pagination for list endpoints.

use mongodb::options::FindOptions;

use super::{positive_int_or, ParamError};

/// Number of records per page.
pub const PAGE_SIZE: u64 = 10;

/// A validated, 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl Page {
    /// Parse the `page` query parameter.
    ///
    /// Absent or empty means the first page. Anything that is not a positive
    /// integer, or whose offset would overflow, is rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self, ParamError> {
        let number = positive_int_or("page", raw, 1)? as u64;

        let fits = (number - 1)
            .checked_mul(PAGE_SIZE)
            .is_some_and(|skip| i64::try_from(skip).is_ok());
        if !fits {
            return Err(ParamError {
                name: "page",
                value: number.to_string(),
            });
        }

        Ok(Self(number))
    }

    pub fn number(self) -> u64 {
        self.0
    }

    /// Records to skip before this page.
    pub fn skip(self) -> u64 {
        (self.0 - 1) * PAGE_SIZE
    }

    /// Find options selecting this page.
    pub fn find_options(self) -> FindOptions {
        FindOptions::builder()
            .skip(self.skip())
            .limit(PAGE_SIZE as i64)
            .build()
    }
}
