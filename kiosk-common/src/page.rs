use thiserror::Error;

// 1-based, always positive.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub fn new(page: u32) -> Option<Self> {
        (page > 0).then_some(Self(page))
    }

    #[must_use]
    pub fn new_unchecked(page: u32) -> Self {
        Self::new(page).expect("Page number was not positive.")
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The page number is not positive: {0}")]
pub struct NonPositivePageError(u32);

impl TryFrom<u32> for PageNumber {
    type Error = NonPositivePageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NonPositivePageError(value))
    }
}

// Posts per page, always positive.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct PageLimit(usize);

impl PageLimit {
    pub const DEFAULT: Self = Self(12);

    #[must_use]
    pub fn new(limit: usize) -> Option<Self> {
        (limit > 0).then_some(Self(limit))
    }

    #[must_use]
    pub fn new_unchecked(limit: usize) -> Self {
        Self::new(limit).expect("Page limit was not positive.")
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The page limit is not positive: {0}")]
pub struct NonPositiveLimitError(usize);

impl TryFrom<usize> for PageLimit {
    type Error = NonPositiveLimitError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NonPositiveLimitError(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::page::{PageLimit, PageNumber};

    #[test]
    fn legal_values() {
        let legal = [1, 12, u32::MAX];
        let illegal = [0];

        for legal_value in legal {
            assert!(PageNumber::new(legal_value).is_some());
            assert!(PageLimit::new(legal_value as usize).is_some());
        }
        for illegal_value in illegal {
            assert!(PageNumber::new(illegal_value).is_none());
            assert!(PageLimit::new(illegal_value as usize).is_none());
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(PageNumber::default().get(), 1);
        assert_eq!(PageLimit::default().get(), 12);
    }

    #[test]
    fn try_from_rejects_zero() {
        assert!(PageNumber::try_from(0).is_err());
        assert!(PageLimit::try_from(0).is_err());
        assert_eq!(PageNumber::try_from(3).unwrap().get(), 3);
        assert_eq!(PageLimit::try_from(5).unwrap().get(), 5);
    }
}
