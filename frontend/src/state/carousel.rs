use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    EmptyCollection,
    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },
}

/// Selected position in a fixed-size list, wrapping at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselIndex {
    index: usize,
    len: usize,
}

impl CarouselIndex {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyCollection);
        }
        Ok(Self { index: 0, len })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        // add len first, usize cannot go below zero
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(CarouselIndex::new(0), Err(CarouselError::EmptyCollection));
    }

    #[test]
    fn next_wraps_after_last() {
        let mut carousel = CarouselIndex::new(3).unwrap();
        carousel.next();
        assert_eq!(carousel.current(), 1);
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn previous_wraps_from_first() {
        let mut carousel = CarouselIndex::new(3).unwrap();
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = CarouselIndex::new(1).unwrap();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn select_out_of_range_keeps_index() {
        let mut carousel = CarouselIndex::new(3).unwrap();
        carousel.select(1).unwrap();
        assert_eq!(
            carousel.select(3),
            Err(CarouselError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(carousel.current(), 1);
    }
}
