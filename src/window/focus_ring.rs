/// Cyclic cursor over an ordered set of items, used for keyboard focus
/// cycling.
#[derive(Debug, Clone)]
pub struct FocusRing<T: Copy + Eq> {
    order: Vec<T>,
    current: Option<T>,
}

impl<T: Copy + Eq> FocusRing<T> {
    pub fn new(order: Vec<T>, current: Option<T>) -> Self {
        Self { order, current }
    }

    pub fn current(&self) -> Option<T> {
        self.current
    }

    /// Step to the neighbour of the current item. With no current item (or one
    /// that is not in the ring) the first or last item is picked.
    pub fn advance(&mut self, forward: bool) -> Option<T> {
        if self.order.is_empty() {
            return None;
        }
        let len = self.order.len() as isize;
        let next = match self
            .current
            .and_then(|cur| self.order.iter().position(|item| *item == cur))
        {
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                (idx as isize + step).rem_euclid(len) as usize
            }
            None if forward => 0,
            None => (len - 1) as usize,
        };
        self.current = Some(self.order[next]);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_advances() {
        let mut ring = FocusRing::new(vec![1usize, 2, 3], Some(2));
        assert_eq!(ring.advance(true), Some(3));
        assert_eq!(ring.advance(true), Some(1));
        assert_eq!(ring.advance(false), Some(3));
    }

    #[test]
    fn starts_at_an_end_without_current() {
        let mut ring = FocusRing::new(vec![1usize, 2, 3], None);
        assert_eq!(ring.advance(true), Some(1));
        let mut ring = FocusRing::new(vec![1usize, 2, 3], Some(9));
        assert_eq!(ring.advance(false), Some(3));
    }

    #[test]
    fn empty_ring_yields_nothing() {
        let mut ring: FocusRing<u8> = FocusRing::new(Vec::new(), None);
        assert_eq!(ring.advance(true), None);
        assert_eq!(ring.current(), None);
    }
}
