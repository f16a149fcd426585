//! Iteration and collection support.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::vector::SimpleVector;

/// Owning iterator over the elements of a [`SimpleVector`].
///
/// Spare slots past the logical size are dropped when the iterator is
/// created; only the elements are yielded.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    /// Append every item with [`push_back`](SimpleVector::push_back), so
    /// capacity follows the doubling law.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    use crate::SimpleVector;

    #[test]
    fn collect_follows_growth_law() {
        let v: SimpleVector<u32> = (1..=5).collect();
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn extend_appends() {
        let mut v = SimpleVector::from([1]);
        v.extend([2, 3]);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn owned_iteration_skips_spare_slots() {
        let mut v = SimpleVector::from(["a".to_string(), "b".to_string()]);
        v.pop_back();
        let items: Vec<String> = v.into_iter().collect();
        assert_eq!(items, vec!["a".to_string()]);
    }

    #[test]
    fn owned_iteration_is_double_ended() {
        let v = SimpleVector::from([1, 2, 3]);
        let reversed: Vec<i32> = v.into_iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[test]
    fn borrowed_iteration() {
        let mut v = SimpleVector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        let total: i32 = (&v).into_iter().sum();
        assert_eq!(total, 60);
    }
}
