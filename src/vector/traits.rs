use core::fmt;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;

use super::sequence::Vector;

impl<T> Default for Vector<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// Capacity is not part of equality.
impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}
