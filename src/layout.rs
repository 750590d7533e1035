use core::ops::Range;

use crate::error::DynVecError;

/// Byte geometry of one element slot.
///
/// Element `i` occupies bytes `[i * width, (i + 1) * width)` of the storage.
/// The width is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElementLayout {
    width: usize,
}

impl ElementLayout {
    pub fn new(width: usize) -> Result<Self, DynVecError> {
        if width == 0 {
            return Err(DynVecError::InvalidArgument {
                reason: "element width must be non-zero",
            });
        }
        Ok(Self { width })
    }

    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    /// Number of bytes needed for `count` elements.
    ///
    /// Returns `None` if the result does not fit an allocation (`isize::MAX`).
    pub fn byte_len(self, count: usize) -> Option<usize> {
        let bytes = count.checked_mul(self.width)?;
        if bytes > isize::MAX as usize {
            return None;
        }
        Some(bytes)
    }

    /// Byte range of the element at `index`.
    ///
    /// # Contract
    ///
    /// The caller guarantees `index` is below a capacity that was validated with
    /// `byte_len`, so the multiplication cannot overflow.
    #[inline]
    pub fn slot(self, index: usize) -> Range<usize> {
        let start = index * self.width;
        start..start + self.width
    }

    /// Byte range covering the elements `[start, end)`.
    #[inline]
    pub fn span(self, start: usize, end: usize) -> Range<usize> {
        start * self.width..end * self.width
    }

    pub fn check_value(self, value: &[u8]) -> Result<(), DynVecError> {
        if value.len() != self.width {
            return Err(DynVecError::InvalidArgument {
                reason: "value length differs from element width",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            ElementLayout::new(0),
            Err(DynVecError::InvalidArgument {
                reason: "element width must be non-zero"
            })
        );
    }

    #[test]
    fn test_slot_and_span() {
        let layout = ElementLayout::new(4).unwrap();
        assert_eq!(layout.slot(0), 0..4);
        assert_eq!(layout.slot(3), 12..16);
        assert_eq!(layout.span(1, 3), 4..12);
        assert_eq!(layout.span(2, 2), 8..8);
    }

    #[test]
    fn test_byte_len_overflow() {
        let layout = ElementLayout::new(8).unwrap();
        assert_eq!(layout.byte_len(10), Some(80));
        assert_eq!(layout.byte_len(usize::MAX), None);
        assert_eq!(layout.byte_len(isize::MAX as usize / 8 + 1), None);

        let byte_layout = ElementLayout::new(1).unwrap();
        assert_eq!(byte_layout.byte_len(isize::MAX as usize), Some(isize::MAX as usize));
    }

    #[test]
    fn test_check_value() {
        let layout = ElementLayout::new(2).unwrap();
        assert!(layout.check_value(&[1, 2]).is_ok());
        assert!(layout.check_value(&[1]).is_err());
        assert!(layout.check_value(&[1, 2, 3]).is_err());
    }
}
