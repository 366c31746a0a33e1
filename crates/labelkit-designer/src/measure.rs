//! Rendered-footprint measurement.

use std::collections::HashMap;

use labelkit_core::Size;

/// Reports the rendered size of an element, in pixels at the editor scale.
///
/// Text-like elements have no stored size, so alignment must ask whoever
/// drew them. `None` means the element is not currently rendered.
pub trait ElementMeasurer {
    fn measure(&self, id: &str) -> Option<Size>;
}

impl ElementMeasurer for HashMap<String, Size> {
    fn measure(&self, id: &str) -> Option<Size> {
        self.get(id).copied()
    }
}

impl<M: ElementMeasurer + ?Sized> ElementMeasurer for &M {
    fn measure(&self, id: &str) -> Option<Size> {
        (**self).measure(id)
    }
}
