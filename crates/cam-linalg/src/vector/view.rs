use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY {
    pub x: f32,
    pub y: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    _priv: (), // prevent external construction
}

macro_rules! field_view {
    ($($n:literal => $view:ident),+) => {$(
        impl Deref for Vector<$n> {
            type Target = $view;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Each view is `repr(C)` with one `f32` field per element, plus a ZST.
                unsafe { &*(&self.elems as *const [f32; $n]).cast::<$view>() }
            }
        }

        impl DerefMut for Vector<$n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                self.magnitude.invalidate();
                unsafe { &mut *(&mut self.elems as *mut [f32; $n]).cast::<$view>() }
            }
        }
    )+};
}

field_view!(2 => XY, 3 => XYZ, 4 => XYZW);

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(mem::size_of::<XY>(), mem::size_of::<[f32; 2]>());
        assert_eq!(mem::size_of::<XYZ>(), mem::size_of::<[f32; 3]>());
        assert_eq!(mem::size_of::<XYZW>(), mem::size_of::<[f32; 4]>());
        assert_eq!(mem::align_of::<XYZW>(), mem::align_of::<f32>());
    }
}
