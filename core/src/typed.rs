use std::{rc::Rc, sync::Arc};

/// Runtime type information of a set item.
///
/// `type_name` is what gets reported when an item is rejected, `is_a` answers
/// [`Validator::of_type`](crate::Validator::of_type) constraints. Override `is_a`
/// to model a type hierarchy (an item may satisfy several tags).
pub trait Typed {
    fn type_name(&self) -> &str;

    fn is_a(&self, tag: &str) -> bool {
        self.type_name() == tag
    }
}

/// Strict identity between two items.
///
/// Values compare by value, shared handles by address: two distinct `Rc`s
/// holding equal objects are *not* identical.
pub trait Identical {
    fn is_identical(&self, other: &Self) -> bool;
}

macro_rules! impl_primitive {
    ($($ty:ty),*) => {
        $(
            impl Typed for $ty {
                fn type_name(&self) -> &str {
                    stringify!($ty)
                }
            }

            impl Identical for $ty {
                #[inline(always)]
                fn is_identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_primitive!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String);

impl Typed for &str {
    fn type_name(&self) -> &str {
        "str"
    }
}

impl Identical for &str {
    fn is_identical(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: Typed + ?Sized> Typed for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn is_a(&self, tag: &str) -> bool {
        (**self).is_a(tag)
    }
}

impl<T: Typed + ?Sized> Typed for Rc<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn is_a(&self, tag: &str) -> bool {
        (**self).is_a(tag)
    }
}

impl<T: Typed + ?Sized> Typed for Arc<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn is_a(&self, tag: &str) -> bool {
        (**self).is_a(tag)
    }
}

impl<T: ?Sized> Identical for Box<T> {
    fn is_identical(&self, other: &Self) -> bool {
        std::ptr::eq(
            &**self as *const T as *const u8,
            &**other as *const T as *const u8,
        )
    }
}

impl<T: ?Sized> Identical for Rc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Arc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}
