//! Constructor factories, one per payload arity.
//!
//! A factory is invoked once per variant type, typically to initialize a
//! `static`, and hands back a constructor. Factories for arity 1 and up are
//! `const fn`s returning plain function pointers:
//!
//! ```rust
//! use adt_enum::{ctor, shape::{Const, One}, Variant};
//!
//! adt_enum::variant! {
//!     pub struct KeyPress(One<char>);
//!     pub struct PageLoad(Const<&'static str>);
//! }
//!
//! pub static NEW_KEY_PRESS: fn(char) -> KeyPress = ctor::one();
//! pub static NEW_PAGE_LOAD: ctor::Constant<PageLoad, &str> = ctor::constant("PageLoad");
//!
//! assert_eq!(NEW_KEY_PRESS('x').get(), 'x');
//! assert_eq!(NEW_PAGE_LOAD.call().get(), "PageLoad");
//! ```
//!
//! Construction never fails and never inspects the values it is given.

use core::{fmt, marker::PhantomData};

use crate::{
    shape::*,
    variant::{Payload, Variant},
};

/// Builds any variant from its whole payload.
///
/// This is the arity-independent counterpart of the per-arity factories: the
/// payload is a single value for arity 0 and 1 and a tuple otherwise.
///
/// # Examples
///
/// ```rust
/// use adt_enum::{ctor, shape::Three, Variant};
///
/// adt_enum::variant! {
///     pub struct Rgb(Three<u8, u8, u8>);
/// }
///
/// let teal: Rgb = ctor::build((0, 128, 128));
/// assert_eq!(teal.get(), (0, 128, 128));
/// ```
pub fn build<V: Variant>(payload: Payload<V>) -> V {
    V::from_shape(<V::Shape as Shape>::from_payload(payload))
}

/// The constructor of an arity-0 variant type.
///
/// It closes over the value given to [`constant`] and yields a variant
/// carrying a clone of that value on every call.
pub struct Constant<V, A> {
    value: A,
    _marker: PhantomData<fn() -> V>,
}

/// Creates the constructor of an arity-0 variant type from its fixed value.
pub const fn constant<V, A>(value: A) -> Constant<V, A>
where
    V: Variant<Shape = Const<A>>,
{
    Constant {
        value,
        _marker: PhantomData,
    }
}

impl<V, A> Constant<V, A>
where
    V: Variant<Shape = Const<A>>,
    A: Clone,
{
    pub fn call(&self) -> V {
        V::from_shape(Const::from_payload(self.value.clone()))
    }
}

impl<V, A> Constant<V, A> {
    /// The value every constructed variant carries.
    pub fn value(&self) -> &A {
        &self.value
    }
}

impl<V, A: Clone> Clone for Constant<V, A> {
    fn clone(&self) -> Self {
        Constant {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<V, A: fmt::Debug> fmt::Debug for Constant<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constant")
            .field("variant", &core::any::type_name::<V>())
            .field("value", &self.value)
            .finish()
    }
}

fn make_one<V, A>(a: A) -> V
where
    V: Variant<Shape = One<A>>,
{
    V::from_shape(One::from_payload(a))
}

/// Creates the constructor of an arity-1 variant type.
pub const fn one<V, A>() -> fn(A) -> V
where
    V: Variant<Shape = One<A>>,
{
    make_one::<V, A>
}

macro_rules! tuple_constructors {
    ($($factory:ident, $make:ident => $shape:ident($($ty:ident $arg:ident),+);)*) => {$(
        fn $make<V, $($ty),+>($($arg: $ty),+) -> V
        where
            V: Variant<Shape = $shape<$($ty),+>>,
        {
            V::from_shape($shape::from_payload(($($arg,)+)))
        }

        #[doc = concat!(
            "Creates the constructor of a variant type over [`", stringify!($shape), "`]."
        )]
        pub const fn $factory<V, $($ty),+>() -> fn($($ty),+) -> V
        where
            V: Variant<Shape = $shape<$($ty),+>>,
        {
            $make::<V, $($ty),+>
        }
    )*};
}

tuple_constructors! {
    two, make_two => Two(A a, B b);
    three, make_three => Three(A a, B b, C c);
    four, make_four => Four(A a, B b, C c, D d);
    five, make_five => Five(A a, B b, C c, D d, E e);
    six, make_six => Six(A a, B b, C c, D d, E e, F f);
    seven, make_seven => Seven(A a, B b, C c, D d, E e, F f, G g);
    eight, make_eight => Eight(A a, B b, C c, D d, E e, F f, G g, H h);
    nine, make_nine => Nine(A a, B b, C c, D d, E e, F f, G g, H h, I i);
    ten, make_ten => Ten(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;

    crate::variant! {
        struct Tag(Const<&'static str>);
        struct Label(One<String>);
        struct Point(Two<i32, i32>);
        struct Wide(Ten<u8, u16, u32, u64, i8, i16, i32, i64, char, bool>);
    }

    static NEW_TAG: Constant<Tag, &str> = constant("tag");
    static NEW_POINT: fn(i32, i32) -> Point = two();

    crate::variant! {
        struct Quad(Four<u8, u16, u32, u64>);
        struct Quint(Five<u8, u16, u32, u64, i8>);
        struct Sext(Six<u8, u16, u32, u64, i8, i16>);
        struct Sept(Seven<u8, u16, u32, u64, i8, i16, i32>);
        struct Oct(Eight<u8, u16, u32, u64, i8, i16, i32, i64>);
        struct Non(Nine<u8, u16, u32, u64, i8, i16, i32, i64, char>);
    }

    static NEW_QUAD: fn(u8, u16, u32, u64) -> Quad = four();
    static NEW_QUINT: fn(u8, u16, u32, u64, i8) -> Quint = five();
    static NEW_SEXT: fn(u8, u16, u32, u64, i8, i16) -> Sext = six();
    static NEW_SEPT: fn(u8, u16, u32, u64, i8, i16, i32) -> Sept = seven();
    static NEW_OCT: fn(u8, u16, u32, u64, i8, i16, i32, i64) -> Oct = eight();
    static NEW_NON: fn(u8, u16, u32, u64, i8, i16, i32, i64, char) -> Non = nine();

    #[test]
    fn constant_is_stable() {
        let first = NEW_TAG.call();
        let second = NEW_TAG.call();
        assert_eq!(first.get(), "tag");
        assert_eq!(second.get(), "tag");
        assert_eq!(*NEW_TAG.value(), "tag");
    }

    #[test]
    fn fields_come_back_verbatim() {
        let label = one::<Label, _>()("hello".to_string());
        assert_eq!(label.payload(), "hello");
        assert_eq!(label.into_payload(), "hello");

        assert_eq!(NEW_POINT(20, 80).get(), (20, 80));

        let wide = ten::<Wide, _, _, _, _, _, _, _, _, _, _>()(
            1, 2, 3, 4, -5, -6, -7, -8, 'z', true,
        );
        assert_eq!(wide.get(), (1, 2, 3, 4, -5, -6, -7, -8, 'z', true));
    }

    #[test]
    fn middle_arities_keep_field_order() {
        assert_eq!(NEW_QUAD(1, 2, 3, 4).get(), (1u8, 2u16, 3u32, 4u64));
        assert_eq!(
            NEW_QUINT(1, 2, 3, 4, -5).get(),
            (1u8, 2u16, 3u32, 4u64, -5i8)
        );
        assert_eq!(
            NEW_SEXT(1, 2, 3, 4, -5, -6).get(),
            (1u8, 2u16, 3u32, 4u64, -5i8, -6i16)
        );
        assert_eq!(
            NEW_SEPT(1, 2, 3, 4, -5, -6, -7).get(),
            (1u8, 2u16, 3u32, 4u64, -5i8, -6i16, -7i32)
        );
        assert_eq!(
            NEW_OCT(1, 2, 3, 4, -5, -6, -7, -8).get(),
            (1u8, 2u16, 3u32, 4u64, -5i8, -6i16, -7i32, -8i64)
        );

        let non = NEW_NON(1, 2, 3, 4, -5, -6, -7, -8, 'n');
        assert_eq!(Nine::<u8, u16, u32, u64, i8, i16, i32, i64, char>::ARITY, 9);
        assert_eq!(
            non.into_payload(),
            (1u8, 2u16, 3u32, 4u64, -5i8, -6i16, -7i32, -8i64, 'n')
        );
    }

    #[test]
    fn build_matches_factories() {
        let point: Point = build((3, 4));
        assert_eq!(point.get(), NEW_POINT(3, 4).get());

        let tag: Tag = build("tag");
        assert_eq!(tag.get(), NEW_TAG.call().get());
    }

    #[test]
    fn constructors_are_independent() {
        let make = three::<Triple, _, _, _>();
        let a = make('a', 1, "one");
        let b = make('b', 2, "two");
        assert_eq!(a.get(), ('a', 1, "one"));
        assert_eq!(b.get(), ('b', 2, "two"));
    }

    crate::variant! {
        struct Triple(Three<char, i32, &'static str>);
    }
}
