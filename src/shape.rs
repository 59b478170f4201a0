//! The payload carriers that variant types are declared over.
//!
//! Every shape is a fixed-arity, positional payload holder. Arity 0 ([`Const`])
//! and arity 1 ([`One`]) both carry a single value; they differ only in what
//! the payload means to a reader: a fixed tag versus a carried field. Shapes of
//! arity 2 through 10 carry an ordered tuple, field `i` always in slot `i`.
//!
//! A payload that needs more than ten fields should be carried as a single
//! aggregate value in [`One`].

/// The trait that every payload shape implements.
pub trait Shape: Sized {
    /// The value handed back by the accessor: a single value for arity 0 and
    /// 1, a tuple for arity 2 and up.
    type Payload;

    /// The number of payload fields.
    const ARITY: usize;

    fn from_payload(payload: Self::Payload) -> Self;

    fn payload(&self) -> &Self::Payload;

    fn into_payload(self) -> Self::Payload;
}

/// A constant payload, fixed when the constructor is created.
///
/// See [`ctor::constant`](crate::ctor::constant).
#[derive(Clone, Copy, Debug)]
pub struct Const<A>(A);

impl<A> Shape for Const<A> {
    type Payload = A;
    const ARITY: usize = 0;

    fn from_payload(payload: A) -> Self {
        Const(payload)
    }

    fn payload(&self) -> &A {
        &self.0
    }

    fn into_payload(self) -> A {
        self.0
    }
}

/// A payload of exactly one field.
#[derive(Clone, Copy, Debug)]
pub struct One<A>(A);

impl<A> Shape for One<A> {
    type Payload = A;
    const ARITY: usize = 1;

    fn from_payload(payload: A) -> Self {
        One(payload)
    }

    fn payload(&self) -> &A {
        &self.0
    }

    fn into_payload(self) -> A {
        self.0
    }
}

macro_rules! tuple_shapes {
    ($($(#[$meta:meta])* $name:ident<$($ty:ident),+> = $arity:literal;)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<$($ty),+>(($($ty,)+));

        impl<$($ty),+> Shape for $name<$($ty),+> {
            type Payload = ($($ty,)+);
            const ARITY: usize = $arity;

            fn from_payload(payload: Self::Payload) -> Self {
                $name(payload)
            }

            fn payload(&self) -> &Self::Payload {
                &self.0
            }

            fn into_payload(self) -> Self::Payload {
                self.0
            }
        }
    )*};
}

tuple_shapes! {
    /// A payload of two positional fields.
    Two<A, B> = 2;
    /// A payload of three positional fields.
    Three<A, B, C> = 3;
    /// A payload of four positional fields.
    Four<A, B, C, D> = 4;
    /// A payload of five positional fields.
    Five<A, B, C, D, E> = 5;
    /// A payload of six positional fields.
    Six<A, B, C, D, E, F> = 6;
    /// A payload of seven positional fields.
    Seven<A, B, C, D, E, F, G> = 7;
    /// A payload of eight positional fields.
    Eight<A, B, C, D, E, F, G, H> = 8;
    /// A payload of nine positional fields.
    Nine<A, B, C, D, E, F, G, H, I> = 9;
    /// A payload of ten positional fields.
    Ten<A, B, C, D, E, F, G, H, I, J> = 10;
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;

    #[test]
    fn arity() {
        assert_eq!(Const::<&str>::ARITY, 0);
        assert_eq!(One::<char>::ARITY, 1);
        assert_eq!(Two::<i32, i32>::ARITY, 2);
        assert_eq!(Five::<u8, u8, u8, u8, u8>::ARITY, 5);
        assert_eq!(
            Ten::<u8, u16, u32, u64, i8, i16, i32, i64, char, bool>::ARITY,
            10
        );
    }

    #[test]
    fn positional() {
        let shape = Three::from_payload((1u8, "two".to_string(), 3.0f64));
        let (a, b, c) = shape.payload();
        assert_eq!(*a, 1);
        assert_eq!(b, "two");
        assert_eq!(*c, 3.0);

        let (_, b, _): (u8, String, f64) = shape.into_payload();
        assert_eq!(b, "two");
    }

    #[test]
    fn single() {
        let shape = One::from_payload('x');
        assert_eq!(*shape.payload(), 'x');
        assert_eq!(Const::from_payload("PageLoad").into_payload(), "PageLoad");
    }
}
