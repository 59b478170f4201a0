//! Logical enum types and the membership marker that binds variants to them.
//!
//! A logical enum type owns an [`Erased`] variant value. Which variant types
//! belong to it is decided by each variant type on its own, by implementing
//! [`Member`] for that enum. Nothing keeps a list of the members, so case
//! analysis over an enum is open: a call site names the variants it knows and
//! decides itself what happens to the rest.

use alloc::boxed::Box;
use core::{
    any::{self, Any, TypeId},
    fmt,
    marker::PhantomData,
};

use log::trace;
use thiserror::Error;

use crate::variant::{Payload, Variant};

/// An owned variant value of the enum `E`, with its type erased.
///
/// Only [`Member::enum_type`] puts a value into an `Erased`, so an enum value
/// always holds one of its members. A type that is not a member cannot be
/// stored:
///
/// ```rust,compile_fail
/// use adt_enum::{Enumeration, Erased};
///
/// adt_enum::enumeration! {
///     pub struct Ev;
/// }
///
/// struct Stranger;
///
/// let ev = Ev::from_erased(Erased::new(Stranger));
/// ```
pub struct Erased<E> {
    value: Box<dyn Any + Send + Sync>,
    name: &'static str,
    _owner: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Erased<E> {
    pub(crate) fn new<V: Member<E>>(value: V) -> Self {
        Erased {
            value: Box::new(value),
            name: any::type_name::<V>(),
            _owner: PhantomData,
        }
    }
}

impl<E> Erased<E> {
    /// The type name of the variant held.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type id of the variant held.
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref()
    }

    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        let Erased { value, name, _owner } = self;
        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Erased {
                value,
                name,
                _owner,
            }),
        }
    }
}

impl<E> fmt::Debug for Erased<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The error returned when narrowing an enum value to a variant type it does
/// not hold.
///
/// The enum value is handed back untouched.
#[derive(Debug, Error)]
#[error("expected variant `{expected}`, found `{found}`")]
pub struct Mismatch<E> {
    expected: &'static str,
    found: &'static str,
    value: E,
}

impl<E> Mismatch<E> {
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    pub fn found(&self) -> &'static str {
        self.found
    }

    pub fn into_inner(self) -> E {
        self.value
    }
}

/// Proof that a call comes from inside this crate.
///
/// It cannot be built elsewhere, which keeps [`Enumeration::from_erased`] and
/// [`Enumeration::into_erased`] out of reach of everything but
/// [`Member::enum_type`] and [`Enumeration::narrow`].
#[doc(hidden)]
pub struct Seal(());

/// A logical enum type: a handle to a value of any of its member variants.
///
/// Declare one with the [`enumeration!`](crate::enumeration) macro. A value
/// is only ever built by [`Member::enum_type`]. The erased value is tagged
/// with its enum, so a variant cannot be moved into an enum it is not a
/// member of, even next to the declaration:
///
/// ```rust,compile_fail
/// use adt_enum::{ctor, shape::One, Member};
///
/// adt_enum::enumeration! {
///     pub struct Shapes;
///     pub struct Colors;
/// }
///
/// adt_enum::variant! {
///     pub struct Circle(One<u32>): Shapes;
/// }
///
/// let shapes: Shapes = ctor::one::<Circle, _>()(1).enum_type();
/// let colors = Colors(shapes.0);
/// ```
pub trait Enumeration: Sized + 'static {
    #[doc(hidden)]
    fn from_erased(erased: Erased<Self>, seal: Seal) -> Self;

    fn as_erased(&self) -> &Erased<Self>;

    #[doc(hidden)]
    fn into_erased(self, seal: Seal) -> Erased<Self>;

    /// The type name of the variant held.
    fn variant_name(&self) -> &'static str {
        self.as_erased().name()
    }

    /// The type id of the variant held.
    fn variant_id(&self) -> TypeId {
        self.as_erased().type_id()
    }

    /// Returns `true` if the value is exactly the variant type `V`.
    fn is<V: Member<Self>>(&self) -> bool {
        self.as_erased().is::<V>()
    }

    /// Narrows to a borrowed `V`, or `None` if the value is another variant.
    fn get<V: Member<Self>>(&self) -> Option<&V> {
        self.as_erased().downcast_ref()
    }

    /// Narrows to an owned `V`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adt_enum::{ctor, shape::One, Enumeration, Member};
    ///
    /// adt_enum::enumeration! {
    ///     pub struct Input;
    /// }
    ///
    /// adt_enum::variant! {
    ///     #[derive(Debug)]
    ///     pub struct Key(One<char>): Input;
    ///     #[derive(Debug)]
    ///     pub struct Text(One<String>): Input;
    /// }
    ///
    /// let input: Input = ctor::one::<Key, _>()('q').enum_type();
    /// let input = input.narrow::<Text>().unwrap_err().into_inner();
    /// let key = input.narrow::<Key>().unwrap();
    /// assert_eq!(adt_enum::Variant::get(&key), 'q');
    /// ```
    fn narrow<V: Member<Self>>(self) -> Result<V, Mismatch<Self>> {
        self.into_erased(Seal(())).downcast::<V>().map_err(|erased| {
            let expected = any::type_name::<V>();
            let found = erased.name();
            trace!("narrowing `{found}` to `{expected}` fell through");
            Mismatch {
                expected,
                found,
                value: Self::from_erased(erased, Seal(())),
            }
        })
    }

    /// Calls `f` with the payload if the value is the variant type `V`.
    fn inspect<V, F>(self, f: F) -> Self
    where
        V: Member<Self>,
        F: FnOnce(&Payload<V>),
    {
        if let Some(variant) = self.get::<V>() {
            f(variant.payload());
        }
        self
    }
}

/// The membership marker: implemented by a variant type for the logical enum
/// type it belongs to.
///
/// A variant type should be a member of a single enum. This is not checked;
/// a variant implementing `Member` for two enums can be dispatched on under
/// both.
///
/// Members must be `Send + Sync`, so enum values can be shared across
/// threads. Payloads such as `Rc` or `Cell` can still be carried by a
/// [`Variant`], but such a variant cannot join an enum.
pub trait Member<E: Enumeration>: Variant + Any + Send + Sync {
    /// Upcasts the variant into its enum type.
    fn enum_type(self) -> E {
        E::from_erased(Erased::new::<Self>(self), Seal(()))
    }
}
