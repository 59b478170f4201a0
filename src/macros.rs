/// Declares nominal variant types over payload shapes.
///
/// Each declaration becomes a newtype over its shape implementing
/// [`Variant`](crate::Variant). Enum types listed after a `:` get a
/// [`Member`](crate::Member) implementation. Attributes are kept on the
/// declared type.
///
/// # Examples
///
/// ```rust
/// use adt_enum::shape::{One, Two};
///
/// adt_enum::enumeration! {
///     pub struct Pointer;
/// }
///
/// adt_enum::variant! {
///     #[derive(Clone, Debug)]
///     pub struct Move(Two<i32, i32>): Pointer;
///     pub struct Scroll(One<f32>): Pointer;
/// }
/// ```
#[macro_export]
macro_rules! variant {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($shape:ty) $(: $($enum:path),+ $(,)?)?;
    )*) => {$(
        $(#[$meta])*
        $vis struct $name($shape);

        impl $crate::Variant for $name {
            type Shape = $shape;

            fn from_shape(shape: $shape) -> Self {
                $name(shape)
            }

            fn shape(&self) -> &$shape {
                &self.0
            }

            fn into_shape(self) -> $shape {
                self.0
            }
        }

        $($(impl $crate::Member<$enum> for $name {})+)?
    )*};
}

/// Declares logical enum types.
///
/// The declared type holds one variant value of any of its members and
/// implements [`Enumeration`](crate::Enumeration) and `Debug`; its `Debug`
/// output names the variant held.
///
/// # Examples
///
/// ```rust
/// adt_enum::enumeration! {
///     /// Input events.
///     pub struct Input;
/// }
/// ```
#[macro_export]
macro_rules! enumeration {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)*) => {$(
        $(#[$meta])*
        $vis struct $name($crate::Erased<$name>);

        impl $crate::Enumeration for $name {
            fn from_erased(erased: $crate::Erased<Self>, _: $crate::Seal) -> Self {
                $name(erased)
            }

            fn as_erased(&self) -> &$crate::Erased<Self> {
                &self.0
            }

            fn into_erased(self, _: $crate::Seal) -> $crate::Erased<Self> {
                self.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(::core::stringify!($name)).field(&self.0).finish()
            }
        }
    )*};
}
