#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[cfg(test)]
extern crate self as adt_enum;

pub mod ctor;
mod enumeration;
mod macros;
pub mod shape;
mod variant;

/// Case analysis over a logical enum value.
///
/// Arms are written like `match` arms over variant types and tried in order.
/// `Variant(a, b)` binds the payload fields positionally by reference, a
/// single pattern binds the whole payload and `Variant` alone matches without
/// binding. Or-patterns, guards and `name @ Variant(..)` bindings are
/// supported.
///
/// Dispatch is open: the last arm must be a wildcard, `_` or a name bound to
/// the enum value, and it takes every variant no other arm matched.
///
/// A bare identifier is read as a variant type only when it is written in
/// Pascal case (`PageLoad`). Any other bare identifier, including an all-caps
/// one such as `IO`, binds the enum value like a wildcard. Name such variants
/// with a path or parentheses instead: `IO()` or `self::IO`.
///
/// # Examples
///
/// ```rust
/// use adt_enum::{ctor, match_enum, shape::{One, Two}, Enumeration, Member};
///
/// adt_enum::enumeration! {
///     pub struct Pointer;
/// }
///
/// adt_enum::variant! {
///     pub struct Move(Two<i32, i32>): Pointer;
///     pub struct Scroll(One<f32>): Pointer;
///     pub struct Leave(One<()>): Pointer;
/// }
///
/// fn describe(event: &Pointer) -> String {
///     match_enum!(event {
///         Move(x, y) if *x < 0 || *y < 0 => "offscreen".to_string(),
///         Move(x, y) => format!("move to {x},{y}"),
///         Scroll(delta) => format!("scroll by {delta}"),
///         other => format!("unhandled {}", other.variant_name()),
///     })
/// }
///
/// let event: Pointer = ctor::two::<Move, _, _>()(3, 4).enum_type();
/// assert_eq!(describe(&event), "move to 3,4");
///
/// let event: Pointer = ctor::one::<Leave, _>()(()).enum_type();
/// assert!(describe(&event).starts_with("unhandled"));
/// ```
pub use adt_enum_macros::match_enum;

pub use self::{
    enumeration::{Enumeration, Erased, Member, Mismatch, Seal},
    variant::{Payload, Variant},
};
