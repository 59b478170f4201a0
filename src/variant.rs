use crate::shape::Shape;

/// The payload type of a variant type `V`.
pub type Payload<V> = <<V as Variant>::Shape as Shape>::Payload;

/// A nominal variant type declared over a payload [`Shape`].
///
/// Two variant types over the same shape stay distinct: dispatch goes by the
/// variant type, never by its shape. Use the [`variant!`](crate::variant)
/// macro to declare one.
///
/// # Examples
///
/// ```rust
/// use adt_enum::{shape::Two, Variant};
///
/// adt_enum::variant! {
///     pub struct Click(Two<i32, i32>);
/// }
///
/// let click = adt_enum::ctor::two::<Click, _, _>()(20, 80);
/// assert_eq!(click.get(), (20, 80));
/// ```
pub trait Variant: Sized {
    type Shape: Shape;

    fn from_shape(shape: Self::Shape) -> Self;

    fn shape(&self) -> &Self::Shape;

    fn into_shape(self) -> Self::Shape;

    /// Borrows the payload.
    fn payload(&self) -> &Payload<Self> {
        self.shape().payload()
    }

    /// Returns a copy of the payload, exactly as it was given on construction.
    fn get(&self) -> Payload<Self>
    where
        Payload<Self>: Clone,
    {
        self.payload().clone()
    }

    fn into_payload(self) -> Payload<Self> {
        self.into_shape().into_payload()
    }
}
