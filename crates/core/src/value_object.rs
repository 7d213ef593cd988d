//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated after construction;
/// two values with the same attributes are the same value. Ticket requests and
/// per-category counts are modelled this way.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Seats(u64);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(3), Seats(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
