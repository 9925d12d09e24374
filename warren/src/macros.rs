/// Declares a newtype identifier bound to one JSON:API resource type.
///
/// ```
/// warren::typed_id!(pub RouteId => "route");
///
/// let rid = warren::model::resource::ResourceIdentifier::new("route", "Red");
/// let id = RouteId::DECODER.decode(&rid).unwrap();
/// assert_eq!(id.as_str(), "Red");
/// ```
///
/// The wrapped string is private, so values only come out of `DECODER`.
#[macro_export]
macro_rules! typed_id {
    () => {};
    ($(#[$attr:meta])* $vis:vis $name:ident => $ty:expr) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(::std::string::String);

        impl $name {
            pub const DECODER: $crate::decoder::identifier::IdentifierDecoder<$name> =
                $crate::decoder::identifier::IdentifierDecoder::new($ty, $name);

            pub fn as_str(&self) -> &str { &self.0 }
        }

        impl $crate::decoder::identifier::TypedId for $name {
            const RESOURCE_TYPE: &'static str = $ty;

            fn decoder() -> $crate::decoder::identifier::IdentifierDecoder<Self> { Self::DECODER }

            fn as_str(&self) -> &str { &self.0 }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str { &self.0 }
        }
    };
    ($(#[$attr:meta])* $vis:vis $name:ident => $ty:expr; $($tail:tt)*) => {
        $crate::typed_id!($(#[$attr])* $vis $name => $ty);
        $crate::typed_id!($($tail)*);
    };
}
