//! Builder-style setters for shapes.

/// Generate chaining `with_*` setters for optional shape fields.
///
/// ```
/// #[derive(Debug, Default)]
/// pub struct GetDeviceInput {
///     pub device_key: Option<String>,
///     pub limit: Option<i32>,
/// }
///
/// awsmobile_core::with_setters!(GetDeviceInput {
///     with_device_key: device_key: String,
///     with_limit: limit: i32,
/// });
///
/// let input = GetDeviceInput::default().with_device_key("k").with_limit(5);
/// assert_eq!(input.device_key.as_deref(), Some("k"));
/// assert_eq!(input.limit, Some(5));
/// ```
#[macro_export]
macro_rules! with_setters {
    ($shape:ty { $($method:ident: $field:ident: $ty:ty),+ $(,)? }) => {
        impl $shape {
            $(
                #[doc = concat!("Set `", stringify!($field), "` and return the shape.")]
                #[must_use]
                pub fn $method(mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                    self.$field = ::std::option::Option::Some(value.into());
                    self
                }
            )+
        }
    };
}
