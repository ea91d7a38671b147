//! Macros for ergonomic route declaration.

/// Build an event-to-destination route map declaratively.
///
/// Each entry routes an event either to a screen key or, with `@done`,
/// to the terminal endpoint.
///
/// # Example
///
/// ```
/// use screenflow::routes;
/// use screenflow::core::Step;
///
/// let map = routes! {
///     "login".to_string() => "dashboard".to_string(),
///     "quit".to_string() => @done,
/// };
///
/// assert_eq!(map.get("login"), Some(&Step::Screen("dashboard".to_string())));
/// assert_eq!(map.get("quit"), Some(&Step::Done));
/// ```
#[macro_export]
macro_rules! routes {
    () => {
        ::std::collections::HashMap::new()
    };
    ($($rest:tt)+) => {{
        let mut map = ::std::collections::HashMap::new();
        $crate::__routes_insert!(map; $($rest)+);
        map
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __routes_insert {
    ($map:ident;) => {};
    ($map:ident; $event:expr => @done $(, $($rest:tt)*)?) => {
        $map.insert($event, $crate::core::Step::Done);
        $($crate::__routes_insert!($map; $($rest)*);)?
    };
    ($map:ident; $event:expr => $screen:expr $(, $($rest:tt)*)?) => {
        $map.insert($event, $crate::core::Step::Screen($screen));
        $($crate::__routes_insert!($map; $($rest)*);)?
    };
}
