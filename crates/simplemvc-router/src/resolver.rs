//! Controller resolution seam
//!
//! The router never instantiates controllers itself. Whoever builds the
//! [`Router`](crate::Router) passes in something that turns a camel-cased
//! controller base name and an action name into an invocable.

/// Resolves `(controller, action)` into an invocable action
///
/// `controller` is the camel-cased base name (`"Posts"` for `posts#show`);
/// implementations decide how that maps onto concrete handlers. Failures
/// are returned to the caller of [`Router::lookup`](crate::Router::lookup)
/// untouched.
///
/// Closures implement this trait, which keeps tests and small apps short:
///
/// ```
/// use simplemvc_router::ControllerResolver;
///
/// let resolver = |controller: &str, action: &str| -> Result<String, String> {
///     Ok(format!("{controller}Controller::{action}"))
/// };
///
/// assert_eq!(resolver.resolve("Posts", "show").unwrap(), "PostsController::show");
/// ```
pub trait ControllerResolver {
    /// The invocable handed back for a resolved target
    type Action;
    /// Resolution failure, e.g. unknown controller
    type Error;

    fn resolve(&self, controller: &str, action: &str) -> Result<Self::Action, Self::Error>;
}

impl<F, A, E> ControllerResolver for F
where
    F: Fn(&str, &str) -> Result<A, E>,
{
    type Action = A;
    type Error = E;

    fn resolve(&self, controller: &str, action: &str) -> Result<A, E> {
        self(controller, action)
    }
}
