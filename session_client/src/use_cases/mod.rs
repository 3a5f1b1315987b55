pub mod authenticate;
pub mod check_session;
pub mod client_session;
pub mod login_redirect;
#[cfg(test)]
pub(crate) mod test_support;

pub use authenticate::{AuthRoutes, AuthenticateUseCase};
pub use check_session::CheckSessionUseCase;
pub use client_session::ClientSession;
pub use login_redirect::LoginRedirect;
