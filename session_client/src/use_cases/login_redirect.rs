use tracing::info;

use crate::domain::Location;

// Host treated as local development when picking the login page.
const LOCAL_HOSTNAME: &str = "localhost";

// Full-page redirect to the external login page.
pub struct LoginRedirect<L> {
    pub location: L,
    pub local_url: String,
    pub remote_url: String,
}

impl<L> LoginRedirect<L>
where
    L: Location,
{
    pub fn login_url(&self) -> &str {
        if self.location.hostname() == LOCAL_HOSTNAME {
            &self.local_url
        } else {
            &self.remote_url
        }
    }

    pub fn redirect_to_login(&self) {
        let url = self.login_url();
        info!(%url, "redirecting to login");
        self.location.assign(url);
    }
}
