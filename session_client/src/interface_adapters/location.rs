use std::sync::Mutex;

use tracing::warn;
use url::Url;

use crate::domain::Location;

// Location backed by a URL held in memory; assignments replace it.
pub struct PageLocation {
    current: Mutex<Url>,
}

impl PageLocation {
    pub fn new(url: Url) -> Self {
        Self {
            current: Mutex::new(url),
        }
    }

    pub fn current(&self) -> Option<Url> {
        self.current.lock().ok().map(|url| url.clone())
    }
}

impl Location for PageLocation {
    fn hostname(&self) -> String {
        self.current()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn assign(&self, target: &str) {
        let parsed = match Url::parse(target) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(error = %err, %target, "ignoring navigation to invalid url");
                return;
            }
        };
        if let Ok(mut current) = self.current.lock() {
            *current = parsed;
        }
    }
}
