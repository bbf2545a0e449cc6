//! Course banner image source with remote-to-local fallback.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Remotely hosted banner. Replace with the real asset URL (or a signed URL).
pub const REMOTE_COURSE_BANNER: &str = "https://imgur.com/undefined";
/// Locally hosted banner served from the site's static assets.
pub const FALLBACK_COURSE_BANNER: &str = "/images/flagship-compass.png";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerSource {
    #[default]
    Remote,
    Fallback,
}

/// Resolved banner URL. Starts on the remote asset and drops to the fallback
/// on the first load error; it never returns to the remote URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerImage {
    pub remote: &'static str,
    pub fallback: &'static str,
    pub source: BannerSource,
}

impl Default for BannerImage {
    fn default() -> Self {
        Self::new(REMOTE_COURSE_BANNER, FALLBACK_COURSE_BANNER)
    }
}

impl BannerImage {
    pub fn new(remote: &'static str, fallback: &'static str) -> Self {
        Self { remote, fallback, source: BannerSource::Remote }
    }

    /// URL the `<img>` should currently display.
    pub fn src(&self) -> &'static str {
        match self.source {
            BannerSource::Remote => self.remote,
            BannerSource::Fallback => self.fallback,
        }
    }

    /// Switch to the fallback. Returns `true` if the source changed, so an
    /// error on the fallback itself is a no-op and cannot loop.
    pub fn on_error(&mut self) -> bool {
        if self.source == BannerSource::Fallback {
            return false;
        }
        self.source = BannerSource::Fallback;
        true
    }
}
