use std::{
    fmt::Debug,
    io::{self, BufReader, BufWriter},
    path::Path,
};

use fs_err::{File, OpenOptions};
use leetcode_picker_utils::fs_json_util::create_parent_dir;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Session cookies of a logged-in browser, as saved in `auth.json`.
#[derive(Clone, TypedBuilder, Serialize, Deserialize)]
pub struct LeetcodeCookies {
    #[serde(rename = "leetcode_session")]
    pub session: SessionCookie,
    pub csrf_token: CsrfToken,
}
impl Debug for LeetcodeCookies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeetcodeCookies").finish_non_exhaustive()
    }
}

/// Value of the `LEETCODE_SESSION` cookie.
#[derive(Clone, derive_more::From, derive_more::Display, Serialize, Deserialize)]
pub struct SessionCookie(String);

/// Value of the `csrftoken` cookie, also sent as the `X-CSRFToken` header.
#[derive(Clone, derive_more::From, derive_more::Display, Serialize, Deserialize)]
pub struct CsrfToken(String);

impl LeetcodeCookies {
    pub fn load(path: &Path) -> Result<Self, AuthLoadError> {
        let cookies: Self = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        if cookies.session.0.trim().is_empty() || cookies.csrf_token.0.trim().is_empty() {
            return Err(AuthLoadError::Incomplete);
        }
        Ok(cookies)
    }

    /// Saves to `path`, readable by the owner only.
    /// The file never exists with looser permissions, even briefly.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        create_parent_dir(path)?;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use fs_err::os::unix::fs::OpenOptionsExt;
            use std::os::unix::fs::PermissionsExt;
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs_err::set_permissions(dir, std::fs::Permissions::from_mode(0o700))?;
            }
            options.mode(0o600);
        }
        let file = options.open(path)?;
        // `mode` only applies on creation.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn cookie_header(&self) -> String {
        format!(
            "LEETCODE_SESSION={}; csrftoken={}",
            self.session, self.csrf_token
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthLoadError {
    #[error("Credentials were not found. Run the `auth` command first.")]
    NotFound,
    #[error("An I/O error occurred when loading the credentials: {0:?}")]
    IOError(io::Error),
    #[error("The credentials json file is corrupted and could not be loaded: {0:?}")]
    JsonError(#[from] serde_json::Error),
    #[error("The credentials file has an empty session or CSRF token.")]
    Incomplete,
}
impl From<io::Error> for AuthLoadError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::IOError(e),
        }
    }
}
