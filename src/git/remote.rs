use url::Url;

/// Remove user name and password from a URL-style remote.
///
/// scp-like remotes (`git@host:org/repo.git`) and anything else that does not
/// parse as a URL are returned as given.
pub fn strip_credentials(remote: &str) -> String {
    let Ok(mut url) = Url::parse(remote) else {
        return remote.to_string();
    };

    if url.username().is_empty() && url.password().is_none() {
        return remote.to_string();
    }

    if url.set_password(None).is_err() || url.set_username("").is_err() {
        return remote.to_string();
    }

    url.to_string()
}
