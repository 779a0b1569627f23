use crate::cli::{
    actions::{server::Args, Action},
    commands::backend,
};
use anyhow::Result;

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(3000);
    let options = backend::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        api_base_url: options.api_base_url,
        session_cookie_name: options.session_cookie_name,
        session_cookie_secure: options.session_cookie_secure,
        backend_timeout_seconds: options.timeout_seconds,
    }))
}
