//! Platform name to logo URL. Pure string work, no lookups.

pub const LOGO_BASE_URL: &str = "https://logo.clearbit.com/";
pub const DOMAIN_SUFFIX: &str = ".com";

/// Lower-cased ASCII alphanumerics of `platform` plus `.com`.
pub fn platform_domain(platform: &str) -> String {
    let mut domain: String = platform
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    domain.push_str(DOMAIN_SUFFIX);
    domain
}

pub fn logo_url(platform: &str) -> String {
    format!("{LOGO_BASE_URL}{}", platform_domain(platform))
}
