// Build-time site configuration.
//
// Set SITE_BASE_PATH when building for a sub-path deployment, e.g.
// `SITE_BASE_PATH=/NetworkOfOne-website trunk build --release --public-url /NetworkOfOne-website/`

pub fn get_base_path() -> String {
    normalize_base_path(option_env!("SITE_BASE_PATH").unwrap_or(""))
}

/// Turns whatever was configured into either `""` or `/a/b` (leading slash,
/// no trailing slash, no empty segments).
pub fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}

pub fn join_asset(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn asset_url(path: &str) -> String {
    join_asset(&get_base_path(), path)
}

/// Link to an in-page anchor on the home page, usable from other routes.
pub fn home_anchor(anchor: &str) -> String {
    format!("{}/#{}", get_base_path(), anchor.trim_start_matches('#'))
}

pub const LOGO_PATH: &str = "assets/img/logo-white.jpg";
pub const HERO_VIDEO_PATH: &str = "assets/gif.mp4";
pub const INTRO_VIDEO_PATH: &str = "assets/intro.mp4";
pub const DIAGRAM_PATH: &str = "assets/systemdiagram.png";
pub const CONTACT_EMAIL: &str = "contact@networkof.one";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_path_stays_empty() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("  "), "");
    }

    #[test]
    fn base_path_gets_leading_slash_and_loses_trailing_one() {
        assert_eq!(normalize_base_path("NetworkOfOne-website"), "/NetworkOfOne-website");
        assert_eq!(normalize_base_path("/NetworkOfOne-website/"), "/NetworkOfOne-website");
        assert_eq!(normalize_base_path("//a//b/"), "/a/b");
    }

    #[test]
    fn assets_join_with_a_single_slash() {
        assert_eq!(join_asset("", LOGO_PATH), "/assets/img/logo-white.jpg");
        assert_eq!(join_asset("/site", "/assets/gif.mp4"), "/site/assets/gif.mp4");
        assert_eq!(join_asset("/site/", "assets/gif.mp4"), "/site/assets/gif.mp4");
    }

    #[test]
    fn home_anchors_point_at_the_landing_page() {
        let base = get_base_path();
        assert_eq!(home_anchor("about"), format!("{}/#about", base));
        assert_eq!(home_anchor("#demo"), format!("{}/#demo", base));
    }
}
