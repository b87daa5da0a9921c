use log::Level;

/// Prefix for every asset URL. Set `LANDING_ASSET_BASE` at build time when the
/// page is served from a sub-path or a CDN.
#[cfg(debug_assertions)]
pub fn asset_base_url() -> &'static str {
    ""  // Trunk dev server serves assets from the root
}

#[cfg(not(debug_assertions))]
pub fn asset_base_url() -> &'static str {
    option_env!("LANDING_ASSET_BASE").unwrap_or("")
}

/// Maps a logical asset path such as `/assets/images/landing/image1.png` to a
/// deployable URL.
pub fn resolve_asset(path: &str) -> String {
    join_asset(asset_base_url(), path)
}

fn join_asset(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    /// Height of a card before it is measured in the DOM.
    pub card_height: f64,
    /// Negative gap so consecutive cards overlap.
    pub overlap: f64,
    /// How much of the incoming card's header stays visible above the active card.
    pub peek: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card_height: 520.0,
            overlap: -40.0,
            peek: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Radius when fully expanded.
    pub base_radius: f64,
    /// Radius when fully contracted.
    pub min_radius: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            base_radius: 900.0,
            min_radius: 310.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path_with_one_slash() {
        assert_eq!(join_asset("", "/assets/logo.png"), "/assets/logo.png");
        assert_eq!(
            join_asset("https://cdn.example.com/", "/assets/logo.png"),
            "https://cdn.example.com/assets/logo.png"
        );
        assert_eq!(join_asset("/landing", "assets/logo.png"), "/landing/assets/logo.png");
    }

    #[test]
    fn defaults_overlap_cards() {
        let stack = StackConfig::default();
        assert!(stack.overlap < 0.0);
        assert!(stack.card_height + stack.overlap > 0.0);

        let orbit = OrbitConfig::default();
        assert!(orbit.min_radius < orbit.base_radius);
    }
}
