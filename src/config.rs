/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub slide_count: u32,
    pub seed: bool,
}

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_SLIDE_COUNT: u32 = 12;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            slide_count: DEFAULT_SLIDE_COUNT,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Read `PITCHDECK_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Invalid values
    /// fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("PITCHDECK_BIND").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }
        if let Some(dir) = lookup("PITCHDECK_STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            config.static_dir = dir.trim().to_string();
        }
        if let Some(raw) = lookup("PITCHDECK_SLIDE_COUNT") {
            match raw.trim().parse::<u32>() {
                Ok(n) if n >= 1 => config.slide_count = n,
                _ => log::warn!(
                    "PITCHDECK_SLIDE_COUNT={raw:?} is not a positive number, using {DEFAULT_SLIDE_COUNT}"
                ),
            }
        }
        if let Some(raw) = lookup("PITCHDECK_SEED") {
            match parse_bool(&raw) {
                Some(seed) => config.seed = seed,
                None => log::warn!(
                    "PITCHDECK_SEED={raw:?} is not a boolean, seeding example data"
                ),
            }
        }

        config
    }
}

/// Load `.env` into the process environment. A missing file is fine; a
/// broken one is reported once logging is up.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(_) => None,
        Err(e) if e.not_found() => None,
        Err(e) => Some(e),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
