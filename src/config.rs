use crate::error::ConfigError;
use crate::rotation::ROTATION_INTERVAL;
use crate::scheme::{self, CATALOG, STAR_COUNT, TRAIL_ALPHA};

const MAX_STARS: usize = 256;

/// Shortest accepted scheme interval, in seconds.
pub const MIN_INTERVAL: f64 = 0.1;

/// Every key understood by [`Config::apply`].
pub const KEYS: [&str; 5] = ["loop", "stars", "interval", "scheme", "trail"];

/// Tunables for a show. Defaults reproduce the stock animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Keep requesting frames after the first one.
    pub looping: bool,
    pub star_count: usize,
    /// Seconds between scheme switches.
    pub rotation_interval: f64,
    pub first_scheme: usize,
    /// Opacity of the per-frame fade.
    pub trail_alpha: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            looping: true,
            star_count: STAR_COUNT,
            rotation_interval: ROTATION_INTERVAL,
            first_scheme: 0,
            trail_alpha: TRAIL_ALPHA,
        }
    }
}

impl Config {
    /// Apply a single `key=value` override.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "loop" => {
                self.looping = match value {
                    "1" | "true" | "yes" => true,
                    "0" | "false" | "no" => false,
                    _ => return Err(invalid("loop", value, "expected a boolean")),
                }
            }
            "stars" => {
                self.star_count = value
                    .parse::<usize>()
                    .ok()
                    .filter(|count| (1..=MAX_STARS).contains(count))
                    .ok_or_else(|| invalid("stars", value, "must be between 1 and 256"))?;
            }
            "interval" => {
                self.rotation_interval = value
                    .parse::<f64>()
                    .ok()
                    .filter(|seconds| seconds.is_finite() && *seconds >= MIN_INTERVAL)
                    .ok_or_else(|| invalid("interval", value, "must be at least 0.1 seconds"))?;
            }
            "scheme" => {
                self.first_scheme = match value.parse::<usize>() {
                    Ok(index) if index < CATALOG.len() => index,
                    _ => scheme::find(value)
                        .ok_or_else(|| ConfigError::UnknownScheme(value.to_string()))?,
                };
            }
            "trail" => {
                self.trail_alpha = value
                    .parse::<f64>()
                    .ok()
                    .filter(|alpha| (0.0..=1.0).contains(alpha))
                    .ok_or_else(|| invalid("trail", value, "must be between 0 and 1"))?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Period of the scheme timer in milliseconds, never below 1 ms.
    ///
    /// A show that draws a single frame has nothing to rotate, so it gets no
    /// timer at all.
    pub fn rotation_timer_ms(&self) -> Option<i32> {
        if !self.looping {
            return None;
        }
        let millis = (self.rotation_interval * 1000.0).round() as i32;
        Some(millis.max(1))
    }

    /// Build a config from key/value pairs, skipping (and reporting) bad entries.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let errors = pairs
            .into_iter()
            .filter_map(|(key, value)| config.apply(key.as_ref(), value.as_ref()).err())
            .collect();
        (config, errors)
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}
