use super::ports::{Clock, ClockBox, TokenSource, TokenSourceBox};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Brand tag prefixed to every generated reference.
pub const REFERENCE_PREFIX: &str = "ZAFTA";

/// Length of the random suffix in generated references.
pub const TOKEN_LENGTH: usize = 6;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Wall-clock milliseconds from the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }
}

/// Base-36 tokens derived from a random fraction out of the thread RNG.
pub struct ThreadRngTokenSource;

impl TokenSource for ThreadRngTokenSource {
    fn token(&self, len: usize) -> String {
        let mut frac: f64 = rand::thread_rng().r#gen();
        let mut token = String::with_capacity(len);
        for _ in 0..len {
            frac *= 36.0;
            let digit = frac as usize;
            frac -= digit as f64;
            token.push(BASE36_ALPHABET[digit] as char);
        }
        token
    }
}

/// Generates human-readable transaction references of the form
/// `ZAFTA-<millis>-<6-char uppercase base-36>`.
///
/// References are "extremely likely unique", nothing stronger: the suffix is
/// six base-36 characters and the timestamp disambiguates across time. The
/// store rejects the rare collision.
pub struct ReferenceGenerator {
    clock: ClockBox,
    tokens: TokenSourceBox,
}

impl ReferenceGenerator {
    pub fn new(clock: ClockBox, tokens: TokenSourceBox) -> Self {
        Self { clock, tokens }
    }

    /// Generator backed by the system clock and the thread RNG.
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock), Box::new(ThreadRngTokenSource))
    }

    pub fn generate(&self) -> String {
        format!(
            "{REFERENCE_PREFIX}-{}-{}",
            self.clock.now_millis(),
            self.tokens.token(TOKEN_LENGTH)
        )
    }
}
