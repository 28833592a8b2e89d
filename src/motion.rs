use std::time::Duration;

pub const TYPE_INTERVAL: Duration = Duration::from_millis(90);

/// Text shown after `tick` keystrokes. Stops at the full text.
pub fn typed_prefix(text: &str, tick: usize) -> &str {
    match text.char_indices().nth(tick) {
        Some((at, _)) => &text[..at],
        None => text,
    }
}

/// Deterministic value in `[0, 1)` for element `index` on channel `salt`.
pub fn scatter(index: usize, salt: u32) -> f64 {
    // splitmix64 finalizer
    let mut z = (index as u64)
        .wrapping_add(u64::from(salt).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

pub fn particles(count: usize) -> impl Iterator<Item = Particle> {
    (0..count).map(|i| Particle {
        left: scatter(i, 1) * 100.0,
        top: scatter(i, 2) * 100.0,
        delay: scatter(i, 3) * 5.0,
        duration: 3.0 + scatter(i, 4) * 4.0,
    })
}

const KEYWORDS: [&str; 6] = ["function", "const", "import", "export", "class", "async"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeColumn {
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    pub keyword: &'static str,
}

pub fn code_rain(columns: usize) -> impl Iterator<Item = CodeColumn> {
    (0..columns).map(|i| CodeColumn {
        left: i as f64 * 7.0,
        delay: scatter(i, 5) * 3.0,
        duration: 8.0 + scatter(i, 6) * 4.0,
        keyword: KEYWORDS[(scatter(i, 7) * KEYWORDS.len() as f64) as usize % KEYWORDS.len()],
    })
}
