use std::time::{SystemTime, UNIX_EPOCH};

/// Current unix-epoch time in milliseconds.
///
/// Entity timestamps (`created_at`, `sent_at`) all come from here unless the
/// platform supplies its own.
#[must_use]
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2024() {
        // 2024-01-01T00:00:00Z in ms.
        assert!(now_ms() > 1_704_067_200_000);
    }
}
