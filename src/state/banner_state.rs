//! Notification banner state.

use crate::config::BannerConfig;
use crate::storage::{BANNER_DISMISSED_KEY, KvStore};

/// State of the scrolling notification banner.
#[derive(Debug, Clone)]
pub struct BannerState {
    /// Marquee message.
    pub message: String,
    /// Community link opened from the banner.
    pub link_url: String,
    /// Whether the banner is shown.
    pub visible: bool,
    /// Whether the user may dismiss the banner.
    pub can_close: bool,
    /// Marquee scroll offset, advanced one cell per tick.
    pub offset: usize,
    /// Ticks since the banner became visible (drives auto-hide).
    pub age_ticks: u64,
    /// Auto-hide threshold in ticks (0 disables auto-hide).
    pub auto_hide_ticks: u64,
    /// A dismissal happened that has not been persisted yet.
    pending_persist: bool,
}

impl BannerState {
    /// Restore banner visibility from the injected store.
    ///
    /// `tick_rate_ms` converts the configured auto-hide seconds into the
    /// tick units the marquee runs on.
    pub fn restore(store: &dyn KvStore, config: &BannerConfig, tick_rate_ms: u64) -> Self {
        let dismissed = store
            .get(BANNER_DISMISSED_KEY)
            .is_some_and(|v| v == "1");
        let auto_hide_ticks = if tick_rate_ms == 0 {
            0
        } else {
            config.auto_hide_secs * 1000 / tick_rate_ms
        };
        Self {
            message: config.message.clone(),
            link_url: config.link_url.clone(),
            visible: !dismissed,
            can_close: config.can_close,
            offset: 0,
            age_ticks: 0,
            auto_hide_ticks,
            pending_persist: false,
        }
    }

    /// Advance the marquee and apply auto-hide.
    pub fn tick(&mut self) {
        if !self.visible {
            return;
        }
        self.offset = self.offset.wrapping_add(1);
        self.age_ticks += 1;
        if self.auto_hide_ticks > 0 && self.age_ticks >= self.auto_hide_ticks {
            self.hide();
        }
    }

    /// User dismissal. Ignored when the banner is configured undismissable.
    pub fn dismiss(&mut self) {
        if self.can_close {
            self.hide();
        }
    }

    /// Hide the banner (auto-hide path, not gated on `can_close`).
    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.pending_persist = true;
        }
    }

    /// Take the pending-persist flag; the caller writes through the store.
    pub fn take_pending_persist(&mut self) -> bool {
        std::mem::take(&mut self.pending_persist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn config(auto_hide_secs: u64) -> BannerConfig {
        BannerConfig {
            auto_hide_secs,
            ..Default::default()
        }
    }

    #[test]
    fn test_restore_respects_stored_dismissal() {
        let mut store = MemoryStore::new();
        assert!(BannerState::restore(&store, &config(0), 250).visible);

        store.set(BANNER_DISMISSED_KEY, "1").unwrap();
        assert!(!BannerState::restore(&store, &config(0), 250).visible);
    }

    #[test]
    fn test_auto_hide_after_threshold() {
        let store = MemoryStore::new();
        // 3 seconds at one tick per second.
        let mut banner = BannerState::restore(&store, &config(3), 1000);
        banner.tick();
        banner.tick();
        assert!(banner.visible);
        banner.tick();
        assert!(!banner.visible);
        assert!(banner.take_pending_persist());
        assert!(!banner.take_pending_persist());
    }

    #[test]
    fn test_zero_threshold_never_auto_hides() {
        let store = MemoryStore::new();
        let mut banner = BannerState::restore(&store, &config(0), 250);
        for _ in 0..1000 {
            banner.tick();
        }
        assert!(banner.visible);
    }

    #[test]
    fn test_undismissable_banner_ignores_dismiss() {
        let store = MemoryStore::new();
        let cfg = BannerConfig {
            can_close: false,
            ..Default::default()
        };
        let mut banner = BannerState::restore(&store, &cfg, 250);
        banner.dismiss();
        assert!(banner.visible);
        assert!(!banner.take_pending_persist());
    }

    #[test]
    fn test_auto_hide_applies_even_when_undismissable() {
        let store = MemoryStore::new();
        let cfg = BannerConfig {
            can_close: false,
            auto_hide_secs: 1,
            ..Default::default()
        };
        let mut banner = BannerState::restore(&store, &cfg, 1000);
        banner.tick();
        assert!(!banner.visible);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let store = MemoryStore::new();
        let mut banner = BannerState::restore(&store, &config(0), 250);
        banner.hide();
        assert!(banner.take_pending_persist());
        banner.hide();
        assert!(!banner.take_pending_persist());
    }
}
