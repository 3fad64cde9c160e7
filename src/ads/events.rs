//! Optional callback slots for ad unit events.
//!
//! Every callback is optional; unset slots are simply skipped. Callbacks may
//! be invoked from the async load task, so they must be `Send + Sync`.

use crate::error::AdError;

pub type EventCallback = Box<dyn Fn() + Send + Sync>;
pub type ErrorCallback = Box<dyn Fn(&AdError) + Send + Sync>;
pub type ClickCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Callback slots shared by all ad unit types. Reward and click slots are
/// only ever fired by the unit types that support them.
#[derive(Default)]
pub struct AdEvents {
    pub(crate) on_ad_loaded: Option<EventCallback>,
    pub(crate) on_ad_failed_to_load: Option<ErrorCallback>,
    pub(crate) on_ad_shown: Option<EventCallback>,
    pub(crate) on_ad_failed_to_show: Option<ErrorCallback>,
    pub(crate) on_ad_impression: Option<EventCallback>,
    pub(crate) on_ad_clicked: Option<ClickCallback>,
    pub(crate) on_ad_dismissed: Option<EventCallback>,
    pub(crate) on_user_earned_reward: Option<EventCallback>,
}

impl AdEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_ad_loaded(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ad_loaded = Some(Box::new(f));
        self
    }

    pub fn on_ad_failed_to_load(mut self, f: impl Fn(&AdError) + Send + Sync + 'static) -> Self {
        self.on_ad_failed_to_load = Some(Box::new(f));
        self
    }

    pub fn on_ad_shown(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ad_shown = Some(Box::new(f));
        self
    }

    pub fn on_ad_failed_to_show(mut self, f: impl Fn(&AdError) + Send + Sync + 'static) -> Self {
        self.on_ad_failed_to_show = Some(Box::new(f));
        self
    }

    pub fn on_ad_impression(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ad_impression = Some(Box::new(f));
        self
    }

    pub fn on_ad_clicked(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_ad_clicked = Some(Box::new(f));
        self
    }

    pub fn on_ad_dismissed(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_ad_dismissed = Some(Box::new(f));
        self
    }

    pub fn on_user_earned_reward(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_user_earned_reward = Some(Box::new(f));
        self
    }
}
