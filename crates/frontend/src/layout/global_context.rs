use contracts::enums::{LayoutType, TimeRange};
use leptos::prelude::*;

/// Dropdowns of the top header. At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMenu {
    Notifications,
    Profile,
    TimeRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

impl Notification {
    fn new(id: u32, title: &str, message: &str, time: &str, unread: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            unread,
        }
    }
}

/// Sample feed shown in the notifications menu
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            1,
            "New widget added",
            "Widget \"Cloud Accounts\" was added to CSPM Dashboard",
            "2m ago",
            true,
        ),
        Notification::new(
            2,
            "Security alert",
            "Critical vulnerability detected in Image Registry",
            "15m ago",
            true,
        ),
        Notification::new(
            3,
            "Dashboard updated",
            "Your dashboard layout has been saved",
            "1h ago",
            false,
        ),
    ]
}

/// Header-local state, provided through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub open_menu: RwSignal<Option<HeaderMenu>>,
    /// Layout the header toggle shows; the board keeps its own copy
    pub layout: RwSignal<LayoutType>,
    pub time_range: RwSignal<TimeRange>,
    pub notifications: RwSignal<Vec<Notification>>,
}

impl AppGlobalContext {
    pub fn new(layout: LayoutType, time_range: TimeRange) -> Self {
        Self {
            open_menu: RwSignal::new(None),
            layout: RwSignal::new(layout),
            time_range: RwSignal::new(time_range),
            notifications: RwSignal::new(seed_notifications()),
        }
    }

    /// Open `menu`, closing any other; closes it if already open
    pub fn toggle_menu(&self, menu: HeaderMenu) {
        self.open_menu.update(|open| {
            *open = if *open == Some(menu) { None } else { Some(menu) };
        });
    }

    pub fn close_menus(&self) {
        self.open_menu.set(None);
    }

    pub fn is_open(&self, menu: HeaderMenu) -> bool {
        self.open_menu.get() == Some(menu)
    }

    /// Pick a time range and close the dropdown
    pub fn select_time_range(&self, range: TimeRange) {
        log::debug!("time range set to '{}'", range.code());
        self.time_range.set(range);
        self.close_menus();
    }

    /// Flip the layout and return the new value
    pub fn toggle_layout(&self) -> LayoutType {
        self.layout.update(|l| *l = l.toggled());
        self.layout.get_untracked()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .with(|items| items.iter().filter(|n| n.unread).count())
    }

    pub fn mark_all_read(&self) {
        self.notifications.maybe_update(|items| {
            let mut changed = false;
            for n in items.iter_mut().filter(|n| n.unread) {
                n.unread = false;
                changed = true;
            }
            changed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AppGlobalContext {
        AppGlobalContext::new(LayoutType::Grid, TimeRange::Last2Days)
    }

    #[test]
    fn test_only_one_menu_open() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ctx();
            ctx.toggle_menu(HeaderMenu::Notifications);
            ctx.toggle_menu(HeaderMenu::Profile);
            assert_eq!(ctx.open_menu.get_untracked(), Some(HeaderMenu::Profile));

            ctx.toggle_menu(HeaderMenu::Profile);
            assert_eq!(ctx.open_menu.get_untracked(), None);
        });
    }

    #[test]
    fn test_select_time_range_closes_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ctx();
            ctx.toggle_menu(HeaderMenu::TimeRange);
            ctx.select_time_range(TimeRange::Last7Days);
            assert_eq!(ctx.time_range.get_untracked(), TimeRange::Last7Days);
            assert_eq!(ctx.open_menu.get_untracked(), None);
        });
    }

    #[test]
    fn test_toggle_layout() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ctx();
            assert_eq!(ctx.toggle_layout(), LayoutType::List);
            assert_eq!(ctx.toggle_layout(), LayoutType::Grid);
        });
    }

    #[test]
    fn test_unread_count() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ctx();
            assert_eq!(ctx.unread_count(), 2);
            ctx.mark_all_read();
            assert_eq!(ctx.unread_count(), 0);
        });
    }
}
