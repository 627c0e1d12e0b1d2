use contracts::dashboards::d100_widget_board::{DashboardSignal, SignalConcern};
use contracts::enums::LayoutType;
use leptos::prelude::*;

/// Typed publish/subscribe between the header, category sections and board.
///
/// Delivery is synchronous. Each concern has at most one listener and a new
/// subscription replaces the old one; a signal nobody listens to is dropped.
#[derive(Clone, Copy)]
pub struct DashboardBus {
    /// `None` payload opens the picker on the first tab
    picker: StoredValue<Option<Callback<Option<String>>>>,
    layout: StoredValue<Option<Callback<LayoutType>>>,
    search: StoredValue<Option<Callback<String>>>,
}

impl DashboardBus {
    pub fn new() -> Self {
        Self {
            picker: StoredValue::new(None),
            layout: StoredValue::new(None),
            search: StoredValue::new(None),
        }
    }

    pub fn on_open_picker(&self, listener: Callback<Option<String>>) {
        self.picker.set_value(Some(listener));
    }

    pub fn on_layout_changed(&self, listener: Callback<LayoutType>) {
        self.layout.set_value(Some(listener));
    }

    pub fn on_search_changed(&self, listener: Callback<String>) {
        self.search.set_value(Some(listener));
    }

    pub fn unsubscribe(&self, concern: SignalConcern) {
        match concern {
            SignalConcern::Picker => self.picker.set_value(None),
            SignalConcern::Layout => self.layout.set_value(None),
            SignalConcern::Search => self.search.set_value(None),
        }
    }

    pub fn has_listener(&self, concern: SignalConcern) -> bool {
        match concern {
            SignalConcern::Picker => self.picker.with_value(Option::is_some),
            SignalConcern::Layout => self.layout.with_value(Option::is_some),
            SignalConcern::Search => self.search.with_value(Option::is_some),
        }
    }

    /// Callback that broadcasts each query as `search-changed`
    pub fn search_emitter(&self) -> Callback<String> {
        let bus = *self;
        Callback::new(move |query| {
            bus.emit(DashboardSignal::SearchChanged { query });
        })
    }

    /// Deliver `signal` to its listener; returns false if it was dropped
    pub fn emit(&self, signal: DashboardSignal) -> bool {
        let kind = signal.kind();
        let delivered = match signal {
            DashboardSignal::OpenWidgetPickerForCategory { category_id } => {
                deliver(self.picker, Some(category_id))
            }
            DashboardSignal::OpenWidgetPickerGlobal => deliver(self.picker, None),
            DashboardSignal::LayoutChanged { layout } => deliver(self.layout, layout),
            DashboardSignal::SearchChanged { query } => deliver(self.search, query),
        };

        if delivered {
            log::debug!("signal '{}' delivered", kind);
        } else {
            log::debug!("signal '{}' dropped: no listener", kind);
        }
        delivered
    }
}

impl Default for DashboardBus {
    fn default() -> Self {
        Self::new()
    }
}

fn deliver<T>(slot: StoredValue<Option<Callback<T>>>, payload: T) -> bool
where
    T: Send + Sync + 'static,
{
    // Copy the callback out so a listener may resubscribe while running.
    match slot.get_value() {
        Some(listener) => {
            listener.run(payload);
            true
        }
        None => false,
    }
}

pub fn provide_dashboard_bus() -> DashboardBus {
    let bus = DashboardBus::new();
    provide_context(bus);
    bus
}

pub fn use_dashboard_bus() -> DashboardBus {
    use_context::<DashboardBus>().expect("DashboardBus not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_without_listener_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = DashboardBus::new();
            assert!(!bus.emit(DashboardSignal::SearchChanged {
                query: "cloud".into()
            }));
        });
    }

    #[test]
    fn test_picker_signals_reach_picker_listener() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = DashboardBus::new();
            let opened = RwSignal::new(Vec::<Option<String>>::new());
            bus.on_open_picker(Callback::new(move |scope| {
                opened.update(|v| v.push(scope));
            }));

            assert!(bus.emit(DashboardSignal::OpenWidgetPickerForCategory {
                category_id: "cwpp".into()
            }));
            assert!(bus.emit(DashboardSignal::OpenWidgetPickerGlobal));

            assert_eq!(
                opened.get_untracked(),
                vec![Some("cwpp".to_string()), None]
            );
        });
    }

    #[test]
    fn test_delivery_is_synchronous_and_per_concern() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = DashboardBus::new();
            let layout = RwSignal::new(LayoutType::Grid);
            let query = RwSignal::new(String::new());
            bus.on_layout_changed(Callback::new(move |l| layout.set(l)));
            bus.on_search_changed(Callback::new(move |q| query.set(q)));

            bus.emit(DashboardSignal::LayoutChanged {
                layout: LayoutType::List,
            });
            assert_eq!(layout.get_untracked(), LayoutType::List);
            assert_eq!(query.get_untracked(), "");

            assert!(!bus.emit(DashboardSignal::OpenWidgetPickerGlobal));
        });
    }

    #[test]
    fn test_new_subscription_replaces_old_one() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = DashboardBus::new();
            let first = RwSignal::new(0);
            let second = RwSignal::new(0);
            bus.on_search_changed(Callback::new(move |_| first.update(|n| *n += 1)));
            bus.on_search_changed(Callback::new(move |_| second.update(|n| *n += 1)));

            bus.emit(DashboardSignal::SearchChanged { query: "x".into() });
            assert_eq!(first.get_untracked(), 0);
            assert_eq!(second.get_untracked(), 1);

            bus.unsubscribe(SignalConcern::Search);
            assert!(!bus.has_listener(SignalConcern::Search));
            assert!(!bus.emit(DashboardSignal::SearchChanged { query: "y".into() }));
        });
    }

    #[test]
    fn test_search_emitter_broadcasts_search_changed() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = DashboardBus::new();
            let query = RwSignal::new(String::new());
            let emit = bus.search_emitter();

            emit.run("dropped".to_string());
            bus.on_search_changed(Callback::new(move |q| query.set(q)));
            emit.run("cloud".to_string());

            assert_eq!(query.get_untracked(), "cloud");
        });
    }
}
