use admin_dashboard::app::{
    handle_event, reduce, Action, AppState, Event, LoadingSection, OrderFiltersPatch, PreferencesPatch, ProductSort,
    ThemeMode, UiSnapshot, MAX_NOTIFICATIONS,
};
use admin_dashboard::domain::{
    Customer, NewNotification, NotificationIcon, NotificationKind, Order, OrderStatus, Product, ProductField,
};
use admin_dashboard::table::SortDirection;
use chrono::{Duration, Utc};

fn dashboard() -> AppState {
    let orders = vec![
        Order {
            id: "1".to_string(),
            order_id: "#CM9801".to_string(),
            user: Customer {
                name: "Natali Craig".to_string(),
                avatar: "NC".to_string(),
            },
            project: "Landing Page".to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date: "Just now".to_string(),
            status: OrderStatus::InProgress,
            has_document: None,
        },
        Order {
            id: "2".to_string(),
            order_id: "#CM9802".to_string(),
            user: Customer {
                name: "Kate Morrison".to_string(),
                avatar: "KM".to_string(),
            },
            project: "CRM Admin pages".to_string(),
            address: "Larry San Francisco".to_string(),
            date: "A minute ago".to_string(),
            status: OrderStatus::Complete,
            has_document: None,
        },
    ];
    let products = vec![
        Product::new("1", "ASOS Ridley High Waist", 79.49, 82),
        Product::new("2", "Marco Lightweight Shirt", 128.50, 37),
    ];

    AppState::new(1440).with_orders(orders).with_products(products)
}

fn apply(state: &mut AppState, event: Event) -> Vec<Action> {
    let (_, actions) = handle_event(state, &event).unwrap();
    actions
}

#[test]
fn toggling_sidebar_twice_restores_state() {
    let mut state = dashboard();
    let original = state.clone();

    apply(&mut state, Event::ToggleSidebar);
    assert!(!state.sidebar_open);
    apply(&mut state, Event::ToggleSidebar);
    assert_eq!(state, original);
}

#[test]
fn persisted_changes_emit_snapshot() {
    let mut state = dashboard();

    let actions = apply(&mut state, Event::ToggleActivitySidebar);
    assert_eq!(actions, vec![Action::PersistSnapshot(state.snapshot())]);

    let actions = apply(&mut state, Event::SetLoading { section: LoadingSection::Orders, loading: true });
    assert!(actions.is_empty());
    assert!(state.loading.orders);
}

#[test]
fn notifications_prepend_and_cap() {
    let mut state = dashboard();

    for i in 0..MAX_NOTIFICATIONS + 5 {
        apply(&mut state, Event::AddNotification(NewNotification::new(format!("alert {i}"), "body")));
    }

    assert_eq!(state.notifications.len(), MAX_NOTIFICATIONS);
    assert_eq!(state.notifications[0].title, format!("alert {}", MAX_NOTIFICATIONS + 4));
    assert_eq!(state.unread_count(), MAX_NOTIFICATIONS);

    let mut ids: Vec<&str> = state.notifications.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), MAX_NOTIFICATIONS);
}

#[test]
fn read_tracking_and_removal() {
    let mut state = dashboard();
    let now = Utc::now();
    let draft = NewNotification::new("New Team Member Added", "Sarah Wilson has joined")
        .with_kind(NotificationKind::Success)
        .with_icon(NotificationIcon::User)
        .with_timestamp(now - Duration::hours(2));

    apply(&mut state, Event::AddNotification(draft));
    apply(&mut state, Event::AddNotification(NewNotification::new("Deploy", "done")));
    assert_eq!(state.unread_count(), 2);

    let older = state.notifications[1].id.clone();
    assert_eq!(state.notifications[1].time_ago(now), "2 hours ago");

    apply(&mut state, Event::MarkNotificationRead(older.clone()));
    assert_eq!(state.unread_count(), 1);

    apply(&mut state, Event::ClearAllNotifications);
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.notifications.len(), 2);

    apply(&mut state, Event::RemoveNotification(older));
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].title, "Deploy");
}

#[test]
fn order_filters_merge_and_reset() {
    let mut state = dashboard();

    apply(
        &mut state,
        Event::SetOrderFilters(OrderFiltersPatch {
            status: Some(Some(OrderStatus::Complete)),
            ..OrderFiltersPatch::default()
        }),
    );
    apply(
        &mut state,
        Event::SetOrderFilters(OrderFiltersPatch {
            search_term: Some("crm".to_string()),
            ..OrderFiltersPatch::default()
        }),
    );
    assert_eq!(state.order_filters.status, Some(OrderStatus::Complete));
    assert_eq!(state.filtered_orders().len(), 1);

    apply(&mut state, Event::SetSearchQuery("header".to_string()));
    apply(
        &mut state,
        Event::SetProductSort(ProductSort {
            key: ProductField::Name,
            direction: SortDirection::Asc,
        }),
    );
    apply(&mut state, Event::ResetFilters);

    assert_eq!(state.order_filters.search_term, "");
    assert_eq!(state.order_filters.status, None);
    assert_eq!(state.product_sort, ProductSort { key: ProductField::Amount, direction: SortDirection::Desc });
    assert_eq!(state.search_query, "");
    assert_eq!(state.filtered_orders().len(), 2);
}

#[test]
fn reset_uses_preferred_sort_column() {
    let mut state = dashboard();
    apply(
        &mut state,
        Event::UpdatePreferences(PreferencesPatch {
            default_sort: Some(ProductField::Quantity),
            ..PreferencesPatch::default()
        }),
    );
    apply(&mut state, Event::ResetFilters);

    assert_eq!(state.product_sort.key, ProductField::Quantity);
    assert_eq!(state.product_sort.direction, SortDirection::Desc);
    assert!(state.preferences.auto_refresh);
}

#[test]
fn shrinking_viewport_closes_panels() {
    let mut state = dashboard();

    apply(&mut state, Event::Resize(1200));
    assert!(state.sidebar_open);
    assert!(!state.activity_sidebar_open);

    apply(&mut state, Event::Resize(1000));
    assert!(!state.sidebar_open);

    apply(&mut state, Event::Resize(1600));
    assert!(!state.sidebar_open);
    assert!(!state.activity_sidebar_open);
}

#[test]
fn resize_keeps_closed_panels_closed() {
    let mut state = dashboard();
    apply(&mut state, Event::ToggleSidebar);
    let actions = apply(&mut state, Event::Resize(900));

    assert!(!state.sidebar_open);
    assert!(!state.activity_sidebar_open);
    assert_eq!(actions.len(), 1);
}

#[test]
fn hydrate_at_narrow_width_keeps_panels_closed() {
    let mut state = AppState::new(900);
    let snapshot = UiSnapshot {
        sidebar_open: true,
        activity_sidebar_open: true,
        theme: Some(ThemeMode::Dark),
        ..UiSnapshot::default()
    };

    apply(&mut state, Event::Hydrate(snapshot));
    assert!(!state.sidebar_open);
    assert!(!state.activity_sidebar_open);
    assert_eq!(state.theme, ThemeMode::Dark);
}

#[test]
fn hydrate_json_round_trips_persisted_slice() {
    let mut source = dashboard();
    apply(&mut source, Event::ToggleTheme);
    apply(
        &mut source,
        Event::UpdatePreferences(PreferencesPatch {
            items_per_page: Some(25),
            auto_refresh: Some(false),
            ..PreferencesPatch::default()
        }),
    );
    let json = source.snapshot().to_json().unwrap();

    let mut restored = dashboard();
    apply(&mut restored, Event::HydrateJson(json));

    assert_eq!(restored.snapshot(), source.snapshot());
    assert_eq!(restored.order_table().page_size(), 25);
}

#[test]
fn reducer_is_pure() {
    let state = dashboard();
    let now = Utc::now();
    let event = Event::AddNotification(NewNotification::new("t", "m"));

    let a = reduce(&state, &event, now);
    let b = reduce(&state, &event, now);
    assert_eq!(a, b);
    assert!(state.notifications.is_empty());
    assert_eq!(a.notifications[0].timestamp, now);
}

#[test]
fn product_table_starts_from_product_sort() {
    let mut state = dashboard();
    apply(
        &mut state,
        Event::SetProductSort(ProductSort {
            key: ProductField::Price,
            direction: SortDirection::Asc,
        }),
    );

    let table = state.product_table();
    let ids: Vec<&str> = table.view().items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(table.sort_direction(), SortDirection::Asc);
}
