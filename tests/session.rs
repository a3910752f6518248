//! End-to-end session behavior driven through `handle_event`.

use shopping_list::app::AppState;
use shopping_list::ui::{ScreenView, ThemeSet};
use shopping_list::{
    filter_items, handle_event, initialize, Config, Destination, Event, InputMode, Item,
    ItemStore, TextField,
};

fn session() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, events: impl IntoIterator<Item = Event>) {
    for event in events {
        handle_event(state, &event).expect("transitions never fail");
    }
}

fn add(state: &mut AppState, text: &str) -> bool {
    send(
        state,
        [Event::TextChanged {
            field: TextField::Draft,
            value: text.to_string(),
        }],
    );
    let (rendered, _) = handle_event(state, &Event::AddItem).unwrap();
    rendered
}

fn texts(items: &[Item]) -> Vec<&str> {
    items.iter().map(Item::text).collect()
}

#[test]
fn milk_and_eggs_walkthrough() {
    let mut state = session();
    assert!(state.items().is_empty());

    assert!(add(&mut state, "Milk"));
    assert_eq!(texts(state.items()), ["Milk"]);

    assert!(add(&mut state, "Eggs"));
    assert_eq!(texts(state.items()), ["Eggs", "Milk"]);

    assert!(!add(&mut state, "  "));
    assert_eq!(texts(state.items()), ["Eggs", "Milk"]);

    send(
        &mut state,
        [Event::TextChanged {
            field: TextField::Search,
            value: "egg".to_string(),
        }],
    );
    assert_eq!(texts(state.filtered_items()), ["Eggs"]);

    send(
        &mut state,
        [Event::TextChanged {
            field: TextField::Search,
            value: String::new(),
        }],
    );
    assert_eq!(texts(state.filtered_items()), ["Eggs", "Milk"]);
}

#[test]
fn typing_through_the_keyboard_events() {
    let mut state = session();
    send(&mut state, [Event::FocusField(TextField::Draft)]);
    send(&mut state, "Bread".chars().map(Event::Char));
    send(&mut state, [Event::AddItem, Event::ExitInput]);

    assert_eq!(texts(state.items()), ["Bread"]);
    assert_eq!(state.draft_text(), "");
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn adding_while_searching_keeps_the_view_in_sync() {
    let mut state = session();
    add(&mut state, "Milk");
    send(
        &mut state,
        [Event::TextChanged {
            field: TextField::Search,
            value: "MIL".to_string(),
        }],
    );
    add(&mut state, "Eggs");
    add(&mut state, "Oat milk");

    assert_eq!(texts(state.filtered_items()), ["Oat milk", "Milk"]);
    assert_eq!(state.items().len(), 3);
}

#[test]
fn add_prepends_to_any_store() {
    let mut store = ItemStore::new();
    for text in ["Apples", "Rice", "Tea"] {
        let before: Vec<String> = store.iter().map(|i| i.text().to_string()).collect();
        assert!(store.add(text));
        assert_eq!(store.all()[0].text(), text);
        let rest: Vec<String> = store.all()[1..].iter().map(|i| i.text().to_string()).collect();
        assert_eq!(rest, before);
    }
}

#[test]
fn blank_text_is_rejected() {
    let mut store = ItemStore::new();
    store.add("Salt");
    for blank in ["", " ", "\t", " \n "] {
        assert!(!store.add(blank));
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn blank_query_is_identity() {
    let mut store = ItemStore::new();
    for text in ["Milk", "Eggs", "Butter"] {
        store.add(text);
    }
    assert_eq!(filter_items(store.all(), ""), store.all());
    assert_eq!(filter_items(store.all(), "   "), store.all());
}

#[test]
fn filter_is_an_ordered_subsequence() {
    let mut store = ItemStore::new();
    for text in ["Green tea", "Bread", "TEA bags", "Steak", "Milk"] {
        store.add(text);
    }
    for query in ["tea", "EA", "k", "zz", "a"] {
        let filtered = filter_items(store.all(), query);
        let needle = query.to_lowercase();

        let mut cursor = store.all().iter();
        for kept in &filtered {
            assert!(cursor.any(|item| item == kept), "{query}: order broken");
        }
        for item in store.all() {
            let hit = item.text().to_lowercase().contains(&needle);
            assert_eq!(filtered.contains(item), hit, "{query}: {}", item.text());
        }
    }
}

#[test]
fn repeated_navigation_is_idempotent() {
    let mut state = session();
    for destination in [Destination::Profile, Destination::Settings, Destination::List] {
        send(
            &mut state,
            [Event::Navigate(destination), Event::Navigate(destination)],
        );
        assert_eq!(state.destination(), destination);
        let history = state.navigator().history();
        assert!(history.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

#[test]
fn drawer_settings_always_ends_on_settings_with_drawer_closed() {
    for open_first in [true, false] {
        let mut state = session();
        if open_first {
            send(&mut state, [Event::OpenDrawer]);
        }
        send(&mut state, [Event::DrawerSelectSettings]);
        assert_eq!(state.destination(), Destination::Settings);
        assert!(!state.is_drawer_open());
    }
}

#[test]
fn explicit_theme_choice_wins_over_host_value() {
    let mut state = AppState::new(ThemeSet::default(), true);
    send(&mut state, [Event::SetDarkMode(true), Event::SetDarkMode(false)]);
    assert!(!state.is_dark_mode());

    send(
        &mut state,
        [Event::Navigate(Destination::Profile), Event::Navigate(Destination::List)],
    );
    assert!(!state.is_dark_mode());
    assert!(state.appearance().system_dark_mode());
    assert_eq!(state.active_theme(), &state.themes.light);
}

#[test]
fn settings_screen_reflects_the_switch() {
    let mut state = AppState::new(ThemeSet::default(), false);
    send(&mut state, [Event::OpenDrawer, Event::DrawerSelectSettings, Event::ToggleDarkMode]);

    match state.compute_viewmodel(24, 80).screen {
        ScreenView::Settings(settings) => {
            assert_eq!(settings.heading, "Pengaturan");
            assert_eq!(settings.dark_mode_label, "Mode Gelap (Dark Mode)");
            assert!(settings.dark_mode);
        }
        other => panic!("expected settings screen, got {other:?}"),
    }
}

#[test]
fn rendering_never_panics_on_small_panes() {
    let mut state = session();
    add(&mut state, "A rather long item name that will certainly need truncating somewhere");
    send(&mut state, [Event::OpenDrawer]);
    for (rows, cols) in [(1, 1), (5, 10), (24, 80)] {
        shopping_list::ui::render(&state, rows, cols);
    }
}
