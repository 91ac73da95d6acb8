use super::*;
use crate::state::panel::{Activation, reduce};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Letter {
    A,
    B,
    Z,
}

impl NodeKey for Letter {
    const ALL: &'static [Self] = &[Self::A, Self::B, Self::Z];

    fn tag(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Z => "Z",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::A => "Letter A",
            Self::B => "Letter B",
            Self::Z => "Letter Z",
        }
    }
}

const PLACEHOLDER: &str = "Pick a letter.";
const ALPHA: DisplayRecord = DisplayRecord::new("Alpha", "a");
const BETA: DisplayRecord = DisplayRecord::new("Beta", "b");

fn registry() -> ContentRegistry<Letter> {
    ContentRegistry::build([(Letter::A, ALPHA), (Letter::B, BETA)]).unwrap()
}

fn selected(key: Letter) -> PanelState<Letter> {
    PanelState { active: Some(key) }
}

// =============================================================
// render
// =============================================================

#[test]
fn render_shows_placeholder_before_any_selection() {
    let view = render(PanelState::default(), &registry(), PLACEHOLDER);
    assert_eq!(view, PanelView::Placeholder(PLACEHOLDER));
}

#[test]
fn render_shows_active_record() {
    assert_eq!(render(selected(Letter::A), &registry(), PLACEHOLDER), PanelView::Record(ALPHA));
    assert_eq!(render(selected(Letter::B), &registry(), PLACEHOLDER), PanelView::Record(BETA));
}

#[test]
fn render_falls_back_to_placeholder_for_missing_record() {
    assert_eq!(render(selected(Letter::Z), &registry(), PLACEHOLDER), PanelView::Placeholder(PLACEHOLDER));
}

#[test]
fn render_after_invalid_activation_keeps_previous_record() {
    let registry = registry();
    let state = reduce(selected(Letter::B), Activation(Letter::Z), &registry);
    assert_eq!(render(state, &registry, PLACEHOLDER), PanelView::Record(BETA));
}

// =============================================================
// controls / visibility
// =============================================================

#[test]
fn controls_follow_declaration_order_with_labels() {
    let tags: Vec<&str> = controls(PanelState::<Letter>::default()).iter().map(|c| c.tag).collect();
    assert_eq!(tags, vec!["A", "B", "Z"]);
    assert_eq!(controls(PanelState::<Letter>::default())[0].label, "Letter A");
}

#[test]
fn controls_mark_exactly_the_active_key() {
    let views = controls(selected(Letter::B));
    let active: Vec<&str> = views.iter().filter(|c| c.active).map(|c| c.tag).collect();
    assert_eq!(active, vec!["B"]);
}

#[test]
fn controls_have_no_active_entry_without_selection() {
    assert!(controls(PanelState::<Letter>::default()).iter().all(|c| !c.active));
}

#[test]
fn exactly_one_view_visible_when_selected() {
    for key in Letter::ALL {
        let state = selected(*key);
        let visible = Letter::ALL.iter().filter(|v| is_visible(state, **v)).count();
        assert_eq!(visible, 1, "{key:?}");
        assert!(is_visible(state, *key));
    }
    assert!(Letter::ALL.iter().all(|v| !is_visible(PanelState::default(), *v)));
}

#[test]
fn active_tag_tracks_selection() {
    assert_eq!(active_tag(PanelState::<Letter>::default()), None);
    assert_eq!(active_tag(selected(Letter::A)), Some("A"));
}

// =============================================================
// keyboard
// =============================================================

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("a"));
}
