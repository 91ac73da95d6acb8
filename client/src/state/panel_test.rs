use super::*;
use content::DisplayRecord;

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
}

fn registry() -> ContentRegistry<Letter> {
    ContentRegistry::build([
        (Letter::A, DisplayRecord::new("Alpha", "a")),
        (Letter::B, DisplayRecord::new("Beta", "b")),
    ])
    .unwrap()
}

// =============================================================
// PanelState
// =============================================================

#[test]
fn panel_state_default_has_no_selection() {
    assert_eq!(PanelState::<Letter>::default().active, None);
}

#[test]
fn with_default_auto_activates_known_key() {
    let state = PanelState::with_default(Letter::B, &registry());
    assert_eq!(state.active, Some(Letter::B));
}

#[test]
fn with_default_without_record_stays_unselected() {
    let state = PanelState::with_default(Letter::Z, &registry());
    assert_eq!(state.active, None);
}

// =============================================================
// reduce
// =============================================================

#[test]
fn reduce_selects_present_key() {
    let state = reduce(PanelState::default(), Activation(Letter::A), &registry());
    assert_eq!(state.active, Some(Letter::A));
}

#[test]
fn reduce_replaces_previous_selection() {
    let registry = registry();
    let state = reduce(PanelState::default(), Activation(Letter::A), &registry);
    let state = reduce(state, Activation(Letter::B), &registry);
    assert_eq!(state.active, Some(Letter::B));
}

#[test]
fn reduce_ignores_key_without_record() {
    let registry = registry();
    let selected = reduce(PanelState::default(), Activation(Letter::B), &registry);
    assert_eq!(reduce(selected, Activation(Letter::Z), &registry), selected);
    assert_eq!(reduce(PanelState::default(), Activation(Letter::Z), &registry), PanelState::default());
}

#[test]
fn reduce_is_idempotent_per_activation() {
    let registry = registry();
    let once = reduce(PanelState::default(), Activation(Letter::A), &registry);
    let twice = reduce(once, Activation(Letter::A), &registry);
    assert_eq!(once, twice);
}

#[test]
fn reduce_result_depends_only_on_last_valid_key() {
    let registry = registry();
    let histories: [&[Letter]; 4] = [
        &[Letter::B],
        &[Letter::A, Letter::B],
        &[Letter::B, Letter::A, Letter::Z, Letter::B],
        &[Letter::A, Letter::A, Letter::B, Letter::Z],
    ];
    for history in histories {
        let state = history
            .iter()
            .fold(PanelState::default(), |s, key| reduce(s, Activation(*key), &registry));
        assert_eq!(state.active, Some(Letter::B), "history {history:?}");
    }
}

// =============================================================
// activate_tag
// =============================================================

#[test]
fn activation_from_tag_is_partial() {
    assert_eq!(Activation::<Letter>::from_tag("A"), Some(Activation(Letter::A)));
    assert_eq!(Activation::<Letter>::from_tag("Q"), None);
}

#[test]
fn activate_tag_walks_the_alpha_beta_scenario() {
    let registry = registry();
    let state = activate_tag(PanelState::default(), "A", &registry);
    assert_eq!(state.active, Some(Letter::A));
    let state = activate_tag(state, "B", &registry);
    assert_eq!(state.active, Some(Letter::B));
    let state = activate_tag(state, "Z", &registry);
    assert_eq!(state.active, Some(Letter::B));
    let state = activate_tag(state, "not-a-tag", &registry);
    assert_eq!(state.active, Some(Letter::B));
}
