use super::*;
use crate::diagram;

fn catalog() -> Catalog {
    Catalog::build().unwrap()
}

// =============================================================
// ExplainerKind
// =============================================================

#[test]
fn from_slug_resolves_known_slugs() {
    assert_eq!(ExplainerKind::from_slug("evolution"), Some(ExplainerKind::Evolution));
    assert_eq!(ExplainerKind::from_slug("coevolution"), Some(ExplainerKind::Coevolution));
    assert_eq!(ExplainerKind::from_slug("Evolution"), None);
    assert_eq!(ExplainerKind::from_slug(""), None);
}

#[test]
fn surfaces_match_page_variants() {
    assert_eq!(ExplainerKind::Evolution.surface(), Surface::Nodes);
    assert_eq!(ExplainerKind::Coevolution.surface(), Surface::Views);
}

// =============================================================
// Evolution explainer
// =============================================================

#[test]
fn every_evolution_node_has_a_record() {
    let catalog = catalog();
    for node in EvolutionNode::ALL {
        assert!(catalog.evolution.registry.contains(*node), "{node:?} missing");
    }
    assert_eq!(catalog.evolution.registry.len(), EvolutionNode::ALL.len());
}

#[test]
fn every_evolution_node_is_drawn_once() {
    let catalog = catalog();
    for node in EvolutionNode::ALL {
        let drawn = catalog.evolution.diagram.nodes.iter().filter(|n| n.id == node.tag()).count();
        assert_eq!(drawn, 1, "{node:?}");
    }
}

#[test]
fn evolution_nodes_fit_the_canvas_without_overlap() {
    let diagram = catalog().evolution.diagram;
    for (i, a) in diagram.nodes.iter().enumerate() {
        assert!(a.x + a.width <= diagram.width && a.y + a.height <= diagram.height);
        for b in &diagram.nodes[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
    assert_eq!(diagram.edges.len(), 5);
}

#[test]
fn database_tag_is_db() {
    let catalog = catalog();
    let record = catalog.lookup(ExplainerKind::Evolution, "DB").unwrap();
    assert_eq!(record.title, "The Central Database");
    assert_eq!(catalog.lookup(ExplainerKind::Evolution, "Database"), None);
}

// =============================================================
// Co-evolution explainer
// =============================================================

#[test]
fn every_view_has_a_record_and_a_rendering_diagram() {
    let catalog = catalog();
    for view in CycleView::ALL {
        assert!(catalog.coevolution.registry.contains(*view), "{view:?} record");
        let description = catalog.coevolution.description(*view).unwrap();
        let layout = diagram::render(description).unwrap();
        assert!(!layout.nodes.is_empty(), "{view:?} diagram");
    }
}

#[test]
fn default_view_has_a_record() {
    let catalog = catalog();
    assert_eq!(catalog.coevolution.default_view, CycleView::Generation);
    assert!(catalog.coevolution.registry.contains(catalog.coevolution.default_view));
}

#[test]
fn view_labels_differ_from_tags() {
    for view in CycleView::ALL {
        assert_ne!(view.label(), view.tag());
    }
}

#[test]
fn descriptions_are_labelled_by_explainer_and_view() {
    let labels: Vec<String> = catalog().descriptions().into_iter().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec!["coevolution/generation", "coevolution/prompts", "coevolution/critics", "coevolution/memory"]
    );
}

// =============================================================
// records / lookup
// =============================================================

#[test]
fn records_follow_declaration_order() {
    let tags: Vec<&str> = catalog()
        .records(ExplainerKind::Evolution)
        .into_iter()
        .map(|(tag, _)| tag)
        .collect();
    assert_eq!(tags, vec!["Director", "Researcher", "Engineer", "Critic", "DB"]);
}

#[test]
fn lookup_is_none_for_unknown_tags() {
    let catalog = catalog();
    assert_eq!(catalog.lookup(ExplainerKind::Coevolution, "Director"), None);
    assert_eq!(catalog.lookup(ExplainerKind::Coevolution, "nope"), None);
    assert!(catalog.lookup(ExplainerKind::Coevolution, "memory").is_some());
}
