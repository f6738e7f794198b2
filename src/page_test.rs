use super::*;
use crate::catalog::{self, ConcessionName};
use crate::grid::populate;

const BASE: &str = "https://ejemplo.com/concesiones/";

fn render(layout: Layout, names: &[ConcessionName], capacity: i64, columns: u32) -> String {
    let cells = populate(names, capacity, BASE).unwrap();
    let renderer = PageRenderer::new().unwrap();
    renderer.render(&PageView::new(layout, &cells, columns)).unwrap()
}

#[test]
fn page_view_counts_active_cells() {
    let names = catalog::reference_names();
    let cells = populate(&names, 56, BASE).unwrap();
    let view = PageView::new(Layout::Matrix, &cells, 7);
    assert_eq!(view.active_count, 46);
    assert_eq!(view.cells.len(), 56);
}

#[test]
fn cards_page_lists_every_concession() {
    let names = catalog::reference_names();
    let html = render(Layout::Cards, &names, 46, 7);
    for name in &names {
        assert!(html.contains(&format!("Acceder a {}", name.as_str())), "missing {}", name.as_str());
    }
    assert!(html.contains("<div class=\"concessions-grid\">"));
    assert!(!html.contains("class=\"concession-card reserved\""));
}

#[test]
fn cards_page_shows_computed_total() {
    let names = catalog::reference_names();
    let html = render(Layout::Cards, &names, 46, 7);
    assert!(html.contains("46 concesiones viales disponibles"));

    let few = catalog::from_yaml_str("[YUMA, ICCU]").unwrap();
    let html = render(Layout::Cards, &few, 2, 7);
    assert!(html.contains("2 concesiones viales disponibles"));
}

#[test]
fn cards_page_links_open_encoded_targets_in_new_tab() {
    let names = catalog::from_yaml_str("[\"CONCESIÓN PISA\"]").unwrap();
    let html = render(Layout::Cards, &names, 1, 7);
    assert!(html.contains(
        "href=\"https://ejemplo.com/concesiones/CONCESI%C3%93N%20PISA\" target=\"_blank\" rel=\"noopener\""
    ));
    assert!(!html.contains("&#x2f;"));
}

#[test]
fn matrix_page_reserves_remaining_cells() {
    let names = catalog::reference_names();
    let html = render(Layout::Matrix, &names, 56, 7);
    assert_eq!(html.matches("class=\"concession-card reserved\"").count(), 10);
    assert_eq!(html.matches("disabled>No disponible").count(), 10);
    assert!(html.contains("--columns: 7"));
    assert!(html.contains("data-index=\"56\""));
    assert!(html.contains("46 concesiones viales disponibles"));
}

#[test]
fn page_escapes_concession_names() {
    let names = vec![ConcessionName::new("<script>alert(1)</script>").unwrap()];
    let html = render(Layout::Cards, &names, 1, 7);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn page_keeps_static_chrome() {
    let html = render(Layout::Cards, &[], 0, 7);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("CONCESIONES DISPONIBLES"));
    assert!(html.contains("MENÚ DE CONCESIONES VIALES"));
    assert!(html.contains("GoPass"));
    assert!(html.contains("0 concesiones viales disponibles"));
}

#[test]
fn layout_deserializes_from_snake_case() {
    let layout: Layout = serde_json::from_str("\"matrix\"").unwrap();
    assert_eq!(layout, Layout::Matrix);
    assert_eq!(Layout::default(), Layout::Cards);
}
