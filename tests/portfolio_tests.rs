// Host-side tests for the portfolio filter and selection.

use abresh_site::content::{Content, Project};
use abresh_site::portfolio::{Portfolio, Selection};

fn project(id: u32, category: &str) -> Project {
    Project {
        id,
        name: format!("Project {id}"),
        category: category.to_string(),
        img_url: format!("/images/{id}.png"),
        description: String::new(),
        technologies: vec![],
        details: vec![],
    }
}

fn sample() -> Portfolio {
    Portfolio::new(vec![
        project(0, "Web Development"),
        project(1, "Mobile Development"),
        project(2, "Web Development"),
        project(3, "Enterprise Software"),
    ])
}

fn ids(projects: &[&Project]) -> Vec<u32> {
    projects.iter().map(|p| p.id).collect()
}

#[test]
fn web_development_filter_keeps_items_zero_and_two() {
    let portfolio = sample();
    let visible = portfolio.visible(Some("Web Development"));
    assert_eq!(ids(&visible), vec![0, 2]);
}

#[test]
fn every_category_filter_matches_exact_subset_in_order() {
    let content = Content::load().unwrap();
    let portfolio = Portfolio::new(content.projects.clone());

    for category in portfolio.categories() {
        let visible = portfolio.visible(Some(category));
        let expected: Vec<u32> = content
            .projects
            .iter()
            .filter(|p| &p.category == category)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&visible), expected, "category {category}");
        assert!(visible.iter().all(|p| &p.category == category));
    }
}

#[test]
fn no_filter_returns_full_list_in_order() {
    let portfolio = sample();
    let visible = portfolio.visible(None);
    assert_eq!(ids(&visible), vec![0, 1, 2, 3]);
    assert_eq!(visible.len(), portfolio.projects().len());
}

#[test]
fn filter_then_clear_restores_full_list() {
    let portfolio = sample();
    let mut selection = Selection::default();

    selection.set_filter(Some("Enterprise Software"));
    assert_eq!(ids(&portfolio.visible(selection.filter())), vec![3]);

    selection.set_filter(None);
    assert_eq!(selection.filter(), None);
    assert_eq!(ids(&portfolio.visible(selection.filter())), vec![0, 1, 2, 3]);
}

#[test]
fn select_then_clear_leaves_nothing_selected() {
    let portfolio = sample();
    let mut selection = Selection::default();

    selection.select_project(portfolio.find(2));
    assert_eq!(selection.selected(&portfolio).map(|p| p.id), Some(2));

    selection.select_project(None);
    assert_eq!(selection.selected_id(), None);
    assert!(selection.selected(&portfolio).is_none());
}

#[test]
fn selected_project_is_member_of_full_list() {
    let portfolio = sample();
    let mut selection = Selection::default();
    selection.set_filter(Some("Mobile Development"));
    let shown = portfolio.visible(selection.filter())[0].clone();

    selection.select_project(Some(&shown));
    let selected = selection.selected(&portfolio).unwrap();
    assert!(portfolio.projects().contains(selected));
}

#[test]
fn embedded_projects_have_three_categories() {
    let content = Content::load().unwrap();
    let portfolio = Portfolio::new(content.projects);
    assert_eq!(
        portfolio.categories(),
        ["Web Development", "Mobile Development", "Enterprise Software"]
    );
}
