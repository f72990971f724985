// Reactive wiring of the portfolio selection, run on a host-side runtime.

use abresh_site::content::Content;
use abresh_site::portfolio::{Portfolio, Selection};
use leptos::*;

#[test]
fn memoized_view_follows_filter_signal() {
    let runtime = create_runtime();

    let portfolio = store_value(Portfolio::new(Content::load().unwrap().projects));
    let selection = create_rw_signal(Selection::default());
    let visible = create_memo(move |_| {
        selection.with(|s| {
            portfolio.with_value(|p| p.visible(s.filter()).iter().map(|p| p.id).collect::<Vec<_>>())
        })
    });

    assert_eq!(visible.get(), vec![1, 2, 3, 4]);

    selection.update(|s| s.set_filter(Some("Web Development")));
    assert_eq!(visible.get(), vec![1, 2]);

    selection.update(|s| s.set_filter(Some("Mobile Development")));
    assert_eq!(visible.get(), vec![3]);

    selection.update(|s| s.set_filter(None));
    assert_eq!(visible.get(), vec![1, 2, 3, 4]);

    runtime.dispose();
}

#[test]
fn overlay_memo_clears_with_selection() {
    let runtime = create_runtime();

    let portfolio = store_value(Portfolio::new(Content::load().unwrap().projects));
    let selection = create_rw_signal(Selection::default());
    let selected = create_memo(move |_| {
        selection.with(|s| portfolio.with_value(|p| s.selected(p).map(|p| p.name.clone())))
    });

    assert_eq!(selected.get(), None);

    let finance = portfolio.with_value(|p| p.find(4).cloned());
    selection.update(|s| s.select_project(finance.as_ref()));
    assert_eq!(selected.get().as_deref(), Some("Finance Investment"));

    selection.update(|s| s.select_project(None));
    assert_eq!(selected.get(), None);

    runtime.dispose();
}
