// Example: a filtered, windowed, selectable city list.
//
// Simulates the host side of a combobox over a large dataset: typed queries
// dispatch fetches that resolve out of order, keyboard navigation moves the
// highlight, and each render pass reports which rows actually need drawing.
use listwindow::WindowOptions;
use listwindow_adapter::{ComboboxOptions, QueryToken, RowPass, SearchListController};

#[derive(Clone, Debug)]
struct City {
    id: u64,
    name: String,
}

fn all_cities() -> Vec<City> {
    let names = [
        "Amsterdam", "Athens", "Berlin", "Bogota", "Brisbane", "Cairo", "Denver", "Dublin",
        "Helsinki", "Lagos", "Lima", "Lisbon", "Madrid", "Nairobi", "Osaka", "Oslo", "Prague",
        "Quito", "Seoul", "Tokyo", "Vienna", "Warsaw", "Zagreb",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| City {
            id: i as u64,
            name: (*name).to_string(),
        })
        .collect()
}

// The record provider: query in, matching records out. A real host would do
// this off-thread and deliver the result later, which is what the token is for.
fn get_items(query: &str) -> Vec<City> {
    let query = query.to_lowercase();
    all_cities()
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .collect()
}

fn print_pass(label: &str, c: &SearchListController<City, u64>, rows: &[RowPass<u64>]) {
    let drawn = rows.iter().filter(|r| r.rerender).count();
    println!(
        "{label}: spacer={}px rows={} drawn={} highlighted={:?}",
        c.total_size(),
        rows.len(),
        drawn,
        c.combobox().highlighted(),
    );
    for row in rows.iter().take(3) {
        let city = &c.records()[row.props.index];
        println!(
            "  [{}] {:10} start={:4} rerender={}",
            row.props.index, city.name, row.props.start, row.rerender
        );
    }
}

fn main() {
    let options = ComboboxOptions::new(|c: &City| c.id, |c: &City| c.name.clone())
        .with_on_selection_change(Some(|selected: Option<&City>| match selected {
            Some(c) => println!("notify: You selected {}", c.name),
            None => println!("notify: Selection Cleared"),
        }));

    let mut c = SearchListController::new(WindowOptions::new(0, 20).with_overscan(10), options);
    c.on_viewport_size(400);

    let mut rows = Vec::new();

    // Initial empty query shows everything.
    let token = c.on_input("").expect("first query dispatches");
    c.on_results(token, get_items(""));
    c.render_pass(&mut rows);
    print_pass("initial", &c, &rows);

    // The user types "o" then "os" before the first fetch lands; the
    // responses arrive out of order and the stale one is dropped.
    let o: QueryToken = c.on_input("o").expect("changed query dispatches");
    let os = c.on_input("os").expect("changed query dispatches");
    c.on_results(os, get_items("os"));
    let applied = c.on_results(o, get_items("o"));
    println!("stale \"o\" results applied: {applied}");
    c.render_pass(&mut rows);
    print_pass("after \"os\"", &c, &rows);

    // Keyboard: step down twice, select, then clear.
    c.highlight_next();
    c.highlight_next();
    c.render_pass(&mut rows);
    print_pass("after arrows", &c, &rows);

    c.select_highlighted();
    c.clear_selection();
}
