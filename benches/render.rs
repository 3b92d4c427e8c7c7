use divan::{Bencher, black_box};

use scrawl::tags::{body, div, head, html, table, table_data, table_row, title};
use scrawl::{Node, for_each, nodes, render_to_string};

fn main() {
    divan::main();
}

/// A page with a table of `rows` rows, four cells each.
fn page(rows: usize) -> Node {
    html(nodes![
        head(title("Benchmark page")),
        body(nodes![
            div("Intro paragraph with some & escaped < content >").class("intro"),
            table(for_each(0..rows, |row| {
                table_row(for_each(0..4, |column| {
                    table_data(format!("cell {row},{column}"))
                }))
            })),
        ]),
    ])
}

#[divan::bench(args = [10, 100, 1000])]
fn build_tree(bencher: Bencher, rows: usize) {
    bencher.bench(|| {
        let tree = page(black_box(rows));
        black_box(tree);
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn render(bencher: Bencher, rows: usize) {
    let tree = page(rows);
    bencher.bench_local(|| {
        let rendered = render_to_string(black_box(&tree));
        black_box(rendered);
    });
}
