//! End-to-end rendering tests over complete documents.
//!
//! Each test builds a tree through the public tag catalogue and compares the
//! rendered text, including indentation and line structure, against the
//! expected document.

use scrawl::nodes;
use scrawl::render_to_string;
use scrawl::svg::{circle, svg};
use scrawl::tags::{
    Alignment, HeadingWeight, Scope, body, custom, div, head, heading, html, line_break, link,
    list, list_item, ordered_list, table, table_data, table_row, title,
};
use scrawl::{Renderer, for_each};

#[test]
fn test_simple_page() {
    let page = html(nodes![
        head(title("Page title")),
        body(div("Page body")),
    ]);
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>
      Page title
    </title>
  </head>
  <body>
    <div>
      Page body
    </div>
  </body>
</html>
"#
    );
}

#[test]
fn test_page_with_link() {
    let page = html(body(nodes![
        link("https://google.com", "google"),
        line_break(),
    ]));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <a href="https://google.com">google</a>
    <br/>
  </body>
</html>
"#
    );
}

#[test]
fn test_lists() {
    let page = html(body(nodes![
        list(for_each(1..=3, |counter| list_item(format!("item #{counter}")))),
        ordered_list(for_each(1..=3, |_| list_item("item"))),
    ]));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <ul>
      <li>
        item #1
      </li>
      <li>
        item #2
      </li>
      <li>
        item #3
      </li>
    </ul>
    <ol>
      <li>
        item
      </li>
      <li>
        item
      </li>
      <li>
        item
      </li>
    </ol>
  </body>
</html>
"#
    );
}

#[test]
fn test_div_with_chained_attributes() {
    let page = html(body(div("Page body").class("page-class").id("abcdef")));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <div class="page-class" id="abcdef">
      Page body
    </div>
  </body>
</html>
"#
    );
}

#[test]
fn test_custom_tag() {
    let page = html(body(custom("any-tag", "This is text inside a custom tag").id("12345")));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <any-tag id="12345">
      This is text inside a custom tag
    </any-tag>
  </body>
</html>
"#
    );
}

#[test]
fn test_headings() {
    let page = html(body(nodes![
        heading(HeadingWeight::H1, "This is a heading of weight 1"),
        heading(HeadingWeight::H3, "This is a heading of weight 3"),
    ]));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <h1>
      This is a heading of weight 1
    </h1>
    <h3>
      This is a heading of weight 3
    </h3>
  </body>
</html>
"#
    );
}

#[test]
fn test_simple_table() {
    let page = html(body(table(nodes![
        table_row(nodes![table_data(1), table_data(2)]),
        table_row(nodes![table_data(3), table_data(4)]),
    ])));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <table>
      <tr>
        <td>
          1
        </td>
        <td>
          2
        </td>
      </tr>
      <tr>
        <td>
          3
        </td>
        <td>
          4
        </td>
      </tr>
    </table>
  </body>
</html>
"#
    );
}

#[test]
fn test_table_cell_attribute_stack() {
    let cell = table_data("Saturn")
        .column_span(2)
        .row_span(4)
        .scope(Scope::RowGroup)
        .alignment(Alignment::Center)
        .background_color("DDDDDD");
    assert_eq!(
        render_to_string(&cell),
        r#"<td colspan="2" rowspan="4" scope="rowgroup" align="center" bgcolor="DDDDDD">
  Saturn
</td>
"#
    );
}

#[test]
fn test_escaping_in_document() {
    let page = div("60&deg;F & 5 < 10 > 2");
    assert_eq!(
        render_to_string(&page),
        r#"<div>
  60&deg;F &amp; 5 &lt; 10 &gt; 2
</div>
"#
    );
}

#[test]
fn test_no_doctype_for_non_html_root() {
    let fragment = div("alone");
    assert_eq!(render_to_string(&fragment), "<div>\n  alone\n</div>\n");
}

#[test]
fn test_svg_embedded_in_page() {
    let page = html(body(svg(circle(40).center(50.0, 50.0))));
    assert_eq!(
        render_to_string(&page),
        r#"<!DOCTYPE html>
<html>
  <body>
    <svg>
      <circle r="40" cx="50" cy="50"/>
    </svg>
  </body>
</html>
"#
    );
}

#[test]
fn test_conditional_content() {
    fn page(show_footer: bool) -> scrawl::Node {
        html(body(nodes![
            div("always"),
            scrawl::Node::from(show_footer.then(|| div("sometimes"))),
        ]))
    }

    let with = render_to_string(&page(true));
    assert!(with.contains("sometimes"));

    let without = render_to_string(&page(false));
    assert!(!without.contains("sometimes"));
    assert!(without.contains("always"));
}

#[test]
fn test_file_output_round_trip() {
    let mut dir = std::env::temp_dir().display().to_string();
    if !dir.ends_with('/') {
        dir.push('/');
    }

    let page = html(body(div("written to disk")));
    Renderer::to_file("scrawl-render-test", dir.as_str())
        .render(&page)
        .unwrap();

    let read_back = scrawl::files::read_to_string("scrawl-render-test", &dir).unwrap();
    assert_eq!(read_back, render_to_string(&page));

    scrawl::files::delete("scrawl-render-test", &dir).unwrap();
}
