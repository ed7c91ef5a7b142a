//! Integration tests for Markdown pipe-table conversion.

use tabledown::{render, DomTree, NodeId};

fn append_row(tree: &mut DomTree, parent: NodeId, tag: &str, cells: &[&str]) -> NodeId {
    let row = tree.append_element(parent, "tr");
    for &text in cells {
        let cell = tree.append_element(row, tag);
        tree.append_text(cell, text);
    }
    row
}

#[test]
fn converts_basic_table_with_thead_and_tbody() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let thead = tree.append_element(table, "thead");
    append_row(&mut tree, thead, "th", &["Column 1", "Column 2"]);
    let tbody = tree.append_element(table, "tbody");
    append_row(&mut tree, tbody, "td", &["Row 1, Column 1", "Row 1, Column 2"]);
    append_row(&mut tree, tbody, "td", &["Row 2, Column 1", "Row 2, Column 2"]);

    let expected = "\
| Column 1 | Column 2 |
| --- | --- |
| Row 1, Column 1 | Row 1, Column 2 |
| Row 2, Column 1 | Row 2, Column 2 |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn resolves_cell_alignment_from_attributes() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let thead = tree.append_element(table, "thead");
    let header = tree.append_element(thead, "tr");
    for (title, align) in [
        ("Column 1", "left"),
        ("Column 2", "center"),
        ("Column 3", "right"),
        ("Column 4", "foo"),
    ] {
        let th = tree.append_element_with_attrs(header, "th", &[("align", align)]);
        tree.append_text(th, title);
    }
    let tbody = tree.append_element(table, "tbody");
    append_row(&mut tree, tbody, "td", &["R1C1", "R1C2", "R1C3", "R1C4"]);
    append_row(&mut tree, tbody, "td", &["R2C1", "R2C2", "R2C3", "R2C4"]);

    let expected = "\
| Column 1 | Column 2 | Column 3 | Column 4 |
| :--- | :---: | ---: | --- |
| R1C1 | R1C2 | R1C3 | R1C4 |
| R2C1 | R2C2 | R2C3 | R2C4 |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn detects_heading_from_th_first_row() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    append_row(&mut tree, table, "th", &["Heading"]);
    append_row(&mut tree, table, "td", &["Content"]);

    assert_eq!(
        render(&tree).unwrap(),
        "| Heading |\n| --- |\n| Content |"
    );
}

#[test]
fn detects_heading_from_th_first_row_in_tbody() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let tbody = tree.append_element(table, "tbody");
    append_row(&mut tree, tbody, "th", &["Heading"]);
    append_row(&mut tree, tbody, "td", &["Content"]);

    assert_eq!(
        render(&tree).unwrap(),
        "| Heading |\n| --- |\n| Content |"
    );
}

#[test]
fn only_first_tbody_contributes_a_heading() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    for _ in 0..2 {
        let tbody = tree.append_element(table, "tbody");
        append_row(&mut tree, tbody, "th", &["Heading"]);
        append_row(&mut tree, tbody, "td", &["Content"]);
    }

    let expected = "\
| Heading |
| --- |
| Content |
| Heading |
| Content |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn heading_cells_in_populated_thead_and_tbody() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let thead = tree.append_element(table, "thead");
    append_row(&mut tree, thead, "th", &["Heading"]);
    let tbody = tree.append_element(table, "tbody");
    append_row(&mut tree, tbody, "th", &["Cell"]);

    assert_eq!(render(&tree).unwrap(), "| Heading |\n| --- |\n| Cell |");
}

#[test]
fn synthesizes_empty_header_when_no_heading_row() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    append_row(&mut tree, table, "td", &["Row 1 Cell 1", "Row 1 Cell 2"]);
    append_row(&mut tree, table, "td", &["Row 2 Cell 1", "Row 2 Cell 2"]);

    let expected = "\
|     |     |
| --- | --- |
| Row 1 Cell 1 | Row 1 Cell 2 |
| Row 2 Cell 1 | Row 2 Cell 2 |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn mixed_th_and_td_first_row_is_not_a_heading() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let first = tree.append_element(table, "tr");
    let th = tree.append_element(first, "th");
    tree.append_text(th, "Heading");
    let td = tree.append_element(first, "td");
    tree.append_text(td, "Not a heading");
    append_row(&mut tree, table, "td", &["Heading", "Not a heading"]);

    let expected = "\
|     |     |
| --- | --- |
| Heading | Not a heading |
| Heading | Not a heading |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn synthesized_border_uses_resolved_alignment() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    for align in ["center", "center", "left"] {
        let row = tree.append_element(table, "tr");
        let c1 = tree.append_element_with_attrs(row, "td", &[("align", align)]);
        tree.append_text(c1, "AAA");
        let c2 = tree.append_element(row, "td");
        tree.append_text(c2, "BBB");
    }

    let output = render(&tree).unwrap();
    // Two center votes beat one left vote; the unaligned column stays plain.
    assert!(output.contains("| :---: | --- |"), "got: {output}");
}

#[test]
fn emits_caption_before_table_body() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let caption = tree.append_element(table, "caption");
    tree.append_text(caption, "  Numbers  ");
    append_row(&mut tree, table, "td", &["One", "Two"]);
    append_row(&mut tree, table, "td", &["Three", "Four"]);

    let expected = "\
Numbers

|     |     |
| --- | --- |
| One | Two |
| Three | Four |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn expands_colspan_into_synthetic_cells() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    let header = tree.append_element(table, "tr");
    let th = tree.append_element(header, "th");
    tree.append_text(th, "Key");
    let th = tree.append_element_with_attrs(header, "th", &[("colspan", "2")]);
    tree.append_text(th, "Pair");
    let row = tree.append_element(table, "tr");
    let td = tree.append_element(row, "td");
    tree.append_text(td, "k");
    let td = tree.append_element_with_attrs(row, "td", &[("colspan", "2")]);
    tree.append_text(td, "v");

    let expected = "\
| Key | Pair |     |
| --- | --- |     |
| k   | v   |     |";
    assert_eq!(render(&tree).unwrap(), expected);
}

#[test]
fn short_cells_are_padded_and_pipes_escaped() {
    let mut tree = DomTree::new();
    let table = tree.append_element(tree.root(), "table");
    append_row(&mut tree, table, "td", &["a", "x|y"]);
    append_row(&mut tree, table, "td", &["b", "multi\nline"]);

    let output = render(&tree).unwrap();
    assert!(output.contains("| a   | x\\|y |"), "got: {output}");
    assert!(output.contains("| b   | multi<br>line |"), "got: {output}");
}

#[test]
fn renders_zero_row_table_as_nothing() {
    let mut tree = DomTree::new();
    tree.append_element(tree.root(), "table");
    assert_eq!(render(&tree).unwrap(), "");
}

#[test]
fn renders_surrounding_text_around_table() {
    let mut tree = DomTree::new();
    tree.append_text(tree.root(), "before");
    let table = tree.append_element(tree.root(), "table");
    append_row(&mut tree, table, "th", &["Name", "Value"]);
    append_row(&mut tree, table, "td", &["Foo", "Bar"]);
    tree.append_text(tree.root(), "after");

    let expected = "\
before

| Name | Value |
| --- | --- |
| Foo | Bar |

after";
    assert_eq!(render(&tree).unwrap(), expected);
}
