
use fixtures::{Document, documents, number_column, request, title_column};
use rstest::*;
use std::collections::BTreeMap;
use tabula_tables::column::{CheckBoxColumn, ColumnConfig, ColumnContext, FieldColumn, NameColumn};
use tabula_tables::values::{ContainerValues, SequenceValues};
use tabula_tables::{Column, Table, TableError, TableRequest, TableSettings};

/// Column spanning two columns for the document numbered 1
#[derive(Debug)]
struct SpanningColumn {
	colspan: usize,
}

impl Column<Document> for SpanningColumn {
	fn header(&self) -> &str {
		"Span"
	}

	fn colspan(&self, item: &Document) -> usize {
		if item.number == 1 { self.colspan } else { 0 }
	}

	fn render_cell(&self, item: &Document, _ctx: &ColumnContext<'_>) -> String {
		format!("span-{}", item.name)
	}
}

fn unsorted() -> TableSettings {
	TableSettings {
		sort_on: None,
		..TableSettings::default()
	}
}

fn row_names(table: &Table<Document>) -> Vec<String> {
	table
		.rows()
		.iter()
		.filter_map(|row| table.item(row))
		.map(|doc| doc.name.clone())
		.collect()
}

#[rstest]
fn test_table_without_columns_renders_nothing(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents)).build().unwrap();
	table.update(&request).unwrap();
	assert_eq!(table.render(), "");
	assert_eq!(table.render_batch().unwrap(), "");
}

#[rstest]
fn test_render_layout(request: TableRequest) {
	let values = SequenceValues::new(vec![
		Document::new("zero", "Title Zero", 0),
		Document::new("first", "Title First", 1),
	]);
	let mut table = Table::builder(values)
		.column("title", title_column())
		.column("number", number_column())
		.build()
		.unwrap();
	table.update(&request).unwrap();

	let expected = [
		"<table>",
		"  <thead>",
		"    <tr>",
		"      <th class=\"sorted-on ascending\">Title</th>",
		"      <th>Number</th>",
		"    </tr>",
		"  </thead>",
		"  <tbody>",
		"    <tr>",
		"      <td class=\"sorted-on ascending\">Title First</td>",
		"      <td>1</td>",
		"    </tr>",
		"    <tr>",
		"      <td class=\"sorted-on ascending\">Title Zero</td>",
		"      <td>0</td>",
		"    </tr>",
		"  </tbody>",
		"</table>",
	]
	.join("\n");
	assert_eq!(table.render(), expected);
}

#[rstest]
fn test_columns_ordered_by_weight(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("number", number_column())
		.column("select", CheckBoxColumn::new())
		.column("title", title_column())
		.build()
		.unwrap();
	table.update(&request).unwrap();

	let ids: Vec<&str> = table.columns().iter().map(|column| column.id()).collect();
	assert_eq!(ids, vec!["table-title-0", "table-number-1", "table-select-2"]);
	assert_eq!(table.column_index_by_id("table-number-1"), Some(1));
	assert_eq!(table.column_by_name("select").map(|column| column.index()), Some(2));
	assert_eq!(table.column_by_name("missing").map(|column| column.index()), None);
}

#[rstest]
#[case("table-number-1", "ascending", vec!["zero", "first", "second", "third", "fourth"])]
#[case("table-number-1", "descending", vec!["fourth", "third", "second", "first", "zero"])]
#[case("1", "down", vec!["fourth", "third", "second", "first", "zero"])]
#[case("table-title-0", "ascending", vec!["first", "fourth", "second", "third", "zero"])]
#[case("table-title-0", "reverse", vec!["zero", "third", "second", "fourth", "first"])]
fn test_sort_from_request(
	documents: Vec<Document>,
	#[case] sort_on: &str,
	#[case] sort_order: &str,
	#[case] expected: Vec<&str>,
) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("title", title_column())
		.column("number", number_column())
		.build()
		.unwrap();
	let request = TableRequest::new("/")
		.with_param("table-sortOn", sort_on)
		.with_param("table-sortOrder", sort_order);
	table.update(&request).unwrap();

	assert_eq!(table.sort_order(), sort_order);
	assert_eq!(row_names(&table), expected);
}

#[rstest]
fn test_unknown_sort_column_falls_back_to_first(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("title", title_column())
		.column("number", number_column())
		.build()
		.unwrap();
	table
		.update(&TableRequest::new("/").with_param("table-sortOn", "table-missing"))
		.unwrap();

	assert_eq!(table.sort_on(), Some(0));
	assert_eq!(row_names(&table), vec!["first", "fourth", "second", "third", "zero"]);
}

#[rstest]
fn test_css_classes(request: TableRequest) {
	let mut css_classes = BTreeMap::new();
	for element in ["table", "thead", "tbody", "th", "td"] {
		css_classes.insert(element.to_string(), format!("{element}-class"));
	}
	let settings = TableSettings {
		css_classes,
		css_class_even: "even".to_string(),
		css_class_odd: "odd".to_string(),
		..TableSettings::default()
	};
	let values = SequenceValues::new(vec![
		Document::new("zero", "Title Zero", 0),
		Document::new("first", "Title First", 1),
	]);
	let mut table = Table::builder(values)
		.settings(settings)
		.column("number", number_column())
		.build()
		.unwrap();
	table.update(&request).unwrap();
	let html = table.render();

	assert!(html.starts_with("<table class=\"table-class\">\n  <thead class=\"thead-class\">\n    <tr>"));
	assert!(html.contains("<th class=\"sorted-on ascending th-class\">Number</th>"));
	assert!(html.contains("<tr class=\"even\">\n      <td class=\"sorted-on ascending td-class\">0</td>"));
	assert!(html.contains("<tr class=\"odd\">\n      <td class=\"sorted-on ascending td-class\">1</td>"));
	assert!(html.contains("<tbody class=\"tbody-class\">"));
}

#[rstest]
#[case(Some(String::new()))]
#[case(None)]
fn test_sorted_on_marker_can_be_turned_off(request: TableRequest, #[case] sorted_on: Option<String>) {
	let settings = TableSettings {
		css_class_sorted_on: sorted_on,
		..TableSettings::default()
	};
	let mut table = Table::builder(SequenceValues::new(vec![Document::new("zero", "Title Zero", 0)]))
		.settings(settings)
		.column("title", title_column())
		.build()
		.unwrap();
	table.update(&request).unwrap();
	assert!(!table.render().contains("class="));
}

#[rstest]
fn test_column_css_class_and_highlight(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(unsorted())
		.column(
			"number",
			FieldColumn::text("Number", |doc: &Document| doc.number.to_string()).css_class("td", "right"),
		)
		.highlight(|id, doc: &Document, css| {
			if id == "table-number-0" && doc.number == 3 {
				Some("highlight".to_string())
			} else {
				css
			}
		})
		.build()
		.unwrap();
	table.update(&request).unwrap();
	let html = table.render();

	assert!(html.contains("<td class=\"right\">2</td>"));
	assert!(html.contains("<td class=\"highlight\">3</td>"));
}

#[rstest]
fn test_colspan(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(unsorted())
		.column("span", SpanningColumn { colspan: 2 })
		.column_with("title", title_column(), ColumnConfig::new().weight(1))
		.column_with("number", number_column(), ColumnConfig::new().weight(2))
		.build()
		.unwrap();
	table.update(&request).unwrap();

	let spanned = &table.rows()[1];
	assert_eq!(spanned.cells()[0].colspan(), 2);
	assert!(spanned.cells()[1].is_spanned());
	assert!(!spanned.cells()[2].is_spanned());

	let html = table.render();
	assert!(html.contains(
		"<tr>\n      <td colspan=\"2\">span-first</td>\n      <td>1</td>\n    </tr>"
	));
	assert!(html.contains(
		"<tr>\n      <td>span-zero</td>\n      <td>Title Zero</td>\n      <td>0</td>\n    </tr>"
	));
}

#[rstest]
fn test_colspan_to_last_column_is_allowed(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("span", SpanningColumn { colspan: 3 })
		.column_with("title", title_column(), ColumnConfig::new().weight(1))
		.column_with("number", number_column(), ColumnConfig::new().weight(2))
		.build()
		.unwrap();
	assert!(table.update(&request).is_ok());
}

#[rstest]
fn test_colspan_overflow(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("span", SpanningColumn { colspan: 3 })
		.column_with("title", title_column(), ColumnConfig::new().weight(1))
		.build()
		.unwrap();
	match table.update(&request) {
		Err(TableError::ColspanOverflow { column }) => assert_eq!(column, "span"),
		other => panic!("expected colspan overflow, got {other:?}"),
	}
}

#[rstest]
fn test_selected_rows(documents: Vec<Document>) {
	let settings = TableSettings {
		css_class_even: "even".to_string(),
		css_class_odd: "odd".to_string(),
		css_class_selected: "selected".to_string(),
		..unsorted()
	};
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(settings)
		.column("name", NameColumn::new())
		.column("select", CheckBoxColumn::new())
		.build()
		.unwrap();
	let request = TableRequest::from_query(
		"http://localhost/container/table",
		"table-select-1-selectedItems=second&table-select-1-selectedItems=third",
	);
	table.update(&request).unwrap();

	let selected: Vec<&str> = table.selected_items().into_iter().map(|doc| doc.name.as_str()).collect();
	assert_eq!(selected, vec!["second", "third"]);

	let html = table.render();
	assert!(html.contains("<tr class=\"selected even\">\n      <td>second</td>"));
	assert!(html.contains("<tr class=\"selected odd\">\n      <td>third</td>"));
	assert!(html.contains("<tr class=\"even\">\n      <td>zero</td>"));
	assert!(html.contains(
		"value=\"second\" checked=\"checked\" />"
	));
}

#[rstest]
fn test_selection_reset_between_updates(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("select", CheckBoxColumn::new())
		.build()
		.unwrap();
	table
		.update(&TableRequest::new("/").with_param("table-select-0-selectedItems", "zero"))
		.unwrap();
	assert_eq!(table.selected_items().len(), 1);

	table.update(&TableRequest::new("/")).unwrap();
	assert!(table.selected_items().is_empty());
}

#[rstest]
fn test_sorting_headers(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.column("title", title_column())
		.column("number", number_column())
		.sorting_headers()
		.build()
		.unwrap();
	table
		.update(&TableRequest::new("/").with_param("table-sortOn", "table-number-1"))
		.unwrap();
	let html = table.render();

	assert!(html.contains(
		"<th><a href=\"?table-sortOn=table-title-0&amp;table-sortOrder=ascending\" title=\"Sort\">Title</a></th>"
	));
	assert!(html.contains(
		"<th class=\"sorted-on ascending\"><a href=\"?table-sortOn=table-number-1&amp;table-sortOrder=descending\" title=\"Sort\">Number</a></th>"
	));
}

#[rstest]
fn test_column_config_overrides(documents: Vec<Document>, request: TableRequest) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(unsorted())
		.column_with(
			"title",
			title_column(),
			ColumnConfig::new()
				.cell_renderer(|doc: &Document| format!("{} item", doc.name))
				.head_cell_renderer(|| "My items".to_string()),
		)
		.build()
		.unwrap();
	table.update(&request).unwrap();
	let html = table.render();

	assert!(html.contains("<th>My items</th>"));
	assert!(html.contains("<td>zero item</td>"));
}

#[rstest]
fn test_container_values(request: TableRequest) {
	let mut container = BTreeMap::new();
	container.insert("b".to_string(), Document::new("b", "Beta", 2));
	container.insert("a".to_string(), Document::new("a", "Alpha", 1));

	let mut table = Table::builder(ContainerValues::new(container))
		.settings(unsorted())
		.column("name", NameColumn::new())
		.build()
		.unwrap();
	table.update(&request).unwrap();
	assert_eq!(row_names(&table), vec!["a", "b"]);
}

#[rstest]
fn test_duplicate_column_rejected(documents: Vec<Document>) {
	let result = Table::builder(SequenceValues::new(documents))
		.column("title", title_column())
		.column("title", number_column())
		.build();
	assert!(matches!(result, Err(TableError::DuplicateColumn(name)) if name == "title"));
}

#[rstest]
fn test_invalid_settings_rejected(documents: Vec<Document>) {
	let settings = TableSettings {
		batch_size: 0,
		..TableSettings::default()
	};
	let result = Table::builder(SequenceValues::new(documents))
		.settings(settings)
		.build();
	assert!(matches!(result, Err(TableError::Settings(_))));
}
