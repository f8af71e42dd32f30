
use fixtures::{Document, batch_labels, documents, number_column};
use proptest::prelude::*;
use rstest::*;
use tabula_batching::Batch;
use tabula_tables::column::FieldColumn;
use tabula_tables::values::SequenceValues;
use tabula_tables::{BatchProvider, BatchSettings, Table, TableRequest, TableSettings};

fn batched(start_batching_at: usize, batch_size: usize) -> TableSettings {
	TableSettings {
		start_batching_at,
		batch_size,
		..TableSettings::default()
	}
}

fn paged_table(prev: usize, next: usize) -> Table<String> {
	let items: Vec<String> = (0..100).map(|index| format!("item-{index:03}")).collect();
	let settings = TableSettings {
		batch: BatchSettings {
			prev_batch_size: prev,
			next_batch_size: next,
			..BatchSettings::default()
		},
		..batched(0, 1)
	};
	Table::builder(SequenceValues::new(items))
		.settings(settings)
		.column("name", FieldColumn::text("Name", |item: &String| item.clone()))
		.build()
		.unwrap()
}

#[rstest]
#[case(0, 2, 2, vec!["1", "2", "3", "...", "100"])]
#[case(4, 2, 2, vec!["1", "...", "3", "4", "5", "6", "7", "...", "100"])]
#[case(96, 2, 2, vec!["1", "...", "95", "96", "97", "98", "99", "100"])]
#[case(98, 2, 2, vec!["1", "...", "97", "98", "99", "100"])]
#[case(0, 0, 0, vec!["1", "...", "100"])]
#[case(99, 0, 0, vec!["1", "...", "100"])]
fn test_batch_navigation_for_hundred_pages(
	#[case] current: usize,
	#[case] prev: usize,
	#[case] next: usize,
	#[case] expected: Vec<&str>,
) {
	let mut table = paged_table(prev, next);
	let request = TableRequest::new("/items").with_param("table-batchStart", current.to_string());
	table.update(&request).unwrap();

	assert_eq!(table.batch().map(Batch::index), Some(current));
	assert_eq!(batch_labels(&table.render_batch().unwrap()), expected);
}

#[rstest]
fn test_rows_batched_above_threshold(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(batched(2, 2))
		.column("number", number_column())
		.build()
		.unwrap();
	let request = TableRequest::from_query(
		"http://localhost/container/table",
		"table-batchStart=2&table-sortOn=table-number-0",
	);
	table.update(&request).unwrap();

	let numbers: Vec<i64> = table
		.rows()
		.iter()
		.filter_map(|row| table.item(row))
		.map(|doc| doc.number)
		.collect();
	assert_eq!(numbers, vec![2, 3]);
	assert_eq!(table.batch_start(), 2);
	assert_eq!(table.batch_size(), 2);

	let expected = [
		"<a href=\"http://localhost/container/table?table-batchSize=2&amp;table-batchStart=0&amp;table-sortOn=table-number-0\" class=\"first\">1</a>",
		"<a href=\"http://localhost/container/table?table-batchSize=2&amp;table-batchStart=2&amp;table-sortOn=table-number-0\" class=\"current\">2</a>",
		"<a href=\"http://localhost/container/table?table-batchSize=2&amp;table-batchStart=4&amp;table-sortOn=table-number-0\" class=\"last\">3</a>",
	]
	.join("\n");
	assert_eq!(table.render_batch().unwrap(), expected);
}

#[rstest]
fn test_rows_not_batched_at_threshold(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(batched(5, 2))
		.column("number", number_column())
		.build()
		.unwrap();
	table.update(&TableRequest::new("/")).unwrap();

	assert!(table.batch().is_none());
	assert_eq!(table.rows().len(), 5);
	assert_eq!(table.render_batch().unwrap(), "");
}

#[rstest]
fn test_out_of_range_start_shows_last_page(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(batched(2, 2))
		.column("number", number_column())
		.build()
		.unwrap();
	table
		.update(&TableRequest::new("/").with_param("table-batchStart", "100"))
		.unwrap();

	assert_eq!(table.batch().map(Batch::index), Some(2));
	assert_eq!(table.rows().len(), 1);
}

#[rstest]
fn test_request_batch_size(documents: Vec<Document>) {
	let mut table = Table::builder(SequenceValues::new(documents))
		.settings(batched(2, 2))
		.column("number", number_column())
		.build()
		.unwrap();
	table
		.update(&TableRequest::new("/").with_param("table-batchSize", "3"))
		.unwrap();

	assert_eq!(table.rows().len(), 3);
	assert_eq!(table.batch().map(Batch::total), Some(2));
}

proptest! {
	/// Test: page lists that fit into the window are shown in full
	///
	/// Category: Property
	#[test]
	fn prop_fitting_page_lists_complete(
		total in 1usize..40,
		prev in 0usize..6,
		next in 0usize..6,
		seed in 0usize..1000,
	) {
		let index = seed % total;
		let batch = Batch::new(vec![(); total], index, 1).unwrap();
		let settings = BatchSettings {
			prev_batch_size: prev,
			next_batch_size: next,
			..BatchSettings::default()
		};
		let window = BatchProvider::new("table", settings).window(&batch).unwrap();

		if total <= prev + next + 3 {
			prop_assert_eq!(window.len(), total);
			prop_assert!(window.iter().all(|item| !item.is_elision()));
		} else {
			prop_assert!(window.len() <= prev + next + 5);
		}
	}
}
