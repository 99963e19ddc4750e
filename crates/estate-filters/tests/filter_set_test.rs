//! Filter bar integration tests
//!
//! Typed filters evaluated against JSON listings and list envelope decoding.

use chrono::NaiveDate;
use estate_filters::filter_set::{DATE_RANGE, LOCATION, PRICE_RANGE, STATUS, TYPE};
use estate_filters::{FilterFields, FilterSet, ListPage, ListQuery};
use rstest::*;
use serde_json::{Value, json};

#[fixture]
fn today() -> NaiveDate {
	// Thursday
	NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
}

#[fixture]
fn listings() -> Vec<Value> {
	vec![
		json!({"id": 1, "type": "villa", "status": "available", "price": 9500000, "location": "Candolim, Goa", "created_at": "2024-03-14T09:30:00Z"}),
		json!({"id": 2, "type": "apartment", "status": "sold", "price": "4500000", "location": "Baner, Pune", "created_at": "2024-03-11"}),
		json!({"id": 3, "type": "plot", "status": "Available", "price": 800000, "location": "Nashik", "created_at": "2024-02-20"}),
		json!({"id": 4, "type": "house", "status": "upcoming", "price": null, "location": null, "created_at": null}),
	]
}

fn matching(filters: &FilterSet, rows: &[Value], today: NaiveDate) -> Vec<i64> {
	let fields = FilterFields::new();
	rows.iter()
		.filter(|row| filters.matches(*row, &fields, today))
		.map(|row| row["id"].as_i64().unwrap())
		.collect()
}

#[rstest]
fn test_no_filters_match_everything(listings: Vec<Value>, today: NaiveDate) {
	assert_eq!(matching(&FilterSet::new(), &listings, today), vec![1, 2, 3, 4]);
}

#[rstest]
#[case("today", vec![1])]
#[case("this_week", vec![1, 2])]
#[case("this_month", vec![1, 2])]
#[case("last_month", vec![3])]
#[case("this_year", vec![1, 2, 3])]
fn test_date_range_filter(
	listings: Vec<Value>,
	today: NaiveDate,
	#[case] range: &str,
	#[case] expected: Vec<i64>,
) {
	let filters: FilterSet = [(DATE_RANGE, range)].into_iter().collect();
	assert_eq!(matching(&filters, &listings, today), expected);
}

#[rstest]
#[case("0-500000", vec![])]
#[case("500000-1000000", vec![3])]
#[case("2500000-5000000", vec![2])]
#[case("5000000+", vec![1])]
fn test_price_range_filter(
	listings: Vec<Value>,
	today: NaiveDate,
	#[case] range: &str,
	#[case] expected: Vec<i64>,
) {
	let filters: FilterSet = [(PRICE_RANGE, range)].into_iter().collect();
	assert_eq!(matching(&filters, &listings, today), expected);
}

#[rstest]
fn test_status_is_case_insensitive(listings: Vec<Value>, today: NaiveDate) {
	let filters: FilterSet = [(STATUS, "available")].into_iter().collect();
	assert_eq!(matching(&filters, &listings, today), vec![1, 3]);
}

#[rstest]
fn test_filters_combine(listings: Vec<Value>, today: NaiveDate) {
	let filters: FilterSet = [(STATUS, "available"), (TYPE, "villa"), (LOCATION, "goa")]
		.into_iter()
		.collect();
	assert_eq!(matching(&filters, &listings, today), vec![1]);
}

#[rstest]
fn test_location_substring(listings: Vec<Value>, today: NaiveDate) {
	let filters: FilterSet = [(LOCATION, " PUNE ")].into_iter().collect();
	assert_eq!(matching(&filters, &listings, today), vec![2]);
}

#[rstest]
fn test_malformed_values_do_not_narrow(listings: Vec<Value>, today: NaiveDate) {
	let filters: FilterSet = [(DATE_RANGE, "someday"), (PRICE_RANGE, "lots")]
		.into_iter()
		.collect();
	assert_eq!(matching(&filters, &listings, today), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_custom_field_names(today: NaiveDate) {
	let leads = vec![
		json!({"id": 10, "stage": "new", "budget": 2000000, "preferred_location": "Goa", "updated_at": "2024-03-13"}),
		json!({"id": 11, "stage": "won", "budget": 2000000, "preferred_location": "Goa", "updated_at": "2024-03-13"}),
	];
	let fields = FilterFields::new()
		.with_status("stage")
		.with_price("budget")
		.with_location("preferred_location")
		.with_date("updated_at");
	let filters: FilterSet = [
		(STATUS, "new"),
		(PRICE_RANGE, "1000000-2500000"),
		(DATE_RANGE, "yesterday"),
	]
	.into_iter()
	.collect();

	let hits: Vec<&Value> = leads
		.iter()
		.filter(|lead| filters.matches(*lead, &fields, today))
		.collect();
	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0]["id"], 10);
}

#[rstest]
fn test_query_params_for_endpoint() {
	let mut query = ListQuery::new();
	query.set_search("sea view");
	query.set_filter(STATUS, "available");
	query.set_filter(TYPE, "");
	query.set_page(2).unwrap();

	assert_eq!(
		query.query_params(),
		vec![
			("page".to_string(), "2".to_string()),
			("per_page".to_string(), "10".to_string()),
			("search".to_string(), "sea view".to_string()),
			("status".to_string(), "available".to_string()),
		]
	);
}

#[rstest]
#[case(r#"{"items": [1, 2], "total": 12, "page": 2, "pages": 2}"#)]
#[case(r#"{"properties": [1, 2], "total": 12, "page": 2, "pages": 2}"#)]
#[case(r#"{"leads": [1, 2], "total": 12, "page": 2, "pages": 2}"#)]
#[case(r#"{"employees": [1, 2], "total": 12, "page": 2, "pages": 2}"#)]
fn test_list_envelope_aliases(#[case] body: &str) {
	let page: ListPage<u32> = serde_json::from_str(body).unwrap();
	assert_eq!(page.items, vec![1, 2]);
	assert_eq!(page.total, 12);
	assert!(page.has_pager());
	assert!(page.has_previous());
	assert!(!page.has_next());
	assert_eq!(page.page_numbers().collect::<Vec<_>>(), vec![1, 2]);
}

#[rstest]
fn test_list_envelope_defaults() {
	let page: ListPage<u32> = serde_json::from_str("{}").unwrap();
	assert!(page.items.is_empty());
	assert_eq!((page.total, page.page, page.pages), (0, 1, 0));
	assert!(!page.has_pager());
}
