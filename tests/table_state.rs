use admin_dashboard::domain::{Customer, Order, OrderField, OrderStatus, Product, ProductField};
use admin_dashboard::table::{MatchMode, SortDirection, TableConfig, TableEvent, TableState};
use std::collections::HashSet;

fn top_products() -> Vec<Product> {
    let mut products = vec![
        Product::new("1", "ASOS Ridley High Waist", 79.49, 82),
        Product::new("2", "Marco Lightweight Shirt", 128.50, 37),
        Product::new("3", "Half Sleeve Shirt", 39.99, 64),
        Product::new("4", "Lightweight Jacket", 20.00, 184),
        Product::new("5", "Marco Shoes", 79.49, 64),
    ];
    products[4].amount = 1965.81;
    products
}

fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let mut product = Product::new(i.to_string(), format!("Item {i:02}"), 1.0, 1);
            product.amount = i as f64 * 100.0;
            product
        })
        .collect()
}

fn order(id: &str, order_id: &str, customer: &str, project: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        order_id: order_id.to_string(),
        user: Customer {
            name: customer.to_string(),
            avatar: customer.chars().filter(|c| c.is_uppercase()).collect(),
        },
        project: project.to_string(),
        address: "Meadow Lane Oakland".to_string(),
        date: "Just now".to_string(),
        status,
        has_document: None,
    }
}

#[test]
fn twelve_products_first_page_by_amount() {
    let table = TableState::new(numbered_products(12), ProductField::table_config(5));
    let view = table.view();

    let ids: Vec<&str> = view.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["12", "11", "10", "9", "8"]);
    assert_eq!(view.total_pages, 3);
    assert!(view.has_next);
    assert!(!view.has_prev);
}

#[test]
fn top_products_sort_by_amount_then_name() {
    let mut table = TableState::new(top_products(), ProductField::table_config(5));

    let by_amount: Vec<&str> = table.view().items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(by_amount, vec!["1", "2", "4", "3", "5"]);

    table.set_sort_key(ProductField::Name);
    table.set_sort_key(ProductField::Name);
    assert_eq!(table.sort_direction(), SortDirection::Asc);

    let by_name: Vec<&str> = table.view().items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        by_name,
        vec![
            "ASOS Ridley High Waist",
            "Half Sleeve Shirt",
            "Lightweight Jacket",
            "Marco Lightweight Shirt",
            "Marco Shoes",
        ]
    );
}

#[test]
fn search_from_later_page_returns_to_first() {
    let mut table = TableState::new(numbered_products(12), ProductField::table_config(5));
    table.set_current_page(3);
    table.set_search_term("item 1");

    assert_eq!(table.current_page(), 1);
    assert_eq!(table.total_items(), 3);
    let ids: Vec<&str> = table.sorted_rows().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["12", "11", "10"]);
}

#[test]
fn numeric_search_ignores_unsearched_fields() {
    let mut table = TableState::new(top_products(), ProductField::table_config(5));
    table.set_search_term("184");
    assert_eq!(table.total_items(), 0);

    let config = ProductField::table_config(5).with_searchable_fields(vec![ProductField::Name, ProductField::Quantity]);
    let mut table = TableState::new(top_products(), config);
    table.set_search_term("184");
    let ids: Vec<&str> = table.sorted_rows().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);
}

#[test]
fn order_search_spans_id_customer_project_and_address() {
    let orders = vec![
        order("1", "#CM9801", "Natali Craig", "Landing Page", OrderStatus::InProgress),
        order("2", "#CM9802", "Kate Morrison", "CRM Admin pages", OrderStatus::Complete),
        order("3", "#CM9803", "Drew Cano", "Client Project", OrderStatus::Pending),
    ];
    let mut table = TableState::new(orders, OrderField::table_config(10));

    for (term, expected) in [("cm9802", vec!["2"]), ("DREW", vec!["3"]), ("admin", vec!["2"]), ("oakland", vec!["3", "2", "1"])] {
        table.set_search_term(term);
        let ids: Vec<&str> = table.sorted_rows().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected, "term {term:?}");
    }
}

#[test]
fn select_all_toggles_current_page_only() {
    let mut table = TableState::new(numbered_products(12), ProductField::table_config(5));

    assert!(table.apply(TableEvent::SelectAllItems));
    let expected: HashSet<String> = ["12", "11", "10", "9", "8"].iter().map(ToString::to_string).collect();
    assert_eq!(table.params().selected_items, expected);

    table.next_page();
    assert!(!table.is_page_fully_selected());
    table.select_all_items();
    assert!(table.is_selected(&"7".to_string()));
    assert!(!table.is_selected(&"12".to_string()));

    table.select_all_items();
    assert!(table.selected_items().is_empty());
}

#[test]
fn selection_survives_search_and_sort() {
    let mut table = TableState::new(top_products(), ProductField::table_config(5));
    table.toggle_item_selection("3".to_string());
    table.set_search_term("marco");
    table.set_sort_key(ProductField::Price);

    assert!(table.is_selected(&"3".to_string()));
    assert_eq!(table.view().items.len(), 2);
}

#[test]
fn reset_after_many_changes() {
    let mut table = TableState::new(numbered_products(12), ProductField::table_config(5));
    let initial = table.params();

    table.apply(TableEvent::SetSearchTerm("item".to_string()));
    table.apply(TableEvent::SetSortKey(ProductField::Name));
    table.apply(TableEvent::SetPageSize(3));
    table.apply(TableEvent::SetCurrentPage(4));
    table.apply(TableEvent::ToggleItemSelection("5".to_string()));
    assert!(table.apply(TableEvent::Reset));

    let params = table.params();
    assert_eq!(params.search_term, initial.search_term);
    assert_eq!(params.sort_key, initial.sort_key);
    assert_eq!(params.sort_direction, initial.sort_direction);
    assert_eq!(params.page_size, 5);
    assert_eq!(params.current_page, 1);
    assert!(params.selected_items.is_empty());
}

#[test]
fn replacing_rows_keeps_parameters() {
    let mut table = TableState::new(numbered_products(12), ProductField::table_config(5));
    table.set_current_page(3);
    table.set_search_term("item");
    table.set_current_page(3);

    table.set_rows(numbered_products(7));
    assert_eq!(table.search_term(), "item");
    assert_eq!(table.current_page(), 2);
    assert_eq!(table.view().items.len(), 2);

    table.set_rows(Vec::<Product>::new());
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.total_pages(), 0);
}

#[test]
fn fuzzy_mode_finds_abbreviations() {
    let config = ProductField::table_config(5).with_match_mode(MatchMode::Fuzzy);
    let mut table = TableState::new(top_products(), config);
    table.set_search_term("mrcshs");

    let names: Vec<&str> = table.sorted_rows().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Marco Shoes"]);
}

#[test]
fn unsorted_config_keeps_collection_order() {
    let config: TableConfig<ProductField> = TableConfig::default().with_page_size(2);
    let table = TableState::new(top_products(), config);

    let ids: Vec<&str> = table.view().items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(table.total_pages(), 3);
}

#[test]
fn view_serializes_for_the_host() {
    let table = TableState::new(top_products(), ProductField::table_config(2));
    let json: serde_json::Value = serde_json::from_str(&table.view().to_json().unwrap()).unwrap();

    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["hasNext"], true);
    assert_eq!(json["items"][0]["name"], "ASOS Ridley High Waist");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(2));
}
