use menu_analytics::{
    average_price, averages_by_category, count, filter_by_category, summary, CategoryFilter,
};
use menu_store::{format_average, Category, MenuStore};

fn stocked_menu() -> MenuStore {
    let mut menu = MenuStore::new();
    menu.add("Butternut Soup", "Roasted butternut, cream swirl", "starter", "50.00")
        .unwrap();
    menu.add("Snoek Pâté", "Smoked snoek with melba toast", "starter", "64.00")
        .unwrap();
    menu.add("Bobotie", "Spiced mince bake with egg topping", "main", "120.00")
        .unwrap();
    menu.add("Lamb Braai Plate", "Chops with pap and chakalaka", "main", "152.00")
        .unwrap();
    menu.add("Malva Pudding", "Warm sponge with custard", "dessert", "67.00")
        .unwrap();
    menu
}

#[test]
fn home_screen_figures_come_from_one_snapshot() {
    let menu = stocked_menu();
    let snapshot = menu.snapshot();

    let figures = summary(&snapshot);
    assert_eq!(figures.total_dishes, 5);
    assert_eq!(figures.total_dishes, count(&snapshot));

    let rendered: Vec<String> = figures
        .average_prices
        .iter()
        .map(|(category, average)| format!("{} {}", category.label(), format_average(*average)))
        .collect();
    assert_eq!(rendered, ["Starter R57.00", "Main R136.00", "Dessert R67.00"]);
}

#[test]
fn snapshot_figures_survive_later_mutation() {
    let mut menu = stocked_menu();
    let snapshot = menu.snapshot();

    menu.clear();
    assert!(menu.is_empty());

    let figures = summary(&snapshot);
    assert_eq!(figures.total_dishes, 5);
    assert_eq!(
        average_price(&snapshot, Category::Starter),
        Some("57.00".parse().unwrap())
    );

    // The empty store, summarized fresh, reports no data across the board.
    let cleared = summary(&menu.snapshot());
    assert_eq!(cleared.total_dishes, 0);
    assert!(cleared.average_prices.values().all(Option::is_none));
}

#[test]
fn filter_screen_flow_from_raw_selector_values() {
    let menu = stocked_menu();
    let snapshot = menu.snapshot();

    let selector: CategoryFilter = "main".parse().unwrap();
    assert_eq!(selector.label(), "Main");

    let mains = filter_by_category(&snapshot, selector);
    let names: Vec<&str> = mains.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Bobotie", "Lamb Braai Plate"]);

    let everything = filter_by_category(&snapshot, "all".parse().unwrap());
    assert_eq!(everything, snapshot);
    assert_eq!(CategoryFilter::default().label(), "All Courses");
}

#[test]
fn summary_serializes_for_the_display_layer() {
    let mut menu = MenuStore::new();
    menu.add("Butternut Soup", "Roasted butternut, cream swirl", "starter", "50.00")
        .unwrap();
    menu.add("Snoek Pâté", "Smoked snoek with melba toast", "starter", "64.00")
        .unwrap();

    let figures = summary(&menu.snapshot());
    let json = serde_json::to_value(&figures).unwrap();

    assert_eq!(json["total_dishes"], 2);
    assert_eq!(json["average_prices"]["starter"], "57.00");
    assert!(json["average_prices"]["main"].is_null());
    assert!(json["average_prices"]["dessert"].is_null());
}

#[test]
fn partial_menus_still_report_all_three_courses() {
    let mut menu = MenuStore::new();
    menu.add("Koeksister", "Syrup-soaked plaited doughnut", "dessert", "18.00")
        .unwrap();

    let averages = averages_by_category(&menu.snapshot());
    assert_eq!(averages.len(), 3);
    assert_eq!(averages[&Category::Dessert], Some("18.00".parse().unwrap()));
    assert_eq!(format_average(averages[&Category::Main]), "No data");
}
