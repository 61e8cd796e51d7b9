//! Integration tests for `StockRepository` through the public API.

use stocklab_core::domain::NewStock;
use stocklab_core::{
    RepositoryConfig, RepositoryError, SharedRepository, SortAlgorithm, SortDirection, SortKey,
    Stock, StockFilter, StockRepository, StockUpdate,
};

fn symbols(stocks: &[Stock]) -> Vec<&str> {
    stocks.iter().map(Stock::symbol).collect()
}

fn two_banks() -> StockRepository {
    let mut repo = StockRepository::new();
    repo.add(NewStock::new("NABIL", "Nabil Bank Limited", "Commercial Bank", 1250.0))
        .unwrap();
    repo.add(NewStock::new("NICA", "NIC Asia Bank Limited", "Commercial Bank", 850.0))
        .unwrap();
    repo
}

// ── Walkthrough ──────────────────────────────────────────────────────

#[test]
fn nabil_nica_sbl_walkthrough() {
    let mut repo = two_banks();

    let sbl = repo
        .add(NewStock::new("SBL", "Siddhartha Bank Limited", "Commercial Bank", 420.0))
        .unwrap();
    assert_eq!(sbl.symbol(), "SBL");
    assert_eq!(repo.len(), 3);

    let dup = repo.add(NewStock::new("NABIL", "Again", "Commercial Bank", 1.0));
    assert_eq!(dup.unwrap_err(), RepositoryError::DuplicateKey("NABIL".into()));
    assert_eq!(repo.len(), 3);

    let nabil = repo.update("NABIL", StockUpdate::new().price(1300.0)).unwrap();
    assert_eq!(nabil.previous_price(), 1250.0);
    assert!((nabil.change_percent() - 4.0).abs() < 1e-9);

    assert_eq!(symbols(&repo.top_gainers(1)), vec!["NABIL"]);
    assert!(repo.top_losers(5).is_empty());

    assert_eq!(symbols(&repo.search_by_price_range(400.0, 900.0)), vec!["SBL", "NICA"]);
    assert_eq!(symbols(&repo.recently_added()), vec!["NABIL", "NICA", "SBL"]);
}

// ── Searches ─────────────────────────────────────────────────────────

#[test]
fn seeded_searches() {
    let repo = StockRepository::seeded();

    let hydro = repo.search_by_sector("hydro");
    assert_eq!(symbols(&hydro), vec!["NHPC", "CHCL", "AKPL", "UPPER"]);

    let nepal = repo.search_by_name("nepal");
    assert_eq!(symbols(&nepal), vec!["NHPC", "NLIC", "NTC", "NRIC"]);
    assert!(repo.search_by_name("   ").is_empty());

    let filter = StockFilter::new().sector("Bank").min_price(400.0).max_price(900.0);
    assert_eq!(symbols(&repo.search(&filter)), vec!["NICA", "SBL", "SANIMA", "LBBL", "MNBBL"]);

    let everything = repo.search(&StockFilter::new());
    assert_eq!(everything.len(), 15);

    let at_385 = repo.find_by_price(385.004).unwrap();
    assert!(["GBIME", "AKPL"].contains(&at_385.symbol()));
    assert!(repo.find_by_price(386.0).is_none());
    assert!(repo.find_by_year(1900).is_none());
}

#[test]
fn seeded_rankings() {
    let repo = StockRepository::seeded();
    assert_eq!(
        symbols(&repo.top_gainers(10)),
        vec!["LBBL", "NABIL", "AKPL", "NHPC", "SANIMA", "SBL"]
    );
    assert_eq!(symbols(&repo.top_losers(3)), vec!["MNBBL", "NICA", "CHCL"]);
    assert!(repo.top_gainers(0).is_empty());
}

// ── Sorting ──────────────────────────────────────────────────────────

#[test]
fn sorted_views_leave_canonical_order() {
    let repo = StockRepository::seeded();
    let before = symbols(&repo.all()).join(",");

    let by_cap = repo.sorted(SortKey::MarketCap, SortDirection::Descending);
    assert_eq!(by_cap[0].symbol(), "NTC");
    assert_eq!(by_cap[14].symbol(), "AKPL");

    // GBIME and AKPL tie at 385; the stable sort keeps listing order.
    let by_price = repo.sorted(SortKey::Price, SortDirection::Ascending);
    assert_eq!(symbols(&by_price[..2]), vec!["GBIME", "AKPL"]);

    let quick = repo.sorted_with(SortKey::Symbol, SortDirection::Ascending, SortAlgorithm::Quick);
    let merge = repo.sorted_with(SortKey::Symbol, SortDirection::Ascending, SortAlgorithm::Merge);
    assert_eq!(symbols(&quick), symbols(&merge));
    assert_eq!(quick[0].symbol(), "AKPL");

    assert_eq!(symbols(&repo.all()).join(","), before);
}

// ── Aggregates ───────────────────────────────────────────────────────

#[test]
fn seeded_aggregates() {
    let repo = StockRepository::seeded();
    assert_eq!(
        repo.all_sectors(),
        vec![
            "Commercial Bank",
            "Development Bank",
            "Hydropower",
            "Life Insurance",
            "Non-Life Insurance",
            "Trading",
            "Insurance",
        ]
    );
    assert_eq!(repo.total_market_cap(), 410_000_000_000.0);
    let counts = repo.sector_counts();
    assert_eq!(counts["Commercial Bank"], 5);
    assert_eq!(counts["Hydropower"], 4);
    assert_eq!(counts["Trading"], 1);
}

// ── Config ───────────────────────────────────────────────────────────

#[test]
fn config_from_toml_drives_construction() {
    let config = RepositoryConfig::from_toml(
        "recent_capacity = 2\nviewed_capacity = 2\nseed_sample_data = true\n",
    )
    .unwrap();
    let mut repo = StockRepository::with_config(&config).unwrap();
    assert_eq!(repo.len(), 15);
    assert_eq!(symbols(&repo.recently_added()), vec!["NTC", "NRIC"]);

    repo.view("NABIL");
    repo.view("NICA");
    repo.view("SBL");
    assert_eq!(symbols(&repo.recently_viewed()), vec!["NICA", "SBL"]);
}

// ── Shared handle ────────────────────────────────────────────────────

#[test]
fn shared_handle_sees_writes() {
    let shared = SharedRepository::new(two_banks());
    let other = shared.clone();
    other.update("nica", StockUpdate::new().price(800.0)).unwrap();
    assert_eq!(shared.get("NICA").unwrap().current_price(), 800.0);
    assert_eq!(shared.delete("NABIL").unwrap().symbol(), "NABIL");
    assert_eq!(other.len(), 1);
    assert!(shared.with_read(|repo| repo.price_change_count()) == 1);
}
