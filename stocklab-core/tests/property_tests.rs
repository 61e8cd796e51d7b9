//! Property tests for container, sort, search and repository invariants.
//!
//! Uses proptest to verify:
//! 1. Eviction laws: bounded containers keep the newest `capacity` items
//! 2. Empty failures: pop/peek/dequeue on an empty container error out
//! 3. Sort agreement: quicksort and mergesort produce the same key order
//! 4. Mergesort stability: equal keys keep input order
//! 5. Binary search hits: every present key is found
//! 6. Repository round trips: add, lookup, delete

use proptest::prelude::*;
use std::collections::HashSet;
use stocklab_core::collections::{BoundedQueue, BoundedStack, ContainerError};
use stocklab_core::domain::{NewStock, Stock, StockId};
use stocklab_core::ordering::{SortDirection, SortKey};
use stocklab_core::search::{
    binary_search_by_symbol, binary_search_by_year, find_by_price, find_by_symbol,
    search_by_price_range,
};
use stocklab_core::sort::{mergesort, mergesort_by, quicksort, quicksort_by};
use stocklab_core::StockRepository;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..5000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

/// Caller fields for a stock with symbol `symbol` and arbitrary values.
fn arb_new_stock(symbol: String) -> impl Strategy<Value = NewStock> {
    (
        "[A-Za-z ]{1,24}",
        "[A-Za-z -]{1,18}",
        arb_price(),
        (0.0..1e11_f64),
        any::<u64>(),
        1900..2100_i32,
    )
        .prop_map(move |(name, sector, price, cap, volume, year)| {
            NewStock::new(symbol.clone(), name, sector, price)
                .market_cap(cap)
                .volume(volume)
                .year_listed(year)
        })
}

fn assert_same_record(found: &Stock, added: &Stock, fields: &NewStock) -> Result<(), TestCaseError> {
    prop_assert_eq!(found.id(), added.id());
    prop_assert_eq!(found.symbol(), fields.symbol.trim().to_uppercase());
    prop_assert_eq!(found.company_name(), fields.company_name.as_str());
    prop_assert_eq!(found.sector(), fields.sector.as_str());
    prop_assert_eq!(found.current_price(), fields.price);
    prop_assert_eq!(found.previous_price(), fields.price);
    prop_assert_eq!(found.market_cap(), fields.market_cap);
    prop_assert_eq!(found.volume(), fields.volume);
    prop_assert_eq!(found.year_listed(), fields.year_listed);
    prop_assert_eq!(found.change_percent(), 0.0);
    prop_assert_eq!(found.added_date(), added.added_date());
    Ok(())
}

/// Stocks with unique symbols `S0..Sn` and arbitrary prices, volumes and years.
fn arb_stocks(max: usize) -> impl Strategy<Value = Vec<Stock>> {
    prop::collection::vec((arb_price(), 0..1_000_000_u64, 1980..2024_i32), 0..max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, volume, year))| {
                    Stock::new(
                        StockId(i as u32 + 1),
                        NewStock::new(format!("S{i}"), format!("Company {i}"), "Sector", price)
                            .volume(volume)
                            .year_listed(year),
                    )
                })
                .collect()
        },
    )
}

fn keys(stocks: &[Stock], key: SortKey) -> Vec<String> {
    stocks
        .iter()
        .map(|s| match key {
            SortKey::Symbol => s.symbol().to_lowercase(),
            SortKey::Name => s.company_name().to_lowercase(),
            SortKey::Price => format!("{:.2}", s.current_price()),
            SortKey::MarketCap => format!("{:.2}", s.market_cap()),
            SortKey::Volume => s.volume().to_string(),
            SortKey::YearListed => s.year_listed().to_string(),
            SortKey::ChangePercent => format!("{:.4}", s.change_percent()),
        })
        .collect()
}

// ── 1. Eviction Laws ─────────────────────────────────────────────────

proptest! {
    /// A stack keeps the newest `capacity` pushes, newest on top.
    #[test]
    fn stack_keeps_newest(cap in 1..20_usize, items in prop::collection::vec(any::<i32>(), 0..60)) {
        let mut stack = BoundedStack::new(cap).unwrap();
        let mut evicted = Vec::new();
        for &x in &items {
            evicted.extend(stack.push(x));
        }
        let kept = items.len().min(cap);
        prop_assert_eq!(stack.len(), kept);
        let expected: Vec<i32> = items.iter().rev().take(kept).copied().collect();
        prop_assert_eq!(stack.to_vec(), expected);
        prop_assert_eq!(&evicted[..], &items[..items.len() - kept]);
    }

    /// A queue keeps the newest `capacity` enqueues in arrival order.
    #[test]
    fn queue_keeps_newest(cap in 1..20_usize, items in prop::collection::vec(any::<i32>(), 0..60)) {
        let mut queue = BoundedQueue::new(cap).unwrap();
        let mut evicted = Vec::new();
        for &x in &items {
            evicted.extend(queue.enqueue(x));
        }
        let kept = items.len().min(cap);
        prop_assert_eq!(queue.len(), kept);
        prop_assert_eq!(queue.to_vec(), items[items.len() - kept..].to_vec());
        prop_assert_eq!(&evicted[..], &items[..items.len() - kept]);
    }
}

// ── 2. Empty Failures ────────────────────────────────────────────────

proptest! {
    /// Draining a container fully leaves every removal/peek failing.
    #[test]
    fn drained_containers_fail(cap in 1..10_usize, items in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut stack = BoundedStack::new(cap).unwrap();
        let mut queue = BoundedQueue::new(cap).unwrap();
        for &x in &items {
            stack.push(x);
            queue.enqueue(x);
        }
        while stack.pop().is_ok() {}
        while queue.dequeue().is_ok() {}
        prop_assert_eq!(stack.peek().unwrap_err(), ContainerError::EmptyContainer("stack"));
        prop_assert_eq!(queue.peek_front().unwrap_err(), ContainerError::EmptyContainer("queue"));
        prop_assert_eq!(queue.peek_back().unwrap_err(), ContainerError::EmptyContainer("queue"));
    }
}

// ── 3. Sort Agreement ────────────────────────────────────────────────

proptest! {
    /// Quicksort and mergesort agree on the key sequence for any key.
    #[test]
    fn quick_and_merge_agree_on_keys(
        stocks in arb_stocks(60),
        key in arb_key(),
        dir in arb_direction(),
    ) {
        let merged = mergesort(&stocks, key, dir);
        let mut quick = stocks.clone();
        quicksort(&mut quick, key, dir);
        prop_assert_eq!(keys(&quick, key), keys(&merged, key));
    }

    /// With distinct keys the two algorithms produce the identical order.
    #[test]
    fn quick_and_merge_identical_on_distinct(
        values in prop::collection::hash_set(any::<i64>(), 0..80),
        desc in any::<bool>(),
    ) {
        let values: Vec<i64> = values.into_iter().collect();
        let cmp = |a: &i64, b: &i64| if desc { b.cmp(a) } else { a.cmp(b) };
        let merged = mergesort_by(&values, cmp);
        let mut quick = values.clone();
        quicksort_by(&mut quick, cmp);
        prop_assert_eq!(quick, merged);
    }
}

// ── 4. Mergesort Stability ───────────────────────────────────────────

proptest! {
    /// Equal prices keep their input order.
    #[test]
    fn mergesort_is_stable(prices in prop::collection::vec(0..5_u8, 0..60)) {
        let stocks: Vec<Stock> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Stock::new(StockId(i as u32), NewStock::new(format!("S{i}"), "x", "y", p as f64)))
            .collect();
        let sorted = mergesort(&stocks, SortKey::Price, SortDirection::Ascending);
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.current_price() <= b.current_price());
            if a.current_price() == b.current_price() {
                prop_assert!(a.id() < b.id());
            }
        }
    }
}

// ── 5. Binary Search Hits ────────────────────────────────────────────

proptest! {
    /// Every symbol, year and price present in the input is found.
    #[test]
    fn present_keys_are_found(stocks in arb_stocks(40)) {
        for s in &stocks {
            let sym_sorted = mergesort(&stocks, SortKey::Symbol, SortDirection::Ascending);
            let idx = binary_search_by_symbol(&stocks, s.symbol());
            prop_assert!(idx.is_some());
            prop_assert_eq!(sym_sorted[idx.unwrap()].symbol(), s.symbol());

            let year_sorted = mergesort(&stocks, SortKey::YearListed, SortDirection::Ascending);
            let idx = binary_search_by_year(&stocks, s.year_listed());
            prop_assert!(idx.is_some());
            prop_assert_eq!(year_sorted[idx.unwrap()].year_listed(), s.year_listed());

            let found = find_by_price(&stocks, s.current_price());
            prop_assert!(found.is_some());
            prop_assert!((found.unwrap().current_price() - s.current_price()).abs() < 0.01);
        }
    }

    /// A range search returns exactly the in-range stocks, ascending.
    #[test]
    fn range_matches_filter(stocks in arb_stocks(40), a in arb_price(), b in arb_price()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let found = search_by_price_range(&stocks, min, max);
        let expected = stocks
            .iter()
            .filter(|s| s.current_price() >= min && s.current_price() <= max)
            .count();
        prop_assert_eq!(found.len(), expected);
        prop_assert!(found.windows(2).all(|w| w[0].current_price() <= w[1].current_price()));
        prop_assert!(search_by_price_range(&stocks, max + 1.0, min).is_empty());
    }
}

// ── 6. Repository Round Trips ────────────────────────────────────────

proptest! {
    /// A stock read back after `add`, by index lookup or by linear symbol
    /// lookup in any case, carries exactly the fields it was added with.
    #[test]
    fn add_then_lookup_returns_every_field(
        fields in "[a-zA-Z]{1,6}".prop_flat_map(arb_new_stock),
        others in prop::collection::vec("[0-9]{1,3}".prop_flat_map(arb_new_stock), 0..10),
    ) {
        let mut repo = StockRepository::new();
        for other in others {
            // digit-only symbols may repeat among themselves; never collide with `fields`
            let _ = repo.add(other);
        }
        let added = repo.add(fields.clone()).unwrap();
        assert_same_record(&added, &added, &fields)?;

        let lookup = fields.symbol.to_lowercase();
        let by_index = repo.get(&lookup);
        prop_assert!(by_index.is_some());
        assert_same_record(&by_index.unwrap(), &added, &fields)?;

        let all = repo.all();
        let by_scan = find_by_symbol(&all, &lookup);
        prop_assert!(by_scan.is_some());
        assert_same_record(by_scan.unwrap(), &added, &fields)?;

        let removed = repo.delete(&fields.symbol).unwrap();
        assert_same_record(&removed, &added, &fields)?;
        prop_assert!(repo.get(&fields.symbol).is_none());
        prop_assert!(find_by_symbol(&repo.all(), &fields.symbol).is_none());
    }

    /// Added stocks are retrievable by any-case symbol until deleted, and
    /// deletion keeps the rest of the index consistent.
    #[test]
    fn add_lookup_delete(
        symbols in prop::collection::hash_set("[A-Z]{2,6}", 1..30),
        delete_mask in prop::collection::vec(any::<bool>(), 30),
    ) {
        let symbols: Vec<String> = symbols.into_iter().collect();
        let mut repo = StockRepository::new();
        for (i, sym) in symbols.iter().enumerate() {
            repo.add(NewStock::new(sym.as_str(), "Co", "Sector", i as f64)).unwrap();
        }
        prop_assert_eq!(repo.len(), symbols.len());

        let mut kept = HashSet::new();
        for (sym, &del) in symbols.iter().zip(&delete_mask) {
            if del {
                let removed = repo.delete(&sym.to_lowercase()).unwrap();
                prop_assert_eq!(removed.symbol(), sym.as_str());
            } else {
                kept.insert(sym.clone());
            }
        }
        prop_assert_eq!(repo.len(), kept.len());
        for sym in &symbols {
            prop_assert_eq!(repo.get(sym).is_some(), kept.contains(sym));
            if let Some(s) = repo.get(&sym.to_lowercase()) {
                prop_assert_eq!(s.symbol(), sym.as_str());
            }
        }
        let order: Vec<String> = repo.all().iter().map(|s| s.symbol().to_string()).collect();
        let expected: Vec<String> = symbols.iter().filter(|s| kept.contains(*s)).cloned().collect();
        prop_assert_eq!(order, expected);
    }
}
