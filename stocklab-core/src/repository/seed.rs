//! Bundled NEPSE sample data.

use crate::domain::NewStock;

/// Change-percent values applied to the first sample stocks, in order.
pub const SAMPLE_CHANGE_OVERRIDES: [f64; 10] =
    [2.50, -1.80, 0.50, -0.30, 1.20, 3.50, -2.10, 1.80, -0.90, 2.30];

#[rustfmt::skip]
const SAMPLE: [(&str, &str, &str, f64, f64, u64, i32); 15] = [
    ("NABIL",  "Nabil Bank Limited",      "Commercial Bank",    1250.0, 50_000_000_000.0, 125_000, 1984),
    ("NICA",   "NIC Asia Bank Limited",   "Commercial Bank",     850.0, 35_000_000_000.0,  89_000, 1998),
    ("SBL",    "Siddhartha Bank Limited", "Commercial Bank",     420.0, 18_000_000_000.0,  65_000, 2002),
    ("GBIME",  "Global IME Bank Limited", "Commercial Bank",     385.0, 42_000_000_000.0,  78_000, 2007),
    ("SANIMA", "Sanima Bank Limited",     "Commercial Bank",     410.0, 25_000_000_000.0,  45_000, 2004),
    ("LBBL",   "Lumbini Bikas Bank",      "Development Bank",    480.0,  8_000_000_000.0,  35_000, 2005),
    ("MNBBL",  "Muktinath Bikas Bank",    "Development Bank",    520.0, 12_000_000_000.0,  42_000, 2007),
    ("NHPC",   "Nepal Hydro Power",       "Hydropower",          680.0, 15_000_000_000.0,  55_000, 1996),
    ("CHCL",   "Chilime Hydropower",      "Hydropower",          720.0, 22_000_000_000.0,  68_000, 2003),
    ("AKPL",   "Arun Kabeli Power",       "Hydropower",          385.0,  5_000_000_000.0,  25_000, 2010),
    ("UPPER",  "Upper Tamakoshi",         "Hydropower",          580.0, 35_000_000_000.0,  85_000, 2011),
    ("NLIC",   "Nepal Life Insurance",    "Life Insurance",     1850.0, 28_000_000_000.0,  95_000, 2001),
    ("SICL",   "Shikhar Insurance",       "Non-Life Insurance",  920.0, 12_000_000_000.0,  48_000, 2004),
    ("NTC",    "Nepal Telecom",           "Trading",             850.0, 85_000_000_000.0, 150_000, 1995),
    ("NRIC",   "Nepal Reinsurance",       "Insurance",          1200.0, 18_000_000_000.0,  62_000, 2015),
];

/// The 15 sample stocks in listing order.
pub fn sample_stocks() -> Vec<NewStock> {
    SAMPLE
        .iter()
        .map(|&(symbol, name, sector, price, market_cap, volume, year)| {
            NewStock::new(symbol, name, sector, price)
                .market_cap(market_cap)
                .volume(volume)
                .year_listed(year)
        })
        .collect()
}
