//! Built-in region and city table
//!
//! Spreads are percentage adjustments from the MCX reference price quoted in
//! Mumbai. Positive values are a local premium, negative a discount.

use super::{CityEntry, RegionEntry};
use rust_decimal_macros::dec;

macro_rules! city {
    ($name:literal, $spread:expr) => {
        CityEntry {
            name: $name,
            spread: $spread,
        }
    };
}

/// Regions in selector order: grouped by geography, not alphabetical
pub static REGIONS: &[RegionEntry] = &[
    RegionEntry {
        name: "Maharashtra",
        cities: &[
            city!("Mumbai", dec!(0.0)),
            city!("Pune", dec!(0.10)),
            city!("Nagpur", dec!(0.15)),
            city!("Nashik", dec!(0.12)),
            city!("Aurangabad", dec!(0.18)),
        ],
    },
    RegionEntry {
        name: "Delhi NCR",
        cities: &[
            city!("Delhi", dec!(0.05)),
            city!("Noida", dec!(0.08)),
            city!("Gurgaon", dec!(0.08)),
            city!("Ghaziabad", dec!(0.10)),
            city!("Faridabad", dec!(0.12)),
        ],
    },
    RegionEntry {
        name: "Karnataka",
        cities: &[
            city!("Bangalore", dec!(0.08)),
            city!("Mysore", dec!(0.20)),
            city!("Mangalore", dec!(0.25)),
            city!("Hubli", dec!(0.22)),
        ],
    },
    RegionEntry {
        name: "Tamil Nadu",
        cities: &[
            // High competition keeps Chennai under the reference price
            city!("Chennai", dec!(-0.10)),
            city!("Coimbatore", dec!(0.15)),
            city!("Madurai", dec!(0.18)),
            city!("Salem", dec!(0.20)),
            city!("Tiruchirappalli", dec!(0.19)),
        ],
    },
    RegionEntry {
        name: "West Bengal",
        cities: &[
            city!("Kolkata", dec!(0.12)),
            city!("Siliguri", dec!(0.28)),
            city!("Durgapur", dec!(0.25)),
        ],
    },
    RegionEntry {
        name: "Telangana",
        cities: &[
            city!("Hyderabad", dec!(0.10)),
            city!("Warangal", dec!(0.22)),
            city!("Nizamabad", dec!(0.25)),
        ],
    },
    RegionEntry {
        name: "Gujarat",
        cities: &[
            city!("Ahmedabad", dec!(0.05)),
            city!("Surat", dec!(0.08)),
            city!("Vadodara", dec!(0.12)),
            city!("Rajkot", dec!(0.15)),
        ],
    },
    RegionEntry {
        name: "Rajasthan",
        cities: &[
            city!("Jaipur", dec!(0.20)),
            city!("Udaipur", dec!(0.25)),
            city!("Jodhpur", dec!(0.22)),
            city!("Kota", dec!(0.23)),
        ],
    },
    RegionEntry {
        name: "Uttar Pradesh",
        cities: &[
            city!("Lucknow", dec!(0.15)),
            city!("Kanpur", dec!(0.18)),
            city!("Agra", dec!(0.20)),
            city!("Varanasi", dec!(0.22)),
            city!("Meerut", dec!(0.17)),
        ],
    },
    RegionEntry {
        name: "Punjab",
        cities: &[
            city!("Chandigarh", dec!(0.18)),
            city!("Ludhiana", dec!(0.20)),
            city!("Amritsar", dec!(0.22)),
            city!("Jalandhar", dec!(0.21)),
        ],
    },
    RegionEntry {
        name: "Madhya Pradesh",
        cities: &[
            city!("Bhopal", dec!(0.20)),
            city!("Indore", dec!(0.18)),
            city!("Gwalior", dec!(0.22)),
            city!("Jabalpur", dec!(0.24)),
        ],
    },
    RegionEntry {
        name: "Kerala",
        cities: &[
            city!("Kochi", dec!(0.15)),
            city!("Thiruvananthapuram", dec!(0.18)),
            city!("Kozhikode", dec!(0.20)),
            city!("Thrissur", dec!(0.22)),
        ],
    },
    RegionEntry {
        name: "Odisha",
        cities: &[
            city!("Bhubaneswar", dec!(0.25)),
            city!("Cuttack", dec!(0.27)),
            city!("Rourkela", dec!(0.30)),
        ],
    },
    RegionEntry {
        name: "Bihar",
        cities: &[
            city!("Patna", dec!(0.22)),
            city!("Gaya", dec!(0.28)),
            city!("Bhagalpur", dec!(0.30)),
        ],
    },
    RegionEntry {
        name: "Jharkhand",
        cities: &[
            city!("Ranchi", dec!(0.25)),
            city!("Jamshedpur", dec!(0.27)),
            city!("Dhanbad", dec!(0.28)),
        ],
    },
    RegionEntry {
        name: "Assam",
        cities: &[
            city!("Guwahati", dec!(0.35)),
            city!("Silchar", dec!(0.40)),
            city!("Dibrugarh", dec!(0.42)),
        ],
    },
    RegionEntry {
        name: "Uttarakhand",
        cities: &[
            city!("Dehradun", dec!(0.20)),
            city!("Haridwar", dec!(0.22)),
            city!("Roorkee", dec!(0.24)),
        ],
    },
    RegionEntry {
        name: "Himachal Pradesh",
        cities: &[
            city!("Shimla", dec!(0.28)),
            city!("Dharamshala", dec!(0.30)),
            city!("Manali", dec!(0.35)),
        ],
    },
    RegionEntry {
        name: "Jammu & Kashmir",
        cities: &[city!("Srinagar", dec!(0.30)), city!("Jammu", dec!(0.25))],
    },
    RegionEntry {
        name: "Goa",
        cities: &[city!("Panaji", dec!(0.12)), city!("Margao", dec!(0.15))],
    },
    RegionEntry {
        name: "Andhra Pradesh",
        cities: &[
            city!("Visakhapatnam", dec!(0.20)),
            city!("Vijayawada", dec!(0.18)),
            city!("Guntur", dec!(0.22)),
            city!("Tirupati", dec!(0.19)),
        ],
    },
    RegionEntry {
        name: "Haryana",
        cities: &[
            city!("Panipat", dec!(0.15)),
            city!("Karnal", dec!(0.18)),
            city!("Ambala", dec!(0.20)),
        ],
    },
    RegionEntry {
        name: "Chhattisgarh",
        cities: &[
            city!("Raipur", dec!(0.25)),
            city!("Bhilai", dec!(0.27)),
            city!("Bilaspur", dec!(0.28)),
        ],
    },
];
