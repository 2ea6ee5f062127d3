//! The closed set of category flag columns carried by the curated dataset.

/// Every category column starts with this prefix.
pub const CATEGORY_PREFIX: &str = "Category_";

/// The dataset's category flag columns, in dataset column order. The names
/// must match the CSV headers byte-for-byte, spaces and slashes included.
pub const CATEGORY_COLUMNS: [&str; 18] = [
    "Category_ATV",
    "Category_Allround",
    "Category_Classic",
    "Category_Cross / motocross",
    "Category_Custom / cruiser",
    "Category_Enduro / offroad",
    "Category_Minibike, cross",
    "Category_Minibike, sport",
    "Category_Naked bike",
    "Category_Prototype / concept model",
    "Category_Scooter",
    "Category_Speedway",
    "Category_Sport",
    "Category_Sport touring",
    "Category_Super motard",
    "Category_Touring",
    "Category_Trial",
    "Category_Unspecified category",
];

/// Number of category flags per record.
pub const CATEGORY_COUNT: usize = CATEGORY_COLUMNS.len();

/// Index of the flag column named `Category_{name}`, if `name` is one of
/// the recognized category labels. The match is exact; an empty or unknown
/// name selects nothing.
pub fn category_index(name: &str) -> Option<usize> {
    CATEGORY_COLUMNS
        .iter()
        .position(|col| col.strip_prefix(CATEGORY_PREFIX) == Some(name))
}
