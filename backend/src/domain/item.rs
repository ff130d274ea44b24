//! Shopping-list item entity and the field set used to create or overwrite it.

use serde::{Deserialize, Serialize};

/// A single entry on the shopping list.
///
/// Either field may be absent: creation accepts an item carrying only one of
/// the two, and an update overwrites both fields with whatever the caller
/// supplied. Absent fields are omitted from the JSON representation.
///
/// ## Invariants
/// - No uniqueness is enforced on `name`; lookups return the first match in
///   insertion order.
///
/// # Examples
/// ```
/// use shopping_list::domain::{Item, ItemFields};
///
/// let item = Item::from(ItemFields::new("Bounty", 1.5));
/// assert!(item.has_name("Bounty"));
/// assert!(!item.has_name("bounty"));
/// assert_eq!(item.price(), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
}

impl Item {
    /// Item name, if one is set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Item price, if one is set.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Exact, case-sensitive comparison against the lookup key.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Overwrite both fields unconditionally.
    pub fn overwrite(&mut self, fields: ItemFields) {
        let ItemFields { name, price } = fields;
        self.name = name;
        self.price = price;
    }
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        let ItemFields { name, price } = fields;
        Self { name, price }
    }
}

/// Caller-supplied `name`/`price` pair for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Requested item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Requested item price.
    #[serde(default)]
    pub price: Option<f64>,
}

impl ItemFields {
    /// Build a field set with both values present.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// True when neither field carries a usable value.
    ///
    /// An empty name and a zero price count as unusable. Supplying only one
    /// usable field is enough to pass.
    pub fn is_blank(&self) -> bool {
        let name_missing = self.name.as_deref().is_none_or(str::is_empty);
        let price_missing = self.price.is_none_or(|price| price == 0.0);
        name_missing && price_missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ItemFields::default(), true)]
    #[case(ItemFields { name: Some(String::new()), price: Some(0.0) }, true)]
    #[case(ItemFields { name: Some("Avocado".into()), price: None }, false)]
    #[case(ItemFields { name: None, price: Some(2.0) }, false)]
    #[case(ItemFields { name: Some(String::new()), price: Some(0.5) }, false)]
    #[case(ItemFields::new("Avocado", 1.0), false)]
    fn blank_only_when_both_fields_unusable(#[case] fields: ItemFields, #[case] blank: bool) {
        assert_eq!(fields.is_blank(), blank);
    }

    #[test]
    fn overwrite_clears_omitted_fields() {
        let mut item = Item::from(ItemFields::new("Bounty", 1.5));
        item.overwrite(ItemFields {
            name: Some("bountyYYY".into()),
            price: None,
        });
        assert_eq!(item.name(), Some("bountyYYY"));
        assert_eq!(item.price(), None);
    }

    #[test]
    fn serialises_without_absent_fields() {
        let item = Item::from(ItemFields {
            name: Some("Avocado".into()),
            price: None,
        });
        let value = serde_json::to_value(&item).expect("serialise item");
        assert_eq!(value, json!({ "name": "Avocado" }));
    }

    #[test]
    fn fields_accept_missing_keys() {
        let fields: ItemFields = serde_json::from_value(json!({})).expect("parse fields");
        assert_eq!(fields, ItemFields::default());
    }
}
